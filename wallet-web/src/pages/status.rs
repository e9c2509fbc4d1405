//! Wallet Status Page - Show connected wallet info

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lib_utils::format_time;

use crate::state::AppState;

#[component]
pub fn StatusPage(state: AppState) -> impl IntoView {
    let navigate = use_navigate();

    let on_disconnect = move |_| {
        if let Err(e) = state.sign_out() {
            e.report();
        }
        navigate("/", Default::default());
    };

    let connected_at = move || {
        state
            .connector
            .with(|c| c.session().map(|s| format_time(s.connected_at())))
            .unwrap_or_default()
    };

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 500px; padding: var(--spacing-xl); border: 1px solid #333333;">
                <h1 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                    "Wallet Status"
                </h1>

                {move || {
                    let disconnect = on_disconnect.clone();
                    let network = state.network();

                    if state.is_connected() {
                        let address = state
                            .selected_account()
                            .map(|a| a.address)
                            .unwrap_or_else(|| "No account selected".to_string());

                        view! {
                            <div>
                                <div style="background: var(--bg-card); padding: var(--spacing-lg); border-radius: var(--border-radius); border: 1px solid var(--border-color); margin-bottom: var(--spacing-lg);">
                                    <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Wallet"</p>
                                    <p style="color: var(--price-up); font-weight: bold; margin-bottom: var(--spacing-lg);">
                                        {state.wallet_label().unwrap_or_default()}
                                    </p>

                                    <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Connected since"</p>
                                    <p style="margin-bottom: var(--spacing-lg);">{connected_at()}</p>

                                    <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Account"</p>
                                    <p style="font-family: monospace; color: var(--text-primary); word-break: break-all; font-size: 0.9em; margin-bottom: var(--spacing-lg);">
                                        {address}
                                    </p>

                                    <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Network"</p>
                                    <p>{format!("{} ({})", network.name, network.endpoints.join(", "))}</p>
                                </div>

                                <button
                                    class="btn"
                                    style="width: 100%; background: var(--bg-error);"
                                    on:click=disconnect
                                >
                                    "Disconnect Wallet"
                                </button>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div>
                                <p style="text-align: center; color: var(--text-secondary); margin-bottom: var(--spacing-lg);">
                                    "No wallet connected"
                                </p>
                                <p style="text-align: center; color: var(--text-secondary);">
                                    {format!("Network: {}", network.name)}
                                </p>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
