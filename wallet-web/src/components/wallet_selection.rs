//! Wallet picker shown while no wallet is connected

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::ConnectOutcome;
use shared::WalletInfo;

use crate::state::AppState;

#[component]
pub fn WalletSelection(state: AppState) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (connecting, set_connecting) = signal(None::<String>);

    let connect = move |wallet_id: String| {
        set_connecting.set(Some(wallet_id.clone()));
        spawn_local(async move {
            let notice = match state.connect(wallet_id.clone()).await {
                Ok(ConnectOutcome::Connected) => {
                    set_open.set(false);
                    None
                }
                Ok(ConnectOutcome::NoExtensions) => {
                    Some("No Polkadot wallet extension found. Install one to continue.".to_string())
                }
                Ok(ConnectOutcome::Unavailable) => Some(format!("{} is not installed", wallet_id)),
                Ok(ConnectOutcome::Cancelled) => None,
                Err(e) => {
                    e.report();
                    Some(e.user_message())
                }
            };
            state.notice.set(notice);
            set_connecting.set(None);
        });
    };

    let wallet_row = move |wallet: WalletInfo| {
        let label = wallet.label.clone();
        let icon = wallet
            .icon
            .clone()
            .map(|icon| view! { <img src=icon width="20" height="20" alt="" style="vertical-align: middle; margin-right: 8px;"/> });
        if wallet.installed {
            let id = wallet.id.clone();
            let busy_id = wallet.id.clone();
            view! {
                <button
                    class="btn"
                    style="width: 100%; margin-bottom: 8px;"
                    disabled=move || connecting.get().is_some()
                    on:click=move |_| connect(id.clone())
                >
                    {icon}
                    {move || {
                        if connecting.get().as_deref() == Some(busy_id.as_str()) {
                            format!("Connecting to {}...", label)
                        } else {
                            label.clone()
                        }
                    }}
                </button>
            }
            .into_any()
        } else {
            let href = wallet.url.clone().unwrap_or_default();
            view! {
                <a class="btn" href=href target="_blank" rel="noopener noreferrer"
                    style="width: 100%; margin-bottom: 8px; display: block; text-align: center; text-decoration: none; opacity: 0.7;">
                    {icon}
                    {format!("Install {}", label)}
                </a>
            }
            .into_any()
        }
    };

    view! {
        <div style="position: relative;">
            <button class="btn" on:click=move |_| set_open.update(|o| *o = !*o)>
                "Connect Wallet"
            </button>
            <Show when=move || open.get()>
                <div class="card" style="position: absolute; right: 0; top: 48px; width: 280px; z-index: 10;">
                    <h3 class="card-title" style="margin-bottom: 12px;">"Select a wallet"</h3>
                    {move || state.available_wallets().into_iter().map(wallet_row).collect_view()}
                    {move || {
                        state
                            .notice
                            .get()
                            .map(|notice| view! { <p style="color: var(--bg-error); margin-top: 8px;">{notice}</p> })
                    }}
                </div>
            </Show>
        </div>
    }
}
