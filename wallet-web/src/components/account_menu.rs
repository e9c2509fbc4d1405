//! Account menu shown while a wallet is connected

use leptos::prelude::*;
use shared::Account;

use crate::state::AppState;

#[component]
pub fn AccountMenu(state: AppState) -> impl IntoView {
    let (open, set_open) = signal(false);

    let account_row = move |account: Account| {
        let address = account.address.clone();
        let balance_address = account.address.clone();
        let is_selected = {
            let address = account.address.clone();
            move || state.selected_account().is_some_and(|a| a.address == address)
        };

        view! {
            <button
                class="account-row"
                class:selected=is_selected
                style="width: 100%; text-align: left; margin-bottom: 6px;"
                on:click=move |_| {
                    match state.select_account(&address) {
                        Ok(()) => set_open.set(false),
                        Err(e) => e.report(),
                    }
                }
            >
                <div style="font-weight: 600;">{account.display_name()}</div>
                <div style="font-family: monospace; font-size: 0.85em; color: var(--text-secondary);">
                    {shared::truncate_address(&account.address)}
                </div>
                <div style="font-size: 0.85em;">{move || state.balance_of(&balance_address)}</div>
            </button>
        }
    };

    let on_sign_out = move |_| {
        set_open.set(false);
        if let Err(e) = state.sign_out() {
            e.report();
        }
    };

    view! {
        <div style="position: relative;">
            <button class="btn" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || {
                    state
                        .selected_account()
                        .map(|a| a.display_name())
                        .unwrap_or_else(|| "No account".to_string())
                }}
            </button>
            <Show when=move || open.get()>
                <div class="card" style="position: absolute; right: 0; top: 48px; width: 300px; z-index: 10;">
                    <p style="color: var(--text-secondary); margin-bottom: 8px; display: flex; gap: 8px; align-items: center;">
                        {move || {
                            state
                                .wallet_icon()
                                .map(|icon| view! { <img src=icon width="20" height="20" alt=""/> })
                        }}
                        {move || state.wallet_label().unwrap_or_default()}
                    </p>
                    {move || state.accounts().into_iter().map(account_row).collect_view()}
                    <button class="btn" style="width: 100%; background: var(--bg-error);" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
