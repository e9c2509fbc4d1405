//! Fund on Hydra Page - sends `create_pop_to_hydra_xcm` to a contract

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::FundForm;

use crate::state::AppState;
use crate::utils::alert::alert;
use crate::utils::constants::FUND_FAILED;

#[component]
pub fn HomePage(state: AppState) -> impl IntoView {
    let (contract_address, set_contract_address) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let form = move || FundForm {
        contract_address: contract_address.get(),
        amount: amount.get(),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = FundForm {
            contract_address: contract_address.get_untracked(),
            amount: amount.get_untracked(),
        };
        set_submitting.set(true);

        spawn_local(async move {
            match state.fund(form.clone()).await {
                Ok(outcome) => {
                    log::info!("Fund transaction {} included", outcome.tx_hash);
                    alert(&format!("Contract funded successfully with {} tokens!", form.amount.trim()));
                    set_amount.set(String::new());
                }
                Err(e) if e.is_precondition() => alert(&e.user_message()),
                Err(_) => alert(FUND_FAILED),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 500px; padding: var(--spacing-xl);">
                <h1 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                    "Fund on Hydra"
                </h1>
                <p style="text-align: center; color: var(--text-secondary); margin-bottom: var(--spacing-lg);">
                    {move || match state.selected_account() {
                        Some(account) => format!("Signing as {}", account.display_name()),
                        None => "Connect a wallet and select an account to continue".to_string(),
                    }}
                </p>

                <form on:submit=on_submit>
                    <label style="display: block; color: var(--text-secondary); margin-bottom: var(--spacing-sm);">
                        "Contract address"
                    </label>
                    <input
                        type="text"
                        class="input"
                        style="width: 100%; margin-bottom: var(--spacing-md); font-family: monospace;"
                        placeholder="5..."
                        prop:value=move || contract_address.get()
                        on:input=move |ev| set_contract_address.set(event_target_value(&ev))
                    />

                    <label style="display: block; color: var(--text-secondary); margin-bottom: var(--spacing-sm);">
                        {move || format!("Amount ({})", state.network().symbol)}
                    </label>
                    <input
                        type="text"
                        inputmode="numeric"
                        class="input"
                        style="width: 100%; margin-bottom: var(--spacing-lg);"
                        placeholder="0"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />

                    <button
                        type="submit"
                        class="btn"
                        style="width: 100%;"
                        disabled=move || submitting.get() || !form().looks_submittable()
                    >
                        {move || if submitting.get() { "Funding..." } else { "Fund Contract" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
