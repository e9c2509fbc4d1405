//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use super::{AccountMenu, WalletSelection};
use crate::state::AppState;

#[component]
pub fn Navbar(state: AppState) -> impl IntoView {
    let app_name = state.app_name();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <div style="display: flex; gap: 24px; align-items: center;">
                    <A href="/">
                        <span class="nav-title">{app_name}</span>
                    </A>
                    <A href="/status">
                        <span class="nav-link-clean">"Status"</span>
                    </A>
                </div>
                {move || {
                    if state.is_connected() {
                        view! { <AccountMenu state=state/> }.into_any()
                    } else {
                        view! { <WalletSelection state=state/> }.into_any()
                    }
                }}
            </div>
        </nav>
    }
}
