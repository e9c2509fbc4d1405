//! Hydra Playground - Leptos Frontend
//!
//! Owns the application state and wires the periodic refresh loop.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use lib_core::Config;

use crate::components::Navbar;
use crate::pages::{HomePage, StatusPage};
use crate::state::AppState;
use crate::utils::constants::BALANCE_REFRESH_MS;

#[component]
pub fn App() -> impl IntoView {
    let config = Config::load().unwrap_or_else(|e| {
        log::error!("Invalid configuration, using defaults: {}", e);
        Config::default()
    });

    match AppState::new(config) {
        Ok(state) => view! { <Shell state=state/> }.into_any(),
        Err(e) => {
            log::error!("Cannot start: {}", e);
            view! { <ConfigError message=e.to_string()/> }.into_any()
        }
    }
}

#[component]
fn Shell(state: AppState) -> impl IntoView {
    state.restore_on_load();

    // Balances follow the candidate list
    let addresses = Memo::new(move |_| {
        state
            .accounts()
            .into_iter()
            .map(|a| a.address)
            .collect::<Vec<_>>()
    });
    Effect::new(move |_| {
        addresses.track();
        state.refresh_balances();
    });

    spawn_local(async move {
        loop {
            TimeoutFuture::new(BALANCE_REFRESH_MS).await;
            state.check_extension();
            state.refresh_balances();
        }
    });

    view! {
        <Router>
            <div class="app-container">
                <Navbar state=state/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=move || view! { <HomePage state=state/> }/>
                    <Route path=path!("/status") view=move || view! { <StatusPage state=state/> }/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: 100vh;">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 28px; font-weight: 700;">"Configuration error"</h1>
                <p style="color: #cccccc; font-family: monospace;">{message}</p>
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: #cccccc; margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
