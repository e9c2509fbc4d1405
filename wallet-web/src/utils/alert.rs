//! Blocking `window.alert` used for fund results

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window to show alert: {}", message);
        return;
    };
    if window.alert_with_message(message).is_err() {
        log::warn!("Alert suppressed: {}", message);
    }
}
