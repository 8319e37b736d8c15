//! Blocking user alert.
//!
//! Uses `window.alert`; native builds only log the message.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Show `message` in a blocking alert dialog.
pub fn show(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("no window for alert: {message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}
