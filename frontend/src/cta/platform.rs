use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{window, CustomEvent};

use super::analytics::AnalyticsEvent;
use super::model::CtaEvent;

pub const CTA_CLICK_EVENT: &str = "ctaClick";

/// The browser effects the CTA layer needs. Everything above this trait is
/// plain Rust and runs without a DOM.
pub trait Platform {
    fn now_ms(&self) -> i64;
    fn user_agent(&self) -> String;
    fn send_analytics(&self, event: &AnalyticsEvent);
    fn broadcast(&self, event: &CtaEvent);
    fn open_window(&self, url: &str);
    fn set_location(&self, href: &str);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = gtag)]
    fn gtag(command: &str, name: &str, params: JsValue) -> Result<(), JsValue>;
}

pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    fn user_agent(&self) -> String {
        window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default()
    }

    fn send_analytics(&self, event: &AnalyticsEvent) {
        let params = match serde_wasm_bindgen::to_value(event) {
            Ok(params) => params,
            Err(e) => {
                warn!("Could not encode {} params: {}", event.name(), e);
                return;
            }
        };
        // gtag is missing when the script is blocked; that's fine.
        if gtag("event", event.name(), params).is_err() {
            debug!("gtag unavailable, dropped {}", event.name());
        }
    }

    fn broadcast(&self, event: &CtaEvent) {
        let Some(window) = window() else { return };
        let detail = match serde_wasm_bindgen::to_value(event) {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Could not encode {} detail: {}", CTA_CLICK_EVENT, e);
                return;
            }
        };
        if let Ok(custom) = CustomEvent::new(CTA_CLICK_EVENT) {
            custom.init_custom_event_with_can_bubble_and_cancelable_and_detail(
                CTA_CLICK_EVENT,
                false,
                false,
                &detail,
            );
            let _ = window.dispatch_event(&custom);
        }
    }

    fn open_window(&self, url: &str) {
        if let Some(window) = window() {
            let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
        }
    }

    fn set_location(&self, href: &str) {
        if let Some(window) = window() {
            let _ = window.location().set_href(href);
        }
    }
}
