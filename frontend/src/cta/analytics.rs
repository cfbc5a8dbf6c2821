use serde::Serialize;

use super::model::CtaDescriptor;

/// Events handed to `gtag('event', name, params)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyticsEvent {
    CtaClick {
        cta_id: String,
        cta_type: &'static str,
        cta_action: &'static str,
        cta_section: String,
        cta_label: String,
    },
    ModalOpen {
        modal_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cta_id: Option<String>,
        timestamp: i64,
    },
    Conversion {
        send_to: String,
        value: f64,
        currency: &'static str,
    },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::CtaClick { .. } => "cta_click",
            AnalyticsEvent::ModalOpen { .. } => "modal_open",
            AnalyticsEvent::Conversion { .. } => "conversion",
        }
    }

    pub fn cta_click(descriptor: &CtaDescriptor) -> Self {
        AnalyticsEvent::CtaClick {
            cta_id: descriptor.id.to_string(),
            cta_type: descriptor.role.as_str(),
            cta_action: descriptor.action.kind(),
            cta_section: descriptor.section.to_string(),
            cta_label: descriptor.label.to_string(),
        }
    }

    pub fn conversion(send_to: &str) -> Self {
        AnalyticsEvent::Conversion {
            send_to: send_to.to_string(),
            value: 1.0,
            currency: "BRL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cta::model::{CtaAction, CtaRole};

    #[test]
    fn click_params_use_gtag_field_names() {
        let descriptor = CtaDescriptor::new("cta-whatsapp", "WhatsApp", CtaAction::OpenChat("oi".into()))
            .role(CtaRole::Secondary)
            .section("home-cta");
        let event = AnalyticsEvent::cta_click(&descriptor);
        assert_eq!(event.name(), "cta_click");

        let params = serde_json::to_value(&event).unwrap();
        assert_eq!(params["cta_id"], "cta-whatsapp");
        assert_eq!(params["cta_type"], "secondary");
        assert_eq!(params["cta_action"], "whatsapp");
        assert_eq!(params["cta_section"], "home-cta");
        assert_eq!(params["cta_label"], "WhatsApp");
    }

    #[test]
    fn conversion_is_fixed_value_in_brl() {
        let params = serde_json::to_value(AnalyticsEvent::conversion("AW-1/L")).unwrap();
        assert_eq!(params["send_to"], "AW-1/L");
        assert_eq!(params["value"], 1.0);
        assert_eq!(params["currency"], "BRL");
    }

    #[test]
    fn modal_open_omits_missing_origin() {
        let event = AnalyticsEvent::ModalOpen {
            modal_type: "contact".into(),
            cta_id: None,
            timestamp: 5,
        };
        let params = serde_json::to_value(&event).unwrap();
        assert!(params.get("cta_id").is_none());
        assert_eq!(params["modal_type"], "contact");
    }
}
