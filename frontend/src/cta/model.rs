use std::cell::Cell;
use std::fmt;

use serde::Serialize;
use yew::AttrValue;

/// Modal kind the contact form listens for.
pub const CONTACT_MODAL: &str = "contact";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CtaRole {
    #[default]
    Primary,
    Secondary,
    Floating,
}

impl CtaRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CtaRole::Primary => "primary",
            CtaRole::Secondary => "secondary",
            CtaRole::Floating => "floating",
        }
    }
}

/// What a CTA does when activated. The payload carries the target, so a
/// descriptor can't pair a phone action with a URL.
#[derive(Clone, Debug, PartialEq)]
pub enum CtaAction {
    OpenModal(AttrValue),
    OpenExternal(AttrValue),
    OpenChat(AttrValue),
    DialPhone(AttrValue),
    Navigate(AttrValue),
}

impl CtaAction {
    /// Tag used in analytics payloads and `data-cta-action`.
    pub fn kind(&self) -> &'static str {
        match self {
            CtaAction::OpenModal(_) => "modal",
            CtaAction::OpenExternal(_) => "external",
            CtaAction::OpenChat(_) => "whatsapp",
            CtaAction::DialPhone(_) => "phone",
            CtaAction::Navigate(_) => "internal",
        }
    }

    pub fn target(&self) -> &AttrValue {
        match self {
            CtaAction::OpenModal(target)
            | CtaAction::OpenExternal(target)
            | CtaAction::OpenChat(target)
            | CtaAction::DialPhone(target)
            | CtaAction::Navigate(target) => target,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CtaVariant {
    #[default]
    Default,
    Gradient,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CtaSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl CtaVariant {
    pub fn class(&self) -> &'static str {
        match self {
            CtaVariant::Default => "cta-default",
            CtaVariant::Gradient => "cta-gradient",
            CtaVariant::Outline => "cta-outline",
            CtaVariant::Ghost => "cta-ghost",
        }
    }
}

impl CtaSize {
    pub fn class(&self) -> &'static str {
        match self {
            CtaSize::Sm => "cta-sm",
            CtaSize::Md => "cta-md",
            CtaSize::Lg => "cta-lg",
            CtaSize::Xl => "cta-xl",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CtaDescriptor {
    pub id: AttrValue,
    pub role: CtaRole,
    pub label: AttrValue,
    pub action: CtaAction,
    pub section: AttrValue,
    pub urgent: bool,
    pub variant: CtaVariant,
    pub size: CtaSize,
}

impl CtaDescriptor {
    pub fn new(id: impl Into<AttrValue>, label: impl Into<AttrValue>, action: CtaAction) -> Self {
        Self {
            id: id.into(),
            role: CtaRole::default(),
            label: label.into(),
            action,
            section: AttrValue::Static("global"),
            urgent: false,
            variant: CtaVariant::default(),
            size: CtaSize::default(),
        }
    }

    pub fn role(mut self, role: CtaRole) -> Self {
        self.role = role;
        self
    }

    pub fn section(mut self, section: impl Into<AttrValue>) -> Self {
        self.section = section.into();
        self
    }
}

/// Payload of a tracked click, broadcast on the page event bus.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaEvent {
    pub cta_id: String,
    pub action: &'static str,
    pub section: String,
    pub timestamp: i64,
    pub user_agent: String,
}

impl fmt::Display for CtaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] in {} at {}", self.cta_id, self.action, self.section, self.timestamp)
    }
}

thread_local! {
    static NEXT_CTA_ID: Cell<u32> = Cell::new(1);
}

/// Hands out `cta-<n>` ids for buttons that weren't given one.
pub fn next_cta_id() -> AttrValue {
    NEXT_CTA_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        AttrValue::from(format!("cta-{}", id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_kind_and_target() {
        let action = CtaAction::DialPhone("+5582999532934".into());
        assert_eq!(action.kind(), "phone");
        assert_eq!(action.target().as_str(), "+5582999532934");
        assert_eq!(CtaAction::Navigate("/x".into()).kind(), "internal");
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = next_cta_id();
        let b = next_cta_id();
        assert_ne!(a, b);
        assert!(a.starts_with("cta-"));
    }

    #[test]
    fn descriptor_defaults_to_global_section() {
        let descriptor = CtaDescriptor::new("x", "X", CtaAction::OpenModal(CONTACT_MODAL.into()));
        assert_eq!(descriptor.section.as_str(), "global");
        assert_eq!(descriptor.role, CtaRole::Primary);
    }

    #[test]
    fn event_serializes_camel_case() {
        let event = CtaEvent {
            cta_id: "cta-phone".into(),
            action: "phone",
            section: "home-cta".into(),
            timestamp: 1,
            user_agent: "test".into(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["ctaId"], "cta-phone");
        assert_eq!(value["userAgent"], "test");
    }
}
