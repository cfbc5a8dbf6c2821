use std::rc::Rc;

use log::info;
use yew::prelude::*;

use super::analytics::AnalyticsEvent;
use super::links;
use super::model::{CtaAction, CtaDescriptor, CtaEvent};
use super::platform::{BrowserPlatform, Platform};
use crate::config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    pub open: bool,
    pub kind: Option<AttrValue>,
}

pub enum ModalAction {
    Open(AttrValue),
    Close,
}

impl ModalState {
    /// Opening replaces whatever kind was there; there is no queue.
    pub fn apply(&self, action: ModalAction) -> Self {
        match action {
            ModalAction::Open(kind) => ModalState {
                open: true,
                kind: Some(kind),
            },
            ModalAction::Close => ModalState::default(),
        }
    }

    pub fn is_open_for(&self, kind: &str) -> bool {
        self.open && self.kind.as_deref() == Some(kind)
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// The single side effect a CTA activation resolves to.
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch {
    OpenModal { kind: AttrValue, origin: AttrValue },
    OpenWindow(String),
    SetLocation(String),
    Navigate(AttrValue),
}

/// Shared CTA handle, provided once at the root of the view tree.
#[derive(Clone)]
pub struct CtaStore {
    modal: ModalState,
    on_modal: Callback<ModalAction>,
    platform: Rc<dyn Platform>,
    recipient: AttrValue,
}

impl PartialEq for CtaStore {
    fn eq(&self, other: &Self) -> bool {
        self.modal == other.modal
            && self.on_modal == other.on_modal
            && Rc::ptr_eq(&self.platform, &other.platform)
            && self.recipient == other.recipient
    }
}

impl CtaStore {
    pub fn new(
        modal: ModalState,
        on_modal: Callback<ModalAction>,
        platform: Rc<dyn Platform>,
        recipient: AttrValue,
    ) -> Self {
        Self {
            modal,
            on_modal,
            platform,
            recipient,
        }
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn open_modal(&self, kind: AttrValue, origin: Option<&str>) {
        self.platform.send_analytics(&AnalyticsEvent::ModalOpen {
            modal_type: kind.to_string(),
            cta_id: origin.map(str::to_string),
            timestamp: self.platform.now_ms(),
        });
        self.on_modal.emit(ModalAction::Open(kind));
    }

    pub fn close_modal(&self) {
        self.on_modal.emit(ModalAction::Close);
    }

    pub fn track_click(&self, descriptor: &CtaDescriptor) -> CtaEvent {
        let event = CtaEvent {
            cta_id: descriptor.id.to_string(),
            action: descriptor.action.kind(),
            section: descriptor.section.to_string(),
            timestamp: self.platform.now_ms(),
            user_agent: self.platform.user_agent(),
        };

        self.platform.send_analytics(&AnalyticsEvent::cta_click(descriptor));
        self.platform.broadcast(&event);
        info!("CTA click tracked: {}", event);
        event
    }

    pub fn track_conversion(&self) {
        self.platform
            .send_analytics(&AnalyticsEvent::conversion(config::conversion_send_to()));
    }

    pub fn chat_link(&self, message: Option<&str>) -> String {
        links::chat_link(&self.recipient, message)
    }

    pub fn open_url(&self, url: &str) {
        self.platform.open_window(url);
    }

    pub fn plan(&self, descriptor: &CtaDescriptor) -> Dispatch {
        match &descriptor.action {
            CtaAction::OpenModal(kind) => Dispatch::OpenModal {
                kind: kind.clone(),
                origin: descriptor.id.clone(),
            },
            CtaAction::OpenChat(message) => Dispatch::OpenWindow(self.chat_link(Some(message.as_str()))),
            CtaAction::DialPhone(number) => Dispatch::SetLocation(links::tel_uri(number)),
            CtaAction::OpenExternal(url) => Dispatch::OpenWindow(url.to_string()),
            CtaAction::Navigate(path) => Dispatch::Navigate(path.clone()),
        }
    }

    pub fn perform(&self, dispatch: Dispatch) {
        match dispatch {
            Dispatch::OpenModal { kind, origin } => self.open_modal(kind, Some(origin.as_str())),
            Dispatch::OpenWindow(url) => self.platform.open_window(&url),
            Dispatch::SetLocation(href) => self.platform.set_location(&href),
            Dispatch::Navigate(path) => info!("Internal navigation to {} is not wired up", path),
        }
    }

    /// Track then dispatch. Returns `None` when the control is disabled or
    /// loading, in which case nothing is emitted at all.
    pub fn activate(&self, descriptor: &CtaDescriptor, disabled: bool, loading: bool) -> Option<Dispatch> {
        if disabled || loading {
            return None;
        }
        self.track_click(descriptor);
        let dispatch = self.plan(descriptor);
        self.perform(dispatch.clone());
        Some(dispatch)
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CtaProvider)]
pub fn cta_provider(props: &CtaProviderProps) -> Html {
    let modal = use_reducer(ModalState::default);
    let platform = use_state(|| Rc::new(BrowserPlatform) as Rc<dyn Platform>);

    let on_modal = {
        let modal = modal.dispatcher();
        use_callback(move |action: ModalAction, _| modal.dispatch(action), ())
    };

    let store = CtaStore::new(
        (*modal).clone(),
        on_modal,
        (*platform).clone(),
        AttrValue::Static(config::whatsapp_number()),
    );

    html! {
        <ContextProvider<CtaStore> context={store}>
            { for props.children.iter() }
        </ContextProvider<CtaStore>>
    }
}

/// The store from the nearest `CtaProvider`.
#[hook]
pub fn use_cta() -> CtaStore {
    use_context::<CtaStore>().expect("use_cta called outside of CtaProvider")
}

/// Store wired to a `RecordingPlatform`, with modal actions applied to a
/// shared `ModalState` the way the provider's reducer would.
#[cfg(test)]
pub(crate) fn recording_store() -> (
    CtaStore,
    Rc<super::platform::testing::RecordingPlatform>,
    Rc<std::cell::RefCell<ModalState>>,
) {
    let platform = Rc::new(super::platform::testing::RecordingPlatform::default());
    let modal = Rc::new(std::cell::RefCell::new(ModalState::default()));
    let on_modal = {
        let modal = modal.clone();
        Callback::from(move |action: ModalAction| {
            let next = modal.borrow().apply(action);
            *modal.borrow_mut() = next;
        })
    };
    let store = CtaStore::new(
        ModalState::default(),
        on_modal,
        platform.clone(),
        AttrValue::Static("5582999532934"),
    );
    (store, platform, modal)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::cta::model::{CtaRole, CONTACT_MODAL};
    use crate::cta::platform::testing::{Effect, RecordingPlatform};

    fn store() -> (CtaStore, Rc<RecordingPlatform>, Rc<RefCell<ModalState>>) {
        recording_store()
    }

    fn count(effects: &[Effect], pred: impl Fn(&Effect) -> bool) -> usize {
        effects.iter().filter(|e| pred(e)).count()
    }

    fn is_click(effect: &Effect) -> bool {
        matches!(effect, Effect::Analytics(event) if event.name() == "cta_click")
    }

    #[test]
    fn every_action_tracks_once_and_dispatches_once() {
        let actions = vec![
            CtaAction::OpenModal(CONTACT_MODAL.into()),
            CtaAction::OpenExternal("https://example.com".into()),
            CtaAction::OpenChat("oi".into()),
            CtaAction::DialPhone("+55 82 99953-2934".into()),
            CtaAction::Navigate("/servicos/desenvolvimento-web".into()),
        ];

        for action in actions {
            let (store, platform, modal) = store();
            let descriptor = CtaDescriptor::new("cta-test", "Test", action.clone()).section("s");
            let dispatch = store.activate(&descriptor, false, false).unwrap();
            let effects = platform.take();

            assert_eq!(count(&effects, is_click), 1, "{:?}", action);
            assert_eq!(count(&effects, |e| matches!(e, Effect::Broadcast(_))), 1);

            let windows = count(&effects, |e| matches!(e, Effect::OpenWindow(_)));
            let locations = count(&effects, |e| matches!(e, Effect::SetLocation(_)));
            let modal_opens = count(&effects, |e| {
                matches!(e, Effect::Analytics(event) if event.name() == "modal_open")
            });

            match action {
                CtaAction::OpenModal(_) => {
                    assert!(matches!(dispatch, Dispatch::OpenModal { .. }));
                    assert_eq!((windows, locations, modal_opens), (0, 0, 1));
                    assert!(modal.borrow().is_open_for(CONTACT_MODAL));
                }
                CtaAction::OpenExternal(_) | CtaAction::OpenChat(_) => {
                    assert_eq!((windows, locations, modal_opens), (1, 0, 0));
                }
                CtaAction::DialPhone(_) => {
                    assert_eq!((windows, locations, modal_opens), (0, 1, 0));
                }
                CtaAction::Navigate(_) => {
                    assert!(matches!(dispatch, Dispatch::Navigate(_)));
                    assert_eq!((windows, locations, modal_opens), (0, 0, 0));
                }
            }
        }
    }

    #[test]
    fn phone_dispatch_normalizes_number() {
        let (store, platform, _) = store();
        let descriptor = CtaDescriptor::new("cta-phone", "Ligar", CtaAction::DialPhone("+5582999532934".into()));
        store.activate(&descriptor, false, false);
        assert!(platform
            .take()
            .contains(&Effect::SetLocation("tel:5582999532934".to_string())));
    }

    #[test]
    fn chat_dispatch_uses_target_as_message() {
        let (store, platform, _) = store();
        let descriptor = CtaDescriptor::new("cta-whatsapp", "WhatsApp", CtaAction::OpenChat("Oi tudo bem".into()));
        store.activate(&descriptor, false, false);
        assert!(platform.take().contains(&Effect::OpenWindow(
            "https://wa.me/5582999532934?text=Oi%20tudo%20bem".to_string()
        )));
    }

    #[test]
    fn disabled_or_loading_emits_nothing() {
        let (store, platform, modal) = store();
        let descriptor = CtaDescriptor::new("cta-x", "X", CtaAction::OpenModal(CONTACT_MODAL.into()));

        assert_eq!(store.activate(&descriptor, true, false), None);
        assert_eq!(store.activate(&descriptor, false, true), None);
        assert!(platform.take().is_empty());
        assert!(!modal.borrow().open);
    }

    #[test]
    fn last_open_wins() {
        let (store, _, modal) = store();
        store.open_modal("pricing".into(), None);
        store.open_modal("newsletter".into(), Some("a"));
        store.open_modal(CONTACT_MODAL.into(), Some("b"));
        assert_eq!(modal.borrow().kind.as_deref(), Some(CONTACT_MODAL));
        assert!(modal.borrow().open);

        store.close_modal();
        assert_eq!(*modal.borrow(), ModalState::default());
    }

    #[test]
    fn modal_open_reports_kind_and_origin() {
        let (store, platform, _) = store();
        store.open_modal("contact".into(), Some("cta-primary-contact"));
        assert_eq!(
            platform.take(),
            vec![Effect::Analytics(AnalyticsEvent::ModalOpen {
                modal_type: "contact".into(),
                cta_id: Some("cta-primary-contact".into()),
                timestamp: 1_700_000_000_000,
            })]
        );
    }

    #[test]
    fn tracked_event_carries_descriptor_fields() {
        let (store, platform, _) = store();
        let descriptor = CtaDescriptor::new("floating-whatsapp-open", "Open", CtaAction::OpenChat("chat_open".into()))
            .role(CtaRole::Floating)
            .section("floating");
        let event = store.track_click(&descriptor);
        assert_eq!(event.cta_id, "floating-whatsapp-open");
        assert_eq!(event.action, "whatsapp");
        assert_eq!(event.section, "floating");
        assert_eq!(event.user_agent, "test-agent");
        assert!(platform.take().contains(&Effect::Broadcast(event)));
    }

    #[test]
    fn chat_link_without_message_uses_greeting_and_recipient() {
        let (store, _, _) = store();
        let link = store.chat_link(None);
        assert!(link.starts_with("https://wa.me/5582999532934?text="));
        assert!(link.ends_with(&*urlencoding::encode(config::DEFAULT_CHAT_MESSAGE)));
    }
}
