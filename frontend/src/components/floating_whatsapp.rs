use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::cta::model::{CtaAction, CtaDescriptor, CtaRole};
use crate::cta::store::{use_cta, CtaStore};

fn floating(id: &'static str, label: &'static str, target: AttrValue) -> CtaDescriptor {
    CtaDescriptor::new(id, label, CtaAction::OpenChat(target))
        .role(CtaRole::Floating)
        .section("floating")
}

/// Tracks the panel opening. Closing isn't tracked.
fn track_open(store: &CtaStore) {
    store.track_click(&floating(
        "floating-whatsapp-open",
        "WhatsApp Float Open",
        AttrValue::Static("chat_open"),
    ));
}

/// Tracks the send and hands the conversation off to WhatsApp.
fn send_chat(store: &CtaStore, message: &str) {
    let message = if message.is_empty() {
        config::FLOATING_CHAT_MESSAGE
    } else {
        message
    };
    store.track_click(&floating(
        "floating-whatsapp-send",
        "WhatsApp Float Send",
        AttrValue::from(message.to_string()),
    ));
    store.open_url(&store.chat_link(Some(message)));
}

#[function_component(FloatingWhatsApp)]
pub fn floating_whatsapp() -> Html {
    let store = use_cta();
    let is_visible = use_state(|| false);
    let is_open = use_state(|| false);
    let message = use_state(String::new);

    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::CHAT_WIDGET_DELAY_MS, move || is_visible.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let on_toggle = {
        let store = store.clone();
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            if !*is_open {
                track_open(&store);
            }
            is_open.set(!*is_open);
        })
    };

    let send = {
        let is_open = is_open.clone();
        let message = message.clone();
        Callback::from(move |_: ()| {
            send_chat(&store, &message);
            is_open.set(false);
            message.set(String::new());
        })
    };

    let on_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_keypress = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };

    if !*is_visible {
        return html! {};
    }

    html! {
        <div class="floating-whatsapp">
            <style>
                {r#"
                    .floating-whatsapp { position: fixed; bottom: 24px; right: 24px; z-index: 50; }
                    .chat-panel {
                        width: 320px;
                        margin-bottom: 16px;
                        overflow: hidden;
                        background: #262626;
                        border: 1px solid #404040;
                        border-radius: 16px;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
                        animation: chatIn 0.2s ease-out;
                    }
                    .chat-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 16px;
                        background: #22c55e;
                        color: white;
                    }
                    .chat-header h3 { margin: 0; font-size: 1rem; }
                    .chat-header p { margin: 0; font-size: 0.875rem; opacity: 0.9; }
                    .chat-close { background: none; border: none; color: white; font-size: 1.25rem; cursor: pointer; }
                    .chat-messages { padding: 16px; max-height: 240px; overflow-y: auto; }
                    .chat-bubble {
                        background: #404040;
                        color: #e5e5e5;
                        padding: 12px;
                        border-radius: 8px 8px 8px 0;
                        margin-bottom: 12px;
                        font-size: 0.875rem;
                    }
                    .chat-bubble span { display: block; font-size: 0.75rem; color: #a3a3a3; }
                    .chat-input { display: flex; gap: 8px; padding: 16px; border-top: 1px solid #404040; }
                    .chat-input input {
                        flex: 1;
                        padding: 8px 12px;
                        border: 1px solid #525252;
                        border-radius: 8px;
                        background: #404040;
                        color: white;
                    }
                    .chat-send { background: #22c55e; color: white; border: none; border-radius: 8px; padding: 8px; cursor: pointer; }
                    .chat-toggle {
                        position: relative;
                        width: 56px;
                        height: 56px;
                        border: none;
                        border-radius: 50%;
                        background: #22c55e;
                        color: white;
                        font-size: 1.75rem;
                        cursor: pointer;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
                        float: right;
                    }
                    .chat-toggle:hover { transform: scale(1.1); }
                    .chat-badge {
                        position: absolute;
                        top: -4px;
                        right: -4px;
                        width: 20px;
                        height: 20px;
                        border-radius: 50%;
                        background: #ef4444;
                        font-size: 0.75rem;
                        line-height: 20px;
                    }
                    @keyframes chatIn {
                        from { opacity: 0; transform: translateY(20px) scale(0.8); }
                        to { opacity: 1; transform: none; }
                    }
                "#}
            </style>
            if *is_open {
                <div class="chat-panel">
                    <div class="chat-header">
                        <div>
                            <h3>{"PrimeCode Solutions"}</h3>
                            <p>{"Online agora"}</p>
                        </div>
                        <button class="chat-close" onclick={on_toggle.clone()}>{"✕"}</button>
                    </div>
                    <div class="chat-messages">
                        <div class="chat-bubble">
                            {"Olá! 👋 Como podemos ajudar você hoje?"}
                            <span>{"Agora"}</span>
                        </div>
                        <div class="chat-bubble">
                            {"Estamos prontos para transformar sua ideia em realidade digital! 🚀"}
                            <span>{"Agora"}</span>
                        </div>
                    </div>
                    <div class="chat-input">
                        <input
                            type="text"
                            value={(*message).clone()}
                            oninput={on_input}
                            onkeypress={on_keypress}
                            placeholder="Digite sua mensagem..."
                        />
                        <button class="chat-send" onclick={send.reform(|_: MouseEvent| ())}>{"➤"}</button>
                    </div>
                </div>
            }
            <button class="chat-toggle" onclick={on_toggle}>
                {"💬"}
                if !*is_open {
                    <span class="chat-badge">{"2"}</span>
                }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cta::analytics::AnalyticsEvent;
    use crate::cta::platform::testing::Effect;
    use crate::cta::store::recording_store;

    #[test]
    fn empty_message_sends_default_greeting() {
        let (store, platform, _) = recording_store();
        send_chat(&store, "");

        let effects = platform.take();
        let expected = store.chat_link(Some(config::FLOATING_CHAT_MESSAGE));
        assert_eq!(effects.last(), Some(&Effect::OpenWindow(expected)));
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Broadcast(event) if event.cta_id == "floating-whatsapp-send"
        )));
    }

    #[test]
    fn send_tracks_once_and_opens_once() {
        let (store, platform, _) = recording_store();
        send_chat(&store, "Quero um orçamento");

        let effects = platform.take();
        let clicks: Vec<_> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::Analytics(AnalyticsEvent::CtaClick { cta_section, cta_type, .. }) => {
                    Some((cta_section.as_str(), *cta_type))
                }
                _ => None,
            })
            .collect();
        assert_eq!(clicks, vec![("floating", "floating")]);
        assert_eq!(
            effects.iter().filter(|e| matches!(e, Effect::OpenWindow(_))).count(),
            1
        );
        assert!(effects.contains(&Effect::OpenWindow(
            "https://wa.me/5582999532934?text=Quero%20um%20or%C3%A7amento".to_string()
        )));
    }

    #[test]
    fn opening_the_panel_is_tracked_without_side_effects() {
        let (store, platform, modal) = recording_store();
        track_open(&store);

        let effects = platform.take();
        assert_eq!(effects.len(), 2);
        assert!(!effects.iter().any(|e| matches!(e, Effect::OpenWindow(_) | Effect::SetLocation(_))));
        assert!(!modal.borrow().open);
    }
}
