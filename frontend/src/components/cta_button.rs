use yew::prelude::*;

use crate::cta::model::{next_cta_id, CtaAction, CtaDescriptor, CtaRole, CtaSize, CtaVariant};
use crate::cta::store::use_cta;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub role: CtaRole,
    pub label: AttrValue,
    pub action: CtaAction,
    #[prop_or(AttrValue::Static("global"))]
    pub section: AttrValue,
    #[prop_or_default]
    pub urgent: bool,
    #[prop_or_default]
    pub variant: CtaVariant,
    #[prop_or_default]
    pub size: CtaSize,
    #[prop_or_default]
    pub icon_left: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub class: Classes,
}

fn default_icon(action: &CtaAction) -> &'static str {
    match action {
        CtaAction::DialPhone(_) => "📞",
        CtaAction::OpenChat(_) => "💬",
        CtaAction::OpenModal(_) => "✉",
        CtaAction::OpenExternal(_) | CtaAction::Navigate(_) => "→",
    }
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let store = use_cta();
    let generated_id = use_state(next_cta_id);

    let descriptor = CtaDescriptor {
        id: props.id.clone().unwrap_or_else(|| (*generated_id).clone()),
        role: props.role,
        label: props.label.clone(),
        action: props.action.clone(),
        section: props.section.clone(),
        urgent: props.urgent,
        variant: props.variant,
        size: props.size,
    };
    let inert = props.disabled || props.loading;

    let onclick = {
        let descriptor = descriptor.clone();
        let (disabled, loading) = (props.disabled, props.loading);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            store.activate(&descriptor, disabled, loading);
        })
    };

    let icon = if props.loading {
        html! { <span class="cta-spinner"></span> }
    } else {
        html! { <span class="cta-icon">{default_icon(&props.action)}</span> }
    };

    let button_class = classes!(
        "cta-button",
        format!("cta-{}", descriptor.role.as_str()),
        descriptor.variant.class(),
        descriptor.size.class(),
        props.full_width.then(|| "cta-full"),
        props.class.clone()
    );

    html! {
        <div class={classes!("cta-wrapper", props.full_width.then(|| "cta-full"))}>
            <style>
                {r#"
                    .cta-wrapper { position: relative; display: inline-block; }
                    .cta-wrapper.cta-full { display: block; }
                    .cta-button {
                        position: relative;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 500;
                        border: none;
                        cursor: pointer;
                        overflow: hidden;
                        transition: transform 0.2s ease, box-shadow 0.3s ease, background 0.3s ease;
                    }
                    .cta-button:hover:not(:disabled) { transform: scale(1.03); }
                    .cta-button:active:not(:disabled) { transform: scale(0.98); }
                    .cta-button:disabled { opacity: 0.7; cursor: not-allowed; }
                    .cta-button.cta-full { width: 100%; }
                    .cta-sm { padding: 6px 12px; font-size: 0.875rem; border-radius: 6px; }
                    .cta-md { padding: 8px 16px; font-size: 1rem; border-radius: 8px; }
                    .cta-lg { padding: 12px 24px; font-size: 1.125rem; border-radius: 12px; }
                    .cta-xl { padding: 16px 32px; font-size: 1.25rem; border-radius: 12px; }
                    .cta-default.cta-primary { background: #2563eb; color: white; }
                    .cta-default.cta-primary:hover { background: #1d4ed8; }
                    .cta-default.cta-secondary, .cta-default.cta-floating { background: #374151; color: white; }
                    .cta-gradient {
                        background: linear-gradient(to right, #2563eb, #9333ea);
                        color: white;
                        box-shadow: 0 10px 20px rgba(37, 99, 235, 0.25);
                    }
                    .cta-outline { background: transparent; border: 1px solid #d1d5db; color: #e5e7eb; }
                    .cta-outline.cta-primary { border-color: #2563eb; color: #60a5fa; }
                    .cta-outline:hover { background: rgba(255, 255, 255, 0.08); }
                    .cta-ghost { background: transparent; color: #60a5fa; }
                    .cta-content { display: flex; align-items: center; gap: 8px; white-space: nowrap; }
                    .cta-content.icon-left { flex-direction: row-reverse; }
                    .cta-urgency {
                        position: absolute;
                        top: -8px;
                        right: -8px;
                        z-index: 10;
                        padding: 2px 8px;
                        font-size: 0.75rem;
                        border-radius: 9999px;
                        background: #ef4444;
                        color: white;
                        animation: ctaPulse 1.5s ease-in-out infinite;
                    }
                    .cta-spinner {
                        display: inline-block;
                        width: 16px;
                        height: 16px;
                        border: 2px solid currentColor;
                        border-top-color: transparent;
                        border-radius: 50%;
                        animation: ctaSpin 0.8s linear infinite;
                    }
                    @keyframes ctaSpin { to { transform: rotate(360deg); } }
                    @keyframes ctaPulse { 50% { opacity: 0.6; } }
                "#}
            </style>
            if descriptor.urgent {
                <span class="cta-urgency">{"Oferta!"}</span>
            }
            <button
                class={button_class}
                {onclick}
                disabled={inert}
                aria-label={descriptor.label.clone()}
                data-cta-id={descriptor.id.clone()}
                data-cta-type={descriptor.role.as_str()}
                data-cta-action={descriptor.action.kind()}
            >
                <span class={classes!("cta-content", props.icon_left.then(|| "icon-left"))}>
                    <span>{descriptor.label.clone()}</span>
                    {icon}
                </span>
            </button>
        </div>
    }
}
