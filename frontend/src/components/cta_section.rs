use yew::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::components::cta_button::CtaButton;
use crate::config;
use crate::cta::model::{CtaAction, CtaRole, CtaSize, CtaVariant, CONTACT_MODAL};

struct ServiceCard {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    description: &'static str,
    action: CtaAction,
}

fn service_cards() -> Vec<ServiceCard> {
    let contact = || CtaAction::OpenModal(AttrValue::Static(CONTACT_MODAL));
    vec![
        ServiceCard {
            id: "cta-web-dev",
            label: "Desenvolvimento Web",
            icon: "💻",
            description: "Sites e sistemas web modernos",
            action: CtaAction::Navigate(AttrValue::Static("/servicos/desenvolvimento-web")),
        },
        ServiceCard {
            id: "cta-mobile-app",
            label: "App Mobile",
            icon: "📱",
            description: "Aplicativos iOS e Android",
            action: contact(),
        },
        ServiceCard {
            id: "cta-consulting",
            label: "Consultoria Tech",
            icon: "💡",
            description: "Estratégia e transformação digital",
            action: contact(),
        },
        ServiceCard {
            id: "cta-support",
            label: "Suporte Técnico",
            icon: "🎧",
            description: "Manutenção e suporte 24/7",
            action: contact(),
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    #[prop_or(AttrValue::Static("Transforme sua Ideia em Realidade Digital"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(
        "Escolha o serviço ideal para seu projeto e receba uma proposta personalizada"
    ))]
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub show_timer: bool,
    #[prop_or(AttrValue::Static("cta-section"))]
    pub section: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    html! {
        <section id="servicos" class={classes!("cta-section", props.class.clone())}>
            <style>
                {r#"
                    .cta-section {
                        padding: 80px 0;
                        background: linear-gradient(135deg, #0a0a0a, #171717);
                    }
                    .cta-section-inner { max-width: 1280px; margin: 0 auto; padding: 0 24px; }
                    .cta-section-header { text-align: center; margin-bottom: 64px; }
                    .cta-section-header h2 { font-size: 3rem; font-weight: 700; color: white; margin-bottom: 24px; }
                    .cta-section-header p { font-size: 1.125rem; color: #d4d4d4; max-width: 48rem; margin: 0 auto 32px; }
                    .countdown-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        background: #ef4444;
                        color: white;
                        padding: 12px 24px;
                        border-radius: 9999px;
                        font-weight: 600;
                        margin-bottom: 32px;
                    }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 24px;
                        margin-bottom: 48px;
                    }
                    .service-card {
                        background: #262626;
                        border: 1px solid #404040;
                        border-radius: 16px;
                        padding: 24px;
                        text-align: center;
                        transition: box-shadow 0.3s ease;
                    }
                    .service-card:hover { box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4); }
                    .service-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 48px;
                        height: 48px;
                        font-size: 1.5rem;
                        border-radius: 12px;
                        margin-bottom: 16px;
                        background: linear-gradient(135deg, #3b82f6, #9333ea);
                    }
                    .service-card h3 { font-size: 1.125rem; color: white; margin-bottom: 8px; }
                    .service-card p { font-size: 0.875rem; color: #a3a3a3; margin-bottom: 16px; }
                    .cta-primary-row { text-align: center; }
                    .cta-secondary-row { margin-top: 16px; display: flex; gap: 16px; justify-content: center; }
                    @media (max-width: 1024px) {
                        .service-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .service-grid { grid-template-columns: 1fr; }
                        .cta-secondary-row { flex-direction: column; align-items: center; }
                        .cta-section-header h2 { font-size: 1.875rem; }
                    }
                "#}
            </style>
            <div class="cta-section-inner">
                <div class="cta-section-header">
                    <h2>{props.title.clone()}</h2>
                    <p>{props.subtitle.clone()}</p>
                    if props.show_timer {
                        <CountdownTimer />
                    }
                </div>

                <div class="service-grid">
                    { for service_cards().into_iter().map(|card| html! {
                        <div class="service-card" key={card.id}>
                            <div class="service-icon">{card.icon}</div>
                            <h3>{card.label}</h3>
                            <p>{card.description}</p>
                            <CtaButton
                                id={card.id}
                                role={CtaRole::Primary}
                                label="Solicitar Orçamento"
                                action={card.action}
                                section={props.section.clone()}
                                variant={CtaVariant::Gradient}
                                size={CtaSize::Sm}
                                full_width=true
                            />
                        </div>
                    }) }
                </div>

                <div class="cta-primary-row">
                    <CtaButton
                        id="cta-primary-contact"
                        label="Falar com Especialista Agora"
                        action={CtaAction::OpenModal(AttrValue::Static(CONTACT_MODAL))}
                        section={props.section.clone()}
                        variant={CtaVariant::Gradient}
                        size={CtaSize::Lg}
                        urgent={props.show_timer}
                    />
                    <div class="cta-secondary-row">
                        <CtaButton
                            id="cta-whatsapp"
                            role={CtaRole::Secondary}
                            label="WhatsApp"
                            action={CtaAction::OpenChat(AttrValue::Static(
                                "Olá! Vi o site da PrimeCode e gostaria de saber mais sobre os serviços."
                            ))}
                            section={props.section.clone()}
                            variant={CtaVariant::Outline}
                        />
                        <CtaButton
                            id="cta-phone"
                            role={CtaRole::Secondary}
                            label="Ligar Agora"
                            action={CtaAction::DialPhone(AttrValue::Static(config::CONTACT_PHONE))}
                            section={props.section.clone()}
                            variant={CtaVariant::Outline}
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_dev_navigates() {
        let cards = service_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].action.kind(), "internal");
        assert!(cards[1..]
            .iter()
            .all(|card| card.action == CtaAction::OpenModal(CONTACT_MODAL.into())));
    }
}
