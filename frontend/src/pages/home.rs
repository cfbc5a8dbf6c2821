use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::components::cta_section::CtaSection;
use crate::cta::model::{CtaAction, CtaRole, CtaSize, CtaVariant, CONTACT_MODAL};

const FEATURES: &[(&str, &str, &str)] = &[
    ("⚡", "Entrega Ágil", "Sprints curtos e entregas contínuas, com você acompanhando cada etapa."),
    ("🔒", "Código Seguro", "Boas práticas de segurança desde a primeira linha de código."),
    ("📈", "Escalável", "Arquiteturas pensadas para crescer junto com o seu negócio."),
    ("🤝", "Parceria", "Suporte próximo antes, durante e depois do lançamento."),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "A PrimeCode entendeu exatamente o que precisávamos. O novo sistema reduziu pela metade o tempo de atendimento.",
        "Carla Mendes",
        "Diretora de Operações, Clínica Vida",
    ),
    (
        "Entregaram o aplicativo antes do prazo e o suporte depois do lançamento foi impecável.",
        "Rafael Costa",
        "Fundador, RotaFácil",
    ),
    (
        "A consultoria nos ajudou a modernizar toda a nossa infraestrutura sem parar a operação.",
        "Juliana Albuquerque",
        "CTO, Mercado Alagoano",
    ),
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-content">
                <h1>{"Soluções Tecnológicas Inovadoras"}</h1>
                <p>{"Desenvolvimento de software, consultoria e suporte técnico. Transformamos ideias em soluções digitais eficientes."}</p>
                <div class="hero-buttons">
                    <CtaButton
                        id="hero-contact"
                        label="Solicitar Orçamento"
                        action={CtaAction::OpenModal(AttrValue::Static(CONTACT_MODAL))}
                        section="hero"
                        variant={CtaVariant::Gradient}
                        size={CtaSize::Lg}
                    />
                    <CtaButton
                        id="hero-whatsapp"
                        role={CtaRole::Secondary}
                        label="Conversar no WhatsApp"
                        action={CtaAction::OpenChat(AttrValue::Static(
                            "Olá! Vim pelo site e gostaria de conversar sobre um projeto."
                        ))}
                        section="hero"
                        variant={CtaVariant::Outline}
                        size={CtaSize::Lg}
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="features">
            { for FEATURES.iter().map(|(icon, title, text)| html! {
                <div class="feature-card" key={*title}>
                    <div class="feature-icon">{*icon}</div>
                    <h3>{*title}</h3>
                    <p>{*text}</p>
                </div>
            }) }
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="depoimentos" class="testimonials">
            <h2>{"O que nossos clientes dizem"}</h2>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().map(|(quote, name, role)| html! {
                    <figure class="testimonial" key={*name}>
                        <blockquote>{format!("“{}”", quote)}</blockquote>
                        <figcaption>
                            <strong>{*name}</strong>
                            <span>{*role}</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home">
            <style>
                {r#"
                    .hero {
                        min-height: 80vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 120px 24px 80px;
                        background: radial-gradient(circle at top, #1e1b4b, #0b0b0f 70%);
                    }
                    .hero-content { max-width: 56rem; }
                    .hero h1 { font-size: 3.5rem; color: white; margin-bottom: 24px; }
                    .hero p { font-size: 1.25rem; color: #d4d4d4; margin-bottom: 40px; }
                    .hero-buttons { display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; }
                    .features {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 24px;
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 80px 24px;
                    }
                    .feature-card { padding: 24px; border-radius: 16px; background: #171717; color: white; }
                    .feature-icon { font-size: 2rem; margin-bottom: 12px; }
                    .feature-card p { color: #a3a3a3; }
                    .testimonials { max-width: 1280px; margin: 0 auto; padding: 80px 24px; color: white; }
                    .testimonials h2 { text-align: center; font-size: 2.25rem; margin-bottom: 48px; }
                    .testimonial-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
                    .testimonial { margin: 0; padding: 24px; border-radius: 16px; background: #171717; }
                    .testimonial blockquote { margin: 0 0 16px; color: #e5e5e5; font-style: italic; }
                    .testimonial figcaption span { display: block; color: #a3a3a3; font-size: 0.875rem; }
                    @media (max-width: 1024px) {
                        .features { grid-template-columns: repeat(2, 1fr); }
                        .testimonial-grid { grid-template-columns: 1fr; }
                    }
                    @media (max-width: 640px) {
                        .features { grid-template-columns: 1fr; }
                        .hero h1 { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <Hero />
            <Features />
            <CtaSection
                subtitle="Aproveite nossa oferta especial e receba 20% de desconto no primeiro projeto"
                show_timer=true
                section="home-cta"
            />
            <Testimonials />
        </div>
    }
}
