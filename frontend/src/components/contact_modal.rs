use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::cta::contact_form::{ContactForm, Field, FormAction, Phase, SERVICES};
use crate::cta::model::CONTACT_MODAL;
use crate::cta::store::use_cta;
use crate::cta::submit::{submit_contact, SubmitError};

#[function_component(ContactModal)]
pub fn contact_modal() -> Html {
    let store = use_cta();
    let form = use_reducer(ContactForm::default);
    let phase = form.phase;

    // Runs the submission while in Submitting. Dropping out of that phase, or
    // unmounting, aborts whatever is still in flight.
    {
        let store = store.clone();
        let form = form.clone();
        use_effect_with_deps(
            move |phase| {
                let mut controller = None;
                if *phase == Phase::Submitting {
                    match AbortController::new() {
                        Ok(ctrl) => {
                            let signal = ctrl.signal();
                            let data = form.data.clone();
                            let dispatcher = form.dispatcher();
                            spawn_local(async move {
                                match submit_contact(&data, &signal).await {
                                    Ok(()) => {
                                        store.track_conversion();
                                        dispatcher.dispatch(FormAction::Submitted);
                                    }
                                    Err(SubmitError::Aborted) => info!("Contact submission aborted"),
                                    Err(e) => {
                                        gloo_console::error!(format!("Error submitting form: {}", e));
                                        dispatcher.dispatch(FormAction::Failed);
                                    }
                                }
                            });
                            controller = Some(ctrl);
                        }
                        Err(_) => {
                            gloo_console::error!("Could not create AbortController");
                            form.dispatch(FormAction::Failed);
                        }
                    }
                }
                move || {
                    if let Some(ctrl) = controller {
                        ctrl.abort();
                    }
                }
            },
            phase,
        );
    }

    // Success is shown briefly, then everything resets and the modal closes.
    {
        let store = store.clone();
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |phase| {
                let timeout = (*phase == Phase::Success).then(|| {
                    Timeout::new(config::SUCCESS_RESET_MS, move || {
                        dispatcher.dispatch(FormAction::Reset);
                        store.close_modal();
                    })
                });
                move || drop(timeout)
            },
            phase,
        );
    }

    if !store.modal().is_open_for(CONTACT_MODAL) {
        return html! {};
    }

    let on_close = {
        let store = store.clone();
        let form = form.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if form.can_dismiss() {
                form.dispatch(FormAction::Dismiss);
                store.close_modal();
            }
        })
    };

    let on_input = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = Field::from_name(&input.name()) {
                form.dispatch(FormAction::Edit(field, input.value()));
            }
        })
    };

    let on_service = {
        let form = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Service, select.value()));
        })
    };

    let on_message = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Message, area.value()));
        })
    };

    let on_submit = {
        let form = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };

    let error_for = |field: Field| -> Html {
        match form.error(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };
    let input_class = |field: Field| classes!("contact-input", form.error(field).map(|_| "has-error"));

    let submitting = phase == Phase::Submitting;

    html! {
        <div class="contact-backdrop" onclick={on_close.clone()}>
            <style>
                {r#"
                    .contact-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 16px;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                    }
                    .contact-panel {
                        position: relative;
                        width: 100%;
                        max-width: 42rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #262626;
                        color: white;
                        border-radius: 16px;
                        padding: 32px;
                    }
                    .contact-close {
                        position: absolute;
                        top: 16px;
                        right: 16px;
                        background: none;
                        border: none;
                        color: #a3a3a3;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .contact-close:disabled { opacity: 0.5; cursor: not-allowed; }
                    .contact-header { text-align: center; margin-bottom: 32px; }
                    .contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-bottom: 24px; }
                    .contact-field { margin-bottom: 24px; }
                    .contact-row .contact-field { margin-bottom: 0; }
                    .contact-field label { display: block; font-size: 0.875rem; color: #d4d4d4; margin-bottom: 8px; }
                    .contact-input {
                        width: 100%;
                        padding: 12px 16px;
                        border: 1px solid #525252;
                        border-radius: 8px;
                        background: #404040;
                        color: white;
                        box-sizing: border-box;
                    }
                    .contact-input.has-error { border-color: #ef4444; }
                    textarea.contact-input { resize: none; }
                    .field-error { margin-top: 4px; font-size: 0.875rem; color: #ef4444; }
                    .contact-submit {
                        width: 100%;
                        padding: 16px 24px;
                        border: none;
                        border-radius: 8px;
                        font-weight: 600;
                        color: white;
                        cursor: pointer;
                        background: linear-gradient(to right, #2563eb, #9333ea);
                    }
                    .contact-submit:disabled { opacity: 0.5; cursor: not-allowed; }
                    .contact-success { text-align: center; padding: 32px 0; }
                    .contact-success-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 64px;
                        height: 64px;
                        margin: 0 auto 16px;
                        border-radius: 50%;
                        background: #22c55e;
                        font-size: 2rem;
                    }
                    @media (max-width: 768px) {
                        .contact-row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="contact-panel" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="contact-close" onclick={on_close} disabled={submitting}>{"✕"}</button>
                {
                    if phase == Phase::Success {
                        html! {
                            <div class="contact-success">
                                <div class="contact-success-icon">{"✓"}</div>
                                <h3>{"Mensagem Enviada!"}</h3>
                                <p>{"Obrigado pelo contato. Nossa equipe entrará em contato em breve."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <div class="contact-header">
                                    <h2>{"Fale Conosco"}</h2>
                                    <p>{"Preencha o formulário e nossa equipe entrará em contato"}</p>
                                </div>
                                <form onsubmit={on_submit}>
                                    <div class="contact-row">
                                        <div class="contact-field">
                                            <label for="name">{"Nome Completo *"}</label>
                                            <input type="text" id="name" name="name"
                                                class={input_class(Field::Name)}
                                                value={form.data.get(Field::Name).to_string()}
                                                oninput={on_input.clone()}
                                                placeholder="Seu nome completo" />
                                            { error_for(Field::Name) }
                                        </div>
                                        <div class="contact-field">
                                            <label for="email">{"E-mail *"}</label>
                                            <input type="email" id="email" name="email"
                                                class={input_class(Field::Email)}
                                                value={form.data.get(Field::Email).to_string()}
                                                oninput={on_input.clone()}
                                                placeholder="seu@email.com" />
                                            { error_for(Field::Email) }
                                        </div>
                                    </div>
                                    <div class="contact-row">
                                        <div class="contact-field">
                                            <label for="phone">{"Telefone *"}</label>
                                            <input type="tel" id="phone" name="phone"
                                                class={input_class(Field::Phone)}
                                                value={form.data.get(Field::Phone).to_string()}
                                                oninput={on_input.clone()}
                                                placeholder="(82) 9 9999-9999" />
                                            { error_for(Field::Phone) }
                                        </div>
                                        <div class="contact-field">
                                            <label for="company">{"Empresa"}</label>
                                            <input type="text" id="company" name="company"
                                                class="contact-input"
                                                value={form.data.get(Field::Company).to_string()}
                                                oninput={on_input}
                                                placeholder="Nome da empresa" />
                                        </div>
                                    </div>
                                    <div class="contact-field">
                                        <label for="service">{"Serviço de Interesse"}</label>
                                        <select id="service" name="service" class="contact-input" onchange={on_service}>
                                            <option value="" selected={form.data.service.is_empty()}>{"Selecione um serviço"}</option>
                                            { for SERVICES.iter().map(|service| html! {
                                                <option key={*service} value={*service} selected={form.data.service == *service}>
                                                    {*service}
                                                </option>
                                            }) }
                                        </select>
                                    </div>
                                    <div class="contact-field">
                                        <label for="message">{"Mensagem *"}</label>
                                        <textarea id="message" name="message" rows="4"
                                            class={input_class(Field::Message)}
                                            value={form.data.get(Field::Message).to_string()}
                                            oninput={on_message}
                                            placeholder="Descreva seu projeto ou dúvida..." />
                                        { error_for(Field::Message) }
                                    </div>
                                    <button type="submit" class="contact-submit" disabled={submitting}>
                                        if submitting {
                                            <span class="cta-spinner"></span>{" Enviando..."}
                                        } else {
                                            {"➤ Enviar Mensagem"}
                                        }
                                    </button>
                                </form>
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
