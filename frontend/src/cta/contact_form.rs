use std::collections::BTreeMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use yew::Reducible;

pub const SERVICES: &[&str] = &[
    "Desenvolvimento Web",
    "Aplicativos Mobile",
    "Consultoria Tecnológica",
    "Suporte Técnico",
    "E-commerce",
    "Sistemas Personalizados",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl Field {
    /// Matches the `name` attribute of the form control.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "company" => Some(Field::Company),
            "service" => Some(Field::Service),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));

fn looks_like_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn validate(data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if data.name.trim().is_empty() {
        errors.insert(Field::Name, "Nome é obrigatório");
    }

    let email = data.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "E-mail é obrigatório");
    } else if !looks_like_email(email) {
        errors.insert(Field::Email, "E-mail inválido");
    }

    if data.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Telefone é obrigatório");
    }

    if data.message.trim().is_empty() {
        errors.insert(Field::Message, "Mensagem é obrigatória");
    }

    errors
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Success,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub data: FormData,
    pub errors: FieldErrors,
    pub phase: Phase,
}

pub enum FormAction {
    Edit(Field, String),
    Submit,
    Submitted,
    Failed,
    Dismiss,
    Reset,
}

impl ContactForm {
    pub fn can_dismiss(&self) -> bool {
        self.phase != Phase::Submitting
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn apply(&self, action: FormAction) -> Self {
        let mut next = self.clone();
        match action {
            FormAction::Edit(field, value) => {
                *next.data.slot(field) = value;
                next.errors.remove(&field);
            }
            FormAction::Submit => {
                if self.phase != Phase::Editing {
                    return next;
                }
                next.errors = validate(&self.data);
                if next.errors.is_empty() {
                    next.phase = Phase::Submitting;
                }
            }
            FormAction::Submitted => {
                if self.phase == Phase::Submitting {
                    next.phase = Phase::Success;
                }
            }
            FormAction::Failed => {
                if self.phase == Phase::Submitting {
                    next.phase = Phase::Editing;
                }
            }
            FormAction::Dismiss => {
                if self.can_dismiss() {
                    next = ContactForm::default();
                }
            }
            FormAction::Reset => next = ContactForm::default(),
        }
        next
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cta::model::CONTACT_MODAL;
    use crate::cta::store::{ModalAction, ModalState};

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        for (field, value) in [
            (Field::Name, "Maria Silva"),
            (Field::Email, "maria@empresa.com.br"),
            (Field::Phone, "(82) 9 9999-9999"),
            (Field::Message, "Preciso de um app"),
        ] {
            form = form.apply(FormAction::Edit(field, value.to_string()));
        }
        form
    }

    #[test]
    fn email_pattern() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("maria@empresa.com.br"));
        assert!(!looks_like_email("not-an-email"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a@b c"));
    }

    #[test]
    fn empty_form_reports_required_fields_only() {
        let errors = validate(&FormData::default());
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Name, Field::Email, Field::Phone, Field::Message]
        );
    }

    #[test]
    fn invalid_email_blocks_submission() {
        let form = filled()
            .apply(FormAction::Edit(Field::Email, "not-an-email".into()))
            .apply(FormAction::Submit);
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.error(Field::Email), Some("E-mail inválido"));
        assert_eq!(form.errors.len(), 1);
        assert_eq!(form.data.name, "Maria Silva");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let form = filled()
            .apply(FormAction::Edit(Field::Name, "   ".into()))
            .apply(FormAction::Submit);
        assert_eq!(form.error(Field::Name), Some("Nome é obrigatório"));
        assert_eq!(form.phase, Phase::Editing);
    }

    #[test]
    fn editing_clears_only_that_error() {
        let form = ContactForm::default().apply(FormAction::Submit);
        assert_eq!(form.errors.len(), 4);

        let form = form.apply(FormAction::Edit(Field::Phone, "8".into()));
        assert_eq!(form.error(Field::Phone), None);
        assert_eq!(form.errors.len(), 3);

        // cleared optimistically, not re-validated
        let form = form.apply(FormAction::Edit(Field::Email, "still wrong".into()));
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn full_lifecycle_resets_fields_and_closes() {
        let mut modal = ModalState::default().apply(ModalAction::Open(CONTACT_MODAL.into()));
        let mut form = filled()
            .apply(FormAction::Edit(Field::Company, "ACME".into()))
            .apply(FormAction::Edit(Field::Service, SERVICES[1].into()));

        form = form.apply(FormAction::Submit);
        assert_eq!(form.phase, Phase::Submitting);
        assert!(form.errors.is_empty());

        form = form.apply(FormAction::Submitted);
        assert_eq!(form.phase, Phase::Success);

        form = form.apply(FormAction::Reset);
        modal = modal.apply(ModalAction::Close);

        assert_eq!(form.phase, Phase::Editing);
        for field in [
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::Company,
            Field::Service,
            Field::Message,
        ] {
            assert_eq!(form.data.get(field), "");
        }
        assert!(!modal.open);
        assert_eq!(modal.kind, None);
    }

    #[test]
    fn dismiss_is_ignored_while_submitting() {
        let form = filled().apply(FormAction::Submit);
        assert!(!form.can_dismiss());
        assert_eq!(form.apply(FormAction::Dismiss).phase, Phase::Submitting);
    }

    #[test]
    fn dismiss_resets_the_form() {
        let form = filled()
            .apply(FormAction::Edit(Field::Email, "x".into()))
            .apply(FormAction::Submit)
            .apply(FormAction::Dismiss);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn failure_returns_to_editing_with_data() {
        let form = filled().apply(FormAction::Submit).apply(FormAction::Failed);
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.data.message, "Preciso de um app");
    }

    #[test]
    fn stray_completion_is_ignored() {
        let form = filled().apply(FormAction::Submitted);
        assert_eq!(form.phase, Phase::Editing);
    }

    #[test]
    fn field_names_round_trip() {
        assert_eq!(Field::from_name("service"), Some(Field::Service));
        assert_eq!(Field::from_name("budget"), None);
    }
}
