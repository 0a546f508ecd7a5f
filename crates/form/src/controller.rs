use std::sync::Arc;

use crate::{
    Analytics, ContactForm, FieldKind, FieldName, FieldState, NoopAnalytics, Reply, Transport,
    TransportError,
    mask::{self, KeyDecision, KeyStroke},
    validation,
};

/// Listeners a mounted controller keeps on its host.
const LISTENERS: [(Target, EventKind); 11] = [
    (Target::Form, EventKind::Submit),
    (Target::Field(FieldName::Name), EventKind::Input),
    (Target::Field(FieldName::Name), EventKind::Blur),
    (Target::Field(FieldName::Phone), EventKind::Input),
    (Target::Field(FieldName::Phone), EventKind::Blur),
    (Target::Field(FieldName::Phone), EventKind::KeyDown),
    (Target::Field(FieldName::Email), EventKind::Input),
    (Target::Field(FieldName::Email), EventKind::Blur),
    (Target::Field(FieldName::Message), EventKind::Input),
    (Target::Field(FieldName::Message), EventKind::Blur),
    (Target::Field(FieldName::Consent), EventKind::Change),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub loading: bool,
    pub label: String,
}

impl SubmitControl {
    fn idle(locale: &str) -> Self {
        Self {
            disabled: false,
            loading: false,
            label: rust_i18n::t!("form.submit", locale = locale).to_string(),
        }
    }

    fn busy(locale: &str) -> Self {
        Self {
            disabled: true,
            loading: true,
            label: rust_i18n::t!("form.sending", locale = locale).to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side validation failed, nothing was sent
    Rejected,
    /// The handler accepted the submission and replied with this text
    Delivered(String),
    /// Transport error or non-success status
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Submit,
    Input,
    Change,
    Blur,
    KeyDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Form,
    Field(FieldName),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The page hosting the form; delivers events for registered listeners.
pub trait EventHost {
    fn listen(&mut self, target: Target, kind: EventKind) -> ListenerId;
    fn unlisten(&mut self, id: ListenerId);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Input(FieldName, String),
    Change(FieldName, bool),
    Blur(FieldName),
    KeyDown(FieldName, KeyStroke),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The controller is not mounted
    Ignored,
    Handled,
    Key(KeyDecision),
    Submitted(SubmitOutcome),
}

pub struct FormController<T: Transport> {
    form: ContactForm,
    transport: T,
    analytics: Arc<dyn Analytics>,
    locale: String,
    submit_control: SubmitControl,
    banners: Vec<Banner>,
    listeners: Vec<ListenerId>,
    mounted: bool,
}

impl<T: Transport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            form: ContactForm::default(),
            transport,
            analytics: Arc::new(NoopAnalytics),
            locale: crate::DEFAULT_LOCALE.to_owned(),
            submit_control: SubmitControl::idle(crate::DEFAULT_LOCALE),
            banners: vec![],
            listeners: vec![],
            mounted: false,
        }
    }

    pub fn with_analytics(mut self, analytics: Arc<dyn Analytics>) -> Self {
        self.analytics = analytics;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self.submit_control = SubmitControl::idle(&self.locale);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit_control
    }

    /// Banners, newest first.
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn dismiss_banner(&mut self, index: usize) -> Option<Banner> {
        (index < self.banners.len()).then(|| self.banners.remove(index))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Registers the controller's listeners on `host`. Mounting twice is a
    /// no-op.
    pub fn mount(&mut self, host: &mut dyn EventHost) {
        if self.mounted {
            return;
        }

        self.listeners = LISTENERS
            .iter()
            .map(|(target, kind)| host.listen(*target, *kind))
            .collect();
        self.mounted = true;
    }

    /// Removes every listener registered by [`Self::mount`].
    pub fn unmount(&mut self, host: &mut dyn EventHost) {
        for id in self.listeners.drain(..) {
            host.unlisten(id);
        }
        self.mounted = false;
    }

    pub async fn handle(&mut self, event: FormEvent) -> EventOutcome {
        if !self.mounted {
            return EventOutcome::Ignored;
        }

        match event {
            FormEvent::Submit => EventOutcome::Submitted(self.submit().await),
            FormEvent::Input(name, value) => {
                self.input(name, value);
                EventOutcome::Handled
            }
            FormEvent::Change(name, checked) => {
                self.set_checked(name, checked);
                EventOutcome::Handled
            }
            FormEvent::Blur(name) => {
                self.blur(name);
                EventOutcome::Handled
            }
            FormEvent::KeyDown(name, stroke) => EventOutcome::Key(self.keydown(name, stroke)),
        }
    }

    /// Stores a typed value. The phone field goes through the mask and a field
    /// already marked invalid is re-checked on every change.
    pub fn input(&mut self, name: FieldName, value: impl Into<String>) {
        let mut value = value.into();

        match name.kind() {
            FieldKind::Checkbox => return,
            FieldKind::Tel => {
                if let Some(formatted) = mask::format_phone(&value) {
                    value = formatted;
                }
            }
            _ => {}
        }

        let field = self.form.field_mut(name);
        field.value = value;

        if field.state.is_invalid() {
            self.validate_field(name);
        }
    }

    pub fn set_checked(&mut self, name: FieldName, checked: bool) {
        let field = self.form.field_mut(name);
        if field.name.kind() != FieldKind::Checkbox {
            return;
        }

        field.checked = checked;

        if field.state.is_invalid() {
            self.validate_field(name);
        }
    }

    pub fn blur(&mut self, name: FieldName) -> bool {
        self.validate_field(name)
    }

    pub fn keydown(&self, name: FieldName, stroke: KeyStroke) -> KeyDecision {
        match name.kind() {
            FieldKind::Tel => mask::filter_phone_key(stroke),
            _ => KeyDecision::Allow,
        }
    }

    pub fn validate_field(&mut self, name: FieldName) -> bool {
        let field = self.form.field(name);

        let result = match name.kind() {
            FieldKind::Checkbox if !field.checked => Err("form.consent_required"),
            FieldKind::Checkbox => Ok(()),
            _ => validation::check(field),
        };

        let state = match result {
            Ok(()) => FieldState::Valid,
            Err(key) => FieldState::Invalid(validation::message(key, &self.locale)),
        };

        let valid = state == FieldState::Valid;
        self.form.field_mut(name).state = state;

        valid
    }

    /// Checks every required field and the consent box. All controls get a
    /// state even after the first failure.
    pub fn validate_form(&mut self) -> bool {
        let required: Vec<FieldName> = self
            .form
            .fields()
            .filter(|field| field.required)
            .map(|field| field.name)
            .collect();

        let mut valid = true;
        for name in required {
            valid &= self.validate_field(name);
        }
        valid &= self.validate_field(FieldName::Consent);

        self.form.was_validated = true;

        valid
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(fields) = self.begin_submit() else {
            return SubmitOutcome::Rejected;
        };

        let result = self.transport.submit(&fields).await;

        self.finish_submit(result)
    }

    /// Validates and, when the form is valid, puts the submit control in its
    /// loading state and returns the fields to send.
    pub fn begin_submit(&mut self) -> Option<Vec<(String, String)>> {
        self.analytics.track("Form", "Submit", "Contact Form");

        if !self.validate_form() {
            tracing::debug!("Contact form rejected by client-side validation");
            return None;
        }

        self.submit_control = SubmitControl::busy(&self.locale);

        Some(self.form.serialize())
    }

    /// Restores the submit control and renders the outcome banner.
    pub fn finish_submit(&mut self, result: Result<Reply, TransportError>) -> SubmitOutcome {
        self.submit_control = SubmitControl::idle(&self.locale);

        match result {
            Ok(reply) if reply.is_success() => {
                self.banners.insert(
                    0,
                    Banner {
                        kind: BannerKind::Success,
                        text: reply.text.to_owned(),
                    },
                );
                self.form.reset();

                SubmitOutcome::Delivered(reply.text)
            }
            Ok(reply) => {
                tracing::warn!(status = reply.status, "Contact form submission refused");
                self.push_failure();

                SubmitOutcome::Failed
            }
            Err(err) => {
                tracing::warn!(error = %err, "Contact form submission failed");
                self.push_failure();

                SubmitOutcome::Failed
            }
        }
    }

    fn push_failure(&mut self) {
        self.banners.insert(
            0,
            Banner {
                kind: BannerKind::Danger,
                text: rust_i18n::t!("form.failure", locale = self.locale.as_str()).to_string(),
            },
        );
    }
}
