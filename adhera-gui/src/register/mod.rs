mod view;

use std::sync::Arc;
use std::time::Duration;

use iced::{task, Task};
use tracing::{debug, info, warn};

use adhera_ui::{component::form, widget::Element};

use crate::{
    navigation::Route,
    notification::Notification,
    services::auth::{AuthError, AuthService, Role, SignUpRequest, SignUpResponse, UserMetadata},
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// How long the signup confirmation toast stays on screen.
pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_secs(6);

/// Delay between a successful signup and the redirection to the login screen.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(4);

pub const SUCCESS_TITLE: &str = "¡Registro exitoso!";
pub const ERROR_TITLE: &str = "Error al registrar";
pub const FALLBACK_ERROR: &str = "Ocurrió un error inesperado";

const REQUIRED: &str = "Este campo es obligatorio";
const INVALID_EMAIL: &str = "Introduce un correo electrónico válido";
const PASSWORD_TOO_SHORT: &str = "La contraseña debe tener al menos 6 caracteres";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Password,
    LicenseNumber,
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    SignedUp(Result<SignUpResponse, AuthError>),
    // Handled by the application shell.
    Notify(Notification),
    Redirect(Route),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    SelectRole(Role),
    FieldEdited(Field, String),
    Submit,
    GoToLogin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: form::Value<String>,
    pub email: form::Value<String>,
    pub password: form::Value<String>,
    pub license_number: form::Value<String>,
}

impl RegistrationForm {
    pub fn get(&self, field: Field) -> &form::Value<String> {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::LicenseNumber => &self.license_number,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut form::Value<String> {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::LicenseNumber => &mut self.license_number,
        }
    }

    /// Replaces the value of the field. A previous validation warning is
    /// cleared, the new value is only checked on submit.
    pub fn set(&mut self, field: Field, value: String) {
        let form = self.get_mut(field);
        form.value = value;
        form.valid = true;
        form.warning = None;
    }

    fn invalidate(&mut self, field: Field, warning: &'static str) {
        let form = self.get_mut(field);
        form.valid = false;
        form.warning = Some(warning);
    }

    /// Checks the fields required by the role, flags the invalid ones and
    /// returns whether the form can be submitted.
    pub fn validate(&mut self, role: Role) -> bool {
        let mut errors = Vec::new();

        if self.full_name.value.trim().is_empty() {
            errors.push((Field::FullName, REQUIRED));
        }

        let email = self.email.value.trim();
        if email.is_empty() {
            errors.push((Field::Email, REQUIRED));
        } else if !email_address::EmailAddress::is_valid(email) {
            errors.push((Field::Email, INVALID_EMAIL));
        }

        if self.password.value.is_empty() {
            errors.push((Field::Password, REQUIRED));
        } else if self.password.value.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push((Field::Password, PASSWORD_TOO_SHORT));
        }

        if role == Role::Professional && self.license_number.value.trim().is_empty() {
            errors.push((Field::LicenseNumber, REQUIRED));
        }

        let valid = errors.is_empty();
        for (field, warning) in errors {
            self.invalidate(field, warning);
        }
        valid
    }

    /// Builds the signup payload, the licence number is only sent for
    /// professionals.
    pub fn request(&self, role: Role) -> SignUpRequest {
        SignUpRequest {
            email: self.email.value.trim().to_string(),
            password: self.password.value.clone(),
            data: UserMetadata {
                full_name: self.full_name.value.clone(),
                role,
                license_number: match role {
                    Role::Professional => Some(self.license_number.value.clone()),
                    Role::Patient => None,
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: Route,
    pub after: Duration,
}

/// Side effects of a resolved signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub notification: Notification,
    pub redirect: Option<Redirect>,
}

pub struct Register {
    auth: Arc<dyn AuthService>,
    role: Role,
    form: RegistrationForm,
    // Email of the signup in flight.
    submitted: Option<String>,
    // Abort the signup in flight and the pending redirection when the screen
    // is dropped.
    signup: Option<task::Handle>,
    redirect: Option<task::Handle>,
}

impl Register {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            auth,
            role: Role::default(),
            form: RegistrationForm::default(),
            submitted: None,
            signup: None,
            redirect: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitted.is_some()
    }

    /// Whether a redirection was scheduled by this visit and not cancelled.
    pub fn redirect_scheduled(&self) -> bool {
        self.redirect.as_ref().is_some_and(|h| !h.is_aborted())
    }

    pub fn select_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Validates the form and, if it is valid and no signup is in flight,
    /// marks the screen as submitting and returns the payload to send.
    pub fn submit(&mut self) -> Option<SignUpRequest> {
        if self.is_submitting() {
            debug!("signup already in flight, ignoring submit");
            return None;
        }
        if !self.form.validate(self.role) {
            debug!("registration form is invalid");
            return None;
        }
        let request = self.form.request(self.role);
        self.submitted = Some(request.email.clone());
        Some(request)
    }

    /// Resolves the signup in flight. A result that no submit of this screen
    /// is waiting for is ignored.
    pub fn on_signed_up(
        &mut self,
        result: Result<SignUpResponse, AuthError>,
    ) -> Option<SignUpOutcome> {
        let Some(email) = self.submitted.take() else {
            debug!("no signup in flight, ignoring result");
            return None;
        };
        self.signup = None;
        Some(match result {
            Ok(res) => {
                info!(
                    "account {} created, email confirmation pending: {}",
                    res.user().id,
                    res.requires_confirmation()
                );
                SignUpOutcome {
                    notification: Notification::new(
                        SUCCESS_TITLE,
                        format!(
                            "Se ha enviado un email de confirmación a {}. Revisa tu bandeja de entrada y spam.",
                            email
                        ),
                    )
                    .with_duration(SUCCESS_TOAST_DURATION),
                    redirect: Some(Redirect {
                        route: Route::Login,
                        after: REDIRECT_DELAY,
                    }),
                }
            }
            Err(e) => {
                warn!("signup failed: {}", e);
                SignUpOutcome {
                    notification: Notification::new(
                        ERROR_TITLE,
                        e.message().unwrap_or(FALLBACK_ERROR),
                    )
                    .destructive(),
                    redirect: None,
                }
            }
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::SelectRole(role)) => self.select_role(role),
            Message::View(ViewMessage::FieldEdited(field, value)) => {
                self.update_field(field, value)
            }
            Message::View(ViewMessage::Submit) => {
                if let Some(request) = self.submit() {
                    let auth = self.auth.clone();
                    let (signup, handle) = Task::perform(
                        async move { auth.sign_up(&request).await },
                        Message::SignedUp,
                    )
                    .abortable();
                    self.signup = Some(handle.abort_on_drop());
                    return signup;
                }
            }
            Message::View(ViewMessage::GoToLogin) => {
                return Task::done(Message::Redirect(Route::Login));
            }
            Message::SignedUp(result) => {
                let Some(SignUpOutcome {
                    notification,
                    redirect,
                }) = self.on_signed_up(result)
                else {
                    return Task::none();
                };
                let notify = Task::done(Message::Notify(notification));
                if let Some(Redirect { route, after }) = redirect {
                    let (redirect, handle) =
                        Task::future(redirect_after(route, after)).abortable();
                    self.redirect = Some(handle.abort_on_drop());
                    return Task::batch([notify, redirect]);
                }
                return notify;
            }
            Message::Notify(_) | Message::Redirect(_) => {}
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        view::register_view(self.role, &self.form, self.is_submitting()).map(Message::View)
    }
}

async fn redirect_after(route: Route, after: Duration) -> Message {
    tokio::time::sleep(after).await;
    Message::Redirect(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{notification::Variant, services::auth::User};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct MockAuth {
        result: Result<SignUpResponse, AuthError>,
        calls: Mutex<Vec<SignUpRequest>>,
    }

    impl MockAuth {
        fn new(result: Result<SignUpResponse, AuthError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<SignUpRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AuthService for MockAuth {
        async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError> {
            self.calls.lock().unwrap().push(request.clone());
            self.result.clone()
        }
    }

    fn confirmation_pending() -> Result<SignUpResponse, AuthError> {
        Ok(SignUpResponse::User(User {
            id: "0b1c".to_string(),
            email: Some("ana@x.com".to_string()),
            confirmation_sent_at: Some("2024-05-01T10:00:00Z".to_string()),
            email_confirmed_at: None,
        }))
    }

    fn failure(message: Option<&str>) -> Result<SignUpResponse, AuthError> {
        Err(AuthError {
            http_status: Some(422),
            code: None,
            message: message.map(|m| m.to_string()),
        })
    }

    fn fill(register: &mut Register, name: &str, email: &str, password: &str) {
        register.update_field(Field::FullName, name.to_string());
        register.update_field(Field::Email, email.to_string());
        register.update_field(Field::Password, password.to_string());
    }

    // Drives a submit through the auth service the way the update loop does.
    async fn submit(register: &mut Register, auth: &MockAuth) -> Option<SignUpOutcome> {
        let request = register.submit()?;
        assert!(register.is_submitting());
        let result = auth.sign_up(&request).await;
        assert!(register.is_submitting());
        let outcome = register.on_signed_up(result);
        assert!(outcome.is_some());
        assert!(!register.is_submitting());
        outcome
    }

    #[tokio::test]
    async fn patient_signup_success() {
        let auth = MockAuth::new(confirmation_pending());
        let mut register = Register::new(auth.clone());
        assert_eq!(register.role(), Role::Patient);
        fill(&mut register, "Ana", "ana@x.com", "secret1");

        let outcome = submit(&mut register, &auth).await.unwrap();
        let calls = auth.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            SignUpRequest {
                email: "ana@x.com".to_string(),
                password: "secret1".to_string(),
                data: UserMetadata {
                    full_name: "Ana".to_string(),
                    role: Role::Patient,
                    license_number: None,
                },
            }
        );

        assert_eq!(outcome.notification.title, SUCCESS_TITLE);
        assert!(outcome.notification.description.contains("ana@x.com"));
        assert_eq!(outcome.notification.variant, Variant::Default);
        assert_eq!(outcome.notification.duration, Some(SUCCESS_TOAST_DURATION));
        assert_eq!(
            outcome.redirect,
            Some(Redirect {
                route: Route::Login,
                after: REDIRECT_DELAY,
            })
        );
    }

    #[tokio::test]
    async fn professional_signup_sends_license() {
        let auth = MockAuth::new(confirmation_pending());
        let mut register = Register::new(auth.clone());
        register.select_role(Role::Professional);
        fill(&mut register, "Luis", "luis@x.com", "secret1");
        register.update_field(Field::LicenseNumber, "12345ABC".to_string());

        submit(&mut register, &auth).await.unwrap();
        let calls = auth.calls();
        assert_eq!(calls[0].data.role, Role::Professional);
        assert_eq!(calls[0].data.license_number.as_deref(), Some("12345ABC"));
    }

    #[test]
    fn switching_back_to_patient_omits_license() {
        let mut register = Register::new(MockAuth::new(confirmation_pending()));
        fill(&mut register, "Ana", "ana@x.com", "secret1");
        register.select_role(Role::Professional);
        register.update_field(Field::LicenseNumber, "12345ABC".to_string());
        register.select_role(Role::Patient);

        let request = register.submit().unwrap();
        assert_eq!(request.data.license_number, None);
        // The value is kept for when the professional role is selected again.
        assert_eq!(register.form().license_number.value, "12345ABC");
    }

    #[tokio::test]
    async fn professional_without_license_is_blocked() {
        let auth = MockAuth::new(confirmation_pending());
        let mut register = Register::new(auth.clone());
        register.select_role(Role::Professional);
        fill(&mut register, "Luis", "luis@x.com", "secret1");

        assert!(submit(&mut register, &auth).await.is_none());
        assert!(auth.calls().is_empty());
        assert!(!register.is_submitting());
        let license = &register.form().license_number;
        assert!(!license.valid);
        assert_eq!(license.warning, Some(REQUIRED));

        // Editing the field clears the warning.
        register.update_field(Field::LicenseNumber, "1".to_string());
        assert!(register.form().license_number.valid);
        assert!(submit(&mut register, &auth).await.is_some());
        assert_eq!(auth.calls().len(), 1);
    }

    #[tokio::test]
    async fn signup_failure_keeps_form() {
        let auth = MockAuth::new(failure(Some("Email already registered")));
        let mut register = Register::new(auth.clone());
        fill(&mut register, "Ana", "ana@x.com", "secret1");
        let before = register.form().clone();

        let outcome = submit(&mut register, &auth).await.unwrap();
        assert_eq!(outcome.notification.title, ERROR_TITLE);
        assert_eq!(outcome.notification.description, "Email already registered");
        assert_eq!(outcome.notification.variant, Variant::Destructive);
        assert_eq!(outcome.redirect, None);
        assert_eq!(register.form(), &before);
        assert_eq!(register.role(), Role::Patient);

        // The same submission can be retried as-is.
        assert!(submit(&mut register, &auth).await.is_some());
        assert_eq!(auth.calls().len(), 2);
    }

    #[tokio::test]
    async fn signup_failure_without_message() {
        for message in [None, Some(""), Some("   ")] {
            let auth = MockAuth::new(failure(message));
            let mut register = Register::new(auth.clone());
            fill(&mut register, "Ana", "ana@x.com", "secret1");
            let outcome = submit(&mut register, &auth).await.unwrap();
            assert_eq!(outcome.notification.description, FALLBACK_ERROR);
        }
    }

    #[test]
    fn submit_is_ignored_while_in_flight() {
        let mut register = Register::new(MockAuth::new(confirmation_pending()));
        fill(&mut register, "Ana", "ana@x.com", "secret1");
        assert!(register.submit().is_some());
        assert!(register.submit().is_none());
        assert!(register.is_submitting());
        assert!(register.on_signed_up(confirmation_pending()).is_some());
        assert!(!register.is_submitting());
    }

    #[test]
    fn update_field_is_idempotent() {
        let mut once = Register::new(MockAuth::new(confirmation_pending()));
        once.update_field(Field::Email, "ana@x.com".to_string());
        let mut twice = Register::new(MockAuth::new(confirmation_pending()));
        twice.update_field(Field::Email, "ana@x.com".to_string());
        twice.update_field(Field::Email, "ana@x.com".to_string());
        assert_eq!(once.form(), twice.form());
        assert_eq!(once.role(), twice.role());
        assert_eq!(once.is_submitting(), twice.is_submitting());
    }

    #[test]
    fn validation_rules() {
        let mut form = RegistrationForm::default();
        assert!(!form.validate(Role::Patient));
        for field in [Field::FullName, Field::Email, Field::Password] {
            assert_eq!(form.get(field).warning, Some(REQUIRED));
        }
        // Not required for patients.
        assert!(form.get(Field::LicenseNumber).valid);

        form.set(Field::FullName, "  ".to_string());
        form.set(Field::Email, "ana@".to_string());
        form.set(Field::Password, "12345".to_string());
        assert!(!form.validate(Role::Patient));
        assert_eq!(form.full_name.warning, Some(REQUIRED));
        assert_eq!(form.email.warning, Some(INVALID_EMAIL));
        assert_eq!(form.password.warning, Some(PASSWORD_TOO_SHORT));

        // Length is counted in characters, not bytes.
        form.set(Field::FullName, "Ana".to_string());
        form.set(Field::Email, " ana@x.com ".to_string());
        form.set(Field::Password, "ñandú1".to_string());
        assert!(form.validate(Role::Patient));
        assert_eq!(form.request(Role::Patient).email, "ana@x.com");
    }

    #[test]
    fn successful_signup_schedules_redirect() {
        let mut register = Register::new(MockAuth::new(confirmation_pending()));
        fill(&mut register, "Ana", "ana@x.com", "secret1");
        let _ = register.update(Message::View(ViewMessage::Submit));
        assert!(register.is_submitting());
        let _ = register.update(Message::SignedUp(confirmation_pending()));
        assert!(register.redirect_scheduled());
        assert!(!register.is_submitting());

        let mut register = Register::new(MockAuth::new(confirmation_pending()));
        fill(&mut register, "Ana", "ana@x.com", "secret1");
        let _ = register.update(Message::View(ViewMessage::Submit));
        let _ = register.update(Message::SignedUp(failure(None)));
        assert!(!register.redirect_scheduled());
    }

    #[test]
    fn result_without_submit_is_ignored() {
        let mut register = Register::new(MockAuth::new(confirmation_pending()));
        assert!(register.on_signed_up(confirmation_pending()).is_none());
        let _ = register.update(Message::SignedUp(confirmation_pending()));
        assert!(!register.redirect_scheduled());
        assert!(!register.is_submitting());
    }

    #[test]
    fn success_toast_uses_submitted_email() {
        let mut register = Register::new(MockAuth::new(confirmation_pending()));
        fill(&mut register, "Ana", " ana@x.com", "secret1");
        assert!(register.submit().is_some());
        let outcome = register.on_signed_up(confirmation_pending()).unwrap();
        assert!(outcome
            .notification
            .description
            .contains("a ana@x.com. Revisa"));
    }

    #[test]
    fn dropping_the_screen_cancels_signup_and_redirect() {
        let mut register = Register::new(MockAuth::new(confirmation_pending()));
        fill(&mut register, "Ana", "ana@x.com", "secret1");
        let _ = register.update(Message::View(ViewMessage::Submit));
        let signup = register.signup.clone().unwrap();
        assert!(!signup.is_aborted());
        drop(register);
        assert!(signup.is_aborted());

        let mut register = Register::new(MockAuth::new(confirmation_pending()));
        fill(&mut register, "Ana", "ana@x.com", "secret1");
        let _ = register.update(Message::View(ViewMessage::Submit));
        let _ = register.update(Message::SignedUp(confirmation_pending()));
        let redirect = register.redirect.clone().unwrap();
        assert!(!redirect.is_aborted());
        drop(register);
        assert!(redirect.is_aborted());
    }

    #[tokio::test(start_paused = true)]
    async fn redirect_fires_after_delay() {
        let mut redirect = std::pin::pin!(redirect_after(Route::Login, REDIRECT_DELAY));
        let early = REDIRECT_DELAY - Duration::from_millis(1);
        assert!(tokio::time::timeout(early, redirect.as_mut()).await.is_err());
        assert!(matches!(
            redirect.await,
            Message::Redirect(Route::Login)
        ));
    }
}
