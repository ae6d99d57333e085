use iced::{widget::Space, Alignment, Length};

use adhera_ui::{
    component::{
        button, card, form, info_box,
        text::{self, Text as _},
    },
    theme,
    widget::*,
};

use super::{Field, RegistrationForm, ViewMessage};
use crate::services::auth::Role;

const AFTER_REGISTERING: [&str; 4] = [
    "• Recibirás un email de confirmación",
    "• Revisa tu bandeja de entrada y spam",
    "• Haz clic en el enlace para activar tu cuenta",
    "• Una vez confirmado, podrás iniciar sesión",
];

pub fn register_view(
    role: Role,
    form: &RegistrationForm,
    submitting: bool,
) -> Element<ViewMessage> {
    let header = Column::new()
        .push(text::h1("Crea tu cuenta"))
        .push(
            text::p1_regular("Elige el tipo de registro que se ajusta a ti")
                .style(theme::text::secondary),
        )
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    let roles = Row::new()
        .push(
            button::choice(
                "Paciente",
                "Recibe recordatorios personalizados y controla tus tomas.",
                role == Role::Patient,
            )
            .on_press(ViewMessage::SelectRole(Role::Patient)),
        )
        .push(
            button::choice(
                "Profesional de salud",
                "Gestiona pacientes, tratamientos y alertas de adherencia.",
                role == Role::Professional,
            )
            .on_press(ViewMessage::SelectRole(Role::Professional)),
        )
        .spacing(24);

    let fields = Column::new()
        .push(
            input(
                "Nombre completo",
                "",
                &form.full_name,
                Field::FullName,
                submitting,
            ),
        )
        .push(
            input(
                "Correo electrónico",
                "tu@email.com",
                &form.email,
                Field::Email,
                submitting,
            )
            .caption("📧 Enviaremos un link de confirmación a este correo"),
        )
        .push(
            input(
                "Contraseña",
                "Mínimo 6 caracteres",
                &form.password,
                Field::Password,
                submitting,
            )
            .secure()
            .caption("🔒 Mínimo 6 caracteres para mayor seguridad"),
        )
        .push_maybe((role == Role::Professional).then(|| {
            input(
                "Número de licencia",
                "Ej: 12345ABC",
                &form.license_number,
                Field::LicenseNumber,
                submitting,
            )
        }))
        .push(
            button::primary(if submitting {
                "Creando cuenta..."
            } else {
                "Crear cuenta"
            })
            .width(Length::Fill)
            .on_press_maybe((!submitting).then_some(ViewMessage::Submit)),
        )
        .push(info_box(
            AFTER_REGISTERING.iter().fold(
                Column::new()
                    .push(text::caption("ℹ️ Después de registrarte:").bold())
                    .spacing(4),
                |col, line| col.push(text::caption(*line)),
            ),
        ))
        .spacing(16);

    let login = Row::new()
        .push(text::caption("¿Ya tienes cuenta?").style(theme::text::secondary))
        .push(button::link("Inicia sesión aquí").on_press(ViewMessage::GoToLogin))
        .spacing(4)
        .align_y(Alignment::Center);

    let form_card = card(
        Column::new()
            .push(text::h4_bold(match role {
                Role::Patient => "Registro de paciente",
                Role::Professional => "Registro de profesional",
            }))
            .push(
                text::p2_regular("Completa tus datos para continuar")
                    .style(theme::text::secondary),
            )
            .push(Space::with_height(8))
            .push(fields)
            .push(Container::new(login).center_x(Length::Fill))
            .spacing(8),
    );

    Container::new(
        Column::new()
            .push(header)
            .push(roles)
            .push(form_card)
            .spacing(32)
            .max_width(768),
    )
    .center_x(Length::Fill)
    .padding(48)
    .style(theme::container::background)
    .height(Length::Fill)
    .into()
}

fn input<'a>(
    label: &'a str,
    placeholder: &str,
    value: &'a form::Value<String>,
    field: Field,
    submitting: bool,
) -> form::Form<'a, ViewMessage> {
    let form = if submitting {
        form::Form::new_disabled(placeholder, value)
    } else if field == Field::Email {
        form::Form::new_trimmed(placeholder, value, move |v| {
            ViewMessage::FieldEdited(field, v)
        })
        .on_submit(ViewMessage::Submit)
    } else {
        form::Form::new(placeholder, value, move |v| {
            ViewMessage::FieldEdited(field, v)
        })
        .on_submit(ViewMessage::Submit)
    };
    form.label(label).padding(10).size(14)
}
