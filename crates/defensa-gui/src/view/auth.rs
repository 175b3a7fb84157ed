//! Login, registration and registration-success views.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use defensa_validate::PasswordStrength;

use crate::component::TextField;
use crate::message::{LoginMessage, Message, RegisterMessage};
use crate::state::Route;
use crate::state::auth::{LoginState, RegisterState};
use crate::theme::{DANGER, MUTED, SUCCESS};
use crate::view::layout::card_style;

pub fn login<'a>(state: &'a LoginState, api_url: &'a str) -> Element<'a, Message> {
    let submit = if state.submitting {
        button(text("Ingresando...")).padding([10.0, 16.0])
    } else {
        button(text("Ingresar"))
            .on_press(Message::Login(LoginMessage::Submit))
            .padding([10.0, 16.0])
    };

    let card = container(
        column![
            text("Iniciar Sesión").size(22),
            TextField::new("Usuario", &state.username, "Nombre de usuario", |v| {
                Message::Login(LoginMessage::UsernameChanged(v))
            })
            .view(),
            TextField::new("Contraseña", &state.password, "", |v| {
                Message::Login(LoginMessage::PasswordChanged(v))
            })
            .secure(true)
            .view(),
            submit.width(Length::Fill),
            row![
                text("¿Eres nuevo? ").size(13).color(MUTED),
                button(text("Regístrate aquí").size(13))
                    .on_press(Message::Navigate(Route::Register))
                    .style(button::text)
                    .padding(0),
            ]
            .align_y(Alignment::Center),
            row![
                text("¿Gestionas cuentas? ").size(13).color(MUTED),
                button(text("Aprobación de usuarios").size(13))
                    .on_press(Message::Navigate(Route::Approval))
                    .style(button::text)
                    .padding(0),
            ]
            .align_y(Alignment::Center),
            text(format!("Servidor: {api_url}")).size(11).color(MUTED),
        ]
        .spacing(14)
        .width(360.0),
    )
    .padding(24)
    .style(card_style);

    container(card).center(Length::Fill).into()
}

pub fn register(state: &RegisterState) -> Element<'_, Message> {
    let strength = PasswordStrength::evaluate(&state.password);

    let mut checklist = column![].spacing(2);
    for (label, satisfied) in strength.checklist() {
        checklist = checklist.push(checklist_line(label, satisfied));
    }
    let passwords_match =
        !state.confirm_password.is_empty() && state.password == state.confirm_password;
    checklist = checklist.push(checklist_line("Las contraseñas deben coincidir", passwords_match));

    let submit = if state.submitting {
        button(text("Registrando...")).padding([10.0, 16.0])
    } else {
        button(text("Registrarse"))
            .on_press(Message::Register(RegisterMessage::Submit))
            .padding([10.0, 16.0])
    };

    let card = container(
        column![
            text("Crear una cuenta").size(22),
            TextField::new("Nombre", &state.first_name, "", |v| {
                Message::Register(RegisterMessage::FirstNameChanged(v))
            })
            .max_length(100)
            .required(true)
            .error(state.report.message_for("firstName"))
            .view(),
            TextField::new("Apellido", &state.last_name, "", |v| {
                Message::Register(RegisterMessage::LastNameChanged(v))
            })
            .max_length(100)
            .required(true)
            .error(state.report.message_for("lastName"))
            .view(),
            TextField::new("Nombre de usuario", &state.username, "", |v| {
                Message::Register(RegisterMessage::UsernameChanged(v))
            })
            .max_length(20)
            .required(true)
            .error(state.report.message_for("username"))
            .view(),
            TextField::new("Correo electrónico", &state.email, "", |v| {
                Message::Register(RegisterMessage::EmailChanged(v))
            })
            .max_length(100)
            .required(true)
            .error(state.report.message_for("email"))
            .view(),
            TextField::new("Contraseña", &state.password, "", |v| {
                Message::Register(RegisterMessage::PasswordChanged(v))
            })
            .secure(true)
            .max_length(100)
            .required(true)
            .error(state.report.message_for("password"))
            .view(),
            TextField::new("Confirmar contraseña", &state.confirm_password, "", |v| {
                Message::Register(RegisterMessage::ConfirmPasswordChanged(v))
            })
            .secure(true)
            .max_length(100)
            .required(true)
            .error(state.report.message_for("confirmPassword"))
            .view(),
            checklist,
            submit.width(Length::Fill),
            row![
                text("¿Ya tienes cuenta? ").size(13).color(MUTED),
                button(text("Inicia sesión aquí").size(13))
                    .on_press(Message::Navigate(Route::Login))
                    .style(button::text)
                    .padding(0),
            ]
            .align_y(Alignment::Center),
        ]
        .spacing(12)
        .width(420.0),
    )
    .padding(24)
    .style(card_style);

    container(iced::widget::scrollable(container(card).center_x(Length::Fill).padding(24)))
        .center_x(Length::Fill)
        .into()
}

pub fn register_success() -> Element<'static, Message> {
    let card = container(
        column![
            text("✓").size(48).color(SUCCESS),
            text("¡Usuario creado correctamente!").size(20),
            text(
                "Tu usuario fue registrado con éxito. Enviamos un correo a los \
                 administradores para que verifiquen y validen tu cuenta."
            )
            .size(14),
            text("Recibirás una notificación cuando tu cuenta sea activada.")
                .size(14)
                .color(MUTED),
            button(text("Ir a Iniciar Sesión"))
                .on_press(Message::Navigate(Route::Login))
                .padding([10.0, 16.0]),
        ]
        .spacing(14)
        .align_x(Alignment::Center)
        .width(440.0),
    )
    .padding(24)
    .style(card_style);

    container(card).center(Length::Fill).into()
}

fn checklist_line(label: &str, satisfied: bool) -> Element<'static, Message> {
    let (mark, color) = if satisfied {
        ("✓", SUCCESS)
    } else {
        ("✗", DANGER)
    };
    row![
        text(mark).size(12).color(color),
        Space::new().width(6.0),
        text(label.to_string()).size(12).color(MUTED),
    ]
    .align_y(Alignment::Center)
    .into()
}
