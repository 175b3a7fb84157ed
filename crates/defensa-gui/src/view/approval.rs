//! Account approval view: the administrator picks an action, enters the
//! account's e-mail and sees the backend's verdict.

use iced::widget::{button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length};

use crate::component::{TextField, labeled};
use crate::message::{ApprovalMessage, Message};
use crate::state::Route;
use crate::state::auth::{ApprovalAction, ApprovalState};
use crate::theme::{DANGER, MUTED, SUCCESS};
use crate::view::layout::card_style;

pub fn approval(state: &ApprovalState) -> Element<'_, Message> {
    let action_picker = labeled(
        "Acción",
        pick_list(&ApprovalAction::ALL[..], Some(state.action), |action| {
            Message::Approval(ApprovalMessage::ActionPicked(action))
        })
        .width(Length::Fill)
        .into(),
    );

    let submit = if state.processing {
        button(text("Procesando...")).padding([10.0, 16.0])
    } else {
        button(text("Procesar solicitud"))
            .on_press(Message::Approval(ApprovalMessage::Submit))
            .padding([10.0, 16.0])
    };

    let outcome: Element<'_, Message> = match &state.outcome {
        Some(Ok(message)) => column![
            text("✓").size(36).color(SUCCESS),
            text(message).size(14),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .into(),
        Some(Err(message)) => column![
            text("✗").size(36).color(DANGER),
            text(message).size(14),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .into(),
        None => text("El resultado de la solicitud se mostrará aquí.")
            .size(13)
            .color(MUTED)
            .into(),
    };

    let card = container(
        column![
            text("Aprobación de Usuarios").size(22),
            action_picker,
            TextField::new("Correo electrónico", &state.email, "usuario@reduc.edu.cu", |v| {
                Message::Approval(ApprovalMessage::EmailChanged(v))
            })
            .required(true)
            .view(),
            submit.width(Length::Fill),
            outcome,
            row![
                button(text("Ir a Iniciar Sesión").size(13))
                    .on_press(Message::Navigate(Route::Login))
                    .style(button::text)
                    .padding(0),
            ],
        ]
        .spacing(14)
        .width(400.0),
    )
    .padding(24)
    .style(card_style);

    container(card).center(Length::Fill).into()
}
