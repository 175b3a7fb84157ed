//! Landing view shown after login.

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme::MUTED;

pub fn home() -> Element<'static, Message> {
    container(
        column![
            text("Bienvenido al Sistema de Defensa").size(24),
            text("Bienvenido, estás en el menú principal.").size(14).color(MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding([40.0, 0.0])
    .into()
}
