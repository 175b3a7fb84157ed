//! Page chrome: header, collapsible sidebar, footer, busy overlay and the
//! toast overlay. The chrome reads the explicit layout state handed down
//! from the root instead of reacting to broadcast events.

use chrono::Datelike;
use iced::widget::{Space, button, column, container, row, scrollable, stack, text};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::message::{Message, ToastMessage};
use crate::state::layout::{Toast, ToastSeverity};
use crate::state::{AppState, Route, ViewState};
use crate::theme::{DANGER, HEADER_BLUE, MUTED, SUCCESS, WARNING};

/// Wrap a view in the chrome appropriate for the session state, then the
/// busy and toast overlays.
pub fn page<'a>(state: &'a AppState, content: Element<'a, Message>) -> Element<'a, Message> {
    let uses_chrome = matches!(
        state.view,
        ViewState::Home
            | ViewState::Students(_)
            | ViewState::StudentForm(_)
            | ViewState::Professors(_)
            | ViewState::ProfessorForm(_)
    );

    let mut page: Element<'a, Message> = if uses_chrome {
        chrome(state, content)
    } else {
        content
    };

    if state.layout.is_busy() {
        page = stack![page, busy_overlay()].into();
    }
    if let Some(toast) = &state.toast {
        page = stack![page, toast_overlay(toast)].into();
    }
    page
}

/// White card used by overlays and the centered auth screens.
pub fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: iced::border::rounded(8.0),
        ..container::Style::default()
    }
}

/// Centered confirmation card over a dimmed backdrop.
pub fn confirm_overlay<'a>(
    question: &'a str,
    note: &'a str,
    on_confirm: Message,
    on_cancel: Message,
) -> Element<'a, Message> {
    let card = container(
        column![
            text(question).size(16),
            text(note).size(13).color(MUTED),
            row![
                button(text("Cancelar")).on_press(on_cancel).padding([8.0, 16.0]),
                Space::new().width(12.0),
                button(text("Sí, eliminar"))
                    .on_press(on_confirm)
                    .style(button::danger)
                    .padding([8.0, 16.0]),
            ],
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .max_width(420.0)
    .style(card_style);

    backdrop(card.into())
}

/// Dim the page behind a centered element.
pub fn backdrop(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .center(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: 0.35,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        })
        .into()
}

/// One label/value line of a detail card.
pub fn detail_row<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(13).color(MUTED).width(180.0),
        text(value).size(13),
    ]
    .into()
}

fn chrome<'a>(state: &'a AppState, content: Element<'a, Message>) -> Element<'a, Message> {
    let main = scrollable(container(content).padding(16).width(Length::Fill)).height(Length::Fill);

    let body: Element<'a, Message> = if state.layout.sidebar_open {
        row![sidebar(&state.view), main].into()
    } else {
        main.into()
    };

    column![
        header(),
        container(body).height(Length::Fill),
        footer(),
    ]
    .into()
}

fn header() -> Element<'static, Message> {
    container(
        row![
            button(text("☰").size(18))
                .on_press(Message::ToggleSidebar)
                .style(button::text)
                .padding([4.0, 10.0]),
            Space::new().width(10.0),
            text("Defensa UC").size(20).color(Color::WHITE),
            Space::new().width(Length::Fill),
            button(text("Cerrar Sesión").size(14))
                .on_press(Message::Logout)
                .padding([6.0, 14.0]),
        ]
        .align_y(Alignment::Center),
    )
    .padding([12.0, 16.0])
    .width(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(HEADER_BLUE.into()),
        ..container::Style::default()
    })
    .into()
}

fn sidebar(view: &ViewState) -> Element<'static, Message> {
    let entries = [
        ("Inicio", Route::Home, matches!(view, ViewState::Home)),
        (
            "Estudiantes",
            Route::Students,
            matches!(view, ViewState::Students(_) | ViewState::StudentForm(_)),
        ),
        (
            "Profesores",
            Route::Professors,
            matches!(view, ViewState::Professors(_) | ViewState::ProfessorForm(_)),
        ),
    ];

    let mut items = column![text("Menú").size(16)].spacing(6);
    for (label, route, active) in entries {
        let entry = button(text(label).size(15))
            .on_press(Message::Navigate(route))
            .width(Length::Fill)
            .padding([10.0, 16.0])
            .style(if active { button::primary } else { button::text });
        items = items.push(entry);
    }

    container(items).padding(12).width(210.0).into()
}

fn footer() -> Element<'static, Message> {
    let year = chrono::Local::now().year();
    container(
        text(format!(
            "© {year} Universidad de Camagüey - Todos los derechos reservados"
        ))
        .size(12)
        .color(MUTED),
    )
    .center_x(Length::Fill)
    .padding(10)
    .into()
}

fn busy_overlay<'a>() -> Element<'a, Message> {
    let card = container(
        column![
            text("Cargando...").size(18),
            text("Por favor espere un momento.").size(13).color(MUTED),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .style(card_style);

    backdrop(card.into())
}

fn toast_overlay<'a>(toast: &'a Toast) -> Element<'a, Message> {
    let accent = match toast.severity {
        ToastSeverity::Success => SUCCESS,
        ToastSeverity::Info => HEADER_BLUE,
        ToastSeverity::Warning => WARNING,
        ToastSeverity::Error => DANGER,
    };

    let card = container(
        row![
            column![
                text(&toast.title).size(14).color(accent),
                text(&toast.detail).size(13),
            ]
            .spacing(2),
            Space::new().width(16.0),
            button(text("✕").size(12))
                .on_press(Message::Toast(ToastMessage::Dismiss))
                .style(button::text),
        ]
        .align_y(Alignment::Center),
    )
    .padding(12)
    .max_width(440.0)
    .style(card_style);

    column![
        Space::new().height(Length::Fill),
        row![Space::new().width(Length::Fill), card, Space::new().width(20.0)],
        Space::new().height(20.0),
    ]
    .into()
}
