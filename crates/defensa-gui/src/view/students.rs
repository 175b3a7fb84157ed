//! Student list and form views.

use iced::widget::{Space, button, column, container, pick_list, row, stack, text};
use iced::{Alignment, Element, Length};

use defensa_model::{Gender, Student};
use defensa_validate::format_display;

use crate::component::{TextField, labeled};
use crate::message::{Message, StudentFormMessage, StudentMessage};
use crate::state::Route;
use crate::state::students::{StudentFormState, StudentListState, YEARS};
use crate::theme::{DANGER, MUTED};
use crate::view::layout::{backdrop, card_style, confirm_overlay, detail_row};

pub fn list(state: &StudentListState) -> Element<'_, Message> {
    let header = row![
        text("Estudiantes").size(22),
        Space::new().width(Length::Fill),
        button(text("Registrar Estudiante"))
            .on_press(Message::Navigate(Route::StudentCreate))
            .padding([8.0, 14.0]),
    ]
    .align_y(Alignment::Center);

    // Name filter with live suggestions underneath.
    let mut name_column = column![
        TextField::new("Nombre", &state.search_name, "Buscar por nombre", |v| {
            Message::Students(StudentMessage::SearchNameChanged(v))
        })
        .view()
    ]
    .spacing(2);
    for suggestion in &state.suggestions {
        name_column = name_column.push(
            button(text(suggestion.clone()).size(12))
                .on_press(Message::Students(StudentMessage::SuggestionPicked(
                    suggestion.clone(),
                )))
                .style(button::text)
                .padding([2.0, 6.0]),
        );
    }

    let year_filter = labeled(
        "Año",
        pick_list(&YEARS[..], state.search_year, |year| {
            Message::Students(StudentMessage::YearPicked(year))
        })
        .placeholder("Año")
        .width(Length::Fill)
        .into(),
    );

    let province_filter = labeled(
        "Provincia",
        pick_list(
            state.provinces.options(),
            state.provinces.selected_option().cloned(),
            |option| Message::Students(StudentMessage::ProvincePicked(option.value)),
        )
        .placeholder("Provincia")
        .width(Length::Fill)
        .into(),
    );

    let filters = row![
        container(name_column).width(Length::FillPortion(2)),
        container(year_filter).width(Length::FillPortion(1)),
        container(province_filter).width(Length::FillPortion(1)),
    ]
    .spacing(12);

    let actions = row![
        button(text("Buscar"))
            .on_press(Message::Students(StudentMessage::Search))
            .padding([8.0, 14.0]),
        button(text("Limpiar"))
            .on_press(Message::Students(StudentMessage::ClearFilters))
            .padding([8.0, 14.0]),
        button(text("Promedio de Edad"))
            .on_press(Message::Students(StudentMessage::AverageAge))
            .padding([8.0, 14.0]),
    ]
    .spacing(8);

    let mut table = column![table_header()].spacing(2);
    if state.students.is_empty() {
        table = table.push(
            container(text("No hay estudiantes para mostrar.").size(13).color(MUTED))
                .padding([12.0, 8.0]),
        );
    }
    for student in &state.students {
        table = table.push(student_row(student));
    }

    let mut page: Element<'_, Message> =
        column![header, filters, actions, table].spacing(16).into();

    if let Some(student) = &state.detail {
        page = stack![page, detail_overlay(student)].into();
    }
    if state.pending_delete.is_some() {
        page = stack![
            page,
            confirm_overlay(
                "¿Seguro que quieres eliminar este estudiante?",
                "Esta acción no se puede deshacer.",
                Message::Students(StudentMessage::DeleteConfirmed),
                Message::Students(StudentMessage::DeleteCancelled),
            )
        ]
        .into();
    }
    page
}

fn table_header() -> Element<'static, Message> {
    container(
        row![
            text("Nombre").size(12).color(MUTED).width(Length::FillPortion(3)),
            text("Género").size(12).color(MUTED).width(Length::FillPortion(1)),
            text("Año").size(12).color(MUTED).width(Length::FillPortion(1)),
            text("Provincia").size(12).color(MUTED).width(Length::FillPortion(2)),
            text("Acciones").size(12).color(MUTED).width(170.0),
        ]
        .spacing(8),
    )
    .padding([6.0, 8.0])
    .into()
}

fn student_row(student: &Student) -> Element<'_, Message> {
    let province = student
        .address
        .province
        .clone()
        .unwrap_or_else(|| "-".to_string());

    let actions: Element<'_, Message> = match student.id {
        Some(id) => row![
            button(text("Ver").size(12))
                .on_press(Message::Students(StudentMessage::ShowDetail(id)))
                .style(button::text)
                .padding([2.0, 6.0]),
            button(text("Editar").size(12))
                .on_press(Message::Navigate(Route::StudentEdit(id)))
                .style(button::text)
                .padding([2.0, 6.0]),
            button(text("Eliminar").size(12))
                .on_press(Message::Students(StudentMessage::DeleteRequested(id)))
                .style(button::danger)
                .padding([2.0, 6.0]),
        ]
        .spacing(4)
        .width(170.0)
        .into(),
        None => Space::new().width(170.0).into(),
    };

    container(
        row![
            text(student.full_name()).size(13).width(Length::FillPortion(3)),
            text(student.gender.label()).size(13).width(Length::FillPortion(1)),
            text(student.year.to_string()).size(13).width(Length::FillPortion(1)),
            text(province).size(13).width(Length::FillPortion(2)),
            actions,
        ]
        .align_y(Alignment::Center)
        .spacing(8),
    )
    .padding([4.0, 8.0])
    .into()
}

fn detail_overlay(student: &Student) -> Element<'_, Message> {
    let birth = student.birth_date.map(format_display).unwrap_or_default();
    let age = student
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".to_string());

    let card = container(
        column![
            text("Detalles del Estudiante").size(18),
            detail_row("Nombre Completo", student.full_name()),
            detail_row("Género", student.gender.label().to_string()),
            detail_row("Fecha de Nacimiento", birth),
            detail_row("Edad", age),
            detail_row("Carrera", student.major.clone()),
            detail_row("Año", student.year.to_string()),
            detail_row(
                "Provincia",
                student.address.province.clone().unwrap_or_default(),
            ),
            detail_row(
                "Municipio",
                student.address.municipality.clone().unwrap_or_default(),
            ),
            detail_row("Dirección Principal", student.address.display_line()),
            button(text("Cerrar"))
                .on_press(Message::Students(StudentMessage::CloseDetail))
                .padding([8.0, 16.0]),
        ]
        .spacing(8),
    )
    .padding(24)
    .max_width(480.0)
    .style(card_style);

    backdrop(card.into())
}

pub fn form(state: &StudentFormState) -> Element<'_, Message> {
    let title = if state.is_edit() {
        "Editar Estudiante"
    } else {
        "Registrar Estudiante"
    };

    let names = row![
        TextField::new("Nombres", &state.first_name, "Ingresar Nombres", |v| {
            Message::Students(StudentMessage::Form(StudentFormMessage::FirstNameChanged(v)))
        })
        .max_length(100)
        .required(true)
        .error(state.report.message_for("firstName"))
        .view(),
        TextField::new("Apellidos", &state.last_name, "Ingresar Apellidos", |v| {
            Message::Students(StudentMessage::Form(StudentFormMessage::LastNameChanged(v)))
        })
        .max_length(100)
        .required(true)
        .error(state.report.message_for("lastName"))
        .view(),
    ]
    .spacing(12);

    let gender = with_error(
        labeled(
            "Género",
            pick_list(&Gender::ALL[..], state.gender, |gender| {
                Message::Students(StudentMessage::Form(StudentFormMessage::GenderPicked(gender)))
            })
            .placeholder("Género")
            .width(Length::Fill)
            .into(),
        ),
        state.report.message_for("gender"),
    );

    let birth = TextField::new("Fecha de Nacimiento", &state.birth_date, "AAAA-MM-DD", |v| {
        Message::Students(StudentMessage::Form(StudentFormMessage::BirthDateChanged(v)))
    })
    .required(true)
    .error(state.report.message_for("birthDate"))
    .view();

    let major = with_error(
        labeled(
            "Carrera",
            pick_list(
                state.major.options(),
                state.major.selected_option().cloned(),
                |option| {
                    Message::Students(StudentMessage::Form(StudentFormMessage::MajorPicked(
                        option.value,
                    )))
                },
            )
            .placeholder("Carrera")
            .width(Length::Fill)
            .into(),
        ),
        state.report.message_for("major"),
    );

    let province = with_error(
        labeled(
            "Provincia",
            pick_list(
                state.location.primary_options(),
                state.location.selected_primary().cloned(),
                |option| {
                    Message::Students(StudentMessage::Form(StudentFormMessage::ProvincePicked(
                        option.value,
                    )))
                },
            )
            .placeholder("Provincia")
            .width(Length::Fill)
            .into(),
        ),
        state.report.message_for("idProvince"),
    );

    let municipality: Element<'_, Message> = if state.location.is_loading() {
        labeled(
            "Municipio",
            text("Cargando municipios...").size(13).color(MUTED).into(),
        )
    } else if state.location.secondary_enabled() {
        with_error(
            labeled(
                "Municipio",
                pick_list(
                    state.location.secondary_options(),
                    state.location.selected_secondary().cloned(),
                    |option| form_msg(StudentFormMessage::MunicipalityPicked(option.value)),
                )
                .placeholder("Municipio")
                .width(Length::Fill)
                .into(),
            ),
            state.report.message_for("idMunicipality"),
        )
    } else {
        labeled(
            "Municipio",
            text("Seleccione una provincia primero")
                .size(13)
                .color(MUTED)
                .into(),
        )
    };

    let address = row![
        container(
            TextField::new("Calle", &state.street, "Calle", |v| {
                Message::Students(StudentMessage::Form(StudentFormMessage::StreetChanged(v)))
            })
            .max_length(150)
            .required(true)
            .error(state.report.message_for("street"))
            .view()
        )
        .width(Length::FillPortion(2)),
        container(
            TextField::new("Número", &state.number, "Número", |v| {
                Message::Students(StudentMessage::Form(StudentFormMessage::NumberChanged(v)))
            })
            .max_length(10)
            .required(true)
            .error(state.report.message_for("number"))
            .view()
        )
        .width(Length::FillPortion(1)),
    ]
    .spacing(12);

    let save = if state.saving {
        button(text("Guardando...")).padding([10.0, 18.0])
    } else {
        button(text("Guardar"))
            .on_press(form_msg(StudentFormMessage::Save))
            .padding([10.0, 18.0])
    };
    let buttons = row![
        save,
        button(text("Cancelar"))
            .on_press(form_msg(StudentFormMessage::Cancel))
            .style(button::secondary)
            .padding([10.0, 18.0]),
    ]
    .spacing(12);

    column![
        text(title).size(22),
        names,
        row![
            container(gender).width(Length::FillPortion(1)),
            container(birth).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        major,
        row![
            container(province).width(Length::FillPortion(1)),
            container(municipality).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        address,
        container(buttons).center_x(Length::Fill),
    ]
    .spacing(16)
    .max_width(760.0)
    .into()
}

fn form_msg(msg: StudentFormMessage) -> Message {
    Message::Students(StudentMessage::Form(msg))
}

fn with_error<'a>(element: Element<'a, Message>, error: Option<&str>) -> Element<'a, Message> {
    match error {
        Some(message) => column![
            element,
            text(message.to_string()).size(11).color(DANGER),
        ]
        .spacing(2)
        .into(),
        None => element,
    }
}
