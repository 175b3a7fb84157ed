//! Professor list and form views.

use iced::widget::{Space, button, checkbox, column, container, pick_list, row, stack, text};
use iced::{Alignment, Element, Length};

use defensa_model::{Gender, Professor};
use defensa_validate::format_display;

use crate::component::{TextField, labeled};
use crate::message::{Message, ProfessorFormMessage, ProfessorMessage};
use crate::state::Route;
use crate::state::professors::{
    AbroadChoice, ProfessorFilterMode, ProfessorFormState, ProfessorListState,
};
use crate::theme::{DANGER, MUTED};
use crate::view::layout::{backdrop, card_style, confirm_overlay, detail_row};

pub fn list(state: &ProfessorListState) -> Element<'_, Message> {
    let header = row![
        text("Profesores").size(22),
        Space::new().width(Length::Fill),
        button(text("Registrar Profesor"))
            .on_press(Message::Navigate(Route::ProfessorCreate))
            .padding([8.0, 14.0]),
    ]
    .align_y(Alignment::Center);

    let mode_picker = labeled(
        "Consulta",
        pick_list(&ProfessorFilterMode::ALL[..], Some(state.mode), |mode| {
            Message::Professors(ProfessorMessage::ModePicked(mode))
        })
        .width(Length::Fill)
        .into(),
    );

    let filters: Element<'_, Message> = match state.mode {
        ProfessorFilterMode::AverageAge => average_age_filters(state),
        ProfessorFilterMode::OldestAddress => oldest_address_filters(state),
        ProfessorFilterMode::Search => search_filters(state),
    };

    let mut table = column![table_header()].spacing(2);
    if state.professors.is_empty() {
        table = table.push(
            container(text("No hay profesores para mostrar.").size(13).color(MUTED))
                .padding([12.0, 8.0]),
        );
    }
    for professor in &state.professors {
        table = table.push(professor_row(professor));
    }

    let mut page: Element<'_, Message> = column![
        header,
        row![container(mode_picker).width(280.0)],
        filters,
        table,
    ]
    .spacing(16)
    .into();

    if let Some(professor) = &state.detail {
        page = stack![page, detail_overlay(professor)].into();
    }
    if state.pending_delete.is_some() {
        page = stack![
            page,
            confirm_overlay(
                "¿Seguro que quieres eliminar este profesor?",
                "Esta acción no se puede deshacer.",
                Message::Professors(ProfessorMessage::DeleteConfirmed),
                Message::Professors(ProfessorMessage::DeleteCancelled),
            )
        ]
        .into();
    }
    page
}

fn province_filter(state: &ProfessorListState) -> Element<'_, Message> {
    labeled(
        "Provincia",
        pick_list(
            state.location.primary_options(),
            state.location.selected_primary().cloned(),
            |option| Message::Professors(ProfessorMessage::ProvincePicked(option.value)),
        )
        .placeholder("Provincia")
        .width(Length::Fill)
        .into(),
    )
}

fn municipality_filter(state: &ProfessorListState) -> Element<'_, Message> {
    if state.location.is_loading() {
        labeled(
            "Municipio",
            text("Cargando municipios...").size(13).color(MUTED).into(),
        )
    } else if state.location.secondary_enabled() {
        labeled(
            "Municipio",
            pick_list(
                state.location.secondary_options(),
                state.location.selected_secondary().cloned(),
                |option| Message::Professors(ProfessorMessage::MunicipalityPicked(option.value)),
            )
            .placeholder("Municipio")
            .width(Length::Fill)
            .into(),
        )
    } else {
        labeled(
            "Municipio",
            text("Seleccione una provincia primero")
                .size(13)
                .color(MUTED)
                .into(),
        )
    }
}

fn abroad_filter(state: &ProfessorListState) -> Element<'_, Message> {
    labeled(
        "¿Salió al extranjero?",
        pick_list(
            &AbroadChoice::ALL[..],
            state.went_abroad.map(AbroadChoice::from_bool),
            |choice| Message::Professors(ProfessorMessage::AbroadPicked(choice.as_bool())),
        )
        .placeholder("Seleccione")
        .width(Length::Fill)
        .into(),
    )
}

fn average_age_filters(state: &ProfessorListState) -> Element<'_, Message> {
    let area = labeled(
        "Área",
        pick_list(
            state.area.options(),
            state.area.selected_option().cloned(),
            |option| Message::Professors(ProfessorMessage::AreaPicked(option.value)),
        )
        .placeholder("Área")
        .width(Length::Fill)
        .into(),
    );

    column![
        row![
            container(area).width(Length::FillPortion(1)),
            container(province_filter(state)).width(Length::FillPortion(1)),
            container(abroad_filter(state)).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        button(text("Calcular Promedio"))
            .on_press(Message::Professors(ProfessorMessage::AverageAge))
            .padding([8.0, 14.0]),
    ]
    .spacing(12)
    .into()
}

fn oldest_address_filters(state: &ProfessorListState) -> Element<'_, Message> {
    column![
        row![
            container(province_filter(state)).width(Length::FillPortion(1)),
            container(municipality_filter(state)).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        text("Se excluye el municipio seleccionado de la consulta.")
            .size(12)
            .color(MUTED),
        button(text("Consultar Dirección"))
            .on_press(Message::Professors(ProfessorMessage::OldestAddress))
            .padding([8.0, 14.0]),
    ]
    .spacing(12)
    .into()
}

fn search_filters(state: &ProfessorListState) -> Element<'_, Message> {
    let rank = labeled(
        "Categoría Docente",
        pick_list(
            state.academic_rank.options(),
            state.academic_rank.selected_option().cloned(),
            |option| Message::Professors(ProfessorMessage::RankPicked(option.value)),
        )
        .placeholder("Categoría Docente")
        .width(Length::Fill)
        .into(),
    );

    column![
        row![
            container(province_filter(state)).width(Length::FillPortion(1)),
            container(municipality_filter(state)).width(Length::FillPortion(1)),
            container(rank).width(Length::FillPortion(1)),
            container(abroad_filter(state)).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        row![
            button(text("Buscar"))
                .on_press(Message::Professors(ProfessorMessage::Search))
                .padding([8.0, 14.0]),
            button(text("Limpiar"))
                .on_press(Message::Professors(ProfessorMessage::ClearFilters))
                .padding([8.0, 14.0]),
        ]
        .spacing(8),
    ]
    .spacing(12)
    .into()
}

fn table_header() -> Element<'static, Message> {
    container(
        row![
            text("Nombre").size(12).color(MUTED).width(Length::FillPortion(3)),
            text("Categoría Docente").size(12).color(MUTED).width(Length::FillPortion(2)),
            text("Categoría Científica").size(12).color(MUTED).width(Length::FillPortion(2)),
            text("Extranjero").size(12).color(MUTED).width(Length::FillPortion(1)),
            text("Provincia").size(12).color(MUTED).width(Length::FillPortion(2)),
            text("Acciones").size(12).color(MUTED).width(170.0),
        ]
        .spacing(8),
    )
    .padding([6.0, 8.0])
    .into()
}

fn professor_row(professor: &Professor) -> Element<'_, Message> {
    let province = professor
        .address
        .province
        .clone()
        .unwrap_or_else(|| "-".to_string());
    let abroad = if professor.went_abroad { "Sí" } else { "No" };

    let actions: Element<'_, Message> = match professor.id {
        Some(id) => row![
            button(text("Ver").size(12))
                .on_press(Message::Professors(ProfessorMessage::ShowDetail(id)))
                .style(button::text)
                .padding([2.0, 6.0]),
            button(text("Editar").size(12))
                .on_press(Message::Navigate(Route::ProfessorEdit(id)))
                .style(button::text)
                .padding([2.0, 6.0]),
            button(text("Eliminar").size(12))
                .on_press(Message::Professors(ProfessorMessage::DeleteRequested(id)))
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
            text(professor.full_name()).size(13).width(Length::FillPortion(3)),
            text(professor.academic_rank.clone()).size(13).width(Length::FillPortion(2)),
            text(professor.scientific_category.clone())
                .size(13)
                .width(Length::FillPortion(2)),
            text(abroad).size(13).width(Length::FillPortion(1)),
            text(province).size(13).width(Length::FillPortion(2)),
            actions,
        ]
        .align_y(Alignment::Center)
        .spacing(8),
    )
    .padding([4.0, 8.0])
    .into()
}

fn detail_overlay(professor: &Professor) -> Element<'_, Message> {
    let birth = professor.birth_date.map(format_display).unwrap_or_default();
    let abroad = if professor.went_abroad { "Sí" } else { "No" };

    let card = container(
        column![
            text("Detalles del Profesor").size(18),
            detail_row("Nombre Completo", professor.full_name()),
            detail_row("Género", professor.gender.label().to_string()),
            detail_row("Fecha de Nacimiento", birth),
            detail_row("Edad", professor.age.to_string()),
            detail_row("Área", professor.area.clone()),
            detail_row("Categoría Docente", professor.academic_rank.clone()),
            detail_row("Categoría Científica", professor.scientific_category.clone()),
            detail_row("Salió al Extranjero", abroad.to_string()),
            detail_row(
                "Provincia",
                professor.address.province.clone().unwrap_or_default(),
            ),
            detail_row(
                "Municipio",
                professor.address.municipality.clone().unwrap_or_default(),
            ),
            detail_row("Dirección Principal", professor.address.display_line()),
            button(text("Cerrar"))
                .on_press(Message::Professors(ProfessorMessage::CloseDetail))
                .padding([8.0, 16.0]),
        ]
        .spacing(8),
    )
    .padding(24)
    .max_width(480.0)
    .style(card_style);

    backdrop(card.into())
}

pub fn form(state: &ProfessorFormState) -> Element<'_, Message> {
    let title = if state.is_edit() {
        "Editar Profesor"
    } else {
        "Registrar Profesor"
    };

    let names = row![
        TextField::new("Nombres", &state.first_name, "Ingresar Nombres", |v| {
            Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::FirstNameChanged(v)))
        })
        .max_length(100)
        .required(true)
        .error(state.report.message_for("firstName"))
        .view(),
        TextField::new("Apellidos", &state.last_name, "Ingresar Apellidos", |v| {
            Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::LastNameChanged(v)))
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
                Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::GenderPicked(
                    gender,
                )))
            })
            .placeholder("Género")
            .width(Length::Fill)
            .into(),
        ),
        state.report.message_for("gender"),
    );

    let birth = TextField::new("Fecha de Nacimiento", &state.birth_date, "AAAA-MM-DD", |v| {
        Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::BirthDateChanged(v)))
    })
    .required(true)
    .error(state.report.message_for("birthDate"))
    .view();

    let age = labeled("Edad", text(state.age.to_string()).size(14).into());

    let area = with_error(
        name_catalog(
            "Área",
            state.area.options(),
            state.area.selected_option().cloned(),
            |option| form_msg(ProfessorFormMessage::AreaPicked(option)),
        ),
        state.report.message_for("area"),
    );
    let rank = with_error(
        name_catalog(
            "Categoría Docente",
            state.academic_rank.options(),
            state.academic_rank.selected_option().cloned(),
            |option| form_msg(ProfessorFormMessage::RankPicked(option)),
        ),
        state.report.message_for("academicRank"),
    );
    let category = with_error(
        name_catalog(
            "Categoría Científica",
            state.scientific_category.options(),
            state.scientific_category.selected_option().cloned(),
            |option| form_msg(ProfessorFormMessage::CategoryPicked(option)),
        ),
        state.report.message_for("scientificCategory"),
    );

    let abroad = labeled(
        "Viaje al extranjero",
        checkbox(state.went_abroad)
            .label("Salió al extranjero")
            .on_toggle(|value| {
                Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::AbroadToggled(
                    value,
                )))
            })
            .size(16)
            .into(),
    );

    let province = with_error(
        labeled(
            "Provincia",
            pick_list(
                state.location.primary_options(),
                state.location.selected_primary().cloned(),
                |option| form_msg(ProfessorFormMessage::ProvincePicked(option.value)),
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
                    |option| form_msg(ProfessorFormMessage::MunicipalityPicked(option.value)),
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
                Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::StreetChanged(v)))
            })
            .max_length(150)
            .required(true)
            .error(state.report.message_for("street"))
            .view()
        )
        .width(Length::FillPortion(2)),
        container(
            TextField::new("Número", &state.number, "Número", |v| {
                Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::NumberChanged(v)))
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
            .on_press(form_msg(ProfessorFormMessage::Save))
            .padding([10.0, 18.0])
    };
    let buttons = row![
        save,
        button(text("Cancelar"))
            .on_press(form_msg(ProfessorFormMessage::Cancel))
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
            container(age).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        row![
            container(area).width(Length::FillPortion(1)),
            container(rank).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        row![
            container(category).width(Length::FillPortion(1)),
            container(abroad).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        row![
            container(province).width(Length::FillPortion(1)),
            container(municipality).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        address,
        container(buttons).center_x(Length::Fill),
    ]
    .spacing(16)
    .max_width(820.0)
    .into()
}

fn name_catalog<'a>(
    label: &str,
    options: &'a [defensa_select::SelectOption<String>],
    selected: Option<defensa_select::SelectOption<String>>,
    on_pick: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    labeled(
        label,
        pick_list(options, selected, move |option| on_pick(option.value))
            .placeholder(label.to_string())
            .width(Length::Fill)
            .into(),
    )
}

fn form_msg(msg: ProfessorFormMessage) -> Message {
    Message::Professors(ProfessorMessage::Form(msg))
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
