//! Professor screen handlers: the three query modes (average age, oldest
//! professor's address, rank/abroad search), delete with confirmation, and
//! the create/edit form with its catalogs and location cascade.

use chrono::Local;
use iced::Task;

use defensa_client::{CatalogKind, ProfessorSearch};
use defensa_model::{Address, Gender, Professor};
use defensa_select::{ResolveOutcome, bind};
use defensa_validate::{FieldKind, FormCheck, age_on, parse_birth_date};

use crate::app::App;
use crate::message::{Message, ProfessorFormMessage, ProfessorMessage};
use crate::service;
use crate::state::layout::Toast;
use crate::state::professors::{ProfessorFormState, ProfessorListState};
use crate::state::{Route, ViewState};

impl App {
    /// Enter the professor list with the filter catalogs and an open search.
    pub(crate) fn open_professors(&mut self) -> Task<Message> {
        let mut state = ProfessorListState::default();
        let areas_token = state.area.begin_load();
        let ranks_token = state.academic_rank.begin_load();
        self.state.view = ViewState::Professors(state);

        let client = &self.state.client;
        let provinces = service::load_form_provinces(client, |result| {
            Message::Professors(ProfessorMessage::ProvincesLoaded(result))
        });
        let areas = service::load_catalog(client, CatalogKind::Areas, areas_token, |token, result| {
            Message::Professors(ProfessorMessage::AreasLoaded { token, result })
        });
        let ranks = service::load_catalog(
            client,
            CatalogKind::AcademicRanks,
            ranks_token,
            |token, result| Message::Professors(ProfessorMessage::RanksLoaded { token, result }),
        );
        let search = self.search_professors(ProfessorSearch::default());
        Task::batch([provinces, areas, ranks, search])
    }

    /// Enter the professor form, loading the three catalogs, the provinces
    /// and, when editing, the record itself.
    pub(crate) fn open_professor_form(&mut self, id: Option<i64>) -> Task<Message> {
        let mut state = match id {
            Some(id) => ProfessorFormState::edit(id),
            None => ProfessorFormState::create(),
        };
        let areas_token = state.area.begin_load();
        let ranks_token = state.academic_rank.begin_load();
        let categories_token = state.scientific_category.begin_load();
        self.state.view = ViewState::ProfessorForm(state);

        let client = &self.state.client;
        let mut tasks = vec![
            service::load_form_provinces(client, |result| {
                Message::Professors(ProfessorMessage::Form(
                    ProfessorFormMessage::ProvincesLoaded(result),
                ))
            }),
            service::load_catalog(client, CatalogKind::Areas, areas_token, |token, result| {
                Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::AreasLoaded {
                    token,
                    result,
                }))
            }),
            service::load_catalog(
                client,
                CatalogKind::AcademicRanks,
                ranks_token,
                |token, result| {
                    Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::RanksLoaded {
                        token,
                        result,
                    }))
                },
            ),
            service::load_catalog(
                client,
                CatalogKind::ScientificCategories,
                categories_token,
                |token, result| {
                    Message::Professors(ProfessorMessage::Form(
                        ProfessorFormMessage::CategoriesLoaded { token, result },
                    ))
                },
            ),
        ];
        if let Some(id) = id {
            let client = client.clone();
            tasks.push(Task::perform(
                async move { client.professor_by_id(id).await },
                |result| {
                    Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::RecordLoaded(
                        result,
                    )))
                },
            ));
        }
        Task::batch(tasks)
    }

    fn search_professors(&mut self, filter: ProfessorSearch) -> Task<Message> {
        self.state.layout.begin_busy();
        let client = self.state.client.clone();
        Task::perform(
            async move { client.search_professors(&filter).await },
            |result| Message::Professors(ProfessorMessage::ResultsLoaded(result)),
        )
    }

    fn current_professor_filter(&mut self) -> ProfessorSearch {
        self.professors_state()
            .map(|state| ProfessorSearch {
                province: state.location.selected_primary().map(|o| o.label.clone()),
                municipality: state.location.selected_secondary().map(|o| o.label.clone()),
                went_abroad: state.went_abroad,
                academic_rank: state.academic_rank.selected_option().map(|o| o.label.clone()),
            })
            .unwrap_or_default()
    }

    pub(crate) fn handle_professor_message(&mut self, msg: ProfessorMessage) -> Task<Message> {
        match msg {
            ProfessorMessage::ModePicked(mode) => {
                if let Some(state) = self.professors_state() {
                    state.mode = mode;
                    state.reset_filters();
                }
                Task::none()
            }

            ProfessorMessage::ProvincesLoaded(result) => {
                match result {
                    Ok(options) => {
                        if let Some(state) = self.professors_state() {
                            state.location.set_primary_options(options);
                        }
                    }
                    Err(error) => self.source_error(&error),
                }
                Task::none()
            }

            ProfessorMessage::ProvincePicked(id) => {
                let request = self
                    .professors_state()
                    .and_then(|state| state.location.select_primary(Some(id)));
                let Some(request) = request else {
                    return Task::none();
                };
                service::load_municipalities(&self.state.client, request, |token, result| {
                    Message::Professors(ProfessorMessage::MunicipalitiesLoaded { token, result })
                })
            }

            ProfessorMessage::MunicipalitiesLoaded { token, result } => {
                let outcome = self
                    .professors_state()
                    .map(|state| state.location.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }

            ProfessorMessage::MunicipalityPicked(id) => {
                if let Some(state) = self.professors_state() {
                    state.location.select_secondary(id);
                }
                Task::none()
            }

            ProfessorMessage::AreasLoaded { token, result } => {
                let outcome = self
                    .professors_state()
                    .map(|state| state.area.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }

            ProfessorMessage::AreaPicked(area) => {
                if let Some(state) = self.professors_state() {
                    state.area.select(Some(area));
                }
                Task::none()
            }

            ProfessorMessage::RanksLoaded { token, result } => {
                let outcome = self
                    .professors_state()
                    .map(|state| state.academic_rank.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }

            ProfessorMessage::RankPicked(rank) => {
                if let Some(state) = self.professors_state() {
                    state.academic_rank.select(Some(rank));
                }
                Task::none()
            }

            ProfessorMessage::AbroadPicked(value) => {
                if let Some(state) = self.professors_state() {
                    state.went_abroad = Some(value);
                }
                Task::none()
            }

            ProfessorMessage::Search => {
                let filter = self.current_professor_filter();
                self.search_professors(filter)
            }

            ProfessorMessage::ClearFilters => {
                if let Some(state) = self.professors_state() {
                    state.reset_filters();
                }
                self.search_professors(ProfessorSearch::default())
            }

            ProfessorMessage::ResultsLoaded(result) => {
                self.state.layout.end_busy();
                match result {
                    Ok(professors) => {
                        if let Some(state) = self.professors_state() {
                            state.professors = professors;
                        }
                        Task::none()
                    }
                    Err(error) => self.api_error(&error),
                }
            }

            ProfessorMessage::AverageAge => {
                let mut query = None;
                if let Some(state) = self.professors_state()
                    && let (Some(area), Some(province), Some(went_abroad)) = (
                        state.area.selected_option(),
                        state.location.selected_primary(),
                        state.went_abroad,
                    )
                {
                    query = Some((area.label.clone(), province.label.clone(), went_abroad));
                }
                let Some((area, province, went_abroad)) = query else {
                    self.show_toast(Toast::warning(
                        "Seleccione área, provincia y si salió al extranjero.",
                    ));
                    return Task::none();
                };
                self.state.layout.begin_busy();
                let client = self.state.client.clone();
                Task::perform(
                    async move {
                        client
                            .professor_average_age(&area, &province, went_abroad)
                            .await
                    },
                    |result| Message::Professors(ProfessorMessage::AverageAgeLoaded(result)),
                )
            }

            ProfessorMessage::AverageAgeLoaded(result) => {
                self.state.layout.end_busy();
                match result {
                    Ok(average) => {
                        self.show_toast(Toast::info(format!(
                            "Promedio de edad: {average:.1}"
                        )));
                        Task::none()
                    }
                    Err(error) => self.api_error(&error),
                }
            }

            ProfessorMessage::OldestAddress => {
                let exclude = self.professors_state().and_then(|state| {
                    state.location.selected_secondary().map(|o| o.label.clone())
                });
                let Some(exclude) = exclude else {
                    self.show_toast(Toast::warning("Seleccione el municipio a excluir."));
                    return Task::none();
                };
                self.state.layout.begin_busy();
                let client = self.state.client.clone();
                Task::perform(
                    async move { client.oldest_professor_address(&exclude).await },
                    |result| Message::Professors(ProfessorMessage::OldestAddressLoaded(result)),
                )
            }

            ProfessorMessage::OldestAddressLoaded(result) => {
                self.state.layout.end_busy();
                match result {
                    Ok(address) => {
                        let municipality = address.municipality.clone().unwrap_or_default();
                        let province = address.province.clone().unwrap_or_default();
                        self.show_toast(Toast::info(format!(
                            "Dirección del profesor más viejo: {}, {municipality}, {province}",
                            address.display_line()
                        )));
                        Task::none()
                    }
                    Err(error) => self.api_error(&error),
                }
            }

            ProfessorMessage::ShowDetail(id) => {
                if let Some(state) = self.professors_state() {
                    state.detail = state
                        .professors
                        .iter()
                        .find(|p| p.id == Some(id))
                        .cloned();
                }
                Task::none()
            }

            ProfessorMessage::CloseDetail => {
                if let Some(state) = self.professors_state() {
                    state.detail = None;
                }
                Task::none()
            }

            ProfessorMessage::DeleteRequested(id) => {
                if let Some(state) = self.professors_state() {
                    state.pending_delete = Some(id);
                }
                Task::none()
            }

            ProfessorMessage::DeleteCancelled => {
                if let Some(state) = self.professors_state() {
                    state.pending_delete = None;
                }
                Task::none()
            }

            ProfessorMessage::DeleteConfirmed => {
                let id = self
                    .professors_state()
                    .and_then(|state| state.pending_delete.take());
                let Some(id) = id else {
                    return Task::none();
                };
                self.state.layout.begin_busy();
                let client = self.state.client.clone();
                Task::perform(async move { client.delete_professor(id).await }, |result| {
                    Message::Professors(ProfessorMessage::Deleted(result))
                })
            }

            ProfessorMessage::Deleted(result) => {
                self.state.layout.end_busy();
                match result {
                    Ok(()) => {
                        self.show_toast(Toast::success("Profesor eliminado correctamente."));
                        let filter = self.current_professor_filter();
                        self.search_professors(filter)
                    }
                    Err(error) => self.api_error(&error),
                }
            }

            ProfessorMessage::Form(form_msg) => self.handle_professor_form_message(form_msg),
        }
    }

    fn handle_professor_form_message(&mut self, msg: ProfessorFormMessage) -> Task<Message> {
        match msg {
            ProfessorFormMessage::RecordLoaded(Ok(professor)) => {
                let mut fetch = None;
                if let Some(state) = self.professor_form_state() {
                    state.first_name = professor.first_name;
                    state.last_name = professor.last_name;
                    state.gender = Some(professor.gender);
                    state.birth_date = professor
                        .birth_date
                        .map(|d| d.to_string())
                        .unwrap_or_default();
                    state.age = professor.age;
                    state.went_abroad = professor.went_abroad;
                    state.area.preselect(Some(professor.area));
                    state.academic_rank.preselect(Some(professor.academic_rank));
                    state
                        .scientific_category
                        .preselect(Some(professor.scientific_category));
                    state.street = professor.address.street;
                    state.number = professor.address.number;
                    fetch = bind::seed_pair(
                        &mut state.location,
                        professor.address.id_province,
                        professor.address.id_municipality,
                    );
                }
                let Some(request) = fetch else {
                    return Task::none();
                };
                service::load_municipalities(&self.state.client, request, |token, result| {
                    Message::Professors(ProfessorMessage::Form(
                        ProfessorFormMessage::MunicipalitiesLoaded { token, result },
                    ))
                })
            }

            ProfessorFormMessage::RecordLoaded(Err(error)) => self.api_error(&error),

            ProfessorFormMessage::FirstNameChanged(value) => {
                if let Some(state) = self.professor_form_state() {
                    state.first_name = value;
                }
                Task::none()
            }
            ProfessorFormMessage::LastNameChanged(value) => {
                if let Some(state) = self.professor_form_state() {
                    state.last_name = value;
                }
                Task::none()
            }
            ProfessorFormMessage::GenderPicked(gender) => {
                if let Some(state) = self.professor_form_state() {
                    state.gender = Some(gender);
                }
                Task::none()
            }

            ProfessorFormMessage::BirthDateChanged(value) => {
                let today = Local::now().date_naive();
                if let Some(state) = self.professor_form_state() {
                    // Age follows the typed date as soon as it parses.
                    if let Ok(date) = parse_birth_date(&value, today) {
                        state.age = age_on(date, today);
                    }
                    state.birth_date = value;
                }
                Task::none()
            }

            ProfessorFormMessage::AbroadToggled(value) => {
                if let Some(state) = self.professor_form_state() {
                    state.went_abroad = value;
                }
                Task::none()
            }

            ProfessorFormMessage::AreasLoaded { token, result } => {
                let outcome = self
                    .professor_form_state()
                    .map(|state| state.area.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }
            ProfessorFormMessage::AreaPicked(area) => {
                if let Some(state) = self.professor_form_state() {
                    state.area.select(Some(area));
                }
                Task::none()
            }

            ProfessorFormMessage::RanksLoaded { token, result } => {
                let outcome = self
                    .professor_form_state()
                    .map(|state| state.academic_rank.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }
            ProfessorFormMessage::RankPicked(rank) => {
                if let Some(state) = self.professor_form_state() {
                    state.academic_rank.select(Some(rank));
                }
                Task::none()
            }

            ProfessorFormMessage::CategoriesLoaded { token, result } => {
                let outcome = self
                    .professor_form_state()
                    .map(|state| state.scientific_category.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }
            ProfessorFormMessage::CategoryPicked(category) => {
                if let Some(state) = self.professor_form_state() {
                    state.scientific_category.select(Some(category));
                }
                Task::none()
            }

            ProfessorFormMessage::ProvincesLoaded(result) => {
                match result {
                    Ok(options) => {
                        if let Some(state) = self.professor_form_state() {
                            state.location.set_primary_options(options);
                        }
                    }
                    Err(error) => self.source_error(&error),
                }
                Task::none()
            }

            ProfessorFormMessage::ProvincePicked(id) => {
                let request = self
                    .professor_form_state()
                    .and_then(|state| state.location.select_primary(Some(id)));
                let Some(request) = request else {
                    return Task::none();
                };
                service::load_municipalities(&self.state.client, request, |token, result| {
                    Message::Professors(ProfessorMessage::Form(
                        ProfessorFormMessage::MunicipalitiesLoaded { token, result },
                    ))
                })
            }

            ProfessorFormMessage::MunicipalitiesLoaded { token, result } => {
                let outcome = self
                    .professor_form_state()
                    .map(|state| state.location.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }

            ProfessorFormMessage::MunicipalityPicked(id) => {
                if let Some(state) = self.professor_form_state() {
                    state.location.select_secondary(id);
                }
                Task::none()
            }

            ProfessorFormMessage::StreetChanged(value) => {
                if let Some(state) = self.professor_form_state() {
                    state.street = value;
                }
                Task::none()
            }
            ProfessorFormMessage::NumberChanged(value) => {
                if let Some(state) = self.professor_form_state() {
                    state.number = value;
                }
                Task::none()
            }

            ProfessorFormMessage::Save => self.save_professor(),

            ProfessorFormMessage::Saved(result) => match result {
                Ok(()) => {
                    let edited = self
                        .professor_form_state()
                        .map(|state| state.is_edit())
                        .unwrap_or(false);
                    self.show_toast(Toast::success(if edited {
                        "Profesor actualizado(a) con éxito"
                    } else {
                        "Profesor registrado(a) con éxito"
                    }));
                    self.navigate(Route::Professors)
                }
                Err(error) => {
                    if let Some(state) = self.professor_form_state() {
                        state.saving = false;
                    }
                    self.api_error(&error)
                }
            },

            ProfessorFormMessage::Cancel => self.navigate(Route::Professors),
        }
    }

    /// Validate the form and submit the record.
    fn save_professor(&mut self) -> Task<Message> {
        let today = Local::now().date_naive();
        let mut first_message = None;
        let mut payload = None;

        if let Some(state) = self.professor_form_state() {
            let mut check = FormCheck::new()
                .required("firstName", &state.first_name)
                .field("firstName", FieldKind::PersonName, &state.first_name)
                .required("lastName", &state.last_name)
                .field("lastName", FieldKind::PersonName, &state.last_name)
                .required_selection("gender", state.gender.as_ref())
                .required("birthDate", &state.birth_date)
                .required_selection("area", state.area.selection())
                .required_selection("academicRank", state.academic_rank.selection())
                .required_selection(
                    "scientificCategory",
                    state.scientific_category.selection(),
                )
                .required_selection("idProvince", state.location.primary())
                .required_selection("idMunicipality", state.location.secondary())
                .required("street", &state.street)
                .field("street", FieldKind::Street, &state.street)
                .required("number", &state.number)
                .field("number", FieldKind::HouseNumber, &state.number);

            let mut birth_date = None;
            if !state.birth_date.trim().is_empty() {
                match parse_birth_date(&state.birth_date, today) {
                    Ok(date) => birth_date = Some(date),
                    Err(error) => check = check.issue("birthDate", error.to_string()),
                }
            }

            let report = check.finish();
            if report.is_valid() {
                state.saving = true;
                let mut address = Address {
                    street: state.street.clone(),
                    number: state.number.clone(),
                    ..Address::default()
                };
                bind::write_pair(
                    &state.location,
                    &mut address.id_province,
                    &mut address.id_municipality,
                );
                let age = birth_date.map(|date| age_on(date, today)).unwrap_or(0);
                let professor = Professor {
                    id: state.id,
                    first_name: state.first_name.clone(),
                    last_name: state.last_name.clone(),
                    gender: state.gender.unwrap_or(Gender::Male),
                    birth_date,
                    age,
                    area: state.area.selection().cloned().unwrap_or_default(),
                    went_abroad: state.went_abroad,
                    academic_rank: state.academic_rank.selection().cloned().unwrap_or_default(),
                    scientific_category: state
                        .scientific_category
                        .selection()
                        .cloned()
                        .unwrap_or_default(),
                    address,
                };
                payload = Some((state.id, professor));
            } else {
                first_message = report.first_message().map(str::to_string);
            }
            state.report = report;
        }

        if let Some(message) = first_message {
            self.show_toast(Toast::warning(message));
            return Task::none();
        }
        let Some((id, professor)) = payload else {
            return Task::none();
        };
        let client = self.state.client.clone();
        Task::perform(
            async move {
                match id {
                    Some(id) => client.update_professor(id, &professor).await,
                    None => client.create_professor(&professor).await,
                }
            },
            |result| {
                Message::Professors(ProfessorMessage::Form(ProfessorFormMessage::Saved(result)))
            },
        )
    }
}
