//! Student screen handlers: filtered search with suggestions, the
//! average-age query, delete with confirmation, and the create/edit form
//! with its province → municipality cascade.

use chrono::Local;
use iced::Task;

use defensa_client::{CatalogKind, StudentSearch};
use defensa_model::{Address, Gender, Student};
use defensa_select::{ResolveOutcome, bind};
use defensa_validate::{FieldKind, FormCheck, parse_birth_date};

use crate::app::App;
use crate::message::{Message, StudentFormMessage, StudentMessage};
use crate::service;
use crate::state::layout::Toast;
use crate::state::students::{StudentFormState, StudentListState};
use crate::state::{Route, ViewState};

impl App {
    /// Enter the student list: empty search plus the province filter list.
    pub(crate) fn open_students(&mut self) -> Task<Message> {
        let mut state = StudentListState::default();
        let token = state.provinces.begin_load();
        self.state.view = ViewState::Students(state);

        let provinces = service::load_provinces(&self.state.client, token, |token, result| {
            Message::Students(StudentMessage::ProvincesLoaded { token, result })
        });
        let search = self.search_students(StudentSearch::default());
        Task::batch([provinces, search])
    }

    /// Enter the student form, loading the catalogs and, when editing, the
    /// record itself.
    pub(crate) fn open_student_form(&mut self, id: Option<i64>) -> Task<Message> {
        let mut state = match id {
            Some(id) => StudentFormState::edit(id),
            None => StudentFormState::create(),
        };
        let majors_token = state.major.begin_load();
        self.state.view = ViewState::StudentForm(state);

        let mut tasks = vec![
            service::load_form_provinces(&self.state.client, |result| {
                Message::Students(StudentMessage::Form(StudentFormMessage::ProvincesLoaded(
                    result,
                )))
            }),
            service::load_catalog(
                &self.state.client,
                CatalogKind::Majors,
                majors_token,
                |token, result| {
                    Message::Students(StudentMessage::Form(StudentFormMessage::MajorsLoaded {
                        token,
                        result,
                    }))
                },
            ),
        ];
        if let Some(id) = id {
            let client = self.state.client.clone();
            tasks.push(Task::perform(
                async move { client.student_by_id(id).await },
                |result| Message::Students(StudentMessage::Form(StudentFormMessage::RecordLoaded(result))),
            ));
        }
        Task::batch(tasks)
    }

    fn search_students(&mut self, filter: StudentSearch) -> Task<Message> {
        self.state.layout.begin_busy();
        let client = self.state.client.clone();
        Task::perform(async move { client.search_students(&filter).await }, |result| {
            Message::Students(StudentMessage::ResultsLoaded(result))
        })
    }

    fn current_student_filter(&mut self) -> StudentSearch {
        self.students_state()
            .map(|state| StudentSearch {
                name: state.search_name.clone(),
                year: state.search_year,
                province: state.provinces.selected_option().map(|o| o.label.clone()),
            })
            .unwrap_or_default()
    }

    pub(crate) fn handle_student_message(&mut self, msg: StudentMessage) -> Task<Message> {
        match msg {
            StudentMessage::SearchNameChanged(value) => {
                let mut fetch = None;
                if let Some(state) = self.students_state() {
                    state.search_name = value;
                    state.suggest_token += 1;
                    if state.search_name.trim().chars().count() >= 2 {
                        fetch = Some((state.suggest_token, state.search_name.trim().to_string()));
                    } else {
                        state.suggestions.clear();
                    }
                }
                let Some((token, query)) = fetch else {
                    return Task::none();
                };
                let client = self.state.client.clone();
                Task::perform(
                    async move { client.suggest_students(&query).await },
                    move |result| {
                        Message::Students(StudentMessage::SuggestionsLoaded { token, result })
                    },
                )
            }

            StudentMessage::SuggestionsLoaded { token, result } => {
                if let Some(state) = self.students_state()
                    && token == state.suggest_token
                {
                    // Suggestions are best effort; failures just clear them.
                    state.suggestions = match result {
                        Ok(students) => {
                            students.iter().map(Student::full_name).take(8).collect()
                        }
                        Err(_) => Vec::new(),
                    };
                }
                Task::none()
            }

            StudentMessage::SuggestionPicked(name) => {
                if let Some(state) = self.students_state() {
                    state.search_name = name;
                    state.suggestions.clear();
                    state.suggest_token += 1;
                }
                Task::none()
            }

            StudentMessage::YearPicked(year) => {
                if let Some(state) = self.students_state() {
                    state.search_year = Some(year);
                }
                Task::none()
            }

            StudentMessage::ProvincesLoaded { token, result } => {
                let outcome = self
                    .students_state()
                    .map(|state| state.provinces.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }

            StudentMessage::ProvincePicked(id) => {
                if let Some(state) = self.students_state() {
                    state.provinces.select(Some(id));
                }
                Task::none()
            }

            StudentMessage::Search => {
                let filter = self.current_student_filter();
                self.search_students(filter)
            }

            StudentMessage::ClearFilters => {
                if let Some(state) = self.students_state() {
                    state.search_name.clear();
                    state.search_year = None;
                    state.provinces.select(None);
                    state.suggestions.clear();
                    state.suggest_token += 1;
                }
                self.search_students(StudentSearch::default())
            }

            StudentMessage::ResultsLoaded(result) => {
                self.state.layout.end_busy();
                match result {
                    Ok(students) => {
                        if let Some(state) = self.students_state() {
                            state.students = students;
                        }
                        Task::none()
                    }
                    Err(error) => self.api_error(&error),
                }
            }

            StudentMessage::AverageAge => {
                let mut query = None;
                if let Some(state) = self.students_state()
                    && let (Some(year), Some(option)) =
                        (state.search_year, state.provinces.selected_option())
                {
                    query = Some((year, option.label.clone()));
                }
                let Some((year, province)) = query else {
                    self.show_toast(Toast::warning("Escoja un año y provincia."));
                    return Task::none();
                };
                self.state.layout.begin_busy();
                let client = self.state.client.clone();
                Task::perform(
                    async move { client.student_average_age(year, &province).await },
                    |result| Message::Students(StudentMessage::AverageAgeLoaded(result)),
                )
            }

            StudentMessage::AverageAgeLoaded(result) => {
                self.state.layout.end_busy();
                match result {
                    Ok(average) => {
                        let province = self
                            .students_state()
                            .and_then(|s| s.provinces.selected_option().map(|o| o.label.clone()))
                            .unwrap_or_default();
                        self.show_toast(Toast::info(format!(
                            "Promedio de edades en {province}: {average:.1}"
                        )));
                        Task::none()
                    }
                    Err(error) => self.api_error(&error),
                }
            }

            StudentMessage::ShowDetail(id) => {
                if let Some(state) = self.students_state() {
                    state.detail = state
                        .students
                        .iter()
                        .find(|s| s.id == Some(id))
                        .cloned();
                }
                Task::none()
            }

            StudentMessage::CloseDetail => {
                if let Some(state) = self.students_state() {
                    state.detail = None;
                }
                Task::none()
            }

            StudentMessage::DeleteRequested(id) => {
                if let Some(state) = self.students_state() {
                    state.pending_delete = Some(id);
                }
                Task::none()
            }

            StudentMessage::DeleteCancelled => {
                if let Some(state) = self.students_state() {
                    state.pending_delete = None;
                }
                Task::none()
            }

            StudentMessage::DeleteConfirmed => {
                let id = self.students_state().and_then(|s| s.pending_delete.take());
                let Some(id) = id else {
                    return Task::none();
                };
                self.state.layout.begin_busy();
                let client = self.state.client.clone();
                Task::perform(async move { client.delete_student(id).await }, |result| {
                    Message::Students(StudentMessage::Deleted(result))
                })
            }

            StudentMessage::Deleted(result) => {
                self.state.layout.end_busy();
                match result {
                    Ok(()) => {
                        self.show_toast(Toast::success("Estudiante eliminado correctamente."));
                        let filter = self.current_student_filter();
                        self.search_students(filter)
                    }
                    Err(error) => self.api_error(&error),
                }
            }

            StudentMessage::Form(form_msg) => self.handle_student_form_message(form_msg),
        }
    }

    fn handle_student_form_message(&mut self, msg: StudentFormMessage) -> Task<Message> {
        match msg {
            StudentFormMessage::RecordLoaded(Ok(student)) => {
                let mut fetch = None;
                if let Some(state) = self.student_form_state() {
                    state.first_name = student.first_name;
                    state.last_name = student.last_name;
                    state.gender = Some(student.gender);
                    state.birth_date = student
                        .birth_date
                        .map(|d| d.to_string())
                        .unwrap_or_default();
                    state.major.preselect(Some(student.major));
                    state.year = student.year;
                    state.teacher_average = student.teacher_average;
                    state.street = student.address.street;
                    state.number = student.address.number;
                    fetch = bind::seed_pair(
                        &mut state.location,
                        student.address.id_province,
                        student.address.id_municipality,
                    );
                }
                let Some(request) = fetch else {
                    return Task::none();
                };
                service::load_municipalities(&self.state.client, request, |token, result| {
                    Message::Students(StudentMessage::Form(
                        StudentFormMessage::MunicipalitiesLoaded { token, result },
                    ))
                })
            }

            StudentFormMessage::RecordLoaded(Err(error)) => self.api_error(&error),

            StudentFormMessage::FirstNameChanged(value) => {
                if let Some(state) = self.student_form_state() {
                    state.first_name = value;
                }
                Task::none()
            }
            StudentFormMessage::LastNameChanged(value) => {
                if let Some(state) = self.student_form_state() {
                    state.last_name = value;
                }
                Task::none()
            }
            StudentFormMessage::GenderPicked(gender) => {
                if let Some(state) = self.student_form_state() {
                    state.gender = Some(gender);
                }
                Task::none()
            }
            StudentFormMessage::BirthDateChanged(value) => {
                if let Some(state) = self.student_form_state() {
                    state.birth_date = value;
                }
                Task::none()
            }

            StudentFormMessage::MajorsLoaded { token, result } => {
                let outcome = self
                    .student_form_state()
                    .map(|state| state.major.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }

            StudentFormMessage::MajorPicked(major) => {
                if let Some(state) = self.student_form_state() {
                    state.major.select(Some(major));
                }
                Task::none()
            }

            StudentFormMessage::ProvincesLoaded(result) => {
                match result {
                    Ok(options) => {
                        if let Some(state) = self.student_form_state() {
                            state.location.set_primary_options(options);
                        }
                    }
                    Err(error) => self.source_error(&error),
                }
                Task::none()
            }

            StudentFormMessage::ProvincePicked(id) => {
                let request = self
                    .student_form_state()
                    .and_then(|state| state.location.select_primary(Some(id)));
                let Some(request) = request else {
                    return Task::none();
                };
                service::load_municipalities(&self.state.client, request, |token, result| {
                    Message::Students(StudentMessage::Form(
                        StudentFormMessage::MunicipalitiesLoaded { token, result },
                    ))
                })
            }

            StudentFormMessage::MunicipalitiesLoaded { token, result } => {
                let outcome = self
                    .student_form_state()
                    .map(|state| state.location.resolve(token, result));
                if let Some(ResolveOutcome::Failed(error)) = outcome {
                    self.source_error(&error);
                }
                Task::none()
            }

            StudentFormMessage::MunicipalityPicked(id) => {
                if let Some(state) = self.student_form_state() {
                    state.location.select_secondary(id);
                }
                Task::none()
            }

            StudentFormMessage::StreetChanged(value) => {
                if let Some(state) = self.student_form_state() {
                    state.street = value;
                }
                Task::none()
            }
            StudentFormMessage::NumberChanged(value) => {
                if let Some(state) = self.student_form_state() {
                    state.number = value;
                }
                Task::none()
            }

            StudentFormMessage::Save => self.save_student(),

            StudentFormMessage::Saved(result) => match result {
                Ok(()) => {
                    let edited = self
                        .student_form_state()
                        .map(|state| state.is_edit())
                        .unwrap_or(false);
                    self.show_toast(Toast::success(if edited {
                        "Estudiante actualizado con éxito"
                    } else {
                        "Estudiante registrado con éxito"
                    }));
                    self.navigate(Route::Students)
                }
                Err(error) => {
                    if let Some(state) = self.student_form_state() {
                        state.saving = false;
                    }
                    self.api_error(&error)
                }
            },

            StudentFormMessage::Cancel => self.navigate(Route::Students),
        }
    }

    /// Validate the form and submit the record.
    fn save_student(&mut self) -> Task<Message> {
        let today = Local::now().date_naive();
        let mut first_message = None;
        let mut payload = None;

        if let Some(state) = self.student_form_state() {
            let mut check = FormCheck::new()
                .required("firstName", &state.first_name)
                .field("firstName", FieldKind::PersonName, &state.first_name)
                .required("lastName", &state.last_name)
                .field("lastName", FieldKind::PersonName, &state.last_name)
                .required_selection("gender", state.gender.as_ref())
                .required("birthDate", &state.birth_date)
                .required_selection("major", state.major.selection())
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
                let student = Student {
                    id: state.id,
                    first_name: state.first_name.clone(),
                    last_name: state.last_name.clone(),
                    gender: state.gender.unwrap_or(Gender::Male),
                    birth_date,
                    age: None,
                    major: state.major.selection().cloned().unwrap_or_default(),
                    // Registration always starts in first year with an empty
                    // average; edits keep the stored values.
                    year: if state.id.is_some() { state.year } else { 1 },
                    teacher_average: if state.id.is_some() {
                        state.teacher_average
                    } else {
                        0.0
                    },
                    address,
                };
                payload = Some((state.id, student));
            } else {
                first_message = report.first_message().map(str::to_string);
            }
            state.report = report;
        }

        if let Some(message) = first_message {
            self.show_toast(Toast::warning(message));
            return Task::none();
        }
        let Some((id, student)) = payload else {
            return Task::none();
        };
        let client = self.state.client.clone();
        Task::perform(
            async move {
                match id {
                    Some(id) => client.update_student(id, &student).await,
                    None => client.create_student(&student).await,
                }
            },
            |result| Message::Students(StudentMessage::Form(StudentFormMessage::Saved(result))),
        )
    }
}
