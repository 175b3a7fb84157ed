//! Async task wrappers around the lookup sources.
//!
//! The three screens with dropdowns all load their option lists the same
//! way; these helpers pair each fetch with the request token the store
//! issued, so the completion message can be checked for staleness.

use iced::Task;

use defensa_client::{ApiClient, CatalogKind, CatalogSource, LocationSource};
use defensa_select::{
    DependentOptionSource, FetchRequest, OptionSource, SelectOption, SourceError,
};

use crate::message::Message;

type IdOptions = Result<Vec<SelectOption<i64>>, SourceError>;
type NameOptions = Result<Vec<SelectOption<String>>, SourceError>;

/// Load the province list for a token-guarded filter control.
pub fn load_provinces(
    client: &ApiClient,
    token: u64,
    to_message: impl Fn(u64, IdOptions) -> Message + Send + 'static,
) -> Task<Message> {
    let source = LocationSource::new(client.clone());
    Task::perform(async move { source.primary_options().await }, move |result| {
        to_message(token, result)
    })
}

/// Load the province list for a form pair (loaded once per mount).
pub fn load_form_provinces(
    client: &ApiClient,
    to_message: impl Fn(IdOptions) -> Message + Send + 'static,
) -> Task<Message> {
    let source = LocationSource::new(client.clone());
    Task::perform(async move { source.primary_options().await }, to_message)
}

/// Run the dependent fetch a [`defensa_select::DependentSelect`] asked for.
pub fn load_municipalities(
    client: &ApiClient,
    request: FetchRequest<i64>,
    to_message: impl Fn(u64, IdOptions) -> Message + Send + 'static,
) -> Task<Message> {
    let source = LocationSource::new(client.clone());
    let FetchRequest { token, primary } = request;
    Task::perform(
        async move { source.secondary_options(&primary).await },
        move |result| to_message(token, result),
    )
}

/// Load one of the flat complement catalogs.
pub fn load_catalog(
    client: &ApiClient,
    kind: CatalogKind,
    token: u64,
    to_message: impl Fn(u64, NameOptions) -> Message + Send + 'static,
) -> Task<Message> {
    let source = CatalogSource::new(client.clone(), kind);
    Task::perform(async move { source.primary_options().await }, move |result| {
        to_message(token, result)
    })
}
