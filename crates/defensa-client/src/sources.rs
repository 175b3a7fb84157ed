use defensa_model::RefItem;
use defensa_select::{DependentOptionSource, OptionSource, SelectOption, SourceError};

use crate::client::ApiClient;
use crate::error::ApiError;

impl From<ApiError> for SourceError {
    fn from(err: ApiError) -> Self {
        SourceError::Unavailable(err.user_message())
    }
}

/// Map catalog rows to id-keyed options, keeping the backend's order.
pub fn options_from(items: Vec<RefItem>) -> Vec<SelectOption<i64>> {
    items
        .into_iter()
        .map(|item| SelectOption::new(item.name, item.id))
        .collect()
}

/// Map catalog rows to name-keyed options, for the catalogs whose values
/// are stored by name in the records (area, academic rank, scientific
/// category, major).
pub fn name_options_from(items: Vec<RefItem>) -> Vec<SelectOption<String>> {
    items
        .into_iter()
        .map(|item| {
            let value = item.name.clone();
            SelectOption::new(item.name, value)
        })
        .collect()
}

/// Option source for the province → municipality cascade. Id-keyed: the
/// address sub-records store the identifiers.
#[derive(Debug, Clone)]
pub struct LocationSource {
    client: ApiClient,
}

impl LocationSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl OptionSource for LocationSource {
    type Value = i64;

    async fn primary_options(&self) -> Result<Vec<SelectOption<i64>>, SourceError> {
        Ok(options_from(self.client.provinces().await?))
    }
}

impl DependentOptionSource for LocationSource {
    async fn secondary_options(&self, primary: &i64) -> Result<Vec<SelectOption<i64>>, SourceError> {
        Ok(options_from(
            self.client.municipalities_by_province(*primary).await?,
        ))
    }
}

/// Which flat complement catalog a [`CatalogSource`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Majors,
    Areas,
    AcademicRanks,
    ScientificCategories,
}

/// Option source for the single-level complement catalogs.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    client: ApiClient,
    kind: CatalogKind,
}

impl CatalogSource {
    pub fn new(client: ApiClient, kind: CatalogKind) -> Self {
        Self { client, kind }
    }
}

impl OptionSource for CatalogSource {
    type Value = String;

    async fn primary_options(&self) -> Result<Vec<SelectOption<String>>, SourceError> {
        let items = match self.kind {
            CatalogKind::Majors => self.client.majors().await?,
            CatalogKind::Areas => self.client.areas().await?,
            CatalogKind::AcademicRanks => self.client.academic_ranks().await?,
            CatalogKind::ScientificCategories => self.client.scientific_categories().await?,
        };
        Ok(name_options_from(items))
    }
}
