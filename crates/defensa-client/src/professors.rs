use defensa_model::{Address, Professor, ResultEnvelope};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Professor search filters. Province, municipality and rank travel by name;
/// the abroad flag is tri-state and omitted when unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfessorSearch {
    pub province: Option<String>,
    pub municipality: Option<String>,
    pub went_abroad: Option<bool>,
    pub academic_rank: Option<String>,
}

impl ProfessorSearch {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(province) = &self.province {
            params.push(("province", province.clone()));
        }
        if let Some(municipality) = &self.municipality {
            params.push(("municipality", municipality.clone()));
        }
        if let Some(went_abroad) = self.went_abroad {
            params.push(("wentAbroad", went_abroad.to_string()));
        }
        if let Some(rank) = &self.academic_rank {
            params.push(("academicRank", rank.clone()));
        }
        params
    }
}

impl ApiClient {
    pub async fn create_professor(&self, professor: &Professor) -> Result<(), ApiError> {
        self.post_unit("/professor", professor).await
    }

    pub async fn update_professor(&self, id: i64, professor: &Professor) -> Result<(), ApiError> {
        self.put_unit(&format!("/professor/{id}"), professor).await
    }

    pub async fn professor_by_id(&self, id: i64) -> Result<Professor, ApiError> {
        let envelope: ResultEnvelope<Professor> =
            self.get_json(&format!("/professor/{id}"), &[]).await?;
        Ok(envelope.result)
    }

    pub async fn search_professors(
        &self,
        filter: &ProfessorSearch,
    ) -> Result<Vec<Professor>, ApiError> {
        let envelope: ResultEnvelope<Vec<Professor>> = self
            .get_json("/professor/search", &filter.query_params())
            .await?;
        Ok(envelope.result)
    }

    /// Average age of professors in an area and province, split by whether
    /// they went abroad.
    pub async fn professor_average_age(
        &self,
        area: &str,
        province: &str,
        went_abroad: bool,
    ) -> Result<f64, ApiError> {
        let params = [
            ("area", area.to_string()),
            ("province", province.to_string()),
            ("wentAbroad", went_abroad.to_string()),
        ];
        let envelope: ResultEnvelope<f64> =
            self.get_json("/professor/average-age", &params).await?;
        Ok(envelope.result)
    }

    /// Address of the oldest professor, excluding one municipality.
    pub async fn oldest_professor_address(
        &self,
        exclude_municipality: &str,
    ) -> Result<Address, ApiError> {
        let params = [("excludeMunicipality", exclude_municipality.to_string())];
        let envelope: ResultEnvelope<Address> = self
            .get_json("/professor/oldest-professor-address", &params)
            .await?;
        Ok(envelope.result)
    }

    pub async fn delete_professor(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/professor/{id}")).await
    }
}
