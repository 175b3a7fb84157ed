use defensa_model::{DataEnvelope, ResultEnvelope, Student};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Student search filters. The wire keys the province by name; optional
/// filters are omitted when unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentSearch {
    pub name: String,
    pub year: Option<u8>,
    pub province: Option<String>,
}

impl StudentSearch {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("name", self.name.clone())];
        if let Some(year) = self.year {
            params.push(("year", year.to_string()));
        }
        if let Some(province) = &self.province {
            params.push(("province", province.clone()));
        }
        params
    }
}

impl ApiClient {
    pub async fn create_student(&self, student: &Student) -> Result<(), ApiError> {
        self.post_unit("/student", student).await
    }

    pub async fn update_student(&self, id: i64, student: &Student) -> Result<(), ApiError> {
        self.put_unit(&format!("/student/{id}"), student).await
    }

    pub async fn student_by_id(&self, id: i64) -> Result<Student, ApiError> {
        let envelope: DataEnvelope<Student> =
            self.get_json(&format!("/student/{id}"), &[]).await?;
        Ok(envelope.data)
    }

    pub async fn search_students(&self, filter: &StudentSearch) -> Result<Vec<Student>, ApiError> {
        let envelope: ResultEnvelope<Vec<Student>> = self
            .get_json("/student/search", &filter.query_params())
            .await?;
        Ok(envelope.result)
    }

    /// Average age for a year and province (both required by the backend).
    pub async fn student_average_age(&self, year: u8, province: &str) -> Result<f64, ApiError> {
        let params = [
            ("year", year.to_string()),
            ("province", province.to_string()),
        ];
        let envelope: ResultEnvelope<f64> =
            self.get_json("/student/average-age", &params).await?;
        Ok(envelope.result)
    }

    /// Name suggestions while the user types in the search box.
    pub async fn suggest_students(&self, query_text: &str) -> Result<Vec<Student>, ApiError> {
        let params = [("query", query_text.to_string())];
        let envelope: ResultEnvelope<Vec<Student>> =
            self.get_json("/student/suggest", &params).await?;
        Ok(envelope.result)
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/student/{id}")).await
    }
}
