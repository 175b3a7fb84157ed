use defensa_model::{RefItem, ResultEnvelope};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Reference-data reads. The location endpoints return bare arrays; the
/// complement endpoints wrap theirs in a result envelope.
impl ApiClient {
    pub async fn provinces(&self) -> Result<Vec<RefItem>, ApiError> {
        self.get_json("/location/provinces", &[]).await
    }

    pub async fn municipalities_by_province(
        &self,
        province_id: i64,
    ) -> Result<Vec<RefItem>, ApiError> {
        let path = format!("/location/municipality/by-province/{province_id}");
        self.get_json(&path, &[]).await
    }

    pub async fn majors(&self) -> Result<Vec<RefItem>, ApiError> {
        let envelope: ResultEnvelope<Vec<RefItem>> =
            self.get_json("/complement/majors", &[]).await?;
        Ok(envelope.result)
    }

    pub async fn areas(&self) -> Result<Vec<RefItem>, ApiError> {
        let envelope: ResultEnvelope<Vec<RefItem>> =
            self.get_json("/complement/areas", &[]).await?;
        Ok(envelope.result)
    }

    pub async fn scientific_categories(&self) -> Result<Vec<RefItem>, ApiError> {
        let envelope: ResultEnvelope<Vec<RefItem>> = self
            .get_json("/complement/scientific-categories", &[])
            .await?;
        Ok(envelope.result)
    }

    pub async fn academic_ranks(&self) -> Result<Vec<RefItem>, ApiError> {
        let envelope: ResultEnvelope<Vec<RefItem>> =
            self.get_json("/complement/academic-ranks", &[]).await?;
        Ok(envelope.result)
    }
}
