use serde::{Deserialize, Serialize};

/// Postal address sub-record shared by students and professors.
///
/// Writes carry the province/municipality identifiers; reads additionally
/// carry the resolved display names, which the backend denormalizes into the
/// record (list and detail screens show names without extra lookups).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub id_province: Option<i64>,
    #[serde(default)]
    pub id_municipality: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
}

impl Address {
    /// Street and number joined for display ("Martí 12").
    pub fn display_line(&self) -> String {
        let line = format!("{} {}", self.street, self.number);
        line.trim().to_string()
    }
}
