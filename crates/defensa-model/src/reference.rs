use serde::{Deserialize, Serialize};

/// Reference/lookup row as every catalog endpoint returns it.
///
/// Provinces, municipalities, majors, areas, academic ranks and scientific
/// categories all share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefItem {
    pub id: i64,
    pub name: String,
}
