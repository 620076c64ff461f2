use serde::{Deserialize, Serialize};

/// Collection site. Same shape as `SiteDto` for now; kept as its own type so
/// the two can diverge without touching callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub program_id: i64,
    pub district: Option<String>,
    pub subdistrict: Option<String>,
    pub village_name: Option<String>,
    pub house_number: Option<String>,
    pub is_active: bool,
}
