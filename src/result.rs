//! Result type for a scraped profile page.

use serde::Serialize;
use tracing::{debug, info};

/// Sentinel for a text field that could not be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Profile extracted from one page.
///
/// Every field is always present. Text fields hold a cleaned value or
/// [`UNKNOWN`]; derived integers are 0 when their source is unknown or
/// unparseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub name: String,
    pub position: String,
    pub shot_stance: String,
    pub height: String,
    pub weight: String,
    pub birthdate: String,
    pub college: String,
    pub debut: String,

    /// Height in inches.
    pub int_height: u32,
    pub int_weight: u32,
    pub int_birth_year: u32,
    pub int_birth_month: u32,
    pub int_birth_day: u32,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            position: UNKNOWN.to_string(),
            shot_stance: UNKNOWN.to_string(),
            height: UNKNOWN.to_string(),
            weight: UNKNOWN.to_string(),
            birthdate: UNKNOWN.to_string(),
            college: UNKNOWN.to_string(),
            debut: UNKNOWN.to_string(),
            int_height: 0,
            int_weight: 0,
            int_birth_year: 0,
            int_birth_month: 0,
            int_birth_day: 0,
        }
    }
}

impl ProfileRecord {
    /// Text fields paired with the page label they were read from.
    #[must_use]
    pub fn labeled_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Position", self.position.as_str()),
            ("Shoots", self.shot_stance.as_str()),
            ("Height", self.height.as_str()),
            ("MWeight", self.weight.as_str()),
            ("Born", self.birthdate.as_str()),
            ("Authors", self.college.as_str()),
            ("Date added", self.debut.as_str()),
        ]
    }

    /// Emit the report lines for this record.
    ///
    /// One INFO line naming the protein, then one DEBUG line per field.
    pub fn log_summary(&self) {
        info!("protein {}", self.name);
        for (label, value) in self.labeled_fields() {
            debug!("---{label}: {value}");
        }
        debug!(
            "---int_height: {} int_weight: {} birth: {}-{}-{}",
            self.int_height,
            self.int_weight,
            self.int_birth_year,
            self.int_birth_month,
            self.int_birth_day
        );
    }
}
