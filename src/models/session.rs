use serde::{Deserialize, Serialize};

use super::{ExtraFields, Section};

/// One sitting within a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Session {
    /// Sum of the estimated minutes of every section.
    pub fn estimated_time(&self) -> f64 {
        self.sections
            .iter()
            .filter_map(|s| s.estimated_time.as_f64())
            .sum()
    }
}
