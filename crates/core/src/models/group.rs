use serde::{Deserialize, Serialize};

/// Fields of the student group carried on an enriched slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub name: String,
}
