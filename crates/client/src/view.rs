use absence_core::models::slot::SlotWithDetails;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flattened slot as shown in a day view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    /// Session type label, e.g. "TD"
    pub session_type: String,
    pub subject_name: String,
    pub date: DateTime<Utc>,
    pub slot_id: i32,
    pub group_id: i32,
}

impl From<SlotWithDetails> for SlotView {
    fn from(slot: SlotWithDetails) -> Self {
        SlotView {
            session_type: slot.session_type.course_type_name,
            subject_name: slot.session_type.course_material.name,
            date: slot.date,
            slot_id: slot.id,
            group_id: slot.group_id,
        }
    }
}
