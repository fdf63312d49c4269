use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    dates,
    errors::AbsenceResult,
    models::{group::GroupSummary, session_type::SessionTypeSummary},
};

/// One scheduled course session: a group attending a session type on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub group_id: i32,
    pub session_type_id: i32,
}

/// A slot together with the labels needed for a day view.
///
/// Relation fields serialize as `slot_session_type` and `slot_group`, the
/// names the timetable front end reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWithDetails {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub group_id: i32,
    pub session_type_id: i32,
    #[serde(rename = "slot_session_type")]
    pub session_type: SessionTypeSummary,
    #[serde(rename = "slot_group")]
    pub group: GroupSummary,
}

/// Validated values for a slot insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSlot {
    pub date: DateTime<Utc>,
    pub group_id: i32,
    pub session_type_id: i32,
}

/// Partial slot update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotUpdate {
    pub date: Option<DateTime<Utc>>,
    pub group_id: Option<i32>,
    pub session_type_id: Option<i32>,
}

impl SlotUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.group_id.is_none() && self.session_type_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub date: String,
    pub group_id: i32,
    pub session_type_id: i32,
}

impl CreateSlotRequest {
    pub fn into_new_slot(self) -> AbsenceResult<NewSlot> {
        Ok(NewSlot {
            date: dates::parse_timestamp(&self.date)?,
            group_id: self.group_id,
            session_type_id: self.session_type_id,
        })
    }
}

/// Payload of the timetable import: the session type is named rather than
/// referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotBySessionRequest {
    pub group_id: i32,
    pub course_name: String,
    pub session_type: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSlotRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub group_id: Option<i32>,
    #[serde(default)]
    pub session_type_id: Option<i32>,
}

impl UpdateSlotRequest {
    pub fn into_update(self) -> AbsenceResult<SlotUpdate> {
        let date = self
            .date
            .as_deref()
            .map(dates::parse_timestamp)
            .transpose()?;

        Ok(SlotUpdate {
            date,
            group_id: self.group_id,
            session_type_id: self.session_type_id,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteManyResponse {
    pub count: u64,
}
