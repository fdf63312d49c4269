use absence_core::models::{
    group::GroupSummary,
    session_type::{CourseMaterialSummary, SessionType, SessionTypeSummary},
    slot::{Slot, SlotWithDetails},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub group_id: i32,
    pub session_type_id: i32,
}

/// Flat row of the day-listing join.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlotWithDetails {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub group_id: i32,
    pub session_type_id: i32,
    pub course_type_name: String,
    pub course_name: String,
    pub group_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSessionType {
    pub id: i32,
    pub course_type_name: String,
    pub course_material_id: i32,
}

impl From<DbSlot> for Slot {
    fn from(row: DbSlot) -> Self {
        Slot {
            id: row.id,
            date: row.date,
            group_id: row.group_id,
            session_type_id: row.session_type_id,
        }
    }
}

impl From<DbSlotWithDetails> for SlotWithDetails {
    fn from(row: DbSlotWithDetails) -> Self {
        SlotWithDetails {
            id: row.id,
            date: row.date,
            group_id: row.group_id,
            session_type_id: row.session_type_id,
            session_type: SessionTypeSummary {
                course_type_name: row.course_type_name,
                course_material: CourseMaterialSummary {
                    name: row.course_name,
                },
            },
            group: GroupSummary {
                name: row.group_name,
            },
        }
    }
}

impl From<DbSessionType> for SessionType {
    fn from(row: DbSessionType) -> Self {
        SessionType {
            id: row.id,
            course_type_name: row.course_type_name,
            course_material_id: row.course_material_id,
        }
    }
}
