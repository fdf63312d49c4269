use serde::{Deserialize, Serialize};

/// A session category scoped to one course material, e.g. the "TD" of
/// "Algorithms".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionType {
    pub id: i32,
    pub course_type_name: String,
    pub course_material_id: i32,
}

/// Key used to resolve a session type from the names a timetable carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTypeLookup {
    pub course_name: String,
    pub session_type: String,
}

/// Session type fields carried on an enriched slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTypeSummary {
    pub course_type_name: String,
    #[serde(rename = "session_type_course_material")]
    pub course_material: CourseMaterialSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMaterialSummary {
    pub name: String,
}
