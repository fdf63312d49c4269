use absence_core::{errors::AbsenceResult, models::session_type::SessionTypeLookup};
use sqlx::{Pool, Postgres};

use crate::models::DbSessionType;
use crate::repositories::map_db_error;

/// Resolves a session type from its label and the name of its course
/// material. The first match wins when names are duplicated.
pub async fn find_session_type_by_names(
    pool: &Pool<Postgres>,
    lookup: &SessionTypeLookup,
) -> AbsenceResult<Option<DbSessionType>> {
    tracing::debug!(
        "Looking up session type: course={}, type={}",
        lookup.course_name, lookup.session_type
    );

    let session_type = sqlx::query_as::<_, DbSessionType>(
        r#"
        SELECT st.id, st.course_type_name, st.course_material_id
        FROM session_types st
        JOIN course_materials cm ON cm.id = st.course_material_id
        WHERE st.course_type_name = $1 AND cm.name = $2
        ORDER BY st.id ASC
        LIMIT 1
        "#,
    )
    .bind(&lookup.session_type)
    .bind(&lookup.course_name)
    .fetch_optional(pool)
    .await
    .map_err(map_db_error)?;

    Ok(session_type)
}
