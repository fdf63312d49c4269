use absence_core::{
    errors::{AbsenceError, AbsenceResult},
    models::slot::{NewSlot, SlotUpdate},
};
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::models::{DbSlot, DbSlotWithDetails};
use crate::repositories::map_db_error;

pub async fn create_slot(pool: &Pool<Postgres>, slot: &NewSlot) -> AbsenceResult<DbSlot> {
    tracing::debug!(
        "Creating slot: date={}, group_id={}, session_type_id={}",
        slot.date, slot.group_id, slot.session_type_id
    );

    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO slots (date, group_id, session_type_id)
        VALUES ($1, $2, $3)
        RETURNING id, date, group_id, session_type_id
        "#,
    )
    .bind(slot.date)
    .bind(slot.group_id)
    .bind(slot.session_type_id)
    .fetch_one(pool)
    .await
    .map_err(map_db_error)?;

    tracing::debug!("Slot created successfully: id={}", slot.id);
    Ok(slot)
}

pub async fn get_slot_by_id(pool: &Pool<Postgres>, id: i32) -> AbsenceResult<Option<DbSlot>> {
    tracing::debug!("Getting slot by id: {}", id);

    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, date, group_id, session_type_id
        FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_db_error)?;

    Ok(slot)
}

pub async fn get_all_slots(pool: &Pool<Postgres>) -> AbsenceResult<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, date, group_id, session_type_id
        FROM slots
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(map_db_error)?;

    Ok(slots)
}

/// Slots whose date lies in `[start, end]`, joined with their session type,
/// course material and group names.
pub async fn get_slots_between(
    pool: &Pool<Postgres>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AbsenceResult<Vec<DbSlotWithDetails>> {
    tracing::debug!("Getting slots between {} and {}", start, end);

    let slots = sqlx::query_as::<_, DbSlotWithDetails>(
        r#"
        SELECT s.id, s.date, s.group_id, s.session_type_id,
               st.course_type_name, cm.name AS course_name, g.name AS group_name
        FROM slots s
        JOIN session_types st ON st.id = s.session_type_id
        JOIN course_materials cm ON cm.id = st.course_material_id
        JOIN student_groups g ON g.id = s.group_id
        WHERE s.date >= $1 AND s.date <= $2
        ORDER BY s.date ASC, s.id ASC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(map_db_error)?;

    Ok(slots)
}

pub async fn update_slot(
    pool: &Pool<Postgres>,
    id: i32,
    changes: &SlotUpdate,
) -> AbsenceResult<DbSlot> {
    tracing::debug!("Updating slot {}: {:?}", id, changes);

    let updated_slot = sqlx::query_as::<_, DbSlot>(
        r#"
        UPDATE slots
        SET date = COALESCE($2, date),
            group_id = COALESCE($3, group_id),
            session_type_id = COALESCE($4, session_type_id)
        WHERE id = $1
        RETURNING id, date, group_id, session_type_id
        "#,
    )
    .bind(id)
    .bind(changes.date)
    .bind(changes.group_id)
    .bind(changes.session_type_id)
    .fetch_optional(pool)
    .await
    .map_err(map_db_error)?
    .ok_or_else(|| AbsenceError::NotFound(format!("Slot with ID {} not found", id)))?;

    Ok(updated_slot)
}

pub async fn delete_slot(pool: &Pool<Postgres>, id: i32) -> AbsenceResult<DbSlot> {
    tracing::debug!("Deleting slot: {}", id);

    let deleted_slot = sqlx::query_as::<_, DbSlot>(
        r#"
        DELETE FROM slots
        WHERE id = $1
        RETURNING id, date, group_id, session_type_id
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_db_error)?
    .ok_or_else(|| AbsenceError::NotFound(format!("Slot with ID {} not found", id)))?;

    Ok(deleted_slot)
}

pub async fn delete_all_slots(pool: &Pool<Postgres>) -> AbsenceResult<u64> {
    let result = sqlx::query("DELETE FROM slots")
        .execute(pool)
        .await
        .map_err(map_db_error)?;

    tracing::debug!("Deleted {} slots", result.rows_affected());
    Ok(result.rows_affected())
}
