pub mod session_type;
pub mod slot;

use absence_core::{
    errors::{AbsenceError, AbsenceResult},
    models::{
        session_type::{SessionType, SessionTypeLookup},
        slot::{NewSlot, Slot, SlotUpdate, SlotWithDetails},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Persistence operations the slot service depends on.
///
/// Implemented over PostgreSQL by [`PgSlotRepository`] and mocked by
/// [`crate::mock::repositories::MockSlotRepo`].
#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AbsenceResult<Option<Slot>>;

    async fn find_all(&self) -> AbsenceResult<Vec<Slot>>;

    /// Slots dated within `[start, end]`, both ends inclusive.
    async fn find_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AbsenceResult<Vec<SlotWithDetails>>;

    async fn find_session_type(
        &self,
        lookup: &SessionTypeLookup,
    ) -> AbsenceResult<Option<SessionType>>;

    async fn insert(&self, slot: NewSlot) -> AbsenceResult<Slot>;

    async fn update(&self, id: i32, changes: &SlotUpdate) -> AbsenceResult<Slot>;

    async fn delete(&self, id: i32) -> AbsenceResult<Slot>;

    /// Removes every slot and returns how many rows went.
    async fn delete_all(&self) -> AbsenceResult<u64>;
}

/// [`SlotRepository`] backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgSlotRepository {
    pool: PgPool,
}

impl PgSlotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PgSlotRepository {
    async fn find_by_id(&self, id: i32) -> AbsenceResult<Option<Slot>> {
        Ok(slot::get_slot_by_id(&self.pool, id).await?.map(Into::into))
    }

    async fn find_all(&self) -> AbsenceResult<Vec<Slot>> {
        let slots = slot::get_all_slots(&self.pool).await?;
        Ok(slots.into_iter().map(Into::into).collect())
    }

    async fn find_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AbsenceResult<Vec<SlotWithDetails>> {
        let slots = slot::get_slots_between(&self.pool, start, end).await?;
        Ok(slots.into_iter().map(Into::into).collect())
    }

    async fn find_session_type(
        &self,
        lookup: &SessionTypeLookup,
    ) -> AbsenceResult<Option<SessionType>> {
        let session_type = session_type::find_session_type_by_names(&self.pool, lookup).await?;
        Ok(session_type.map(Into::into))
    }

    async fn insert(&self, new_slot: NewSlot) -> AbsenceResult<Slot> {
        Ok(slot::create_slot(&self.pool, &new_slot).await?.into())
    }

    async fn update(&self, id: i32, changes: &SlotUpdate) -> AbsenceResult<Slot> {
        Ok(slot::update_slot(&self.pool, id, changes).await?.into())
    }

    async fn delete(&self, id: i32) -> AbsenceResult<Slot> {
        Ok(slot::delete_slot(&self.pool, id).await?.into())
    }

    async fn delete_all(&self) -> AbsenceResult<u64> {
        slot::delete_all_slots(&self.pool).await
    }
}

/// Maps a sqlx failure onto the domain error. Foreign key violations mean a
/// referenced group or session type does not exist.
pub(crate) fn map_db_error(err: sqlx::Error) -> AbsenceError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return AbsenceError::NotFound(format!(
                "Referenced group or session type does not exist ({})",
                db_err.message()
            ));
        }
    }

    AbsenceError::Database(err.into())
}
