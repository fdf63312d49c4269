use absence_core::{
    errors::AbsenceResult,
    models::{
        session_type::{SessionType, SessionTypeLookup},
        slot::{NewSlot, Slot, SlotUpdate, SlotWithDetails},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::repositories::SlotRepository;

// Mock repository for testing the service and the HTTP layer without a database
mock! {
    pub SlotRepo {}

    #[async_trait]
    impl SlotRepository for SlotRepo {
        async fn find_by_id(&self, id: i32) -> AbsenceResult<Option<Slot>>;

        async fn find_all(&self) -> AbsenceResult<Vec<Slot>>;

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

        async fn delete_all(&self) -> AbsenceResult<u64>;
    }
}
