//! # Slot service
//!
//! Data access contract for slots. Each operation validates its input, then
//! issues a single repository call (two for the name-based creator, which
//! resolves the session type first).

use std::sync::Arc;

use absence_core::{
    dates,
    errors::{AbsenceError, AbsenceResult},
    models::{
        session_type::SessionTypeLookup,
        slot::{
            CreateSlotBySessionRequest, CreateSlotRequest, DeleteManyResponse, NewSlot, Slot,
            SlotWithDetails, UpdateSlotRequest,
        },
    },
};
use tracing::warn;

use crate::repositories::SlotRepository;

#[derive(Clone)]
pub struct SlotService {
    repo: Arc<dyn SlotRepository>,
}

impl SlotService {
    pub fn new(repo: Arc<dyn SlotRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i32) -> AbsenceResult<Option<Slot>> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_all(&self) -> AbsenceResult<Vec<Slot>> {
        self.repo.find_all().await
    }

    /// Lists the slots of one UTC calendar day with their session type,
    /// subject and group names.
    pub async fn get_all_by_date(&self, date: &str) -> AbsenceResult<Vec<SlotWithDetails>> {
        let (start, end) = dates::day_bounds(date).inspect_err(|err| {
            warn!("Rejected day listing for '{}': {}", date, err);
        })?;

        self.repo.find_between(start, end).await
    }

    /// Creates a slot from a subject name and a session type label.
    ///
    /// The date is validated before the session type lookup, and nothing is
    /// inserted unless the lookup succeeds.
    pub async fn post_by_session_name(
        &self,
        request: CreateSlotBySessionRequest,
    ) -> AbsenceResult<Slot> {
        let raw_date = request.date.as_deref().unwrap_or_default();
        let date = dates::parse_slot_date(raw_date).inspect_err(|err| {
            warn!("Rejected slot for group {}: {}", request.group_id, err);
        })?;

        let lookup = SessionTypeLookup {
            course_name: request.course_name,
            session_type: request.session_type,
        };
        let Some(session_type) = self.repo.find_session_type(&lookup).await? else {
            return Err(AbsenceError::SessionTypeNotFound {
                course_name: lookup.course_name,
                session_type: lookup.session_type,
            });
        };

        self.repo
            .insert(NewSlot {
                date,
                group_id: request.group_id,
                session_type_id: session_type.id,
            })
            .await
    }

    pub async fn post(&self, request: CreateSlotRequest) -> AbsenceResult<Slot> {
        let new_slot = request.into_new_slot()?;
        self.repo.insert(new_slot).await
    }

    /// Applies the fields present in `request`; absent fields keep their
    /// stored value.
    pub async fn put(&self, id: i32, request: UpdateSlotRequest) -> AbsenceResult<Slot> {
        let changes = request.into_update()?;

        if changes.is_empty() {
            return self
                .repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AbsenceError::NotFound(format!("Slot with ID {} not found", id)));
        }

        self.repo.update(id, &changes).await
    }

    pub async fn delete(&self, id: i32) -> AbsenceResult<Slot> {
        self.repo.delete(id).await
    }

    pub async fn delete_many(&self) -> AbsenceResult<DeleteManyResponse> {
        let count = self.repo.delete_all().await?;
        Ok(DeleteManyResponse { count })
    }
}
