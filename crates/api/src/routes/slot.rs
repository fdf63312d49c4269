use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/slot",
            get(handlers::slot::get_slots)
                .post(handlers::slot::create_slot)
                .delete(handlers::slot::delete_slots),
        )
        .route(
            "/slot/by-date/:date",
            get(handlers::slot::get_slots_by_date),
        )
        .route(
            "/slot/by-session",
            post(handlers::slot::create_slot_by_session),
        )
        .route(
            "/slot/:id",
            get(handlers::slot::get_slot)
                .put(handlers::slot::update_slot)
                .delete(handlers::slot::delete_slot),
        )
}
