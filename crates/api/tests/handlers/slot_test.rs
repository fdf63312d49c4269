use absence_core::{
    errors::AbsenceError,
    models::{
        session_type::SessionType,
        slot::{DeleteManyResponse, Slot, SlotUpdate},
    },
};
use axum::http::StatusCode;
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{at, detailed_slot, slot, TestContext};

#[tokio::test]
async fn test_get_slots_by_date_returns_enriched_slots() {
    let mut ctx = TestContext::new();
    ctx.slot_repo
        .expect_find_between()
        .withf(|start, end| *start == at(2024, 3, 15, 0) && end.date_naive() == start.date_naive())
        .times(1)
        .returning(|_, _| {
            Ok(vec![
                detailed_slot(1, at(2024, 3, 15, 8), "CM", "Algorithms"),
                detailed_slot(2, at(2024, 3, 15, 10), "TD", "Databases"),
            ])
        });
    let server = ctx.into_server();

    let response = server.get("/slot/by-date/2024-03-15").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["slot_session_type"]["course_type_name"], "CM");
    assert_eq!(
        body[1]["slot_session_type"]["session_type_course_material"]["name"],
        "Databases"
    );
    assert_eq!(body[1]["slot_group"]["name"], "G3");
    assert_eq!(body[1]["date"], "2024-03-15T10:00:00Z");
}

#[tokio::test]
async fn test_get_slots_by_date_rejects_invalid_date() {
    let mut ctx = TestContext::new();
    ctx.slot_repo.expect_find_between().never();
    let server = ctx.into_server();

    let response = server.get("/slot/by-date/someday").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap_or_default().starts_with("Invalid date"));
}

#[tokio::test]
async fn test_create_slot_by_session() {
    let mut ctx = TestContext::new();
    ctx.slot_repo
        .expect_find_session_type()
        .withf(|lookup| lookup.course_name == "Algorithms" && lookup.session_type == "TD")
        .times(1)
        .returning(|_| {
            Ok(Some(SessionType {
                id: 7,
                course_type_name: "TD".to_string(),
                course_material_id: 2,
            }))
        });
    ctx.slot_repo
        .expect_insert()
        .withf(|new_slot| new_slot.group_id == 3 && new_slot.session_type_id == 7)
        .times(1)
        .returning(|new_slot| Ok(slot(30, new_slot.date)));
    let server = ctx.into_server();

    let response = server
        .post("/slot/by-session")
        .json(&json!({
            "groupId": 3,
            "courseName": "Algorithms",
            "sessionType": "TD",
            "date": "15/03/2024",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Slot>();
    assert_eq!(created, slot(30, at(2024, 3, 15, 0)));
}

#[tokio::test]
async fn test_create_slot_by_session_unknown_session_type() {
    let mut ctx = TestContext::new();
    ctx.slot_repo
        .expect_find_session_type()
        .returning(|_| Ok(None));
    ctx.slot_repo.expect_insert().never();
    let server = ctx.into_server();

    let response = server
        .post("/slot/by-session")
        .json(&json!({
            "groupId": 3,
            "courseName": "Underwater Basket Weaving",
            "sessionType": "TP",
            "date": "15/03/2024",
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_slot_by_session_rejects_malformed_date() {
    let mut ctx = TestContext::new();
    ctx.slot_repo.expect_find_session_type().never();
    ctx.slot_repo.expect_insert().never();
    let server = ctx.into_server();

    let response = server
        .post("/slot/by-session")
        .json(&json!({
            "groupId": 3,
            "courseName": "Algorithms",
            "sessionType": "TD",
            "date": "15/03",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_slot() {
    let mut ctx = TestContext::new();
    ctx.slot_repo
        .expect_insert()
        .withf(|new_slot| new_slot.date == at(2024, 3, 15, 8) && new_slot.group_id == 3)
        .times(1)
        .returning(|new_slot| Ok(slot(12, new_slot.date)));
    let server = ctx.into_server();

    let response = server
        .post("/slot")
        .json(&json!({
            "date": "2024-03-15T08:00:00Z",
            "group_id": 3,
            "session_type_id": 7,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Slot>().id, 12);
}

#[tokio::test]
async fn test_create_slot_with_unknown_group() {
    let mut ctx = TestContext::new();
    ctx.slot_repo.expect_insert().returning(|_| {
        Err(AbsenceError::NotFound(
            "Referenced group or session type does not exist".to_string(),
        ))
    });
    let server = ctx.into_server();

    let response = server
        .post("/slot")
        .json(&json!({
            "date": "2024-03-15",
            "group_id": 999,
            "session_type_id": 7,
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_slot_changes_only_the_date() {
    let mut ctx = TestContext::new();
    ctx.slot_repo
        .expect_update()
        .withf(|id, changes| {
            *id == 9
                && *changes
                    == SlotUpdate {
                        date: Some(at(2024, 4, 2, 10)),
                        group_id: None,
                        session_type_id: None,
                    }
        })
        .times(1)
        .returning(|id, changes| Ok(slot(id, changes.date.unwrap_or_default())));
    let server = ctx.into_server();

    let response = server
        .put("/slot/9")
        .json(&json!({ "date": "2024-04-02T10:00:00Z" }))
        .await;

    response.assert_status_ok();
    let updated = response.json::<Slot>();
    assert_eq!(updated.date, at(2024, 4, 2, 10));
    assert_eq!(updated.group_id, 3);
    assert_eq!(updated.session_type_id, 7);
}

#[tokio::test]
async fn test_get_slot() {
    let mut ctx = TestContext::new();
    ctx.slot_repo
        .expect_find_by_id()
        .with(predicate::eq(5))
        .returning(|id| Ok(Some(slot(id, at(2024, 3, 15, 8)))));
    let server = ctx.into_server();

    let response = server.get("/slot/5").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Slot>(), slot(5, at(2024, 3, 15, 8)));
}

#[tokio::test]
async fn test_get_slot_not_found() {
    let mut ctx = TestContext::new();
    ctx.slot_repo.expect_find_by_id().returning(|_| Ok(None));
    let server = ctx.into_server();

    let response = server.get("/slot/404").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_all_slots() {
    let mut ctx = TestContext::new();
    ctx.slot_repo.expect_find_all().times(1).returning(|| {
        Ok(vec![
            slot(1, at(2024, 3, 15, 8)),
            slot(2, at(2024, 3, 16, 8)),
        ])
    });
    let server = ctx.into_server();

    let slots = server.get("/slot").await.json::<Vec<Slot>>();

    assert_eq!(slots.len(), 2);
}

#[tokio::test]
async fn test_delete_slot() {
    let mut ctx = TestContext::new();
    ctx.slot_repo
        .expect_delete()
        .with(predicate::eq(4))
        .times(1)
        .returning(|id| Ok(slot(id, at(2024, 3, 15, 8))));
    let server = ctx.into_server();

    let response = server.delete("/slot/4").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Slot>().id, 4);
}

#[tokio::test]
async fn test_delete_missing_slot() {
    let mut ctx = TestContext::new();
    ctx.slot_repo
        .expect_delete()
        .returning(|id| Err(AbsenceError::NotFound(format!("Slot with ID {} not found", id))));
    let server = ctx.into_server();

    let response = server.delete("/slot/77").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_slots() {
    let mut ctx = TestContext::new();
    ctx.slot_repo.expect_delete_all().times(1).returning(|| Ok(3));
    let server = ctx.into_server();

    let response = server.delete("/slot").await;

    response.assert_status_ok();
    assert_eq!(response.json::<DeleteManyResponse>(), DeleteManyResponse { count: 3 });
}

#[tokio::test]
async fn test_database_failure_is_a_server_error() {
    let mut ctx = TestContext::new();
    ctx.slot_repo
        .expect_find_all()
        .returning(|| Err(AbsenceError::Database(eyre::eyre!("connection refused"))));
    let server = ctx.into_server();

    let response = server.get("/slot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
