//! HTTP client for the slot endpoints of the absence API.
//!
//! Each call is a single round trip. Failures are logged and handed back
//! to the caller; nothing is retried or cached.

pub mod config;
pub mod view;

use absence_core::models::slot::{
    CreateSlotBySessionRequest, CreateSlotRequest, DeleteManyResponse, Slot, SlotWithDetails,
};
use chrono::NaiveDate;
use eyre::{eyre, Result, WrapErr};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::{config::ClientConfig, view::SlotView};

/// Client for the `/slot` endpoint group.
#[derive(Debug, Clone)]
pub struct SlotClient {
    http: Client,
    base_url: String,
}

impl SlotClient {
    /// Builds a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build().wrap_err("Failed to build HTTP client")?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lists the slots of `date` in the flattened shape used by day views.
    pub async fn get_slots(&self, date: NaiveDate) -> Result<Vec<SlotView>> {
        let url = format!("{}/slot/by-date/{}", self.base_url, date.format("%Y-%m-%d"));
        let slots: Vec<SlotWithDetails> = send(self.http.get(url), "load slots").await?;

        Ok(slots.into_iter().map(SlotView::from).collect())
    }

    /// Creates a slot from ids and returns the stored record.
    pub async fn post_slot(&self, slot: &CreateSlotRequest) -> Result<Slot> {
        let url = format!("{}/slot", self.base_url);
        send(self.http.post(url).json(slot), "create slot").await
    }

    /// Creates a slot from a course name and session type label.
    pub async fn post_slot_by_session(&self, request: &CreateSlotBySessionRequest) -> Result<Slot> {
        let url = format!("{}/slot/by-session", self.base_url);
        send(self.http.post(url).json(request), "create slot by session").await
    }

    pub async fn delete_slot(&self, id: i32) -> Result<Slot> {
        let url = format!("{}/slot/{}", self.base_url, id);
        send(self.http.delete(url), "delete slot").await
    }

    /// Deletes every slot and returns how many were removed.
    pub async fn delete_slots(&self) -> Result<DeleteManyResponse> {
        let url = format!("{}/slot", self.base_url);
        send(self.http.delete(url), "delete slots").await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder, action: &str) -> Result<T> {
    let result = try_send(request, action).await;
    if let Err(err) = &result {
        error!("Error during {}: {:#}", action, err);
    }
    result
}

async fn try_send<T: DeserializeOwned>(request: RequestBuilder, action: &str) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    debug!("{} -> {}", action, status);

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(eyre!("Failed to {}: {} {}", action, status, error_text));
    }

    Ok(response.json::<T>().await?)
}
