//! Helpdesk REST API surface.
//!
//! This module defines the wire types for the ticketing API and the
//! `HelpdeskApi` trait the workflow is written against, so tests can
//! substitute a recording mock for the real client.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use client::HelpdeskClient;

/// A company record from the helpdesk directory.
///
/// Unrecognized fields are retained verbatim so the cached list
/// round-trips whatever the API returned at probe time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A contact within a company. Fetched fresh per lookup, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
}

/// Request body for `POST /api/v2/tickets`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTicket {
    pub subject: String,
    pub description: String,
    pub email: String,
    pub company_id: u64,
    pub priority: u8,
    pub status: u8,
    pub source: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,
}

/// The created ticket's display fields; its id keys the follow-up calls.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTicket {
    pub id: u64,
    pub subject: String,
    pub status: u8,
    pub priority: u8,
}

/// Request body for `POST /api/v2/tickets/{id}/notes`.
#[derive(Debug, Clone, Serialize)]
pub struct NewNote {
    pub body: String,
    pub private: bool,
}

/// Request body for `POST /api/v2/tickets/{id}/time_entries`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTimeEntry {
    pub note: String,
    pub time_spent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
}

/// Common interface to the helpdesk API.
#[async_trait]
pub trait HelpdeskApi: Send + Sync {
    /// List all companies visible to the credentials.
    async fn list_companies(&self) -> Result<Vec<Company>>;

    /// List contacts belonging to a company. An empty list is a valid
    /// result, not an error.
    async fn list_contacts(&self, company_id: u64) -> Result<Vec<Contact>>;

    /// Create a ticket. `notify_emails = false` suppresses the requester
    /// notification email at the API level.
    async fn create_ticket(&self, ticket: &NewTicket, notify_emails: bool)
    -> Result<CreatedTicket>;

    /// Attach a work note to an existing ticket.
    async fn create_note(&self, ticket_id: u64, note: &NewNote) -> Result<()>;

    /// Record a time entry against an existing ticket.
    async fn create_time_entry(&self, ticket_id: u64, entry: &NewTimeEntry) -> Result<()>;
}
