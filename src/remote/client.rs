//! Helpdesk REST client.
//!
//! Authentication is HTTP basic auth with the API key as the username
//! and a fixed `X` as the password; the remote service only inspects
//! the key. The key is held in a `SecretString` so accidental `Debug`
//! output redacts it. It only leaves the wrapper at the moment the
//! Authorization header is built.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};

use crate::config::Settings;
use crate::error::{DeskError, Result};

use super::error::ApiError;
use super::{Company, Contact, CreatedTicket, HelpdeskApi, NewNote, NewTicket, NewTimeEntry};

/// Basic-auth password companion to the API key.
const AUTH_PASSWORD: &str = "X";

/// Client for one set of credentials against one helpdesk domain.
pub struct HelpdeskClient {
    client: Client,
    api_key: SecretString,
    base_url: String,
}

impl HelpdeskClient {
    /// Create a client from explicit credentials.
    ///
    /// The settings probe uses this to test new credentials without
    /// touching whatever is currently stored.
    ///
    /// Configures the HTTP client with a 30s connect timeout and 60s
    /// total timeout.
    pub fn new(api_key: &str, domain: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: SecretString::from(api_key.to_owned()),
            base_url: format!("https://{domain}.freshdesk.com/api/v2"),
        })
    }

    /// Create a client from stored settings.
    ///
    /// Fails with a configuration error before any request is built if
    /// the API key or domain is missing.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        if settings.api_key.is_empty() {
            return Err(DeskError::Config(
                "API key not configured. Run: deskpost settings set --api-key <key> --domain <domain>"
                    .to_string(),
            ));
        }
        if settings.domain.is_empty() {
            return Err(DeskError::Config(
                "helpdesk domain not configured. Run: deskpost settings set --api-key <key> --domain <domain>"
                    .to_string(),
            ));
        }
        Self::new(&settings.api_key, &settings.domain)
    }

    /// Override the base URL. Used by tests and self-hosted deployments.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(self.api_key.expose_secret(), Some(AUTH_PASSWORD))
    }

    /// Map a non-2xx response to an error carrying the status and raw body.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::new(status, body).into());
        }
        Ok(response)
    }
}

#[async_trait]
impl HelpdeskApi for HelpdeskClient {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        let url = format!("{}/companies", self.base_url);
        let response = Self::check(self.authed(self.client.get(&url)).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn list_contacts(&self, company_id: u64) -> Result<Vec<Contact>> {
        let url = format!("{}/contacts", self.base_url);
        let response = Self::check(
            self.authed(self.client.get(&url))
                .query(&[("company_id", company_id)])
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }

    async fn create_ticket(
        &self,
        ticket: &NewTicket,
        notify_emails: bool,
    ) -> Result<CreatedTicket> {
        let url = format!("{}/tickets", self.base_url);
        let mut request = self.authed(self.client.post(&url)).json(ticket);
        if !notify_emails {
            // The workflow pairs this with the internal source code; the
            // API treats the two as independent controls.
            request = request.query(&[("notify_emails", "false")]);
        }
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create_note(&self, ticket_id: u64, note: &NewNote) -> Result<()> {
        let url = format!("{}/tickets/{ticket_id}/notes", self.base_url);
        Self::check(self.authed(self.client.post(&url)).json(note).send().await?).await?;
        Ok(())
    }

    async fn create_time_entry(&self, ticket_id: u64, entry: &NewTimeEntry) -> Result<()> {
        let url = format!("{}/tickets/{ticket_id}/time_entries", self.base_url);
        Self::check(
            self.authed(self.client.post(&url))
                .json(entry)
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }
}
