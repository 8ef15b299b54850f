//! Recording mock of the helpdesk API for workflow and config tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{DeskError, Result};

use super::{Company, Contact, CreatedTicket, HelpdeskApi, NewNote, NewTicket, NewTimeEntry};

/// One observed API call, with enough detail for assertions.
#[derive(Debug, Clone)]
pub enum Call {
    ListCompanies,
    ListContacts {
        company_id: u64,
    },
    CreateTicket {
        ticket: NewTicket,
        notify_emails: bool,
    },
    CreateNote {
        ticket_id: u64,
        note: NewNote,
    },
    CreateTimeEntry {
        ticket_id: u64,
        entry: NewTimeEntry,
    },
}

/// Mock `HelpdeskApi` that records every call and can be told to fail
/// individual operations with a given HTTP status.
#[derive(Default)]
pub struct RecordingApi {
    pub calls: Mutex<Vec<Call>>,
    pub companies: Vec<Company>,
    pub contacts: Vec<Contact>,
    pub fail_companies: Option<u16>,
    pub fail_create: Option<u16>,
    pub fail_note: Option<u16>,
    pub fail_time_entry: Option<u16>,
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail(status: u16) -> DeskError {
        DeskError::Api {
            status,
            body: "mock failure".to_string(),
        }
    }
}

#[async_trait]
impl HelpdeskApi for RecordingApi {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.record(Call::ListCompanies);
        if let Some(status) = self.fail_companies {
            return Err(Self::fail(status));
        }
        Ok(self.companies.clone())
    }

    async fn list_contacts(&self, company_id: u64) -> Result<Vec<Contact>> {
        self.record(Call::ListContacts { company_id });
        Ok(self.contacts.clone())
    }

    async fn create_ticket(
        &self,
        ticket: &NewTicket,
        notify_emails: bool,
    ) -> Result<CreatedTicket> {
        self.record(Call::CreateTicket {
            ticket: ticket.clone(),
            notify_emails,
        });
        if let Some(status) = self.fail_create {
            return Err(Self::fail(status));
        }
        Ok(CreatedTicket {
            id: 42,
            subject: ticket.subject.clone(),
            status: ticket.status,
            priority: ticket.priority,
        })
    }

    async fn create_note(&self, ticket_id: u64, note: &NewNote) -> Result<()> {
        self.record(Call::CreateNote {
            ticket_id,
            note: note.clone(),
        });
        if let Some(status) = self.fail_note {
            return Err(Self::fail(status));
        }
        Ok(())
    }

    async fn create_time_entry(&self, ticket_id: u64, entry: &NewTimeEntry) -> Result<()> {
        self.record(Call::CreateTimeEntry {
            ticket_id,
            entry: entry.clone(),
        });
        if let Some(status) = self.fail_time_entry {
            return Err(Self::fail(status));
        }
        Ok(())
    }
}
