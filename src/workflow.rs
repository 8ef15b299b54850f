//! The ticket submission workflow.
//!
//! One submission runs up to three API calls in sequence: create the
//! ticket, then optionally attach a work note and a time entry. Only
//! the create call is fatal. Once the ticket exists, follow-up failures
//! are downgraded to warnings so the agent still sees the ticket id.

use std::fmt;

use crate::config::Settings;
use crate::error::{DeskError, Result};
use crate::remote::{CreatedTicket, HelpdeskApi, NewNote, NewTicket, NewTimeEntry};
use crate::types::{TicketPriority, TicketSource, TicketStatus, format_time_spent};

/// Snapshot of the submission form.
///
/// The contact email is resolved into the snapshot before [`submit`]
/// runs, so nothing that happens during the request sequence can change
/// what is sent.
#[derive(Debug, Clone, Default)]
pub struct TicketForm {
    pub subject: String,
    pub description: String,
    pub company_id: Option<u64>,
    pub contact_id: Option<u64>,
    pub contact_email: Option<String>,
    pub work_note: Option<String>,
    pub private_note: bool,
    /// Time spent in decimal hours.
    pub time_spent: Option<f64>,
    /// Whether the requester should be emailed about the new ticket.
    pub email_notification: bool,
}

/// A follow-up call that failed after the ticket was created.
#[derive(Debug)]
pub enum FollowUpWarning {
    Note(DeskError),
    TimeEntry(DeskError),
}

impl fmt::Display for FollowUpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FollowUpWarning::Note(e) => {
                write!(f, "ticket created but failed to add work note: {}", e)
            }
            FollowUpWarning::TimeEntry(e) => {
                write!(f, "ticket created but failed to add time entry: {}", e)
            }
        }
    }
}

/// Terminal state of a submission that produced a ticket.
///
/// Hard failures (configuration, validation, or the create call itself)
/// surface as `Err` instead; in that case no ticket exists.
#[derive(Debug)]
pub enum Outcome {
    Success {
        ticket: CreatedTicket,
    },
    Warning {
        ticket: CreatedTicket,
        warnings: Vec<FollowUpWarning>,
    },
}

impl Outcome {
    pub fn ticket(&self) -> &CreatedTicket {
        match self {
            Outcome::Success { ticket } | Outcome::Warning { ticket, .. } => ticket,
        }
    }
}

struct ValidForm<'a> {
    subject: &'a str,
    company_id: u64,
    email: &'a str,
}

/// Check required fields before any network call.
fn validate(form: &TicketForm) -> Result<ValidForm<'_>> {
    let subject = form.subject.trim();
    if subject.is_empty() {
        return Err(DeskError::Validation(
            "subject must not be empty".to_string(),
        ));
    }
    let company_id = form
        .company_id
        .ok_or_else(|| DeskError::Validation("a company must be selected".to_string()))?;
    if form.contact_id.is_none() {
        return Err(DeskError::Validation(
            "a contact must be selected".to_string(),
        ));
    }
    let email = form
        .contact_email
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| {
            DeskError::Validation("selected contact has no email address".to_string())
        })?;
    if let Some(hours) = form.time_spent
        && hours < 0.0
    {
        return Err(DeskError::Validation(
            "time spent must not be negative".to_string(),
        ));
    }
    Ok(ValidForm {
        subject,
        company_id,
        email,
    })
}

/// Run one submission end to end.
pub async fn submit<A>(api: &A, settings: &Settings, form: &TicketForm) -> Result<Outcome>
where
    A: HelpdeskApi + ?Sized,
{
    let valid = validate(form)?;

    // Suppressing the notification email switches the source code AND
    // adds notify_emails=false to the create call. The API treats these
    // as separate controls, so both are applied together.
    let source = if form.email_notification {
        TicketSource::Phone
    } else {
        TicketSource::Internal
    };

    let ticket = NewTicket {
        subject: valid.subject.to_string(),
        description: form.description.clone(),
        email: valid.email.to_string(),
        company_id: valid.company_id,
        priority: TicketPriority::Medium.code(),
        status: TicketStatus::Open.code(),
        source: source.code(),
        responder_id: settings.agent_id,
    };

    let created = api.create_ticket(&ticket, form.email_notification).await?;

    let mut warnings = Vec::new();

    if let Some(body) = non_empty(form.work_note.as_deref()) {
        let note = NewNote {
            body: body.to_string(),
            private: form.private_note,
        };
        if let Err(e) = api.create_note(created.id, &note).await {
            tracing::warn!("work note for ticket {} failed: {}", created.id, e);
            warnings.push(FollowUpWarning::Note(e));
        }
    }

    if let Some(hours) = form.time_spent {
        if settings.agent_id.is_none() {
            tracing::debug!("no agent id configured; time entry will be unassigned");
        }
        let entry = NewTimeEntry {
            note: valid.subject.to_string(),
            time_spent: format_time_spent(hours),
            agent_id: settings.agent_id,
        };
        if let Err(e) = api.create_time_entry(created.id, &entry).await {
            tracing::warn!("time entry for ticket {} failed: {}", created.id, e);
            warnings.push(FollowUpWarning::TimeEntry(e));
        }
    }

    if warnings.is_empty() {
        Ok(Outcome::Success { ticket: created })
    } else {
        Ok(Outcome::Warning {
            ticket: created,
            warnings,
        })
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
