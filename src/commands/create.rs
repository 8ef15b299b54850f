use crate::config::{FileStore, SettingsStore};
use crate::display::{print_rendered, render_outcome};
use crate::error::{DeskError, Result};
use crate::remote::{HelpdeskApi, HelpdeskClient};
use crate::workflow::{self, TicketForm};

/// Options for a ticket submission.
pub struct CreateOptions {
    pub subject: String,
    pub description: Option<String>,
    pub company_id: u64,
    pub contact_id: u64,
    pub work_note: Option<String>,
    pub private_note: bool,
    pub time_spent: Option<f64>,
    pub email_notification: bool,
}

/// Resolve the contact, run the submission workflow, and render the
/// outcome.
pub async fn cmd_create(options: CreateOptions) -> Result<()> {
    let store = FileStore::default_path()?;
    let state = store.load();
    let client = HelpdeskClient::from_settings(&state.settings)?;

    // Resolve the contact's email now. The form carries a snapshot, so
    // the request sequence is immune to anything changing underneath it.
    let contacts = client.list_contacts(options.company_id).await?;
    let contact = contacts
        .iter()
        .find(|c| c.id == options.contact_id)
        .ok_or(DeskError::ContactNotFound {
            company_id: options.company_id,
            contact_id: options.contact_id,
        })?;

    let form = TicketForm {
        subject: options.subject,
        description: options.description.unwrap_or_default(),
        company_id: Some(options.company_id),
        contact_id: Some(options.contact_id),
        contact_email: contact.email.clone(),
        work_note: options.work_note,
        private_note: options.private_note,
        time_spent: options.time_spent,
        email_notification: options.email_notification,
    };

    let outcome = workflow::submit(&client, &state.settings, &form).await?;
    print_rendered(&render_outcome(
        &outcome,
        &state.settings.domain,
        form.email_notification,
    ));
    Ok(())
}
