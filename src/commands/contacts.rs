use crate::config::{FileStore, SettingsStore};
use crate::display::{Rendered, Severity, print_rendered};
use crate::error::Result;
use crate::remote::{HelpdeskApi, HelpdeskClient};

/// Look up the contacts of a company.
pub async fn cmd_contacts(company_id: u64) -> Result<()> {
    let store = FileStore::default_path()?;
    let state = store.load();
    let client = HelpdeskClient::from_settings(&state.settings)?;

    let contacts = client.list_contacts(company_id).await?;

    if contacts.is_empty() {
        // An empty list is a valid answer, not a failure.
        print_rendered(&Rendered::new(
            Severity::Info,
            "No contacts found for this company.",
        ));
        return Ok(());
    }

    for contact in &contacts {
        println!(
            "{:>8}  {} <{}>",
            contact.id,
            contact.name,
            contact.email.as_deref().unwrap_or("no email")
        );
    }
    Ok(())
}
