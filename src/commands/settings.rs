use crate::config::{FileStore, Settings, SettingsStore, save_verified};
use crate::display::{Rendered, Severity, print_rendered};
use crate::error::Result;
use crate::remote::HelpdeskClient;

/// Validate new credentials against the API, then persist them together
/// with the probed company list.
pub async fn cmd_settings_set(
    api_key: String,
    domain: String,
    agent_id: Option<u64>,
) -> Result<()> {
    let settings = Settings {
        api_key,
        domain,
        agent_id,
    };
    settings.validate()?;

    let store = FileStore::default_path()?;
    let client = HelpdeskClient::new(&settings.api_key, &settings.domain)?;
    let companies = save_verified(&client, &store, settings).await?;

    print_rendered(&Rendered::new(
        Severity::Success,
        format!("Settings saved. Found {} companies.", companies.len()),
    ));
    Ok(())
}

/// Print stored settings with the API key redacted.
pub fn cmd_settings_show() -> Result<()> {
    let store = FileStore::default_path()?;
    let state = store.load();

    let api_key = if state.settings.api_key.is_empty() {
        "(not set)"
    } else {
        "[REDACTED]"
    };
    let domain = if state.settings.domain.is_empty() {
        "(not set)"
    } else {
        &state.settings.domain
    };
    let agent_id = state
        .settings
        .agent_id
        .map_or_else(|| "(not set)".to_string(), |id| id.to_string());

    println!("api_key: {}", api_key);
    println!("domain: {}", domain);
    println!("agent_id: {}", agent_id);
    println!("cached companies: {}", state.companies.len());
    Ok(())
}
