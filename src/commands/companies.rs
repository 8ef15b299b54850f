use crate::config::{FileStore, SettingsStore};
use crate::display::{Rendered, Severity, print_rendered};
use crate::error::Result;

/// List the companies cached at the last settings save.
pub fn cmd_companies() -> Result<()> {
    let store = FileStore::default_path()?;
    let state = store.load();

    if state.companies.is_empty() {
        print_rendered(&Rendered::new(
            Severity::Info,
            "No cached companies. Run: deskpost settings set --api-key <key> --domain <domain>",
        ));
        return Ok(());
    }

    for company in &state.companies {
        println!("{:>8}  {}", company.id, company.name);
    }
    Ok(())
}
