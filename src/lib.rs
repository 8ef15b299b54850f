pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod remote;
pub mod types;
pub mod workflow;

pub use config::{FileStore, Settings, SettingsStore, StoredState, save_verified};
pub use error::{DeskError, Result};
pub use remote::{Company, Contact, CreatedTicket, HelpdeskApi, HelpdeskClient};
pub use types::{format_time_spent, priority_label, status_label};
pub use workflow::{FollowUpWarning, Outcome, TicketForm, submit};
