mod companies;
mod contacts;
mod create;
mod settings;

pub use companies::cmd_companies;
pub use contacts::cmd_contacts;
pub use create::{CreateOptions, cmd_create};
pub use settings::{cmd_settings_set, cmd_settings_show};
