use clap::{Parser, Subcommand};
use std::process::ExitCode;

use deskpost::commands::{
    CreateOptions, cmd_companies, cmd_contacts, cmd_create, cmd_settings_set, cmd_settings_show,
};
use deskpost::display::{print_rendered, render_error};

#[derive(Parser)]
#[command(name = "deskpost")]
#[command(about = "Helpdesk ticket filing from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a helpdesk ticket
    #[command(visible_alias = "c")]
    Create {
        /// Ticket subject
        subject: String,

        /// Description text
        #[arg(short, long)]
        description: Option<String>,

        /// Company ID (see `deskpost companies`)
        #[arg(long)]
        company: u64,

        /// Contact ID within the company (see `deskpost contacts`)
        #[arg(long)]
        contact: u64,

        /// Work note to attach after the ticket is created
        #[arg(short = 'n', long)]
        note: Option<String>,

        /// Mark the work note as private
        #[arg(long, requires = "note")]
        private: bool,

        /// Time spent in decimal hours (e.g. 1.5)
        #[arg(short, long)]
        time: Option<f64>,

        /// Do not email the requester about the new ticket
        #[arg(long)]
        no_email: bool,
    },

    /// List cached companies
    Companies,

    /// List contacts for a company
    Contacts {
        /// Company ID
        company_id: u64,
    },

    /// Manage stored settings
    #[command(subcommand)]
    Settings(SettingsAction),
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Validate new credentials against the API and store them
    Set {
        /// Helpdesk API key
        #[arg(long)]
        api_key: String,

        /// Helpdesk subdomain (the <domain> in https://<domain>.freshdesk.com)
        #[arg(long)]
        domain: String,

        /// Agent ID to attach as responder on created tickets
        #[arg(long)]
        agent_id: Option<u64>,
    },

    /// Print stored settings with the API key redacted
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create {
            subject,
            description,
            company,
            contact,
            note,
            private,
            time,
            no_email,
        } => {
            cmd_create(CreateOptions {
                subject,
                description,
                company_id: company,
                contact_id: contact,
                work_note: note,
                private_note: private,
                time_spent: time,
                email_notification: !no_email,
            })
            .await
        }
        Commands::Companies => cmd_companies(),
        Commands::Contacts { company_id } => cmd_contacts(company_id).await,
        Commands::Settings(SettingsAction::Set {
            api_key,
            domain,
            agent_id,
        }) => cmd_settings_set(api_key, domain, agent_id).await,
        Commands::Settings(SettingsAction::Show) => cmd_settings_show(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_rendered(&render_error(&e));
            ExitCode::FAILURE
        }
    }
}
