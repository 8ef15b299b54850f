//! Rendering of workflow outcomes.
//!
//! Pure mapping from a submission's terminal state to a renderable
//! message, kept separate from the workflow itself so both can be
//! tested in isolation.

use owo_colors::OwoColorize;

use crate::error::DeskError;
use crate::types::{priority_label, status_label};
use crate::workflow::Outcome;

/// Display class of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

/// A message ready for a result sink.
///
/// `text` is always literal and safe for plain-text sinks. `html` is
/// populated only for created-ticket messages, which carry a link to
/// the ticket; nothing else is ever rendered as markup.
#[derive(Debug)]
pub struct Rendered {
    pub severity: Severity,
    pub text: String,
    pub html: Option<String>,
}

impl Rendered {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            html: None,
        }
    }
}

/// Web URL of a ticket on the agent's helpdesk.
pub fn ticket_url(domain: &str, ticket_id: u64) -> String {
    format!("https://{domain}.freshdesk.com/a/tickets/{ticket_id}")
}

/// Escape a dynamic field for the HTML body. Response bodies and
/// subjects are not trusted markup.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a submission that produced a ticket.
pub fn render_outcome(outcome: &Outcome, domain: &str, email_notification: bool) -> Rendered {
    let (ticket, warnings) = match outcome {
        Outcome::Success { ticket } => (ticket, &[][..]),
        Outcome::Warning { ticket, warnings } => (ticket, warnings.as_slice()),
    };

    let notification = if email_notification {
        "Email sent"
    } else {
        "No email sent"
    };
    let url = ticket_url(domain, ticket.id);

    let mut text = format!(
        "Ticket created successfully!\n\n\
         Ticket ID: {}\nSubject: {}\nStatus: {}\nPriority: {}\n{}\n\n{}",
        ticket.id,
        ticket.subject,
        status_label(ticket.status),
        priority_label(ticket.priority),
        notification,
        url
    );
    let mut html = format!(
        "Ticket created successfully!<br><br>\
         Ticket ID: {}<br>Subject: {}<br>Status: {}<br>Priority: {}<br>{}<br><br>\
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View ticket</a>",
        ticket.id,
        escape_html(&ticket.subject),
        status_label(ticket.status),
        priority_label(ticket.priority),
        notification,
        url
    );

    for warning in warnings {
        text.push_str(&format!("\nWarning: {}", warning));
        html.push_str(&format!("<br>Warning: {}", escape_html(&warning.to_string())));
    }

    Rendered {
        severity: if warnings.is_empty() {
            Severity::Success
        } else {
            Severity::Warning
        },
        text,
        html: Some(html),
    }
}

/// Render a hard failure. No ticket exists on this path.
pub fn render_error(err: &DeskError) -> Rendered {
    Rendered::new(Severity::Error, format!("Error: {err}"))
}

/// Print a rendered message to the terminal with its severity color.
/// Warnings and errors go to stderr.
pub fn print_rendered(message: &Rendered) {
    match message.severity {
        Severity::Success => println!("{}", message.text.green()),
        Severity::Info => println!("{}", message.text),
        Severity::Warning => eprintln!("{}", message.text.yellow()),
        Severity::Error => eprintln!("{}", message.text.red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::CreatedTicket;
    use crate::workflow::FollowUpWarning;

    fn ticket() -> CreatedTicket {
        CreatedTicket {
            id: 9,
            subject: "Printer down".to_string(),
            status: 2,
            priority: 2,
        }
    }

    #[test]
    fn test_ticket_url() {
        assert_eq!(
            ticket_url("acme", 9),
            "https://acme.freshdesk.com/a/tickets/9"
        );
    }

    #[test]
    fn test_success_rendering() {
        let outcome = Outcome::Success { ticket: ticket() };
        let rendered = render_outcome(&outcome, "acme", true);

        assert_eq!(rendered.severity, Severity::Success);
        assert!(rendered.text.contains("Ticket ID: 9"));
        assert!(rendered.text.contains("Status: Open"));
        assert!(rendered.text.contains("Priority: Medium"));
        assert!(rendered.text.contains("Email sent"));
        assert!(!rendered.text.contains("<a href"));

        let html = rendered.html.unwrap();
        assert!(html.contains("<a href=\"https://acme.freshdesk.com/a/tickets/9\""));
    }

    #[test]
    fn test_warning_rendering_keeps_ticket_details() {
        let outcome = Outcome::Warning {
            ticket: ticket(),
            warnings: vec![FollowUpWarning::Note(DeskError::Api {
                status: 422,
                body: "<oops>".to_string(),
            })],
        };
        let rendered = render_outcome(&outcome, "acme", false);

        assert_eq!(rendered.severity, Severity::Warning);
        assert!(rendered.text.contains("Ticket ID: 9"));
        assert!(rendered.text.contains("No email sent"));
        assert!(rendered.text.contains("failed to add work note"));

        // Untrusted fields are escaped in the HTML sink.
        let html = rendered.html.unwrap();
        assert!(html.contains("&lt;oops&gt;"));
        assert!(!html.contains("<oops>"));
    }

    #[test]
    fn test_unknown_codes_render_as_unknown() {
        let mut t = ticket();
        t.status = 77;
        t.priority = 0;
        let rendered = render_outcome(&Outcome::Success { ticket: t }, "acme", true);
        assert!(rendered.text.contains("Status: Unknown"));
        assert!(rendered.text.contains("Priority: Unknown"));
    }

    #[test]
    fn test_error_rendering_is_plain_text() {
        let rendered = render_error(&DeskError::Config("API key not configured".to_string()));
        assert_eq!(rendered.severity, Severity::Error);
        assert!(rendered.text.contains("API key not configured"));
        assert!(rendered.html.is_none());
    }
}
