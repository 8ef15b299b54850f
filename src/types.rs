use std::fmt;

/// Ticket priority codes used by the helpdesk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn code(self) -> u8 {
        match self {
            TicketPriority::Low => 1,
            TicketPriority::Medium => 2,
            TicketPriority::High => 3,
            TicketPriority::Urgent => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(TicketPriority::Low),
            2 => Some(TicketPriority::Medium),
            3 => Some(TicketPriority::High),
            4 => Some(TicketPriority::Urgent),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ticket status codes used by the helpdesk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketStatus {
    #[default]
    Open,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn code(self) -> u8 {
        match self {
            TicketStatus::Open => 2,
            TicketStatus::Pending => 3,
            TicketStatus::Resolved => 4,
            TicketStatus::Closed => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(TicketStatus::Open),
            3 => Some(TicketStatus::Pending),
            4 => Some(TicketStatus::Resolved),
            5 => Some(TicketStatus::Closed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::Pending => "Pending",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Source channel recorded on a created ticket.
///
/// `Internal` is used when the requester should not be emailed; the
/// create call then also carries the `notify_emails=false` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketSource {
    Phone,
    Internal,
}

impl TicketSource {
    pub fn code(self) -> u8 {
        match self {
            TicketSource::Phone => 2,
            TicketSource::Internal => 101,
        }
    }
}

/// Display label for a priority code. Total: unknown codes map to "Unknown".
pub fn priority_label(code: u8) -> &'static str {
    TicketPriority::from_code(code).map_or("Unknown", TicketPriority::label)
}

/// Display label for a status code. Total: unknown codes map to "Unknown".
pub fn status_label(code: u8) -> &'static str {
    TicketStatus::from_code(code).map_or("Unknown", TicketStatus::label)
}

/// Convert decimal hours to the zero-padded `HH:MM` string the time-entry
/// endpoint expects. Rounds to the nearest minute.
pub fn format_time_spent(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as u64;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
