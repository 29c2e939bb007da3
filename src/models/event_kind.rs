use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    Start,
    End,
}

impl EventKind {
    /// Parse the START/END marker from a log line (case-insensitive).
    pub fn from_marker(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "START" => Some(Self::Start),
            "END" => Some(Self::End),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Start => "START",
            EventKind::End => "END",
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, EventKind::Start)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, EventKind::End)
    }
}
