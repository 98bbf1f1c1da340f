//! Lifecycle status declared through the `status` front-matter field

use std::fmt;

/// Lifecycle status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Work in progress
    Draft,

    /// Current and authoritative
    Active,

    /// Replaced by a newer document
    Superseded,

    /// Proposal that was not accepted
    Rejected,

    /// Kept for history only
    Archived,
}

impl Status {
    /// Every status, in canonical order
    pub const ALL: [Status; 5] = [
        Status::Draft,
        Status::Active,
        Status::Superseded,
        Status::Rejected,
        Status::Archived,
    ];

    /// Get the status name as it appears in front-matter
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Active => "active",
            Status::Superseded => "superseded",
            Status::Rejected => "rejected",
            Status::Archived => "archived",
        }
    }

    /// Parse a status name (exact match)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    /// Valid names, used in error messages
    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}
