use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Position of a gig in its lifecycle.
///
/// The full set of legal edges lives in [`GigStatus::successors`]; every
/// status write in the crate goes through [`crate::domain::Gig::advance`],
/// which checks against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GigStatus {
    Posted,
    Dispatching,
    Matched,
    PartiallyMatched,
    OnRoute,
    Arrived,
    InProgress,
    Complete,
    Paid,
    Closed,
}

impl GigStatus {
    pub const ALL: [GigStatus; 10] = [
        GigStatus::Posted,
        GigStatus::Dispatching,
        GigStatus::Matched,
        GigStatus::PartiallyMatched,
        GigStatus::OnRoute,
        GigStatus::Arrived,
        GigStatus::InProgress,
        GigStatus::Complete,
        GigStatus::Paid,
        GigStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GigStatus::Posted => "Posted",
            GigStatus::Dispatching => "Dispatching",
            GigStatus::Matched => "Matched",
            GigStatus::PartiallyMatched => "PartiallyMatched",
            GigStatus::OnRoute => "OnRoute",
            GigStatus::Arrived => "Arrived",
            GigStatus::InProgress => "InProgress",
            GigStatus::Complete => "Complete",
            GigStatus::Paid => "Paid",
            GigStatus::Closed => "Closed",
        }
    }

    /// Every status reachable in one step, whether triggered automatically or by a caller.
    pub fn successors(&self) -> &'static [GigStatus] {
        match self {
            GigStatus::Posted => &[GigStatus::Dispatching],
            GigStatus::Dispatching => &[GigStatus::Matched, GigStatus::PartiallyMatched],
            GigStatus::PartiallyMatched => &[GigStatus::Matched],
            GigStatus::Matched => &[GigStatus::OnRoute],
            GigStatus::OnRoute => &[GigStatus::Arrived],
            GigStatus::Arrived => &[GigStatus::InProgress],
            GigStatus::InProgress => &[GigStatus::Complete],
            GigStatus::Complete => &[GigStatus::Paid],
            GigStatus::Paid => &[GigStatus::Closed],
            GigStatus::Closed => &[],
        }
    }

    /// The subset of edges a caller may request directly through a status update.
    pub fn requestable_successors(&self) -> &'static [GigStatus] {
        match self {
            GigStatus::OnRoute => &[GigStatus::Arrived],
            GigStatus::Arrived => &[GigStatus::InProgress],
            GigStatus::InProgress => &[GigStatus::Complete],
            _ => &[],
        }
    }

    pub fn can_transition_to(&self, next: GigStatus) -> bool {
        self.successors().contains(&next)
    }

    pub fn can_request(&self, next: GigStatus) -> bool {
        self.requestable_successors().contains(&next)
    }

    /// Still accepting workers.
    pub fn is_open(&self) -> bool {
        matches!(self, GigStatus::Dispatching | GigStatus::PartiallyMatched)
    }

    /// A worker is committed and physically working the gig.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            GigStatus::OnRoute | GigStatus::Arrived | GigStatus::InProgress
        )
    }

    pub fn is_rateable(&self) -> bool {
        matches!(self, GigStatus::Paid | GigStatus::Closed)
    }
}

impl FromStr for GigStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GigStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid gig status: {}", s))
    }
}

impl fmt::Display for GigStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
