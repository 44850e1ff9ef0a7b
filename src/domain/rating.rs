use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GigId, RatingId, UserId};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Number of ratings after which a paid gig is closed.
pub const RATINGS_TO_CLOSE: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaterType {
    Client,
    Worker,
}

impl RaterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RaterType::Client => "Client",
            RaterType::Worker => "Worker",
        }
    }
}

impl FromStr for RaterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(RaterType::Client),
            "worker" => Ok(RaterType::Worker),
            other => Err(format!("Invalid rater type: {}", other)),
        }
    }
}

impl fmt::Display for RaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: RatingId,
    pub gig_id: GigId,
    pub rater_id: UserId,
    pub rater_type: RaterType,
    pub score: u8,
    pub tags: Vec<String>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(
        gig_id: GigId,
        rater_id: UserId,
        rater_type: RaterType,
        score: u8,
        tags: Vec<String>,
        comment: Option<String>,
    ) -> Result<Self, String> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(format!(
                "Rating must be between {} and {}, got {}",
                MIN_SCORE, MAX_SCORE, score
            ));
        }

        Ok(Self {
            id: RatingId::new(),
            gig_id,
            rater_id,
            rater_type,
            score,
            tags,
            comment,
            created_at: Utc::now(),
        })
    }
}
