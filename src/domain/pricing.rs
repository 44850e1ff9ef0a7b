use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_RATE: f64 = 100.0;
pub const PER_MILE_RATE: f64 = 2.0;

const BASE_RATES: [(&str, f64); 9] = [
    ("Plumber", 120.0),
    ("Electrician", 130.0),
    ("Handyman", 90.0),
    ("Cleaner", 80.0),
    ("Mover", 110.0),
    ("Painter", 100.0),
    ("Landscaper", 95.0),
    ("Locksmith", 125.0),
    ("HVAC", 150.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "ASAP")]
    Asap,
    Today,
    Later,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Asap => "ASAP",
            Urgency::Today => "Today",
            Urgency::Later => "Later",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Urgency::Asap => 1.3,
            Urgency::Today => 1.1,
            Urgency::Later => 1.0,
        }
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asap" => Ok(Urgency::Asap),
            "today" => Ok(Urgency::Today),
            "later" => Ok(Urgency::Later),
            other => Err(format!(
                "Invalid urgency: {}. Expected: ASAP, Today, or Later",
                other
            )),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base rate for a category, case-insensitive; unknown categories fall back to the default.
pub fn base_rate(category: &str) -> f64 {
    let category = category.trim();
    BASE_RATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category))
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_BASE_RATE)
}

pub fn quote_price(category: &str, distance_miles: f64, urgency: Urgency) -> f64 {
    let raw = (base_rate(category) + PER_MILE_RATE * distance_miles) * urgency.multiplier();
    round_cents(raw)
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
