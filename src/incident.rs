// run  := cargo run --
// dir  := .
// kid  :=

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncidentStatus {
    Investigating,
    Identified,
    Monitoring,
    Resolved,
    Scheduled,
    InProgress,
    Verifying,
    Completed,
    Unknown,
    Other(String)
}

impl IncidentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Identified => "identified",
            IncidentStatus::Monitoring => "monitoring",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Scheduled => "scheduled",
            IncidentStatus::InProgress => "in_progress",
            IncidentStatus::Verifying => "verifying",
            IncidentStatus::Completed => "completed",
            IncidentStatus::Unknown => "unknown",
            IncidentStatus::Other(s) => s
        }
    }
}

impl From<String> for IncidentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "investigating" => IncidentStatus::Investigating,
            "identified" => IncidentStatus::Identified,
            "monitoring" => IncidentStatus::Monitoring,
            "resolved" => IncidentStatus::Resolved,
            "scheduled" => IncidentStatus::Scheduled,
            "in_progress" => IncidentStatus::InProgress,
            "verifying" => IncidentStatus::Verifying,
            "completed" => IncidentStatus::Completed,
            "unknown" => IncidentStatus::Unknown,
            _ => IncidentStatus::Other(s)
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncidentImpact {
    None,
    Minor,
    Major,
    Critical,
    Maintenance,
    Other(String)
}

impl IncidentImpact {
    pub fn as_str(&self) -> &str {
        match self {
            IncidentImpact::None => "none",
            IncidentImpact::Minor => "minor",
            IncidentImpact::Major => "major",
            IncidentImpact::Critical => "critical",
            IncidentImpact::Maintenance => "maintenance",
            IncidentImpact::Other(s) => s
        }
    }
}

impl From<String> for IncidentImpact {
    fn from(s: String) -> Self {
        match s.as_str() {
            "none" => IncidentImpact::None,
            "minor" => IncidentImpact::Minor,
            "major" => IncidentImpact::Major,
            "critical" => IncidentImpact::Critical,
            "maintenance" => IncidentImpact::Maintenance,
            _ => IncidentImpact::Other(s)
        }
    }
}

impl fmt::Display for IncidentImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

fn status_from_api<'de, D: Deserializer<'de>>(d: D) -> Result<IncidentStatus, D::Error> {
    Ok(Option::<String>::deserialize(d)?.map_or(IncidentStatus::Unknown, IncidentStatus::from))
}

fn impact_from_api<'de, D: Deserializer<'de>>(d: D) -> Result<IncidentImpact, D::Error> {
    Ok(Option::<String>::deserialize(d)?.map_or(IncidentImpact::None, IncidentImpact::from))
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IncidentUpdate {
    pub created_at: DateTime<FixedOffset>
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Incident {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name:             String,
    #[serde(default = "unknown_status", deserialize_with = "status_from_api")]
    pub status:           IncidentStatus,
    #[serde(default = "no_impact", deserialize_with = "impact_from_api")]
    pub impact:           IncidentImpact,
    #[serde(default)]
    pub created_at:       Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at:       Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub scheduled_for:    Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub scheduled_until:  Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shortlink:        String,
    // None when the API omits the list; Some(vec![]) when it sends an empty one.
    #[serde(default)]
    pub components:       Option<Vec<Component>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub incident_updates: Vec<IncidentUpdate>
}

fn unknown_status() -> IncidentStatus { IncidentStatus::Unknown }

fn no_impact() -> IncidentImpact { IncidentImpact::None }

impl Incident {
    pub fn is_resolved(&self) -> bool { self.status.as_str() == "resolved" }
}
