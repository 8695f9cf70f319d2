// run  := cargo run --
// dir  := .
// kid  :=

use crate::incident::{Incident, IncidentImpact, IncidentStatus};

pub const NO_COLOR: &str = "";

pub fn status_color(incident: &Incident) -> &'static str {
    match incident.status {
        IncidentStatus::Investigating => "lightblue",
        IncidentStatus::Resolved => "green",
        IncidentStatus::Monitoring => {
            match incident.impact {
                IncidentImpact::Major => "orange",
                IncidentImpact::Minor => "yellow",
                _ => "#123def"
            }
        }
        _ => NO_COLOR
    }
}

pub fn impact_color(incident: &Incident) -> &'static str {
    match incident.impact {
        IncidentImpact::Minor => "#123def",
        IncidentImpact::Major => "red",
        _ => NO_COLOR
    }
}
