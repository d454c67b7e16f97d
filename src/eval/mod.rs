//! Position evaluation: line assessment and threat-tier scoring

pub mod heuristic;
pub mod patterns;

pub use heuristic::{assess, evaluate, LineAssessment};
pub use patterns::{threat_score, ThreatScore};
