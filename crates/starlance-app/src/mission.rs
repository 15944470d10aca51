//! Mission-source collaborator seam.
//!
//! A generator (possibly backed by a remote text service) produces one
//! `MissionParameters` record per session. Whatever happens on that
//! side, the core must receive a valid record: `acquire_mission`
//! substitutes the static fallback on any failure.

use thiserror::Error;

use starlance_core::mission::MissionParameters;

#[derive(Debug, Error)]
pub enum MissionSourceError {
    #[error("malformed mission payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("mission payload contains non-finite tuning values")]
    NonFinite,
    #[error("mission source unavailable: {0}")]
    Unavailable(String),
}

/// A provider of session mission parameters.
pub trait MissionSource {
    fn fetch(&self) -> Result<MissionParameters, MissionSourceError>;
}

/// The no-credentials path: always returns the fixed synthetic record.
pub struct StaticMissionSource;

impl MissionSource for StaticMissionSource {
    fn fetch(&self) -> Result<MissionParameters, MissionSourceError> {
        Ok(MissionParameters::fallback())
    }
}

/// Parse a generator's JSON payload into mission parameters,
/// rejecting non-finite tunables so a broken generator cannot poison
/// the session.
pub fn parse_mission_payload(payload: &str) -> Result<MissionParameters, MissionSourceError> {
    let mission: MissionParameters = serde_json::from_str(payload)?;
    if !mission.enemy_density.is_finite() || !mission.speed_modifier.is_finite() {
        return Err(MissionSourceError::NonFinite);
    }
    Ok(mission)
}

/// Fetch from the given source, falling back to the static record on
/// any error. The core never sees the failure.
pub fn acquire_mission(source: &dyn MissionSource) -> MissionParameters {
    match source.fetch() {
        Ok(mission) => mission,
        Err(err) => {
            log::warn!("mission source failed ({err}); using static fallback");
            MissionParameters::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl MissionSource for FailingSource {
        fn fetch(&self) -> Result<MissionParameters, MissionSourceError> {
            Err(MissionSourceError::Unavailable("no credentials".into()))
        }
    }

    #[test]
    fn test_payload_roundtrip() {
        let payload = serde_json::to_string(&MissionParameters::fallback()).unwrap();
        let mission = parse_mission_payload(&payload).unwrap();
        assert_eq!(mission, MissionParameters::fallback());
    }

    #[test]
    fn test_malformed_payload_rejected() {
        assert!(matches!(
            parse_mission_payload("{\"title\": 12}"),
            Err(MissionSourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_finite_payload_rejected() {
        // A numeric overflow parses as infinity and must be refused.
        let payload = r#"{
            "title": "Overflow",
            "briefing": "generator glitch",
            "theme_color": {"r": 1.0, "g": 0.4, "b": 0.4, "a": 1.0},
            "enemy_density": 0.5,
            "speed_modifier": 1e999
        }"#;
        assert!(matches!(
            parse_mission_payload(payload),
            Err(MissionSourceError::NonFinite)
        ));
    }

    #[test]
    fn test_acquire_substitutes_fallback() {
        let mission = acquire_mission(&FailingSource);
        assert_eq!(mission, MissionParameters::fallback());
    }
}
