use chrono::Utc;
use uuid::Uuid;

use crate::catalog::resolve_pitch_type;
use crate::errors::{EngineError, EngineResult};
use crate::models::{BullpenSession, Pitch, SessionStatus};
use crate::storage::SessionStore;
use crate::summary::summarize;

pub const DEFAULT_INTENSITY: &str = "100%";

/// Candidate capture for one throw. `velocity` and `actual_zone` are
/// required; their absence is a validation failure, not a logging attempt.
#[derive(Debug, Clone, Default)]
pub struct PitchCapture {
    pub pitch_type_value: String,
    pub velocity: Option<f64>,
    pub actual_zone: Option<String>,
    pub strike: bool,
    pub intensity: Option<String>,
}

/// Validate a capture, append the pitch, recompute the summary over the full
/// pitch list, and persist pitches + summary as one combined write.
pub fn log_pitch(
    store: &dyn SessionStore,
    session_id: &str,
    capture: &PitchCapture,
) -> EngineResult<BullpenSession> {
    let velocity = capture
        .velocity
        .ok_or_else(|| EngineError::validation("velocity is required"))?;
    let actual_zone = capture
        .actual_zone
        .as_deref()
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .ok_or_else(|| EngineError::validation("actual zone is required"))?;

    let mut session = store
        .get(session_id)?
        .ok_or_else(|| EngineError::session_not_found(session_id))?;
    if session.status == SessionStatus::Completed {
        return Err(EngineError::validation(format!(
            "session {session_id} is completed; no further pitches can be logged"
        )));
    }

    let index = session.pitches.len();
    let prescription = session.script.get(index);

    // A pitch thrown past the script has no target; it counts as compliant.
    let compliance = prescription
        .map(|slot| slot.target_zone == actual_zone)
        .unwrap_or(true);
    let target_zone = prescription
        .map(|slot| slot.target_zone.clone())
        .unwrap_or_else(|| actual_zone.to_string());

    let pitch = Pitch {
        id: Uuid::new_v4().to_string(),
        number: (index + 1) as u32,
        pitch_type: resolve_pitch_type(&capture.pitch_type_value),
        velocity,
        target_zone,
        actual_zone: actual_zone.to_string(),
        compliance,
        strike: capture.strike,
        intensity: capture
            .intensity
            .clone()
            .unwrap_or_else(|| DEFAULT_INTENSITY.to_string()),
        timestamp: Utc::now(),
    };

    session.pitches.push(pitch);
    session.summary = summarize(&session.pitches, session.summary.total_pitch_prescribed);
    session.revision += 1;
    store.update(&session)?;

    log::debug!(
        "session {}: pitch {} logged (strike={}, compliant={})",
        session.id,
        session.pitches.len(),
        capture.strike,
        compliance
    );
    Ok(session)
}
