use chrono::Utc;
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};
use crate::events::{notify_best_effort, EventSink};
use crate::logger::{log_pitch, PitchCapture};
use crate::models::{BullpenSession, SessionDraft, SessionStatus, Summary};
use crate::script::build_script;
use crate::storage::SessionStore;

/// Routing decision for an assignment the athlete is about to open.
#[derive(Debug, Clone)]
pub enum PriorSession {
    /// A finished session whose calendar activity is also done: show the
    /// read-only summary instead of starting anything.
    SummaryView(BullpenSession),
    /// An unfinished session: resume it, never start a duplicate.
    Resume(BullpenSession),
    StartNew,
}

/// Session lifecycle facade: owns the persistence and event seams and
/// exposes the engine operations to UI/API callers.
pub struct BullpenEngine {
    store: Box<dyn SessionStore>,
    events: Box<dyn EventSink>,
}

impl BullpenEngine {
    pub fn new(store: Box<dyn SessionStore>, events: Box<dyn EventSink>) -> Self {
        Self { store, events }
    }

    /// Decide where to route for an assignment before starting a session.
    /// The event collaborator is write-only, so the linked calendar
    /// activity's completion flag comes from the caller.
    pub fn resolve_prior(
        &self,
        assignment_id: &str,
        activity_completed: bool,
    ) -> EngineResult<PriorSession> {
        let sessions = self.store.query_by_assignment(assignment_id)?;

        if activity_completed {
            if let Some(done) = sessions
                .iter()
                .find(|s| s.status == SessionStatus::Completed)
            {
                return Ok(PriorSession::SummaryView(done.clone()));
            }
        }
        if let Some(active) = sessions
            .iter()
            .find(|s| s.status == SessionStatus::InProgress)
        {
            return Ok(PriorSession::Resume(active.clone()));
        }
        Ok(PriorSession::StartNew)
    }

    /// Create a session with a script frozen from the draft's prescription
    /// (or the generic workout fallback). The calendar notification is
    /// fire-and-forget and runs only after the session is persisted.
    pub fn create_session(&self, draft: SessionDraft) -> EngineResult<BullpenSession> {
        if let Some(assignment_id) = draft.workout_assignment_id.as_deref() {
            // query-before-create: at most one active session per assignment
            if !self.list_active_for_assignment(assignment_id)?.is_empty() {
                return Err(EngineError::validation(format!(
                    "an active session already exists for assignment {assignment_id}"
                )));
            }
        }

        let script = build_script(draft.prescription.as_ref(), draft.workout.as_ref());
        let summary = Summary {
            total_pitch_prescribed: script.len() as u32,
            ..Summary::default()
        };

        let session = BullpenSession {
            id: Uuid::new_v4().to_string(),
            organization_id: draft.organization_id,
            team_id: draft.team_id,
            athlete: draft.athlete,
            workout_assignment_id: draft.workout_assignment_id,
            calendar_event_id: draft.calendar_event_id,
            status: SessionStatus::InProgress,
            pitches: Vec::new(),
            script,
            summary,
            created_at: Utc::now(),
            revision: 0,
        };
        self.store.create(&session)?;
        log::info!(
            "session {} created ({} pitches prescribed)",
            session.id,
            session.summary.total_pitch_prescribed
        );

        notify_best_effort(
            self.events.as_ref(),
            session.calendar_event_id.as_deref(),
            SessionStatus::InProgress.as_str(),
        );
        Ok(session)
    }

    pub fn get_session(&self, id: &str) -> EngineResult<Option<BullpenSession>> {
        self.store.get(id)
    }

    pub fn log_pitch(&self, id: &str, capture: &PitchCapture) -> EngineResult<BullpenSession> {
        log_pitch(self.store.as_ref(), id, capture)
    }

    /// One-way transition to completed. Completing an already-completed
    /// session is a no-op; it never reopens and never re-notifies.
    pub fn complete_session(&self, id: &str) -> EngineResult<()> {
        let mut session = self
            .store
            .get(id)?
            .ok_or_else(|| EngineError::session_not_found(id))?;
        if session.status == SessionStatus::Completed {
            return Ok(());
        }

        session.status = SessionStatus::Completed;
        session.revision += 1;
        self.store.update(&session)?;
        log::info!(
            "session {} completed ({}/{} pitches)",
            session.id,
            session.summary.total_pitch_completed,
            session.summary.total_pitch_prescribed
        );

        notify_best_effort(
            self.events.as_ref(),
            session.calendar_event_id.as_deref(),
            SessionStatus::Completed.as_str(),
        );
        Ok(())
    }

    pub fn list_active_for_assignment(
        &self,
        assignment_id: &str,
    ) -> EngineResult<Vec<BullpenSession>> {
        Ok(self
            .store
            .query_by_assignment(assignment_id)?
            .into_iter()
            .filter(|s| s.status == SessionStatus::InProgress)
            .collect())
    }
}
