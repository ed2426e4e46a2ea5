use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog entry for a pitch, e.g. `{ value: "CT", label: "Cutter" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchType {
    pub value: String,
    pub label: String,
}

impl PitchType {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// One prescribed slot in the session script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptItem {
    pub id: String,
    pub pitch_type: String,
    pub target_zone: String,
}

/// One recorded throw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub id: String,
    /// 1-based, contiguous with insertion order.
    pub number: u32,
    pub pitch_type: PitchType,
    pub velocity: f64,
    pub target_zone: String,
    pub actual_zone: String,
    pub compliance: bool,
    pub strike: bool,
    pub intensity: String,
    pub timestamp: DateTime<Utc>,
}

/// Live performance summary, recomputed over the full pitch list on every append.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Summary {
    pub total_pitch_prescribed: u32,
    pub total_pitch_completed: u32,
    /// Percent 0–100.
    pub compliance: u8,
    /// One decimal; 0.0 when no positive velocities exist.
    pub avg_velocity: f64,
    pub top_velocity: f64,
    /// Percent 0–100.
    pub strike_pct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteInfo {
    pub id: String,
    pub name: String,
}

/// Completed-vs-prescribed counts for the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub completed: u32,
    pub prescribed: u32,
}

impl SessionProgress {
    pub fn remaining(&self) -> u32 {
        self.prescribed.saturating_sub(self.completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BullpenSession {
    pub id: String,
    pub organization_id: String,
    pub team_id: String,
    pub athlete: AthleteInfo,
    pub workout_assignment_id: Option<String>,
    pub calendar_event_id: Option<String>,
    pub status: SessionStatus,
    pub pitches: Vec<Pitch>,
    /// Frozen at creation; never mutated afterwards.
    pub script: Vec<ScriptItem>,
    pub summary: Summary,
    pub created_at: DateTime<Utc>,
    /// Incremented by exactly 1 on every successful write; checked by the store.
    pub revision: u64,
}

impl BullpenSession {
    pub fn is_scripted(&self) -> bool {
        !self.script.is_empty()
    }

    /// The script slot the next logged pitch will be matched against;
    /// `None` once the athlete has thrown past the script.
    pub fn next_prescribed(&self) -> Option<&ScriptItem> {
        self.script.get(self.pitches.len())
    }

    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            completed: self.pitches.len() as u32,
            prescribed: self.script.len() as u32,
        }
    }
}

/// Identity and input context for creating a session. The script is derived
/// from `prescription` (primary) or `workout` (fallback) exactly once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionDraft {
    pub organization_id: String,
    pub team_id: String,
    pub athlete: AthleteInfo,
    pub workout_assignment_id: Option<String>,
    pub calendar_event_id: Option<String>,
    pub prescription: Option<Prescription>,
    pub workout: Option<Workout>,
}

/// Scalar payload of a metric whose key the engine does not recognize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

/// One entry of a set's metric bag, tagged by known kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Metric {
    Reps(f64),
    PitchType(String),
    TargetZone(String),
    Duration(f64),
    Distance(f64),
    Weight(f64),
    Unknown { key: String, value: MetricValue },
}

impl Metric {
    /// Numeric payload, if any. The fallback script path takes the first
    /// number it finds in a set as the pitch count.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Metric::Reps(n) | Metric::Duration(n) | Metric::Distance(n) | Metric::Weight(n) => {
                Some(*n)
            }
            Metric::Unknown {
                value: MetricValue::Number(n),
                ..
            } => Some(*n),
            _ => None,
        }
    }

    /// Text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Metric::PitchType(s) | Metric::TargetZone(s) => Some(s),
            Metric::Unknown {
                value: MetricValue::Text(s),
                ..
            } => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescribedSet {
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionEntry {
    pub exercise_key: String,
    pub sets: Vec<PrescribedSet>,
}

/// Coach-authored prescription: ordered exercises, each with ordered sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Prescription {
    pub entries: Vec<PrescriptionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    pub sets: Vec<WorkoutSet>,
}

/// Generic workout definition, only consulted when the prescription yields nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workout {
    pub exercises: Vec<WorkoutExercise>,
}
