pub mod catalog;
pub mod errors;
pub mod events;
pub mod logger;
pub mod models;
pub mod report;
pub mod script;
pub mod session;
pub mod storage;
pub mod summary;

pub use catalog::{resolve_pitch_type, PITCH_TYPES};
pub use errors::{EngineError, EngineResult};
pub use events::{EventSink, NoopEventSink};
pub use logger::{log_pitch, PitchCapture, DEFAULT_INTENSITY};
pub use models::{
    AthleteInfo, BullpenSession, Metric, MetricValue, Pitch, PitchType, PrescribedSet,
    Prescription, PrescriptionEntry, ScriptItem, SessionDraft, SessionProgress, SessionStatus,
    Summary, Workout, WorkoutExercise, WorkoutSet,
};
pub use report::{print_session_report, render_session_report};
pub use script::{build_script, normalize_zone, DEFAULT_PITCH_TYPE, DEFAULT_TARGET_ZONE};
pub use session::{BullpenEngine, PriorSession};
pub use storage::{JsonFileStore, MemoryStore, SessionStore};
pub use summary::{summarize, RoundTo};
