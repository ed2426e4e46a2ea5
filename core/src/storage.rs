use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::errors::{EngineError, EngineResult};
use crate::models::BullpenSession;

/// Persistence seam for session documents.
///
/// `update` is a single combined write of the whole document and must reject
/// any write whose revision is not exactly one past the stored revision, so a
/// lost update surfaces as an error instead of silently dropping a pitch.
pub trait SessionStore {
    fn create(&self, session: &BullpenSession) -> EngineResult<()>;
    fn get(&self, id: &str) -> EngineResult<Option<BullpenSession>>;
    fn update(&self, session: &BullpenSession) -> EngineResult<()>;
    fn query_by_assignment(&self, assignment_id: &str) -> EngineResult<Vec<BullpenSession>>;
}

fn check_revision(stored: u64, incoming: u64, id: &str) -> EngineResult<()> {
    if incoming != stored + 1 {
        return Err(EngineError::persistence(format!(
            "revision conflict for session {id}: stored {stored}, incoming {incoming}"
        )));
    }
    Ok(())
}

/// In-memory store for embedding and tests. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sessions: Arc<Mutex<HashMap<String, BullpenSession>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn create(&self, session: &BullpenSession) -> EngineResult<()> {
        let mut sessions = self.sessions.lock().unwrap();
        if sessions.contains_key(&session.id) {
            return Err(EngineError::persistence(format!(
                "session {} already exists",
                session.id
            )));
        }
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> EngineResult<Option<BullpenSession>> {
        Ok(self.sessions.lock().unwrap().get(id).cloned())
    }

    fn update(&self, session: &BullpenSession) -> EngineResult<()> {
        let mut sessions = self.sessions.lock().unwrap();
        let stored = sessions
            .get(&session.id)
            .ok_or_else(|| EngineError::persistence(format!("update of unknown session {}", session.id)))?;
        check_revision(stored.revision, session.revision, &session.id)?;
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    fn query_by_assignment(&self, assignment_id: &str) -> EngineResult<Vec<BullpenSession>> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.workout_assignment_id.as_deref() == Some(assignment_id))
            .cloned()
            .collect())
    }
}

/// File-backed store: one pretty-printed JSON document per session id under
/// the base directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    fn read_document(&self, path: &Path) -> EngineResult<BullpenSession> {
        let contents = fs::read_to_string(path)
            .map_err(|e| EngineError::persistence(format!("read {}: {e}", path.display())))?;
        let mut de = serde_json::Deserializer::from_str(&contents);
        // serde_path_to_error names the offending field when a document is corrupt
        serde_path_to_error::deserialize(&mut de)
            .map_err(|e| EngineError::persistence(format!("decode {}: {e}", path.display())))
    }

    fn write_document(&self, session: &BullpenSession) -> EngineResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| EngineError::persistence(format!("mkdir {}: {e}", self.dir.display())))?;
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| EngineError::persistence(format!("encode session {}: {e}", session.id)))?;
        let path = self.path_for(&session.id);
        fs::write(&path, json)
            .map_err(|e| EngineError::persistence(format!("write {}: {e}", path.display())))?;
        log::debug!("session {} written to {}", session.id, path.display());
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn create(&self, session: &BullpenSession) -> EngineResult<()> {
        let path = self.path_for(&session.id);
        if path.exists() {
            return Err(EngineError::persistence(format!(
                "session {} already exists at {}",
                session.id,
                path.display()
            )));
        }
        self.write_document(session)
    }

    fn get(&self, id: &str) -> EngineResult<Option<BullpenSession>> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        self.read_document(&path).map(Some)
    }

    fn update(&self, session: &BullpenSession) -> EngineResult<()> {
        let path = self.path_for(&session.id);
        if !path.exists() {
            return Err(EngineError::persistence(format!(
                "update of unknown session {}",
                session.id
            )));
        }
        let stored = self.read_document(&path)?;
        check_revision(stored.revision, session.revision, &session.id)?;
        self.write_document(session)
    }

    fn query_by_assignment(&self, assignment_id: &str) -> EngineResult<Vec<BullpenSession>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| EngineError::persistence(format!("readdir {}: {e}", self.dir.display())))?;

        let mut out = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| EngineError::persistence(format!("readdir {}: {e}", self.dir.display())))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let session = self.read_document(&path)?;
            if session.workout_assignment_id.as_deref() == Some(assignment_id) {
                out.push(session);
            }
        }
        Ok(out)
    }
}
