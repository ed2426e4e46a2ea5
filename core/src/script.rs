use uuid::Uuid;

use crate::models::{Metric, Prescription, ScriptItem, Workout};

pub const DEFAULT_PITCH_TYPE: &str = "4-Seam";
pub const DEFAULT_TARGET_ZONE: &str = "Global";

/// Canonical zone form: a bare number becomes `zone_<N>`, everything else
/// passes through unchanged.
pub fn normalize_zone(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.parse::<u32>().is_ok() {
        format!("zone_{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// Derive the frozen session script.
///
/// The prescription is the primary source; the generic workout is only
/// consulted when the prescription yields zero items. Both empty means an
/// unscripted session (no target tracking).
pub fn build_script(prescription: Option<&Prescription>, workout: Option<&Workout>) -> Vec<ScriptItem> {
    let mut items = prescription.map(items_from_prescription).unwrap_or_default();
    if items.is_empty() {
        if let Some(w) = workout {
            items = items_from_workout(w);
        }
    }
    items
}

/// Primary path: one block of `reps` sibling items per set, in declared order.
fn items_from_prescription(prescription: &Prescription) -> Vec<ScriptItem> {
    let mut out = Vec::new();
    for entry in &prescription.entries {
        for set in &entry.sets {
            let count = set
                .metrics
                .iter()
                .find_map(|m| match m {
                    Metric::Reps(n) => Some(*n),
                    _ => None,
                })
                .unwrap_or(1.0);
            let pitch_type = set
                .metrics
                .iter()
                .find_map(|m| match m {
                    Metric::PitchType(s) => Some(s.as_str()),
                    _ => None,
                })
                .unwrap_or(DEFAULT_PITCH_TYPE);
            let target_zone = set
                .metrics
                .iter()
                .find_map(|m| match m {
                    Metric::TargetZone(s) => Some(normalize_zone(s)),
                    _ => None,
                })
                .unwrap_or_else(|| DEFAULT_TARGET_ZONE.to_string());

            push_items(&mut out, count, pitch_type, &target_zone);
        }
    }
    out
}

/// Fallback path: no pitch-type heuristic exists here. The count is the
/// first number found anywhere in the set's metric bag, the zone the first
/// string containing "zone" (case-insensitive).
fn items_from_workout(workout: &Workout) -> Vec<ScriptItem> {
    let mut out = Vec::new();
    for exercise in &workout.exercises {
        for set in &exercise.sets {
            let count = set.metrics.iter().find_map(Metric::as_number).unwrap_or(1.0);
            let target_zone = set
                .metrics
                .iter()
                .filter_map(Metric::as_text)
                .find(|s| s.to_ascii_lowercase().contains("zone"))
                .unwrap_or(DEFAULT_TARGET_ZONE);

            push_items(&mut out, count, DEFAULT_PITCH_TYPE, target_zone);
        }
    }
    out
}

fn push_items(out: &mut Vec<ScriptItem>, count: f64, pitch_type: &str, target_zone: &str) {
    let count = if count.is_finite() && count > 0.0 {
        count.floor() as usize
    } else {
        0
    };
    for _ in 0..count {
        out.push(ScriptItem {
            id: Uuid::new_v4().to_string(),
            pitch_type: pitch_type.to_string(),
            target_zone: target_zone.to_string(),
        });
    }
}
