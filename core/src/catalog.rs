use once_cell::sync::Lazy;

use crate::models::PitchType;

/// Known pitch types. The first entry doubles as the fallback for capture
/// values that do not match anything.
pub static PITCH_TYPES: Lazy<Vec<PitchType>> = Lazy::new(|| {
    vec![
        PitchType::new("FF", "4-Seam"),
        PitchType::new("SI", "2-Seam"),
        PitchType::new("CT", "Cutter"),
        PitchType::new("SL", "Slider"),
        PitchType::new("CB", "Curveball"),
        PitchType::new("CH", "Changeup"),
        PitchType::new("SP", "Splitter"),
        PitchType::new("KN", "Knuckleball"),
    ]
});

/// Resolve a capture's pitch-type value against the catalog.
pub fn resolve_pitch_type(value: &str) -> PitchType {
    PITCH_TYPES
        .iter()
        .find(|p| p.value == value)
        .unwrap_or(&PITCH_TYPES[0])
        .clone()
}
