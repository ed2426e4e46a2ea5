use ordered_float::OrderedFloat;

use crate::models::{Pitch, Summary};

/// Round to `dp` decimal places, half away from zero.
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Recompute the summary from scratch over the whole pitch list.
///
/// Always a full recomputation, never an incremental update, so repeated
/// partial updates cannot accumulate rounding drift. `prescribed` is fixed at
/// session creation from the script length and is carried through untouched.
pub fn summarize(pitches: &[Pitch], prescribed: u32) -> Summary {
    let total = pitches.len();
    if total == 0 {
        return Summary {
            total_pitch_prescribed: prescribed,
            ..Summary::default()
        };
    }

    let strikes = pitches.iter().filter(|p| p.strike).count();
    let compliant = pitches.iter().filter(|p| p.compliance).count();

    let velocities: Vec<f64> = pitches
        .iter()
        .map(|p| p.velocity)
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect();

    let top_velocity = velocities
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map(|v| v.into_inner())
        .unwrap_or(0.0);
    let avg_velocity = if velocities.is_empty() {
        0.0
    } else {
        (velocities.iter().sum::<f64>() / velocities.len() as f64).round_to(1)
    };

    Summary {
        total_pitch_prescribed: prescribed,
        total_pitch_completed: total as u32,
        compliance: pct(compliant, total),
        avg_velocity,
        top_velocity,
        strike_pct: pct(strikes, total),
    }
}

fn pct(part: usize, total: usize) -> u8 {
    (100.0 * part as f64 / total as f64).round() as u8
}
