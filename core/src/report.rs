use std::fmt::Write;

use crate::models::BullpenSession;

/// Plain-text summary block for CLI-style consumers.
pub fn render_session_report(session: &BullpenSession) -> String {
    let s = &session.summary;
    let progress = session.progress();

    let mut out = String::new();
    let _ = writeln!(out, "--- Bullpen Report ---");
    let _ = writeln!(out, "Athlete: {}", session.athlete.name);
    let _ = writeln!(out, "Status: {}", session.status.as_str());
    let _ = writeln!(
        out,
        "Pitches: {}/{}",
        progress.completed, progress.prescribed
    );
    let _ = writeln!(out, "Strike pct: {}%", s.strike_pct);
    let _ = writeln!(out, "Compliance: {}%", s.compliance);
    let _ = writeln!(out, "Avg velo: {:.1}", s.avg_velocity);
    let _ = writeln!(out, "Top velo: {:.1}", s.top_velocity);
    if let Some(next) = session.next_prescribed() {
        let _ = writeln!(out, "Next up: {} @ {}", next.pitch_type, next.target_zone);
    }
    out
}

pub fn print_session_report(session: &BullpenSession) {
    print!("{}", render_session_report(session));
}
