use crate::errors::EngineResult;

/// Write-only seam to the calendar/event collaborator.
pub trait EventSink {
    fn set_status(&self, event_id: &str, status: &str) -> EngineResult<()>;
}

/// Sink for callers without a calendar integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn set_status(&self, _event_id: &str, _status: &str) -> EngineResult<()> {
        Ok(())
    }
}

/// Fire-and-forget status notification. A sink failure is logged and
/// swallowed; it must never fail the session operation that triggered it.
pub(crate) fn notify_best_effort(sink: &dyn EventSink, event_id: Option<&str>, status: &str) {
    let Some(event_id) = event_id else {
        return;
    };
    match sink.set_status(event_id, status) {
        Ok(()) => log::debug!("event {event_id} marked {status}"),
        Err(err) => log::warn!("event status update failed for {event_id} -> {status}: {err}"),
    }
}
