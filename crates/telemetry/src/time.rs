// Path: crates/telemetry/src/time.rs
use crate::sinks::AdmissionMetricsSink;
use std::time::Instant;

/// Observes the elapsed time of one precheck assessment when dropped.
pub struct Timer<'a> {
    sink: &'a dyn AdmissionMetricsSink,
    start: Instant,
}

impl<'a> Timer<'a> {
    /// Starts timing against `sink`.
    pub fn new(sink: &'a dyn AdmissionMetricsSink) -> Self {
        Self {
            sink,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.sink
            .observe_precheck_duration(self.start.elapsed().as_secs_f64());
    }
}
