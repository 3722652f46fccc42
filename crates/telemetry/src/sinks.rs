// Path: crates/telemetry/src/sinks.rs
//! Defines abstract traits for metrics reporting, decoupling core logic from the backend.

use once_cell::sync::OnceCell;

// --- Static Sink Access ---

/// A no-op sink for use in tests or when telemetry is disabled.
#[derive(Debug, Clone, Copy)]
pub struct NopSink;

/// A lazily-initialized static reference to the global `MetricsSink` implementation.
pub static SINK: OnceCell<&'static dyn MetricsSink> = OnceCell::new();
static NOP_SINK: NopSink = NopSink;

/// Installs `sink` as the global sink. Returns false if one was already installed.
pub fn set_global_sink(sink: &'static dyn MetricsSink) -> bool {
    SINK.set(sink).is_ok()
}

/// Returns a static reference to the configured error metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn error_metrics() -> &'static dyn ErrorMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

/// Returns a static reference to the configured admission metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn admission_metrics() -> &'static dyn AdmissionMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

// --- Trait Definitions ---

/// A sink for metrics related to transaction admission.
pub trait AdmissionMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments a counter for precheck outcomes, labeled by response code.
    fn inc_precheck_outcome(&self, code: &'static str);
    /// Observes the duration of a single precheck assessment.
    fn observe_precheck_duration(&self, duration_secs: f64);
    /// Increments a counter for signature-stage failures, labeled by failure kind.
    fn inc_signature_failure(&self, kind: &'static str);
}
impl AdmissionMetricsSink for NopSink {
    fn inc_precheck_outcome(&self, _code: &'static str) {}
    fn observe_precheck_duration(&self, _duration_secs: f64) {}
    fn inc_signature_failure(&self, _kind: &'static str) {}
}

/// A sink for recording structured error metrics.
pub trait ErrorMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments a counter for a specific error, categorized by its kind and variant.
    fn inc_error(&self, kind: &'static str, variant: &'static str);
}
impl ErrorMetricsSink for NopSink {
    fn inc_error(&self, _kind: &'static str, _variant: &'static str) {}
}

/// A unified sink that implements all domain-specific traits, providing a single
/// point of implementation for metrics backends like Prometheus.
pub trait MetricsSink: AdmissionMetricsSink + ErrorMetricsSink {}

// Blanket implementation to allow any type that implements all sub-traits
// to be used as a `MetricsSink`.
impl<T> MetricsSink for T where T: AdmissionMetricsSink + ErrorMetricsSink {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_fall_back_to_nop() {
        // Nothing in this crate's unit tests installs a global sink.
        admission_metrics().inc_precheck_outcome("OK");
        admission_metrics().observe_precheck_duration(0.5);
        error_metrics().inc_error("key", "KEY_DEPTH_EXCEEDED");
        assert!(SINK.get().is_none());
    }
}
