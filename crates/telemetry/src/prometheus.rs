// Path: crates/telemetry/src/prometheus.rs
//! A concrete implementation of the metrics sinks using the Prometheus crate.

use crate::sinks::*;
use once_cell::sync::OnceCell;
use prometheus::{
    exponential_buckets, register_histogram, register_int_counter_vec, Histogram, IntCounterVec,
};

// --- Metric Statics ---
// We use OnceCell to hold the metric collectors. They will be initialized
// exactly once by the `install` function.

static PRECHECK_OUTCOMES_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static PRECHECK_DURATION_SECONDS: OnceCell<Histogram> = OnceCell::new();
static SIGNATURE_FAILURES_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static ERRORS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();

/// The Prometheus-backed sink returned by [`install`].
#[derive(Debug, Clone, Copy)]
pub struct PrometheusSink;

/// Runs `$body` with the collector if `install()` has run; otherwise does nothing.
macro_rules! with_metric {
    ($metric:ident, |$m:ident| $body:expr) => {
        if let Some($m) = $metric.get() {
            $body;
        }
    };
}

impl AdmissionMetricsSink for PrometheusSink {
    fn inc_precheck_outcome(&self, code: &'static str) {
        with_metric!(PRECHECK_OUTCOMES_TOTAL, |m| m.with_label_values(&[code]).inc());
    }
    fn observe_precheck_duration(&self, duration_secs: f64) {
        with_metric!(PRECHECK_DURATION_SECONDS, |m| m.observe(duration_secs));
    }
    fn inc_signature_failure(&self, kind: &'static str) {
        with_metric!(SIGNATURE_FAILURES_TOTAL, |m| m.with_label_values(&[kind]).inc());
    }
}

impl ErrorMetricsSink for PrometheusSink {
    fn inc_error(&self, kind: &'static str, variant: &'static str) {
        with_metric!(ERRORS_TOTAL, |m| m.with_label_values(&[kind, variant]).inc());
    }
}

fn already_installed(name: &str) -> prometheus::Error {
    prometheus::Error::Msg(format!("{} already installed", name))
}

/// Initializes all Prometheus metrics collectors and returns a static reference to the sink.
/// This function must be called only once at application startup.
pub fn install() -> Result<&'static dyn MetricsSink, prometheus::Error> {
    PRECHECK_OUTCOMES_TOTAL
        .set(register_int_counter_vec!(
            "gate_precheck_outcomes_total",
            "Total precheck assessments, labeled by response code.",
            &["code"]
        )?)
        .map_err(|_| already_installed("gate_precheck_outcomes_total"))?;
    PRECHECK_DURATION_SECONDS
        .set(register_histogram!(
            "gate_precheck_duration_seconds",
            "Latency of a single precheck assessment.",
            exponential_buckets(0.00001, 2.0, 16)?
        )?)
        .map_err(|_| already_installed("gate_precheck_duration_seconds"))?;
    SIGNATURE_FAILURES_TOTAL
        .set(register_int_counter_vec!(
            "gate_signature_failures_total",
            "Total signature-stage failures, labeled by failure kind.",
            &["kind"]
        )?)
        .map_err(|_| already_installed("gate_signature_failures_total"))?;
    ERRORS_TOTAL
        .set(register_int_counter_vec!(
            "gate_errors_total",
            "Total number of errors, categorized by type and variant.",
            &["kind", "variant"]
        )?)
        .map_err(|_| already_installed("gate_errors_total"))?;

    static SINK: PrometheusSink = PrometheusSink;
    Ok(&SINK)
}

/// Runs [`install`] and makes the Prometheus sink the one returned by
/// `admission_metrics()` and `error_metrics()`.
pub fn install_global() -> Result<(), prometheus::Error> {
    let sink = install()?;
    if set_global_sink(sink) {
        Ok(())
    } else {
        Err(already_installed("global metrics sink"))
    }
}
