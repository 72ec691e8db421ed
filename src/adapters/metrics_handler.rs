use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Outcome label recorded for every form submission
pub mod outcome {
    pub const COMPLETED: &str = "completed";
    pub const NOT_COMPLETE: &str = "not_complete";
    pub const INVALID: &str = "invalid";
    pub const OVERFLOW: &str = "overflow";
    pub const MALFORMED: &str = "malformed";
    pub const UNKNOWN_VARIANT: &str = "unknown_variant";
}

pub struct MetricsCollector {
    registry: Registry,

    // Form metrics
    pub form_requests_total: CounterVec,
    pub form_steps_validated: CounterVec,
    pub form_request_duration: HistogramVec,
}

impl MetricsCollector {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let form_requests_total = CounterVec::new(
            Opts::new("formwizard_form_requests_total", "Total number of form submissions"),
            &["variant", "outcome"],
        )?;
        registry.register(Box::new(form_requests_total.clone()))?;

        let form_steps_validated = CounterVec::new(
            Opts::new(
                "formwizard_form_steps_validated_total",
                "Total number of form steps that passed validation",
            ),
            &["variant"],
        )?;
        registry.register(Box::new(form_steps_validated.clone()))?;

        let form_request_duration = HistogramVec::new(
            HistogramOpts::new(
                "formwizard_form_request_duration_seconds",
                "Form submission handling duration in seconds",
            ),
            &["variant"],
        )?;
        registry.register(Box::new(form_request_duration.clone()))?;

        Ok(Self {
            registry,
            form_requests_total,
            form_steps_validated,
            form_request_duration,
        })
    }

    pub fn record_request(&self, variant: &str, outcome: &str) {
        self.form_requests_total
            .with_label_values(&[variant, outcome])
            .inc();
    }

    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

pub struct MetricsHandler {
    collector: Arc<MetricsCollector>,
}

impl MetricsHandler {
    pub fn new(collector: Arc<MetricsCollector>) -> Self {
        Self { collector }
    }

    pub async fn metrics(&self) -> String {
        self.collector.encode().unwrap_or_else(|e| {
            tracing::error!("Failed to encode metrics: {}", e);
            String::from("# Error encoding metrics\n")
        })
    }
}
