pub mod middleware;

pub use middleware::MetricsMiddleware;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::{Arc, OnceLock};

use crate::errors::Error;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// How a login attempt ended, used as the `outcome` label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    ValidationFailed,
    MissingFields,
    WrongCredentials,
    Error,
}

impl LoginOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "success",
            LoginOutcome::ValidationFailed => "validation_failed",
            LoginOutcome::MissingFields => "missing_fields",
            LoginOutcome::WrongCredentials => "wrong_credentials",
            LoginOutcome::Error => "error",
        }
    }
}

impl From<&Error> for LoginOutcome {
    fn from(error: &Error) -> Self {
        match error {
            Error::Validation => LoginOutcome::ValidationFailed,
            Error::NecessaryFields => LoginOutcome::MissingFields,
            Error::WrongCredentials => LoginOutcome::WrongCredentials,
            Error::Database(_) | Error::Hashing(_) | Error::Blocking(_) => LoginOutcome::Error,
        }
    }
}

impl<T> From<&Result<T, Error>> for LoginOutcome {
    fn from(result: &Result<T, Error>) -> Self {
        match result {
            Ok(_) => LoginOutcome::Success,
            Err(error) => error.into(),
        }
    }
}

#[derive(Clone)]
pub struct AppMetrics {
    prometheus_handle: Arc<PrometheusHandle>,
}

impl AppMetrics {
    pub fn new() -> Self {
        Self::with_config(None)
    }

    /// The recorder is process-wide; only the first caller's labels apply.
    pub fn with_config(config: Option<&crate::config::AppConfig>) -> Self {
        let handle = PROMETHEUS_HANDLE.get_or_init(|| {
            let builder = PrometheusBuilder::new();

            let builder = if let Some(cfg) = config {
                builder
                    .add_global_label("service", cfg.app.name.clone())
                    .add_global_label("version", cfg.app.version.clone())
                    .add_global_label("environment", cfg.app.environment.clone())
            } else {
                builder
            };

            let builder = builder
                .set_buckets_for_metric(
                    Matcher::Full("http_requests_duration_seconds".to_string()),
                    &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0],
                )
                .expect("Failed to set buckets for http_requests_duration_seconds");

            Self::describe_metrics();

            builder
                .install_recorder()
                .expect("Failed to install Prometheus recorder")
        });

        Self {
            prometheus_handle: Arc::new(handle.clone()),
        }
    }

    fn describe_metrics() {
        describe_counter!("http_requests_total", "Total number of HTTP requests");
        describe_histogram!(
            "http_requests_duration_seconds",
            "HTTP request duration in seconds"
        );
        describe_gauge!(
            "http_requests_in_flight",
            "Number of HTTP requests currently being processed"
        );
        describe_counter!(
            "auth_login_attempts_total",
            "Total number of login attempts by outcome"
        );
    }

    pub fn record_http_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        counter!(
            "http_requests_total",
            "method" => method.to_string(),
            "path" => path.to_string(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            "http_requests_duration_seconds",
            "method" => method.to_string(),
            "path" => path.to_string()
        )
        .record(duration_secs);
    }

    pub fn http_request_start(&self) {
        gauge!("http_requests_in_flight").increment(1.0);
    }

    pub fn http_request_end(&self) {
        gauge!("http_requests_in_flight").decrement(1.0);
    }

    pub fn record_login_attempt(&self, outcome: LoginOutcome) {
        counter!("auth_login_attempts_total", "outcome" => outcome.as_str()).increment(1);
    }

    /// Prometheus text exposition
    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}
