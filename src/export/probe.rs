//! Connectivity probing for export endpoints.
//!
//! The prober owns the state contract (`Idle → Testing → Success | Error`) and
//! the user-facing messages. The actual reachability check is delegated to a
//! [`ConnectivityTester`]; [`SimulatedTester`] stands in for it when no real
//! client is wired up.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt as _;
use futures::future::BoxFuture;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::helpers::validate::{extract_host_from_url, is_unconfigured_endpoint};
use crate::models::{ExportMethod, ParameterRecord};
use crate::state::status::StatusLevel;

/// What a tester needs to reach the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub method: ExportMethod,
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ProbeRequest {
    pub fn from_record(record: &ParameterRecord) -> Self {
        let method = record.method;
        let optional = |key: &str| Some(record.text(key).to_string()).filter(|v| !v.is_empty());
        Self {
            method,
            endpoint: record.text(method.descriptor().endpoint_field).to_string(),
            username: optional("es-user"),
            password: optional("es-pass"),
        }
    }
}

/// External reachability check. Resolves to the observed latency.
pub trait ConnectivityTester: Send + Sync {
    fn probe(&self, request: ProbeRequest) -> BoxFuture<'static, Result<Duration>>;
}

/// Waits a fixed delay and reports success; no network I/O.
#[derive(Debug, Clone)]
pub struct SimulatedTester {
    delay: Duration,
}

impl SimulatedTester {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ConnectivityTester for SimulatedTester {
    fn probe(&self, request: ProbeRequest) -> BoxFuture<'static, Result<Duration>> {
        let delay = self.delay;
        async move {
            log::debug!("Simulating probe of {} for {}", request.endpoint, request.method);
            tokio::time::sleep(delay).await;
            Ok(delay)
        }
        .boxed()
    }
}

/// Outcome shown in a method panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub method: ExportMethod,
    pub status: StatusLevel,
    pub message: String,
}

impl ProbeResult {
    /// Status shown while a probe is in flight.
    pub fn testing(method: ExportMethod) -> Self {
        Self {
            method,
            status: StatusLevel::Info,
            message: method.descriptor().testing_message.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == StatusLevel::Error
    }
}

/// Runs a tester under a timeout and classifies the outcome.
#[derive(Clone)]
pub struct ConnectionProber {
    tester: Arc<dyn ConnectivityTester>,
    timeout: Duration,
    placeholder_delay: Duration,
}

impl ConnectionProber {
    pub fn new(tester: Arc<dyn ConnectivityTester>, timeout: Duration) -> Self {
        Self { tester, timeout, placeholder_delay: Duration::ZERO }
    }

    /// Delay before an unconfigured endpoint is reported, so it settles
    /// on the same schedule as a simulated check.
    pub fn with_placeholder_delay(mut self, delay: Duration) -> Self {
        self.placeholder_delay = delay;
        self
    }

    pub async fn run(&self, request: ProbeRequest) -> ProbeResult {
        let method = request.method;
        let outcome = self.check(request).await;
        Self::classify(method, outcome)
    }

    async fn check(&self, request: ProbeRequest) -> Result<Duration> {
        if is_unconfigured_endpoint(&request.endpoint) {
            tokio::time::sleep(self.placeholder_delay).await;
            return Err(Error::Unconfigured(request.endpoint));
        }

        let host = extract_host_from_url(&request.endpoint).unwrap_or_default();
        log::debug!("Probing {host} for {}", request.method);

        match tokio::time::timeout(self.timeout, self.tester.probe(request)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout("Connection timed out".to_string())),
        }
    }

    pub fn classify(method: ExportMethod, outcome: Result<Duration>) -> ProbeResult {
        let descriptor = method.descriptor();
        let (status, message) = match outcome {
            Ok(latency) => {
                log::info!("{method} probe succeeded in {}ms", latency.as_millis());
                (StatusLevel::Success, descriptor.success_message.to_string())
            }
            Err(Error::Unconfigured(_)) => {
                log::info!("{method} probe skipped: endpoint still uses the placeholder");
                (StatusLevel::Error, descriptor.unconfigured_message.to_string())
            }
            Err(err) => {
                log::info!("{method} probe failed: {err}");
                (StatusLevel::Error, format!("Connection failed: {err}"))
            }
        };
        ProbeResult { method, status, message }
    }
}
