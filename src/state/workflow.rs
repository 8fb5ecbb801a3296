//! Export workflow controller.
//!
//! One controller per open configuration surface. Every method runs the same
//! flow (extract → synthesize or probe → present), parameterized by its
//! [`MethodDescriptor`](crate::models::MethodDescriptor).

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::export::command::{SynthesisResult, redacted_command, synthesize_with};
use crate::export::probe::{
    ConnectionProber, ConnectivityTester, ProbeRequest, ProbeResult, SimulatedTester,
};
use crate::helpers::shell::unescape_clipboard;
use crate::models::ExportMethod;
use crate::state::form::{FieldSource, extract};
use crate::state::settings::ExportSettings;
use crate::state::status::{ProbeState, StatusMessage, StatusPresenter};

/// Destination for "Copy Command". Failures are reported, never retried.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard kept in memory; hosts without a system clipboard use this.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

pub struct ExportWorkflow {
    settings: ExportSettings,
    prober: ConnectionProber,
    presenter: Arc<Mutex<StatusPresenter>>,
    in_flight: Mutex<HashMap<ExportMethod, CancellationToken>>,
}

impl ExportWorkflow {
    /// Open a controller that probes with the simulated tester.
    pub fn open(settings: ExportSettings) -> Self {
        let tester = Arc::new(SimulatedTester::new(settings.probe.simulated_delay()));
        Self::with_tester(settings, tester)
    }

    pub fn with_tester(settings: ExportSettings, tester: Arc<dyn ConnectivityTester>) -> Self {
        let prober = ConnectionProber::new(tester, settings.probe.timeout())
            .with_placeholder_delay(settings.probe.simulated_delay());
        Self {
            settings,
            prober,
            presenter: Arc::new(Mutex::new(StatusPresenter::new())),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Build the method's command from the current form and display it.
    pub fn generate(&self, method: ExportMethod, source: &dyn FieldSource) -> SynthesisResult {
        let record = extract(method, source);
        let result = synthesize_with(method, &record, &self.settings.tools);
        log::info!(
            "Generated {method} command:\n{}",
            redacted_command(method, &record, &self.settings.tools)
        );
        self.presenter.lock().show_command(result.clone());
        result
    }

    /// Start a connectivity probe for `method` on the current tokio runtime.
    ///
    /// The panel shows the testing message immediately. A probe already in
    /// flight for the same method is cancelled and its result never shown.
    /// The handle resolves to the presented result, or `None` when the probe
    /// was superseded.
    pub fn start_probe(
        &self,
        method: ExportMethod,
        source: &dyn FieldSource,
    ) -> JoinHandle<Option<ProbeResult>> {
        let record = extract(method, source);
        let request = ProbeRequest::from_record(&record);
        let ticket = self.presenter.lock().begin_probe(method);

        let token = CancellationToken::new();
        if let Some(previous) = self.in_flight.lock().insert(method, token.clone()) {
            log::debug!("Cancelling superseded {method} probe");
            previous.cancel();
        }

        let prober = self.prober.clone();
        let presenter = Arc::clone(&self.presenter);
        tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => return None,
                result = prober.run(request) => result,
            };
            if presenter.lock().finish_probe(ticket, result.clone()) { Some(result) } else { None }
        })
    }

    /// Probe and wait for the outcome.
    pub async fn probe(
        &self,
        method: ExportMethod,
        source: &dyn FieldSource,
    ) -> Option<ProbeResult> {
        self.start_probe(method, source).await.ok().flatten()
    }

    /// Copy the displayed command for `method`. Best effort: returns false
    /// when nothing was generated yet or the clipboard refused.
    pub fn copy_command(&self, method: ExportMethod, clipboard: &dyn ClipboardWriter) -> bool {
        let Some(payload) = self.presenter.lock().command(method).map(|c| c.clipboard_payload())
        else {
            log::warn!("No {method} command to copy");
            return false;
        };

        match clipboard.write_text(&unescape_clipboard(&payload)) {
            Ok(()) => {
                log::info!("Copied {method} command to clipboard");
                true
            }
            Err(err) => {
                log::warn!("Failed to copy {method} command: {err}");
                false
            }
        }
    }

    pub fn status(&self, method: ExportMethod) -> Option<StatusMessage> {
        self.presenter.lock().status(method).cloned()
    }

    pub fn command(&self, method: ExportMethod) -> Option<SynthesisResult> {
        self.presenter.lock().command(method).cloned()
    }

    pub fn probe_state(&self, method: ExportMethod) -> ProbeState {
        self.presenter.lock().probe_state(method).clone()
    }

    pub fn render_panel(&self, method: ExportMethod) -> String {
        self.presenter.lock().render_panel(method)
    }

    pub fn render(&self) -> String {
        self.presenter.lock().render()
    }
}

impl Drop for ExportWorkflow {
    fn drop(&mut self) {
        for (_, token) in self.in_flight.lock().drain() {
            token.cancel();
        }
    }
}
