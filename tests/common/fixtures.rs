//! Form fixtures and scripted collaborators for export tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use forgedfate_export::ExportMethod;
use forgedfate_export::error::{Error, Result};
use forgedfate_export::export::probe::{ConnectivityTester, ProbeRequest};
use forgedfate_export::state::{ClipboardWriter, FormValues};
use futures::FutureExt as _;
use futures::future::BoxFuture;
use parking_lot::Mutex;

/// Realtime panel with every field left as the user found it.
pub fn realtime_untouched() -> FormValues {
    FormValues::new()
}

/// Filebeat panel filled in with credentials.
pub fn filebeat_with_credentials() -> FormValues {
    let mut form = FormValues::new();
    form.set_text(ExportMethod::Filebeat, "es-url", "https://es.example.com:9200");
    form.set_text(ExportMethod::Filebeat, "es-user", "alice");
    form.set_text(ExportMethod::Filebeat, "es-pass", "s3cr3t");
    form.set_text(ExportMethod::Filebeat, "device", "box1");
    form.set_text(ExportMethod::Filebeat, "logdir", "/var/log/kismet");
    form
}

/// A form with a reachable-looking endpoint for `method`.
pub fn configured(method: ExportMethod, endpoint: &str) -> FormValues {
    let mut form = FormValues::new();
    let key = method.descriptor().endpoint_field;
    form.set_text(method, key, endpoint);
    form
}

/// Tester that replays scripted (delay, error) outcomes and records requests.
#[derive(Default)]
pub struct ScriptedTester {
    script: Mutex<VecDeque<(Duration, Option<String>)>>,
    seen: Mutex<Vec<ProbeRequest>>,
}

impl ScriptedTester {
    pub fn new(script: impl IntoIterator<Item = (Duration, Option<&'static str>)>) -> Self {
        let script = script.into_iter().map(|(d, e)| (d, e.map(str::to_string))).collect();
        Self { script: Mutex::new(script), seen: Mutex::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<ProbeRequest> {
        self.seen.lock().clone()
    }
}

impl ConnectivityTester for ScriptedTester {
    fn probe(&self, request: ProbeRequest) -> BoxFuture<'static, Result<Duration>> {
        self.seen.lock().push(request);
        let (delay, error) = self.script.lock().pop_front().unwrap_or((Duration::ZERO, None));
        async move {
            tokio::time::sleep(delay).await;
            match error {
                Some(message) => Err(Error::Probe(message)),
                None => Ok(delay),
            }
        }
        .boxed()
    }
}

/// Clipboard that always refuses.
pub struct RefusingClipboard;

impl ClipboardWriter for RefusingClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(Error::Clipboard("no clipboard available".to_string()))
    }
}
