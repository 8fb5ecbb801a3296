//! Form values and parameter extraction.
//!
//! The host owns the actual inputs; the core only needs to read a field's
//! current text or checked state. [`FormValues`] is an in-memory source used
//! by the command line front end and by tests.

use std::collections::HashMap;

use crate::models::{ExportMethod, FieldDefault, FieldKind, ParameterRecord};

/// Read access to the current value of a method's fields.
pub trait FieldSource {
    /// Raw text of a field, `None` when the field was never filled in.
    fn text(&self, method: ExportMethod, key: &str) -> Option<String>;

    /// Checked state of a boolean field.
    fn is_checked(&self, method: ExportMethod, key: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldInput {
    Text(String),
    Checked(bool),
}

/// In-memory form state, scoped per method.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    inputs: HashMap<(ExportMethod, String), FieldInput>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, method: ExportMethod, key: &str, value: impl Into<String>) {
        self.inputs.insert((method, key.to_string()), FieldInput::Text(value.into()));
    }

    pub fn set_checked(&mut self, method: ExportMethod, key: &str, checked: bool) {
        self.inputs.insert((method, key.to_string()), FieldInput::Checked(checked));
    }

    /// Prefill from the process environment (`ES_HOSTS`, `KISMET_PORT`, ...).
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Prefill from an arbitrary variable lookup.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut form = Self::new();
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(hosts) = var("ES_HOSTS") {
            form.set_text(ExportMethod::Realtime, "es-hosts", hosts.clone());
            let first = hosts.split(',').next().unwrap_or_default().trim().to_string();
            form.set_text(ExportMethod::Filebeat, "es-url", first.clone());
            form.set_text(ExportMethod::Bulk, "es-url", first);
        }
        for method in ExportMethod::all() {
            if let Some(user) = var("ES_USERNAME") {
                form.set_text(method, "es-user", user);
            }
            if let Some(pass) = var("ES_PASSWORD") {
                form.set_text(method, "es-pass", pass);
            }
        }
        if let Some(index) = var("ES_INDEX_PREFIX") {
            form.set_text(ExportMethod::Realtime, "index", index.clone());
            form.set_text(ExportMethod::Bulk, "index", index);
        }
        if let Some(host) = var("KISMET_HOST") {
            form.set_text(ExportMethod::Realtime, "host", host);
        }
        if let Some(port) = var("KISMET_PORT") {
            form.set_text(ExportMethod::Realtime, "port", port);
        }
        if let Some(device) = var("KISMET_DEVICE_NAME") {
            form.set_text(ExportMethod::Filebeat, "device", device);
        }
        if let Some(dir) = var("KISMET_LOG_DIR") {
            form.set_text(ExportMethod::Filebeat, "logdir", dir.clone());
            form.set_text(ExportMethod::Bulk, "logdir", dir);
        }

        form
    }
}

impl FieldSource for FormValues {
    fn text(&self, method: ExportMethod, key: &str) -> Option<String> {
        match self.inputs.get(&(method, key.to_string())) {
            Some(FieldInput::Text(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn is_checked(&self, method: ExportMethod, key: &str) -> bool {
        matches!(self.inputs.get(&(method, key.to_string())), Some(FieldInput::Checked(true)))
    }
}

/// Snapshot a method's fields, substituting defaults for blanks.
///
/// No format validation happens here: a port of `abc` is carried through
/// as-is and left for the synthesizer and the external tool to deal with.
pub fn extract(method: ExportMethod, source: &dyn FieldSource) -> ParameterRecord {
    let mut record = ParameterRecord::new(method);

    for spec in method.fields() {
        record = match (spec.kind, spec.default) {
            (FieldKind::Boolean, _) => record.with_flag(spec.key, source.is_checked(method, spec.key)),
            (_, FieldDefault::Text(default)) => {
                let value = source
                    .text(method, spec.key)
                    .map(|raw| raw.trim().to_string())
                    .filter(|value| !value.is_empty())
                    .unwrap_or_else(|| default.to_string());
                record.with_text(spec.key, value)
            }
            (_, FieldDefault::Flag(default)) => record.with_flag(spec.key, default),
        };
    }

    log::debug!("Extracted {} fields for {method}", record.len());
    record
}
