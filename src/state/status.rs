//! Status messages for the method panels.
//!
//! Each method panel shows at most one status message and one generated
//! command. New results replace old ones; nothing accumulates.

use std::fmt::Write as _;

use serde::Serialize;

use crate::export::command::SynthesisResult;
use crate::export::probe::ProbeResult;
use crate::models::ExportMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl StatusLevel {
    fn badge(self) -> &'static str {
        match self {
            StatusLevel::Info => "[info]",
            StatusLevel::Success => "[ok]",
            StatusLevel::Error => "[error]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Error, text: text.into() }
    }
}

/// Probe lifecycle of one panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProbeState {
    #[default]
    Idle,
    Testing,
    Success,
    Error(String),
}

/// Identifies one probe run; only the latest ticket per method may present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTicket {
    pub method: ExportMethod,
    generation: u64,
}

#[derive(Debug, Default)]
struct MethodPanel {
    status: Option<StatusMessage>,
    output: Option<SynthesisResult>,
    probe: ProbeState,
    generation: u64,
}

pub const MONITOR_IDLE_TEXT: &str =
    "No active exports detected. Start an export method above to see status information.";

#[derive(Debug, Default)]
pub struct StatusPresenter {
    panels: [MethodPanel; 3],
}

impl StatusPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn panel(&self, method: ExportMethod) -> &MethodPanel {
        &self.panels[Self::index(method)]
    }

    fn panel_mut(&mut self, method: ExportMethod) -> &mut MethodPanel {
        &mut self.panels[Self::index(method)]
    }

    fn index(method: ExportMethod) -> usize {
        match method {
            ExportMethod::Realtime => 0,
            ExportMethod::Filebeat => 1,
            ExportMethod::Bulk => 2,
        }
    }

    /// Start a probe: shows the "Testing" message and invalidates older tickets.
    pub fn begin_probe(&mut self, method: ExportMethod) -> ProbeTicket {
        let panel = self.panel_mut(method);
        panel.generation += 1;
        let testing = ProbeResult::testing(method);
        panel.status = Some(StatusMessage::info(testing.message));
        panel.probe = ProbeState::Testing;
        ProbeTicket { method, generation: panel.generation }
    }

    pub fn is_current(&self, ticket: ProbeTicket) -> bool {
        self.panel(ticket.method).generation == ticket.generation
    }

    /// Present a probe outcome. Returns false (and changes nothing) for a
    /// superseded ticket.
    pub fn finish_probe(&mut self, ticket: ProbeTicket, result: ProbeResult) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Discarding stale {} probe result", ticket.method);
            return false;
        }
        debug_assert_eq!(ticket.method, result.method);
        let panel = self.panel_mut(ticket.method);
        panel.probe = match result.status {
            StatusLevel::Success => ProbeState::Success,
            StatusLevel::Error => ProbeState::Error(result.message.clone()),
            StatusLevel::Info => ProbeState::Testing,
        };
        panel.status = Some(StatusMessage { level: result.status, text: result.message });
        true
    }

    /// Replace the generated command shown for a method.
    pub fn show_command(&mut self, result: SynthesisResult) {
        let method = result.method;
        self.panel_mut(method).output = Some(result);
    }

    pub fn status(&self, method: ExportMethod) -> Option<&StatusMessage> {
        self.panel(method).status.as_ref()
    }

    pub fn command(&self, method: ExportMethod) -> Option<&SynthesisResult> {
        self.panel(method).output.as_ref()
    }

    pub fn probe_state(&self, method: ExportMethod) -> &ProbeState {
        &self.panel(method).probe
    }

    /// Text rendering of one method panel.
    pub fn render_panel(&self, method: ExportMethod) -> String {
        let descriptor = method.descriptor();
        let panel = self.panel(method);
        let mut out = String::new();

        let _ = writeln!(out, "== {} ==", descriptor.heading);
        let _ = writeln!(out, "Best for: {}", descriptor.best_for);

        if let Some(status) = &panel.status {
            let _ = writeln!(out, "{} {}", status.level.badge(), status.text);
        }

        if let Some(output) = &panel.output {
            let _ = writeln!(out, "\n--- {} ---", output.title);
            if let Some(instructions) = &output.instructions {
                let _ = writeln!(out, "{instructions}\n");
            }
            let _ = writeln!(out, "Command to run:\n{}", output.command);
        }

        out
    }

    /// All panels followed by the status monitor.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for method in ExportMethod::all() {
            out.push_str(&self.render_panel(method));
            out.push('\n');
        }

        out.push_str("== Export Status Monitor ==\n");
        let idle = self.panels.iter().all(|panel| panel.status.is_none() && panel.output.is_none());
        if idle {
            let _ = writeln!(out, "{MONITOR_IDLE_TEXT}");
        } else {
            for method in ExportMethod::all() {
                let state = match self.probe_state(method) {
                    ProbeState::Idle => "idle".to_string(),
                    ProbeState::Testing => "testing".to_string(),
                    ProbeState::Success => "reachable".to_string(),
                    ProbeState::Error(message) => format!("error: {message}"),
                };
                let ready = if self.command(method).is_some() { ", command ready" } else { "" };
                let _ = writeln!(out, "{method}: {state}{ready}");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(method: ExportMethod, status: StatusLevel, message: &str) -> ProbeResult {
        ProbeResult { method, status, message: message.to_string() }
    }

    #[test]
    fn test_new_status_replaces_old() {
        let mut presenter = StatusPresenter::new();
        let ticket = presenter.begin_probe(ExportMethod::Bulk);
        assert_eq!(presenter.status(ExportMethod::Bulk).unwrap().level, StatusLevel::Info);

        assert!(presenter.finish_probe(ticket, result(ExportMethod::Bulk, StatusLevel::Success, "ok")));
        let status = presenter.status(ExportMethod::Bulk).unwrap();
        assert_eq!(status, &StatusMessage::success("ok"));
        assert_eq!(presenter.probe_state(ExportMethod::Bulk), &ProbeState::Success);
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut presenter = StatusPresenter::new();
        let first = presenter.begin_probe(ExportMethod::Realtime);
        let second = presenter.begin_probe(ExportMethod::Realtime);

        assert!(presenter.finish_probe(second, result(ExportMethod::Realtime, StatusLevel::Error, "bad")));
        assert!(!presenter.finish_probe(first, result(ExportMethod::Realtime, StatusLevel::Success, "ok")));
        assert_eq!(presenter.status(ExportMethod::Realtime), Some(&StatusMessage::error("bad")));
    }

    #[test]
    fn test_panels_are_independent() {
        let mut presenter = StatusPresenter::new();
        let filebeat = presenter.begin_probe(ExportMethod::Filebeat);
        let bulk = presenter.begin_probe(ExportMethod::Bulk);
        assert!(presenter.is_current(filebeat));
        assert!(presenter.finish_probe(bulk, result(ExportMethod::Bulk, StatusLevel::Error, "x")));
        assert_eq!(presenter.probe_state(ExportMethod::Filebeat), &ProbeState::Testing);
        assert!(presenter.status(ExportMethod::Realtime).is_none());
    }

    #[test]
    fn test_render_idle_monitor() {
        let presenter = StatusPresenter::new();
        let text = presenter.render();
        assert!(text.contains("== Option 2: Filebeat Log Shipping =="));
        assert!(text.contains(MONITOR_IDLE_TEXT));
    }
}
