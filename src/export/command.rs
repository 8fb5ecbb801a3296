//! Command synthesis for the external export tools.
//!
//! Pure and deterministic: the same record and tool paths always yield the
//! same bytes.

use serde::Serialize;

use crate::helpers::shell::{double_quote, escape_clipboard, is_plain_number, quote_if_needed};
use crate::helpers::validate::{REDACTED_PASSWORD, redact_url_password};
use crate::models::{ExportMethod, FlagSpec, FlagStyle, ParameterRecord};
use crate::state::settings::ToolPaths;

/// Separator between command-line lines; keeps the output pasteable.
const LINE_BREAK: &str = " \\\n    ";

/// A generated command plus the text shown around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisResult {
    pub method: ExportMethod,
    pub command: String,
    pub title: String,
    pub instructions: Option<String>,
}

impl SynthesisResult {
    /// Command in clipboard-payload form (`"` escaped once more).
    /// [`crate::helpers::unescape_clipboard`] recovers `command` exactly.
    pub fn clipboard_payload(&self) -> String {
        escape_clipboard(&self.command)
    }
}

/// Synthesize with the default tool locations.
pub fn synthesize(method: ExportMethod, record: &ParameterRecord) -> SynthesisResult {
    synthesize_with(method, record, &ToolPaths::default())
}

pub fn synthesize_with(
    method: ExportMethod,
    record: &ParameterRecord,
    tools: &ToolPaths,
) -> SynthesisResult {
    debug_assert_eq!(record.method, method, "record extracted for another method");
    let descriptor = method.descriptor();
    SynthesisResult {
        method,
        command: render(method, record, tools, false),
        title: descriptor.output_title.to_string(),
        instructions: descriptor.instructions.map(str::to_string),
    }
}

/// Same command with secrets masked, for logs.
pub fn redacted_command(method: ExportMethod, record: &ParameterRecord, tools: &ToolPaths) -> String {
    render(method, record, tools, true)
}

fn render(method: ExportMethod, record: &ParameterRecord, tools: &ToolPaths, mask: bool) -> String {
    let mut program = Vec::with_capacity(3);
    if tools.needs_sudo(method) {
        program.push("sudo".to_string());
    }
    program.push(quote_if_needed(&tools.python));
    program.push(quote_if_needed(tools.script(method)));

    let mut lines = vec![program.join(" ")];
    lines.extend(method.descriptor().flags.iter().filter_map(|flag| render_flag(flag, record, mask)));
    lines.join(LINE_BREAK)
}

fn render_flag(flag: &FlagSpec, record: &ParameterRecord, mask: bool) -> Option<String> {
    let value = record.text(flag.key);
    match flag.style {
        FlagStyle::Switch => record.flag(flag.key).then(|| flag.flag.to_string()),
        FlagStyle::Optional | FlagStyle::Secret if value.is_empty() => None,
        FlagStyle::Secret if mask => Some(format!("{} {}", flag.flag, double_quote(REDACTED_PASSWORD))),
        FlagStyle::Numeric if is_plain_number(value) => Some(format!("{} {value}", flag.flag)),
        _ if mask => Some(format!("{} {}", flag.flag, double_quote(&redact_url_password(value)))),
        _ => Some(format!("{} {}", flag.flag, double_quote(value))),
    }
}
