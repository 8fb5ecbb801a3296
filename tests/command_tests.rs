//! Integration tests for command synthesis (`forgedfate_export::export::command`).
//!
//! Pure function tests; no runtime needed.

mod common;

use common::fixtures::{filebeat_with_credentials, realtime_untouched};
use forgedfate_export::ExportMethod;
use forgedfate_export::export::command::{synthesize, synthesize_with};
use forgedfate_export::helpers::unescape_clipboard;
use forgedfate_export::models::ParameterRecord;
use forgedfate_export::state::{FormValues, ToolPaths, extract};

fn realtime_defaults() -> ParameterRecord {
    ParameterRecord::new(ExportMethod::Realtime)
        .with_text("host", "localhost")
        .with_text("port", "2501")
        .with_text("rate", "5")
        .with_text("es-hosts", "https://your-elasticsearch:9200")
        .with_text("es-user", "")
        .with_text("es-pass", "")
        .with_text("index", "kismet")
        .with_flag("offline", false)
}

// =============================================================================
// Realtime
// =============================================================================

#[test]
fn test_realtime_defaults_scenario() {
    let result = synthesize(ExportMethod::Realtime, &realtime_defaults());

    assert_eq!(
        result.command,
        "python3 /opt/forgedfate/kismet/kismet_elasticsearch_export.py \\\n    \
         --kismet-host \"localhost\" \\\n    \
         --kismet-port 2501 \\\n    \
         --update-rate 5 \\\n    \
         --es-hosts \"https://your-elasticsearch:9200\" \\\n    \
         --index-prefix \"kismet\""
    );
    assert!(!result.command.contains("--es-username"));
    assert!(!result.command.contains("--es-password"));
    assert!(!result.command.contains("--offline"));
    assert_eq!(result.title, "Real-Time WebSocket Export");
    assert_eq!(result.instructions, None);
}

#[test]
fn test_realtime_extracted_from_blank_form_matches_defaults() {
    let record = extract(ExportMethod::Realtime, &realtime_untouched());
    assert_eq!(record, realtime_defaults());
    assert_eq!(
        synthesize(ExportMethod::Realtime, &record),
        synthesize(ExportMethod::Realtime, &realtime_defaults())
    );
}

#[test]
fn test_realtime_offline_is_last_bare_flag() {
    let record = realtime_defaults().with_flag("offline", true);
    let command = synthesize(ExportMethod::Realtime, &record).command;
    assert!(command.ends_with("--index-prefix \"kismet\" \\\n    --offline"));
}

#[test]
fn test_realtime_credentials_use_es_flags() {
    let record = realtime_defaults().with_text("es-user", "elastic").with_text("es-pass", "pw");
    let command = synthesize(ExportMethod::Realtime, &record).command;
    let user = command.find("--es-username \"elastic\"").expect("username flag");
    let pass = command.find("--es-password \"pw\"").expect("password flag");
    let index = command.find("--index-prefix").expect("index flag");
    assert!(user < pass && pass < index);
}

// =============================================================================
// Filebeat
// =============================================================================

#[test]
fn test_filebeat_credentials_scenario() {
    let record = extract(ExportMethod::Filebeat, &filebeat_with_credentials());
    let result = synthesize(ExportMethod::Filebeat, &record);

    assert_eq!(
        result.command,
        "sudo python3 /opt/forgedfate/kismet/filebeat_integration.py \\\n    \
         --elasticsearch-url \"https://es.example.com:9200\" \\\n    \
         --username \"alice\" \\\n    \
         --password \"s3cr3t\" \\\n    \
         --device-name \"box1\" \\\n    \
         --log-directory \"/var/log/kismet\""
    );

    let instructions = result.instructions.expect("filebeat has instructions");
    assert!(instructions.starts_with("This will:\n"));
    assert!(instructions.contains("1. Install and configure Filebeat\n"));
    assert!(instructions.contains("2. Set up log monitoring for Kismet files\n"));
    assert!(instructions.contains("3. Start automatic log shipping to Elasticsearch\n\n"));
    assert_eq!(result.title, "Filebeat Integration Setup");
}

#[test]
fn test_filebeat_without_sudo() {
    let record = extract(ExportMethod::Filebeat, &filebeat_with_credentials());
    let tools = ToolPaths { filebeat_sudo: false, ..ToolPaths::default() };
    let command = synthesize_with(ExportMethod::Filebeat, &record, &tools).command;
    assert!(command.starts_with("python3 "));
}

// =============================================================================
// Bulk
// =============================================================================

#[test]
fn test_bulk_blank_required_fields_fall_back() {
    let mut form = FormValues::new();
    form.set_text(ExportMethod::Bulk, "index", "");
    form.set_text(ExportMethod::Bulk, "logdir", "   ");
    let record = extract(ExportMethod::Bulk, &form);
    let result = synthesize(ExportMethod::Bulk, &record);

    assert!(result.command.contains("--index-prefix \"kismet\""));
    assert!(result.command.contains("--log-directory \"/opt/kismet/logs\""));
    assert!(!result.command.contains("--username"));
    assert!(!result.command.contains("--password"));
    let instructions = result.instructions.expect("bulk has instructions");
    assert!(instructions.ends_with("This is a one-time operation for existing log files."));
}

// =============================================================================
// Quoting and determinism
// =============================================================================

#[test]
fn test_password_with_quote_is_escaped() {
    let mut form = filebeat_with_credentials();
    form.set_text(ExportMethod::Filebeat, "es-pass", "a\"b");
    let record = extract(ExportMethod::Filebeat, &form);
    let result = synthesize(ExportMethod::Filebeat, &record);

    assert!(result.command.contains("--password \"a\\\"b\""));

    let payload = result.clipboard_payload();
    assert!(payload.contains("--password \\\"a\\\\\"b\\\""));
    assert_eq!(unescape_clipboard(&payload), result.command);
}

#[test]
fn test_shell_metacharacters_do_not_expand() {
    let record = realtime_defaults().with_text("es-pass", "$(rm -rf ~)`id`");
    let command = synthesize(ExportMethod::Realtime, &record).command;
    assert!(command.contains("--es-password \"\\$(rm -rf ~)\\`id\\`\""));
}

#[test]
fn test_synthesis_is_deterministic() {
    for method in ExportMethod::all() {
        let record = extract(method, &filebeat_with_credentials());
        let first = synthesize(method, &record);
        let second = synthesize(method, &record.clone());
        assert_eq!(first.command.as_bytes(), second.command.as_bytes());
        assert_eq!(first, second);
    }
}

#[test]
fn test_clipboard_payload_roundtrip_for_every_method() {
    for method in ExportMethod::all() {
        let mut form = FormValues::new();
        form.set_text(method, "es-user", "o\"neil");
        form.set_text(method, "es-pass", "back\\slash\"");
        let result = synthesize(method, &extract(method, &form));
        assert_eq!(unescape_clipboard(&result.clipboard_payload()), result.command, "{method}");
    }
}
