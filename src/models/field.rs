// Input field definitions for the export method panels

use serde::Serialize;

use super::method::ExportMethod;

/// How a field is entered and read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Password,
    Boolean,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Password => "password",
            FieldKind::Boolean => "boolean",
        }
    }
}

/// Value substituted when a field is left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldDefault {
    Text(&'static str),
    Flag(bool),
}

/// Static definition of one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
    pub help: Option<&'static str>,
}

impl FieldSpec {
    const fn text(key: &'static str, label: &'static str, default: &'static str) -> Self {
        Self { key, label, kind: FieldKind::Text, default: FieldDefault::Text(default), help: None }
    }

    const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    const fn help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    const fn flag(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: FieldKind::Boolean, default: FieldDefault::Flag(false), help: None }
    }

    /// Whether an empty value drops the flag instead of falling back.
    pub fn is_optional(&self) -> bool {
        matches!(self.default, FieldDefault::Text(""))
    }
}

/// Host value shipped in the Elasticsearch defaults; probing treats it as "not configured".
pub const PLACEHOLDER_ES_URL: &str = "https://your-elasticsearch:9200";

const REALTIME_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("host", "Kismet Host", "localhost").help("Kismet server hostname or IP"),
    FieldSpec::text("port", "Kismet Port", "2501")
        .kind(FieldKind::Number)
        .help("Kismet WebSocket port"),
    FieldSpec::text("rate", "Update Rate (seconds)", "5")
        .kind(FieldKind::Number)
        .help("How often to fetch device updates"),
    FieldSpec::text("es-hosts", "Elasticsearch Hosts", PLACEHOLDER_ES_URL)
        .help("Comma-separated list of ES hosts"),
    FieldSpec::text("es-user", "ES Username", "").help("Elasticsearch username"),
    FieldSpec::text("es-pass", "ES Password", "")
        .kind(FieldKind::Password)
        .help("Elasticsearch password"),
    FieldSpec::text("index", "Index Prefix", "kismet").help("Elasticsearch index prefix"),
    FieldSpec::flag("offline", "Offline Mode (store locally when ES unavailable)"),
];

const FILEBEAT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("es-url", "Elasticsearch URL", PLACEHOLDER_ES_URL)
        .help("Full Elasticsearch URL"),
    FieldSpec::text("es-user", "ES Username", "").help("Elasticsearch username"),
    FieldSpec::text("es-pass", "ES Password", "")
        .kind(FieldKind::Password)
        .help("Elasticsearch password"),
    FieldSpec::text("device", "Device Name", "dragon-os-box").help("Source device identifier"),
    FieldSpec::text("logdir", "Log Directory", "/opt/kismet/logs")
        .help("Kismet log directory path"),
];

const BULK_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("es-url", "Elasticsearch URL", PLACEHOLDER_ES_URL)
        .help("Full Elasticsearch URL"),
    FieldSpec::text("es-user", "ES Username", "").help("Elasticsearch username"),
    FieldSpec::text("es-pass", "ES Password", "")
        .kind(FieldKind::Password)
        .help("Elasticsearch password"),
    FieldSpec::text("logdir", "Log Directory", "/opt/kismet/logs")
        .help("Directory containing Kismet log files"),
    FieldSpec::text("index", "Index Prefix", "kismet").help("Elasticsearch index prefix"),
];

/// Fields for a method, in display order.
pub fn fields(method: ExportMethod) -> &'static [FieldSpec] {
    match method {
        ExportMethod::Realtime => REALTIME_FIELDS,
        ExportMethod::Filebeat => FILEBEAT_FIELDS,
        ExportMethod::Bulk => BULK_FIELDS,
    }
}

/// Look up a single field by key.
pub fn field(method: ExportMethod, key: &str) -> Option<&'static FieldSpec> {
    fields(method).iter().find(|spec| spec.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_stable() {
        let keys: Vec<_> = fields(ExportMethod::Realtime).iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            ["host", "port", "rate", "es-hosts", "es-user", "es-pass", "index", "offline"]
        );
        assert_eq!(fields(ExportMethod::Bulk), fields(ExportMethod::Bulk));
    }

    #[test]
    fn test_optional_fields() {
        assert!(field(ExportMethod::Filebeat, "es-user").unwrap().is_optional());
        assert!(field(ExportMethod::Filebeat, "es-pass").unwrap().is_optional());
        assert!(!field(ExportMethod::Bulk, "index").unwrap().is_optional());
        assert!(!field(ExportMethod::Realtime, "offline").unwrap().is_optional());
    }
}
