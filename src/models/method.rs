//! Export methods and their static descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field::{FieldSpec, fields};
use crate::error::Error;

/// One of the three strategies for moving captured data into Elasticsearch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMethod {
    Realtime,
    Filebeat,
    Bulk,
}

impl ExportMethod {
    pub fn all() -> [ExportMethod; 3] {
        [ExportMethod::Realtime, ExportMethod::Filebeat, ExportMethod::Bulk]
    }

    pub fn slug(self) -> &'static str {
        match self {
            ExportMethod::Realtime => "realtime",
            ExportMethod::Filebeat => "filebeat",
            ExportMethod::Bulk => "bulk",
        }
    }

    pub fn descriptor(self) -> &'static MethodDescriptor {
        match self {
            ExportMethod::Realtime => &REALTIME,
            ExportMethod::Filebeat => &FILEBEAT,
            ExportMethod::Bulk => &BULK,
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        fields(self)
    }
}

impl fmt::Display for ExportMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ExportMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ExportMethod::all()
            .into_iter()
            .find(|method| method.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

/// How a field is rendered on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStyle {
    /// `--flag "value"`, always emitted.
    Quoted,
    /// `--flag "value"`, omitted when blank.
    Optional,
    /// Like `Optional`, masked in redacted output.
    Secret,
    /// `--flag 2501`, bare when the value is a plain number.
    Numeric,
    /// `--flag` with no value, only when checked.
    Switch,
}

/// Maps a field to its command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub key: &'static str,
    pub flag: &'static str,
    pub style: FlagStyle,
}

const fn flag(key: &'static str, flag: &'static str, style: FlagStyle) -> FlagSpec {
    FlagSpec { key, flag, style }
}

/// Everything that distinguishes one method's workflow from another.
#[derive(Debug)]
pub struct MethodDescriptor {
    pub method: ExportMethod,
    pub heading: &'static str,
    pub best_for: &'static str,
    pub test_label: &'static str,
    pub generate_label: &'static str,
    pub output_title: &'static str,
    /// Field the prober checks for the unconfigured placeholder.
    pub endpoint_field: &'static str,
    pub testing_message: &'static str,
    pub unconfigured_message: &'static str,
    pub success_message: &'static str,
    /// Flag template in emission order.
    pub flags: &'static [FlagSpec],
    pub instructions: Option<&'static str>,
}

static REALTIME: MethodDescriptor = MethodDescriptor {
    method: ExportMethod::Realtime,
    heading: "Option 1: Real-Time WebSocket Export",
    best_for: "Live monitoring, real-time dashboards, immediate data analysis",
    test_label: "Test Connection",
    generate_label: "Generate Command",
    output_title: "Real-Time WebSocket Export",
    endpoint_field: "es-hosts",
    testing_message: "Testing connection...",
    unconfigured_message: "Please configure valid Elasticsearch hosts",
    success_message: "Connection test successful! Ready to export.",
    flags: &[
        flag("host", "--kismet-host", FlagStyle::Quoted),
        flag("port", "--kismet-port", FlagStyle::Numeric),
        flag("rate", "--update-rate", FlagStyle::Numeric),
        flag("es-hosts", "--es-hosts", FlagStyle::Quoted),
        flag("es-user", "--es-username", FlagStyle::Optional),
        flag("es-pass", "--es-password", FlagStyle::Secret),
        flag("index", "--index-prefix", FlagStyle::Quoted),
        flag("offline", "--offline", FlagStyle::Switch),
    ],
    instructions: None,
};

static FILEBEAT: MethodDescriptor = MethodDescriptor {
    method: ExportMethod::Filebeat,
    heading: "Option 2: Filebeat Log Shipping",
    best_for: "Reliable log shipping, automatic retry, production environments",
    test_label: "Test Connection",
    generate_label: "Setup Filebeat",
    output_title: "Filebeat Integration Setup",
    endpoint_field: "es-url",
    testing_message: "Testing Elasticsearch connection...",
    unconfigured_message: "Please configure valid Elasticsearch URL",
    success_message: "Elasticsearch connection successful!",
    flags: &[
        flag("es-url", "--elasticsearch-url", FlagStyle::Quoted),
        flag("es-user", "--username", FlagStyle::Optional),
        flag("es-pass", "--password", FlagStyle::Secret),
        flag("device", "--device-name", FlagStyle::Quoted),
        flag("logdir", "--log-directory", FlagStyle::Quoted),
    ],
    instructions: Some(
        "This will:\n\
         1. Install and configure Filebeat\n\
         2. Set up log monitoring for Kismet files\n\
         3. Start automatic log shipping to Elasticsearch\n\
         \n\
         After running this command, Filebeat will automatically ship new log entries to Elasticsearch.",
    ),
};

static BULK: MethodDescriptor = MethodDescriptor {
    method: ExportMethod::Bulk,
    heading: "Option 3: Bulk Upload from Logs",
    best_for: "Historical data import, one-time uploads, data migration",
    test_label: "Test Connection",
    generate_label: "Generate Upload Command",
    output_title: "Bulk Upload Command",
    endpoint_field: "es-url",
    testing_message: "Testing Elasticsearch connection...",
    unconfigured_message: "Please configure valid Elasticsearch URL",
    success_message: "Elasticsearch connection successful!",
    flags: &[
        flag("es-url", "--elasticsearch-url", FlagStyle::Quoted),
        flag("es-user", "--username", FlagStyle::Optional),
        flag("es-pass", "--password", FlagStyle::Secret),
        flag("logdir", "--log-directory", FlagStyle::Quoted),
        flag("index", "--index-prefix", FlagStyle::Quoted),
    ],
    instructions: Some(
        "This will:\n\
         1. Scan the log directory for Kismet database files\n\
         2. Extract device and packet data\n\
         3. Bulk upload all historical data to Elasticsearch\n\
         \n\
         This is a one-time operation for existing log files.",
    ),
};

/// Steps shown above the method panels.
pub const QUICK_START_GUIDE: &[&str] = &[
    "Choose an export method below and configure the settings",
    "Test your Elasticsearch connection",
    "Copy the generated command and run it in your terminal",
    "Monitor the export status in real-time",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method() {
        assert_eq!("realtime".parse::<ExportMethod>().unwrap(), ExportMethod::Realtime);
        assert_eq!(" Bulk ".parse::<ExportMethod>().unwrap(), ExportMethod::Bulk);
        assert!(matches!("kafka".parse::<ExportMethod>(), Err(Error::UnknownMethod(_))));
    }

    #[test]
    fn test_flag_template_covers_fields() {
        for method in ExportMethod::all() {
            let descriptor = method.descriptor();
            assert_eq!(descriptor.method, method);
            for flag in descriptor.flags {
                assert!(
                    method.fields().iter().any(|spec| spec.key == flag.key),
                    "{method}: flag {} has no field",
                    flag.flag
                );
            }
            assert!(method.fields().iter().any(|spec| spec.key == descriptor.endpoint_field));
        }
    }
}
