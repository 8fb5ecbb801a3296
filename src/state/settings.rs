//! Export settings with persistence.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::ExportMethod;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExportSettings {
    #[serde(default)]
    pub tools: ToolPaths,
    #[serde(default)]
    pub probe: ProbeSettings,
}

/// Where the external export tools live
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolPaths {
    #[serde(default = "default_python")]
    pub python: String,
    #[serde(default = "default_realtime_script")]
    pub realtime_script: String,
    #[serde(default = "default_filebeat_script")]
    pub filebeat_script: String,
    #[serde(default = "default_bulk_script")]
    pub bulk_script: String,
    /// The Filebeat configurator installs packages and writes /etc.
    #[serde(default = "default_true")]
    pub filebeat_sudo: bool,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            python: default_python(),
            realtime_script: default_realtime_script(),
            filebeat_script: default_filebeat_script(),
            bulk_script: default_bulk_script(),
            filebeat_sudo: true,
        }
    }
}

impl ToolPaths {
    pub fn script(&self, method: ExportMethod) -> &str {
        match method {
            ExportMethod::Realtime => &self.realtime_script,
            ExportMethod::Filebeat => &self.filebeat_script,
            ExportMethod::Bulk => &self.bulk_script,
        }
    }

    pub fn needs_sudo(&self, method: ExportMethod) -> bool {
        method == ExportMethod::Filebeat && self.filebeat_sudo
    }
}

/// Connection probe timings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeSettings {
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self { simulated_delay_ms: default_simulated_delay_ms(), timeout_ms: default_timeout_ms() }
    }
}

impl ProbeSettings {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_realtime_script() -> String {
    "/opt/forgedfate/kismet/kismet_elasticsearch_export.py".to_string()
}

fn default_filebeat_script() -> String {
    "/opt/forgedfate/kismet/filebeat_integration.py".to_string()
}

fn default_bulk_script() -> String {
    "/opt/forgedfate/kismet_bulk_upload.py".to_string()
}

fn default_true() -> bool {
    true
}

fn default_simulated_delay_ms() -> u64 {
    2000
}

fn default_timeout_ms() -> u64 {
    5000
}
