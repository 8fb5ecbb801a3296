//! Command synthesis and connection probing for the export methods.
//!
//! This module provides:
//! - `command`: deterministic construction of the external tool invocations
//! - `probe`: the connectivity check state contract and its tester collaborator
//! - `tools`: interpreter/script path detection

pub mod command;
pub mod probe;
pub mod tools;

pub use command::{SynthesisResult, redacted_command, synthesize, synthesize_with};
pub use probe::{ConnectionProber, ConnectivityTester, ProbeRequest, ProbeResult, SimulatedTester};
pub use tools::tools_available;
