//! Common test utilities shared by the integration tests.

#![allow(dead_code)]

pub mod fixtures;
