// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Test doubles for Stagehand crates.
#![forbid(unsafe_code)]
//!
//! - [`host`] - a scripted host implementing every port, with a call log
//! - [`records`] - item record builder
//! - [`config`] - in-memory config store

pub mod config;
pub mod host;
pub mod records;

pub use config::InMemoryConfigStore;
pub use host::{slot_for, FakeHost, HostCall};
pub use records::ItemRecordBuilder;
