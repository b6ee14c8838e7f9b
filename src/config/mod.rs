// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for czrules.
//!
//! This module handles locating and parsing czrules.toml, which may carry a
//! project registry and lint derivation settings.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
