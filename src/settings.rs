// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the demo's configuration file. The passcode section is
//! handed straight to the controller builder; the rest only concerns the demo.

use std::path::PathBuf;

use codeslots::PasscodeConfig;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "codeslots";

const LOG_FILE_NAME: &str = "codeslots.log";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) passcode: PasscodeConfig,
    /// Code the demo treats as correct. With no code set, any completed entry
    /// is simply echoed back.
    pub(crate) demo_code: Option<String>,
    /// Default `tracing` filter, overridden by the `CODESLOTS_LOG` variable.
    pub(crate) log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            passcode: PasscodeConfig::default(),
            demo_code: Some("123456".to_string()),
            log_filter: "info".to_string(),
        }
    }
}

/// Loads the configuration, writing a default file on first run.
pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// The log file lives next to the configuration file.
pub(crate) fn log_file_path() -> Result<PathBuf, confy::ConfyError> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    Ok(config_path.with_file_name(LOG_FILE_NAME))
}
