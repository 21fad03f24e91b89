/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use theta_hub::{HubConfig, SensorData};
use thiserror::Error;

const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse config: {0}")]
    Parse(#[from] json5::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "config_io",
            ConfigError::Parse(_) => "config_parse",
            ConfigError::Invalid(_) => "config_invalid",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub(crate) hub: HubConfig,
    #[serde(default = "default_tick_interval_ms")]
    pub(crate) tick_interval_ms: u64,
    /// Stop after this many ticks; run until Ctrl-C when absent.
    #[serde(default)]
    pub(crate) tick_count: Option<u64>,
    #[serde(default)]
    pub(crate) sensors: Vec<SensorConfig>,
    #[serde(default)]
    pub(crate) echo_topics: Vec<String>,
    #[serde(default)]
    pub(crate) writes: Vec<SensorData>,
    #[serde(default)]
    pub(crate) output: OutputMode,
}

/// Simulated sensor: a read handler emitting `values` round-robin, one per tick.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SensorConfig {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    Log,
    Json,
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json5(&contents)
    }

    pub fn from_json5(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = json5::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(sensor) = self.sensors.iter().find(|sensor| sensor.values.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "sensor {:?} has no values",
                sensor.name
            )));
        }
        Ok(())
    }
}
