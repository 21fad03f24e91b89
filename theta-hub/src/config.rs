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

//! Hub configuration consumed at bring-up.

use serde::{Deserialize, Serialize};

/// Data line used by the bus bring-up unless configured otherwise.
pub const DEFAULT_SDA_PIN: u8 = 2;
/// Clock line used by the bus bring-up unless configured otherwise.
pub const DEFAULT_SCL_PIN: u8 = 14;

#[derive(Deserialize, Serialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HubConfig {
    #[serde(default)]
    pub bus: BusConfig,
}

/// Parameters handed to [`BusDriver::begin`][crate::BusDriver::begin] on the first `init()`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BusConfig {
    #[serde(default = "default_sda_pin")]
    pub sda_pin: u8,
    #[serde(default = "default_scl_pin")]
    pub scl_pin: u8,
}

fn default_sda_pin() -> u8 {
    DEFAULT_SDA_PIN
}

fn default_scl_pin() -> u8 {
    DEFAULT_SCL_PIN
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            sda_pin: DEFAULT_SDA_PIN,
            scl_pin: DEFAULT_SCL_PIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BusConfig, HubConfig, DEFAULT_SCL_PIN, DEFAULT_SDA_PIN};

    #[test]
    fn default_bus_parameters_are_two_and_fourteen() {
        let config = HubConfig::default();

        assert_eq!(config.bus.sda_pin, 2);
        assert_eq!(config.bus.scl_pin, 14);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: HubConfig = serde_json::from_str(r#"{ "bus": { "scl_pin": 5 } }"#)
            .expect("partial bus config should parse");

        assert_eq!(
            config.bus,
            BusConfig {
                sda_pin: DEFAULT_SDA_PIN,
                scl_pin: 5,
            }
        );

        let empty: HubConfig = serde_json::from_str("{}").expect("empty config should parse");
        assert_eq!(empty.bus.scl_pin, DEFAULT_SCL_PIN);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<HubConfig>(r#"{ "bus": { "baud": 9600 } }"#);

        assert!(result.is_err());
    }
}
