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
use std::fmt::{Display, Formatter};

///
/// [`SensorData`] is a single reading or command flowing through a [`ThetaHub`][crate::ThetaHub].
///
/// `name` doubles as the topic used to route [`ThetaHub::write`][crate::ThetaHub::write]
/// calls to write handlers. Records are cloned when they cross the dispatch boundary;
/// repeated names are expected.
///
/// # Examples
///
/// ```
/// use theta_hub::SensorData;
///
/// let reading = SensorData::new("temperature", "21.5");
/// assert_eq!(reading.name, "temperature");
/// assert_eq!(reading.value, "21.5");
/// assert_eq!(reading.to_string(), "temperature=21.5");
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorData {
    pub name: String,
    pub value: String,
}

impl SensorData {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Topic this record is routed by when written into the hub.
    pub fn topic(&self) -> &str {
        &self.name
    }
}

impl Display for SensorData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::SensorData;

    #[test]
    fn topic_is_the_record_name() {
        let data = SensorData::new("TestTopic", "example value");

        assert_eq!(data.topic(), "TestTopic");
    }

    #[test]
    fn empty_fields_are_allowed() {
        let data = SensorData::new(String::new(), String::new());

        assert_eq!(data, SensorData::default());
        assert_eq!(data.to_string(), "=");
    }
}
