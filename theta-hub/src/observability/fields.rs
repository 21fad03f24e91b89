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

//! Canonical structured field values and value-format helpers.

use crate::SensorData;

pub const NONE: &str = "none";
pub const EMPTY_TOPIC: &str = "<empty>";
pub const ORIGIN_TICK: &str = "tick";
pub const ORIGIN_WRITE: &str = "write";

/// Longest value rendered into a log line before it is truncated.
pub const MAX_LOGGED_VALUE_CHARS: usize = 64;

/// Renders a topic so that empty names stay visible in logs.
pub fn format_topic(topic: &str) -> &str {
    if topic.is_empty() {
        EMPTY_TOPIC
    } else {
        topic
    }
}

/// Renders a record value, truncated on a char boundary for log output.
pub fn format_value(data: &SensorData) -> String {
    let mut chars = data.value.chars();
    let head: String = chars.by_ref().take(MAX_LOGGED_VALUE_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn format_optional_topic(topic: Option<&str>) -> &str {
    topic.map(format_topic).unwrap_or(NONE)
}

#[cfg(test)]
mod tests {
    use super::{
        format_optional_topic, format_topic, format_value, EMPTY_TOPIC, MAX_LOGGED_VALUE_CHARS,
        NONE,
    };
    use crate::SensorData;

    #[test]
    fn format_topic_marks_empty_names() {
        assert_eq!(format_topic(""), EMPTY_TOPIC);
        assert_eq!(format_topic("TestTopic"), "TestTopic");
    }

    #[test]
    fn format_optional_topic_falls_back_when_absent() {
        assert_eq!(format_optional_topic(None), NONE);
        assert_eq!(format_optional_topic(Some("humidity")), "humidity");
    }

    #[test]
    fn format_value_keeps_short_values() {
        let data = SensorData::new("tick", "value");

        assert_eq!(format_value(&data), "value");
    }

    #[test]
    fn format_value_truncates_on_char_boundary() {
        let long_value: String = "é".repeat(MAX_LOGGED_VALUE_CHARS + 10);
        let data = SensorData::new("blob", long_value);

        let rendered = format_value(&data);
        assert!(rendered.ends_with("..."));
        assert_eq!(
            rendered.trim_end_matches("...").chars().count(),
            MAX_LOGGED_VALUE_CHARS
        );
    }
}
