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

use theta_hub::{BusDriver, DriverError};
use tracing::info;

/// Stand-in for the board's two-wire bus: bring-up only logs the pins it was given.
pub struct LoggingBusDriver;

impl BusDriver for LoggingBusDriver {
    fn begin(&self, sda_pin: u8, scl_pin: u8) -> Result<(), DriverError> {
        if sda_pin == scl_pin {
            return Err(DriverError::BusUnavailable {
                sda_pin,
                scl_pin,
                reason: "data and clock lines share a pin".to_string(),
            });
        }
        info!(sda_pin, scl_pin, "bus up");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "logging"
    }
}

#[cfg(test)]
mod tests {
    use super::LoggingBusDriver;
    use theta_hub::BusDriver;

    #[test]
    fn begin_accepts_distinct_pins() {
        assert!(LoggingBusDriver.begin(2, 14).is_ok());
    }

    #[test]
    fn begin_rejects_shared_pin() {
        let err = LoggingBusDriver.begin(4, 4).expect_err("shared pin");
        assert_eq!(err.as_label(), "driver_bus_unavailable");
    }
}
