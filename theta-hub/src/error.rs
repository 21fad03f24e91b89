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

//! Error types surfaced by the hub and its bus driver collaborator.
//!
//! Misuse such as ticking before `init()` or writing to a topic without handlers is
//! a defined no-op and never produces an error. The only failure path in the hub is
//! bus bring-up, which is reported unchanged and not retried.

use thiserror::Error;

/// Failures reported by a [`BusDriver`][crate::BusDriver].
#[non_exhaustive]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum DriverError {
    /// The bus could not be claimed on the requested lines.
    #[error("bus unavailable on sda={sda_pin} scl={scl_pin}: {reason}")]
    BusUnavailable {
        sda_pin: u8,
        scl_pin: u8,
        reason: String,
    },

    /// Any other driver-specific failure.
    #[error("driver failure: {0}")]
    Other(String),
}

impl DriverError {
    /// Returns a short stable label for use in structured logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            DriverError::BusUnavailable { .. } => "driver_bus_unavailable",
            DriverError::Other(_) => "driver_other",
        }
    }
}

/// Failures reported by [`ThetaHub`][crate::ThetaHub].
#[non_exhaustive]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum HubError {
    /// The driver rejected bring-up; the hub stays uninitialized.
    #[error("bus bring-up failed on sda={sda_pin} scl={scl_pin}")]
    BringUpFailed {
        sda_pin: u8,
        scl_pin: u8,
        #[source]
        source: DriverError,
    },
}

impl HubError {
    /// Returns a short stable label for use in structured logs.
    ///
    /// ```
    /// use theta_hub::{DriverError, HubError};
    ///
    /// let err = HubError::BringUpFailed {
    ///     sda_pin: 2,
    ///     scl_pin: 14,
    ///     source: DriverError::Other("no ack".to_string()),
    /// };
    /// assert_eq!(err.as_label(), "hub_bring_up_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HubError::BringUpFailed { .. } => "hub_bring_up_failed",
        }
    }
}
