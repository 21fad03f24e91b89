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

use std::sync::{Mutex, MutexGuard, PoisonError};
use theta_hub::{BusDriver, DriverError};
use tracing::debug;

/// Bus driver double that records every call in order, formatted as `begin(sda,scl);`.
#[derive(Default)]
pub struct RecordingBusDriver {
    history: Mutex<Vec<String>>,
}

impl RecordingBusDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Calls seen so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }
}

impl BusDriver for RecordingBusDriver {
    fn begin(&self, sda_pin: u8, scl_pin: u8) -> Result<(), DriverError> {
        let call = format!("begin({sda_pin},{scl_pin});");
        debug!("RecordingBusDriver: {call}");
        self.lock().push(call);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Bus driver double whose bring-up always fails, while still counting attempts.
pub struct FailingBusDriver {
    reason: String,
    attempts: Mutex<usize>,
}

impl FailingBusDriver {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            attempts: Mutex::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BusDriver for FailingBusDriver {
    fn begin(&self, sda_pin: u8, scl_pin: u8) -> Result<(), DriverError> {
        *self.attempts.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        debug!("FailingBusDriver: failing begin({sda_pin},{scl_pin})");
        Err(DriverError::BusUnavailable {
            sda_pin,
            scl_pin,
            reason: self.reason.clone(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
