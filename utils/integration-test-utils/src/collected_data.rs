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

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use theta_hub::{SensorData, ThetaHub};

/// Shared record of everything a hub forwarded to its consumer.
#[derive(Clone, Default)]
pub struct CollectedData {
    records: Arc<Mutex<Vec<SensorData>>>,
}

impl CollectedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a consumer on `hub` that appends into this collection.
    pub fn attach(hub: &ThetaHub) -> Self {
        let collected = Self::new();
        let sink = collected.clone();
        hub.when_data_available(move |data| sink.push(data.clone()));
        collected
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SensorData>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, data: SensorData) {
        self.lock().push(data);
    }

    pub fn records(&self) -> Vec<SensorData> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Empties the collection and returns what it held.
    pub fn take(&self) -> Vec<SensorData> {
        std::mem::take(&mut *self.lock())
    }
}
