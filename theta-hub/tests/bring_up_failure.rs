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

use integration_test_utils::{CollectedData, FailingBusDriver};
use std::error::Error;
use std::sync::Arc;
use theta_hub::{DriverError, HubError, SensorData, ThetaHub};

#[test]
fn driver_failure_is_surfaced_and_not_retried() {
    integration_test_utils::init_logging();

    let driver = Arc::new(FailingBusDriver::new("line held low"));
    let hub = ThetaHub::new("bring-up-failure", driver.clone());
    let collected = CollectedData::attach(&hub);
    let _token = hub.add_read_handler(|emit| emit.emit(SensorData::new("tick", "value")));

    let err = hub.init().expect_err("bring-up should fail");

    assert_eq!(err.as_label(), "hub_bring_up_failed");
    assert_eq!(driver.attempts(), 1);
    let HubError::BringUpFailed { source, .. } = &err else {
        panic!("unexpected error variant: {err:?}");
    };
    assert!(matches!(source, DriverError::BusUnavailable { sda_pin: 2, scl_pin: 14, .. }));
    assert!(err.source().is_some());

    hub.tick();
    assert!(!hub.is_initialized());
    assert!(collected.is_empty());
    assert_eq!(driver.attempts(), 1);
}

#[test]
fn writes_still_work_after_failed_bring_up() {
    integration_test_utils::init_logging();

    let driver = Arc::new(FailingBusDriver::new("no ack"));
    let hub = ThetaHub::new("bring-up-failure", driver);
    let collected = CollectedData::attach(&hub);
    let _token = hub.add_write_handler("led", |data, emit| emit.emit(data.clone()));

    assert!(hub.init().is_err());
    hub.write(SensorData::new("led", "on"));

    assert_eq!(collected.records(), vec![SensorData::new("led", "on")]);
}
