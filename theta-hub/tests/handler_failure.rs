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

mod support;

use std::panic::{self, AssertUnwindSafe};
use support::{collect, make_hub};
use theta_hub::SensorData;

#[test]
fn panicking_handler_unwinds_through_tick_and_hub_stays_usable() {
    integration_test_utils::init_logging();

    let (hub, _driver) = make_hub("handler-failure");
    let collected = collect(&hub);
    hub.init().expect("init should succeed");

    let _a = hub.add_read_handler(|emit| emit.emit(SensorData::new("a", "")));
    let b = hub.add_read_handler(|_emit| panic!("sensor read failed"));
    let _c = hub.add_read_handler(|emit| emit.emit(SensorData::new("c", "")));

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| hub.tick()));
    assert!(outcome.is_err());

    let names: Vec<_> = collected.take().into_iter().map(|data| data.name).collect();
    assert_eq!(names, vec!["a"]);
    assert_eq!(hub.read_handler_count(), 3);

    drop(b);
    hub.tick();

    let names: Vec<_> = collected.take().into_iter().map(|data| data.name).collect();
    assert_eq!(names, vec!["a", "c"]);
}

#[test]
fn panicking_write_handler_unwinds_through_write() {
    integration_test_utils::init_logging();

    let (hub, _driver) = make_hub("handler-failure");
    let collected = collect(&hub);

    let _first = hub.add_write_handler("led", |data, emit| emit.emit(data.clone()));
    let failing = hub.add_write_handler("led", |_data, _emit| panic!("actuator failed"));
    let _last = hub.add_write_handler("led", |_data, emit| emit.emit(SensorData::new("last", "")));

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| hub.write(SensorData::new("led", "on"))));
    assert!(outcome.is_err());
    assert_eq!(collected.take(), vec![SensorData::new("led", "on")]);

    failing.release();
    let summary = hub.write(SensorData::new("led", "off"));

    assert_eq!(summary.handlers_invoked, 2);
    let names: Vec<_> = collected.take().into_iter().map(|data| data.name).collect();
    assert_eq!(names, vec!["led", "last"]);
}
