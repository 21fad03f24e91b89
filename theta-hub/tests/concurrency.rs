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

use std::sync::Arc;
use std::thread;
use support::{add_echo_write_handler, add_example_read_handler, collect, make_hub, TEST_TOPIC};
use theta_hub::SensorData;

const THREADS: usize = 8;

#[test]
fn concurrent_init_brings_bus_up_once() {
    integration_test_utils::init_logging();

    let (hub, driver) = make_hub("concurrency");
    let hub = Arc::new(hub);

    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let hub = hub.clone();
            thread::spawn(move || hub.init())
        })
        .collect();
    for worker in workers {
        worker
            .join()
            .expect("init thread panicked")
            .expect("init should succeed");
    }

    assert!(hub.is_initialized());
    assert_eq!(driver.history(), vec!["begin(2,14);".to_string()]);
}

#[test]
fn concurrent_ticks_and_writes_deliver_every_record() {
    integration_test_utils::init_logging();

    let (hub, _driver) = make_hub("concurrency");
    let hub = Arc::new(hub);
    let collected = collect(&hub);
    hub.init().expect("init should succeed");
    let _read = add_example_read_handler(&hub);
    let _echo = add_echo_write_handler(&hub);

    const ROUNDS: usize = 50;
    let workers: Vec<_> = (0..THREADS)
        .map(|worker| {
            let hub = hub.clone();
            thread::spawn(move || {
                for round in 0..ROUNDS {
                    hub.tick();
                    hub.write(SensorData::new(TEST_TOPIC, format!("{worker}-{round}")));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("dispatch thread panicked");
    }

    let records = collected.take();
    assert_eq!(records.len(), THREADS * ROUNDS * 2);
    let echoed = records
        .iter()
        .filter(|data| data.name == TEST_TOPIC)
        .count();
    assert_eq!(echoed, THREADS * ROUNDS);
}

#[test]
fn registrations_from_many_threads_are_all_removed_on_drop() {
    integration_test_utils::init_logging();

    let (hub, _driver) = make_hub("concurrency");
    let hub = Arc::new(hub);

    let workers: Vec<_> = (0..THREADS)
        .map(|worker| {
            let hub = hub.clone();
            thread::spawn(move || {
                let topic = format!("topic-{}", worker % 2);
                let read = add_example_read_handler(&hub);
                let write = hub.add_write_handler(&topic, |data, emit| emit.emit(data.clone()));
                (read, write)
            })
        })
        .collect();
    let tokens: Vec<_> = workers
        .into_iter()
        .map(|worker| worker.join().expect("registration thread panicked"))
        .collect();

    assert_eq!(hub.read_handler_count(), THREADS);
    assert_eq!(hub.topics(), vec!["topic-0".to_string(), "topic-1".to_string()]);

    drop(tokens);

    assert_eq!(hub.read_handler_count(), 0);
    assert!(hub.topics().is_empty());
}
