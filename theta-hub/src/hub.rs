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

use crate::control_plane::handler_registry::{lock_registry, HandlerRegistry};
use crate::control_plane::subscription_token::SubscriptionToken;
use crate::data_plane::consumer_slot::ConsumerSlot;
use crate::data_plane::dispatcher::{self, DispatchSummary};
use crate::data_plane::emitter::Emitter;
use crate::observability::events;
use crate::{BusDriver, HubConfig, HubError, SensorData};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info};

const COMPONENT: &str = "theta_hub";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum HubState {
    Uninitialized,
    Initialized,
}

///
/// [`ThetaHub`] mediates between sensor polling and a single data consumer.
///
/// Read handlers run on every [`tick`](ThetaHub::tick) once [`init`](ThetaHub::init) has
/// brought the bus up; write handlers run on every [`write`](ThetaHub::write) to their topic,
/// with or without `init()`. Everything handlers emit is forwarded synchronously to the
/// consumer installed with [`when_data_available`](ThetaHub::when_data_available).
///
/// The hub is `Send + Sync`. All calls run to completion on the caller's thread; no lock is
/// held while handlers or the consumer run.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use theta_hub::{BusDriver, DriverError, SensorData, ThetaHub};
///
/// # struct NoopBus;
/// # impl BusDriver for NoopBus {
/// #     fn begin(&self, _sda_pin: u8, _scl_pin: u8) -> Result<(), DriverError> { Ok(()) }
/// # }
/// let hub = ThetaHub::new("quick-start", Arc::new(NoopBus));
///
/// let received = Arc::new(AtomicUsize::new(0));
/// let counter = received.clone();
/// hub.when_data_available(move |_data| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let _thermometer = hub.add_read_handler(|emit| emit.emit(SensorData::new("tick", "value")));
///
/// hub.tick();
/// assert_eq!(received.load(Ordering::SeqCst), 0);
///
/// hub.init().unwrap();
/// hub.tick();
/// assert_eq!(received.load(Ordering::SeqCst), 1);
/// ```
pub struct ThetaHub {
    name: Arc<str>,
    config: HubConfig,
    driver: Arc<dyn BusDriver>,
    state: Mutex<HubState>,
    registry: Arc<Mutex<HandlerRegistry>>,
    consumers: ConsumerSlot,
}

impl ThetaHub {
    /// Creates an uninitialized hub using the default bus parameters.
    pub fn new(name: &str, driver: Arc<dyn BusDriver>) -> Self {
        Self::with_config(name, HubConfig::default(), driver)
    }

    /// Creates an uninitialized hub with explicit configuration.
    pub fn with_config(name: &str, config: HubConfig, driver: Arc<dyn BusDriver>) -> Self {
        debug!(
            event = events::HUB_CREATED,
            component = COMPONENT,
            hub = name,
            driver = driver.name(),
            sda_pin = config.bus.sda_pin,
            scl_pin = config.bus.scl_pin,
            "hub created; waiting for init"
        );

        Self {
            name: Arc::from(name),
            config,
            driver,
            state: Mutex::new(HubState::Uninitialized),
            registry: Arc::new(Mutex::new(HandlerRegistry::new())),
            consumers: ConsumerSlot::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    fn lock_state(&self) -> MutexGuard<'_, HubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Brings the bus up on the first call; later calls return `Ok(())` without touching it.
    ///
    /// Concurrent callers are serialized, so the driver sees at most one `begin` per
    /// successful bring-up. If the driver fails, the error is returned unchanged inside
    /// [`HubError::BringUpFailed`] and the hub stays uninitialized; the hub never retries.
    pub fn init(&self) -> Result<(), HubError> {
        let mut state = self.lock_state();
        let hub = &*self.name;

        if *state == HubState::Initialized {
            debug!(
                event = events::HUB_INIT_ALREADY_DONE,
                component = COMPONENT,
                hub,
                "init called again; bring-up skipped"
            );
            return Ok(());
        }

        let sda_pin = self.config.bus.sda_pin;
        let scl_pin = self.config.bus.scl_pin;
        let driver = self.driver.name();

        info!(
            event = events::HUB_INIT_START,
            component = COMPONENT,
            hub,
            driver,
            sda_pin,
            scl_pin,
            "bringing up bus"
        );

        if let Err(source) = self.driver.begin(sda_pin, scl_pin) {
            error!(
                event = events::HUB_INIT_FAILED,
                component = COMPONENT,
                hub,
                driver,
                sda_pin,
                scl_pin,
                err = %source,
                reason = source.as_label(),
                "bus bring-up failed"
            );
            return Err(HubError::BringUpFailed {
                sda_pin,
                scl_pin,
                source,
            });
        }

        *state = HubState::Initialized;
        info!(
            event = events::HUB_INIT_OK,
            component = COMPONENT,
            hub,
            driver,
            "hub initialized"
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        *self.lock_state() == HubState::Initialized
    }

    /// Polls every active read handler once, in registration order.
    ///
    /// Before a successful [`init`](ThetaHub::init) this returns an empty summary without
    /// invoking anything.
    pub fn tick(&self) -> DispatchSummary {
        if !self.is_initialized() {
            debug!(
                event = events::TICK_SKIPPED_UNINITIALIZED,
                component = COMPONENT,
                hub = &*self.name,
                "tick before init; nothing dispatched"
            );
            return DispatchSummary::default();
        }

        dispatcher::dispatch_tick(&self.name, &self.registry, &self.consumers)
    }

    /// Routes `data` to every write handler registered under `data.name`.
    ///
    /// Unknown topics are ignored. Not gated by `init()`.
    pub fn write(&self, data: SensorData) -> DispatchSummary {
        dispatcher::dispatch_write(&self.name, &self.registry, &self.consumers, &data)
    }

    /// Installs the consumer that receives every emitted record, replacing any previous one.
    pub fn when_data_available<F>(&self, consumer: F)
    where
        F: Fn(&SensorData) + Send + Sync + 'static,
    {
        let previous = self.consumers.replace(Some(Arc::new(consumer)));
        debug!(
            event = events::CONSUMER_SET,
            component = COMPONENT,
            hub = &*self.name,
            replaced = previous.is_some(),
            "consumer installed"
        );
    }

    /// Removes the consumer; emitted records are discarded until a new one is installed.
    pub fn clear_data_available(&self) {
        let previous = self.consumers.replace(None);
        debug!(
            event = events::CONSUMER_CLEARED,
            component = COMPONENT,
            hub = &*self.name,
            replaced = previous.is_some(),
            "consumer cleared"
        );
    }

    pub fn has_consumer(&self) -> bool {
        self.consumers.is_set()
    }

    /// Registers a handler polled on every initialized [`tick`](ThetaHub::tick).
    ///
    /// The handler stays registered for as long as the returned token lives.
    pub fn add_read_handler<F>(&self, handler: F) -> SubscriptionToken
    where
        F: Fn(&Emitter<'_>) + Send + Sync + 'static,
    {
        let key = lock_registry(&self.registry).insert_read(Arc::new(handler));
        debug!(
            event = events::READ_HANDLER_ADD,
            component = COMPONENT,
            hub = &*self.name,
            handler_id = key.id().as_u64(),
            "read handler registered"
        );
        SubscriptionToken::new(self.name.clone(), Arc::downgrade(&self.registry), key)
    }

    /// Registers a handler invoked on every [`write`](ThetaHub::write) to `topic`.
    ///
    /// The handler stays registered for as long as the returned token lives.
    pub fn add_write_handler<F>(&self, topic: &str, handler: F) -> SubscriptionToken
    where
        F: Fn(&SensorData, &Emitter<'_>) + Send + Sync + 'static,
    {
        let key = lock_registry(&self.registry).insert_write(topic, Arc::new(handler));
        debug!(
            event = events::WRITE_HANDLER_ADD,
            component = COMPONENT,
            hub = &*self.name,
            handler_id = key.id().as_u64(),
            topic,
            "write handler registered"
        );
        SubscriptionToken::new(self.name.clone(), Arc::downgrade(&self.registry), key)
    }

    pub fn read_handler_count(&self) -> usize {
        lock_registry(&self.registry).read_len()
    }

    pub fn write_handler_count(&self, topic: &str) -> usize {
        lock_registry(&self.registry).write_len(topic)
    }

    /// Topics with at least one registered write handler, sorted.
    pub fn topics(&self) -> Vec<String> {
        lock_registry(&self.registry).topics()
    }
}
