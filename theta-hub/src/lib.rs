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

//! # theta-hub
//!
//! `theta-hub` is a minimal embedded event hub mediating between sensor polling and a
//! data consumer.
//!
//! Components register *read handlers*, polled on every [`ThetaHub::tick`], and
//! topic-addressed *write handlers*, invoked on every [`ThetaHub::write`] to their topic.
//! Both kinds push [`SensorData`] through an [`Emitter`], and every emitted record is
//! forwarded synchronously to the single consumer installed with
//! [`ThetaHub::when_data_available`].
//!
//! ## Init gate
//!
//! Read handlers may register before bring-up (sensor wrappers typically do so while they
//! are constructed), but no tick-driven data reaches the consumer before
//! [`ThetaHub::init`] has brought the bus up through the injected [`BusDriver`]. Writes are
//! a software path and are never gated.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use theta_hub::{BusDriver, DriverError, SensorData, ThetaHub};
//!
//! struct I2cBus;
//!
//! impl BusDriver for I2cBus {
//!     fn begin(&self, _sda_pin: u8, _scl_pin: u8) -> Result<(), DriverError> {
//!         Ok(())
//!     }
//! }
//!
//! let hub = ThetaHub::new("quick-start", Arc::new(I2cBus));
//! let received = Arc::new(Mutex::new(Vec::new()));
//! let sink = received.clone();
//! hub.when_data_available(move |data| sink.lock().unwrap().push(data.clone()));
//!
//! let _thermometer = hub.add_read_handler(|emit| {
//!     emit.emit(SensorData::new("temperature", "21.5"));
//! });
//!
//! hub.tick();
//! assert!(received.lock().unwrap().is_empty());
//!
//! hub.init().unwrap();
//! hub.tick();
//! assert_eq!(received.lock().unwrap().len(), 1);
//! ```
//!
//! ## Token contract
//!
//! Every registration returns a [`SubscriptionToken`]. The handler stays registered for
//! exactly as long as the token lives: dropping it removes the entry synchronously, so no
//! later tick or write (nor a later handler in the same dispatch) can invoke it.
//!
//! ```
//! use std::sync::Arc;
//! use theta_hub::{BusDriver, DriverError, SensorData, ThetaHub};
//!
//! # struct I2cBus;
//! # impl BusDriver for I2cBus {
//! #     fn begin(&self, _sda_pin: u8, _scl_pin: u8) -> Result<(), DriverError> { Ok(()) }
//! # }
//! let hub = ThetaHub::new("token-contract", Arc::new(I2cBus));
//! hub.init().unwrap();
//!
//! let first = hub.add_read_handler(|emit| emit.emit(SensorData::default()));
//! {
//!     let _second = hub.add_read_handler(|emit| emit.emit(SensorData::default()));
//!     assert_eq!(hub.tick().handlers_invoked, 2);
//! }
//! assert_eq!(hub.tick().handlers_invoked, 1);
//!
//! drop(first);
//! assert!(hub.tick().is_empty());
//! ```
//!
//! ## Internal architecture map
//!
//! - API facade: [`ThetaHub`], [`SubscriptionToken`], [`Emitter`], [`SensorData`]
//! - Control plane: handler registry and token lifecycle
//! - Data plane: consumer slot, emit callback and tick/write dispatch
//! - Collaborators: [`BusDriver`] bring-up configured by [`HubConfig`]
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events. Library code emits events with stable
//! `event`/`component` keys and never initializes a global subscriber. Binaries and tests
//! are responsible for one-time `tracing_subscriber` initialization at process boundaries.

mod config;
pub use config::{BusConfig, HubConfig, DEFAULT_SCL_PIN, DEFAULT_SDA_PIN};

mod control_plane;
pub use control_plane::handler_registry::HandlerKind;
pub use control_plane::subscription_token::SubscriptionToken;

mod data_plane;
pub use data_plane::dispatcher::DispatchSummary;
pub use data_plane::emitter::Emitter;

mod driver;
pub use driver::BusDriver;

mod error;
pub use error::{DriverError, HubError};

mod hub;
pub use hub::ThetaHub;

#[doc(hidden)]
pub mod observability;

mod sensor_data;
pub use sensor_data::SensorData;
