//! Data-plane layer.
//!
//! Owns the consumer slot, the per-invocation emit callback and the synchronous tick
//! and write dispatch loops. Dispatch iterates registry snapshots without holding the
//! registry lock, so handlers are free to register, unregister or write re-entrantly.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use theta_hub::{BusDriver, DriverError, SensorData, ThetaHub};
//!
//! # struct NoopBus;
//! # impl BusDriver for NoopBus {
//! #     fn begin(&self, _sda_pin: u8, _scl_pin: u8) -> Result<(), DriverError> { Ok(()) }
//! # }
//! let hub = ThetaHub::new("data-plane-doc", Arc::new(NoopBus));
//! let received = Arc::new(Mutex::new(Vec::new()));
//! let sink = received.clone();
//! hub.when_data_available(move |data| sink.lock().unwrap().push(data.clone()));
//!
//! let _echo = hub.add_write_handler("TestTopic", |data, emit| emit.emit(data.clone()));
//! let summary = hub.write(SensorData::new("TestTopic", "example value"));
//!
//! assert_eq!(summary.records_forwarded, 1);
//! assert_eq!(received.lock().unwrap()[0].value, "example value");
//! ```

pub(crate) mod consumer_slot;
pub(crate) mod dispatcher;
pub(crate) mod emitter;
