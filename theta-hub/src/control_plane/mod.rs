//! Control-plane layer.
//!
//! Owns handler registration lifecycle: the ordered read-handler sequence, the
//! topic-keyed write-handler buckets and the tokens whose lifetime keeps each entry
//! registered. This layer guarantees that dropping a token removes exactly its entry,
//! exactly once, before any later dispatch can observe it.
//!
//! ```
//! use std::sync::Arc;
//! use theta_hub::{BusDriver, DriverError, HandlerKind, ThetaHub};
//!
//! # struct NoopBus;
//! # impl BusDriver for NoopBus {
//! #     fn begin(&self, _sda_pin: u8, _scl_pin: u8) -> Result<(), DriverError> { Ok(()) }
//! # }
//! let hub = ThetaHub::new("control-plane-doc", Arc::new(NoopBus));
//!
//! let echo = hub.add_write_handler("led", |data, emit| emit.emit(data.clone()));
//! assert_eq!(echo.kind(), HandlerKind::Write);
//! assert_eq!(hub.topics(), vec!["led".to_string()]);
//!
//! echo.release();
//! assert!(hub.topics().is_empty());
//! ```

pub(crate) mod handler_registry;
pub(crate) mod subscription_token;
