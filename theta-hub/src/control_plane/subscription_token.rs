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

//! Lifetime-scoped registration handles.

use crate::control_plane::handler_registry::{
    lock_registry, HandlerKey, HandlerKind, HandlerRegistry,
};
use crate::observability::{events, fields};
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex, Weak};
use tracing::debug;

const COMPONENT: &str = "subscription_token";

///
/// [`SubscriptionToken`] keeps one read or write handler registered with a
/// [`ThetaHub`][crate::ThetaHub].
///
/// Dropping the token, or calling [`release`](SubscriptionToken::release), removes the
/// handler from the registry before returning. Removal happens exactly once; a token that
/// outlives its hub drops quietly.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use theta_hub::{BusDriver, DriverError, SensorData, ThetaHub};
///
/// # struct NoopBus;
/// # impl BusDriver for NoopBus {
/// #     fn begin(&self, _sda_pin: u8, _scl_pin: u8) -> Result<(), DriverError> { Ok(()) }
/// # }
/// let hub = ThetaHub::new("token-doc", Arc::new(NoopBus));
///
/// {
///     let _token = hub.add_read_handler(|emit| emit.emit(SensorData::new("tick", "value")));
///     assert_eq!(hub.read_handler_count(), 1);
/// }
///
/// assert_eq!(hub.read_handler_count(), 0);
/// ```
#[must_use = "dropping a SubscriptionToken unregisters its handler immediately"]
pub struct SubscriptionToken {
    hub_name: Arc<str>,
    registry: Weak<Mutex<HandlerRegistry>>,
    key: HandlerKey,
    released: bool,
}

impl SubscriptionToken {
    pub(crate) fn new(
        hub_name: Arc<str>,
        registry: Weak<Mutex<HandlerRegistry>>,
        key: HandlerKey,
    ) -> Self {
        Self {
            hub_name,
            registry,
            key,
            released: false,
        }
    }

    /// Unregisters the handler now. Equivalent to dropping the token.
    pub fn release(mut self) {
        self.unregister();
    }

    /// Returns `true` while the handler is still registered with a live hub.
    pub fn is_active(&self) -> bool {
        if self.released {
            return false;
        }
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let active = lock_registry(&registry).contains(&self.key);
        active
    }

    pub fn kind(&self) -> HandlerKind {
        self.key.kind()
    }

    /// Topic of a write handler; `None` for read handlers.
    pub fn topic(&self) -> Option<&str> {
        self.key.topic()
    }

    fn unregister(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let hub = &*self.hub_name;
        let handler_id = self.key.id().as_u64();
        let topic = fields::format_optional_topic(self.key.topic());

        let Some(registry) = self.registry.upgrade() else {
            debug!(
                event = events::HANDLER_REMOVE_HUB_GONE,
                component = COMPONENT,
                hub,
                handler_id,
                topic,
                "hub dropped before token; nothing to unregister"
            );
            return;
        };

        // Bound outside the lock: the handler may own other tokens whose drop re-enters.
        let removed = lock_registry(&registry).remove(&self.key);

        match (removed.is_some(), self.key.kind()) {
            (true, HandlerKind::Read) => debug!(
                event = events::READ_HANDLER_REMOVE,
                component = COMPONENT,
                hub,
                handler_id,
                "read handler unregistered"
            ),
            (true, HandlerKind::Write) => debug!(
                event = events::WRITE_HANDLER_REMOVE,
                component = COMPONENT,
                hub,
                handler_id,
                topic,
                "write handler unregistered"
            ),
            (false, _) => debug!(
                event = events::HANDLER_REMOVE_MISSING,
                component = COMPONENT,
                hub,
                handler_id,
                topic,
                "handler already absent from registry"
            ),
        }

        drop(removed);
    }
}

impl Drop for SubscriptionToken {
    fn drop(&mut self) {
        self.unregister();
    }
}

impl Debug for SubscriptionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionToken")
            .field("hub", &self.hub_name)
            .field("kind", &self.key.kind())
            .field("handler_id", &self.key.id().as_u64())
            .field("topic", &self.key.topic())
            .field("released", &self.released)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SubscriptionToken;
    use crate::control_plane::handler_registry::{HandlerKind, HandlerRegistry, ReadHandler};
    use crate::data_plane::emitter::Emitter;
    use std::sync::{Arc, Mutex};

    fn registry_with_read_handler() -> (Arc<Mutex<HandlerRegistry>>, SubscriptionToken) {
        let registry = Arc::new(Mutex::new(HandlerRegistry::new()));
        let handler: ReadHandler = Arc::new(|_emit: &Emitter<'_>| {});
        let key = registry.lock().expect("registry lock").insert_read(handler);
        let token = SubscriptionToken::new(Arc::from("test-hub"), Arc::downgrade(&registry), key);
        (registry, token)
    }

    #[test]
    fn drop_removes_the_entry() {
        let (registry, token) = registry_with_read_handler();
        assert!(token.is_active());
        assert_eq!(token.kind(), HandlerKind::Read);
        assert_eq!(token.topic(), None);

        drop(token);

        assert_eq!(registry.lock().expect("registry lock").read_len(), 0);
    }

    #[test]
    fn release_is_idempotent_with_drop() {
        let (registry, mut token) = registry_with_read_handler();

        token.unregister();
        assert!(!token.is_active());
        token.unregister();
        drop(token);

        assert_eq!(registry.lock().expect("registry lock").read_len(), 0);
    }

    #[test]
    fn token_outliving_registry_drops_quietly() {
        let (registry, token) = registry_with_read_handler();

        drop(registry);

        assert!(!token.is_active());
        drop(token);
    }
}
