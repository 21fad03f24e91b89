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

//! Emit callback handed to each handler invocation.

use crate::data_plane::consumer_slot::ConsumerSlot;
use crate::observability::{events, fields};
use crate::SensorData;
use std::cell::Cell;
use tracing::{trace, Level};

const COMPONENT: &str = "emitter";

/// What triggered the handler invocation an [`Emitter`] is bound to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DispatchOrigin<'a> {
    Tick,
    Write { topic: &'a str },
}

impl DispatchOrigin<'_> {
    fn label(&self) -> &'static str {
        match self {
            DispatchOrigin::Tick => fields::ORIGIN_TICK,
            DispatchOrigin::Write { .. } => fields::ORIGIN_WRITE,
        }
    }

    fn topic(&self) -> Option<&str> {
        match self {
            DispatchOrigin::Tick => None,
            DispatchOrigin::Write { topic } => Some(topic),
        }
    }
}

///
/// [`Emitter`] is the emit callback a handler receives for one invocation.
///
/// Every record passed to [`emit`](Emitter::emit) is forwarded synchronously, in emission
/// order, to the hub's current consumer before `emit` returns. Records emitted while no
/// consumer is set are dropped, never buffered. The emitter borrows from the running
/// dispatch and cannot outlive it.
pub struct Emitter<'a> {
    hub_name: &'a str,
    origin: DispatchOrigin<'a>,
    consumers: &'a ConsumerSlot,
    emitted: Cell<usize>,
    forwarded: Cell<usize>,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(
        hub_name: &'a str,
        origin: DispatchOrigin<'a>,
        consumers: &'a ConsumerSlot,
    ) -> Self {
        Self {
            hub_name,
            origin,
            consumers,
            emitted: Cell::new(0),
            forwarded: Cell::new(0),
        }
    }

    /// Pushes one record to the hub's consumer.
    pub fn emit(&self, data: SensorData) {
        self.emitted.set(self.emitted.get() + 1);

        let Some(consumer) = self.consumers.current() else {
            trace!(
                event = events::EMIT_DROPPED_NO_CONSUMER,
                component = COMPONENT,
                hub = self.hub_name,
                origin = self.origin.label(),
                topic = fields::format_topic(&data.name),
                "no consumer set; record dropped"
            );
            return;
        };

        if tracing::enabled!(Level::TRACE) {
            trace!(
                event = events::EMIT_FORWARD,
                component = COMPONENT,
                hub = self.hub_name,
                origin = self.origin.label(),
                write_topic = fields::format_optional_topic(self.origin.topic()),
                topic = fields::format_topic(&data.name),
                value = %fields::format_value(&data),
                "forwarding record to consumer"
            );
        }

        consumer(&data);
        self.forwarded.set(self.forwarded.get() + 1);
    }

    /// Records emitted through this emitter so far.
    pub fn emitted(&self) -> usize {
        self.emitted.get()
    }

    pub(crate) fn forwarded(&self) -> usize {
        self.forwarded.get()
    }
}
