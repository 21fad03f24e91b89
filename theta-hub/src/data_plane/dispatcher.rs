//! Synchronous tick and write dispatch over registry snapshots.

use crate::control_plane::handler_registry::{lock_registry, HandlerRegistry};
use crate::data_plane::consumer_slot::ConsumerSlot;
use crate::data_plane::emitter::{DispatchOrigin, Emitter};
use crate::observability::{events, fields};
use crate::SensorData;
use std::sync::Mutex;
use tracing::debug;

const COMPONENT: &str = "dispatcher";

/// Counters for one `tick()` or `write()` call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DispatchSummary {
    /// Handlers that ran to completion.
    pub handlers_invoked: usize,
    /// Records handlers passed to their emitter.
    pub records_emitted: usize,
    /// Records that reached a consumer.
    pub records_forwarded: usize,
}

impl DispatchSummary {
    fn record(&mut self, emitter: &Emitter<'_>) {
        self.handlers_invoked += 1;
        self.records_emitted += emitter.emitted();
        self.records_forwarded += emitter.forwarded();
    }

    /// Returns `true` when no handler ran.
    pub fn is_empty(&self) -> bool {
        self.handlers_invoked == 0
    }
}

/// Runs every live read handler once, in registration order.
///
/// The snapshot is taken up front; handlers registered while dispatching wait for the
/// next tick, and handlers unregistered while dispatching are skipped from that point on.
pub(crate) fn dispatch_tick(
    hub_name: &str,
    registry: &Mutex<HandlerRegistry>,
    consumers: &ConsumerSlot,
) -> DispatchSummary {
    let snapshot = lock_registry(registry).read_snapshot();
    let mut summary = DispatchSummary::default();

    for (id, handler) in snapshot {
        let still_registered = lock_registry(registry).contains_read(id);
        if !still_registered {
            debug!(
                event = events::HANDLER_SKIPPED_REMOVED,
                component = COMPONENT,
                hub = hub_name,
                handler_id = id.as_u64(),
                origin = fields::ORIGIN_TICK,
                "read handler unregistered mid-tick; skipped"
            );
            continue;
        }

        let emitter = Emitter::new(hub_name, DispatchOrigin::Tick, consumers);
        handler(&emitter);
        summary.record(&emitter);
    }

    debug!(
        event = events::TICK_DISPATCH_OK,
        component = COMPONENT,
        hub = hub_name,
        invoked = summary.handlers_invoked,
        emitted = summary.records_emitted,
        forwarded = summary.records_forwarded,
        "tick dispatched"
    );
    summary
}

/// Runs every live write handler registered under `data.name`, in registration order.
pub(crate) fn dispatch_write(
    hub_name: &str,
    registry: &Mutex<HandlerRegistry>,
    consumers: &ConsumerSlot,
    data: &SensorData,
) -> DispatchSummary {
    let topic = data.topic();
    let snapshot = lock_registry(registry).write_snapshot(topic);
    let mut summary = DispatchSummary::default();

    if snapshot.is_empty() {
        debug!(
            event = events::WRITE_NO_HANDLERS,
            component = COMPONENT,
            hub = hub_name,
            topic = fields::format_topic(topic),
            "no write handler for topic; ignored"
        );
        return summary;
    }

    for (id, handler) in snapshot {
        let still_registered = lock_registry(registry).contains_write(topic, id);
        if !still_registered {
            debug!(
                event = events::HANDLER_SKIPPED_REMOVED,
                component = COMPONENT,
                hub = hub_name,
                handler_id = id.as_u64(),
                origin = fields::ORIGIN_WRITE,
                topic = fields::format_topic(topic),
                "write handler unregistered mid-write; skipped"
            );
            continue;
        }

        let emitter = Emitter::new(hub_name, DispatchOrigin::Write { topic }, consumers);
        handler(data, &emitter);
        summary.record(&emitter);
    }

    debug!(
        event = events::WRITE_DISPATCH_OK,
        component = COMPONENT,
        hub = hub_name,
        topic = fields::format_topic(topic),
        invoked = summary.handlers_invoked,
        emitted = summary.records_emitted,
        forwarded = summary.records_forwarded,
        "write dispatched"
    );
    summary
}
