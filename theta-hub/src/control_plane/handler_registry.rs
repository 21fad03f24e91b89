//! Handler registry storage owner for read and topic-keyed write handlers.

use crate::data_plane::emitter::Emitter;
use crate::SensorData;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub(crate) type ReadHandler = Arc<dyn Fn(&Emitter<'_>) + Send + Sync>;
pub(crate) type WriteHandler = Arc<dyn Fn(&SensorData, &Emitter<'_>) + Send + Sync>;

/// Registration sequence number.
///
/// Ids are handed out monotonically per registry, so ordering by id is registration order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct HandlerId(u64);

impl HandlerId {
    pub(crate) fn as_u64(self) -> u64 {
        self.0
    }
}

/// Which side of the hub a registration belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HandlerKind {
    /// Invoked on every initialized `tick()`.
    Read,
    /// Invoked on every `write()` to its topic.
    Write,
}

/// Stable identity of one registry entry.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum HandlerKey {
    Read(HandlerId),
    Write { topic: String, id: HandlerId },
}

impl HandlerKey {
    pub(crate) fn id(&self) -> HandlerId {
        match self {
            HandlerKey::Read(id) => *id,
            HandlerKey::Write { id, .. } => *id,
        }
    }

    pub(crate) fn kind(&self) -> HandlerKind {
        match self {
            HandlerKey::Read(_) => HandlerKind::Read,
            HandlerKey::Write { .. } => HandlerKind::Write,
        }
    }

    pub(crate) fn topic(&self) -> Option<&str> {
        match self {
            HandlerKey::Read(_) => None,
            HandlerKey::Write { topic, .. } => Some(topic),
        }
    }
}

/// Entry taken out of the registry.
///
/// Returned to the caller so the handler (and anything it captured, possibly other
/// tokens) is dropped only after the registry lock has been released.
pub(crate) enum RemovedHandler {
    Read(#[allow(dead_code)] ReadHandler),
    Write(#[allow(dead_code)] WriteHandler),
}

/// Active handlers in registration order.
#[derive(Default)]
pub(crate) struct HandlerRegistry {
    next_id: u64,
    read_handlers: BTreeMap<HandlerId, ReadHandler>,
    write_handlers: HashMap<String, BTreeMap<HandlerId, WriteHandler>>,
}

impl HandlerRegistry {
    /// Creates an empty handler registry.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn next_handler_id(&mut self) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a read handler after every currently registered one.
    pub(crate) fn insert_read(&mut self, handler: ReadHandler) -> HandlerKey {
        let id = self.next_handler_id();
        self.read_handlers.insert(id, handler);
        HandlerKey::Read(id)
    }

    /// Appends a write handler to `topic`'s bucket, creating the bucket on first use.
    pub(crate) fn insert_write(&mut self, topic: &str, handler: WriteHandler) -> HandlerKey {
        let id = self.next_handler_id();
        self.write_handlers
            .entry(topic.to_string())
            .or_default()
            .insert(id, handler);
        HandlerKey::Write {
            topic: topic.to_string(),
            id,
        }
    }

    /// Removes exactly the entry named by `key`. Empty topic buckets are dropped.
    pub(crate) fn remove(&mut self, key: &HandlerKey) -> Option<RemovedHandler> {
        match key {
            HandlerKey::Read(id) => self.read_handlers.remove(id).map(RemovedHandler::Read),
            HandlerKey::Write { topic, id } => {
                let bucket = self.write_handlers.get_mut(topic.as_str())?;
                let removed = bucket.remove(id).map(RemovedHandler::Write);
                if bucket.is_empty() {
                    self.write_handlers.remove(topic.as_str());
                }
                removed
            }
        }
    }

    pub(crate) fn contains(&self, key: &HandlerKey) -> bool {
        match key {
            HandlerKey::Read(id) => self.contains_read(*id),
            HandlerKey::Write { topic, id } => self.contains_write(topic, *id),
        }
    }

    pub(crate) fn contains_read(&self, id: HandlerId) -> bool {
        self.read_handlers.contains_key(&id)
    }

    pub(crate) fn contains_write(&self, topic: &str, id: HandlerId) -> bool {
        self.write_handlers
            .get(topic)
            .is_some_and(|bucket| bucket.contains_key(&id))
    }

    /// Read handlers active right now, in registration order.
    pub(crate) fn read_snapshot(&self) -> Vec<(HandlerId, ReadHandler)> {
        self.read_handlers
            .iter()
            .map(|(id, handler)| (*id, handler.clone()))
            .collect()
    }

    /// Write handlers active right now for `topic`, in registration order.
    pub(crate) fn write_snapshot(&self, topic: &str) -> Vec<(HandlerId, WriteHandler)> {
        self.write_handlers
            .get(topic)
            .map(|bucket| {
                bucket
                    .iter()
                    .map(|(id, handler)| (*id, handler.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn read_len(&self) -> usize {
        self.read_handlers.len()
    }

    pub(crate) fn write_len(&self, topic: &str) -> usize {
        self.write_handlers.get(topic).map_or(0, BTreeMap::len)
    }

    /// Topics with at least one active write handler, sorted.
    pub(crate) fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self.write_handlers.keys().cloned().collect();
        topics.sort();
        topics
    }
}

/// Locks the registry, recovering the guard if a previous holder panicked.
///
/// The lock is never held while user code runs, and every mutation is a single map
/// operation, so a poisoned registry is still consistent.
pub(crate) fn lock_registry(registry: &Mutex<HandlerRegistry>) -> MutexGuard<'_, HandlerRegistry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}
