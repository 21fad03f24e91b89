//! Single-slot holder for the "data available" consumer callback.

use crate::SensorData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub(crate) type DataConsumer = Arc<dyn Fn(&SensorData) + Send + Sync>;

/// Holds at most one consumer; replacing it never buffers or replays data.
#[derive(Default)]
pub(crate) struct ConsumerSlot {
    consumer: Mutex<Option<DataConsumer>>,
}

impl ConsumerSlot {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<DataConsumer>> {
        self.consumer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs `consumer` (or clears the slot) and hands back the previous one.
    ///
    /// The previous consumer is returned rather than dropped here so its captures are
    /// released after the slot lock.
    pub(crate) fn replace(&self, consumer: Option<DataConsumer>) -> Option<DataConsumer> {
        std::mem::replace(&mut *self.lock(), consumer)
    }

    /// Consumer to forward to right now.
    pub(crate) fn current(&self) -> Option<DataConsumer> {
        self.lock().clone()
    }

    pub(crate) fn is_set(&self) -> bool {
        self.lock().is_some()
    }
}
