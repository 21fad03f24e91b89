use integration_test_utils::{CollectedData, RecordingBusDriver};
use std::sync::Arc;
use theta_hub::{SensorData, SubscriptionToken, ThetaHub};

#[allow(dead_code)]
pub(crate) const TEST_TOPIC: &str = "TestTopic";

pub(crate) fn make_hub(name: &str) -> (ThetaHub, Arc<RecordingBusDriver>) {
    let driver = Arc::new(RecordingBusDriver::new());
    let hub = ThetaHub::new(name, driver.clone());
    (hub, driver)
}

/// Registers a read handler emitting the canonical `tick`/`value` reading.
#[allow(dead_code)]
pub(crate) fn add_example_read_handler(hub: &ThetaHub) -> SubscriptionToken {
    hub.add_read_handler(|emit| emit.emit(SensorData::new("tick", "value")))
}

/// Registers a write handler on [`TEST_TOPIC`] that echoes its input.
#[allow(dead_code)]
pub(crate) fn add_echo_write_handler(hub: &ThetaHub) -> SubscriptionToken {
    hub.add_write_handler(TEST_TOPIC, |data, emit| emit.emit(data.clone()))
}

#[allow(dead_code)]
pub(crate) fn collect(hub: &ThetaHub) -> CollectedData {
    CollectedData::attach(hub)
}
