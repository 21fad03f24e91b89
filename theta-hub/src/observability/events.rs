//! Canonical structured event names used across `theta-hub`.

// Bring-up lifecycle events.
pub const HUB_CREATED: &str = "hub_created";
pub const HUB_INIT_START: &str = "hub_init_start";
pub const HUB_INIT_OK: &str = "hub_init_ok";
pub const HUB_INIT_FAILED: &str = "hub_init_failed";
pub const HUB_INIT_ALREADY_DONE: &str = "hub_init_already_done";

// Registry events.
pub const READ_HANDLER_ADD: &str = "read_handler_add";
pub const READ_HANDLER_REMOVE: &str = "read_handler_remove";
pub const WRITE_HANDLER_ADD: &str = "write_handler_add";
pub const WRITE_HANDLER_REMOVE: &str = "write_handler_remove";
pub const HANDLER_REMOVE_MISSING: &str = "handler_remove_missing";
pub const HANDLER_REMOVE_HUB_GONE: &str = "handler_remove_hub_gone";

// Dispatch events.
pub const TICK_SKIPPED_UNINITIALIZED: &str = "tick_skipped_uninitialized";
pub const TICK_DISPATCH_OK: &str = "tick_dispatch_ok";
pub const WRITE_NO_HANDLERS: &str = "write_no_handlers";
pub const WRITE_DISPATCH_OK: &str = "write_dispatch_ok";
pub const HANDLER_SKIPPED_REMOVED: &str = "handler_skipped_removed";
pub const EMIT_FORWARD: &str = "emit_forward";
pub const EMIT_DROPPED_NO_CONSUMER: &str = "emit_dropped_no_consumer";

// Consumer slot events.
pub const CONSUMER_SET: &str = "consumer_set";
pub const CONSUMER_CLEARED: &str = "consumer_cleared";
