//! Canonical structured event names used across `ua-namespace`.

// Address-space construction events.
pub const ADDRESS_SPACE_BUILD_START: &str = "address_space_build_start";
pub const ADDRESS_SPACE_BUILD_OK: &str = "address_space_build_ok";
pub const NODE_REGISTER_FAILED: &str = "node_register_failed";
pub const NODE_LINK_FAILED: &str = "node_link_failed";
pub const RUN_STATE_BOUND: &str = "run_state_bound";

// Access policy events.
pub const ACCESS_RIGHT_UNRECOGNIZED: &str = "access_right_unrecognized";

// Dispatcher events.
pub const BROWSE_UNKNOWN_NODE: &str = "browse_unknown_node";
pub const READ_UNKNOWN_NODE: &str = "read_unknown_node";
pub const WRITE_UNKNOWN_NODE: &str = "write_unknown_node";
pub const WRITE_OK: &str = "write_ok";
pub const WRITE_FAILED: &str = "write_failed";

// Method invocation events.
pub const METHOD_INVOKE_START: &str = "method_invoke_start";
pub const METHOD_INVOKE_OK: &str = "method_invoke_ok";
pub const METHOD_INVOKE_FAILED: &str = "method_invoke_failed";

// Subscription forwarding events.
pub const SUBSCRIPTION_ITEMS_CREATED: &str = "subscription_items_created";
pub const SUBSCRIPTION_ITEMS_MODIFIED: &str = "subscription_items_modified";
pub const SUBSCRIPTION_ITEMS_DELETED: &str = "subscription_items_deleted";
pub const SUBSCRIPTION_MODE_CHANGED: &str = "subscription_mode_changed";

// Simulation driver events.
pub const SIM_FLIP: &str = "sim_flip";
pub const SIM_FLIP_FAILED: &str = "sim_flip_failed";
pub const SIM_STOPPED: &str = "sim_stopped";
