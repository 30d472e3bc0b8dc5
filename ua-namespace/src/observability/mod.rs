//! Internal observability helpers shared across the crate.

pub mod events;
