/// Region and release types.
pub mod version;

/// Per-region ordered release tables.
pub mod catalog;

/// Chart history events.
pub mod event;
