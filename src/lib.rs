//! Named stacks of labels, persisted in a key-value store.
//!
//! - [`ops::stack_ops`]: add/remove/clear on one stack, written through to the store
//! - [`ops::picker`]: prefix search and the confirm-before-adding rule for unknown items
//! - [`gesture::swipe`]: the swipe state machine that drives row actions

pub mod cli;
pub mod gesture;
pub mod io;
pub mod model;
pub mod ops;
