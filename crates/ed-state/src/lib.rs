//! Command history, periodic snapshots, and the engine that ties them to
//! the live buffer.

mod command;
mod engine;
mod log;
mod snapshot;

pub use command::Command;
pub use engine::Engine;
pub use log::CommandLog;
pub use snapshot::{Snapshot, SnapshotStore};
