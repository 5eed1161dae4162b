//! Concrete throw sources and message sinks.

mod human;
mod random;
mod scripted;
mod sink;

pub use human::ConsoleBowler;
pub use random::RandomBowler;
pub use scripted::ScriptedBowler;
pub use sink::{ConsoleSink, RecordingSink};
