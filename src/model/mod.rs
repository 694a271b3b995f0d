// File: ./src/model/mod.rs
pub mod event;
pub mod schedule;

pub use event::Event;
pub use schedule::{CleanedExtraction, ParsedSchedule};
