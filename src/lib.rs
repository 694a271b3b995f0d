// Crate root library declaration and module exports.
pub mod cli;
pub mod color_utils;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod parser;
pub mod storage;
pub mod store;

pub use error::{ParseError, ParseResult};
pub use model::{Event, ParsedSchedule};
pub use parser::{ParserOptions, ScheduleParser, parse, parse_at};
pub use store::EventBook;
