//! Convert the events of an iCalendar export to CSV.
//!
//! The input is read in a single streaming pass. Only events whose start date lies in
//! the configured `types::DateRange` are written, with the columns chosen by a
//! `generator::ColumnSpec`.

const BEGIN: &str = "BEGIN:";
const END: &str = "END:";
const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";
const DESCRIPTION: &str = "DESCRIPTION:";
const SUMMARY: &str = "SUMMARY:";
const LOCATION: &str = "LOCATION:";
const STATUS: &str = "STATUS:";

pub mod component;
pub use component::EventRecord;

pub mod parser;
pub use parser::{EventExtractor, EventParser, LineReader, ParserError};

pub mod property;

pub mod generator;
pub use generator::{Column, ColumnSpec, Projector};

pub mod types;

pub mod convert;
pub use convert::{ConfigError, ConvertError, ConvertStats, ConverterOptions, convert};
