/// Error arising while reading the calendar stream.
///
/// Malformed calendar content is never an error: it is reported as a warning and
/// skipped. Only an unreadable input ends the stream early.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Line {0}: failed to read input: {1}")]
    Io(usize, #[source] std::io::Error),
}
