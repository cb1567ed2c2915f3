mod error;
pub use error::ParserError;

mod line;
pub use line::{Line, LineReader};

mod text;
pub use text::unescape;

mod extractor;
pub use extractor::{EventExtractor, EventParser};
