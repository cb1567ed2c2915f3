mod column;
pub use column::{Column, ColumnError, ColumnSpec};

mod csv;
pub use csv::Projector;
