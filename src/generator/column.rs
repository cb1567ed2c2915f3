use derive_more::{Deref, Display, From, Into};
use phf::phf_map;

/// One output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Summary,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    Description,
    Location,
    Status,
}

static CODES: phf::Map<char, Column> = phf_map! {
    's' => Column::Summary,
    'b' => Column::StartDate,
    'e' => Column::EndDate,
    'B' => Column::StartTime,
    'E' => Column::EndTime,
    'd' => Column::Description,
    'l' => Column::Location,
    'S' => Column::Status,
};

impl Column {
    pub fn from_code(code: char) -> Option<Self> {
        CODES.get(&code).copied()
    }

    pub fn code(&self) -> char {
        match self {
            Self::Summary => 's',
            Self::StartDate => 'b',
            Self::EndDate => 'e',
            Self::StartTime => 'B',
            Self::EndTime => 'E',
            Self::Description => 'd',
            Self::Location => 'l',
            Self::Status => 'S',
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColumnError {
    #[error("unknown column code '{0}'")]
    UnknownCode(char),
}

/// The ordered list of columns to emit. Duplicates are allowed and kept.
#[derive(Debug, Clone, PartialEq, Eq, Deref, From, Into, Display)]
#[display("{}", _0.iter().map(Column::code).collect::<String>())]
pub struct ColumnSpec(Vec<Column>);

impl Default for ColumnSpec {
    fn default() -> Self {
        Self(vec![Column::StartDate, Column::Description])
    }
}

impl ColumnSpec {
    /// Resolve a string of single-character field codes.
    ///
    /// An empty string selects the default `[StartDate, Description]`.
    pub fn from_codes(codes: &str) -> Result<Self, ColumnError> {
        let columns = codes
            .chars()
            .map(|code| Column::from_code(code).ok_or(ColumnError::UnknownCode(code)))
            .collect::<Result<Vec<_>, _>>()?;
        if columns.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self(columns))
    }
}
