use std::borrow::Cow;

use itertools::Itertools;

use super::{Column, ColumnSpec};
use crate::component::EventRecord;

const SEPARATOR: &str = ",";
const TERMINATOR: &str = "\n";

/// Renders the CSV header and one row per accepted event, in column order.
#[derive(Debug, Clone, Default)]
pub struct Projector {
    columns: ColumnSpec,
}

impl Projector {
    pub fn new(columns: ColumnSpec) -> Self {
        Projector { columns }
    }

    pub fn header(&self) -> String {
        let with_end_date = self.columns.contains(&Column::EndDate);
        self.columns
            .iter()
            .map(|column| title(*column, with_end_date))
            .join(SEPARATOR)
            + TERMINATOR
    }

    pub fn row(&self, record: &EventRecord) -> String {
        self.columns
            .iter()
            .map(|column| format(*column, record))
            .join(SEPARATOR)
            + TERMINATOR
    }
}

fn title(column: Column, with_end_date: bool) -> &'static str {
    match column {
        Column::Summary => "Summary",
        Column::StartDate if with_end_date => "Start Date",
        Column::StartDate => "Date",
        Column::EndDate => "End Date",
        Column::StartTime => "Start Time",
        Column::EndTime => "End Time",
        Column::Description => "Description",
        Column::Location => "Location",
        Column::Status => "Status",
    }
}

fn format(column: Column, record: &EventRecord) -> Cow<'_, str> {
    match column {
        Column::Summary => format!("\"{}\"", record.summary).into(),
        Column::Description => format!("\"{}\"", record.description).into(),
        Column::StartDate => optional(record.start_date),
        Column::EndDate => optional(record.end_date),
        Column::StartTime => optional(record.start_time),
        Column::EndTime => optional(record.end_time),
        Column::Location => Cow::Borrowed(record.location.as_str()),
        Column::Status => Cow::Borrowed(record.status.as_str()),
    }
}

fn optional<T: ToString>(value: Option<T>) -> Cow<'static, str> {
    value.map_or(Cow::Borrowed(""), |value| value.to_string().into())
}

#[cfg(test)]
mod tests {
    use super::Projector;
    use crate::component::EventRecord;
    use crate::generator::ColumnSpec;
    use crate::types::{DateValue, TimeValue};
    use rstest::rstest;

    fn record() -> EventRecord {
        EventRecord {
            summary: "Team \"sync\"".replace('"', "\"\""),
            start_date: Some(DateValue::new(2017, 12, 5)),
            start_time: Some(TimeValue::new(9, 30, 0)),
            end_date: Some(DateValue::new(2017, 12, 5)),
            end_time: Some(TimeValue::new(10, 0, 0)),
            description: "first\nsecond".to_owned(),
            location: "Room 1".to_owned(),
            status: "CONFIRMED".to_owned(),
            is_untimed_start: false,
            in_range: true,
        }
    }

    #[rstest]
    #[case("", "Date,Description\n")]
    #[case("be", "Start Date,End Date\n")]
    #[case("eb", "End Date,Start Date\n")]
    #[case("sBElS", "Summary,Start Time,End Time,Location,Status\n")]
    fn header(#[case] codes: &str, #[case] expected: &str) {
        let projector = Projector::new(ColumnSpec::from_codes(codes).unwrap());
        assert_eq!(projector.header(), expected);
    }

    #[rstest]
    #[case("", "5/12/2017,\"first\nsecond\"\n")]
    #[case("db", "\"first\nsecond\",5/12/2017\n")]
    #[case("sBeE", "\"Team \"\"sync\"\"\",9:30:0,5/12/2017,10:0:0\n")]
    #[case("lS", "Room 1,CONFIRMED\n")]
    fn row(#[case] codes: &str, #[case] expected: &str) {
        let projector = Projector::new(ColumnSpec::from_codes(codes).unwrap());
        assert_eq!(projector.row(&record()), expected);
    }

    #[test]
    fn absent_values_are_blank() {
        let projector = Projector::new(ColumnSpec::from_codes("sbeBEdlS").unwrap());
        assert_eq!(
            projector.row(&EventRecord::default()),
            "\"\",,,,,\"\",,\n"
        );
    }
}
