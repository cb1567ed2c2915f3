use ical2csv::{ConverterOptions, convert};

fn run(input: &str, start: &str, end: &str, columns: &str) -> String {
    let options = ConverterOptions::parse(start, end, columns).unwrap();
    let mut out = Vec::new();
    convert(input.as_bytes(), &mut out, &options).unwrap();
    String::from_utf8(out).unwrap()
}

pub mod conversion {
    use crate::run;
    use ical2csv::{ConverterOptions, convert};
    use rstest::rstest;

    #[test]
    fn xmas_default_columns() {
        let input = include_str!("./resources/xmas.ics");
        similar_asserts::assert_eq!(
            run(input, "20171201", "20171231", ""),
            "Date,Description\n25/12/2017,\"\"\n"
        );
    }

    #[test]
    fn xmas_end_date_is_suppressed() {
        let input = include_str!("./resources/xmas.ics");
        similar_asserts::assert_eq!(
            run(input, "20171201", "20171231", "sbe"),
            "Summary,Start Date,End Date\n\"Xmas\",25/12/2017,\n"
        );
    }

    #[rstest]
    #[case("20171226", "20171231")]
    #[case("20170101", "20171224")]
    #[case("20180101", "20181231")]
    fn xmas_out_of_range(#[case] start: &str, #[case] end: &str) {
        let input = include_str!("./resources/xmas.ics");
        similar_asserts::assert_eq!(run(input, start, end, ""), "Date,Description\n");
    }

    #[test]
    fn google_export_all_columns() {
        let input = include_str!("./resources/google_export.ics");
        insta::assert_snapshot!(run(input, "20171201", "20171231", "sbeBEdlS"), @r#"
Summary,Start Date,End Date,Start Time,End Time,Description,Location,Status
"Xmas",25/12/2017,,0:0:0,,"Presents for everyone, then lunch at ""Oma's""; bring the salad.
Don't forget the camera",Grandma's house,CONFIRMED
"Dentist, again",5/12/2017,5/12/2017,9:0:0,10:30:0,"EMPTY DESCRIPTION",EMPTY LOCATION,TENTATIVE
"EMPTY SUMMARY",31/12/2017,,0:0:0,,"",,
"#);
    }

    #[test]
    fn google_export_column_order_follows_selection() {
        let input = include_str!("./resources/google_export.ics");
        insta::assert_snapshot!(run(input, "20171201", "20171231", "Sbs"), @r#"
Status,Date,Summary
CONFIRMED,25/12/2017,"Xmas"
TENTATIVE,5/12/2017,"Dentist, again"
,31/12/2017,"EMPTY SUMMARY"
"#);
    }

    #[test]
    fn google_export_stats() {
        let input = include_str!("./resources/google_export.ics");
        let options = ConverterOptions::parse("20171101", "20171231", "b").unwrap();
        let mut out = Vec::new();
        let stats = convert(input.as_bytes(), &mut out, &options).unwrap();
        assert_eq!(stats.events, 5);
        assert_eq!(stats.emitted, 4);
        // One timed DTSTART
        assert_eq!(stats.warnings, 1);
        similar_asserts::assert_eq!(
            String::from_utf8(out).unwrap(),
            "Date\n25/12/2017\n5/12/2017\n15/11/2017\n31/12/2017\n"
        );
    }

    #[test]
    fn single_day_range() {
        let input = include_str!("./resources/google_export.ics");
        similar_asserts::assert_eq!(
            run(input, "20171231", "20171231", "bs"),
            "Date,Summary\n31/12/2017,\"EMPTY SUMMARY\"\n"
        );
    }
}

pub mod events {
    use ical2csv::{EventParser, types::DateRange};
    use itertools::Itertools;

    #[test]
    fn parser_yields_in_input_order() {
        let input = include_str!("./resources/google_export.ics");
        let range = DateRange::new(20170101, 20181231).unwrap();
        let summaries = EventParser::new(input.as_bytes(), range)
            .map(|event| event.unwrap().summary)
            .join("|");
        assert_eq!(summaries, "Xmas|Dentist, again|Birthday|New Year|EMPTY SUMMARY");
    }

    #[test]
    fn lf_only_input() {
        let input = include_str!("./resources/xmas.ics").replace("\r\n", "\n");
        let range = DateRange::new(20171225, 20171225).unwrap();
        let events = EventParser::new(input.as_bytes(), range)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "Xmas");
    }
}
