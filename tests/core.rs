// tests/core.rs
//
// Date and number helpers, CSV round trips through the export writer.
use chrono::NaiveDate;

use challenge_tracker::core::dates::{last_full_week_monday, parse_date, serial_to_ymd, to_ymd};
use challenge_tracker::core::sanitize::{normalize_key, parse_finite, parse_num};
use challenge_tracker::csv::{Delim, parse_rows, rows_to_string};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn date_shapes() {
    let want = Some(ymd(2025, 3, 3));
    assert_eq!(parse_date("2025-03-03"), want);
    assert_eq!(parse_date("2025-03-03T05:00:00.000Z"), want);
    assert_eq!(parse_date("3/3/2025"), want);
    assert_eq!(parse_date(" 03/03/2025 "), want);
    assert_eq!(parse_date(""), None);
    assert_eq!(to_ymd("garbage"), "");
    assert_eq!(serial_to_ymd(45719.5), "2025-03-03");
}

#[test]
fn last_full_week() {
    // Wed 2025-03-12 → Mon 2025-03-03
    assert_eq!(last_full_week_monday(ymd(2025, 3, 12)), ymd(2025, 3, 3));
    assert_eq!(last_full_week_monday(ymd(2025, 3, 9)), ymd(2025, 2, 24));
}

#[test]
fn numbers() {
    assert_eq!(parse_num("12.5 pts"), Some(12.5));
    assert_eq!(parse_num("  -3"), Some(-3.0));
    assert_eq!(parse_num("1e3"), Some(1000.0));
    assert_eq!(parse_num("2e"), Some(2.0));
    assert_eq!(parse_num("."), None);
    assert_eq!(parse_num("abc"), None);
    assert_eq!(parse_finite("1e999"), None);
}

#[test]
fn keys() {
    assert_eq!(normalize_key(" Starting Date\r"), "startingdate");
    assert_eq!(normalize_key("T1_Score"), "t1_score");
}

#[test]
fn export_quotes_only_when_needed() {
    let headers = vec!["Team".to_string(), "Note".to_string()];
    let rows = vec![vec!["AMC".to_string(), "a, \"b\"".to_string()]];
    let csv = rows_to_string(Some(&headers[..]), &rows, Delim::Csv);
    assert_eq!(csv, "Team,Note\nAMC,\"a, \"\"b\"\"\"\n");

    let back = parse_rows(&csv, ',');
    assert_eq!(back[1], rows[0]);

    let tsv = rows_to_string(None, &rows, Delim::Tsv);
    assert_eq!(tsv, "AMC\t\"a, \"\"b\"\"\"\n");
}

#[test]
fn huge_serials_are_rejected() {
    assert_eq!(serial_to_ymd(-1e300), "");
    assert_eq!(serial_to_ymd(1e12), "");
    assert_eq!(serial_to_ymd(f64::NAN), "");
}
