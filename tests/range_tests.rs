use chrono::NaiveDate;
use rhabit::errors::AppError;
use rhabit::export::range::parse_range;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_single_periods() {
    assert_eq!(parse_range("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
    assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_range("2025-02").unwrap(), (d(2025, 2, 1), d(2025, 2, 28)));
    assert_eq!(parse_range("2025-12").unwrap(), (d(2025, 12, 1), d(2025, 12, 31)));
    assert_eq!(parse_range("2025-07-04").unwrap(), (d(2025, 7, 4), d(2025, 7, 4)));
}

#[test]
fn test_intervals() {
    assert_eq!(parse_range("2023:2024").unwrap(), (d(2023, 1, 1), d(2024, 12, 31)));
    assert_eq!(parse_range("2025-01:2025-03").unwrap(), (d(2025, 1, 1), d(2025, 3, 31)));
    assert_eq!(
        parse_range("2025-01-10:2025-01-20").unwrap(),
        (d(2025, 1, 10), d(2025, 1, 20))
    );
}

#[test]
fn test_invalid_ranges() {
    for bad in ["25", "2025-13", "2025-02-30", "2025:2025-01", "2025-03:2025-01", "abcd"] {
        let err = parse_range(bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(_)), "{bad} should be rejected");
    }
}
