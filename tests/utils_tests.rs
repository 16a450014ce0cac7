//! Tests for utils module functionality.

use std::time::Duration;

use tagline::utils::format_elapsed;

#[test]
fn test_format_elapsed_zero() {
    assert_eq!(format_elapsed(Duration::ZERO), "00:00");
    assert_eq!(format_elapsed(Duration::from_millis(999)), "00:00");
}

#[test]
fn test_format_elapsed_trims_leading_fields() {
    let cases = [
        (1, "0:01"),
        (59, "0:59"),
        (75, "1:15"),
        (600, "10:00"),
        (3599, "59:59"),
        (3600, "1:00:00"),
        (3661, "1:01:01"),
        (36_000, "10:00:00"),
    ];
    for (secs, expected) in cases {
        assert_eq!(format_elapsed(Duration::from_secs(secs)), expected, "{secs}s");
    }
}

#[test]
fn test_format_elapsed_ignores_fractions() {
    assert_eq!(format_elapsed(Duration::from_millis(75_900)), "1:15");
}
