#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── format_currency ───────────────────────────────────────────

#[test]
fn test_format_currency_basic() {
    assert_eq!(format_currency(dec!(1234.5)), "$1,234.50");
}

#[test]
fn test_format_currency_no_commas() {
    assert_eq!(format_currency(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_currency_zero() {
    assert_eq!(format_currency(dec!(0)), "$0.00");
}

#[test]
fn test_format_currency_negative() {
    assert_eq!(format_currency(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_currency_millions() {
    assert_eq!(format_currency(dec!(1234567.89)), "$1,234,567.89");
    assert_eq!(format_currency(dec!(10000000)), "$10,000,000.00");
}

#[test]
fn test_format_currency_rounds_to_cents() {
    assert_eq!(format_currency(dec!(2.345)), "$2.34");
    assert_eq!(format_currency(dec!(2.355)), "$2.36");
}

#[test]
fn test_format_currency_tiny_negative_is_zero() {
    assert_eq!(format_currency(dec!(-0.001)), "$0.00");
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands("1"), "1");
    assert_eq!(group_thousands("123"), "123");
    assert_eq!(group_thousands("1234"), "1,234");
    assert_eq!(group_thousands("123456"), "123,456");
    assert_eq!(group_thousands("1234567"), "1,234,567");
}

#[test]
fn test_format_currency_max_value() {
    assert_eq!(
        format_currency(Decimal::MAX),
        "$79,228,162,514,264,337,593,543,950,335.00"
    );
}

// ── format_percentage ─────────────────────────────────────────

#[test]
fn test_format_percentage() {
    assert_eq!(format_percentage(dec!(57.5), 1), "57.5%");
    assert_eq!(format_percentage(dec!(100), 1), "100.0%");
    assert_eq!(format_percentage(dec!(33.3333), 0), "33%");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
    assert_eq!(truncate("a", 1), "a");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}
