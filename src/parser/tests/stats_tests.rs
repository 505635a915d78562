//! Tests for parsing statistics

use crate::error::SkipReason;
use crate::parser::ParseStats;

#[test]
fn test_parse_stats_creation() {
    let stats = ParseStats::new();
    assert_eq!(stats.total_rows, 0);
    assert_eq!(stats.rows_parsed, 0);
    assert_eq!(stats.rows_skipped, 0);
    assert!(stats.errors.is_empty());
    assert_eq!(stats.success_rate(), 0.0);
}

#[test]
fn test_success_rate_calculation() {
    let mut stats = ParseStats::new();
    stats.total_rows = 10;
    stats.rows_parsed = 8;
    stats.record_skip(&SkipReason::UnsupportedCompound {
        pattern: "picrate".to_string(),
    });
    stats.record_error("row 10: bad value".to_string());

    assert_eq!(stats.success_rate(), 80.0);
    assert_eq!(stats.rows_skipped, 2);
    assert_eq!(stats.rows_deliberately_skipped(), 1);
    assert!(!stats.is_successful());
}

#[test]
fn test_merge_accumulates() {
    let reason = SkipReason::UnsupportedCompound {
        pattern: "picrate".to_string(),
    };

    let mut first = ParseStats::new();
    first.files_parsed = 1;
    first.total_rows = 3;
    first.rows_parsed = 2;
    first.entries_emitted = 5;
    first.record_skip(&reason);

    let mut second = ParseStats::new();
    second.files_parsed = 1;
    second.total_rows = 2;
    second.rows_parsed = 2;
    second.entries_emitted = 4;
    second.record_skip(&reason);

    first.merge(second);
    assert_eq!(first.files_parsed, 2);
    assert_eq!(first.total_rows, 5);
    assert_eq!(first.rows_parsed, 4);
    assert_eq!(first.entries_emitted, 9);
    assert_eq!(
        first.skipped_by_reason.get("unsupported compound (picrate)"),
        Some(&2)
    );
    assert!(first.is_successful());
}
