use chrono::{Days, NaiveDate};
use window_date_core::model::{epoch_day, DateRank, DaysPerSlice, SliceId};
use window_date_core::slicer::{date_range, slice_offset, slice_ranks, slices_between};
use window_date_core::SliceError;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

fn width(days: i64) -> DaysPerSlice {
    DaysPerSlice::new(days).expect("valid width")
}

#[test]
fn epoch_day_counts_from_1970() {
    assert_eq!(epoch_day(date("1970-01-01")), 0);
    assert_eq!(epoch_day(date("1970-01-31")), 30);
    assert_eq!(epoch_day(date("1969-12-31")), -1);
    assert_eq!(epoch_day(date("2000-01-01")), 10_957);
}

#[test]
fn slice_offset_matches_thirty_day_boundaries() {
    let w = width(30);
    assert_eq!(slice_offset(date("1970-01-01"), w), SliceId(0));
    assert_eq!(slice_offset(date("1970-01-30"), w), SliceId(0));
    assert_eq!(slice_offset(date("1970-01-31"), w), SliceId(1));
    assert_eq!(slice_offset(date("1970-03-02"), w), SliceId(2));
}

#[test]
fn slice_offset_floors_before_the_epoch() {
    let w = width(30);
    assert_eq!(slice_offset(date("1969-12-31"), w), SliceId(-1));
    assert_eq!(slice_offset(date("1969-12-02"), w), SliceId(-1));
    assert_eq!(slice_offset(date("1969-12-01"), w), SliceId(-2));

    // One-day slices are just the epoch day.
    assert_eq!(slice_offset(date("1969-12-31"), width(1)), SliceId(-1));
}

#[test]
fn slice_offset_is_monotonic_in_date() {
    for days in [1, 7, 30, 365] {
        let w = width(days);
        let mut cursor = date("1969-06-01");
        let mut previous = slice_offset(cursor, w);
        for _ in 0..800 {
            cursor = cursor.succ_opt().unwrap();
            let current = slice_offset(cursor, w);
            assert!(current >= previous, "slice went backwards at {cursor} width {days}");
            assert!(current.value() - previous.value() <= 1, "slice skipped at {cursor}");
            previous = current;
        }
    }
}

#[test]
fn date_range_of_slice_zero() {
    let range = date_range(SliceId(0), width(30)).expect("range");
    assert_eq!(range.start, date("1970-01-01"));
    assert_eq!(range.end, date("1970-01-31"));
    assert_eq!(range.days(), 30);
    assert_eq!(range.to_string(), "1970-01-01..1970-01-31");
}

#[test]
fn date_range_round_trips_through_slice_offset() {
    for days in [1, 5, 30, 90] {
        let w = width(days);
        for slice in -40..40 {
            let range = date_range(SliceId(slice), w).expect("range");
            assert_eq!(slice_offset(range.start, w), SliceId(slice));
            assert_eq!(slice_offset(range.end, w), SliceId(slice + 1));
            assert_eq!(range.days(), days);

            let last_day = range.end.checked_sub_days(Days::new(1)).unwrap();
            assert!(range.contains(range.start));
            assert!(range.contains(last_day));
            assert!(!range.contains(range.end));
        }
    }
}

#[test]
fn date_range_rejects_slices_outside_the_calendar() {
    let err = date_range(SliceId(i64::MAX), width(30)).unwrap_err();
    assert!(matches!(err, SliceError::DateOutOfRange { .. }));

    let err = date_range(SliceId(100_000_000), width(30)).unwrap_err();
    assert!(matches!(err, SliceError::DateOutOfRange { .. }));
}

#[test]
fn slices_between_lists_every_slice_inclusive() {
    let slices = slices_between(date("1970-01-01"), date("1970-03-02"), width(30));
    assert_eq!(slices, vec![SliceId(0), SliceId(1), SliceId(2)]);

    let single = slices_between(date("1970-01-05"), date("1970-01-05"), width(30));
    assert_eq!(single, vec![SliceId(0)]);

    let across_epoch = slices_between(date("1969-12-01"), date("1970-01-31"), width(30));
    assert_eq!(across_epoch, vec![SliceId(-2), SliceId(-1), SliceId(0), SliceId(1)]);
}

#[test]
fn slices_between_is_contiguous_with_expected_length() {
    let w = width(7);
    let start = date("2014-08-25");
    for offset in [0u64, 1, 6, 7, 30, 400] {
        let end = start.checked_add_days(Days::new(offset)).unwrap();
        let slices = slices_between(start, end, w);
        let first = slice_offset(start, w).value();
        let last = slice_offset(end, w).value();
        assert_eq!(slices.len() as i64, last - first + 1);
        assert_eq!(slices.first(), Some(&SliceId(first)));
        assert!(slices.windows(2).all(|pair| pair[1].value() == pair[0].value() + 1));
    }
}

#[test]
fn slices_between_is_empty_when_start_after_end() {
    let slices = slices_between(date("1970-03-02"), date("1970-01-01"), width(30));
    assert!(slices.is_empty());
}

#[test]
fn slice_ranks_groups_in_date_order() {
    let ranks: DateRank = [
        (date("1970-02-01"), 7),
        (date("1970-01-01"), 3),
        (date("1970-01-30"), 5),
        (date("1970-01-31"), 11),
        (date("1969-12-31"), 1),
    ]
    .into_iter()
    .collect();

    let file = slice_ranks(&ranks, width(30));
    assert_eq!(file.len(), 3);
    assert_eq!(file.get(SliceId(-1)), Some(&[1][..]));
    assert_eq!(file.get(SliceId(0)), Some(&[3, 5][..]));
    assert_eq!(file.get(SliceId(1)), Some(&[11, 7][..]));
    assert_eq!(file.total_ranks(), ranks.len());
    assert_eq!(file.slice_ids(), vec![SliceId(-1), SliceId(0), SliceId(1)]);
}

#[test]
fn slice_ranks_of_empty_input_is_empty() {
    let file = slice_ranks(&DateRank::new(), width(30));
    assert!(file.is_empty());
    assert_eq!(file.total_ranks(), 0);
}
