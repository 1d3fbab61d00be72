use window_date_core::model::{parse_date, DaysPerSlice};
use window_date_core::{version, SliceError};

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn parse_date_accepts_iso_days() {
    let date = parse_date("1970-01-31").expect("parse");
    assert_eq!(date.to_string(), "1970-01-31");

    // Surrounding whitespace from shell input is tolerated.
    assert_eq!(parse_date(" 2014-08-25 ").expect("parse"), parse_date("2014-08-25").unwrap());
}

#[test]
fn parse_date_rejects_other_formats() {
    for input in ["25/08/2014", "2014-13-01", "2014-02-30", "yesterday", ""] {
        match parse_date(input) {
            Err(SliceError::InvalidDate { input: got }) => assert_eq!(got, input),
            other => panic!("expected InvalidDate for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn days_per_slice_defaults_for_missing_or_zero() {
    assert_eq!(DaysPerSlice::from_arg(None).unwrap().get(), 30);
    assert_eq!(DaysPerSlice::from_arg(Some(0)).unwrap().get(), 30);
    assert_eq!(DaysPerSlice::from_arg(Some(7)).unwrap().get(), 7);

    let custom = DaysPerSlice::new(14).unwrap();
    assert_eq!(DaysPerSlice::resolve(None, custom).unwrap(), custom);
    assert_eq!(DaysPerSlice::resolve(Some(0), custom).unwrap(), custom);
}

#[test]
fn days_per_slice_rejects_negative_and_oversized_widths() {
    let err = DaysPerSlice::from_arg(Some(-1)).unwrap_err();
    assert!(matches!(err, SliceError::InvalidArgument { name: "daysPerSlice", value: -1, .. }));
    assert!(err.to_string().contains("daysPerSlice=-1"));

    assert!(DaysPerSlice::new(i64::from(u32::MAX) + 1).is_err());
}
