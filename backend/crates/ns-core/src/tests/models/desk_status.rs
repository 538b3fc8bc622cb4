use crate::DeskStatus;

use std::str::FromStr;

#[test]
fn test_desk_status_as_str() {
    assert_eq!(DeskStatus::Available.as_str(), "available");
    assert_eq!(DeskStatus::Unavailable.as_str(), "unavailable");
}

#[test]
fn test_desk_status_from_str() {
    assert_eq!(
        DeskStatus::from_str("available").unwrap(),
        DeskStatus::Available
    );
    assert_eq!(
        DeskStatus::from_str("unavailable").unwrap(),
        DeskStatus::Unavailable
    );
    assert!(DeskStatus::from_str("booked").is_err());
}

#[test]
fn test_desk_status_default() {
    assert_eq!(DeskStatus::default(), DeskStatus::Available);
}
