#![cfg(feature = "serde")]

//! Integration tests for serde support in lazyseq.
//!
//! These tests verify that the control primitives serialize and deserialize
//! with serde_json.

use lazyseq::control::{ControlFlow, Option, Ordering};
use rstest::rstest;

// =============================================================================
// Option Integration Tests
// =============================================================================

#[rstest]
fn test_option_json_roundtrip() {
    let present: Option<i32> = Option::some(42);
    let absent: Option<i32> = Option::none();

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    let restored_present: Option<i32> = serde_json::from_str(&present_json).unwrap();
    let restored_absent: Option<i32> = serde_json::from_str(&absent_json).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

#[rstest]
fn test_option_json_shape() {
    let present: Option<&str> = Option::some("x");
    assert_eq!(serde_json::to_string(&present).unwrap(), r#"{"Some":"x"}"#);
    assert_eq!(serde_json::to_string(&Option::<i32>::none()).unwrap(), r#""None""#);
}

#[rstest]
fn test_nested_option_roundtrip() {
    let nested: Vec<Option<Vec<u8>>> = vec![Option::some(vec![1, 2]), Option::none()];
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Vec<Option<Vec<u8>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

// =============================================================================
// Ordering Integration Tests
// =============================================================================

#[rstest]
#[case(Ordering::Less, r#""Less""#)]
#[case(Ordering::Equal, r#""Equal""#)]
#[case(Ordering::Greater, r#""Greater""#)]
fn test_ordering_json_roundtrip(#[case] ordering: Ordering, #[case] expected: &str) {
    let json = serde_json::to_string(&ordering).unwrap();
    assert_eq!(json, expected);
    let restored: Ordering = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, ordering);
}

// =============================================================================
// ControlFlow Integration Tests
// =============================================================================

#[rstest]
fn test_control_flow_json_roundtrip() {
    let keep_going: ControlFlow<String, u32> = ControlFlow::Continue(3);
    let stop: ControlFlow<String, u32> = ControlFlow::Break("done".to_string());

    let keep_going_json = serde_json::to_string(&keep_going).unwrap();
    let stop_json = serde_json::to_string(&stop).unwrap();

    let restored_keep_going: ControlFlow<String, u32> =
        serde_json::from_str(&keep_going_json).unwrap();
    let restored_stop: ControlFlow<String, u32> = serde_json::from_str(&stop_json).unwrap();

    assert_eq!(keep_going, restored_keep_going);
    assert_eq!(stop, restored_stop);
}
