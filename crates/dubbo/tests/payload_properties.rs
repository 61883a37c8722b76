//! Property tests for response payload classification over the whole `i32` range.

use dubbo::{PayloadError, ResponsePayloadKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_known_codes_round_trip(code in 0i32..=5) {
        let kind = ResponsePayloadKind::classify(code).unwrap();
        prop_assert_eq!(kind.code(), code);
        prop_assert_eq!(kind.has_attachments(), code >= 3);
    }

    #[test]
    fn prop_unknown_codes_are_rejected_with_code(
        code in any::<i32>().prop_filter("outside wire table", |c| !(0..=5).contains(c))
    ) {
        prop_assert_eq!(
            ResponsePayloadKind::classify(code),
            Err(PayloadError::UnknownPayloadKind { code })
        );
    }
}

#[test]
fn test_exactly_one_shape_predicate_holds_per_kind() {
    for kind in ResponsePayloadKind::ALL {
        let held = [kind.is_exception(), kind.is_value(), kind.is_null_value()]
            .into_iter()
            .filter(|held| *held)
            .count();
        assert_eq!(held, 1, "{kind} matched {held} shapes");
    }
}

#[test]
fn test_codes_are_distinct() {
    let mut codes: Vec<i32> = ResponsePayloadKind::ALL.iter().map(|k| k.code()).collect();
    codes.dedup();
    assert_eq!(codes.len(), ResponsePayloadKind::ALL.len());
}

#[test]
fn test_classification_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                (0..=5)
                    .map(|c| ResponsePayloadKind::classify((c + t) % 6).map(|k| k.code()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let codes = handle.join().unwrap();
        for (c, result) in codes.into_iter().enumerate() {
            assert_eq!(result, Ok(((c + t) % 6) as i32));
        }
    }
}
