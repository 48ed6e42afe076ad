//! Property-based tests for version parsing

use proptest::prelude::*;
use semver_parse::{parse, Field, MalformedReason};

fn prerelease_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<u64>().prop_map(|n| n.to_string()),
        "[1-9][0-9]{19,30}",
        "[A-Za-z-][0-9A-Za-z-]{0,8}",
        "[0-9]{1,3}[A-Za-z-][0-9A-Za-z-]{0,4}",
    ]
}

fn build_identifier() -> impl Strategy<Value = String> {
    "[0-9A-Za-z-]{1,8}"
}

fn version_string() -> impl Strategy<Value = String> {
    (
        any::<u64>(),
        any::<u64>(),
        any::<u64>(),
        prop::collection::vec(prerelease_identifier(), 0..4),
        prop::collection::vec(build_identifier(), 0..4),
    )
        .prop_map(|(major, minor, patch, pre, build)| {
            let mut version = format!("{}.{}.{}", major, minor, patch);
            if !pre.is_empty() {
                version.push('-');
                version.push_str(&pre.join("."));
            }
            if !build.is_empty() {
                version.push('+');
                version.push_str(&build.join("."));
            }
            version
        })
}

proptest! {
    #[test]
    fn test_every_numeric_triple_parses(
        major in any::<u64>(),
        minor in any::<u64>(),
        patch in any::<u64>()
    ) {
        let version = parse(&format!("{}.{}.{}", major, minor, patch)).unwrap();
        prop_assert_eq!(version.major(), major);
        prop_assert_eq!(version.minor(), minor);
        prop_assert_eq!(version.patch(), patch);
        prop_assert!(version.prerelease().is_empty());
        prop_assert!(version.build().is_empty());
    }

    #[test]
    fn test_display_round_trips(input in version_string()) {
        let version = parse(&input).unwrap();
        let rendered = version.to_string();
        prop_assert_eq!(&rendered, &input);
        prop_assert_eq!(parse(&rendered).unwrap(), version);
    }

    #[test]
    fn test_leading_zero_core_rejected(
        value in 0u64..1_000_000,
        zeros in 1usize..4,
        position in 0usize..3
    ) {
        let mut segments = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        segments[position] = format!("{}{}", "0".repeat(zeros), value);
        let err = parse(&segments.join(".")).unwrap_err();
        prop_assert_eq!(err.reason(), &MalformedReason::LeadingZero(Field::ALL[position]));
    }

    #[test]
    fn test_arbitrary_input_never_panics(input in any::<String>()) {
        if let Err(err) = parse(&input) {
            prop_assert_eq!(err.input(), input.as_str());
        }
    }
}
