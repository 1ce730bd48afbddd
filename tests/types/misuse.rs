use outcome_rail::MisuseError;
use std::collections::HashSet;
use std::error::Error;

#[test]
fn each_kind_has_a_fixed_message() {
    assert_eq!(MisuseError::ErrorNull.message(), "error payload cannot be absent");
    assert_eq!(MisuseError::ValueButError.message(), "cannot unwrap an error outcome");
    assert_eq!(
        MisuseError::ErrorButNull.message(),
        "cannot call unwrap_error() on a success outcome"
    );
}

#[test]
fn display_matches_message() {
    for kind in MisuseError::ALL {
        assert_eq!(kind.to_string(), kind.message());
    }
}

#[test]
fn kinds_are_distinct() {
    let messages: HashSet<_> = MisuseError::ALL.iter().map(|k| k.message()).collect();
    assert_eq!(messages.len(), 3);
}

#[test]
fn misuse_is_a_std_error_without_source() {
    let err: Box<dyn Error> = Box::new(MisuseError::ValueButError);
    assert!(err.source().is_none());
    assert_eq!(err.to_string(), "cannot unwrap an error outcome");
}

#[test]
#[should_panic(expected = "error payload cannot be absent")]
fn raise_panics_with_message() {
    MisuseError::ErrorNull.raise();
}

#[test]
fn from_message_recovers_each_kind() {
    for kind in MisuseError::ALL {
        assert_eq!(MisuseError::from_message(kind.message()), Some(kind));
    }
    assert_eq!(MisuseError::from_message("cannot unwrap"), None);
}
