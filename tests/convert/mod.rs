use outcome_rail::convert::{
    option_to_outcome, outcome_to_option, outcome_to_result, result_to_outcome,
};
use outcome_rail::Outcome;

#[test]
fn result_and_outcome_convert_both_ways() {
    let ok = result_to_outcome(Ok::<i32, &str>(1));
    assert_eq!(ok, Outcome::ok(1));
    assert_eq!(outcome_to_result(ok), Ok(1));

    let err = result_to_outcome(Err::<i32, &str>("bad"));
    assert_eq!(err, Outcome::err("bad"));
    assert_eq!(outcome_to_result(err), Err("bad"));
}

#[test]
fn from_impls_mirror_helpers() {
    let outcome: Outcome<u8, &str> = Ok(3).into();
    assert_eq!(outcome, Outcome::ok(3));

    let result: Result<u8, &str> = Outcome::err("x").into();
    assert_eq!(result, Err("x"));
}

#[test]
fn option_conversions() {
    assert_eq!(option_to_outcome(Some(1), "none"), Outcome::ok(1));
    assert_eq!(option_to_outcome(None::<i32>, "none"), Outcome::err("none"));
    assert_eq!(outcome_to_option(Outcome::<i32, &str>::err("x")), None);
}
