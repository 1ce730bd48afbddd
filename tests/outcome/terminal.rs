use outcome_rail::{CallbackPanic, Outcome};
use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, panic_any, AssertUnwindSafe};

struct ExplodingPayload;

impl Drop for ExplodingPayload {
    fn drop(&mut self) {
        panic!("payload drop panicked");
    }
}

#[test]
fn peek_runs_once_on_ok_and_returns_same_outcome() {
    let calls = Cell::new(0);
    let outcome = Outcome::<i32, &str>::ok(9).peek(|x| {
        assert_eq!(*x, 9);
        calls.set(calls.get() + 1);
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(outcome, Outcome::ok(9));
}

#[test]
fn peek_skips_err() {
    let calls = Cell::new(0);
    let outcome = Outcome::<i32, &str>::err("e").peek(|_| calls.set(calls.get() + 1));

    assert_eq!(calls.get(), 0);
    assert_eq!(outcome, Outcome::err("e"));
}

#[test]
fn peek_swallows_panic_without_handler() {
    let outcome = Outcome::<i32, &str>::ok(1).peek(|_| panic!("peek failed"));
    assert_eq!(outcome.unwrap(), 1);
}

#[test]
fn peek_with_forwards_panic_to_handler_once() {
    let seen = RefCell::new(Vec::new());
    let outcome = Outcome::<i32, &str>::ok(1).peek_with(
        |_| panic!("peek failed"),
        |panic| seen.borrow_mut().push(panic.message().to_string()),
    );

    assert_eq!(outcome.unwrap(), 1);
    assert_eq!(*seen.borrow(), ["peek failed"]);
}

#[test]
fn peek_with_does_not_call_handler_without_panic() {
    let handled = Cell::new(false);
    let _ = Outcome::<i32, &str>::ok(1).peek_with(|_| {}, |_| handled.set(true));
    assert!(!handled.get());
}

#[test]
fn peek_with_swallows_handler_panic() {
    let outcome = Outcome::<i32, &str>::ok(2).peek_with(
        |_| panic!("first"),
        |_| panic!("handler failed too"),
    );
    assert_eq!(outcome, Outcome::ok(2));
}

#[test]
fn if_ok_consumes_only_ok() {
    let taken = RefCell::new(None);
    Outcome::<String, &str>::ok("owned".to_string()).if_ok(|v| *taken.borrow_mut() = Some(v));
    assert_eq!(taken.borrow().as_deref(), Some("owned"));

    let calls = Cell::new(0);
    Outcome::<String, &str>::err("e").if_ok(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn if_ok_with_handler_receives_original_payload() {
    #[derive(Debug, PartialEq)]
    struct Timeout(u32);

    let caught = RefCell::new(None);
    Outcome::<i32, &str>::ok(1).if_ok_with(
        |_| std::panic::panic_any(Timeout(30)),
        |panic: CallbackPanic| {
            assert!(panic.is::<Timeout>());
            *caught.borrow_mut() = panic.into_payload().downcast::<Timeout>().ok();
        },
    );

    assert_eq!(caught.into_inner().map(|t| *t), Some(Timeout(30)));
}

#[test]
fn if_ok_with_swallows_handler_panic() {
    Outcome::<i32, &str>::ok(1).if_ok_with(|_| panic!("consumer"), |_| panic!("handler"));
}

#[test]
fn if_err_consumes_only_err() {
    let reported = Cell::new(None);
    Outcome::<i32, &str>::err("quota").if_err(|e| reported.set(Some(e)));
    assert_eq!(reported.get(), Some("quota"));

    let calls = Cell::new(0);
    Outcome::<i32, &str>::ok(1).if_err(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn if_err_swallows_panic_with_and_without_handler() {
    Outcome::<i32, &str>::err("e").if_err(|_| panic!("reporter down"));

    let handled = Cell::new(0);
    Outcome::<i32, &str>::err("e").if_err_with(
        |_| panic!("reporter down"),
        |_| handled.set(handled.get() + 1),
    );
    assert_eq!(handled.get(), 1);

    Outcome::<i32, &str>::err("e").if_err_with(|_| panic!("reporter down"), |_| panic!("again"));
}

#[test]
fn if_present_or_else_runs_exactly_one_branch() {
    let ok_calls = Cell::new(0);
    let err_calls = Cell::new(0);

    Outcome::<i32, &str>::ok(1).if_present_or_else(
        |_| ok_calls.set(ok_calls.get() + 1),
        |_| err_calls.set(err_calls.get() + 1),
    );
    assert_eq!((ok_calls.get(), err_calls.get()), (1, 0));

    Outcome::<i32, &str>::err("e").if_present_or_else(
        |_| ok_calls.set(ok_calls.get() + 1),
        |_| err_calls.set(err_calls.get() + 1),
    );
    assert_eq!((ok_calls.get(), err_calls.get()), (1, 1));
}

#[test]
fn if_present_or_else_routes_panic_from_either_branch() {
    let messages = RefCell::new(Vec::new());

    Outcome::<i32, &str>::ok(1).if_present_or_else_with(
        |v| panic!("ok branch {v}"),
        |_| {},
        |panic| messages.borrow_mut().push(panic.message().to_string()),
    );
    Outcome::<i32, &str>::err("e").if_present_or_else_with(
        |_| {},
        |e| panic!("err branch {e}"),
        |panic| messages.borrow_mut().push(panic.message().to_string()),
    );

    assert_eq!(*messages.borrow(), ["ok branch 1", "err branch e"]);
}

#[test]
fn if_present_or_else_swallows_everything() {
    Outcome::<i32, &str>::ok(1).if_present_or_else(|_| panic!("ok"), |_| panic!("err"));
    Outcome::<i32, &str>::err("e").if_present_or_else_with(
        |_| panic!("ok"),
        |_| panic!("err"),
        |_| panic!("handler"),
    );
}

#[test]
fn terminal_chain_after_transform() {
    let log = RefCell::new(Vec::new());

    Outcome::<i32, String>::ok(20)
        .map_value(|x| x + 1)
        .peek(|x| log.borrow_mut().push(format!("peek {x}")))
        .map_value(|x| x * 2)
        .if_present_or_else(
            |x| log.borrow_mut().push(format!("ok {x}")),
            |e| log.borrow_mut().push(format!("err {e}")),
        );

    assert_eq!(*log.borrow(), ["peek 21", "ok 42"]);
}

#[test]
fn handler_payload_with_panicking_drop_is_contained() {
    let contained = catch_unwind(|| {
        Outcome::<i32, &str>::ok(1).if_ok_with(|_| panic!("c"), |_| panic_any(ExplodingPayload));
    });
    assert!(contained.is_ok(), "payload drop escaped if_ok_with");
}

#[test]
fn callback_payload_with_panicking_drop_is_contained() {
    let contained = catch_unwind(|| {
        Outcome::<i32, &str>::ok(1).if_ok(|_| panic_any(ExplodingPayload));
        Outcome::<i32, &str>::err("e").if_err_with(|_| panic_any(ExplodingPayload), |_| {});
        Outcome::<i32, &str>::ok(1).if_present_or_else_with(
            |_| panic_any(ExplodingPayload),
            |_| {},
            |panic| drop(panic),
        );
    });
    assert!(contained.is_ok(), "payload drop escaped a terminal combinator");
}

#[test]
fn peek_with_payload_with_panicking_drop_is_contained() {
    let handled = Cell::new(false);
    let contained = catch_unwind(AssertUnwindSafe(|| {
        Outcome::<i32, &str>::ok(4).peek_with(
            |_| panic_any(ExplodingPayload),
            |panic| {
                handled.set(panic.is::<ExplodingPayload>());
                drop(panic);
            },
        )
    }));

    assert_eq!(contained.ok(), Some(Outcome::ok(4)));
    assert!(handled.get());
}
