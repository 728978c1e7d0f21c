use crate::common::{PathError, Timeout};
use catch_rail::{AnyError, CatchChain, MessageError};
use std::cell::{Cell, RefCell};


#[test]
fn catch_handlers_run_in_registration_order() {
    let order = RefCell::new(Vec::new());

    let mut chain = CatchChain::new()
        .catch(|e: AnyError| {
            order.borrow_mut().push(1);
            Some(e)
        })
        .catch(|e: AnyError| {
            order.borrow_mut().push(2);
            Some(e)
        })
        .catch(|e: MessageError| {
            order.borrow_mut().push(3);
            Some(e.into())
        });

    assert!(chain.fire(AnyError::msg("boom")).is_some());
    drop(chain);
    assert_eq!(order.into_inner(), [1, 2, 3]);
}

#[test]
fn suppression_stops_later_catch_handlers() {
    let calls = Cell::new(0);

    let mut chain = CatchChain::new()
        .catch(|e: AnyError| {
            calls.set(calls.get() + 1);
            Some(e)
        })
        .catch(|_: AnyError| {
            calls.set(calls.get() + 1);
            None
        })
        .catch(|e: AnyError| -> Option<AnyError> {
            panic!("handler after suppression must not run: {e}")
        });

    assert!(chain.fire(AnyError::msg("boom")).is_none());
    assert_eq!(calls.get(), 2);
}

#[test]
fn concrete_handler_ignores_other_variants() {
    let mut chain = CatchChain::new()
        .catch(|_: Timeout| -> Option<AnyError> { panic!("not a timeout") })
        .catch(|_: std::io::Error| -> Option<AnyError> { panic!("not an io error") });

    let result = chain.fire(AnyError::msg("plain")).unwrap();
    assert!(result.is::<MessageError>());
}

#[test]
fn generic_handler_sees_every_variant() {
    let seen = RefCell::new(Vec::new());
    let mut chain = CatchChain::new().catch(|e: AnyError| {
        seen.borrow_mut().push(e.to_string());
        Some(e)
    });

    chain.fire(AnyError::msg("plain"));
    chain.fire(Timeout { millis: 5 });
    chain.fire(std::io::Error::other("disk"));
    drop(chain);

    assert_eq!(seen.into_inner(), ["plain", "timed out after 5ms", "disk"]);
}

#[test]
fn replaced_error_is_matched_by_later_handlers() {
    let mut chain = CatchChain::new()
        .catch(|e: MessageError| -> Option<AnyError> {
            assert_eq!(e.message(), "slow");
            Some(Timeout { millis: 30 }.into())
        })
        .catch(|e: MessageError| -> Option<AnyError> {
            panic!("error was replaced, {e} must not match again")
        })
        .catch(|e: Timeout| Some(AnyError::msg(format!("retry after {}", e.millis))));

    let result = chain.fire(AnyError::msg("slow")).unwrap();
    assert_eq!(result.to_string(), "retry after 30");
}

#[test]
fn chain_is_reusable_without_state_leakage() {
    let mut chain = CatchChain::new()
        .catch(|_: Timeout| None)
        .catch(|e: AnyError| Some(AnyError::msg(format!("wrapped({e})"))));

    assert!(chain.fire(Timeout { millis: 1 }).is_none());

    let second = chain.fire(AnyError::msg("first")).unwrap();
    assert_eq!(second.to_string(), "wrapped(first)");

    // The previous result does not leak into the next firing.
    let third = chain.fire(AnyError::msg("second")).unwrap();
    assert_eq!(third.to_string(), "wrapped(second)");
}

#[test]
fn handlers_may_mutate_captured_state() {
    let mut tmp = String::new();

    {
        let mut chain = CatchChain::new()
            .catch(|e: AnyError| {
                tmp.push_str(&e.to_string());
                Some(e)
            })
            .catch(|_: AnyError| None);

        assert!(chain.fire(AnyError::msg("a")).is_none());
        assert!(chain.fire(AnyError::msg("b")).is_none());
    }

    assert_eq!(tmp, "ab");
}

#[test]
fn two_generic_catches_accumulate_text() {
    let tmp = RefCell::new(String::new());

    let mut chain = CatchChain::new()
        .catch(|e: AnyError| {
            tmp.borrow_mut().push_str(&e.to_string());
            Some(e)
        })
        .catch(|e: AnyError| {
            tmp.borrow_mut().push_str(&e.to_string());
            None
        });

    assert!(chain.fire(AnyError::msg("string")).is_none());
    drop(chain);
    assert_eq!(tmp.into_inner(), "stringstring");
}

#[test]
fn path_error_is_unwrapped_to_its_cause() {
    let calls = Cell::new(0);

    let mut chain = CatchChain::new()
        .catch(|e: PathError| {
            calls.set(calls.get() + 1);
            assert_eq!((e.op, e.path), ("open", "/etc/app.toml"));
            Some(e.err)
        })
        .catch(|e: AnyError| {
            calls.set(calls.get() + 1);
            Some(e)
        })
        .catch(|e: AnyError| {
            calls.set(calls.get() + 1);
            Some(e)
        });

    let cause = AnyError::msg("permission denied");
    let result = chain.fire(PathError::new("open", "/etc/app.toml", cause)).unwrap();

    assert!(result.is::<MessageError>());
    assert_eq!(result.to_string(), "permission denied");
    assert_eq!(calls.get(), 3);
}

#[test]
fn path_error_unwrap_then_suppress() {
    let calls = Cell::new(0);

    let mut chain = CatchChain::new()
        .catch(|e: PathError| {
            calls.set(calls.get() + 1);
            Some(e.err)
        })
        .catch(|_: AnyError| {
            calls.set(calls.get() + 1);
            None
        })
        .catch(|_: AnyError| {
            calls.set(calls.get() + 1);
            None
        });

    let result = chain.fire(PathError::new("stat", "/tmp", AnyError::msg("string")));

    assert!(result.is_none());
    assert_eq!(calls.get(), 2);
}

#[test]
fn mixed_scenario_suppresses_and_skips_generic_finally() {
    let count = Cell::new(0);
    let tmp = RefCell::new(String::new());

    let mut chain = CatchChain::new()
        .catch(|_: PathError| -> Option<AnyError> { panic!("string error is not a path error") })
        .finally(|_: &AnyError| count.set(count.get() + 1))
        .catch(|e: AnyError| {
            *tmp.borrow_mut() = e.to_string();
            None
        })
        .finally(|_: &AnyError| count.set(count.get() + 2));

    assert!(chain.fire(AnyError::msg("string")).is_none());
    drop(chain);

    assert_eq!(tmp.into_inner(), "string");
    // An absent error matches no shape, so neither typed finally ran.
    assert_eq!(count.get(), 0);
}

#[test]
fn mixed_scenario_with_propagated_error_runs_both_finally() {
    let count = Cell::new(0);

    let mut chain = CatchChain::new()
        .catch(|_: PathError| -> Option<AnyError> { panic!("string error is not a path error") })
        .finally(|_: &AnyError| count.set(count.get() + 1))
        .catch(|e: AnyError| Some(e))
        .finally(|_: &AnyError| count.set(count.get() + 2));

    assert!(chain.fire(AnyError::msg("string")).is_some());
    assert_eq!(count.get(), 3);
}

#[test]
fn empty_chain_passes_error_through() {
    let mut chain = CatchChain::default();

    let result = chain.fire(Timeout { millis: 9 }).unwrap();
    assert_eq!(result.downcast::<Timeout>().unwrap(), Timeout { millis: 9 });
}
