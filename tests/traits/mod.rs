use crate::common::{PathError, Timeout};
use catch_rail::traits::{ErrorShape, ResultExt};
use catch_rail::{AnyError, CatchChain, MessageError};

#[test]
fn generic_shape_accepts_everything() {
    assert!(<AnyError as ErrorShape>::matches(&AnyError::msg("a")));
    assert!(<AnyError as ErrorShape>::matches(&AnyError::new(Timeout { millis: 1 })));
}

#[test]
fn concrete_shape_is_exact() {
    let path = AnyError::new(PathError::new("open", "/", AnyError::new(Timeout { millis: 1 })));

    assert!(<PathError as ErrorShape>::matches(&path));
    // The wrapped cause is not consulted.
    assert!(!<Timeout as ErrorShape>::matches(&path));
}

#[test]
fn shape_conversion_round_trips_on_mismatch() {
    let err = AnyError::new(Timeout { millis: 8 });

    let err = <MessageError as ErrorShape>::from_error(err).unwrap_err();
    let timeout = <Timeout as ErrorShape>::from_error(err).unwrap();
    assert_eq!(timeout, Timeout { millis: 8 });
}

#[test]
fn shape_names_identify_the_type() {
    assert!(<Timeout as ErrorShape>::shape_name().ends_with("Timeout"));
    assert!(<AnyError as ErrorShape>::shape_name().ends_with("AnyError"));
}

#[test]
fn catch_with_passes_ok_values_through() {
    let mut chain = CatchChain::new().catch(|_: AnyError| -> Option<AnyError> {
        panic!("Ok values never fire the chain")
    });

    let ok: Result<&str, Timeout> = Ok("value");
    assert_eq!(ok.catch_with(&mut chain).unwrap(), Some("value"));
}

#[test]
fn catch_with_maps_suppression_to_ok_none() {
    let mut chain = CatchChain::new().catch(|_: Timeout| None);

    let failed: Result<u32, Timeout> = Err(Timeout { millis: 1 });
    assert_eq!(failed.catch_with(&mut chain).unwrap(), None);
}

#[test]
fn catch_with_returns_the_transformed_error() {
    let mut chain =
        CatchChain::new().catch(|e: Timeout| Some(AnyError::msg(format!("late by {}", e.millis))));

    let failed: Result<u32, Timeout> = Err(Timeout { millis: 4 });
    let err = failed.catch_with(&mut chain).unwrap_err();
    assert_eq!(err.to_string(), "late by 4");
}

#[test]
fn catching_starts_a_bound_chain() {
    let failed: Result<(), Timeout> = Err(Timeout { millis: 2 });

    let chain = failed.catching().catch(|e: Timeout| Some(e.into()));
    assert!(chain.error().is_some_and(|e| e.is::<Timeout>()));

    let ok: Result<(), Timeout> = Ok(());
    assert!(ok.catching().is_suppressed());
}
