use super::*;

#[test]
fn request_ids_are_unique_per_exchange() {
    let first = next_request_id();
    let second = next_request_id();
    let third = next_request_id();

    assert!(first < second && second < third);
}

#[test]
fn matching_correlation_is_accepted() {
    assert!(check_correlation(42, 42).is_ok());
}

#[test]
fn mismatched_correlation_is_refused() {
    let err = check_correlation(42, 43).expect_err("mismatched ids must be refused");
    assert!(err.to_string().contains("correlation mismatch"));
}
