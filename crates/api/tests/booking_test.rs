mod test_utils;

use std::sync::atomic::{AtomicUsize, Ordering};

use mockall::predicate;
use pretty_assertions::assert_eq;
use slotbook_core::errors::BookingError;
use slotbook_db::repositories::booking::BookOutcome;
use uuid::Uuid;

use test_utils::{book_request, book_slot_flow, booked_slot, sample_date, sample_time, TestContext};

#[tokio::test]
async fn test_book_slot_success_echoes_confirmation_data() {
    let mut ctx = TestContext::new();
    let slot_id = Uuid::new_v4();

    ctx.booking_repo
        .expect_book_slot()
        .with(
            predicate::eq(slot_id),
            predicate::eq("Kovács Anna".to_string()),
            predicate::eq("+36 30 111 2233".to_string()),
            predicate::eq("kovacs.anna@email.hu".to_string()),
        )
        .times(1)
        .returning(move |id, _, _, _| Ok(BookOutcome::Booked(booked_slot(id))));

    let response = book_slot_flow(&mut ctx, book_request(slot_id))
        .await
        .expect("booking should succeed");

    assert_eq!(response.ok, true);
    assert_eq!(response.slot_id, slot_id);
    assert_eq!(response.date, sample_date());
    assert_eq!(response.time, sample_time());
    assert_eq!(response.booking_name, "Kovács Anna");
    assert_eq!(response.phone, "+36 30 111 2233");
    assert_eq!(response.email, "kovacs.anna@email.hu");
}

#[tokio::test]
async fn test_book_slot_conflict_when_no_longer_free() {
    let mut ctx = TestContext::new();
    let slot_id = Uuid::new_v4();

    ctx.booking_repo
        .expect_book_slot()
        .returning(|_, _, _, _| Ok(BookOutcome::Unavailable));

    let result = book_slot_flow(&mut ctx, book_request(slot_id)).await;

    match result.unwrap_err().0 {
        BookingError::Conflict(_) => {}
        e => panic!("Expected Conflict error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_book_slot_unknown_id_is_not_found() {
    let mut ctx = TestContext::new();
    let slot_id = Uuid::new_v4();

    ctx.booking_repo
        .expect_book_slot()
        .returning(|_, _, _, _| Ok(BookOutcome::NotFound));

    let result = book_slot_flow(&mut ctx, book_request(slot_id)).await;

    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_invalid_phone_never_reaches_the_store() {
    let mut ctx = TestContext::new();

    // The transition must not be attempted for malformed input
    ctx.booking_repo.expect_book_slot().times(0);

    let mut request = book_request(Uuid::new_v4());
    request.phone = "1234".to_string();

    let result = book_slot_flow(&mut ctx, request).await;

    match result.unwrap_err().0 {
        BookingError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_invalid_email_never_reaches_the_store() {
    let mut ctx = TestContext::new();

    ctx.booking_repo.expect_book_slot().times(0);

    let mut request = book_request(Uuid::new_v4());
    request.email = "not-an-email".to_string();

    let result = book_slot_flow(&mut ctx, request).await;

    match result.unwrap_err().0 {
        BookingError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_two_attempts_on_one_slot_yield_one_winner() {
    let mut ctx = TestContext::new();
    let slot_id = Uuid::new_v4();

    // The store serializes claims on a slot: the first conditional update
    // wins, the second sees the slot already booked.
    let claims = AtomicUsize::new(0);
    ctx.booking_repo
        .expect_book_slot()
        .times(2)
        .returning(move |id, _, _, _| {
            if claims.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(BookOutcome::Booked(booked_slot(id)))
            } else {
                Ok(BookOutcome::Unavailable)
            }
        });

    let mut request_a = book_request(slot_id);
    request_a.booking_name = "Client A".to_string();
    let mut request_b = book_request(slot_id);
    request_b.booking_name = "Client B".to_string();

    let result_a = book_slot_flow(&mut ctx, request_a).await;
    let result_b = book_slot_flow(&mut ctx, request_b).await;

    // Exactly one success, and the loser observes a conflict
    assert!(result_a.is_ok());
    assert!(result_b.is_err());
    let winner = result_a.unwrap();
    assert_eq!(winner.booking_name, "Client A");
    match result_b.unwrap_err().0 {
        BookingError::Conflict(_) => {}
        e => panic!("Expected Conflict error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_retrying_a_lost_claim_keeps_failing_the_same_way() {
    let mut ctx = TestContext::new();
    let slot_id = Uuid::new_v4();

    ctx.booking_repo
        .expect_book_slot()
        .times(2)
        .returning(|_, _, _, _| Ok(BookOutcome::Unavailable));

    let first = book_slot_flow(&mut ctx, book_request(slot_id)).await;
    let second = book_slot_flow(&mut ctx, book_request(slot_id)).await;

    for result in [first, second] {
        match result.unwrap_err().0 {
            BookingError::Conflict(_) => {}
            e => panic!("Expected Conflict error, got: {:?}", e),
        }
    }
}

#[tokio::test]
async fn test_store_failure_surfaces_as_database_error() {
    let mut ctx = TestContext::new();

    ctx.booking_repo
        .expect_book_slot()
        .returning(|_, _, _, _| Err(eyre::eyre!("connection refused")));

    let result = book_slot_flow(&mut ctx, book_request(Uuid::new_v4())).await;

    match result.unwrap_err().0 {
        BookingError::Database(_) => {}
        e => panic!("Expected Database error, got: {:?}", e),
    }
}
