use pretty_assertions::assert_eq;
use std::time::Duration;
use tastegap::{driver::Memory, run, Error, RetryConfig};
use tests::{city, test_config, FlakyConnection, SlowConnection};

#[tokio::test(start_paused = true)]
async fn transient_failures_are_retried() {
    let conn = FlakyConnection::new(Memory::from_restaurants(&city()), 2);

    let report = run(&conn, &test_config(3)).await.unwrap();

    assert_eq!(report.cuisine.cuisine(), "Pizza");
    assert_eq!(conn.calls(), 2 + 9);
}

#[tokio::test(start_paused = true)]
async fn gives_up_after_the_last_attempt() {
    let conn = FlakyConnection::new(Memory::from_restaurants(&city()), 10);

    let err = run(&conn, &test_config(3)).await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(
        err.to_string(),
        "cuisine popularity stage: connection error: reset by peer"
    );
    assert_eq!(conn.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn disabled_retries_fail_on_first_error() {
    let conn = FlakyConnection::new(Memory::from_restaurants(&city()), 1);
    let config = test_config(3).retry(RetryConfig::none());

    let err = run(&conn, &config).await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(conn.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn slow_queries_time_out() {
    let conn = SlowConnection::new(Memory::from_restaurants(&city()), Duration::from_secs(5));

    let err = run(&conn, &test_config(2)).await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(
        err.to_string(),
        "cuisine popularity stage: query timed out after 1s"
    );
}

#[tokio::test(start_paused = true)]
async fn queries_within_the_timeout_succeed() {
    let conn = SlowConnection::new(
        Memory::from_restaurants(&city()),
        Duration::from_millis(50),
    );

    let report = run(&conn, &test_config(1)).await.unwrap();

    assert_eq!(report.zipcode.zipcode(), "11201");
}

#[tokio::test(start_paused = true)]
async fn store_side_failures_are_not_retried() {
    let conn = FlakyConnection::with_error(Memory::from_restaurants(&city()), 1, || {
        Error::driver_operation_failed(std::io::Error::other("unknown operator: $avgg"))
    });

    let err = run(&conn, &test_config(3)).await.unwrap_err();

    assert!(!err.is_retryable());
    assert_eq!(
        err.to_string(),
        "cuisine popularity stage: driver operation failed: unknown operator: $avgg"
    );
    assert_eq!(conn.calls(), 1);
}
