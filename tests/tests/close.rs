use tastegap::{driver::Memory, run_and_close};
use tests::{city, test_config, ConnectionOp, LoggingConnection};

#[tokio::test]
async fn connection_is_closed_after_a_successful_run() {
    let conn = LoggingConnection::new(Memory::from_restaurants(&city()));
    let log = conn.log();

    let report = run_and_close(Box::new(conn), &test_config(1)).await.unwrap();

    assert_eq!(report.cuisine.cuisine(), "Pizza");
    assert!(log.closed());
    assert_eq!(
        log.ops()
            .iter()
            .filter(|op| **op == ConnectionOp::Close)
            .count(),
        1
    );
}

#[tokio::test]
async fn connection_is_closed_after_a_failed_run() {
    let conn = LoggingConnection::new(Memory::default());
    let log = conn.log();

    let err = run_and_close(Box::new(conn), &test_config(1)).await.unwrap_err();

    assert_eq!(err.to_string(), "cuisine popularity stage: dataset is empty");
    assert!(log.closed());
}
