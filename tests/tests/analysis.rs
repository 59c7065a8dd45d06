use pretty_assertions::assert_eq;
use tastegap::{driver::Memory, run, Restaurant};
use tests::{city, test_config, LoggingConnection};

#[tokio::test]
async fn city_report() {
    let memory = Memory::from_restaurants(&city());

    let report = run(&memory, &test_config(1)).await.unwrap();

    assert_eq!(report.cuisine.cuisine(), "Pizza");
    assert_eq!(report.borough.borough(), "Brooklyn");
    assert_eq!(report.zipcode.zipcode(), "11201");
    assert_eq!(report.restaurants.names(), ["Di Fara"]);

    assert_eq!(
        report.lines(),
        [
            "1. The kind of cuisine with more restaurants in the city is Pizza (with a 54.55 percentage of restaurants of the city)",
            "2. The borough with smaller ratio of restaurants of this kind of cuisine is Brooklyn (with a 38.46 percentage of restaurants of this kind)",
            "3. The zipcode of the borough with smaller ratio of restaurants of this kind of cuisine is zipcode = 11201 (with a 25.00 percentage of restaurants of this kind)",
            "4. The best three restaurants (of this kind of cuisine) at these zipcode are: Di Fara (with average reviews score of 10.00)",
        ]
    );
}

#[tokio::test]
async fn report_displays_one_line_per_stage() {
    let memory = Memory::from_restaurants(&city());

    let report = run(&memory, &test_config(1)).await.unwrap();
    let text = report.to_string();

    assert_eq!(text.lines().count(), 4);
    assert!(text.ends_with("score of 10.00)\n"));
}

#[tokio::test]
async fn repeated_runs_issue_the_same_queries_and_agree() {
    let conn = LoggingConnection::new(Memory::from_restaurants(&city()));
    let log = conn.log();

    let first = run(&conn, &test_config(1)).await.unwrap();
    let first_ops = log.ops();
    let second = run(&conn, &test_config(1)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first_ops.len(), 9);
    assert_eq!(log.ops()[first_ops.len()..], first_ops[..]);
}

#[tokio::test]
async fn zipcode_without_qualifying_restaurants() {
    let records: Vec<Restaurant> = city()
        .into_iter()
        .map(|mut restaurant| {
            restaurant.grades.truncate(3);
            restaurant
        })
        .collect();
    let memory = Memory::from_restaurants(&records);

    let report = run(&memory, &test_config(1)).await.unwrap();

    assert!(report.restaurants.is_empty());
    assert_eq!(
        report.lines()[3],
        "4. The best three restaurants (of this kind of cuisine) at these zipcode are: none"
    );
}

#[tokio::test]
async fn empty_collection_fails_the_first_stage() {
    let memory = Memory::default();

    let err = run(&memory, &test_config(3)).await.unwrap_err();

    assert!(!err.is_retryable());
    assert_eq!(err.to_string(), "cuisine popularity stage: dataset is empty");
}

#[tokio::test]
async fn restaurants_without_borough_fail_the_second_stage() {
    let memory = Memory::parse(
        r#"
        {"name": "Nameless Slice", "cuisine": "Pizza"}
        {"name": "Corner Slice", "cuisine": "Pizza", "borough": null}
        "#,
    )
    .unwrap();

    let err = run(&memory, &test_config(1)).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "borough deficit stage: no boroughs found in collection"
    );
}

#[tokio::test]
async fn logging_connection_passes_queries_through() {
    let conn = LoggingConnection::new(Memory::from_restaurants(&city()));
    let log = conn.log();
    assert!(log.is_empty());

    run(&conn, &test_config(1)).await.unwrap();

    assert_eq!(log.len(), 9);
    assert_eq!(log.aggregates(), 7);
}
