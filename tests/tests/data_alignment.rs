use tastegap::stage;
use tests::{row, ScriptedConnection};

#[tokio::test]
async fn cuisine_count_for_unknown_borough() {
    let conn = ScriptedConnection {
        distinct: vec!["Bronx".into(), "Queens".into()],
        unfiltered: vec![row("Bronx", 4), row("Queens", 2)],
        filtered: vec![row("Bronx", 1), row("Staten Island", 1)],
        ..Default::default()
    };

    let err = stage::borough_deficit(&conn, "Thai").await.unwrap_err();

    assert!(err.is_data_alignment());
    assert_eq!(
        err.to_string(),
        "data alignment: borough `Staten Island` is missing from the all-restaurants grouping"
    );
}

#[tokio::test]
async fn distinct_borough_missing_from_totals() {
    let conn = ScriptedConnection {
        distinct: vec!["Bronx".into(), "Queens".into()],
        unfiltered: vec![row("Bronx", 4)],
        filtered: vec![row("Bronx", 1)],
        ..Default::default()
    };

    let err = stage::borough_deficit(&conn, "Thai").await.unwrap_err();

    assert!(err.is_data_alignment());
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn more_cuisine_restaurants_than_restaurants() {
    let conn = ScriptedConnection {
        distinct: vec!["Bronx".into()],
        unfiltered: vec![row("Bronx", 2)],
        filtered: vec![row("Bronx", 3)],
        ..Default::default()
    };

    let err = stage::borough_deficit(&conn, "Thai").await.unwrap_err();

    assert!(err.is_data_alignment());
    assert_eq!(
        err.to_string(),
        "data alignment: borough `Bronx` has 3 restaurants of the cuisine but only 2 in total"
    );
}

#[tokio::test]
async fn consistent_results_are_accepted() {
    let conn = ScriptedConnection {
        distinct: vec!["Queens".into(), "Bronx".into()],
        unfiltered: vec![row("Queens", 2), row("Bronx", 4)],
        filtered: vec![row("Queens", 1)],
        ..Default::default()
    };

    let deficit = stage::borough_deficit(&conn, "Thai").await.unwrap();

    assert_eq!(deficit.borough(), "Bronx");
    assert_eq!(deficit.percentage(), 0.0);
}
