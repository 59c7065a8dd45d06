use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tastegap::{analyze, connect, Config};
use tests::{city, test_config};

fn dataset_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tastegap-{}-{name}", std::process::id()))
}

#[tokio::test]
async fn analyze_json_array_file() {
    let path = dataset_path("array.json");
    std::fs::write(&path, serde_json::to_string(&city()).unwrap()).unwrap();

    let config = test_config(1).url(format!("memory:{}", path.display()));
    let report = analyze(&config).await.unwrap();

    assert_eq!(report.cuisine.cuisine(), "Pizza");
    assert_eq!(report.restaurants.names(), ["Di Fara"]);

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn analyze_json_lines_file() {
    let path = dataset_path("lines.json");
    let lines: Vec<String> = city()
        .iter()
        .map(|restaurant| serde_json::to_string(restaurant).unwrap())
        .collect();
    std::fs::write(&path, lines.join("\n")).unwrap();

    let config = test_config(1).url(format!("memory:{}", path.display()));
    let report = analyze(&config).await.unwrap();

    assert_eq!(report.borough.borough(), "Brooklyn");

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn empty_memory_url() {
    let err = analyze(&test_config(1)).await.unwrap_err();

    assert!(err.to_string().ends_with("dataset is empty"));
}

#[tokio::test]
async fn missing_dataset_file() {
    let path = dataset_path("missing.json");
    let config = Config::new().url(format!("memory:{}", path.display()));

    let err = connect(&config).await.unwrap_err();

    assert!(err.is_driver_operation_failed());
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = connect(&Config::new().url("postgres://localhost/restaurants"))
        .await
        .unwrap_err();

    assert!(err.is_invalid_connection_url());
}
