/// Composition root tests
use std::collections::HashMap;
use tierboard_lib::modules::catalog::GameRepository;
use tierboard_lib::shared::config::{AppConfig, StorageBackend};
use tierboard_lib::shared::errors::ErrorKind;
use uuid::Uuid;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, tierboard_lib::shared::AppError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[tokio::test]
async fn bootstrap_without_database_url_uses_in_process_stores() {
    let config = config_from(&[("LOG_LEVEL", "warn")]).unwrap();
    assert_eq!(config.storage, StorageBackend::InMemory);

    let services = tierboard_lib::bootstrap(&config).await.unwrap();

    let id = services
        .ranking
        .create_tier_list(Uuid::new_v4(), Some("Smoke".to_string()), None)
        .await
        .unwrap();
    assert_eq!(
        services.ranking.get_tier_list_by_id(id).await.unwrap().title,
        "Smoke"
    );
    // The in-process catalog starts empty
    assert!(!services.catalog.exists(1).await.unwrap());
}

#[test]
fn malformed_database_url_is_rejected() {
    let err = config_from(&[("DATABASE_URL", "mysql://localhost/games")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
