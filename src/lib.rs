pub mod modules;
pub mod schema;
pub mod shared;

use std::sync::Arc;

use modules::{
    catalog::{GameRepository, GameRepositoryImpl, InMemoryGameCatalog},
    ranking::{
        InMemoryTierListRepository, RankingService, TierListRepository, TierListRepositoryImpl,
    },
    status::{InMemoryStatusRepository, StatusRepository, StatusRepositoryImpl, StatusService},
};
use shared::{
    config::{redacted_host, AppConfig, StorageBackend},
    errors::AppResult,
    infrastructure::Database,
    utils::{init_logger, LogContext},
};


/// Wired application services, ready to be shared across tasks.
#[derive(Clone)]
pub struct AppServices {
    pub ranking: Arc<RankingService>,
    pub status: Arc<StatusService>,
    pub catalog: Arc<dyn GameRepository>,
}

impl AppServices {
    /// Process-local stores over the given catalog.
    pub fn in_memory(catalog: Arc<dyn GameRepository>) -> Self {
        let tier_list_repo: Arc<dyn TierListRepository> =
            Arc::new(InMemoryTierListRepository::new());
        let status_repo: Arc<dyn StatusRepository> = Arc::new(InMemoryStatusRepository::new());
        Self::wire(tier_list_repo, status_repo, catalog)
    }

    /// PostgreSQL-backed stores sharing one connection pool.
    pub fn postgres(database: Arc<Database>) -> Self {
        let catalog: Arc<dyn GameRepository> =
            Arc::new(GameRepositoryImpl::new(Arc::clone(&database)));
        let tier_list_repo: Arc<dyn TierListRepository> =
            Arc::new(TierListRepositoryImpl::new(Arc::clone(&database)));
        let status_repo: Arc<dyn StatusRepository> = Arc::new(StatusRepositoryImpl::new(database));
        Self::wire(tier_list_repo, status_repo, catalog)
    }

    fn wire(
        tier_list_repo: Arc<dyn TierListRepository>,
        status_repo: Arc<dyn StatusRepository>,
        catalog: Arc<dyn GameRepository>,
    ) -> Self {
        Self {
            ranking: Arc::new(RankingService::new(tier_list_repo, Arc::clone(&catalog))),
            status: Arc::new(StatusService::new(status_repo, Arc::clone(&catalog))),
            catalog,
        }
    }
}

/// Initialize logging, open the configured store and wire the services.
///
/// With the in-process backend the catalog starts empty.
pub async fn bootstrap(config: &AppConfig) -> AppResult<AppServices> {
    init_logger(config.log_level);

    match &config.storage {
        StorageBackend::InMemory => {
            crate::log_warn!("DATABASE_URL not set, using in-process storage (nothing is persisted)");
            Ok(AppServices::in_memory(Arc::new(InMemoryGameCatalog::new())))
        }
        StorageBackend::Postgres { url } => {
            let host = redacted_host(url).to_string();
            let url = url.clone();
            let max_size = config.pool_max_size;
            let timeout = config.connection_timeout;

            // Pool setup and migrations block on network I/O
            let database = tokio::task::spawn_blocking(move || -> AppResult<Database> {
                let database = Database::new(&url, max_size, timeout)?;
                database.run_migrations()?;
                Ok(database)
            })
            .await?
            .map_err(|e| {
                LogContext::error_with_context(&e, "PostgreSQL bootstrap failed");
                e
            })?;

            crate::log_info!("Connected to PostgreSQL at {}", host);
            Ok(AppServices::postgres(Arc::new(database)))
        }
    }
}
