/// Database test utilities with singleton pattern
///
/// PostgreSQL tests only run when TEST_DATABASE_URL is set; otherwise
/// `get_test_db_pool` returns `None` and the test returns early.
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::MigrationHarness;
use std::sync::{Arc, Mutex, OnceLock};
use tierboard_lib::shared::infrastructure::database::MIGRATIONS;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

static DB_POOL: OnceLock<Option<Arc<PgPool>>> = OnceLock::new();

/// Get or create the shared test pool, with migrations applied.
pub fn get_test_db_pool() -> Option<Arc<PgPool>> {
    DB_POOL
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let test_db_url = std::env::var("TEST_DATABASE_URL").ok()?;

            let manager = ConnectionManager::<PgConnection>::new(test_db_url);
            let pool = r2d2::Pool::builder()
                .max_size(10)
                .build(manager)
                .expect("Failed to create test database pool");

            let mut conn = pool.get().expect("Failed to get DB connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("Failed to run migrations on test database");

            Some(Arc::new(pool))
        })
        .clone()
}

/// Clean all test tables - use at the start of each test
pub fn clean_test_db(pool: &PgPool) {
    let mut conn = pool.get().expect("Failed to get DB connection");

    diesel::sql_query(
        "TRUNCATE TABLE tier_list_entries, tier_lists, status_games, games RESTART IDENTITY CASCADE",
    )
    .execute(&mut conn)
    .expect("Failed to clean test tables");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> std::sync::MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
