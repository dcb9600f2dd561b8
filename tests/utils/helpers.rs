/// Test helper functions and service builders
use diesel::prelude::*;
use std::sync::Arc;
use tierboard_lib::modules::catalog::{GameRecord, InMemoryGameCatalog};
use tierboard_lib::schema::games;
use tierboard_lib::shared::infrastructure::Database;
use tierboard_lib::AppServices;

use super::db::PgPool;

pub struct TestServices {
    pub services: AppServices,
    pub catalog: Arc<InMemoryGameCatalog>,
}

/// In-process services over a catalog seeded with `games`
pub fn build_in_memory_services(games: Vec<GameRecord>) -> TestServices {
    let catalog = Arc::new(InMemoryGameCatalog::with_games(games));
    let services = AppServices::in_memory(catalog.clone());
    TestServices { services, catalog }
}

/// PostgreSQL-backed services over the shared test pool
pub fn build_postgres_services(pool: &PgPool) -> AppServices {
    AppServices::postgres(Arc::new(Database::from_pool(pool.clone())))
}

pub fn insert_games(pool: &PgPool, records: &[GameRecord]) {
    let mut conn = pool.get().expect("Failed to get DB connection");

    for game in records {
        diesel::insert_into(games::table)
            .values((
                games::id.eq(game.id),
                games::title.eq(&game.title),
                games::platform.eq(&game.platform),
                games::cover_image.eq(game.cover_image.as_deref()),
            ))
            .execute(&mut conn)
            .expect("Failed to insert game");
    }
}
