/// Diesel-based implementation of TierListRepository
///
/// Writes lock the tier list row (`SELECT ... FOR UPDATE`) and apply
/// row-level changes inside one transaction. The unique index on
/// `(tier_list_id, game_id)` backs the one-entry-per-game invariant when two
/// writers race.
use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::ranking::domain::{
    TierList, TierListChange, TierListEntry, TierListRepository,
};
use crate::modules::ranking::infrastructure::models::{
    to_aggregate, NewTierList, NewTierListEntry, TierListEntryModel, TierListModel,
};
use crate::schema::{tier_list_entries, tier_lists};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::logger::TimedOperation;

pub struct TierListRepositoryImpl {
    db: Arc<Database>,
}

impl TierListRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TierListRepository for TierListRepositoryImpl {
    async fn add(&self, tier_list: &TierList) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let new_list = NewTierList::from(tier_list);
        let new_entries: Vec<NewTierListEntry> = tier_list
            .entries()
            .iter()
            .map(NewTierListEntry::from)
            .collect();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut pooled = db.get_connection()?;
            let conn: &mut PgConnection = &mut pooled;

            conn.transaction::<_, AppError, _>(|conn| {
                diesel::insert_into(tier_lists::table)
                    .values(&new_list)
                    .execute(conn)?;

                if !new_entries.is_empty() {
                    diesel::insert_into(tier_list_entries::table)
                        .values(&new_entries)
                        .execute(conn)?;
                }
                Ok(())
            })
        })
        .await??;

        tracing::debug!("Inserted tier list {}", tier_list.id());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<TierList>> {
        let db = Arc::clone(&self.db);

        let loaded = task::spawn_blocking(
            move || -> AppResult<Option<(TierListModel, Vec<TierListEntryModel>)>> {
                let mut pooled = db.get_connection()?;
                let conn: &mut PgConnection = &mut pooled;

                // Root and entries come from the same snapshot
                conn.build_transaction()
                    .read_only()
                    .repeatable_read()
                    .run::<_, AppError, _>(|conn| {
                        let Some(model) = tier_lists::table
                            .find(id)
                            .select(TierListModel::as_select())
                            .first::<TierListModel>(conn)
                            .optional()?
                        else {
                            return Ok(None);
                        };

                        let entries = TierListEntryModel::belonging_to(&model)
                            .select(TierListEntryModel::as_select())
                            .order((
                                tier_list_entries::position.asc(),
                                tier_list_entries::added_at.asc(),
                            ))
                            .load::<TierListEntryModel>(conn)?;

                        Ok(Some((model, entries)))
                    })
            },
        )
        .await??;

        Ok(loaded.map(|(model, entries)| to_aggregate(model, entries)))
    }

    async fn get_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<TierList>> {
        let db = Arc::clone(&self.db);

        let loaded = task::spawn_blocking(
            move || -> AppResult<Vec<(TierListModel, Vec<TierListEntryModel>)>> {
                let mut pooled = db.get_connection()?;
                let conn: &mut PgConnection = &mut pooled;

                conn.build_transaction()
                    .read_only()
                    .repeatable_read()
                    .run::<_, AppError, _>(|conn| {
                        let models = tier_lists::table
                            .filter(tier_lists::owner_id.eq(owner_id))
                            .order(tier_lists::created_at.desc())
                            .select(TierListModel::as_select())
                            .load::<TierListModel>(conn)?;

                        let entries = TierListEntryModel::belonging_to(&models)
                            .select(TierListEntryModel::as_select())
                            .order((
                                tier_list_entries::position.asc(),
                                tier_list_entries::added_at.asc(),
                            ))
                            .load::<TierListEntryModel>(conn)?;

                        let grouped = entries.grouped_by(&models);
                        Ok(models.into_iter().zip(grouped).collect())
                    })
            },
        )
        .await??;

        tracing::debug!("Loaded {} tier lists for owner {}", loaded.len(), owner_id);
        Ok(loaded
            .into_iter()
            .map(|(model, entries)| to_aggregate(model, entries))
            .collect())
    }

    async fn remove(&self, tier_list: &TierList) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = tier_list.id();

        let removed_entries = task::spawn_blocking(move || -> AppResult<usize> {
            let mut pooled = db.get_connection()?;
            let conn: &mut PgConnection = &mut pooled;

            conn.transaction::<_, AppError, _>(|conn| {
                // Entries go first and explicitly; the FK cascade is not relied on
                let entries = diesel::delete(
                    tier_list_entries::table.filter(tier_list_entries::tier_list_id.eq(id)),
                )
                .execute(conn)?;

                let n = diesel::delete(tier_lists::table.find(id)).execute(conn)?;
                if n == 0 {
                    return Err(AppError::NotFound(format!(
                        "Tier list with ID {} not found",
                        id
                    )));
                }
                Ok(entries)
            })
        })
        .await??;

        tracing::info!(
            "Deleted tier list {} with {} entries",
            id,
            removed_entries
        );
        Ok(())
    }

    async fn add_entry(&self, entry: &TierListEntry) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let new_entry = NewTierListEntry::from(entry);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut pooled = db.get_connection()?;
            let conn: &mut PgConnection = &mut pooled;

            conn.transaction::<_, AppError, _>(|conn| {
                lock_tier_list(conn, new_entry.tier_list_id)?;
                insert_entry(conn, &new_entry)
            })
        })
        .await?
    }

    async fn save_changes(&self, tier_list: &mut TierList) -> AppResult<()> {
        if !tier_list.has_pending_changes() {
            return Ok(());
        }

        let db = Arc::clone(&self.db);
        let id = tier_list.id();
        let updated_at = tier_list.updated_at();
        let changes = tier_list.pending_changes().to_vec();
        let timer = TimedOperation::new("tier_list.save_changes");

        task::spawn_blocking(move || -> AppResult<()> {
            let mut pooled = db.get_connection()?;
            let conn: &mut PgConnection = &mut pooled;

            conn.transaction::<_, AppError, _>(|conn| {
                lock_tier_list(conn, id)?;

                for change in &changes {
                    apply_change(conn, id, change)?;
                }

                diesel::update(tier_lists::table.find(id))
                    .set(tier_lists::updated_at.eq(updated_at))
                    .execute(conn)?;
                Ok(())
            })
        })
        .await??;

        let flushed = tier_list.take_changes();
        timer.finish_with_info(&format!("{} changes", flushed.len()));
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Private helpers (kept after public API for readability)
// -----------------------------------------------------------------------------

/// Take the row lock that serializes writers of one tier list.
fn lock_tier_list(conn: &mut PgConnection, id: Uuid) -> AppResult<()> {
    let locked = tier_lists::table
        .find(id)
        .select(tier_lists::id)
        .for_update()
        .get_result::<Uuid>(conn)
        .optional()?;

    match locked {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!(
            "Tier list with ID {} not found",
            id
        ))),
    }
}

fn insert_entry(conn: &mut PgConnection, entry: &NewTierListEntry) -> AppResult<()> {
    diesel::insert_into(tier_list_entries::table)
        .values(entry)
        .execute(conn)
        .map_err(|e| match AppError::from(e) {
            AppError::DuplicateEntry(_) => AppError::DuplicateEntry(format!(
                "Game {} is already ranked in tier list {}",
                entry.game_id, entry.tier_list_id
            )),
            other => other,
        })?;
    Ok(())
}

fn apply_change(conn: &mut PgConnection, id: Uuid, change: &TierListChange) -> AppResult<()> {
    match change {
        TierListChange::TitleChanged { title } => {
            diesel::update(tier_lists::table.find(id))
                .set(tier_lists::title.eq(title))
                .execute(conn)?;
        }
        TierListChange::ImageChanged { image_url } => {
            diesel::update(tier_lists::table.find(id))
                .set(tier_lists::image_url.eq(image_url.as_deref()))
                .execute(conn)?;
        }
        TierListChange::EntryAdded(entry) => {
            insert_entry(conn, &NewTierListEntry::from(entry))?;
        }
        TierListChange::EntryTierChanged { game_id, tier } => {
            let n = diesel::update(
                tier_list_entries::table
                    .filter(tier_list_entries::tier_list_id.eq(id))
                    .filter(tier_list_entries::game_id.eq(*game_id)),
            )
            .set(tier_list_entries::tier.eq(*tier))
            .execute(conn)?;

            if n == 0 {
                return Err(AppError::EntryNotFound(format!(
                    "Game {} is not ranked in tier list {}",
                    game_id, id
                )));
            }
        }
        TierListChange::EntryRemoved { game_id } => {
            diesel::delete(
                tier_list_entries::table
                    .filter(tier_list_entries::tier_list_id.eq(id))
                    .filter(tier_list_entries::game_id.eq(*game_id)),
            )
            .execute(conn)?;
        }
    }
    Ok(())
}
