/// Play status service tests - in-process backend
mod utils;

use futures::future::join_all;
use tierboard_lib::modules::status::PlayStatus;
use tierboard_lib::shared::errors::ErrorKind;
use utils::factories::{numbered_games, GameFactory};
use utils::helpers::build_in_memory_services;
use uuid::Uuid;

#[tokio::test]
async fn setting_twice_overwrites_the_single_record() {
    let ctx = build_in_memory_services(vec![GameFactory::new().with_id(42).build()]);
    let status = &ctx.services.status;
    let user = Uuid::new_v4();

    status.set_status(user, 42, PlayStatus::Playing).await.unwrap();
    let first = status.get_status(user, 42).await.unwrap().unwrap();
    status.set_status(user, 42, PlayStatus::Completed).await.unwrap();

    let records = status.get_user_statuses(user).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, PlayStatus::Completed);
    assert_eq!(records[0].id, first.id);
}

#[tokio::test]
async fn remove_then_remove_again_is_not_found() {
    let ctx = build_in_memory_services(numbered_games(1));
    let status = &ctx.services.status;
    let user = Uuid::new_v4();

    status.set_status(user, 1, PlayStatus::OnHold).await.unwrap();
    status.remove_status(user, 1).await.unwrap();

    assert!(status.get_status(user, 1).await.unwrap().is_none());
    let err = status.remove_status(user, 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn unknown_game_is_game_not_found() {
    let ctx = build_in_memory_services(Vec::new());
    let user = Uuid::new_v4();

    let err = ctx
        .services
        .status
        .set_status(user, 7, PlayStatus::Backlog)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GameNotFound);
    assert!(ctx.services.status.get_user_statuses(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn statuses_are_scoped_per_user() {
    let ctx = build_in_memory_services(numbered_games(3));
    let status = &ctx.services.status;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    status.set_status(alice, 1, PlayStatus::Playing).await.unwrap();
    status.set_status(alice, 2, PlayStatus::Dropped).await.unwrap();
    status.set_status(bob, 1, PlayStatus::Backlog).await.unwrap();

    let mut alice_games: Vec<i32> = status
        .get_user_statuses(alice)
        .await
        .unwrap()
        .iter()
        .map(|s| s.game_id)
        .collect();
    alice_games.sort_unstable();
    assert_eq!(alice_games, vec![1, 2]);

    let bob_view = status.get_status(bob, 1).await.unwrap().unwrap();
    assert_eq!(bob_view.status, PlayStatus::Backlog);
    assert_eq!(bob_view.game_title.as_deref(), Some("Game 1"));
}

#[tokio::test]
async fn concurrent_sets_for_one_pair_never_duplicate() {
    let ctx = build_in_memory_services(numbered_games(1));
    let status = ctx.services.status.clone();
    let user = Uuid::new_v4();

    let tasks = PlayStatus::ALL.into_iter().map(|value| {
        let status = status.clone();
        tokio::spawn(async move { status.set_status(user, 1, value).await })
    });
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let records = status.get_user_statuses(user).await.unwrap();
    assert_eq!(records.len(), 1);
    assert!(PlayStatus::ALL.contains(&records[0].status));
}
