//! User service tests against a real (in-memory SQLite) store.

mod common;

use common::{test_service, unindexed_store};
use media_space::errors::AppError;
use media_space::infra::UserRepository;
use media_space::services::UserService;
use media_space::NewUser;

fn new_user(n: u32) -> NewUser {
    NewUser::new(
        format!("user{}", n),
        format!("password{}", n),
        format!("user{}@example.com", n),
    )
}

async fn seed(service: &impl UserService, count: u32) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count as usize);
    for n in 1..=count {
        ids.push(service.create_user(new_user(n)).await.unwrap().id);
    }
    ids
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let service = test_service().await;

    let created = service.create_user(new_user(1)).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.username, "user1");
    assert_eq!(created.password, "password1");

    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_ids_are_assigned_in_insertion_order() {
    let service = test_service().await;

    let ids = seed(&service, 3).await;

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let service = test_service().await;

    assert!(matches!(service.get_user(999).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_get_user_by_username() {
    let service = test_service().await;
    let ids = seed(&service, 3).await;

    let user = service.get_user_by_username("user2").await.unwrap();
    assert_eq!(user.id, ids[1]);

    assert!(matches!(
        service.get_user_by_username("nobody").await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_find_by_username_prefers_lowest_id() {
    let store = unindexed_store().await;

    let first = store
        .create(NewUser::new("shared", "pw1", "first@example.com"))
        .await
        .unwrap();
    let second = store
        .create(NewUser::new("shared", "pw2", "second@example.com"))
        .await
        .unwrap();
    assert!(first.id < second.id);

    let found = store.find_by_username("shared").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
    assert_eq!(found.email, "first@example.com");

    // With the lowest id gone, the next one wins
    assert_eq!(store.delete(first.id).await.unwrap(), 1);
    let found = store.find_by_username("shared").await.unwrap().unwrap();
    assert_eq!(found.id, second.id);
}

#[tokio::test]
async fn test_duplicate_username_rejected_by_store() {
    let service = test_service().await;
    service.create_user(new_user(1)).await.unwrap();

    let duplicate = NewUser::new("user1", "other", "other@example.com");
    let result = service.create_user(duplicate).await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(service.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_overwrites_mutable_fields() {
    let service = test_service().await;
    let created = service.create_user(new_user(1)).await.unwrap();

    let replacement = NewUser::new("renamed", "rotated", "renamed@example.com").into_user(created.id);
    let rows = service.update_user(replacement).await.unwrap();
    assert_eq!(rows, 1);

    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(fetched.username, "renamed");
    assert_eq!(fetched.password, "rotated");
    assert_eq!(fetched.email, "renamed@example.com");
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_missing_id_affects_nothing() {
    let service = test_service().await;
    seed(&service, 1).await;

    let rows = service
        .update_user(new_user(9).into_user(12345))
        .await
        .unwrap();

    assert_eq!(rows, 0);
}

#[tokio::test]
async fn test_update_zero_id_is_validation_error() {
    let service = test_service().await;
    seed(&service, 1).await;

    let result = service.update_user(new_user(9).into_user(0)).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(service.get_user_by_username("user9").await.is_err());
}

#[tokio::test]
async fn test_delete_missing_user_returns_zero() {
    let service = test_service().await;

    assert_eq!(service.delete_user(42).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let service = test_service().await;
    let ids = seed(&service, 2).await;

    assert_eq!(service.delete_user(ids[0]).await.unwrap(), 1);
    assert!(matches!(service.get_user(ids[0]).await, Err(AppError::NotFound)));
    assert!(service.get_user(ids[1]).await.is_ok());
}

#[tokio::test]
async fn test_list_pages_over_25_rows() {
    let service = test_service().await;
    let ids = seed(&service, 25).await;

    let page1 = service.list_users(1, 10).await.unwrap();
    let page2 = service.list_users(2, 10).await.unwrap();
    let page3 = service.list_users(3, 10).await.unwrap();
    let page4 = service.list_users(4, 10).await.unwrap();

    assert_eq!(page1.len(), 10);
    assert_eq!(page2.len(), 10);
    assert_eq!(page3.len(), 5);
    assert!(page4.is_empty());

    assert_eq!(page1[0].id, ids[0]);
    assert_eq!(page3[4].id, ids[24]);
}

#[tokio::test]
async fn test_list_rejects_zero_page() {
    let service = test_service().await;
    seed(&service, 1).await;

    assert!(matches!(
        service.list_users(0, 10).await,
        Err(AppError::Validation(_))
    ));
}

#[tokio::test]
async fn test_count_after_seed_and_delete() {
    let service = test_service().await;
    let ids = seed(&service, 7).await;

    for id in &ids[..3] {
        service.delete_user(*id).await.unwrap();
    }

    assert_eq!(service.count_users().await.unwrap(), 4);
}
