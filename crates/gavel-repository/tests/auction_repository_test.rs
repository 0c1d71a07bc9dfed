//! Integration tests for the auction repository stack over MySQL.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use chrono::{Duration, Utc};
use common::TestDatabase;
use gavel_core::{
    AuctionBuilder, AuctionId, Email, User, UserId, OLD_AUCTION_AGE_DAYS,
};
use gavel_repository::{
    AuctionRepository, AuctionRepositoryImpl, MySqlAuctionDaoImpl, MySqlUserDaoImpl,
    UserRepository, UserRepositoryImpl,
};
use std::sync::Arc;

fn auction_repo(db: &TestDatabase) -> AuctionRepositoryImpl {
    AuctionRepositoryImpl::new(Arc::new(MySqlAuctionDaoImpl::new(db.pool())))
}

/// Saves an owner for the auctions under test; the schema requires one.
async fn saved_owner(db: &TestDatabase) -> UserId {
    let repo = UserRepositoryImpl::new(Arc::new(MySqlUserDaoImpl::new(db.pool())));
    let user = User::new("Maurice Finch", Email::new("maurice@finch.example").unwrap());
    let saved = repo.save(&user).await.expect("Failed to save owner");
    saved.id
}

fn auction(name: &str, price: f64, owner: UserId) -> AuctionBuilder {
    AuctionBuilder::new()
        .name(name)
        .starting_price(price)
        .owner(owner)
}

#[tokio::test]
async fn test_counts_only_open_auctions() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    repo.save(&auction("Refrigerator", 1500.0, owner).build())
        .await
        .expect("Failed to save auction");
    repo.save(&auction("Xbox", 700.0, owner).closed().build())
        .await
        .expect("Failed to save auction");

    let total = repo.count_open().await.expect("Query failed");

    assert_eq!(total, 1);
}

#[tokio::test]
async fn test_count_is_zero_when_every_auction_is_closed() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    repo.save(&auction("Xbox", 700.0, owner).closed().build())
        .await
        .expect("Failed to save auction");
    repo.save(&auction("Refrigerator", 1500.0, owner).closed().build())
        .await
        .expect("Failed to save auction");

    let total = repo.count_open().await.expect("Query failed");

    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_lists_only_unused_items() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    repo.save(&auction("Xbox", 700.0, owner).build())
        .await
        .expect("Failed to save auction");
    repo.save(&auction("Refrigerator", 1500.0, owner).used().build())
        .await
        .expect("Failed to save auction");

    let unused = repo.find_unused().await.expect("Query failed");

    assert_eq!(unused.len(), 1);
    assert_eq!(unused[0].name, "Xbox");
}

#[tokio::test]
async fn test_lists_only_old_auctions() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    repo.save(&auction("Xbox", 700.0, owner).build())
        .await
        .expect("Failed to save auction");
    repo.save(&auction("Refrigerator", 1500.0, owner).used().opened_days_ago(10).build())
        .await
        .expect("Failed to save auction");

    let old = repo.find_old().await.expect("Query failed");

    assert_eq!(old.len(), 1);
    assert_eq!(old[0].name, "Refrigerator");
}

#[tokio::test]
async fn test_old_filter_includes_the_week_boundary() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    repo.save(
        &auction("Xbox", 700.0, owner)
            .opened_days_ago(OLD_AUCTION_AGE_DAYS)
            .build(),
    )
    .await
    .expect("Failed to save auction");

    let old = repo.find_old().await.expect("Query failed");

    assert_eq!(old.len(), 1);
}

#[tokio::test]
async fn test_period_filter_returns_only_auctions_opened_in_range() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    let start = Utc::now() - Duration::days(10);
    let end = Utc::now();

    repo.save(&auction("Xbox", 700.0, owner).opened_days_ago(2).build())
        .await
        .expect("Failed to save auction");
    repo.save(&auction("Refrigerator", 1700.0, owner).opened_days_ago(20).build())
        .await
        .expect("Failed to save auction");

    let found = repo
        .find_open_between(start, end)
        .await
        .expect("Query failed");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Xbox");
}

#[tokio::test]
async fn test_period_filter_excludes_closed_auctions() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    let start = Utc::now() - Duration::days(10);
    let end = Utc::now();

    repo.save(&auction("Xbox", 700.0, owner).opened_days_ago(2).closed().build())
        .await
        .expect("Failed to save auction");

    let found = repo
        .find_open_between(start, end)
        .await
        .expect("Query failed");

    assert!(found.is_empty());
}

#[tokio::test]
async fn test_save_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    let item = auction("Xbox", 700.0, owner).build();
    let id = item.id;

    let saved = repo.save(&item).await.expect("Failed to save auction");
    assert_eq!(saved.name, "Xbox");
    assert_eq!(saved.starting_price, 700.0);
    assert_eq!(saved.owner_id, owner);

    let found = repo
        .find_by_id(id)
        .await
        .expect("Query failed")
        .expect("Auction not found");

    assert_eq!(found.id, id);
    assert!(found.is_open());
    assert!(!found.used);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);

    let result = repo
        .find_by_id(AuctionId::new())
        .await
        .expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_closes_auction() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    let mut item = auction("Xbox", 700.0, owner).build();
    repo.save(&item).await.expect("Failed to save auction");

    item.close();
    repo.update(&item).await.expect("Failed to update auction");

    let found = repo
        .find_by_id(item.id)
        .await
        .expect("Query failed")
        .expect("Auction not found");

    assert!(found.closed);
    assert_eq!(repo.count_open().await.expect("Query failed"), 0);
}

#[tokio::test]
async fn test_delete_auction() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let owner = saved_owner(&db).await;

    let item = auction("Xbox", 700.0, owner).build();
    repo.save(&item).await.expect("Failed to save auction");

    let deleted = repo.delete(item.id).await.expect("Failed to delete");
    assert!(deleted);

    assert!(repo.find_by_id(item.id).await.expect("Query failed").is_none());
    assert!(!repo.delete(item.id).await.expect("Query failed"));
}

#[tokio::test]
async fn test_find_by_owner_returns_only_their_auctions() {
    let db = TestDatabase::new().await;
    let repo = auction_repo(&db);
    let user_repo = UserRepositoryImpl::new(Arc::new(MySqlUserDaoImpl::new(db.pool())));

    let owner = saved_owner(&db).await;
    let other = user_repo
        .save(&User::new("Vera Cole", Email::new("vera@cole.example").unwrap()))
        .await
        .expect("Failed to save user")
        .id;

    repo.save(&auction("Xbox", 700.0, owner).build())
        .await
        .expect("Failed to save auction");
    repo.save(&auction("Guitar", 250.0, owner).build())
        .await
        .expect("Failed to save auction");
    repo.save(&auction("Refrigerator", 1500.0, other).build())
        .await
        .expect("Failed to save auction");

    let mine = repo.find_by_owner(owner).await.expect("Query failed");
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|a| a.owner_id == owner));

    let theirs = repo.find_by_owner(other).await.expect("Query failed");
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].name, "Refrigerator");
}

#[tokio::test]
async fn test_concurrent_saves() {
    let db = TestDatabase::new().await;
    let owner = saved_owner(&db).await;
    let pool = db.pool();

    let handles: Vec<_> = (0..5)
        .map(|i| {
            let pool = Arc::clone(&pool);
            tokio::spawn(async move {
                let repo = AuctionRepositoryImpl::new(Arc::new(MySqlAuctionDaoImpl::new(pool)));
                let item = AuctionBuilder::new()
                    .name(format!("Lot {}", i))
                    .starting_price(100.0 + f64::from(i))
                    .owner(owner)
                    .build();
                repo.save(&item).await.expect("Failed to save auction");
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("Task panicked");
    }

    let repo = auction_repo(&db);
    assert_eq!(repo.count_open().await.expect("Query failed"), 5);
}
