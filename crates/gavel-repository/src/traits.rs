//! Repository trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gavel_core::{Auction, AuctionId, GavelResult, User, UserId};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> GavelResult<Option<User>>;

    /// Finds a user by exact name and email. Absence is `None`.
    async fn find_by_name_and_email(&self, name: &str, email: &str)
        -> GavelResult<Option<User>>;

    /// Saves a new user.
    async fn save(&self, user: &User) -> GavelResult<User>;

    /// Updates an existing user.
    async fn update(&self, user: &User) -> GavelResult<User>;

    /// Deletes a user by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: UserId) -> GavelResult<bool>;
}

/// Auction repository trait.
#[async_trait]
pub trait AuctionRepository: Send + Sync {
    /// Finds an auction by ID.
    async fn find_by_id(&self, id: AuctionId) -> GavelResult<Option<Auction>>;

    /// Finds all auctions owned by the given user.
    async fn find_by_owner(&self, owner_id: UserId) -> GavelResult<Vec<Auction>>;

    /// Counts auctions that are still open.
    async fn count_open(&self) -> GavelResult<u64>;

    /// Finds auctions for items that are not second-hand.
    async fn find_unused(&self) -> GavelResult<Vec<Auction>>;

    /// Finds auctions opened at least [`OLD_AUCTION_AGE_DAYS`] days ago,
    /// boundary inclusive.
    ///
    /// [`OLD_AUCTION_AGE_DAYS`]: gavel_core::OLD_AUCTION_AGE_DAYS
    async fn find_old(&self) -> GavelResult<Vec<Auction>>;

    /// Finds open auctions whose opening timestamp falls inside the
    /// inclusive `[start, end]` range. Closed auctions are never returned.
    async fn find_open_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> GavelResult<Vec<Auction>>;

    /// Saves a new auction.
    async fn save(&self, auction: &Auction) -> GavelResult<Auction>;

    /// Updates an existing auction.
    async fn update(&self, auction: &Auction) -> GavelResult<Auction>;

    /// Deletes an auction by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: AuctionId) -> GavelResult<bool>;
}
