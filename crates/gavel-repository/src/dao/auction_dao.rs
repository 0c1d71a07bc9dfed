//! `AuctionDao` trait — low-level auction data access abstraction.
//!
//! [`AuctionRepository`] uses an `AuctionDao` instance to fulfil
//! domain-level operations; each DAO implementation targets a single
//! data source.
//!
//! [`AuctionRepository`]: crate::traits::AuctionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gavel_core::{Auction, AuctionId, GavelResult, UserId};

/// Low-level auction data access object.
#[async_trait]
pub trait AuctionDao: Send + Sync {
    /// Finds an auction by ID.
    async fn find_by_id(&self, id: AuctionId) -> GavelResult<Option<Auction>>;

    /// Finds all auctions owned by the given user.
    async fn find_by_owner(&self, owner_id: UserId) -> GavelResult<Vec<Auction>>;

    /// Counts auctions that are still open.
    async fn count_open(&self) -> GavelResult<u64>;

    /// Finds auctions for items that are not second-hand.
    async fn find_unused(&self) -> GavelResult<Vec<Auction>>;

    /// Finds auctions opened at least a week ago, boundary inclusive.
    async fn find_old(&self) -> GavelResult<Vec<Auction>>;

    /// Finds open auctions opened inside the inclusive `[start, end]` range.
    async fn find_open_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> GavelResult<Vec<Auction>>;

    /// Persists a new auction.
    async fn save(&self, auction: &Auction) -> GavelResult<Auction>;

    /// Updates an existing auction.
    async fn update(&self, auction: &Auction) -> GavelResult<Auction>;

    /// Deletes an auction by ID. Returns `true` if deleted.
    async fn delete(&self, id: AuctionId) -> GavelResult<bool>;
}
