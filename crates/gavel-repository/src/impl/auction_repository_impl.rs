//! `AuctionRepositoryImpl` — Repository layer implementation.
//!
//! Implements the [`AuctionRepository`] domain interface by delegating
//! to an [`AuctionDao`].
//!
//! [`AuctionRepository`]: crate::traits::AuctionRepository
//! [`AuctionDao`]: crate::dao::AuctionDao

use crate::{dao::AuctionDao, traits::AuctionRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gavel_core::{Auction, AuctionId, GavelResult, UserId};
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that orchestrates [`AuctionDao`] access.
///
/// [`AuctionDao`]: crate::dao::AuctionDao
pub struct AuctionRepositoryImpl {
    auction_dao: Arc<dyn AuctionDao>,
}

impl AuctionRepositoryImpl {
    /// Creates a new `AuctionRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(auction_dao: Arc<dyn AuctionDao>) -> Self {
        Self { auction_dao }
    }
}

#[async_trait]
impl AuctionRepository for AuctionRepositoryImpl {
    async fn find_by_id(&self, id: AuctionId) -> GavelResult<Option<Auction>> {
        debug!("Repository: find_by_id {}", id);
        self.auction_dao.find_by_id(id).await
    }

    async fn find_by_owner(&self, owner_id: UserId) -> GavelResult<Vec<Auction>> {
        debug!("Repository: find_by_owner {}", owner_id);
        self.auction_dao.find_by_owner(owner_id).await
    }

    async fn count_open(&self) -> GavelResult<u64> {
        self.auction_dao.count_open().await
    }

    async fn find_unused(&self) -> GavelResult<Vec<Auction>> {
        self.auction_dao.find_unused().await
    }

    async fn find_old(&self) -> GavelResult<Vec<Auction>> {
        self.auction_dao.find_old().await
    }

    async fn find_open_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> GavelResult<Vec<Auction>> {
        debug!("Repository: find_open_between {} and {}", start, end);
        self.auction_dao.find_open_between(start, end).await
    }

    async fn save(&self, auction: &Auction) -> GavelResult<Auction> {
        debug!("Repository: save auction {}", auction.name);
        self.auction_dao.save(auction).await
    }

    async fn update(&self, auction: &Auction) -> GavelResult<Auction> {
        debug!("Repository: update auction {}", auction.id);
        self.auction_dao.update(auction).await
    }

    async fn delete(&self, id: AuctionId) -> GavelResult<bool> {
        debug!("Repository: delete auction {}", id);
        self.auction_dao.delete(id).await
    }
}

impl std::fmt::Debug for AuctionRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuctionRepositoryImpl").finish_non_exhaustive()
    }
}
