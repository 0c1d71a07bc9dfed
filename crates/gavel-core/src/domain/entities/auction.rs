//! Auction entity.

use crate::{AuctionId, Entity, UserId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Age in days after which an auction counts as old.
pub const OLD_AUCTION_AGE_DAYS: i64 = 7;

/// An item offered for sale by a user.
///
/// Auctions open at construction time and stay open until [`close`] is
/// called. `opened_at` is settable after construction so fixtures can
/// back-date an auction.
///
/// [`close`]: Auction::close
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Auction {
    /// Unique identifier for the auction.
    pub id: AuctionId,

    /// Item name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Opening price.
    #[validate(range(min = 0.0))]
    pub starting_price: f64,

    /// Owning user. Every auction references exactly one existing user.
    pub owner_id: UserId,

    /// Whether the item is second-hand.
    pub used: bool,

    /// Whether the auction has been closed.
    pub closed: bool,

    /// Opening timestamp, defaults to creation time.
    pub opened_at: DateTime<Utc>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Auction {
    /// Creates a new open auction, opened now.
    #[must_use]
    pub fn new(name: impl Into<String>, starting_price: f64, owner_id: UserId, used: bool) -> Self {
        let now = Utc::now();
        Self {
            id: AuctionId::new(),
            name: name.into(),
            starting_price,
            owner_id,
            used,
            closed: false,
            opened_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Closes the auction.
    pub fn close(&mut self) {
        self.closed = true;
        self.updated_at = Utc::now();
    }

    /// Checks if the auction is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.closed
    }

    /// Moves the opening timestamp.
    pub fn set_opened_at(&mut self, opened_at: DateTime<Utc>) {
        self.opened_at = opened_at;
        self.updated_at = Utc::now();
    }

    /// Checks if the auction counts as old at the given instant.
    ///
    /// The [`OLD_AUCTION_AGE_DAYS`] boundary is inclusive: an auction
    /// opened exactly that many days before `now` is old.
    #[must_use]
    pub fn is_old_as_of(&self, now: DateTime<Utc>) -> bool {
        self.opened_at <= now - Duration::days(OLD_AUCTION_AGE_DAYS)
    }
}

impl Entity<AuctionId> for Auction {
    fn id(&self) -> &AuctionId {
        &self.id
    }
}

/// Builder for creating `Auction` instances, mainly in test fixtures.
#[derive(Debug, Default)]
pub struct AuctionBuilder {
    name: Option<String>,
    starting_price: Option<f64>,
    owner_id: Option<UserId>,
    used: bool,
    closed: bool,
    opened_at: Option<DateTime<Utc>>,
}

impl AuctionBuilder {
    /// Creates a new auction builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the opening price.
    #[must_use]
    pub fn starting_price(mut self, price: f64) -> Self {
        self.starting_price = Some(price);
        self
    }

    /// Sets the owning user.
    #[must_use]
    pub fn owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Marks the item as second-hand.
    #[must_use]
    pub fn used(mut self) -> Self {
        self.used = true;
        self
    }

    /// Builds the auction already closed.
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Back-dates the opening timestamp.
    #[must_use]
    pub fn opened_at(mut self, opened_at: DateTime<Utc>) -> Self {
        self.opened_at = Some(opened_at);
        self
    }

    /// Back-dates the opening timestamp by whole days.
    #[must_use]
    pub fn opened_days_ago(self, days: i64) -> Self {
        self.opened_at(Utc::now() - Duration::days(days))
    }

    /// Builds the `Auction` instance.
    ///
    /// # Panics
    ///
    /// Panics if name, starting price, or owner are not set.
    #[must_use]
    pub fn build(self) -> Auction {
        let mut auction = Auction::new(
            self.name.expect("name is required"),
            self.starting_price.expect("starting_price is required"),
            self.owner_id.expect("owner is required"),
            self.used,
        );

        if self.closed {
            auction.close();
        }
        if let Some(opened_at) = self.opened_at {
            auction.set_opened_at(opened_at);
        }

        auction
    }
}
