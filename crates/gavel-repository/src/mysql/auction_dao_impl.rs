//! MySQL auction DAO implementation.

use crate::{dao::AuctionDao, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use gavel_core::{Auction, AuctionId, GavelError, GavelResult, UserId, OLD_AUCTION_AGE_DAYS};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL-backed [`AuctionDao`].
#[derive(Clone)]
pub struct MySqlAuctionDaoImpl {
    pool: Arc<DatabasePool>,
}

impl MySqlAuctionDaoImpl {
    /// Creates a new MySQL auction DAO.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an auction.
#[derive(Debug, FromRow)]
struct AuctionRow {
    id: String, // UUID stored as CHAR(36)
    name: String,
    starting_price: f64,
    owner_id: String,
    used: bool,
    closed: bool,
    opened_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AuctionRow> for Auction {
    type Error = GavelError;

    fn try_from(row: AuctionRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| GavelError::Internal(format!("Invalid UUID in database: {}", e)))?;
        let owner_id = Uuid::parse_str(&row.owner_id)
            .map_err(|e| GavelError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Auction {
            id: AuctionId::from_uuid(id),
            name: row.name,
            starting_price: row.starting_price,
            owner_id: UserId::from_uuid(owner_id),
            used: row.used,
            closed: row.closed,
            opened_at: row.opened_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn rows_to_auctions(rows: Vec<AuctionRow>) -> GavelResult<Vec<Auction>> {
    rows.into_iter().map(Auction::try_from).collect()
}

#[async_trait]
impl AuctionDao for MySqlAuctionDaoImpl {
    async fn find_by_id(&self, id: AuctionId) -> GavelResult<Option<Auction>> {
        debug!("Finding auction by id: {}", id);

        let row = sqlx::query_as::<_, AuctionRow>(
            r#"
            SELECT id, name, starting_price, owner_id, used, closed,
                   opened_at, created_at, updated_at
            FROM auctions
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Auction::try_from).transpose()
    }

    async fn find_by_owner(&self, owner_id: UserId) -> GavelResult<Vec<Auction>> {
        debug!("Finding auctions by owner: {}", owner_id);

        let rows = sqlx::query_as::<_, AuctionRow>(
            r#"
            SELECT id, name, starting_price, owner_id, used, closed,
                   opened_at, created_at, updated_at
            FROM auctions
            WHERE owner_id = ?
            ORDER BY opened_at DESC
            "#,
        )
        .bind(owner_id.into_inner().to_string())
        .fetch_all(self.pool.inner())
        .await?;

        rows_to_auctions(rows)
    }

    async fn count_open(&self) -> GavelResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM auctions WHERE closed = FALSE")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }

    async fn find_unused(&self) -> GavelResult<Vec<Auction>> {
        debug!("Finding auctions for unused items");

        let rows = sqlx::query_as::<_, AuctionRow>(
            r#"
            SELECT id, name, starting_price, owner_id, used, closed,
                   opened_at, created_at, updated_at
            FROM auctions
            WHERE used = FALSE
            ORDER BY opened_at DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows_to_auctions(rows)
    }

    async fn find_old(&self) -> GavelResult<Vec<Auction>> {
        let cutoff = Utc::now() - Duration::days(OLD_AUCTION_AGE_DAYS);
        debug!("Finding auctions opened on or before {}", cutoff);

        let rows = sqlx::query_as::<_, AuctionRow>(
            r#"
            SELECT id, name, starting_price, owner_id, used, closed,
                   opened_at, created_at, updated_at
            FROM auctions
            WHERE opened_at <= ?
            ORDER BY opened_at DESC
            "#,
        )
        .bind(cutoff)
        .fetch_all(self.pool.inner())
        .await?;

        rows_to_auctions(rows)
    }

    async fn find_open_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> GavelResult<Vec<Auction>> {
        debug!("Finding open auctions opened between {} and {}", start, end);

        let rows = sqlx::query_as::<_, AuctionRow>(
            r#"
            SELECT id, name, starting_price, owner_id, used, closed,
                   opened_at, created_at, updated_at
            FROM auctions
            WHERE closed = FALSE AND opened_at BETWEEN ? AND ?
            ORDER BY opened_at DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool.inner())
        .await?;

        rows_to_auctions(rows)
    }

    async fn save(&self, auction: &Auction) -> GavelResult<Auction> {
        debug!("Saving new auction: {}", auction.name);

        let id_str = auction.id.into_inner().to_string();

        // MySQL doesn't support RETURNING, so insert then select
        sqlx::query(
            r#"
            INSERT INTO auctions (id, name, starting_price, owner_id, used, closed,
                                  opened_at, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id_str)
        .bind(&auction.name)
        .bind(auction.starting_price)
        .bind(auction.owner_id.into_inner().to_string())
        .bind(auction.used)
        .bind(auction.closed)
        .bind(auction.opened_at)
        .bind(auction.created_at)
        .bind(auction.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(auction.id)
            .await?
            .ok_or_else(|| GavelError::Internal("Failed to fetch inserted auction".to_string()))
    }

    async fn update(&self, auction: &Auction) -> GavelResult<Auction> {
        debug!("Updating auction: {}", auction.id);

        let id_str = auction.id.into_inner().to_string();

        sqlx::query(
            r#"
            UPDATE auctions
            SET name = ?, starting_price = ?, owner_id = ?, used = ?,
                closed = ?, opened_at = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&auction.name)
        .bind(auction.starting_price)
        .bind(auction.owner_id.into_inner().to_string())
        .bind(auction.used)
        .bind(auction.closed)
        .bind(auction.opened_at)
        .bind(auction.updated_at)
        .bind(&id_str)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(auction.id)
            .await?
            .ok_or_else(|| GavelError::Internal("Failed to fetch updated auction".to_string()))
    }

    async fn delete(&self, id: AuctionId) -> GavelResult<bool> {
        debug!("Deleting auction: {}", id);

        let result = sqlx::query("DELETE FROM auctions WHERE id = ?")
            .bind(id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlAuctionDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAuctionDaoImpl").finish_non_exhaustive()
    }
}
