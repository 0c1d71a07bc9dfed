//! DAO (Data Access Object) layer.
//!
//! DAOs provide low-level, single-source data access abstractions.
//! Each DAO interface maps to one data source.
//!
//! Hierarchy:
//! ```text
//! Repository (interface + impl) → DAO (interface + impl) → DB
//! ```

pub mod auction_dao;
pub mod user_dao;

pub use auction_dao::AuctionDao;
pub use user_dao::UserDao;
