//! # Gavel Repository
//!
//! Four-layer data access hierarchy:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn UserRepository> / Arc<dyn AuctionRepository>
//! UserRepositoryImpl / AuctionRepositoryImpl
//!   ↓  Arc<dyn UserDao> / Arc<dyn AuctionDao>
//! MySqlUserDaoImpl / MySqlAuctionDaoImpl     (DAO impl — MySQL / SQLx)
//!   ↓
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                       ← UserRepository / AuctionRepository traits
//!   pool.rs                         ← DatabasePool
//!   impl/
//!     user_repository_impl.rs       ← UserRepositoryImpl
//!     auction_repository_impl.rs    ← AuctionRepositoryImpl
//!   dao/
//!     user_dao.rs                   ← UserDao trait
//!     auction_dao.rs                ← AuctionDao trait
//!   mysql/
//!     user_dao_impl.rs              ← MySqlUserDaoImpl
//!     auction_dao_impl.rs           ← MySqlAuctionDaoImpl
//! ```

pub mod dao;
pub mod r#impl;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use dao::{AuctionDao, UserDao};
pub use mysql::{MySqlAuctionDaoImpl, MySqlUserDaoImpl};
pub use pool::*;
pub use r#impl::{AuctionRepositoryImpl, UserRepositoryImpl};
pub use traits::*;
