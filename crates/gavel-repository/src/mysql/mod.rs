//! MySQL DAO implementations.

mod auction_dao_impl;
mod user_dao_impl;

pub use auction_dao_impl::MySqlAuctionDaoImpl;
pub use user_dao_impl::MySqlUserDaoImpl;
