//! Domain entities.

pub mod auction;
pub mod user;

pub use auction::{Auction, AuctionBuilder, OLD_AUCTION_AGE_DAYS};
pub use user::User;
