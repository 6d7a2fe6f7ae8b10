//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: Where a card is (a player's piles, hand, in-play areas, or the shop)
//! - `ZoneDiscipline`: Stack (top-only) or set (take by identity)
//! - `ZoneManager`: Location tracking and move-only transfers

pub mod manager;
pub mod zone;

pub use manager::ZoneManager;
pub use zone::{Zone, ZoneDiscipline};
