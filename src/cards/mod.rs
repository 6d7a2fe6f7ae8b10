//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Immutable card data (cost, faction, kind, hp, ability pools)
//! - `CardInstance`: One physical copy at the table
//! - `CardRegistry`: Card definition lookup

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardKind, Faction, Trigger};
pub use instance::CardInstance;
pub use registry::CardRegistry;
