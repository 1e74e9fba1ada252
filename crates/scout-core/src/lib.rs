//! scout-core: Robot scouting record model and JSON-backed record store.
//!
//! A record is one scouting entry for a team: its robot design, two bounded
//! ratings, two yes/no observations, a list of measured numbers and free-text
//! notes. All records live in a single JSON array on disk, read once when the
//! store opens and rewritten in full after every mutation.
//!
//! # Schema snapshots
//!
//! Two record shapes exist in the wild. The newer one adds `secondScale` and
//! `secondYesOrNo`; both are optional here, so files written by either shape
//! load under the same code.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod config;
pub mod design;
pub mod error;
pub mod event;
pub mod record;
pub mod scale;
pub mod store;

pub use config::*;
pub use design::*;
pub use error::StoreError;
pub use event::*;
pub use record::*;
pub use scale::*;
pub use store::*;
