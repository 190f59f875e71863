//! Ingestion: from loosely-typed source JSON to typed entities
//!
//! - `raw`: serde shapes of the source documents
//! - `coerce`: text token -> typed, possibly absent, numeric value
//! - `normalize`: free-text canonicalisation (title case, ground names)
//! - `mapper`: raw record -> storage entity

pub mod coerce;
pub mod mapper;
pub mod normalize;
pub mod raw;

pub use coerce::{Coerced, CoercionError, NumericKind, ABSENT_SENTINEL};
pub use mapper::{map_batting, map_bowling, map_match, map_matches, map_batsmen, map_bowlers};
pub use normalize::{ground_name, title_case};
pub use raw::{BattingDocument, BowlingDocument, MatchDocument, RawValue};
