//! Record types returned by the Alpine Club API.
//!
//! Every field is optional and deserialized through `lenient`, so any JSON
//! object becomes a record and display accessors fall back to placeholders:
//!
//! - `Mountain`, `MountainForm`: mountain detail and create/update body
//! - `Group`, `NewGroup`: expedition groups and the create body
//! - `Climber`: club members and group members
//! - `Ascent`: scheduled and completed climbs
//! - `MountainStat`: per-mountain aggregates
//! - `DateRange`: `start`/`end` query filter

pub mod ascent;
pub mod climber;
pub mod group;
pub mod lenient;
pub mod mountain;
pub mod range;
pub mod stat;

pub use ascent::Ascent;
pub use climber::Climber;
pub use group::{sort_chronologically, Group, NewGroup};
pub use mountain::{Mountain, MountainForm, MAX_FORM_NUMBER};
pub use range::DateRange;
pub use stat::MountainStat;
