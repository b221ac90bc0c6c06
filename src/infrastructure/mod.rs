//! Infrastructure collaborators used by the table core
//!
//! - `id`: unique row identifiers
//! - `clock`: insertion timestamps
//! - `text`: ASCII case folding and joining helpers

pub mod clock;
pub mod id;
pub mod text;

pub use clock::{Clock, FixedClock, SystemClock};
pub use id::{IdSource, RandomIdSource, SequentialIdSource};
