//! Core identifier types.
//!
//! These types enforce addressing invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod record_id;
mod resource_name;

pub use record_id::RecordId;
pub use resource_name::ResourceName;
