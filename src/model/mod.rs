//! Participant and group records.
//!
//! A [`Person`] is one uniform record for leaders, helpers and members;
//! role-dependent fields are optional. A [`Group`] owns one leader, one
//! helper and an ordered member list. Derived state (schools, regions,
//! ages) is always recomputed from the current membership.

mod group;
mod person;

pub use group::{Group, StaffRecord};
pub use person::{Gender, GenderCounts, Person, PersonId, Role};

/// Width of an age band in years.
pub const AGE_BAND_WIDTH: u32 = 5;

/// The 5-year band an age falls in (`age / 5`).
pub fn age_band(age: u32) -> u32 {
    age / AGE_BAND_WIDTH
}
