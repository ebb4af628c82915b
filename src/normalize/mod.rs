//! Attribute normalizers.
//!
//! Pure functions deriving coarse, comparable attributes from the free-text
//! fields of a participant record:
//!
//! - **Canonical school**: the school/campus string with institutional
//!   suffixes stripped, used for school exclusivity.
//! - **Major category**: medical, dental, korean-medicine, nursing, or other.
//! - **Region**: a fixed geographic bucket derived from the school/campus text.
//!
//! Inputs are the Korean spellings found in registration sheets; the keyword
//! tables live next to the classifier that uses them.

mod major;
mod region;
mod school;

pub use major::MajorCategory;
pub use region::Region;
pub use school::canonical_school;
