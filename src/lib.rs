//! Camp group assignment engine.
//!
//! Partitions a roster of participants into fixed groups, each seeded with
//! one leader and one helper, while enforcing hard eligibility rules and
//! optimizing gender, age, major and region balance:
//!
//! - **Normalization**: canonical school names, major categories and
//!   region categories derived from raw text.
//! - **Eligibility**: medical cohort separation, school exclusivity, age
//!   ordering and gender tolerance, checked against a group's current state.
//! - **Scoring**: four sub-scores combined into a weighted composite.
//! - **Engine**: greedy allocation by age band, size rebalancing, then
//!   local search with balance moves and first-improvement swaps.
//! - **Report**: per-group statistics and pass/fail conditions with
//!   explanations, plus flat rows for export.
//!
//! # Architecture
//!
//! The crate is a pure in-memory core. Spreadsheet parsing, web forms and
//! file export belong to callers; they hand in typed [`model::Person`]
//! records and consume [`report::AssignmentRow`] and
//! [`report::SummaryRow`] values. Progress and shortfalls are emitted as
//! `tracing` events; no subscriber is installed here.
//!
//! # Example
//!
//! ```
//! use u_cohort::engine::{AssignConfig, AssignRunner};
//! use u_cohort::model::{Gender, Person, Role, StaffRecord};
//!
//! let staff = vec![
//!     StaffRecord::new(1, Person::new(1, "Lee", Gender::Male, 35, Role::Leader)),
//!     StaffRecord::new(1, Person::new(2, "Park", Gender::Female, 31, Role::Helper)),
//!     StaffRecord::new(2, Person::new(3, "Choi", Gender::Female, 34, Role::Leader)),
//!     StaffRecord::new(2, Person::new(4, "Jung", Gender::Male, 30, Role::Helper)),
//! ];
//! let members: Vec<Person> = (0..8)
//!     .map(|i| {
//!         let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
//!         Person::new(10 + i, format!("m{i}"), gender, 20 + i % 5, Role::Member)
//!             .with_school(format!("school {i}"))
//!     })
//!     .collect();
//!
//! let config = AssignConfig::default().with_member_bounds(3, 5).with_seed(42);
//! let result = AssignRunner::run(staff, members, &config).unwrap();
//! assert_eq!(result.groups.iter().map(|g| g.len()).sum::<usize>(), 8);
//!
//! let report = result.report();
//! println!("{report}");
//! ```

pub mod eligibility;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod report;
pub mod scoring;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use engine::{AssignConfig, AssignResult, AssignRunner};
pub use error::{AssignError, Result};
