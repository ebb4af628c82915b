//! Assignment run execution.
//!
//! [`AssignRunner`] validates the inputs, then runs
//! allocation → rebalancing → refinement over one set of groups.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use super::allocate::allocate;
use super::config::AssignConfig;
use super::rebalance::{bound_violations, rebalance};
use super::refine::refine;
use super::types::{AssignEvent, BoundViolation};
use super::Context;
use crate::error::{AssignError, Result};
use crate::model::{Gender, Group, Person, StaffRecord};
use crate::report::{AssignmentRow, RunReport};

/// Result of an assignment run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssignResult {
    /// Final groups, sorted by group number.
    pub groups: Vec<Group>,

    /// Every placement, move and swap, in the order they happened.
    pub events: Vec<AssignEvent>,

    /// Seed of the phase-1 shuffle. Passing it back through
    /// [`AssignConfig::with_seed`] replays the run.
    pub seed: u64,

    /// Male share the gender rule and score aimed for.
    pub gender_ratio: f64,

    /// Refinement passes actually run.
    pub passes_run: usize,

    /// Groups outside the size bounds right after rebalancing.
    pub rebalance_violations: Vec<BoundViolation>,

    /// Groups outside the size bounds at the end of the run.
    pub bound_violations: Vec<BoundViolation>,
}

impl AssignResult {
    /// Members placed by the phase-1 fallback, without any rule check.
    pub fn fallback_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AssignEvent::Fallback { .. }))
            .count()
    }

    pub fn move_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AssignEvent::Moved { .. }))
            .count()
    }

    pub fn swap_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AssignEvent::Swapped { .. }))
            .count()
    }

    pub fn group(&self, number: u32) -> Option<&Group> {
        self.groups.iter().find(|g| g.number() == number)
    }

    /// One row per person: each group's leader, helper, then members.
    pub fn rows(&self) -> Vec<AssignmentRow> {
        self.groups.iter().flat_map(AssignmentRow::for_group).collect()
    }

    pub fn report(&self) -> RunReport {
        RunReport::build(self)
    }
}

/// Male share of `members`; 0.5 for an empty pool.
pub fn derive_gender_ratio(members: &[Person]) -> f64 {
    if members.is_empty() {
        return 0.5;
    }
    let male = members.iter().filter(|m| m.gender == Gender::Male).count();
    male as f64 / members.len() as f64
}

/// Executes an assignment run.
///
/// # Usage
///
/// ```
/// use u_cohort::engine::{AssignConfig, AssignRunner};
/// use u_cohort::model::{Gender, Person, Role, StaffRecord};
///
/// let staff = vec![
///     StaffRecord::new(1, Person::new(1, "Lee", Gender::Male, 35, Role::Leader)),
///     StaffRecord::new(1, Person::new(2, "Park", Gender::Female, 30, Role::Helper)),
/// ];
/// let members = vec![Person::new(10, "Kim", Gender::Female, 21, Role::Member)];
/// let config = AssignConfig::default().with_member_bounds(1, 4).with_seed(7);
///
/// let result = AssignRunner::run(staff, members, &config).unwrap();
/// assert_eq!(result.groups[0].len(), 1);
/// ```
pub struct AssignRunner;

impl AssignRunner {
    /// Builds groups from leader/helper records and assigns `members`.
    ///
    /// # Errors
    ///
    /// [`AssignError::InvalidConfig`] for an invalid configuration or
    /// inconsistent records, [`AssignError::NoGroups`] when no group has
    /// both a leader and a helper.
    pub fn run(
        staff: impl IntoIterator<Item = StaffRecord>,
        members: Vec<Person>,
        config: &AssignConfig,
    ) -> Result<AssignResult> {
        config.validate()?;
        let groups = Group::from_staff(staff)?;
        Self::execute(groups, members, config)
    }

    /// Assigns `members` to already constructed groups.
    ///
    /// Members already in a group stay where they are and take part in
    /// rebalancing and refinement.
    ///
    /// # Errors
    ///
    /// As for [`run`](Self::run); additionally rejects duplicate group
    /// numbers.
    pub fn run_with_groups(
        groups: Vec<Group>,
        members: Vec<Person>,
        config: &AssignConfig,
    ) -> Result<AssignResult> {
        config.validate()?;
        if groups.is_empty() {
            return Err(AssignError::NoGroups);
        }
        Self::execute(groups, members, config)
    }

    fn execute(
        mut groups: Vec<Group>,
        members: Vec<Person>,
        config: &AssignConfig,
    ) -> Result<AssignResult> {
        check_records(&groups, &members)?;
        groups.sort_by_key(Group::number);

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let gender_ratio = config
            .gender_ratio
            .unwrap_or_else(|| derive_gender_ratio(&members));
        info!(
            groups = groups.len(),
            members = members.len(),
            gender_ratio,
            seed,
            "starting assignment run"
        );

        let ctx = Context::new(config, gender_ratio);
        let mut events = Vec::new();

        allocate(&mut groups, members, &ctx, &mut rng, &mut events);
        let rebalance_violations = rebalance(&mut groups, &ctx, &mut events);
        let passes_run = refine(&mut groups, &ctx, &mut events);
        let final_violations =
            bound_violations(&groups, config.min_members, config.max_members);

        let result = AssignResult {
            groups,
            events,
            seed,
            gender_ratio,
            passes_run,
            rebalance_violations,
            bound_violations: final_violations,
        };
        info!(
            fallbacks = result.fallback_count(),
            moves = result.move_count(),
            swaps = result.swap_count(),
            passes = result.passes_run,
            out_of_bounds = result.bound_violations.len(),
            "assignment run finished"
        );
        Ok(result)
    }
}

/// Rejects duplicate group numbers and any person id that occurs twice
/// across staff, already-placed members and the pool.
fn check_records(groups: &[Group], members: &[Person]) -> Result<()> {
    let mut numbers = HashSet::new();
    for group in groups {
        if !numbers.insert(group.number()) {
            return Err(AssignError::InvalidConfig(format!(
                "group number {} appears more than once",
                group.number()
            )));
        }
    }

    let mut ids = HashSet::new();
    let placed = groups.iter().flat_map(Group::persons);
    for person in placed.chain(members) {
        if !ids.insert(person.id) {
            return Err(AssignError::InvalidConfig(format!(
                "person {} ({}) appears more than once",
                person.id, person.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PersonId, Role};

    fn staff(groups: u32) -> Vec<StaffRecord> {
        (1..=groups)
            .flat_map(|g| {
                [
                    StaffRecord::new(
                        g,
                        Person::new(g * 100, format!("L{g}"), Gender::Male, 35, Role::Leader),
                    ),
                    StaffRecord::new(
                        g,
                        Person::new(g * 100 + 1, format!("H{g}"), Gender::Female, 30, Role::Helper),
                    ),
                ]
            })
            .collect()
    }

    fn pool(n: u32) -> Vec<Person> {
        (0..n)
            .map(|i| {
                let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
                Person::new(i + 1, format!("M{i}"), gender, 19 + i % 9, Role::Member)
                    .with_school(format!("school{i}"))
            })
            .collect()
    }

    #[test]
    fn test_derive_gender_ratio() {
        assert_eq!(derive_gender_ratio(&[]), 0.5);
        assert!((derive_gender_ratio(&pool(4)) - 0.5).abs() < 1e-12);
        let males = vec![Person::new(1, "a", Gender::Male, 20, Role::Member)];
        assert_eq!(derive_gender_ratio(&males), 1.0);
    }

    #[test]
    fn test_run_places_every_member_once() {
        let config = AssignConfig::default()
            .with_member_bounds(3, 5)
            .with_seed(11);
        let result = AssignRunner::run(staff(3), pool(12), &config).expect("valid run");

        let mut seen: Vec<PersonId> = result
            .groups
            .iter()
            .flat_map(|g| g.members().iter().map(|m| m.id))
            .collect();
        seen.sort();
        let expected: Vec<PersonId> = (1..=12).map(PersonId).collect();
        assert_eq!(seen, expected);
        assert_eq!(result.seed, 11);
        assert_eq!(result.rows().len(), 12 + 6);
        assert!(result.passes_run >= 1 && result.passes_run <= 3);
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = AssignConfig::default()
            .with_member_bounds(3, 5)
            .with_seed(2024);
        let a = AssignRunner::run(staff(3), pool(12), &config).expect("first run");
        let b = AssignRunner::run(staff(3), pool(12), &config).expect("second run");
        assert_eq!(a.groups, b.groups);
        assert_eq!(a.events, b.events);
    }

    #[test]
    fn test_unseeded_run_reports_seed() {
        let config = AssignConfig::default().with_member_bounds(3, 5);
        let first = AssignRunner::run(staff(3), pool(12), &config).expect("unseeded run");
        let replay = AssignRunner::run(staff(3), pool(12), &config.clone().with_seed(first.seed))
            .expect("replayed run");
        assert_eq!(first.groups, replay.groups);
    }

    #[test]
    fn test_explicit_gender_ratio_wins() {
        let config = AssignConfig::default()
            .with_member_bounds(3, 5)
            .with_gender_ratio(0.3)
            .with_seed(1);
        let result = AssignRunner::run(staff(2), pool(8), &config).expect("valid run");
        assert_eq!(result.gender_ratio, 0.3);
    }

    #[test]
    fn test_no_groups_is_fatal() {
        let config = AssignConfig::default();
        let helpers_only: Vec<StaffRecord> = staff(2)
            .into_iter()
            .filter(|r| r.person.role == Role::Helper)
            .collect();
        assert_eq!(
            AssignRunner::run(helpers_only, pool(4), &config),
            Err(AssignError::NoGroups)
        );
        assert_eq!(
            AssignRunner::run_with_groups(Vec::new(), pool(4), &config),
            Err(AssignError::NoGroups)
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AssignConfig::default().with_member_bounds(6, 4);
        assert!(matches!(
            AssignRunner::run(staff(2), pool(4), &config),
            Err(AssignError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let config = AssignConfig::default();
        let mut members = pool(4);
        members.push(Person::new(100, "L1 again", Gender::Male, 20, Role::Member));
        assert!(matches!(
            AssignRunner::run(staff(2), members, &config),
            Err(AssignError::InvalidConfig(msg)) if msg.contains("#100")
        ));

        let mut members = pool(4);
        members.push(members[0].clone());
        assert!(matches!(
            AssignRunner::run(staff(2), members, &config),
            Err(AssignError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_duplicate_group_numbers_rejected() {
        let leader = || Person::new(1, "l", Gender::Male, 35, Role::Leader);
        let helper = || Person::new(2, "h", Gender::Female, 30, Role::Helper);
        let groups = vec![Group::new(1, leader(), helper()), Group::new(1, leader(), helper())];
        assert!(matches!(
            AssignRunner::run_with_groups(groups, Vec::new(), &AssignConfig::default()),
            Err(AssignError::InvalidConfig(msg)) if msg.contains("group number 1")
        ));
    }

    #[test]
    fn test_counts_match_events() {
        let config = AssignConfig::default()
            .with_member_bounds(3, 5)
            .with_seed(5);
        let result = AssignRunner::run(staff(3), pool(12), &config).expect("valid run");
        let placed = result
            .events
            .iter()
            .filter(|e| matches!(e, AssignEvent::Placed { .. }))
            .count();
        assert_eq!(placed + result.fallback_count(), 12);
    }
}
