//! Groups and staff records.

use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use super::person::{GenderCounts, Person, PersonId, Role};
use crate::error::{AssignError, Result};
use crate::normalize::Region;

/// A leader or helper row tagged with its group number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaffRecord {
    pub group: u32,
    pub person: Person,
}

impl StaffRecord {
    pub fn new(group: u32, person: Person) -> Self {
        Self { group, person }
    }
}

/// One leader, one helper, and an ordered list of members.
///
/// Leader and helper are fixed at construction. Members are only added,
/// removed or exchanged by the allocation engine; school, region and age
/// views are recomputed from the member list on every call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Group {
    number: u32,
    leader: Person,
    helper: Person,
    members: Vec<Person>,
}

impl Group {
    pub fn new(number: u32, leader: Person, helper: Person) -> Self {
        Self {
            number,
            leader,
            helper,
            members: Vec::new(),
        }
    }

    /// Builds one group per group number from leader/helper rows.
    ///
    /// Groups come out sorted by number. Within a number, the first
    /// leader-role row and the first helper-role row are used; a number
    /// lacking either is skipped with a warning. Member-role rows are ignored.
    ///
    /// # Errors
    ///
    /// [`AssignError::NoGroups`] when no number has both a leader and a helper.
    pub fn from_staff(staff: impl IntoIterator<Item = StaffRecord>) -> Result<Vec<Group>> {
        let mut by_number: BTreeMap<u32, (Option<Person>, Option<Person>)> = BTreeMap::new();
        for record in staff {
            let slot = by_number.entry(record.group).or_default();
            match record.person.role {
                Role::Leader if slot.0.is_none() => slot.0 = Some(record.person),
                Role::Helper if slot.1.is_none() => slot.1 = Some(record.person),
                _ => {}
            }
        }

        let mut groups = Vec::with_capacity(by_number.len());
        for (number, slot) in by_number {
            match slot {
                (Some(leader), Some(helper)) => groups.push(Group::new(number, leader, helper)),
                (None, _) => warn!(group = number, "group has no leader; skipped"),
                (_, None) => warn!(group = number, "group has no helper; skipped"),
            }
        }

        if groups.is_empty() {
            return Err(AssignError::NoGroups);
        }
        Ok(groups)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn leader(&self) -> &Person {
        &self.leader
    }

    pub fn helper(&self) -> &Person {
        &self.helper
    }

    pub fn members(&self) -> &[Person] {
        &self.members
    }

    /// Member count; leader and helper are not counted.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Leader, helper, then members in order.
    pub fn persons(&self) -> impl Iterator<Item = &Person> + Clone {
        [&self.leader, &self.helper]
            .into_iter()
            .chain(self.members.iter())
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.persons().any(|p| p.id == id)
    }

    /// Gender tally over leader, helper and members.
    pub fn gender_counts(&self) -> GenderCounts {
        GenderCounts::of(self.persons())
    }

    /// Canonical schools of the current members; `""` stands for a missing
    /// school.
    pub fn schools(&self) -> HashSet<String> {
        self.members.iter().map(Person::canonical_school).collect()
    }

    /// Regions of the current members.
    pub fn regions(&self) -> HashSet<Region> {
        self.members.iter().map(Person::region_category).collect()
    }

    /// Member ages in member order.
    pub fn ages(&self) -> Vec<u32> {
        self.members.iter().map(|m| m.age).collect()
    }

    /// Appends a member. No eligibility rule is checked.
    pub fn push_member(&mut self, person: Person) {
        debug_assert!(
            !self.contains(person.id),
            "person {} already in group {}",
            person.id,
            self.number
        );
        self.members.push(person);
    }

    /// Removes and returns the member at `index`, keeping the order of the rest.
    pub(crate) fn remove_member(&mut self, index: usize) -> Person {
        self.members.remove(index)
    }

    /// Exchanges this group's member at `index` with `other`'s member at
    /// `other_index`, each taking the other's position.
    pub(crate) fn swap_member(&mut self, index: usize, other: &mut Group, other_index: usize) {
        std::mem::swap(&mut self.members[index], &mut other.members[other_index]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;

    fn staff(group: u32, id: u32, role: Role) -> StaffRecord {
        StaffRecord::new(group, Person::new(id, format!("s{id}"), Gender::Male, 35, role))
    }

    fn member(id: u32, school: &str, age: u32) -> Person {
        Person::new(id, format!("m{id}"), Gender::Female, age, Role::Member).with_school(school)
    }

    #[test]
    fn test_from_staff_sorted_and_paired() {
        let groups = Group::from_staff(vec![
            staff(2, 3, Role::Leader),
            staff(1, 1, Role::Helper),
            staff(2, 4, Role::Helper),
            staff(1, 2, Role::Leader),
        ])
        .expect("two complete groups");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].number(), 1);
        assert_eq!(groups[0].leader().id, PersonId(2));
        assert_eq!(groups[0].helper().id, PersonId(1));
        assert_eq!(groups[1].number(), 2);
    }

    #[test]
    fn test_from_staff_skips_incomplete() {
        let groups = Group::from_staff(vec![
            staff(1, 1, Role::Leader),
            staff(2, 2, Role::Leader),
            staff(2, 3, Role::Helper),
        ])
        .expect("group 2 is complete");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].number(), 2);
    }

    #[test]
    fn test_from_staff_first_of_each_role_wins() {
        let groups = Group::from_staff(vec![
            staff(1, 1, Role::Leader),
            staff(1, 2, Role::Leader),
            staff(1, 3, Role::Helper),
        ])
        .expect("complete group");
        assert_eq!(groups[0].leader().id, PersonId(1));
    }

    #[test]
    fn test_from_staff_no_groups() {
        let err = Group::from_staff(vec![staff(1, 1, Role::Leader)]).unwrap_err();
        assert_eq!(err, AssignError::NoGroups);
        assert_eq!(Group::from_staff(Vec::new()).unwrap_err(), AssignError::NoGroups);
    }

    #[test]
    fn test_derived_views_follow_membership() {
        let mut group = Group::new(
            1,
            staff(1, 1, Role::Leader).person,
            staff(1, 2, Role::Helper).person,
        );
        group.push_member(member(10, "부산대학교", 21));
        group.push_member(member(11, "서울대", 23));
        group.push_member(Person::new(12, "none", Gender::Male, 22, Role::Member));

        assert_eq!(group.len(), 3);
        assert_eq!(group.persons().count(), 5);
        assert_eq!(group.ages(), vec![21, 23, 22]);
        assert_eq!(group.schools().len(), 3);
        assert!(group.schools().contains("부산"));
        assert!(group.schools().contains(""));
        assert!(group.regions().contains(&Region::Other));
        assert_eq!(group.gender_counts(), GenderCounts { male: 3, female: 2 });

        let removed = group.remove_member(0);
        assert_eq!(removed.id, PersonId(10));
        assert!(!group.schools().contains("부산"));
        assert_eq!(group.ages(), vec![23, 22]);
    }

    #[test]
    fn test_swap_member_keeps_positions() {
        let lead = staff(1, 1, Role::Leader).person;
        let help = staff(1, 2, Role::Helper).person;
        let mut a = Group::new(1, lead.clone(), help.clone());
        let mut b = Group::new(2, lead, help);
        a.push_member(member(10, "A", 20));
        a.push_member(member(11, "B", 21));
        b.push_member(member(20, "C", 22));

        a.swap_member(1, &mut b, 0);

        assert_eq!(a.members()[1].id, PersonId(20));
        assert_eq!(b.members()[0].id, PersonId(11));
        assert_eq!(a.ages(), vec![20, 22]);
    }
}
