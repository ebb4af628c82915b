//! Flat finalized-assignment rows.

use crate::model::{Gender, Group, Person, PersonId, Role};

/// One person of the finalized assignment, tagged with group and role.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentRow {
    pub group: u32,
    pub role: Role,
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub major: Option<String>,
    pub cohort: Option<String>,
    pub school: Option<String>,
    pub region: Option<String>,
    pub contact: Option<String>,
    pub track: Option<String>,
}

impl AssignmentRow {
    /// Row for `person` placed in group `group` with `role`.
    pub fn new(group: u32, role: Role, person: &Person) -> Self {
        Self {
            group,
            role,
            id: person.id,
            name: person.name.clone(),
            gender: person.gender,
            age: person.age,
            major: person.major.clone(),
            cohort: person.cohort.clone(),
            school: person.school.clone(),
            region: person.region.clone(),
            contact: person.contact.clone(),
            track: person.track.clone(),
        }
    }

    /// Leader row, helper row, then one row per member in member order.
    pub fn for_group(group: &Group) -> Vec<Self> {
        let number = group.number();
        let mut rows = Vec::with_capacity(group.len() + 2);
        rows.push(Self::new(number, Role::Leader, group.leader()));
        rows.push(Self::new(number, Role::Helper, group.helper()));
        rows.extend(
            group
                .members()
                .iter()
                .map(|m| Self::new(number, Role::Member, m)),
        );
        rows
    }
}
