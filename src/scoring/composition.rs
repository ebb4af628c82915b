//! Tallies a group's composition for scoring and reporting.

use crate::model::{GenderCounts, Group, Person};
use crate::normalize::{MajorCategory, Region};

/// Snapshot of the attributes the scorer looks at.
///
/// Gender, major and region tallies cover leader, helper and members; the
/// age list covers members only, in member order.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub genders: GenderCounts,
    /// Persons per [`MajorCategory`], indexed by [`MajorCategory::index`].
    pub majors: [usize; MajorCategory::COUNT],
    /// Persons per [`Region`], indexed by [`Region::index`].
    pub regions: [usize; Region::COUNT],
    pub ages: Vec<u32>,
}

impl Composition {
    pub fn of(group: &Group) -> Self {
        let mut composition = Self {
            genders: GenderCounts::default(),
            majors: [0; MajorCategory::COUNT],
            regions: [0; Region::COUNT],
            ages: group.ages(),
        };
        for person in group.persons() {
            composition.tally(person);
        }
        composition
    }

    fn tally(&mut self, person: &Person) {
        self.genders.add(person.gender);
        self.majors[person.major_category().index()] += 1;
        self.regions[person.region_category().index()] += 1;
    }

    fn untally(&mut self, person: &Person) {
        self.genders.remove(person.gender);
        let major = &mut self.majors[person.major_category().index()];
        *major = major.saturating_sub(1);
        let region = &mut self.regions[person.region_category().index()];
        *region = region.saturating_sub(1);
    }

    /// Copy of this composition with the member at `position` (`outgoing`)
    /// replaced by `incoming`, which takes over the same age slot.
    pub fn replaced(&self, position: usize, outgoing: &Person, incoming: &Person) -> Self {
        let mut next = self.clone();
        next.untally(outgoing);
        next.tally(incoming);
        if let Some(age) = next.ages.get_mut(position) {
            *age = incoming.age;
        }
        next
    }

    pub fn major_count(&self, major: MajorCategory) -> usize {
        self.majors[major.index()]
    }

    pub fn region_count(&self, region: Region) -> usize {
        self.regions[region.index()]
    }
}
