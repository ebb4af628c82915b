//! Participant records.

use std::fmt;

use crate::normalize::{canonical_school, MajorCategory, Region};

/// Stable identifier of a participant within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PersonId(pub u32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Binary gender category used by the ratio rule and the gender score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Gender {
    #[cfg_attr(feature = "serde", serde(alias = "남", alias = "M"))]
    Male,
    #[cfg_attr(feature = "serde", serde(alias = "여", alias = "F"))]
    Female,
}

/// Role of a participant in the finalized assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    #[cfg_attr(feature = "serde", serde(alias = "조장"))]
    Leader,
    #[cfg_attr(feature = "serde", serde(alias = "헬퍼"))]
    Helper,
    #[cfg_attr(feature = "serde", serde(alias = "조원"))]
    Member,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Leader => "leader",
            Role::Helper => "helper",
            Role::Member => "member",
        })
    }
}

/// A participant record.
///
/// The same shape serves leaders, helpers and members. `school` holds the
/// campus string for members and the school/year string for staff; every
/// derived attribute is computed from it on demand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub role: Role,
    /// Raw school or campus text.
    pub school: Option<String>,
    /// Raw department text.
    pub major: Option<String>,
    /// Enrollment cohort, e.g. `"2024"` or `"24"`; `"-"` is a placeholder.
    pub cohort: Option<String>,
    pub contact: Option<String>,
    /// Self-reported region text. Informational only; the region category
    /// is derived from `school`.
    pub region: Option<String>,
    pub track: Option<String>,
}

impl Person {
    /// Creates a record with only the required fields set.
    pub fn new(id: u32, name: impl Into<String>, gender: Gender, age: u32, role: Role) -> Self {
        Self {
            id: PersonId(id),
            name: name.into(),
            gender,
            age,
            role,
            school: None,
            major: None,
            cohort: None,
            contact: None,
            region: None,
            track: None,
        }
    }

    /// Sets the raw school/campus text.
    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    /// Sets the raw department text.
    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    /// Sets the enrollment cohort.
    pub fn with_cohort(mut self, cohort: impl Into<String>) -> Self {
        self.cohort = Some(cohort.into());
        self
    }

    /// Sets the contact string.
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Sets the self-reported region text.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the program track.
    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }

    /// Canonical school name; empty when the school is missing.
    pub fn canonical_school(&self) -> String {
        self.school.as_deref().map(canonical_school).unwrap_or_default()
    }

    pub fn major_category(&self) -> MajorCategory {
        MajorCategory::classify(self.major.as_deref().unwrap_or(""))
    }

    pub fn region_category(&self) -> Region {
        Region::classify(self.school.as_deref().unwrap_or(""))
    }

    /// Last two characters of the cohort, if a real cohort is recorded.
    ///
    /// Missing, blank, placeholder (`"-"`) and single-character cohorts
    /// yield `None`.
    pub fn cohort_suffix(&self) -> Option<&str> {
        let cohort = self.cohort.as_deref()?.trim();
        if cohort.is_empty() || cohort == "-" {
            return None;
        }
        let (start, _) = cohort.char_indices().rev().nth(1)?;
        Some(&cohort[start..])
    }
}

/// Male/female tally over a set of persons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
}

impl GenderCounts {
    /// Tallies the given persons.
    pub fn of<'a>(persons: impl IntoIterator<Item = &'a Person>) -> Self {
        let mut counts = Self::default();
        for person in persons {
            counts.add(person.gender);
        }
        counts
    }

    pub fn add(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
    }

    pub fn remove(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male = self.male.saturating_sub(1),
            Gender::Female => self.female = self.female.saturating_sub(1),
        }
    }

    /// Copy of these counts with one more person of `gender`.
    pub fn with(mut self, gender: Gender) -> Self {
        self.add(gender);
        self
    }

    pub fn total(&self) -> usize {
        self.male + self.female
    }

    /// Absolute difference between the two counts.
    pub fn gap(&self) -> usize {
        self.male.abs_diff(self.female)
    }

    /// Largest absolute deviation of either count from its expected value,
    /// where the expected male count is `total × male_ratio` and the expected
    /// female count is `total × (1 − male_ratio)`.
    pub fn deviation(&self, male_ratio: f64) -> f64 {
        let total = self.total() as f64;
        let male_diff = (self.male as f64 - total * male_ratio).abs();
        let female_diff = (self.female as f64 - total * (1.0 - male_ratio)).abs();
        male_diff.max(female_diff)
    }
}
