//! Major (department) classification.

use std::fmt;

/// Coarse classification of an academic department.
///
/// The first four variants are the *priority* majors subject to the
/// at-least-two-per-group diversity objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MajorCategory {
    Medical,
    Dental,
    KoreanMedicine,
    Nursing,
    Other,
}

/// Departments that contain a medical keyword but are not medical schools
/// (biomedical engineering, pharmacy).
const EXCLUDED_DEPARTMENTS: [&str; 2] = ["의공학과", "약학과"];

impl MajorCategory {
    /// Number of variants, for fixed-size tallies.
    pub const COUNT: usize = 5;

    /// All categories in declaration order.
    pub const ALL: [MajorCategory; Self::COUNT] = [
        MajorCategory::Medical,
        MajorCategory::Dental,
        MajorCategory::KoreanMedicine,
        MajorCategory::Nursing,
        MajorCategory::Other,
    ];

    /// The priority majors.
    pub const PRIORITY: [MajorCategory; 4] = [
        MajorCategory::Medical,
        MajorCategory::Dental,
        MajorCategory::KoreanMedicine,
        MajorCategory::Nursing,
    ];

    /// Classifies a raw department string.
    ///
    /// Single-character abbreviations (`의`, `치`, `한`, `간`) map directly.
    /// Full department names are matched by keyword, with biomedical
    /// engineering and pharmacy forced to [`Other`](Self::Other). A name
    /// containing `한의` is never classified as plain medicine.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_cohort::normalize::MajorCategory;
    ///
    /// assert_eq!(MajorCategory::classify("의"), MajorCategory::Medical);
    /// assert_eq!(MajorCategory::classify("한의예과"), MajorCategory::KoreanMedicine);
    /// assert_eq!(MajorCategory::classify("약학과"), MajorCategory::Other);
    /// ```
    pub fn classify(raw: &str) -> Self {
        let department = raw.trim();

        match department {
            "의" => return MajorCategory::Medical,
            "치" => return MajorCategory::Dental,
            "한" => return MajorCategory::KoreanMedicine,
            "간" => return MajorCategory::Nursing,
            _ => {}
        }

        if EXCLUDED_DEPARTMENTS
            .iter()
            .any(|excluded| department.contains(excluded))
        {
            return MajorCategory::Other;
        }

        let korean_medicine = department.contains("한의");
        if department.contains('의') && !korean_medicine {
            MajorCategory::Medical
        } else if department.contains('치') {
            MajorCategory::Dental
        } else if korean_medicine {
            MajorCategory::KoreanMedicine
        } else if department.contains("간호") {
            MajorCategory::Nursing
        } else {
            MajorCategory::Other
        }
    }

    /// Whether this is one of the four priority majors.
    pub fn is_priority(self) -> bool {
        self != MajorCategory::Other
    }

    /// Position in [`ALL`](Self::ALL), for array-backed tallies.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            MajorCategory::Medical => "medical",
            MajorCategory::Dental => "dental",
            MajorCategory::KoreanMedicine => "korean-medicine",
            MajorCategory::Nursing => "nursing",
            MajorCategory::Other => "other",
        }
    }
}

impl fmt::Display for MajorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
