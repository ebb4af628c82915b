//! Region classification from school/campus text.

use std::fmt;

/// Coarse geographic bucket of a school or campus.
///
/// [`Region::Other`] never earns region-diversity credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Region {
    CapitalArea,
    DaeguGyeongbuk,
    BusanGyeongnam,
    Jeonbuk,
    ChungbukCheonan,
    Gangwon,
    GwangjuJeonnam,
    DaejeonChungnam,
    Other,
}

/// Keyword groups in match order; the first group with a keyword contained
/// in the text wins.
const REGION_KEYWORDS: [(Region, &[&str]); 8] = [
    (Region::CapitalArea, &["서울", "연세", "고려", "성균관", "경기"]),
    (Region::DaeguGyeongbuk, &["대구", "경북"]),
    (Region::BusanGyeongnam, &["부산", "경남"]),
    (Region::Jeonbuk, &["전북"]),
    (Region::ChungbukCheonan, &["충북", "천안"]),
    (Region::Gangwon, &["강원"]),
    (Region::GwangjuJeonnam, &["광주", "전남"]),
    (Region::DaejeonChungnam, &["대전", "충남"]),
];

impl Region {
    /// Number of variants, for fixed-size tallies.
    pub const COUNT: usize = 9;

    /// All regions in declaration order.
    pub const ALL: [Region; Self::COUNT] = [
        Region::CapitalArea,
        Region::DaeguGyeongbuk,
        Region::BusanGyeongnam,
        Region::Jeonbuk,
        Region::ChungbukCheonan,
        Region::Gangwon,
        Region::GwangjuJeonnam,
        Region::DaejeonChungnam,
        Region::Other,
    ];

    /// Classifies a school/campus string by keyword substring match.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_cohort::normalize::Region;
    ///
    /// assert_eq!(Region::classify("연세대"), Region::CapitalArea);
    /// assert_eq!(Region::classify("대구한 본2"), Region::DaeguGyeongbuk);
    /// assert_eq!(Region::classify("제주대"), Region::Other);
    /// ```
    pub fn classify(raw: &str) -> Self {
        let text = raw.trim();
        REGION_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(region, _)| *region)
            .unwrap_or(Region::Other)
    }

    /// Whether this region counts toward diversity credit.
    pub fn is_known(self) -> bool {
        self != Region::Other
    }

    /// Position in [`ALL`](Self::ALL), for array-backed tallies.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::CapitalArea => "capital-area",
            Region::DaeguGyeongbuk => "daegu-gyeongbuk",
            Region::BusanGyeongnam => "busan-gyeongnam",
            Region::Jeonbuk => "jeonbuk",
            Region::ChungbukCheonan => "chungbuk-cheonan",
            Region::Gangwon => "gangwon",
            Region::GwangjuJeonnam => "gwangju-jeonnam",
            Region::DaejeonChungnam => "daejeon-chungnam",
            Region::Other => "other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
