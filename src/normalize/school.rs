//! School name canonicalization.

/// Institutional tokens removed from school names: "university", "college",
/// "main campus" and "campus".
const SCHOOL_TOKENS: [&str; 4] = ["대학교", "대학", "본", "캠퍼스"];

/// Strips institutional suffixes and surrounding whitespace from a school or
/// campus string.
///
/// Stripping repeats until nothing changes, so the result is a fixed point:
/// `canonical_school(&canonical_school(s)) == canonical_school(s)`.
///
/// # Examples
///
/// ```
/// use u_cohort::normalize::canonical_school;
///
/// assert_eq!(canonical_school("부산대학교"), "부산");
/// assert_eq!(canonical_school(" 연세대 "), "연세대");
/// assert_eq!(canonical_school(""), "");
/// ```
pub fn canonical_school(raw: &str) -> String {
    let mut current = raw.trim().to_string();
    loop {
        let mut next = current.clone();
        for token in SCHOOL_TOKENS {
            next = next.replace(token, "");
        }
        let next = next.trim().to_string();
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_university_and_college() {
        assert_eq!(canonical_school("서울대학교"), "서울");
        assert_eq!(canonical_school("경희대학"), "경희");
    }

    #[test]
    fn test_strips_campus_tokens() {
        assert_eq!(canonical_school("고려대 본캠퍼스"), "고려대");
        assert_eq!(canonical_school("연세대학교 원주캠퍼스"), "연세 원주");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(canonical_school(""), "");
        assert_eq!(canonical_school("   "), "");
        assert_eq!(canonical_school("캠퍼스"), "");
    }

    #[test]
    fn test_nested_tokens_reach_fixed_point() {
        // Removing the inner token exposes an outer one.
        let once = canonical_school("대대학학");
        assert_eq!(once, "");
        assert_eq!(canonical_school(&once), once);
    }

    #[test]
    fn test_plain_names_untouched() {
        assert_eq!(canonical_school("충북대"), "충북대");
        assert_eq!(canonical_school("Seoul"), "Seoul");
    }
}
