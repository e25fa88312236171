// Day-of-week name lookup
// Sunday-first indices (0 = Sunday .. 6 = Saturday)

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Returned for any index outside 0..=6, or when no index is given
pub const INVALID_DAY_NAME: &str = "잘못된 숫자입니다.";

/// Korean day names, Sunday first
pub const KOREAN_DAY_NAMES: [&str; 7] = [
    "일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일",
];

/// Map a Sunday-first day index to its Korean name.
///
/// Every input has an answer: out-of-range indices and `None` produce
/// [`INVALID_DAY_NAME`].
pub fn korean_day_name(day: Option<i64>) -> &'static str {
    match day {
        Some(index @ 0..=6) => KOREAN_DAY_NAMES[index as usize],
        _ => INVALID_DAY_NAME,
    }
}

/// Korean name for a chrono weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    korean_day_name(Some(i64::from(weekday.num_days_from_sunday())))
}

/// A day-name table that can be overridden from the settings file.
///
/// The default is the Korean table used by [`korean_day_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayNames {
    /// Sunday first
    pub names: [String; 7],
    pub fallback: String,
}

impl Default for DayNames {
    fn default() -> Self {
        Self {
            names: KOREAN_DAY_NAMES.map(String::from),
            fallback: INVALID_DAY_NAME.to_string(),
        }
    }
}

impl DayNames {
    pub fn resolve(&self, day: Option<i64>) -> &str {
        day.and_then(|d| usize::try_from(d).ok())
            .and_then(|index| self.names.get(index))
            .map_or(self.fallback.as_str(), String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "일요일" ; "sunday")]
    #[test_case(1, "월요일" ; "monday")]
    #[test_case(2, "화요일" ; "tuesday")]
    #[test_case(3, "수요일" ; "wednesday")]
    #[test_case(4, "목요일" ; "thursday")]
    #[test_case(5, "금요일" ; "friday")]
    #[test_case(6, "토요일" ; "saturday")]
    fn test_known_indices_map_to_day_names(day: i64, expected: &str) {
        assert_eq!(korean_day_name(Some(day)), expected);
    }

    #[test_case(Some(-1) ; "negative")]
    #[test_case(Some(7) ; "one past saturday")]
    #[test_case(Some(9) ; "nine")]
    #[test_case(Some(100) ; "hundred")]
    #[test_case(Some(i64::MIN) ; "min")]
    #[test_case(Some(i64::MAX) ; "max")]
    #[test_case(None ; "absent")]
    fn test_unknown_indices_fall_back(day: Option<i64>) {
        assert_eq!(korean_day_name(day), INVALID_DAY_NAME);
    }

    #[test]
    fn test_wednesday_scenario() {
        assert_eq!(korean_day_name(Some(3)), "수요일");
    }

    #[test]
    fn test_weekday_name_is_sunday_first() {
        assert_eq!(weekday_name(Weekday::Sun), "일요일");
        assert_eq!(weekday_name(Weekday::Mon), "월요일");
        assert_eq!(weekday_name(Weekday::Sat), "토요일");
    }

    #[test]
    fn test_default_table_matches_fixed_lookup() {
        let names = DayNames::default();
        for day in -2..10 {
            assert_eq!(names.resolve(Some(day)), korean_day_name(Some(day)));
        }
        assert_eq!(names.resolve(None), korean_day_name(None));
    }

    #[test]
    fn test_custom_table_uses_its_own_fallback() {
        let names = DayNames {
            names: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(String::from),
            fallback: "invalid number".to_string(),
        };
        assert_eq!(names.resolve(Some(3)), "Wed");
        assert_eq!(names.resolve(Some(7)), "invalid number");
        assert_eq!(names.resolve(None), "invalid number");
    }
}
