use serde::*;

/// Sortable period label for a planning time point.
/// Labels follow "YYYY-MM" (or finer, e.g. "YYYY-MM-DD"); ordering between
/// time points is lexicographic comparison of the label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanDate(String);

impl PlanDate {
    /// Create a new plan date label.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// Raw label as str.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Interpret the label as the first day of its calendar period.
    /// Returns `None` when the label is not a "YYYY-MM" or "YYYY-MM-DD" form.
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(&self.0, "%Y-%m-%d") {
            return Some(date);
        }
        chrono::NaiveDate::parse_from_str(&format!("{}-01", self.0), "%Y-%m-%d").ok()
    }
}

impl From<&str> for PlanDate {
    fn from(s: &str) -> Self {
        PlanDate::new(s)
    }
}

impl std::fmt::Display for PlanDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::PlanDate;

    #[test]
    fn test_plan_date_new() {
        let date = PlanDate::new("2025-03");
        assert_eq!(date.value(), "2025-03");
    }

    #[test]
    fn test_plan_date_from_str() {
        let date: PlanDate = "2025-07".into();
        assert_eq!(date.value(), "2025-07");
    }

    #[test]
    fn test_plan_date_equality() {
        let a = PlanDate::new("2025-01");
        let b = PlanDate::new("2025-01");
        let c = PlanDate::new("2025-02");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_plan_date_ordering_is_lexicographic() {
        let earlier = PlanDate::new("2024-12");
        let later = PlanDate::new("2025-01");

        assert!(earlier < later);
        assert!(later > earlier);
    }

    #[test]
    fn test_plan_date_ordering_within_year() {
        let q1 = PlanDate::new("2025-03");
        let q3 = PlanDate::new("2025-09");

        assert!(q1 < q3);
    }

    #[test]
    fn test_plan_date_finer_granularity_sorts_after_month() {
        // "2025-03-15" > "2025-03" lexicographically; mixed granularity
        // labels stay totally ordered.
        let month = PlanDate::new("2025-03");
        let day = PlanDate::new("2025-03-15");

        assert!(month < day);
    }

    #[test]
    fn test_plan_date_to_naive_date_month() {
        let date = PlanDate::new("2025-03");
        let naive = date.to_naive_date().expect("month label should parse");
        assert_eq!(naive, chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_plan_date_to_naive_date_full() {
        let date = PlanDate::new("2025-03-15");
        let naive = date.to_naive_date().expect("full label should parse");
        assert_eq!(naive, chrono::NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
    }

    #[test]
    fn test_plan_date_to_naive_date_invalid() {
        let date = PlanDate::new("next quarter");
        assert!(date.to_naive_date().is_none());
    }

    #[test]
    fn test_plan_date_display() {
        let date = PlanDate::new("2026-01");
        assert_eq!(format!("{}", date), "2026-01");
    }
}
