use crate::testcase::{Classification, PriorityLevel, TestCase};

/// Aggregate counts over the full, unfiltered case list.
///
/// Always computed from every case the session holds, never from the
/// filtered view, so the numbers stay stable while the user flips filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub high_priority: usize,
    pub functional: usize,
    pub non_functional: usize,
    pub performance: usize,
    pub security: usize,
    pub usability: usize,
    pub reliability: usize,
    pub compatibility: usize,
    pub maintainability: usize,
}

impl Stats {
    /// Computes statistics for a case list.
    pub fn compute(cases: &[TestCase]) -> Self {
        let mut stats = Stats {
            total: cases.len(),
            ..Default::default()
        };

        for case in cases {
            if case.priority_level() == Some(PriorityLevel::High) {
                stats.high_priority += 1;
            }

            match case.classification() {
                Classification::Functional => stats.functional += 1,
                Classification::NonFunctional => stats.non_functional += 1,
            }

            match case.test_type.as_str() {
                "Performance" => stats.performance += 1,
                "Security" => stats.security += 1,
                "Usability" => stats.usability += 1,
                "Reliability" => stats.reliability += 1,
                "Compatibility" => stats.compatibility += 1,
                "Maintainability" => stats.maintainability += 1,
                _ => {}
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(id: i64, test_type: &str, priority: &str) -> TestCase {
        TestCase {
            id,
            test_case_name: format!("case-{id}"),
            description: None,
            preconditions: None,
            test_steps: "steps".to_string(),
            expected_result: "result".to_string(),
            priority: priority.to_string(),
            test_type: test_type.to_string(),
            requirement_file: None,
            created_at: None,
        }
    }

    #[test]
    fn test_empty_list_is_all_zeroes() {
        let stats = Stats::compute(&[]);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_counts_by_type_and_priority() {
        let cases = vec![
            case(1, "Functional", "High"),
            case(2, "Functional", "Medium"),
            case(3, "Security", "High"),
            case(4, "Performance", "Low"),
            case(5, "Usability", "high"),
        ];
        let stats = Stats::compute(&cases);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.functional, 2);
        assert_eq!(stats.non_functional, 3);
        assert_eq!(stats.security, 1);
        assert_eq!(stats.performance, 1);
        assert_eq!(stats.usability, 1);
        assert_eq!(stats.reliability, 0);
        // "high" counts: priority matching is case-insensitive
        assert_eq!(stats.high_priority, 3);
    }

    #[test]
    fn test_functional_and_non_functional_partition_the_total() {
        let cases = vec![
            case(1, "Functional", "High"),
            case(2, "Integration", "Low"),
            case(3, "Maintainability", "Medium"),
            case(4, "Compatibility", "Low"),
            case(5, "Reliability", "Low"),
        ];
        let stats = Stats::compute(&cases);
        assert_eq!(stats.functional + stats.non_functional, stats.total);
        assert_eq!(stats.total, cases.len());
    }
}
