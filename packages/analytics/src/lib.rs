#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District leaderboard aggregation over pothole reports.
//!
//! Consumes the full report collection and produces a ranked leaderboard of
//! districts plus global summary statistics. Pure and stateless: one view
//! load, one call.

use std::collections::BTreeMap;

use pothole_map_analytics_models::{DistrictSummary, LeaderboardSummary};
use pothole_map_report_models::{DangerLevel, Report, UNKNOWN_DISTRICT};

/// Aggregates reports into a district leaderboard and summary statistics.
///
/// Districts are ranked by report count descending, tie-broken by average
/// danger descending; districts equal on both keys keep their first-appearance
/// order. A report without a danger level contributes 0 to every danger sum
/// but still counts toward report totals.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(reports: &[Report]) -> LeaderboardSummary {
    if reports.is_empty() {
        return LeaderboardSummary::empty();
    }

    let mut index: BTreeMap<String, usize> = BTreeMap::new();
    let mut groups: Vec<(String, u64, u64)> = Vec::new();
    let mut danger_total = 0_u64;

    for report in reports {
        let danger = u64::from(danger_value(report));
        danger_total += danger;

        let district = district_key(report);
        let slot = *index.entry(district.to_string()).or_insert_with(|| {
            groups.push((district.to_string(), 0, 0));
            groups.len() - 1
        });
        groups[slot].1 += 1;
        groups[slot].2 += danger;
    }

    let mut leaderboard: Vec<DistrictSummary> = groups
        .into_iter()
        .map(|(district, count, danger_sum)| DistrictSummary {
            district,
            count,
            avg_danger: danger_sum as f64 / count as f64,
        })
        .collect();

    // Stable sort keeps first-appearance order for full ties.
    leaderboard.sort_by(|a, b| {
        b.count.cmp(&a.count).then_with(|| {
            b.avg_danger
                .partial_cmp(&a.avg_danger)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    log::debug!(
        "Summarized {} reports into {} districts",
        reports.len(),
        leaderboard.len()
    );

    LeaderboardSummary {
        total_reports: reports.len() as u64,
        total_districts: leaderboard.len() as u64,
        avg_danger_level: round_one_decimal(danger_total as f64 / reports.len() as f64),
        leaderboard,
    }
}

/// Danger contribution of a report: its rating, or 0 when absent.
fn danger_value(report: &Report) -> u8 {
    report.danger_level.map_or(0, DangerLevel::value)
}

/// Grouping key for a report, substituting the sentinel for an empty district.
fn district_key(report: &Report) -> &str {
    let district = report.location.district.as_str();
    if district.is_empty() {
        UNKNOWN_DISTRICT
    } else {
        district
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use pothole_map_report_models::ReportLocation;

    use super::*;

    fn report(district: &str, danger: Option<u8>) -> Report {
        Report {
            id: format!("{district}-{danger:?}"),
            danger_level: danger.map(|v| DangerLevel::new(v).unwrap()),
            description: None,
            location: ReportLocation {
                lat: 10.0,
                lng: 76.0,
                district: district.to_string(),
                formatted_address: format!("{district}, Kerala"),
            },
            image_data: None,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn empty_input_is_degenerate_not_error() {
        assert_eq!(summarize(&[]), LeaderboardSummary::empty());
    }

    #[test]
    fn ranks_districts_by_count_then_avg_danger() {
        let reports = vec![
            report("Kochi", Some(8)),
            report("Kochi", Some(4)),
            report("Palakkad", Some(6)),
        ];

        let summary = summarize(&reports);

        assert_eq!(summary.total_reports, 3);
        assert_eq!(summary.total_districts, 2);
        assert!((summary.avg_danger_level - 6.0).abs() < f64::EPSILON);

        assert_eq!(summary.leaderboard.len(), 2);
        assert_eq!(summary.leaderboard[0].district, "Kochi");
        assert_eq!(summary.leaderboard[0].count, 2);
        assert!((summary.leaderboard[0].avg_danger - 6.0).abs() < f64::EPSILON);
        assert_eq!(summary.leaderboard[1].district, "Palakkad");
        assert_eq!(summary.leaderboard[1].count, 1);
        assert!((summary.leaderboard[1].avg_danger - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn equal_counts_tie_break_on_avg_danger() {
        let reports = vec![
            report("Thrissur", Some(3)),
            report("Kozhikode", Some(9)),
        ];

        let summary = summarize(&reports);
        assert_eq!(summary.leaderboard[0].district, "Kozhikode");
        assert_eq!(summary.leaderboard[1].district, "Thrissur");
    }

    #[test]
    fn full_ties_keep_first_appearance_order() {
        let reports = vec![
            report("Kannur", Some(5)),
            report("Alappuzha", Some(5)),
            report("Wayanad", Some(5)),
        ];

        let districts: Vec<String> = summarize(&reports)
            .leaderboard
            .into_iter()
            .map(|entry| entry.district)
            .collect();
        assert_eq!(districts, vec!["Kannur", "Alappuzha", "Wayanad"]);
    }

    #[test]
    fn counts_partition_the_input() {
        let reports = vec![
            report("Kochi", Some(2)),
            report("Kochi", Some(7)),
            report("Palakkad", None),
            report("", Some(4)),
            report("Kollam", Some(10)),
        ];

        let summary = summarize(&reports);
        let counted: u64 = summary.leaderboard.iter().map(|entry| entry.count).sum();
        assert_eq!(counted, reports.len() as u64);
    }

    #[test]
    fn empty_district_groups_under_sentinel() {
        let reports = vec![report("", Some(4)), report("", Some(6))];

        let summary = summarize(&reports);
        assert_eq!(summary.leaderboard.len(), 1);
        assert_eq!(summary.leaderboard[0].district, UNKNOWN_DISTRICT);
        assert_eq!(summary.leaderboard[0].count, 2);
    }

    #[test]
    fn missing_danger_contributes_zero() {
        let reports = vec![report("Kochi", Some(8)), report("Kochi", None)];

        let summary = summarize(&reports);
        assert!((summary.leaderboard[0].avg_danger - 4.0).abs() < f64::EPSILON);
        assert!((summary.avg_danger_level - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn global_average_rounds_to_one_decimal() {
        let reports = vec![
            report("Kochi", Some(8)),
            report("Kochi", Some(8)),
            report("Kochi", Some(9)),
        ];

        // 25 / 3 = 8.333... -> 8.3
        let summary = summarize(&reports);
        assert!((summary.avg_danger_level - 8.3).abs() < f64::EPSILON);
    }

    #[test]
    fn leaderboard_ordering_property_holds() {
        let reports = vec![
            report("A", Some(1)),
            report("B", Some(9)),
            report("B", Some(9)),
            report("C", Some(5)),
            report("C", Some(2)),
            report("D", None),
        ];

        let summary = summarize(&reports);
        for window in summary.leaderboard.windows(2) {
            assert!(
                window[0].count > window[1].count
                    || (window[0].count == window[1].count
                        && window[0].avg_danger >= window[1].avg_danger),
                "Leaderboard out of order: {window:?}"
            );
        }
    }
}
