//! Ranking helpers over estimator output.
//!
//! The usual last step before presentation: keep the N most distinctive
//! features per group, by whichever score the caller ranks on.

use crate::estimator::LogOddsRow;

/// The `per_group` highest-scoring rows for each group.
///
/// Groups appear in their first-appearance order within `rows`; inside a
/// group, rows are sorted by descending score with the feature label as a
/// deterministic tie-break.
pub fn top_features(rows: &[LogOddsRow], per_group: usize, unweighted: bool) -> Vec<LogOddsRow> {
    let mut group_order: Vec<&str> = Vec::new();
    for row in rows {
        if !group_order.contains(&row.group.as_str()) {
            group_order.push(&row.group);
        }
    }

    let mut out = Vec::new();
    for group in group_order {
        let mut members: Vec<&LogOddsRow> = rows.iter().filter(|r| r.group == group).collect();
        members.sort_by(|a, b| {
            b.score(unweighted)
                .total_cmp(&a.score(unweighted))
                .then_with(|| a.feature.cmp(&b.feature))
        });
        out.extend(members.into_iter().take(per_group).cloned());
    }
    out
}
