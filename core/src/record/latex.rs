//! LaTeX table rows for papers and reports.

use super::ResultRecord;
use crate::geometry::Coord;
use crate::solver::SolveVariant;

fn cell(c: Coord) -> String {
    format!("({:.3}, {:.3})", c.x, c.y)
}

/// One row per point, numbered from 1 in name order:
/// `$P_{1}(x,y)$ & (original) & (L1) & (L2)\\`
pub fn points_table(record: &ResultRecord) -> Vec<String> {
    record
        .points
        .values()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "$P_{{{}}}(x,y)$ & {} & {} & {}\\\\",
                i + 1,
                cell(p.original),
                cell(p.l1.coord()),
                cell(p.l2.coord())
            )
        })
        .collect()
}

/// One row per variant: `L1 & time & steps & l1_norm & l2_norm & non_zero_results\\`
pub fn results_table(record: &ResultRecord) -> Vec<String> {
    let r = &record.results;
    SolveVariant::ALL
        .iter()
        .map(|&v| {
            format!(
                "{} & {:.5} & {} & {:.3} & {:.3} & {}\\\\",
                v,
                r.time.get(v),
                r.steps.get(v),
                r.l1_norm.get(v),
                r.l2_norm.get(v),
                r.non_zero_results.get(v)
            )
        })
        .collect()
}
