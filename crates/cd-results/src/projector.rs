//! Selecting representative times and re-projecting solution rows.

use crate::types::Snapshot;
use cd_protocol::SolveResult;

/// Tolerance for matching a requested time against the solver's time array.
pub const TIME_MATCH_TOLERANCE: f64 = 1e-6;

/// Five positions summarizing a time series: start, quartiles, end.
///
/// For `time_count < 5` the positions collide and the duplicates are kept;
/// the summary is positional, and collapsing it would change how many
/// snapshot records downstream consumers see. An empty series has no
/// positions at all.
pub fn representative_indices(time_count: usize) -> Vec<usize> {
    if time_count == 0 {
        return Vec::new();
    }
    vec![
        0,
        time_count / 4,
        time_count / 2,
        3 * time_count / 4,
        time_count - 1,
    ]
}

/// The representative indices of `result.t`, resolved to time values.
pub fn representative_times(result: &SolveResult) -> Vec<f64> {
    let Some(t) = result.t.as_ref() else {
        return Vec::new();
    };
    representative_indices(t.len())
        .into_iter()
        .map(|i| t[i])
        .collect()
}

/// First index whose time lies within `tolerance` of `target`.
///
/// This is tolerance equality, not a nearest-neighbor search: if several
/// entries qualify, the lowest index wins; if none do, there is no match.
pub fn nearest_index_within(times: &[f64], target: f64, tolerance: f64) -> Option<usize> {
    times.iter().position(|t| (t - target).abs() < tolerance)
}

/// [`nearest_index_within`] at the default tolerance.
pub fn nearest_index(times: &[f64], target: f64) -> Option<usize> {
    nearest_index_within(times, target, TIME_MATCH_TOLERANCE)
}

/// Build snapshots for `selected_times`, in the order given.
///
/// Times that match nothing in `result.t` are dropped. Results without raw
/// arrays (Burgers, 2D heat) project to nothing.
pub fn project(result: &SolveResult, selected_times: &[f64]) -> Vec<Snapshot> {
    let (Some(x), Some(t), Some(u)) = (result.x.as_ref(), result.t.as_ref(), result.u.as_ref())
    else {
        return Vec::new();
    };
    selected_times
        .iter()
        .filter_map(|&target| {
            let idx = nearest_index(t, target)?;
            let row = u.get(idx)?;
            Some(Snapshot {
                time: t[idx],
                x: x.clone(),
                y: row.clone(),
            })
        })
        .collect()
}
