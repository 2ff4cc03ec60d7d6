use serde::{Deserialize, Serialize};

/// One time slice of a 1D solution: the grid plus the solution row at that
/// time. Derived on demand from a [`cd_protocol::SolveResult`]; recomputed,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}
