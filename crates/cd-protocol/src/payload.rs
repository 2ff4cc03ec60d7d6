//! Request payloads, one shape per family.
//!
//! Field names are the solver's wire names; do not rename without a
//! server-side migration.

use cd_params::BoundaryKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatPayload {
    pub length: f64,
    pub time: f64,
    pub num_x: u32,
    pub num_t: u32,
    pub diffusivity: f64,
    pub initial_temp: Vec<f64>,
    pub boundary_type: BoundaryKind,
    pub left_value: f64,
    pub right_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavePayload {
    pub length: f64,
    pub time: f64,
    pub num_x: u32,
    pub num_t: u32,
    pub wave_speed: f64,
    pub initial_displacement: Vec<f64>,
    pub initial_velocity: Vec<f64>,
    pub boundary_type: BoundaryKind,
    pub left_value: f64,
    pub right_value: f64,
}

/// The Burgers solver has its own parameter dialect: a fixed internal time
/// step, a fixed Newton iteration count, and an initial-condition selector
/// instead of a sampled array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurgersPayload {
    pub dt: f64,
    #[serde(rename = "T")]
    pub t_final: f64,
    pub nu: f64,
    pub n_newton_iter: u32,
    pub num_points: u32,
    pub x_min: f64,
    pub x_max: f64,
    pub left_value: f64,
    pub right_value: f64,
    pub ic_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heat2dPayload {
    pub width: f64,
    pub height: f64,
    pub mesh_density: f64,
    pub mesh_quality: u32,
    pub with_holes: bool,
    pub hole_rows: u32,
    pub hole_cols: u32,
    pub hole_radius: f64,
    pub bottom_value: f64,
    pub top_value: f64,
    pub left_value: f64,
    pub right_value: f64,
}

/// A compiled request: the body plus the endpoint it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolvePayload {
    Heat(HeatPayload),
    Wave(WavePayload),
    Burgers(BurgersPayload),
    Heat2d(Heat2dPayload),
}

impl SolvePayload {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Heat(_) => "/api/heat-equation",
            Self::Wave(_) => "/api/wave-equation",
            Self::Burgers(_) => "/api/burgers-equation",
            Self::Heat2d(_) => "/api/heat-equation-2d",
        }
    }

    /// Whether the response will carry raw x/t/u arrays (only the 1D heat
    /// and wave solvers return them).
    pub fn returns_time_series(&self) -> bool {
        matches!(self, Self::Heat(_) | Self::Wave(_))
    }
}
