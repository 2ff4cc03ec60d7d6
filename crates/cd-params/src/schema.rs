//! Problem selection and parameter schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "1D")]
    OneD,
    #[serde(rename = "2D")]
    TwoD,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquationType {
    Heat,
    Wave,
    Burgers,
}

/// Which problem family a solve targets.
///
/// `equation_type` only carries meaning for 1D; every 2D selection is the
/// 2D heat family. Invalid pairings stay representable so the compiler can
/// reject them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSelection {
    pub dimension: Dimension,
    pub equation_type: EquationType,
}

impl ProblemSelection {
    pub fn heat_1d() -> Self {
        Self {
            dimension: Dimension::OneD,
            equation_type: EquationType::Heat,
        }
    }

    pub fn wave_1d() -> Self {
        Self {
            dimension: Dimension::OneD,
            equation_type: EquationType::Wave,
        }
    }

    pub fn burgers_1d() -> Self {
        Self {
            dimension: Dimension::OneD,
            equation_type: EquationType::Burgers,
        }
    }

    pub fn heat_2d() -> Self {
        Self {
            dimension: Dimension::TwoD,
            equation_type: EquationType::Heat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    Fixed,
    Neumann,
    Periodic,
}

impl BoundaryKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fixed" => Some(Self::Fixed),
            "neumann" => Some(Self::Neumann),
            "periodic" => Some(Self::Periodic),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Neumann => "neumann",
            Self::Periodic => "periodic",
        }
    }
}

/// Union of the fields every family can read.
///
/// A solve only consumes the subset its family declares; the rest is carried
/// along so edits survive switching between families. Boundary values are
/// still sent when the boundary kind is periodic, the solver ignores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    // 1D domain and discretization
    pub length: f64,
    pub time: f64,
    pub num_x: u32,
    pub num_t: u32,

    // physical coefficients
    pub diffusivity: f64,
    pub wave_speed: f64,
    pub viscosity: f64,
    pub initial_velocity: f64,

    // boundary conditions (1D kinds; 2D uses the edge temperatures below)
    pub boundary_type: BoundaryKind,
    pub left_value: f64,
    pub right_value: f64,

    // 2D domain, meshing, holes
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
}
