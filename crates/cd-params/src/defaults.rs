//! Family default tables.
//!
//! The sub-objects below are merged over an existing parameter set when the
//! selection changes; any field a sub-object does not name keeps its edited
//! value.

use crate::schema::{BoundaryKind, Dimension, EquationType, ParameterSet, ProblemSelection};

impl Default for ParameterSet {
    /// Union of every family's defaults (the initial form state).
    fn default() -> Self {
        Self {
            length: 1.0,
            time: 0.5,
            num_x: 50,
            num_t: 1000,
            diffusivity: 0.01,
            wave_speed: 1.0,
            viscosity: 0.01,
            initial_velocity: 0.0,
            boundary_type: BoundaryKind::Fixed,
            left_value: 0.0,
            right_value: 1.0,
            width: 10.0,
            height: 10.0,
            mesh_density: 0.5,
            mesh_quality: 30,
            with_holes: false,
            hole_rows: 1,
            hole_cols: 1,
            hole_radius: 0.5,
            bottom_value: 0.0,
            top_value: 100.0,
        }
    }
}

/// Merge the selection's default sub-object over `params`.
pub fn apply_family_defaults(params: &mut ParameterSet, selection: ProblemSelection) {
    match selection.dimension {
        Dimension::TwoD => {
            params.width = 10.0;
            params.height = 10.0;
            params.mesh_density = 0.5;
            params.mesh_quality = 30;
            params.with_holes = false;
            params.hole_rows = 1;
            params.hole_cols = 1;
            params.hole_radius = 0.5;
            params.bottom_value = 0.0;
            params.top_value = 100.0;
            params.left_value = 0.0;
            params.right_value = 0.0;
        }
        Dimension::OneD => match selection.equation_type {
            EquationType::Heat => {
                params.time = 0.5;
                params.num_x = 50;
                params.num_t = 1000;
                params.diffusivity = 0.01;
                params.boundary_type = BoundaryKind::Fixed;
                params.left_value = 0.0;
                params.right_value = 1.0;
            }
            EquationType::Wave => {
                params.time = 1.0;
                params.num_x = 100;
                params.num_t = 500;
                params.wave_speed = 1.0;
            }
            EquationType::Burgers => {
                params.time = 1.0;
                params.num_x = 100;
                params.viscosity = 0.01;
                params.initial_velocity = 0.0;
            }
        },
    }
}
