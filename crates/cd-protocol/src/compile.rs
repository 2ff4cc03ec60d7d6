//! The parameter-to-request compiler.
//!
//! Branches strictly on the selection, reads only the fields that family
//! declares, and synthesizes initial-condition arrays where the solver wants
//! sampled state. The payload captures everything by value, so edits made
//! after compilation cannot leak into a request already built.

use crate::payload::{BurgersPayload, Heat2dPayload, HeatPayload, SolvePayload, WavePayload};
use crate::{CompileError, ProtocolResult};
use cd_core::{constant_profile, sine_profile};
use cd_params::{Dimension, EquationType, ParameterSet, ProblemSelection};

/// Internal time step the Burgers solver integrates with.
const BURGERS_DT: f64 = 0.001;
/// Newton iterations per implicit Burgers step.
const BURGERS_NEWTON_ITERS: u32 = 5;

pub fn compile(selection: ProblemSelection, params: &ParameterSet) -> ProtocolResult<SolvePayload> {
    match (selection.dimension, selection.equation_type) {
        (Dimension::OneD, EquationType::Heat) => {
            let initial_temp = sine_profile(params.num_x as usize, params.length)?;
            Ok(SolvePayload::Heat(HeatPayload {
                length: params.length,
                time: params.time,
                num_x: params.num_x,
                num_t: params.num_t,
                diffusivity: params.diffusivity,
                initial_temp,
                boundary_type: params.boundary_type,
                left_value: params.left_value,
                right_value: params.right_value,
            }))
        }
        (Dimension::OneD, EquationType::Wave) => {
            let initial_displacement = sine_profile(params.num_x as usize, params.length)?;
            let initial_velocity =
                constant_profile(params.num_x as usize, params.initial_velocity);
            Ok(SolvePayload::Wave(WavePayload {
                length: params.length,
                time: params.time,
                num_x: params.num_x,
                num_t: params.num_t,
                wave_speed: params.wave_speed,
                initial_displacement,
                initial_velocity,
                boundary_type: params.boundary_type,
                left_value: params.left_value,
                right_value: params.right_value,
            }))
        }
        (Dimension::OneD, EquationType::Burgers) => Ok(SolvePayload::Burgers(BurgersPayload {
            dt: BURGERS_DT,
            t_final: params.time,
            nu: params.viscosity,
            n_newton_iter: BURGERS_NEWTON_ITERS,
            num_points: params.num_x,
            x_min: 0.0,
            x_max: params.length,
            left_value: params.left_value,
            right_value: params.right_value,
            ic_type: "sine".to_string(),
        })),
        (Dimension::TwoD, EquationType::Heat) => Ok(SolvePayload::Heat2d(Heat2dPayload {
            width: params.width,
            height: params.height,
            mesh_density: params.mesh_density,
            mesh_quality: params.mesh_quality,
            with_holes: params.with_holes,
            hole_rows: params.hole_rows,
            hole_cols: params.hole_cols,
            hole_radius: params.hole_radius,
            bottom_value: params.bottom_value,
            top_value: params.top_value,
            left_value: params.left_value,
            right_value: params.right_value,
        })),
        (dimension, equation_type) => Err(CompileError::UnsupportedSelection {
            dimension,
            equation_type,
        }),
    }
}
