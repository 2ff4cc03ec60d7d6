//! The parameter edit store.
//!
//! Holds the active selection plus the full parameter union, and exposes the
//! two state transitions the form performs: changing the selection and
//! editing a single field. Transitions return a new snapshot instead of
//! mutating in place, so every observer sees a consistent state and a solve
//! in flight can never be affected by later edits.

use crate::defaults::apply_family_defaults;
use crate::schema::{BoundaryKind, EquationType, ParameterSet, ProblemSelection};
use crate::{ParamsError, ParamsResult};
use cd_core::ensure_finite;

/// How a raw edit should be coerced. The form knows the input widget kind;
/// the store performs only that coercion, never range validation (range
/// limits on the form are advisory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Boolean,
    Numeric,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    selection: ProblemSelection,
    params: ParameterSet,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterStore {
    /// Fresh store: 1D heat selected, full default union.
    pub fn new() -> Self {
        Self {
            selection: ProblemSelection::heat_1d(),
            params: ParameterSet::default(),
        }
    }

    /// Rebuild a store from previously saved state, as-is.
    pub fn from_parts(selection: ProblemSelection, params: ParameterSet) -> Self {
        Self { selection, params }
    }

    pub fn selection(&self) -> ProblemSelection {
        self.selection
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Select a new problem family.
    ///
    /// A dimension change forces the equation type back to heat (the canonical
    /// family of either dimension). The new family's default sub-object is
    /// merged over the current parameters; everything else keeps its edits.
    pub fn with_selection(&self, mut next: ProblemSelection) -> Self {
        if next.dimension != self.selection.dimension {
            next.equation_type = EquationType::Heat;
        }
        let mut params = self.params.clone();
        apply_family_defaults(&mut params, next);
        Self {
            selection: next,
            params,
        }
    }

    /// Write one field from a raw form value.
    pub fn with_field(&self, name: &str, raw: &str, kind: FieldKind) -> ParamsResult<Self> {
        let mut params = self.params.clone();
        set_field(&mut params, name, raw, kind)?;
        Ok(Self {
            selection: self.selection,
            params,
        })
    }

    /// The coercion kind a field expects, if the field exists.
    pub fn field_kind(name: &str) -> Option<FieldKind> {
        match name {
            "with_holes" => Some(FieldKind::Boolean),
            "boundary_type" => Some(FieldKind::Text),
            "length" | "time" | "num_x" | "num_t" | "diffusivity" | "wave_speed"
            | "viscosity" | "initial_velocity" | "left_value" | "right_value" | "width"
            | "height" | "mesh_density" | "mesh_quality" | "hole_rows" | "hole_cols"
            | "hole_radius" | "bottom_value" | "top_value" => Some(FieldKind::Numeric),
            _ => None,
        }
    }
}

fn set_field(params: &mut ParameterSet, name: &str, raw: &str, kind: FieldKind) -> ParamsResult<()> {
    let expected = match ParameterStore::field_kind(name) {
        Some(k) => k,
        None => {
            return Err(ParamsError::UnknownField {
                name: name.to_string(),
            })
        }
    };
    if expected != kind {
        return Err(ParamsError::KindMismatch {
            name: name.to_string(),
            expected: kind_name(expected),
        });
    }

    match kind {
        FieldKind::Boolean => {
            params.with_holes = parse_bool(raw).ok_or_else(|| ParamsError::Coerce {
                name: name.to_string(),
                raw: raw.to_string(),
                expected: "boolean",
            })?;
        }
        FieldKind::Text => {
            params.boundary_type =
                BoundaryKind::from_name(raw.trim()).ok_or_else(|| ParamsError::Coerce {
                    name: name.to_string(),
                    raw: raw.to_string(),
                    expected: "boundary kind",
                })?;
        }
        FieldKind::Numeric => {
            let value: f64 = raw.trim().parse().map_err(|_| ParamsError::Coerce {
                name: name.to_string(),
                raw: raw.to_string(),
                expected: "numeric",
            })?;
            set_numeric(params, name, value)?;
        }
    }
    Ok(())
}

fn set_numeric(params: &mut ParameterSet, name: &str, value: f64) -> ParamsResult<()> {
    match name {
        "length" => params.length = finite(value, "length")?,
        "time" => params.time = finite(value, "time")?,
        "num_x" => params.num_x = count(name, value)?,
        "num_t" => params.num_t = count(name, value)?,
        "diffusivity" => params.diffusivity = finite(value, "diffusivity")?,
        "wave_speed" => params.wave_speed = finite(value, "wave_speed")?,
        "viscosity" => params.viscosity = finite(value, "viscosity")?,
        "initial_velocity" => params.initial_velocity = finite(value, "initial_velocity")?,
        "left_value" => params.left_value = finite(value, "left_value")?,
        "right_value" => params.right_value = finite(value, "right_value")?,
        "width" => params.width = finite(value, "width")?,
        "height" => params.height = finite(value, "height")?,
        "mesh_density" => params.mesh_density = finite(value, "mesh_density")?,
        "mesh_quality" => params.mesh_quality = count(name, value)?,
        "hole_rows" => params.hole_rows = count(name, value)?,
        "hole_cols" => params.hole_cols = count(name, value)?,
        "hole_radius" => params.hole_radius = finite(value, "hole_radius")?,
        "bottom_value" => params.bottom_value = finite(value, "bottom_value")?,
        "top_value" => params.top_value = finite(value, "top_value")?,
        _ => unreachable!("field_kind admitted {name} as numeric"),
    }
    Ok(())
}

fn finite(value: f64, what: &'static str) -> ParamsResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// Count fields truncate toward zero, matching how the form's float edits
/// land in array-length positions. Negative counts cannot be represented.
fn count(name: &str, value: f64) -> ParamsResult<u32> {
    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return Err(ParamsError::Coerce {
            name: name.to_string(),
            raw: value.to_string(),
            expected: "count",
        });
    }
    Ok(value as u32)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Boolean => "boolean",
        FieldKind::Numeric => "numeric",
        FieldKind::Text => "text",
    }
}
