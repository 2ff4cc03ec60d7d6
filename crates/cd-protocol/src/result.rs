//! Solver response types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One completed solve.
///
/// The 1D heat and wave solvers return the raw grid (`x`), time array (`t`)
/// and per-time solution rows (`u`, length of `t`, each row aligned to `x`);
/// Burgers and 2D heat return rendered plots only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plots: Option<PlotSet>,
}

/// Rendered plot images, base64 PNG strings passed through verbatim.
/// Which fields are present depends on the family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waterfall: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl PlotSet {
    /// Present plots as (name, base64 data) pairs, for saving or listing.
    pub fn named(&self) -> Vec<(&'static str, &str)> {
        [
            ("animation", &self.animation),
            ("individual", &self.individual),
            ("waterfall", &self.waterfall),
            ("mesh", &self.mesh),
            ("solution", &self.solution),
        ]
        .into_iter()
        .filter_map(|(name, data)| data.as_deref().map(|d| (name, d)))
        .collect()
    }
}

/// Response of the service's health probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<BTreeMap<String, String>>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_d_result_deserializes_arrays_and_plots() {
        let body = r#"{
            "x": [0.0, 0.5, 1.0],
            "t": [0.0, 0.1],
            "u": [[0.0, 1.0, 0.0], [0.0, 0.5, 0.0]],
            "plots": {"animation": "QUJD", "individual": "REVG"}
        }"#;
        let result: SolveResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.x.as_deref(), Some(&[0.0, 0.5, 1.0][..]));
        assert_eq!(result.u.as_ref().unwrap().len(), 2);
        let plots = result.plots.unwrap();
        assert_eq!(plots.animation.as_deref(), Some("QUJD"));
        assert!(plots.mesh.is_none());
    }

    #[test]
    fn plots_only_result_leaves_arrays_empty() {
        let body = r#"{"plots": {"mesh": "QQ==", "solution": "Qg=="}}"#;
        let result: SolveResult = serde_json::from_str(body).unwrap();
        assert!(result.x.is_none() && result.t.is_none() && result.u.is_none());
        let plots = result.plots.unwrap();
        let named = plots.named();
        assert_eq!(named, vec![("mesh", "QQ=="), ("solution", "Qg==")]);
    }

    #[test]
    fn health_status_reads_module_versions() {
        let body = r#"{
            "status": "healthy",
            "message": "API is running and all required modules are available",
            "modules": {"numpy": "1.24.0", "scipy": "1.10.1"}
        }"#;
        let health: HealthStatus = serde_json::from_str(body).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.modules.unwrap()["numpy"], "1.24.0");
    }
}
