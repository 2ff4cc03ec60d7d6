//! Problem-definition files: a saved selection plus its parameter union.

use crate::schema::{ParameterSet, ProblemSelection};
use crate::ParamsResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDefinition {
    pub selection: ProblemSelection,
    #[serde(default)]
    pub parameters: ParameterSet,
}

pub fn load_yaml(path: &Path) -> ParamsResult<ProblemDefinition> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

pub fn save_yaml(path: &Path, definition: &ProblemDefinition) -> ParamsResult<()> {
    let content = serde_yaml::to_string(definition)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ParamsResult<ProblemDefinition> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_json(path: &Path, definition: &ProblemDefinition) -> ParamsResult<()> {
    let content = serde_json::to_string_pretty(definition)?;
    std::fs::write(path, content)?;
    Ok(())
}
