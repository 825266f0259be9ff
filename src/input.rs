use crate::dlog;
use crate::error::WorkoutResult;
use crate::package::read_package;
use crate::training::Training;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Raw sensor package: a type code and its readings, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Validate the package and build its workout.
    pub fn read(&self) -> WorkoutResult<Box<dyn Training>> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Packages processed when the user gives none.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![1500.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parses `CODE:v1,v2,...`, e.g. `RUN:1500,1,75`.
impl FromStr for Package {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((code, values)) = s.split_once(':') else {
            bail!("expected CODE:v1,v2,... but got {s:?}");
        };
        let code = code.trim();
        if code.is_empty() {
            bail!("missing workout type in {s:?}");
        }

        let data = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse::<f64>()
                    .with_context(|| format!("reading {v:?} in {s:?} is not a number"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(code, data))
    }
}

/// Load packages from a JSON file holding an array of
/// `{"workout_type": "RUN", "data": [1500, 1, 75]}` objects.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading packages: {}", path.display()))?;
    let packages: Vec<Package> = serde_json::from_str(&text)
        .with_context(|| format!("parsing packages JSON: {}", path.display()))?;
    dlog!("packages_loaded path={} count={}", path.display(), packages.len());
    Ok(packages)
}
