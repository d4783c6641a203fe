//! Per-color threshold record and its JSON form.

use std::collections::BTreeMap;
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::DetectError;
use crate::threshold::HsvThresholds;

#[derive(thiserror::Error, Debug)]
pub enum CalibrationIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Color name -> HSV box, loaded once and read-only afterwards.
///
/// ```json
/// { "balls": { "red": { "huemin": 170, "huemax": 10, "satmin": 100,
///                       "satmax": 255, "valmin": 100, "valmax": 255 } } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    #[serde(default)]
    pub balls: BTreeMap<String, HsvThresholds>,
}

impl Calibration {
    pub fn from_json_str(raw: &str) -> Result<Self, CalibrationIoError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a JSON calibration from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CalibrationIoError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Write this calibration to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), CalibrationIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn with_color(mut self, name: impl Into<String>, thresholds: HsvThresholds) -> Self {
        self.balls.insert(name.into(), thresholds);
        self
    }

    /// Calibrated color names, sorted.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.balls.keys().map(String::as_str)
    }

    pub fn thresholds(&self, color: &str) -> Result<&HsvThresholds, DetectError> {
        self.balls
            .get(color)
            .ok_or_else(|| DetectError::MissingColor(color.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "balls": {
            "red":    { "huemin": 170, "huemax": 10, "satmin": 100, "satmax": 255, "valmin": 100, "valmax": 255 },
            "yellow": { "huemin": 20,  "huemax": 35, "satmin": 120, "satmax": 255, "valmin": 120, "valmax": 255 }
        }
    }"#;

    #[test]
    fn parses_calibration_file_layout() {
        let cal = Calibration::from_json_str(RAW).expect("parse");
        assert_eq!(cal.colors().collect::<Vec<_>>(), vec!["red", "yellow"]);
        let red = cal.thresholds("red").expect("red");
        assert!(red.wraps());
        assert_eq!(red.satmin, 100);
    }

    #[test]
    fn unknown_color_is_reported() {
        let cal = Calibration::from_json_str(RAW).expect("parse");
        assert_eq!(
            cal.thresholds("purple").unwrap_err(),
            DetectError::MissingColor("purple".to_string())
        );
    }

    #[test]
    fn missing_field_is_a_json_error() {
        let err = Calibration::from_json_str(r#"{"balls": {"red": {"huemin": 1}}}"#).unwrap_err();
        assert!(matches!(err, CalibrationIoError::Json(_)));
    }

    #[test]
    fn write_then_load_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("calibration.json");
        let cal = Calibration::default()
            .with_color("blue", HsvThresholds::new((100, 130), (80, 255), (60, 255)));
        cal.write_json(&path).expect("write");
        assert_eq!(Calibration::load_json(&path).expect("load"), cal);
        assert!(matches!(
            Calibration::load_json(dir.path().join("absent.json")),
            Err(CalibrationIoError::Io(_))
        ));
    }
}
