//! TOML configuration for the scene and the CLI.
//!
//! Every section and field is optional; missing values fall back to the
//! defaults of [`SceneConfig`] and [`SceneState`]. Unknown keys are rejected.
//!
//! ```toml
//! [links]
//! l1 = 10.0
//! l2 = 8.0
//!
//! [initial]
//! theta1_deg = 45.0
//! theta2_deg = 45.0
//! target = { x = 10.0, y = 10.0 }
//!
//! [canvas]
//! width = 400.0
//! height = 400.0
//! scale = 10.0
//!
//! [controls.target_x]
//! min = -18.0
//! max = 18.0
//! step = 0.1
//! ```
//!
//! `[links]` overrides `initial.links`, and `[controls.*]` overrides
//! `[canvas.controls.*]`, field by field.

use crate::controls::{ControlRange, ControlRanges, SceneState};
use crate::error::{ArmError, Result};
use crate::geometry::{LinkLengths, Point2D};
use crate::scene::{Scene, SceneConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct ArmConfig {
    pub initial: SceneState,
    pub canvas: SceneConfig,
}

impl ArmConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ArmConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the initial state, link lengths, control ranges and canvas geometry.
    pub fn validate(&self) -> Result<()> {
        let initial = &self.initial;
        for (control, value) in [
            ("initial.theta1_deg", initial.theta1_deg),
            ("initial.theta2_deg", initial.theta2_deg),
            ("initial.target.x", initial.target.x),
            ("initial.target.y", initial.target.y),
        ] {
            if !value.is_finite() {
                return Err(ArmError::NonFiniteInput {
                    control: control.to_string(),
                    value,
                });
            }
        }
        LinkLengths::checked(initial.links.l1, initial.links.l2)?;
        self.canvas.controls.validate()?;
        for (name, value) in [
            ("width", self.canvas.width),
            ("height", self.canvas.height),
            ("scale", self.canvas.scale),
            ("line_width", self.canvas.line_width),
            ("marker_radius", self.canvas.marker_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ArmError::InvalidRange {
                    control: format!("canvas.{name}"),
                    min: value,
                    max: value,
                    step: 0.0,
                });
            }
        }
        Ok(())
    }

    pub fn into_scene(self) -> Scene {
        Scene::new(self.canvas).with_state(self.initial)
    }
}

// On-disk layout. Every field is optional and merged onto the defaults.

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    links: LinksSection,
    initial: InitialSection,
    canvas: CanvasSection,
    controls: ControlsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LinksSection {
    l1: Option<f64>,
    l2: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PointSection {
    x: Option<f64>,
    y: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct InitialSection {
    theta1_deg: Option<f64>,
    theta2_deg: Option<f64>,
    target: PointSection,
    links: LinksSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CanvasSection {
    width: Option<f64>,
    height: Option<f64>,
    scale: Option<f64>,
    line_width: Option<f64>,
    marker_radius: Option<f64>,
    controls: ControlsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RangeSection {
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ControlsSection {
    theta1: RangeSection,
    theta2: RangeSection,
    target_x: RangeSection,
    target_y: RangeSection,
    l1: RangeSection,
    l2: RangeSection,
}

fn merge(slot: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *slot = v;
    }
}

impl LinksSection {
    fn apply(&self, links: &mut LinkLengths) {
        merge(&mut links.l1, self.l1);
        merge(&mut links.l2, self.l2);
    }
}

impl PointSection {
    fn apply(&self, point: &mut Point2D) {
        merge(&mut point.x, self.x);
        merge(&mut point.y, self.y);
    }
}

impl RangeSection {
    fn apply(&self, range: &mut ControlRange) {
        merge(&mut range.min, self.min);
        merge(&mut range.max, self.max);
        merge(&mut range.step, self.step);
    }
}

impl ControlsSection {
    fn apply(&self, ranges: &mut ControlRanges) {
        self.theta1.apply(&mut ranges.theta1);
        self.theta2.apply(&mut ranges.theta2);
        self.target_x.apply(&mut ranges.target_x);
        self.target_y.apply(&mut ranges.target_y);
        self.l1.apply(&mut ranges.l1);
        self.l2.apply(&mut ranges.l2);
    }
}

impl From<ConfigFile> for ArmConfig {
    fn from(file: ConfigFile) -> Self {
        let mut config = ArmConfig::default();

        let initial = &mut config.initial;
        merge(&mut initial.theta1_deg, file.initial.theta1_deg);
        merge(&mut initial.theta2_deg, file.initial.theta2_deg);
        file.initial.target.apply(&mut initial.target);
        file.initial.links.apply(&mut initial.links);
        file.links.apply(&mut initial.links);

        let canvas = &mut config.canvas;
        merge(&mut canvas.width, file.canvas.width);
        merge(&mut canvas.height, file.canvas.height);
        merge(&mut canvas.scale, file.canvas.scale);
        merge(&mut canvas.line_width, file.canvas.line_width);
        merge(&mut canvas.marker_radius, file.canvas.marker_radius);
        file.canvas.controls.apply(&mut canvas.controls);
        file.controls.apply(&mut canvas.controls);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ArmConfig::from_toml_str("").unwrap();
        assert_eq!(config, ArmConfig::default());
        assert_eq!(config.initial.links, LinkLengths::new(10.0, 8.0));
        assert_eq!(config.canvas.scale, 10.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml_content = r#"
[links]
l1 = 6.0
l2 = 4.5

[initial]
target = { x = -3.0, y = 2.0 }

[canvas]
scale = 20.0

[canvas.controls.l1]
min = 0.5
max = 12.0
step = 0.5
"#;
        let config = ArmConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.initial.links, LinkLengths::new(6.0, 4.5));
        assert_eq!(config.initial.target, Point2D::new(-3.0, 2.0));
        assert_eq!(config.initial.theta1_deg, 45.0);
        assert_eq!(config.canvas.scale, 20.0);
        assert_eq!(config.canvas.width, 400.0);
        assert_eq!(config.canvas.controls.l1.max, 12.0);
        assert_eq!(config.canvas.controls.l2.max, 18.0);
    }

    #[test]
    fn single_link_length_keeps_the_other() {
        let config = ArmConfig::from_toml_str("[links]\nl1 = 12.0\n").unwrap();
        assert_eq!(config.initial.links, LinkLengths::new(12.0, 8.0));
    }

    #[test]
    fn partial_target_keeps_default_coordinate() {
        let config = ArmConfig::from_toml_str("[initial]\ntarget = { x = 3.0 }\n").unwrap();
        assert_eq!(config.initial.target, Point2D::new(3.0, 10.0));
    }

    #[test]
    fn partial_control_range_keeps_default_bounds() {
        let config = ArmConfig::from_toml_str("[canvas.controls.l1]\nmax = 12.0\n").unwrap();
        assert_eq!(config.canvas.controls.l1, ControlRange::new(1.0, 12.0, 0.1));
    }

    #[test]
    fn top_level_controls_override_canvas_controls() {
        let toml_content = r#"
[canvas.controls.l1]
max = 15.0

[controls.l1]
min = 0.5
max = 12.0
step = 0.5

[controls.theta2]
step = 5.0
"#;
        let config = ArmConfig::from_toml_str(toml_content).unwrap();
        let controls = &config.canvas.controls;
        assert_eq!(controls.l1, ControlRange::new(0.5, 12.0, 0.5));
        assert_eq!(controls.theta2, ControlRange::new(-180.0, 180.0, 5.0));
        assert_eq!(controls.theta1, ControlRange::new(-180.0, 180.0, 1.0));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ArmConfig::from_toml_str("[controls.l3]\nmax = 12.0\n").unwrap_err();
        assert!(matches!(err, ArmError::Toml(_)));

        let err = ArmConfig::from_toml_str("[links]\nlength = 4.0\n").unwrap_err();
        assert!(matches!(err, ArmError::Toml(_)));
    }

    #[test]
    fn non_finite_initial_values_are_rejected() {
        let err = ArmConfig::from_toml_str("[initial]\ntheta1_deg = nan\n").unwrap_err();
        assert!(matches!(err, ArmError::NonFiniteInput { .. }));

        let err = ArmConfig::from_toml_str("[initial]\ntarget = { y = inf }\n").unwrap_err();
        assert!(matches!(err, ArmError::NonFiniteInput { .. }));
    }

    #[test]
    fn zero_link_is_rejected() {
        let err = ArmConfig::from_toml_str("[links]\nl1 = 0.0\nl2 = 8.0\n").unwrap_err();
        assert!(matches!(err, ArmError::InvalidLinkLength { name: "l1", .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ArmConfig::from_toml_str("[links\nl1 = ").unwrap_err();
        assert!(matches!(err, ArmError::Toml(_)));
    }

    #[test]
    fn negative_scale_is_rejected() {
        let err = ArmConfig::from_toml_str("[canvas]\nscale = -1.0\n").unwrap_err();
        assert!(matches!(err, ArmError::InvalidRange { .. }));
    }

    #[test]
    fn serialized_config_loads_back() {
        let mut config = ArmConfig::default();
        config.initial.theta1_deg = -30.0;
        config.canvas.controls.l2 = ControlRange::new(2.0, 9.0, 0.5);

        let text = toml::to_string(&config).unwrap();
        assert_eq!(ArmConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[links]\nl1 = 12.0\nl2 = 3.0").unwrap();

        let config = ArmConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.initial.links, LinkLengths::new(12.0, 3.0));

        let scene = config.into_scene();
        assert_eq!(scene.state().links.l2, 3.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ArmConfig::from_file("/nonexistent/planar-arm.toml").unwrap_err();
        assert!(matches!(err, ArmError::Io(_)));
    }
}
