//! Construction options and the on-disk config format.

use std::path::Path;

use frustumview_common::Pose;
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::visual::SharedScene;

pub const DEFAULT_FOV_DEGREES: f64 = 30.0;
pub const DEFAULT_NEAR: f64 = 10.0;
pub const DEFAULT_FAR: f64 = 100.0;

/// Builder for [`FrustumVisual::new`](crate::FrustumVisual::new).
///
/// `host`, `position`, `orientation` and `aspect_ratio` are required and
/// stay `None` until set; the remaining fields start at their defaults.
pub struct FrustumOptions<H> {
    pub host: Option<SharedScene<H>>,
    pub position: Option<DVec3>,
    pub orientation: Option<DQuat>,
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub aspect_ratio: Option<f64>,
}

impl<H> Default for FrustumOptions<H> {
    fn default() -> Self {
        Self {
            host: None,
            position: None,
            orientation: None,
            fov_degrees: DEFAULT_FOV_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            aspect_ratio: None,
        }
    }
}

impl<H> FrustumOptions<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: SharedScene<H>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn position(mut self, position: DVec3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn orientation(mut self, orientation: DQuat) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Set position and orientation together.
    pub fn pose(self, pose: Pose) -> Self {
        self.position(pose.position).orientation(pose.orientation)
    }

    pub fn fov_degrees(mut self, fov_degrees: f64) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    pub fn near(mut self, near: f64) -> Self {
        self.near = near;
        self
    }

    pub fn far(mut self, far: f64) -> Self {
        self.far = far;
        self
    }

    pub fn aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }
}

fn default_fov_degrees() -> f64 {
    DEFAULT_FOV_DEGREES
}

fn default_near() -> f64 {
    DEFAULT_NEAR
}

fn default_far() -> f64 {
    DEFAULT_FAR
}

/// JSON description of a frustum, minus the host.
///
/// ```json
/// { "position": [0, 0, 0], "orientation": [0, 0, 0, 1], "aspect_ratio": 1.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrustumConfig {
    pub position: [f64; 3],
    /// Quaternion as `[x, y, z, w]`.
    pub orientation: [f64; 4],
    #[serde(default = "default_fov_degrees")]
    pub fov_degrees: f64,
    #[serde(default = "default_near")]
    pub near: f64,
    #[serde(default = "default_far")]
    pub far: f64,
    pub aspect_ratio: f64,
}

impl FrustumConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path.as_ref())?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    pub fn pose(&self) -> Pose {
        Pose::new(
            DVec3::from_array(self.position),
            DQuat::from_array(self.orientation),
        )
    }

    /// Builder pre-filled from this config and bound to `host`.
    pub fn into_options<H>(self, host: SharedScene<H>) -> FrustumOptions<H> {
        FrustumOptions::new()
            .host(host)
            .pose(self.pose())
            .fov_degrees(self.fov_degrees)
            .near(self.near)
            .far(self.far)
            .aspect_ratio(self.aspect_ratio)
    }
}
