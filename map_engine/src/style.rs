//! Map style - the tunable aesthetics of generated geometry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a map style.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The TOML document failed to parse.
    #[error("invalid style document: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field parsed but holds a value outside its working range.
    #[error("invalid style value: {0}")]
    Invalid(String),
}

/// Tunable parameters for shape and road generation.
///
/// Hosts load a style once (from TOML or by mutating the default) and pass
/// it to the scene builder; the style never changes generation determinism,
/// only its look. Every field has a default so partial documents work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapStyle {
    /// Vertex count of territory outlines.
    pub shape_sides: u32,

    /// Perturbation strength for territory outlines (0.0 = regular polygon).
    pub shape_randomness: f32,

    /// Percentage of outline segments drawn straight, effective in steps of
    /// ten (0-100).
    pub straight_percent: u32,

    /// How far roads may wander from the direct route, as a fraction of
    /// route length.
    pub road_curviness: f32,

    /// Number of road segments on long routes.
    pub road_segments: u32,

    /// Node disc radius in world units; also the hover/click hit radius.
    pub node_radius: f32,

    /// Base radius of the territory outline around each node, world units.
    pub territory_radius: f32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            shape_sides: 8,
            shape_randomness: 0.3,
            straight_percent: 40,
            road_curviness: 0.3,
            road_segments: 3,
            node_radius: 14.0,
            territory_radius: 60.0,
        }
    }
}

impl MapStyle {
    /// Load a style from a TOML document.
    ///
    /// Missing fields fall back to their defaults; out-of-range values are
    /// rejected.
    pub fn from_toml_str(doc: &str) -> Result<Self, StyleError> {
        let style: MapStyle = toml::from_str(doc)?;
        style.validate()?;
        Ok(style)
    }

    /// Check every field against its working range.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.straight_percent > 100 {
            return Err(StyleError::Invalid(format!(
                "straight_percent must be 0-100, got {}",
                self.straight_percent
            )));
        }
        if !self.shape_randomness.is_finite() || self.shape_randomness < 0.0 {
            return Err(StyleError::Invalid(format!(
                "shape_randomness must be a finite non-negative number, got {}",
                self.shape_randomness
            )));
        }
        if !self.road_curviness.is_finite() || self.road_curviness < 0.0 {
            return Err(StyleError::Invalid(format!(
                "road_curviness must be a finite non-negative number, got {}",
                self.road_curviness
            )));
        }
        if !self.node_radius.is_finite() || self.node_radius <= 0.0 {
            return Err(StyleError::Invalid(format!(
                "node_radius must be a finite positive number, got {}",
                self.node_radius
            )));
        }
        if !self.territory_radius.is_finite() || self.territory_radius <= 0.0 {
            return Err(StyleError::Invalid(format!(
                "territory_radius must be a finite positive number, got {}",
                self.territory_radius
            )));
        }
        Ok(())
    }
}
