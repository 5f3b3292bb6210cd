//! Small geometry and color value types shared by templates and the
//! simulation.

use serde::{Deserialize, Serialize};

/// A 3D coordinate in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord3D {
    /// East-west position.
    pub x: f32,
    /// North-south position.
    pub y: f32,
    /// Height above the terrain plane.
    pub z: f32,
}

impl Coord3D {
    /// Construct a coordinate from its components.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance to another coordinate. Callers comparing against a
    /// radius should square the radius instead of taking a root here.
    pub fn dist_sq(&self, other: &Coord3D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}

/// An RGB color with components normalized to 0.0..=1.0.
///
/// Configuration files author colors as 0-255 channel values
/// (`R:100 G:114 B:245`); the parser divides them down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red component.
    pub red: f32,
    /// Green component.
    pub green: f32,
    /// Blue component.
    pub blue: f32,
}

impl RgbColor {
    /// Build a color from authored 0-255 channel values.
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f32::from(red) / 255.0,
            green: f32::from(green) / 255.0,
            blue: f32::from(blue) / 255.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_sq_is_squared_euclidean() {
        let a = Coord3D::new(0.0, 0.0, 0.0);
        let b = Coord3D::new(3.0, 4.0, 0.0);
        assert!((a.dist_sq(&b) - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn color_from_bytes_normalizes() {
        let c = RgbColor::from_bytes(255, 0, 51);
        assert!((c.red - 1.0).abs() < f32::EPSILON);
        assert!(c.green.abs() < f32::EPSILON);
        assert!((c.blue - 0.2).abs() < 1.0e-6);
    }
}
