mod tiled;

pub use tiled::TiledRenderer;

use crate::camera::Camera;
use crate::math::Vec3;

/// Screen-space basis, computed once per render. `fov` is normalized by the
/// smaller image dimension so the field of view survives resizing.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CameraBasis {
    pub right: Vec3,
    pub down: Vec3,
    pub corner: Vec3,
}

impl CameraBasis {
    pub fn new(camera: &Camera, width: usize, height: usize) -> CameraBasis {
        let fov = camera.fov * 512.0 / width.min(height) as f32;
        let right = camera.direction.cross(camera.normal).normalized() * fov;
        let down = camera.direction.cross(right).normalized() * fov;
        let corner = camera.direction - (right + down) * 0.5;
        CameraBasis {
            right,
            down,
            corner,
        }
    }
}
