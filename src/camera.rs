use crate::math::{Point3, Vec3};

/// Pinhole camera with a circular thin lens bolted on. `fov` is consumed by
/// the renderer as an angular multiplier on the screen basis, `dof` is the
/// aperture radius on the lens plane and `focus` the focal distance.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub position: Point3,
    pub direction: Vec3,
    pub normal: Vec3,
    pub fov: f32,
    pub dof: f32,
    pub focus: f32,
}

impl Camera {
    pub fn new(
        position: Point3,
        direction: Vec3,
        normal: Vec3,
        fov: f32,
        dof: f32,
        focus: f32,
    ) -> Camera {
        if dof == 0.0 {
            warn!("camera aperture radius is 0.0, depth of field disabled");
        }
        Camera {
            position,
            direction: direction.normalized(),
            normal: normal.normalized(),
            fov,
            dof,
            focus,
        }
    }

    /// Aim the camera from `position` at `target`; `up` is a position as
    /// well, so both basis directions come out of point differences.
    pub fn look_at(
        position: Point3,
        target: Point3,
        up: Point3,
        fov: f32,
        dof: f32,
        focus: f32,
    ) -> Camera {
        Camera::new(position, target - position, up - position, fov, dof, focus)
    }
}
