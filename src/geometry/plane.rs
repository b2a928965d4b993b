use crate::hittable::{HitRecord, Hittable, Material};
use crate::math::{Point3, RGBColor, Ray, Vec3};
use crate::DISTANCE_MIN;

/// Ground plane at z = 0 carrying a two-color procedural checkerboard.
/// `normal` is stored back into the hit record literally.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub position: Point3,
    pub normal: Vec3,
    pub scale: f32,
    pub color1: RGBColor,
    pub color2: RGBColor,
    pub material: Material,
}

impl Plane {
    pub fn new(
        position: Point3,
        normal: Vec3,
        scale: f32,
        color1: RGBColor,
        color2: RGBColor,
        material: Material,
    ) -> Plane {
        debug_assert!(material.reflect >= 0.0 && material.refract >= 0.0);
        debug_assert!(material.reflect + material.refract <= 1.0);
        Plane {
            position,
            normal: normal.normalized(),
            scale,
            color1,
            color2,
            material,
        }
    }

    fn checkerboard(&self, position: Point3) -> RGBColor {
        let x = (position.x * self.scale).ceil();
        let y = (position.y * self.scale).ceil();
        if (x + y) as i64 & 1 != 0 {
            self.color1
        } else {
            self.color2
        }
    }
}

impl Hittable for Plane {
    fn hit(&self, r: Ray, rec: &mut HitRecord) -> bool {
        // a ray parallel to the plane produces inf/NaN here and fails the
        // range check below
        let distance = -r.origin.z / r.direction.z;
        if distance > DISTANCE_MIN && distance < rec.distance {
            rec.distance = distance;
            rec.position = r.point_at_parameter(distance);
            rec.normal = self.normal;
            rec.color = self.checkerboard(rec.position);
            rec.set_material(self.material);
            return true;
        }
        false
    }
}
