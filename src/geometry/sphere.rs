use crate::hittable::{HitRecord, Hittable, Material};
use crate::math::{Point3, RGBColor, Ray, Vec3};
use crate::DISTANCE_MIN;

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub color: RGBColor,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32, color: RGBColor, material: Material) -> Sphere {
        debug_assert!(material.reflect >= 0.0 && material.refract >= 0.0);
        debug_assert!(material.reflect + material.refract <= 1.0);
        Sphere {
            center,
            radius,
            color,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray, rec: &mut HitRecord) -> bool {
        // simplified quadratic, valid only for unit-length ray directions
        debug_assert!((r.direction.norm_squared() - 1.0).abs() < 1e-3);
        let oc: Vec3 = r.origin - self.center;
        let b = oc * r.direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant > 0.0 {
            let distance = -b - discriminant.sqrt();
            if distance < rec.distance && distance > DISTANCE_MIN {
                rec.distance = distance;
                rec.position = r.point_at_parameter(distance);
                rec.normal = (oc + r.direction * distance).normalized();
                rec.color = self.color;
                rec.set_material(self.material);
                return true;
            }
        }
        false
    }
}
