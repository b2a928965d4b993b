pub mod scenes;

use crate::camera::Camera;
use crate::hittable::{HitRecord, Hittable};
use crate::math::{Point3, RGBColor, Ray};

#[derive(Copy, Clone, Debug)]
pub struct Light {
    pub position: Point3,
    pub color: RGBColor,
    /// Distance attenuation denominator; must stay positive.
    pub power: f32,
}

#[derive(Copy, Clone, Debug)]
pub struct Sky {
    /// Zenith tint, modulated by (1 - direction.z)^4 on a miss.
    pub color: RGBColor,
    /// Baseline illumination, also the answer once recursion runs out.
    pub ambient: RGBColor,
}

/// Owns everything the integrator reads. Built once by the scene factory,
/// then shared immutably across the render workers.
pub struct Scene {
    pub camera: Camera,
    pub light: Light,
    pub sky: Sky,
    pub objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    pub fn new(camera: Camera, light: Light, sky: Sky) -> Scene {
        debug_assert!(light.power > 0.0);
        Scene {
            camera,
            light,
            sky,
            objects: Vec::new(),
        }
    }

    pub fn push(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Closest-hit query over every object; `rec` ends up describing the
    /// nearest intersection when any test succeeded.
    pub fn hit(&self, r: Ray, rec: &mut HitRecord) -> bool {
        let mut any = false;
        for object in self.objects.iter() {
            any |= object.hit(r, rec);
        }
        any
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Sphere;
    use crate::hittable::Material;
    use crate::math::Vec3;

    fn empty_scene() -> Scene {
        Scene::new(
            Camera::new(Point3::ORIGIN, Vec3::Y, Vec3::Z, 0.002, 0.0, 16.0),
            Light {
                position: Point3::new(0.0, 0.0, 10.0),
                color: RGBColor::WHITE,
                power: 16.0,
            },
            Sky {
                color: RGBColor::new(0.7, 0.6, 1.0),
                ambient: RGBColor::new(0.25, 0.25, 0.25),
            },
        )
    }

    #[test]
    fn test_closest_hit_wins() {
        let mut scene = empty_scene();
        let color = RGBColor::new(0.1, 0.2, 0.3);
        scene.push(Box::new(Sphere::new(
            Point3::new(0.0, 8.0, 0.0),
            1.0,
            color,
            Material::MATTE,
        )));
        scene.push(Box::new(Sphere::new(
            Point3::new(0.0, 4.0, 0.0),
            1.0,
            color,
            Material::mirror(0.5, 99.0),
        )));

        let mut rec = HitRecord::new();
        assert!(scene.hit(Ray::new(Point3::ORIGIN, Vec3::Y), &mut rec));
        assert!((rec.distance - 3.0).abs() < 1e-4);
        assert_eq!(rec.reflect, 0.5);
    }

    #[test]
    fn test_miss_reports_false() {
        let scene = empty_scene();
        let mut rec = HitRecord::new();
        assert!(!scene.hit(Ray::new(Point3::ORIGIN, Vec3::Y), &mut rec));
        assert_eq!(rec.distance, crate::DISTANCE_MAX);
    }
}
