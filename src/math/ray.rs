use crate::math::{Point3, Vec3};
use crate::DISTANCE_MIN;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// Precondition: `direction` is not the zero vector. The stored direction
    /// is always unit length; the sphere intersection depends on it.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    pub fn point_at_parameter(self, distance: f32) -> Point3 {
        self.origin + self.direction * distance
    }

    /// Mirror bounce off the surface hit at `distance` with unit `normal`.
    /// The origin backs off by DISTANCE_MIN along the incident direction so
    /// the bounced ray cannot re-hit the surface it left.
    pub fn reflect(self, distance: f32, normal: Vec3) -> Ray {
        let origin = self.origin + self.direction * (distance - DISTANCE_MIN);
        let direction = self.direction - normal * (2.0 * (normal * self.direction));
        Ray { origin, direction }
    }

    /// Snell's law bounce with relative index `eta`. Total internal
    /// reflection degrades to passing the incident direction through
    /// unchanged; the origin advances past the surface either way.
    pub fn refract(self, distance: f32, normal: Vec3, eta: f32) -> Ray {
        let origin = self.origin + self.direction * (distance + DISTANCE_MIN);
        let d = normal * self.direction;
        let k = 1.0 - eta * eta * (1.0 - d * d);
        if k < 0.0 {
            Ray {
                origin,
                direction: self.direction,
            }
        } else {
            Ray::new(origin, self.direction * eta - normal * (eta * d + k.sqrt()))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn unit_vector() -> impl Strategy<Value = Vec3> {
        (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
            .prop_filter("near-zero vector", |v| v.norm_squared() > 1e-2)
            .prop_map(|v| v.normalized())
    }

    proptest! {
        #[test]
        fn test_reflect_flips_normal_component(d in unit_vector(), n in unit_vector()) {
            let ray = Ray::new(Point3::ORIGIN, d);
            let reflected = ray.reflect(1.0, n);
            let incident = ray.direction * n;
            let outgoing = reflected.direction * n;
            prop_assert!((outgoing + incident).abs() < 1e-5);
            prop_assert!((reflected.direction.norm() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn test_refract_identity_at_unit_eta(d in unit_vector(), n in unit_vector()) {
            let ray = Ray::new(Point3::ORIGIN, d);
            let refracted = ray.refract(1.0, n, 1.0);
            prop_assert!((refracted.direction - ray.direction).norm() < 1e-5);
        }
    }

    #[test]
    fn test_constructor_normalizes() {
        let ray = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.norm() - 1.0).abs() < 1e-6);
        assert!((ray.direction - Vec3::new(0.0, 0.6, 0.8)).norm() < 1e-6);
    }

    #[test]
    fn test_reflect_offsets_origin_backwards() {
        let ray = Ray::new(Point3::ORIGIN, Vec3::Y);
        let reflected = ray.reflect(2.0, -Vec3::Y);
        assert!(reflected.origin.y < 2.0);
        assert!((reflected.origin.y - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_total_internal_reflection_keeps_direction() {
        // grazing incidence into a much denser-to-thinner interface
        let d = Vec3::new(0.99, 0.0, -0.141).normalized();
        let ray = Ray::new(Point3::ORIGIN, d);
        let refracted = ray.refract(1.0, Vec3::Z, 2.5);
        assert_eq!(refracted.direction, ray.direction);
    }
}
