use crate::math::{Point3, RGBColor, Ray, Vec3};
use crate::DISTANCE_MAX;

/// Scalar shading coefficients shared by every primitive. The invariant
/// `reflect + refract <= 1` leaves `1 - reflect - refract` for the matte
/// (ambient + diffuse) share.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub reflect: f32,
    pub refract: f32,
    pub eta: f32,
    pub specular: f32,
}

impl Material {
    pub const MATTE: Material = Material {
        reflect: 0.0,
        refract: 0.0,
        eta: 1.0,
        specular: 0.0,
    };

    pub const fn mirror(reflect: f32, specular: f32) -> Material {
        Material {
            reflect,
            refract: 0.0,
            eta: 1.0,
            specular,
        }
    }

    pub const fn glass(refract: f32, eta: f32, specular: f32) -> Material {
        Material {
            reflect: 0.0,
            refract,
            eta,
            specular,
        }
    }
}

/// In-out aggregate threaded through the intersection tests; the closest hit
/// wins by overwriting a strictly smaller distance.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord {
    pub distance: f32,
    pub position: Point3,
    pub normal: Vec3,
    pub color: RGBColor,
    pub reflect: f32,
    pub refract: f32,
    pub eta: f32,
    pub specular: f32,
}

impl HitRecord {
    pub fn new() -> HitRecord {
        HitRecord {
            distance: DISTANCE_MAX,
            position: Point3::ORIGIN,
            normal: Vec3::Z,
            color: RGBColor::ZERO,
            reflect: 0.0,
            refract: 0.0,
            eta: 1.0,
            specular: 0.0,
        }
    }

    pub fn set_material(&mut self, material: Material) {
        self.reflect = material.reflect;
        self.refract = material.refract;
        self.eta = material.eta;
        self.specular = material.specular;
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        HitRecord::new()
    }
}

/// On an intersection strictly inside (DISTANCE_MIN, rec.distance) every
/// field of the record is overwritten and true comes back; otherwise the
/// record is left untouched.
pub trait Hittable: Send + Sync {
    fn hit(&self, r: Ray, rec: &mut HitRecord) -> bool;
}
