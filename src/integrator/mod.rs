//! Recursive Whitted-style shading. One integrator instance serves one
//! render worker; the sampler is threaded through the calls so the worker
//! owns all of its random state.

use crate::hittable::HitRecord;
use crate::math::{RGBColor, Ray, Sampler, Vec3};
use crate::world::Scene;

/// Soft shadows come from displacing the light by this much (uniformly, per
/// axis) before each shadow test.
pub const LIGHT_JITTER: f32 = 0.75;

pub struct WhittedIntegrator<'a> {
    scene: &'a Scene,
}

impl<'a> WhittedIntegrator<'a> {
    pub fn new(scene: &'a Scene) -> WhittedIntegrator<'a> {
        WhittedIntegrator { scene }
    }

    /// Closest-hit query against every scene object.
    pub fn hit(&self, r: Ray, rec: &mut HitRecord) -> bool {
        self.scene.hit(r, rec)
    }

    /// Radiance seen along `r`, spending at most `recursion` further
    /// reflection/refraction bounces. The result is raw; averaging and
    /// clamping are the renderer's business.
    pub fn trace(&self, sampler: &mut dyn Sampler, r: Ray, recursion: u32) -> RGBColor {
        let sky = &self.scene.sky;
        if recursion == 0 {
            return sky.ambient;
        }

        let mut rec = HitRecord::new();
        if !self.scene.hit(r, &mut rec) {
            return sky.color * (1.0 - r.direction.z).powi(4);
        }

        let light = &self.scene.light;
        let jitter = Vec3::new(
            sampler.draw(-LIGHT_JITTER, LIGHT_JITTER),
            sampler.draw(-LIGHT_JITTER, LIGHT_JITTER),
            sampler.draw(-LIGHT_JITTER, LIGHT_JITTER),
        );
        let light_ray = Ray::new(rec.position, (light.position + jitter) - rec.position);
        let reflected = r.reflect(rec.distance, rec.normal);
        let refracted = r.refract(rec.distance, rec.normal, rec.eta);
        // attenuation uses the unjittered distance
        let light_distance = (light.position - rec.position).norm();

        let mut diffusion = (light_ray.direction * rec.normal).max(0.0);
        if diffusion > 0.0 {
            let mut occluder = HitRecord::new();
            if self.scene.hit(light_ray, &mut occluder) {
                diffusion = 0.0;
            }
        }
        let light_color = light.color * (1.0 / (light_distance / light.power).sqrt());

        let mut color = RGBColor::ZERO;
        let matte = 1.0 - rec.reflect - rec.refract;
        if matte > 0.0 {
            color += rec.color * sky.ambient * matte;
            if diffusion > 0.0 {
                color += rec.color * light_color * (matte * diffusion);
            }
        }
        if rec.reflect > 0.0 {
            color += self.trace(sampler, reflected, recursion - 1) * rec.reflect;
        }
        if rec.refract > 0.0 {
            color += self.trace(sampler, refracted, recursion - 1) * rec.refract;
        }
        if rec.specular > 0.0 {
            // highlights are suppressed on back-facing or shadowed geometry
            let glint = (light_ray.direction * reflected.direction)
                * if diffusion > 0.0 { 1.0 } else { 0.0 };
            color += light_color * glint.max(0.0).powf(rec.specular);
        }
        color
    }
}
