pub use crate::camera::Camera;
pub use crate::config::RenderConfig;
pub use crate::error::EngineError;
pub use crate::geometry::{Plane, Sphere};
pub use crate::hittable::{HitRecord, Hittable, Material};
pub use crate::integrator::WhittedIntegrator;
pub use crate::math::{Point3, RGBColor, Ray, Sampler, UniformSampler, Vec3};
pub use crate::renderer::TiledRenderer;
pub use crate::world::{Light, Scene, Sky};
pub use crate::{DISTANCE_MAX, DISTANCE_MIN};

pub use std::f32::consts::PI;
