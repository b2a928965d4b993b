mod color;
mod point;
mod ray;
mod sample;
mod vec;

pub use color::RGBColor;
pub use point::Point3;
pub use ray::Ray;
pub use sample::{Sampler, UniformSampler};
pub use vec::Vec3;

pub use std::f32::consts::PI;
