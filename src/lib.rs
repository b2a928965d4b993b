#[macro_use]
extern crate log;

pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod math;
pub mod ppm;
pub mod prelude;
pub mod renderer;
pub mod world;

/// Sentinel distance carried by a fresh hit record. Any real intersection is
/// closer than this.
pub const DISTANCE_MAX: f32 = 1e9;

/// Near clip rejecting self-hits; doubles as the ray advance applied after a
/// reflect/refract bounce.
pub const DISTANCE_MIN: f32 = 1e-5;

#[cfg(test)]
pub fn log_test_setup() {
    use simplelog::{
        ColorChoice, CombinedLogger, LevelFilter, TermLogger, TerminalMode, WriteLogger,
    };
    use std::fs::File;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Trace,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Trace,
            simplelog::Config::default(),
            File::create("test.log").unwrap(),
        ),
    ])
    .unwrap();
}
