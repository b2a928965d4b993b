//! Named-scene factory. Every scene is a bitmap-encoded grid of spheres over
//! a checkerboard ground plane, plus literal camera/light/sky constants.

use crate::camera::Camera;
use crate::error::EngineError;
use crate::geometry::{Plane, Sphere};
use crate::hittable::Material;
use crate::math::{Point3, RGBColor, Vec3};
use crate::world::{Light, Scene, Sky};

pub const BITMAP_ROWS: usize = 16;
pub const BITMAP_COLS: usize = 32;

pub fn create(name: &str) -> Result<Scene, EngineError> {
    let scene = match name {
        "aek" => aek(),
        "ponceto" => ponceto(),
        "smiley" => smiley(),
        "simple" => simple(),
        "spheres" => spheres(),
        _ => return Err(EngineError::UnknownScene(name.to_string())),
    };
    info!("scene <{}> built with {} objects", name, scene.objects.len());
    Ok(scene)
}

/// Expand a 16-row bitmap into unit-grid spheres. Bits are read LSB to MSB;
/// bit column `c` of row `r` lands at world x = cols - c + col_offset,
/// z = rows - r + row_offset, on the y = 0 plane.
fn expand_bitmap(
    scene: &mut Scene,
    bitmap: &[u32; BITMAP_ROWS],
    col_offset: f32,
    row_offset: f32,
    radius: f32,
    color: RGBColor,
    material: Material,
) {
    for (r, &row) in bitmap.iter().enumerate() {
        let mut val = row;
        if val == 0 {
            continue;
        }
        for c in 0..BITMAP_COLS {
            if val & 1 != 0 {
                let x = (BITMAP_COLS - c) as f32 + col_offset;
                let z = (BITMAP_ROWS - r) as f32 + row_offset;
                scene.push(Box::new(Sphere::new(
                    Point3::new(x, 0.0, z),
                    radius,
                    color,
                    material,
                )));
            }
            val >>= 1;
            if val == 0 {
                break;
            }
        }
    }
}

const SKY: Sky = Sky {
    color: RGBColor::new(0.7, 0.6, 1.0),
    ambient: RGBColor::new(0.25, 0.25, 0.25),
};

const CHECKER_RED: RGBColor = RGBColor::new(1.0, 0.33, 0.33);

fn checker_plane(scale: f32) -> Plane {
    Plane::new(
        Point3::ORIGIN,
        Vec3::Z,
        scale,
        CHECKER_RED,
        RGBColor::WHITE,
        Material::MATTE,
    )
}

/// Andrew Kensler's original text, one u32 per row, bottom row last.
fn aek() -> Scene {
    const BITMAP: [u32; BITMAP_ROWS] = [
        0, 0, 0, 0, 0, 0, 0, //
        16, 16, 231184, 18577, 18578, 249748, 280600, 280596, 247570,
    ];
    let mut scene = Scene::new(
        Camera::look_at(
            Point3::new(17.0, 16.0, 8.0),
            Point3::new(11.0, 0.0, 8.0),
            Point3::new(17.0, 16.0, 9.0),
            0.002,
            99.0,
            16.0,
        ),
        Light {
            position: Point3::new(9.0, 9.0, 16.0),
            color: RGBColor::WHITE,
            power: 16.0,
        },
        SKY,
    );
    scene.push(Box::new(checker_plane(0.2)));
    expand_bitmap(
        &mut scene,
        &BITMAP,
        -14.0,
        3.0,
        1.0,
        RGBColor::ZERO,
        Material::mirror(0.5, 99.0),
    );
    scene
}

/// The rewritten original's artwork, readable in the row literals.
fn ponceto() -> Scene {
    const BITMAP: [u32; BITMAP_ROWS] = [
        0,
        0,
        0,
        0,
        0,
        0,
        0,
        0b00000000000000000000100000000000,
        0b00000000000000000000100000000000,
        0b00000001110000111000100000000000,
        0b00000000001001000100100010000000,
        0b00000000001001000100100100000000,
        0b00000001111001111100101000000000,
        0b00000010001001000000110000000000,
        0b00000010001001000000101000000000,
        0b00000001111000111000100100000000,
    ];
    let mut scene = Scene::new(
        Camera::look_at(
            Point3::new(17.0, 16.0, 8.0),
            Point3::new(10.0, 0.0, 8.0),
            Point3::new(17.0, 16.0, 9.0),
            0.002,
            99.0,
            16.0,
        ),
        Light {
            position: Point3::new(9.0, 9.0, 16.0),
            color: RGBColor::WHITE,
            power: 16.0,
        },
        SKY,
    );
    scene.push(Box::new(checker_plane(0.2)));
    expand_bitmap(
        &mut scene,
        &BITMAP,
        -6.0,
        3.0,
        1.0,
        RGBColor::new(0.05, 0.05, 0.15),
        Material::mirror(0.45, 99.0),
    );
    scene
}

fn smiley() -> Scene {
    const BITMAP: [u32; BITMAP_ROWS] = [
        0,
        0,
        0,
        0b00000000000011000011000000000000,
        0b00000000000011000011000000000000,
        0,
        0,
        0,
        0b00000000000100000000100000000000,
        0b00000000000011111111000000000000,
        0,
        0,
        0,
        0,
        0,
        0,
    ];
    let mut scene = Scene::new(
        Camera::look_at(
            Point3::new(10.5, 18.0, 7.0),
            Point3::new(10.5, 0.0, 7.0),
            Point3::new(10.5, 18.0, 8.0),
            0.002,
            40.0,
            18.0,
        ),
        Light {
            position: Point3::new(6.0, 12.0, 14.0),
            color: RGBColor::new(1.0, 0.95, 0.85),
            power: 16.0,
        },
        SKY,
    );
    scene.push(Box::new(checker_plane(0.2)));
    expand_bitmap(
        &mut scene,
        &BITMAP,
        -6.0,
        -3.0,
        1.0,
        RGBColor::new(0.9, 0.75, 0.2),
        Material::mirror(0.15, 99.0),
    );
    scene
}

/// One mirror ball on the checkerboard; handy for eyeballing reflections.
fn simple() -> Scene {
    const BITMAP: [u32; BITMAP_ROWS] = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        1 << 16,
    ];
    let mut scene = Scene::new(
        Camera::look_at(
            Point3::new(0.0, -6.0, 2.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, -6.0, 3.0),
            0.002,
            0.0,
            6.0,
        ),
        Light {
            position: Point3::new(5.0, -5.0, 8.0),
            color: RGBColor::WHITE,
            power: 12.0,
        },
        SKY,
    );
    scene.push(Box::new(checker_plane(1.0)));
    expand_bitmap(
        &mut scene,
        &BITMAP,
        -16.0,
        0.0,
        1.0,
        RGBColor::new(0.02, 0.02, 0.02),
        Material::mirror(0.9, 99.0),
    );
    scene
}

/// A 3x3 grid of glass balls; exercises the refraction path.
fn spheres() -> Scene {
    const ROW: u32 = (1 << 14) | (1 << 16) | (1 << 18);
    const BITMAP: [u32; BITMAP_ROWS] = [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, ROW, 0, ROW, 0, ROW,
    ];
    let mut scene = Scene::new(
        Camera::look_at(
            Point3::new(0.0, -14.0, 4.0),
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(0.0, -14.0, 5.0),
            0.002,
            60.0,
            14.0,
        ),
        Light {
            position: Point3::new(6.0, -8.0, 12.0),
            color: RGBColor::WHITE,
            power: 16.0,
        },
        SKY,
    );
    scene.push(Box::new(checker_plane(0.5)));
    expand_bitmap(
        &mut scene,
        &BITMAP,
        -16.0,
        0.0,
        1.0,
        RGBColor::new(0.04, 0.04, 0.04),
        Material::glass(0.9, 0.9, 99.0),
    );
    scene
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unknown_scene_fails() {
        match create("voronoi") {
            Err(EngineError::UnknownScene(name)) => assert_eq!(name, "voronoi"),
            other => panic!("expected UnknownScene, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_aek_object_count() {
        // 49 bits set across the bitmap, plus the ground plane
        let scene = create("aek").unwrap();
        assert_eq!(scene.objects.len(), 50);
    }

    #[test]
    fn test_every_catalog_entry_builds() {
        for name in ["aek", "ponceto", "smiley", "simple", "spheres"] {
            let scene = create(name).unwrap();
            assert!(scene.objects.len() >= 2, "scene <{}> is degenerate", name);
        }
    }

    #[test]
    fn test_bitmap_expansion_positions() {
        let mut scene = create("simple").unwrap();
        // single bit at column 16, bottom row: x = 32 - 16 - 16 = 0, z = 1
        let _ = scene.objects.remove(0); // drop the plane
        assert_eq!(scene.objects.len(), 1);
        let mut rec = crate::hittable::HitRecord::new();
        let ray = crate::math::Ray::new(Point3::new(0.0, -5.0, 1.0), Vec3::Y);
        assert!(scene.objects[0].hit(ray, &mut rec));
        assert!((rec.distance - 4.0).abs() < 1e-4);
    }
}
