use super::CameraBasis;
use crate::config::RenderConfig;
use crate::error::EngineError;
use crate::integrator::WhittedIntegrator;
use crate::math::{RGBColor, Ray, Sampler, UniformSampler};
use crate::world::Scene;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use pbr::ProgressBar;

pub const DEFAULT_TILE_SIZE: usize = 64;

/// One rectangular slice of the framebuffer. Tiles carry a raw pointer into
/// the shared byte buffer; rectangles are pairwise disjoint, so workers
/// never touch the same byte.
#[derive(Copy, Clone, Debug)]
pub struct Tile {
    data: *mut u8,
    image_width: usize,
    pub horizontal_span: (usize, usize),
    pub vertical_span: (usize, usize),
    pub index: usize,
}

unsafe impl Send for Tile {}
unsafe impl Sync for Tile {}

impl Tile {
    pub fn tile_width(&self) -> usize {
        self.horizontal_span.1 - self.horizontal_span.0
    }

    pub fn tile_height(&self) -> usize {
        self.vertical_span.1 - self.vertical_span.0
    }

    pub fn pixels(&self) -> usize {
        self.tile_width() * self.tile_height()
    }

    fn write_pixel(&self, x: usize, y: usize, bytes: [u8; 3]) {
        debug_assert!(x >= self.horizontal_span.0 && x < self.horizontal_span.1);
        debug_assert!(y >= self.vertical_span.0 && y < self.vertical_span.1);
        unsafe {
            let ptr = self.data.add(3 * (y * self.image_width + x));
            ptr.write(bytes[0]);
            ptr.add(1).write(bytes[1]);
            ptr.add(2).write(bytes[2]);
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TiledRenderer {
    tile_size: (usize, usize),
    progress: bool,
}

impl Default for TiledRenderer {
    fn default() -> Self {
        TiledRenderer::new(DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE)
    }
}

impl TiledRenderer {
    pub fn new(tile_width: usize, tile_height: usize) -> TiledRenderer {
        assert!(tile_width > 0 && tile_height > 0);
        TiledRenderer {
            tile_size: (tile_width, tile_height),
            progress: false,
        }
    }

    /// Show a progress bar while rendering. Off by default so tests and
    /// library consumers stay quiet.
    pub fn with_progress(mut self, enabled: bool) -> TiledRenderer {
        self.progress = enabled;
        self
    }

    /// Partition the framebuffer into full tiles plus clipped strips on the
    /// right and bottom edges. The union covers [0,w) x [0,h) exactly.
    fn generate_tiles(&self, data: *mut u8, film_size: (usize, usize)) -> Vec<Tile> {
        let tile_size = self.tile_size;
        let full_tile_count = (film_size.0 / tile_size.0, film_size.1 / tile_size.1);
        let remnant_tile_size = (film_size.0 % tile_size.0, film_size.1 % tile_size.1);

        let mut tiles = Vec::new();
        let push = |tiles: &mut Vec<Tile>, h: (usize, usize), v: (usize, usize)| {
            let index = tiles.len();
            tiles.push(Tile {
                data,
                image_width: film_size.0,
                horizontal_span: h,
                vertical_span: v,
                index,
            });
        };
        for y_idx in 0..full_tile_count.1 {
            for x_idx in 0..full_tile_count.0 {
                push(
                    &mut tiles,
                    (x_idx * tile_size.0, (x_idx + 1) * tile_size.0),
                    (y_idx * tile_size.1, (y_idx + 1) * tile_size.1),
                );
            }
        }
        if remnant_tile_size.0 > 0 {
            // right side partial tiles
            for y_idx in 0..full_tile_count.1 {
                push(
                    &mut tiles,
                    (full_tile_count.0 * tile_size.0, film_size.0),
                    (y_idx * tile_size.1, (y_idx + 1) * tile_size.1),
                );
            }
        }
        if remnant_tile_size.1 > 0 {
            // bottom side partial tiles
            for x_idx in 0..full_tile_count.0 {
                push(
                    &mut tiles,
                    (x_idx * tile_size.0, (x_idx + 1) * tile_size.0),
                    (full_tile_count.1 * tile_size.1, film_size.1),
                );
            }
            if remnant_tile_size.0 > 0 {
                // last partial tile at the bottom right
                push(
                    &mut tiles,
                    (full_tile_count.0 * tile_size.0, film_size.0),
                    (full_tile_count.1 * tile_size.1, film_size.1),
                );
            }
        }
        tiles
    }

    /// Render `scene` into `framebuffer` (w * h * 3 bytes, row-major RGB).
    pub fn render(
        &self,
        scene: &Scene,
        config: &RenderConfig,
        framebuffer: &mut [u8],
    ) -> Result<(), EngineError> {
        let (width, height) = (config.width, config.height);
        let expected = width * height * 3;
        if framebuffer.len() != expected {
            return Err(EngineError::Framebuffer {
                expected,
                actual: framebuffer.len(),
            });
        }

        info!(
            "starting render at {}x{}, {} samples, {} recursions, {} threads",
            width, height, config.samples, config.recursions, config.threads
        );

        let basis = CameraBasis::new(&scene.camera, width, height);
        let tiles = self.generate_tiles(framebuffer.as_mut_ptr(), (width, height));
        info!("enqueued {} tiles", tiles.len());
        let queue = Mutex::new(VecDeque::from(tiles));

        let pixel_count = Arc::new(AtomicUsize::new(0));
        let done = Arc::new(AtomicBool::new(false));
        let monitor = self.progress.then(|| {
            let pixel_count = Arc::clone(&pixel_count);
            let done = Arc::clone(&done);
            let total = width * height;
            thread::spawn(move || {
                let mut pb = ProgressBar::new(total as u64);
                let mut local_index = 0;
                while local_index < total && !done.load(Ordering::Relaxed) {
                    let pixels_to_increment = pixel_count.load(Ordering::Relaxed) - local_index;
                    pb.add(pixels_to_increment as u64);
                    local_index += pixels_to_increment;
                    thread::sleep(Duration::from_millis(250));
                }
                pb.finish();
            })
        });

        let mut panicked = 0usize;
        thread::scope(|s| {
            let mut handles = Vec::with_capacity(config.threads);
            for _ in 0..config.threads {
                let queue = &queue;
                let pixel_count = &pixel_count;
                let basis = &basis;
                handles.push(s.spawn(move || {
                    let integrator = WhittedIntegrator::new(scene);
                    loop {
                        let tile = queue.lock().unwrap().pop_front();
                        let Some(tile) = tile else { break };
                        let mut sampler = match config.seed {
                            Some(seed) => UniformSampler::seeded(seed + tile.index as u64),
                            None => UniformSampler::new(),
                        };
                        render_tile(&tile, basis, scene, config, &integrator, &mut sampler);
                        pixel_count.fetch_add(tile.pixels(), Ordering::Relaxed);
                    }
                }));
            }
            for handle in handles {
                if handle.join().is_err() {
                    panicked += 1;
                }
            }
        });

        done.store(true, Ordering::Relaxed);
        if let Some(monitor) = monitor {
            if monitor.join().is_err() {
                warn!("progress monitor thread panicked");
            }
        }

        if panicked > 0 {
            error!("{} render workers panicked", panicked);
            return Err(EngineError::Worker(panicked));
        }
        Ok(())
    }
}

fn render_tile(
    tile: &Tile,
    basis: &CameraBasis,
    scene: &Scene,
    config: &RenderConfig,
    integrator: &WhittedIntegrator,
    sampler: &mut dyn Sampler,
) {
    let camera = &scene.camera;
    let half_width = config.width as f32 / 2.0;
    let half_height = config.height as f32 / 2.0;
    let scale = 255.0 / config.samples as f32;

    for y in tile.vertical_span.0..tile.vertical_span.1 {
        for x in tile.horizontal_span.0..tile.horizontal_span.1 {
            let mut color = RGBColor::ZERO;
            for _ in 0..config.samples {
                let lens = (basis.right * sampler.draw(-0.5, 0.5)
                    + basis.down * sampler.draw(-0.5, 0.5))
                    * camera.dof;
                let dir = basis.right * (x as f32 - half_width + 1.0 + sampler.draw(-0.5, 0.5))
                    + basis.down * (y as f32 - half_height + 1.0 + sampler.draw(-0.5, 0.5))
                    + basis.corner;
                let primary = Ray::new(camera.position + lens, dir * camera.focus - lens);
                color += integrator.trace(sampler, primary, config.recursions);
            }
            tile.write_pixel(x, y, (color * scale).to_bytes());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::world::scenes;

    fn cover_map(renderer: &TiledRenderer, width: usize, height: usize) -> Vec<u32> {
        let mut dummy = vec![0u8; width * height * 3];
        let tiles = renderer.generate_tiles(dummy.as_mut_ptr(), (width, height));
        let mut cover = vec![0u32; width * height];
        for tile in &tiles {
            for y in tile.vertical_span.0..tile.vertical_span.1 {
                for x in tile.horizontal_span.0..tile.horizontal_span.1 {
                    cover[y * width + x] += 1;
                }
            }
        }
        cover
    }

    #[test]
    fn test_generate_tiles_covers_exactly() {
        for (width, height) in [(1920, 1080), (512, 512), (100, 70), (64, 64), (1, 1)] {
            let cover = cover_map(&TiledRenderer::new(64, 64), width, height);
            assert!(
                cover.iter().all(|&count| count == 1),
                "bad cover at {}x{}",
                width,
                height
            );
        }
    }

    #[test]
    fn test_generate_tiles_clips_edges() {
        let renderer = TiledRenderer::new(64, 64);
        let mut dummy = vec![0u8; 100 * 70 * 3];
        let tiles = renderer.generate_tiles(dummy.as_mut_ptr(), (100, 70));
        // one full tile, one right strip, one bottom strip, one corner
        assert_eq!(tiles.len(), 4);
        assert!(tiles
            .iter()
            .any(|t| t.horizontal_span == (64, 100) && t.vertical_span == (64, 70)));
    }

    #[test]
    fn test_render_writes_every_byte() {
        let scene = scenes::create("simple").unwrap();
        let config = RenderConfig::new(96, 80, 1, 2, 2)
            .unwrap()
            .with_seed(Some(1));
        let mut framebuffer = vec![1u8; 96 * 80 * 3];
        TiledRenderer::default()
            .render(&scene, &config, &mut framebuffer)
            .unwrap();
        // a sky-dominated image has no pixel left at the sentinel value in
        // its blue channel
        assert!(framebuffer.chunks(3).all(|px| px[2] != 1));
    }

    #[test]
    fn test_render_rejects_short_framebuffer() {
        let scene = scenes::create("simple").unwrap();
        let config = RenderConfig::new(64, 64, 1, 1, 1).unwrap();
        let mut framebuffer = vec![0u8; 64];
        let result = TiledRenderer::default().render(&scene, &config, &mut framebuffer);
        assert!(matches!(result, Err(EngineError::Framebuffer { .. })));
    }

    #[test]
    fn test_seeded_render_is_reproducible() {
        let scene = scenes::create("aek").unwrap();
        let config = RenderConfig::new(72, 48, 2, 3, 3)
            .unwrap()
            .with_seed(Some(42));
        let mut first = vec![0u8; 72 * 48 * 3];
        let mut second = vec![0u8; 72 * 48 * 3];
        let renderer = TiledRenderer::default();
        renderer.render(&scene, &config, &mut first).unwrap();
        renderer.render(&scene, &config, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
