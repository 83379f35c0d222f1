//! Flood-fill light mask over a dense tile grid.
//!
//! The mask approximates geodesic light falloff around point sources without
//! ray casting: four fixed directional sweeps spread brightness while wall
//! opacity attenuates it, then two box-blur passes remove the directional
//! artifacts and light up solid geometry near lights.

pub(crate) mod blur;
pub(crate) mod propagate;

use blur::box_blur;
use propagate::{backward_sweep, forward_sweep};

/// Brightness added to any wall tile that received light, so lit walls stand
/// out from unlit ones regardless of falloff.
const LIT_WALL_BONUS: f32 = 0.1;

/// Per-tile brightness mask for a fixed-size 2D grid.
///
/// Values are brightness in 0.0 (dark) to 1.0 (fully lit), stored row-major
/// (`x + y * width`). The per-frame cycle is [`reset`](Self::reset), zero or
/// more [`add_light`](Self::add_light) calls, then one
/// [`compute_mask`](Self::compute_mask), after which [`mask`](Self::mask)
/// holds the finished brightness field for the renderer.
#[derive(Debug, Clone)]
pub struct LightMask {
    mask: Vec<f32>,
    width: usize,
    height: usize,
    /// How far light spreads; falloff is its reciprocal.
    intensity: f32,
    falloff: f32,
    /// Radius of the wide max-combine blur pass.
    max_blur_radius: usize,
    /// Minimum brightness for open tiles.
    ambient: f32,
    // Scratch for the two blur passes. Owned per instance so independent
    // masks can be computed in parallel.
    wide_scratch: Vec<f32>,
    smooth_scratch: Vec<f32>,
}

impl LightMask {
    /// Create a mask for a `width` x `height` tile grid.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");

        let tiles = width * height;
        let intensity = 50.0;
        LightMask {
            mask: vec![0.0; tiles],
            width,
            height,
            intensity,
            falloff: 1.0 / intensity,
            max_blur_radius: 2,
            ambient: 0.0,
            wide_scratch: vec![0.0; tiles],
            smooth_scratch: vec![0.0; tiles],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of the brightness buffer, row-major.
    pub fn mask(&self) -> &[f32] {
        &self.mask
    }

    /// Set how far light spreads. Silently floored at 1.0.
    pub fn set_intensity(&mut self, intensity: f32) {
        let intensity = intensity.max(1.0);
        self.intensity = intensity;
        self.falloff = 1.0 / intensity;
    }

    /// Set the ambient light level. Silently clamped to 0.0..=1.0.
    ///
    /// Open tiles end up at least this bright after `compute_mask`.
    pub fn set_ambient(&mut self, ambient: f32) {
        self.ambient = ambient.clamp(0.0, 1.0);
    }

    /// Reset the mask to the ambient baseline. Call once per frame before
    /// adding lights.
    pub fn reset(&mut self) {
        self.mask.fill(self.ambient);
    }

    /// Add a point light at tile `(x, y)`.
    ///
    /// Lights at the same tile combine by maximum, never by summing.
    /// `brightness` is the caller's responsibility to keep within 0.0..=1.0;
    /// the coordinates must be in bounds.
    pub fn add_light(&mut self, x: usize, y: usize, brightness: f32) {
        debug_assert!(x < self.width && y < self.height, "light out of bounds");
        let i = self.idx(x, y);
        self.mask[i] = self.mask[i].max(brightness);
    }

    /// Compute the final mask against a wall-opacity field (0.0 open,
    /// 1.0 solid), mutating the brightness buffer in place.
    ///
    /// Panics if `walls` does not have one entry per tile.
    pub fn compute_mask(&mut self, walls: &[f32]) {
        assert_eq!(
            walls.len(),
            self.mask.len(),
            "wall field must match grid size"
        );

        // Solid tiles start darker.
        for (m, w) in self.mask.iter_mut().zip(walls) {
            *m = (*m - w).max(0.0);
        }

        // Two full round trips, a fixed count rather than a convergence
        // loop: the second pair closes gaps behind concave walls that the
        // first pair leaves from one direction.
        forward_sweep(&mut self.mask, walls, self.width, self.height, self.falloff);
        backward_sweep(&mut self.mask, walls, self.width, self.height, self.falloff);
        forward_sweep(&mut self.mask, walls, self.width, self.height, self.falloff);
        backward_sweep(&mut self.mask, walls, self.width, self.height, self.falloff);

        // Any wall that received light gets a flat bonus.
        for (m, &w) in self.mask.iter_mut().zip(walls) {
            if w > 0.0 && *m > 0.0 {
                *m = (*m + LIT_WALL_BONUS).min(1.0);
            }
        }

        // Wide max-combine blur: lights up walls and solid objects and
        // smooths dark seams between lights without darkening anything.
        box_blur(
            &self.mask,
            &mut self.wide_scratch,
            self.width,
            self.height,
            self.max_blur_radius,
        );
        for (m, &b) in self.mask.iter_mut().zip(&self.wide_scratch) {
            *m = m.max(b);
        }

        // Narrow blur replaces the mask outright to smooth the lighting.
        box_blur(
            &self.mask,
            &mut self.smooth_scratch,
            self.width,
            self.height,
            1,
        );
        self.mask.copy_from_slice(&self.smooth_scratch);

        // Open tiles are at least ambient; solid tiles are not floored.
        for (m, &w) in self.mask.iter_mut().zip(walls) {
            if w == 0.0 {
                *m = m.max(self.ambient);
            }
        }
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }
}
