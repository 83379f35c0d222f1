//! Directional propagation sweeps for the light mask.
//!
//! Light spreads with two raster sweeps applied in alternation: a forward
//! pass (top-to-bottom, left-to-right) and its mirror. Each tile is relaxed
//! against the one or two neighbors already finalized earlier in the same
//! traversal, so a single pass moves a wavefront across the whole grid with
//! no queue and no revisiting.

/// Relax one tile against up to two already-swept neighbors.
///
/// Wall opacity steepens the per-step falloff, capped at 1.0 so one step can
/// never drop a tile by more than the full brightness range. A tile keeps
/// its own value as a floor when both neighbors are darker than it.
#[inline]
pub(crate) fn attenuate(here: f32, neighbor1: f32, neighbor2: f32, wall: f32, falloff: f32) -> f32 {
    let local_falloff = (falloff + wall / 10.0).min(1.0);

    let n1 = here.max(neighbor1);
    let n2 = here.max(neighbor2);

    (n1.max(n2) - local_falloff).max(0.0)
}

/// Sweep top-to-bottom, left-to-right.
///
/// The top row only has a left neighbor and column 0 only has the tile
/// above; every other tile is relaxed against both.
pub(crate) fn forward_sweep(
    mask: &mut [f32],
    walls: &[f32],
    width: usize,
    height: usize,
    falloff: f32,
) {
    for x in 1..width {
        mask[x] = attenuate(mask[x], mask[x - 1], 0.0, walls[x], falloff);
    }
    for y in 1..height {
        let row = y * width;
        mask[row] = attenuate(mask[row], mask[row - width], 0.0, walls[row], falloff);

        for x in 1..width {
            let i = row + x;
            mask[i] = attenuate(mask[i], mask[i - 1], mask[i - width], walls[i], falloff);
        }
    }
}

/// Mirror of `forward_sweep`: bottom-to-top, right-to-left, relaxing against
/// the right and below neighbors updated earlier in this sweep.
pub(crate) fn backward_sweep(
    mask: &mut [f32],
    walls: &[f32],
    width: usize,
    height: usize,
    falloff: f32,
) {
    let bottom = (height - 1) * width;
    for x in (0..width - 1).rev() {
        let i = bottom + x;
        mask[i] = attenuate(mask[i], mask[i + 1], 0.0, walls[i], falloff);
    }
    for y in (0..height - 1).rev() {
        let row = y * width;
        let last = row + width - 1;
        mask[last] = attenuate(mask[last], mask[last + width], 0.0, walls[last], falloff);

        for x in (0..width - 1).rev() {
            let i = row + x;
            mask[i] = attenuate(mask[i], mask[i + 1], mask[i + width], walls[i], falloff);
        }
    }
}
