//! Box blur post-pass for the propagated mask.

/// Unweighted box blur of `src` into `dst`.
///
/// Only tiles whose full `(2r+1) x (2r+1)` kernel fits inside the grid are
/// averaged. Everything within `radius` of an edge keeps the source value,
/// which is why `dst` is seeded with a full copy of `src` first.
pub(crate) fn box_blur(src: &[f32], dst: &mut [f32], width: usize, height: usize, radius: usize) {
    dst.copy_from_slice(src);

    let kernel_tiles = ((2 * radius + 1) * (2 * radius + 1)) as f32;

    for y in radius..height.saturating_sub(radius) {
        for x in radius..width.saturating_sub(radius) {
            let mut sum = 0.0f32;
            for ky in y - radius..=y + radius {
                for kx in x - radius..=x + radius {
                    sum += src[kx + ky * width];
                }
            }
            dst[x + y * width] = sum / kernel_tiles;
        }
    }
}
