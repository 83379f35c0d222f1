//! Random-walk cave carver, a wall-field provider for the mask engine.

use rand::Rng;

/// Carve a cave system into an all-solid wall field.
///
/// `num_paths` walkers wander `path_length` steps each, opening every tile
/// they visit (opacity 0.0). A walker that reaches the outer rim is snapped
/// back to the center axis, so the 1-tile border always stays solid.
pub fn generate_caves(
    width: usize,
    height: usize,
    num_paths: usize,
    path_length: usize,
) -> Vec<f32> {
    let mut walls = vec![1.0f32; width * height];
    let mut rng = rand::thread_rng();

    let w = width as i64;
    let h = height as i64;
    let mut x = w / 2;
    let mut y = h / 2;

    for _ in 0..num_paths {
        for _ in 0..path_length {
            match rng.gen_range(0..4) {
                0 => x -= 1,
                1 => x += 1,
                2 => y -= 1,
                _ => y += 1,
            }
            if y <= 1 || y >= h - 1 {
                y = h / 2;
            }
            if x <= 1 || x >= w - 1 {
                x = w / 2;
            }
            walls[(x + y * w) as usize] = 0.0;
        }
    }

    walls
}
