//! Helpers for turning a finished mask into something viewable.

use std::fs::File;
use std::io::{self, Write};

/// Convert a float value (0.0-1.0) to a byte (0-255)
#[inline]
pub fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Shade a mask against its wall field into 0RGB pixels for minifb.
///
/// Red and green carry raw brightness; blue is scaled by wall opacity, so
/// open floor reads warm yellow and lit rock reads white-gray.
pub fn shade(mask: &[f32], walls: &[f32]) -> Vec<u32> {
    mask.iter()
        .zip(walls)
        .map(|(&m, &w)| {
            let br = to_byte(m) as u32;
            let b = to_byte(m * w) as u32;
            (br << 16) | (br << 8) | b
        })
        .collect()
}

/// Format a mask as an aligned text grid for debugging
pub fn mask_to_string(mask: &[f32], width: usize) -> String {
    let mut result = String::new();
    for row in mask.chunks(width) {
        for v in row {
            result.push_str(&format!("{:5.2} ", v));
        }
        result.push('\n');
    }
    result
}

/// Save a shaded mask to a PPM file, `scale` output pixels per tile.
pub fn save_ppm(
    mask: &[f32],
    walls: &[f32],
    width: usize,
    height: usize,
    filename: &str,
    scale: usize,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "P3")?;
    writeln!(file, "{} {}", width * scale, height * scale)?;
    writeln!(file, "255")?;

    for img_y in 0..height * scale {
        for img_x in 0..width * scale {
            let i = img_x / scale + (img_y / scale) * width;
            let br = to_byte(mask[i]);
            let b = to_byte(mask[i] * walls[i]);
            write!(file, "{} {} {} ", br, br, b)?;
        }
        writeln!(file)?;
    }

    Ok(())
}
