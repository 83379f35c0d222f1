//! Interactive cave viewer - the light follows the mouse in real-time

use log::debug;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use crate::caves::generate_caves;
use crate::mask::LightMask;
use crate::render::shade;

/// Configuration for the interactive viewer
#[derive(Clone)]
pub struct ViewerConfig {
    /// Grid size (width x height in tiles)
    pub grid_size: (usize, usize),
    /// Pixel scale factor (each tile = scale x scale pixels)
    pub scale: usize,
    /// How far light spreads
    pub intensity: f32,
    /// Minimum brightness of open tiles
    pub ambient: f32,
    /// Brightness of the mouse-driven light
    pub light_brightness: f32,
    /// Random walks carved by the cave generator
    pub num_paths: usize,
    /// Steps per walk
    pub path_length: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            grid_size: (80, 60),
            scale: 10,
            intensity: 40.0,
            ambient: 0.4,
            light_brightness: 1.0,
            num_paths: 20,
            path_length: 500,
        }
    }
}

/// Interactive viewer: a light mask recomputed every frame over a carved
/// cave field, with the light source pinned to the mouse.
pub struct InteractiveViewer {
    config: ViewerConfig,
    lightmask: LightMask,
    walls: Vec<f32>,
    window: Window,
    buffer: Vec<u32>,
    /// Last tile toggled while the mouse button stayed down, so a held
    /// click does not flicker a wall on and off.
    last_toggled: Option<(usize, usize)>,
}

impl InteractiveViewer {
    /// Create a new interactive viewer with the given configuration
    pub fn new(config: ViewerConfig) -> Result<Self, String> {
        let (grid_w, grid_h) = config.grid_size;
        let window_w = grid_w * config.scale;
        let window_h = grid_h * config.scale;

        let window = Window::new(
            "Light Mask - Cave Viewer (ESC to exit)",
            window_w,
            window_h,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        let mut lightmask = LightMask::new(grid_w, grid_h);
        lightmask.set_intensity(config.intensity);
        lightmask.set_ambient(config.ambient);

        let walls = generate_caves(grid_w, grid_h, config.num_paths, config.path_length);
        let buffer = vec![0u32; window_w * window_h];

        Ok(Self {
            config,
            lightmask,
            walls,
            window,
            buffer,
            last_toggled: None,
        })
    }

    /// Run the interactive viewer loop
    pub fn run(&mut self) -> Result<(), String> {
        let (grid_w, grid_h) = self.config.grid_size;
        let scale = self.config.scale;

        // Limit to ~60fps
        self.window.set_target_fps(60);

        println!("=== Light Mask Cave Viewer ===");
        println!("Controls:");
        println!("  Mouse      - Move light source");
        println!("  Left Click - Toggle wall");
        println!("  Right Click- Carve fresh caves");
        println!("  +/-        - Adjust intensity");
        println!("  A/Z        - Adjust ambient light");
        println!("  C          - Carve fresh caves");
        println!("  ESC        - Exit");
        println!();

        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            if self.window.is_key_pressed(Key::Equal, minifb::KeyRepeat::Yes)
                || self.window.is_key_pressed(Key::NumPadPlus, minifb::KeyRepeat::Yes)
            {
                self.config.intensity = (self.config.intensity + 5.0).min(200.0);
                self.lightmask.set_intensity(self.config.intensity);
                println!("Intensity: {:.0}", self.config.intensity);
            }
            if self.window.is_key_pressed(Key::Minus, minifb::KeyRepeat::Yes)
                || self.window.is_key_pressed(Key::NumPadMinus, minifb::KeyRepeat::Yes)
            {
                self.config.intensity = (self.config.intensity - 5.0).max(1.0);
                self.lightmask.set_intensity(self.config.intensity);
                println!("Intensity: {:.0}", self.config.intensity);
            }
            if self.window.is_key_pressed(Key::A, minifb::KeyRepeat::Yes) {
                self.config.ambient = (self.config.ambient + 0.05).min(1.0);
                self.lightmask.set_ambient(self.config.ambient);
                println!("Ambient: {:.2}", self.config.ambient);
            }
            if self.window.is_key_pressed(Key::Z, minifb::KeyRepeat::Yes) {
                self.config.ambient = (self.config.ambient - 0.05).max(0.0);
                self.lightmask.set_ambient(self.config.ambient);
                println!("Ambient: {:.2}", self.config.ambient);
            }
            if self.window.is_key_pressed(Key::C, minifb::KeyRepeat::No) {
                self.carve_caves();
                println!("Carved fresh caves");
            }

            let mut light_pos = None;
            if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Discard) {
                let grid_x = (mx as usize / scale).min(grid_w - 1);
                let grid_y = (my as usize / scale).min(grid_h - 1);
                light_pos = Some((grid_x, grid_y));

                if self.window.get_mouse_down(MouseButton::Left) {
                    if self.last_toggled != Some((grid_x, grid_y)) {
                        self.toggle_wall(grid_x, grid_y);
                        self.last_toggled = Some((grid_x, grid_y));
                    }
                } else {
                    self.last_toggled = None;
                }

                if self.window.get_mouse_down(MouseButton::Right) {
                    self.carve_caves();
                }
            }

            // Recompute the whole mask every frame.
            self.lightmask.reset();
            if let Some((x, y)) = light_pos {
                self.lightmask
                    .add_light(x, y, self.config.light_brightness);
            }
            self.lightmask.compute_mask(&self.walls);
            self.present();

            self.window
                .update_with_buffer(&self.buffer, grid_w * scale, grid_h * scale)
                .map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    /// Toggle wall opacity at a tile between fully solid and fully open
    fn toggle_wall(&mut self, x: usize, y: usize) {
        let (grid_w, _) = self.config.grid_size;
        let i = x + y * grid_w;
        self.walls[i] = if self.walls[i] > 0.0 { 0.0 } else { 1.0 };
        debug!("toggled wall at ({}, {}) -> {}", x, y, self.walls[i]);
    }

    /// Replace the wall field with a freshly carved cave system
    fn carve_caves(&mut self) {
        let (grid_w, grid_h) = self.config.grid_size;
        self.walls = generate_caves(
            grid_w,
            grid_h,
            self.config.num_paths,
            self.config.path_length,
        );
        debug!("carved {} paths", self.config.num_paths);
    }

    /// Shade the finished mask into the scaled pixel buffer
    fn present(&mut self) {
        let (grid_w, grid_h) = self.config.grid_size;
        let scale = self.config.scale;
        let shaded = shade(self.lightmask.mask(), &self.walls);

        for gy in 0..grid_h {
            for gx in 0..grid_w {
                let color = shaded[gx + gy * grid_w];
                for sy in 0..scale {
                    let row = (gy * scale + sy) * grid_w * scale + gx * scale;
                    for sx in 0..scale {
                        self.buffer[row + sx] = color;
                    }
                }
            }
        }
    }
}
