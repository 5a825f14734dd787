use crate::constants::{CODE_SNIPPET_COUNT, CODE_SNIPPET_FONT, HEX_SIZE};
use crate::core::particles::Particle;
use crate::core::surface::{Rgba, Surface};
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

const HEX_COLOR: [u8; 3] = [0, 212, 255];
const SNIPPET_COLOR: [u8; 3] = [0, 255, 65];
const SNIPPET_SPEED_SPREAD: f32 = 0.3;

pub const CODE_SNIPPETS: &[&str] = &[
    "0x1F4A9",
    "0xDEAD",
    "0xBEEF",
    "0xCAFE",
    "sudo rm -rf /",
    "git commit -m \"fix\"",
    "SELECT * FROM users",
    "npm install",
    "docker run",
    "kubectl apply",
    "ssh root@",
    "ping 8.8.8.8",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexCell {
    pub center: Vec2,
    pub opacity: f32,
}

/// Static flat-topped hexagon grid laid out once for the initial surface size.
pub struct HexGrid {
    pub size: f32,
    pub cells: Vec<HexCell>,
}

impl HexGrid {
    pub fn new<R: Rng + ?Sized>(width: f32, height: f32, size: f32, rng: &mut R) -> Self {
        let row_step = size * 3f32.sqrt();
        let col_step = size * 1.5;
        let cols = (width / col_step).ceil().max(0.0) as usize;
        let rows = (height / row_step).ceil().max(0.0) as usize;
        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let x = col as f32 * col_step;
                let y = row as f32 * row_step + (col % 2) as f32 * row_step * 0.5;
                cells.push(HexCell {
                    center: Vec2::new(x, y),
                    opacity: rng.gen::<f32>() * 0.1 + 0.05,
                });
            }
        }
        Self { size, cells }
    }

    pub fn outline(&self, cell: &HexCell) -> [Vec2; 6] {
        std::array::from_fn(|i| {
            let angle = i as f32 * std::f32::consts::FRAC_PI_3;
            cell.center + Vec2::new(angle.cos(), angle.sin()) * self.size
        })
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for cell in &self.cells {
            surface.stroke_polygon(&self.outline(cell), 1.0, Rgba::new(HEX_COLOR, cell.opacity));
        }
    }
}

/// A line of code text drifting and bouncing like a particle.
pub struct CodeSnippet {
    pub text: &'static str,
    pub body: Particle,
}

/// Hero-only decorations drawn beneath the particles.
pub struct Decorations {
    pub grid: HexGrid,
    pub snippets: Vec<CodeSnippet>,
}

impl Decorations {
    pub fn new<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> Self {
        let grid = HexGrid::new(width, height, HEX_SIZE, rng);
        let snippets = (0..CODE_SNIPPET_COUNT)
            .map(|_| CodeSnippet {
                text: CODE_SNIPPETS.choose(rng).copied().unwrap_or("0x0"),
                body: Particle {
                    position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                    velocity: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * SNIPPET_SPEED_SPREAD,
                        (rng.gen::<f32>() - 0.5) * SNIPPET_SPEED_SPREAD,
                    ),
                    radius: 0.0,
                    opacity: rng.gen::<f32>() * 0.3 + 0.1,
                },
            })
            .collect();
        Self { grid, snippets }
    }

    pub fn step(&mut self, width: f32, height: f32) {
        for s in &mut self.snippets {
            s.body.step(width, height);
        }
    }

    pub fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.grid.draw(surface);
    }

    pub fn draw_snippets<S: Surface + ?Sized>(&self, surface: &mut S) {
        for s in &self.snippets {
            surface.fill_text(
                s.text,
                s.body.position,
                CODE_SNIPPET_FONT,
                Rgba::new(SNIPPET_COLOR, s.body.opacity),
            );
        }
    }
}
