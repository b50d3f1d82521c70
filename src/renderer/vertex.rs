//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BALL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const PADDLE_FULL: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const PADDLE_HURT: [f32; 4] = [1.0, 0.5, 0.0, 1.0];
    pub const PADDLE_LAST: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND_BOTTOM: [f32; 4] = [0.04, 0.04, 0.10, 1.0];
    pub const BACKGROUND_TOP: [f32; 4] = [0.12, 0.12, 0.25, 1.0];

    /// Paddle color keyed to remaining lives: green, orange, red
    pub fn paddle(lives: u8) -> [f32; 4] {
        match lives {
            3.. => PADDLE_FULL,
            2 => PADDLE_HURT,
            _ => PADDLE_LAST,
        }
    }

    /// Brick shade keyed to remaining durability (brighter = healthier).
    /// Destroyed bricks are never drawn, so 0 never reaches here in practice.
    pub fn brick(durability: u8) -> [f32; 4] {
        match durability {
            3.. => [0.90, 0.35, 0.20, 1.0],
            2 => [0.62, 0.24, 0.14, 1.0],
            _ => [0.38, 0.15, 0.09, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::colors;

    #[test]
    fn test_paddle_color_by_lives() {
        assert_eq!(colors::paddle(3), colors::PADDLE_FULL);
        assert_eq!(colors::paddle(2), colors::PADDLE_HURT);
        assert_eq!(colors::paddle(1), colors::PADDLE_LAST);
        assert_eq!(colors::paddle(0), colors::PADDLE_LAST);
    }

    #[test]
    fn test_brick_shades_darken() {
        let bright = colors::brick(3);
        let mid = colors::brick(2);
        let dark = colors::brick(1);
        assert!(bright[0] > mid[0]);
        assert!(mid[0] > dark[0]);
    }
}
