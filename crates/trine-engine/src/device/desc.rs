//! Backend-neutral descriptors passed across the platform seam.

use std::ops::Range;

/// Pipeline stage a shader program is written for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// WGSL program embedded in the binary.
#[derive(Debug, Copy, Clone)]
pub struct ShaderProgram {
    pub label: &'static str,
    pub stage: ShaderStage,
    /// Name of the entry function inside `code`.
    pub entry_point: &'static str,
    pub code: &'static str,
}

/// One programmable stage of a pipeline.
pub struct StageDesc<'a, M> {
    pub module: &'a M,
    pub entry_point: &'a str,
}

/// Render pipeline description.
///
/// Always uses the implicit (auto-derived) binding layout, no vertex buffers,
/// no depth/stencil, and exactly one color target.
pub struct PipelineDesc<'a, M> {
    pub label: &'a str,
    pub vertex: StageDesc<'a, M>,
    pub fragment: StageDesc<'a, M>,
    pub color_format: wgpu::TextureFormat,
    pub topology: wgpu::PrimitiveTopology,
}

impl<M> PipelineDesc<'_, M> {
    /// Color targets of the fragment stage.
    pub fn color_targets(&self) -> [Option<wgpu::ColorTargetState>; 1] {
        [Some(wgpu::ColorTargetState {
            format: self.color_format,
            blend: None,
            write_mask: wgpu::ColorWrites::ALL,
        })]
    }

    /// Primitive assembly state. Non-indexed, so no strip index format.
    pub fn primitive_state(&self) -> wgpu::PrimitiveState {
        wgpu::PrimitiveState {
            topology: self.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        }
    }
}

/// Single-attachment render pass description.
pub struct PassDesc<'a, V> {
    pub label: &'a str,
    pub view: &'a V,
    pub clear: wgpu::Color,
}

impl<V> PassDesc<'_, V> {
    /// Clear on load, keep the result on store.
    pub fn color_ops(&self) -> wgpu::Operations<wgpu::Color> {
        wgpu::Operations {
            load: wgpu::LoadOp::Clear(self.clear),
            store: wgpu::StoreOp::Store,
        }
    }
}

/// Non-indexed draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawCall {
    pub vertex_count: u32,
    pub instance_count: u32,
    pub first_vertex: u32,
    pub first_instance: u32,
}

impl DrawCall {
    pub fn vertices(&self) -> Range<u32> {
        self.first_vertex..self.first_vertex + self.vertex_count
    }

    pub fn instances(&self) -> Range<u32> {
        self.first_instance..self.first_instance + self.instance_count
    }
}

/// Surface capabilities for a given adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceCaps {
    /// Supported formats; the first one is the surface's preferred format.
    pub formats: Vec<wgpu::TextureFormat>,
    pub alpha_modes: Vec<wgpu::CompositeAlphaMode>,
}

/// Resolved surface configuration; the platform supplies the extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceSettings {
    pub format: wgpu::TextureFormat,
    pub alpha_mode: wgpu::CompositeAlphaMode,
    pub present_mode: wgpu::PresentMode,
    pub desired_maximum_frame_latency: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_ranges_start_at_offsets() {
        let call = DrawCall {
            vertex_count: 3,
            instance_count: 1,
            first_vertex: 2,
            first_instance: 0,
        };
        assert_eq!(call.vertices(), 2..5);
        assert_eq!(call.instances(), 0..1);
    }

    #[test]
    fn pass_clears_then_stores() {
        let desc = PassDesc {
            label: "pass",
            view: &(),
            clear: wgpu::Color::BLACK,
        };
        let ops = desc.color_ops();
        assert!(matches!(ops.load, wgpu::LoadOp::Clear(c) if c == wgpu::Color::BLACK));
        assert_eq!(ops.store, wgpu::StoreOp::Store);
    }
}
