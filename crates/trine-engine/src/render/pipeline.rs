use crate::device::{DrawCall, PipelineDesc, ShaderProgram, ShaderStage, StageDesc};

pub const VERTEX_SHADER: ShaderProgram = ShaderProgram {
    label: "trine triangle vertex shader",
    stage: ShaderStage::Vertex,
    entry_point: "main",
    code: include_str!("shaders/triangle.vert.wgsl"),
};

pub const FRAGMENT_SHADER: ShaderProgram = ShaderProgram {
    label: "trine triangle fragment shader",
    stage: ShaderStage::Fragment,
    entry_point: "main",
    code: include_str!("shaders/triangle.frag.wgsl"),
};

/// Opaque black.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// One triangle: 3 vertices, 1 instance, no offsets.
pub const TRIANGLE_DRAW: DrawCall = DrawCall {
    vertex_count: 3,
    instance_count: 1,
    first_vertex: 0,
    first_instance: 0,
};

/// Describes the triangle pipeline for the given surface format.
pub fn triangle_pipeline<'a, M>(
    vertex: &'a M,
    fragment: &'a M,
    format: wgpu::TextureFormat,
) -> PipelineDesc<'a, M> {
    PipelineDesc {
        label: "trine triangle pipeline",
        vertex: StageDesc {
            module: vertex,
            entry_point: VERTEX_SHADER.entry_point,
        },
        fragment: StageDesc {
            module: fragment,
            entry_point: FRAGMENT_SHADER.entry_point,
        },
        color_format: format,
        topology: wgpu::PrimitiveTopology::TriangleList,
    }
}
