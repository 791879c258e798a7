// SPDX-License-Identifier: MPL-2.0
//! GPU-rendered placeholder cube using a custom wgpu shader.
//!
//! The cube is drawn as 12 edges (a `LineList` of 24 vertices generated in
//! the vertex shader), transformed by a model-view-projection matrix uploaded
//! to a uniform buffer with `queue.write_buffer()` on every prepare.

use crate::scene::{Camera, PlaceholderCube};
use iced::widget::shader::{self, Viewport};
use iced::{mouse, Element, Length, Rectangle};

/// Uniform block shared with `CUBE_SHADER`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeUniforms {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl CubeUniforms {
    /// Computes the uniforms for drawing `cube` with `camera` into `bounds`.
    ///
    /// The camera's aspect ratio is replaced by the aspect of `bounds` so the
    /// cube never stretches with the widget.
    #[must_use]
    pub fn new(camera: &Camera, cube: &PlaceholderCube, bounds: Rectangle) -> Self {
        let mut camera = *camera;
        camera.set_viewport(bounds.size());
        let mvp = camera.view_projection() * cube.model();
        let [r, g, b] = cube.color();
        Self {
            mvp: mvp.to_cols_array_2d(),
            color: [r, g, b, 1.0],
        }
    }
}

/// Shader widget drawing the rotating placeholder cube.
#[derive(Debug, Clone, Copy)]
pub struct CubeShader {
    camera: Camera,
    cube: PlaceholderCube,
}

impl CubeShader {
    pub fn new(camera: Camera, cube: PlaceholderCube) -> Self {
        Self { camera, cube }
    }

    /// Creates an Element that fills the available space.
    pub fn view<'a, Message>(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        shader::Shader::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> shader::Program<Message> for CubeShader {
    type State = ();
    type Primitive = CubePrimitive;

    fn draw(
        &self,
        _state: &Self::State,
        _cursor: mouse::Cursor,
        bounds: Rectangle,
    ) -> Self::Primitive {
        CubePrimitive {
            uniforms: CubeUniforms::new(&self.camera, &self.cube, bounds),
        }
    }
}

/// The rendering primitive for one frame of the cube.
#[derive(Debug, Clone)]
pub struct CubePrimitive {
    uniforms: CubeUniforms,
}

impl shader::Primitive for CubePrimitive {
    type Pipeline = CubePipeline;

    fn prepare(
        &self,
        pipeline: &mut Self::Pipeline,
        _device: &wgpu::Device,
        queue: &wgpu::Queue,
        bounds: &Rectangle,
        viewport: &Viewport,
    ) {
        pipeline.store_physical_bounds(bounds, viewport);
        queue.write_buffer(
            &pipeline.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms),
        );
    }

    fn render(
        &self,
        pipeline: &Self::Pipeline,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clip_bounds: &Rectangle<u32>,
    ) {
        pipeline.render(encoder, target, clip_bounds);
    }
}

/// The wgpu pipeline for the cube.
pub struct CubePipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    // render() only receives the clip bounds
    widget_physical_bounds: Rectangle<f32>,
}

impl shader::Pipeline for CubePipeline {
    fn new(device: &wgpu::Device, _queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cube Shader"),
            source: wgpu::ShaderSource::Wgsl(CUBE_SHADER.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Cube Uniform Buffer"),
            size: std::mem::size_of::<CubeUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Cube Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Cube Uniform Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Cube Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cube Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            widget_physical_bounds: Rectangle::default(),
        }
    }
}

impl CubePipeline {
    fn store_physical_bounds(&mut self, bounds: &Rectangle, viewport: &Viewport) {
        let scale = viewport.scale_factor();
        self.widget_physical_bounds = Rectangle {
            x: bounds.x * scale,
            y: bounds.y * scale,
            width: bounds.width * scale,
            height: bounds.height * scale,
        };
    }

    fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clip_bounds: &Rectangle<u32>,
    ) {
        let wb = &self.widget_physical_bounds;
        if wb.width < 1.0 || wb.height < 1.0 {
            return;
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Cube Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        render_pass.set_viewport(wb.x, wb.y, wb.width, wb.height, 0.0, 1.0);
        render_pass.set_scissor_rect(
            clip_bounds.x,
            clip_bounds.y,
            clip_bounds.width,
            clip_bounds.height,
        );

        render_pass.draw(0..CUBE_EDGE_VERTICES, 0..1);
    }
}

/// Two vertices per edge, twelve edges.
const CUBE_EDGE_VERTICES: u32 = 24;

/// WGSL shader for the cube.
///
/// Corner `i` of the unit cube sits at `(±0.5, ±0.5, ±0.5)` with bit 0, 1 and
/// 2 of `i` selecting the sign of x, y and z.
const CUBE_SHADER: &str = r#"
struct Uniforms {
    mvp: mat4x4<f32>,
    color: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> @builtin(position) vec4<f32> {
    var edges = array<u32, 24>(
        0u, 1u, 2u, 3u, 4u, 5u, 6u, 7u,
        0u, 2u, 1u, 3u, 4u, 6u, 5u, 7u,
        0u, 4u, 1u, 5u, 2u, 6u, 3u, 7u,
    );
    let corner = edges[vertex_index];
    let position = vec3<f32>(
        f32(corner & 1u) - 0.5,
        f32((corner >> 1u) & 1u) - 0.5,
        f32((corner >> 2u) & 1u) - 0.5,
    );
    return uniforms.mvp * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return uniforms.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec4};
    use iced::Size;

    fn bounds(width: f32, height: f32) -> Rectangle {
        Rectangle::new(iced::Point::ORIGIN, Size::new(width, height))
    }

    #[test]
    fn uniforms_match_uniform_block_layout() {
        assert_eq!(std::mem::size_of::<CubeUniforms>(), 80);
    }

    #[test]
    fn uniforms_carry_opaque_green() {
        let camera = Camera::new(75.0, Size::new(800.0, 600.0));
        let uniforms = CubeUniforms::new(&camera, &PlaceholderCube::default(), bounds(800.0, 600.0));
        assert_eq!(uniforms.color, [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn uniforms_use_widget_aspect() {
        let camera = Camera::new(75.0, Size::new(100.0, 100.0));
        let cube = PlaceholderCube::default();
        let uniforms = CubeUniforms::new(&camera, &cube, bounds(1600.0, 900.0));

        let expected = Camera::new(75.0, Size::new(1600.0, 900.0)).view_projection() * cube.model();
        assert_eq!(uniforms.mvp, expected.to_cols_array_2d());
    }

    #[test]
    fn rotated_cube_stays_in_front_of_camera() {
        let camera = Camera::new(75.0, Size::new(800.0, 600.0));
        let mut cube = PlaceholderCube::default();
        for _ in 0..100 {
            cube.advance();
        }
        let uniforms = CubeUniforms::new(&camera, &cube, bounds(800.0, 600.0));
        let mvp = Mat4::from_cols_array_2d(&uniforms.mvp);

        let corner = mvp * Vec4::new(0.5, 0.5, 0.5, 1.0);
        let ndc_z = corner.z / corner.w;
        assert!(corner.w > 0.0);
        assert!((0.0..1.0).contains(&ndc_z));
    }
}
