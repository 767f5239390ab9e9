//! Ambient animation shader
//!
//! Renders the deck's decorative layer in a single fullscreen pass:
//! - Pulsing radial-gradient glow anchored at three fixed points
//! - Floating glowing dots driven by the generated decoration batch
//!
//! The timing curves mirror [`crate::ui::animation`]; decoration descriptors
//! are uploaded as uniform arrays and animated entirely on the GPU from the
//! elapsed time, so the CPU side only advances one float per frame.

use bytemuck::{Pod, Zeroable};
use iced::wgpu;
use iced::widget::shader::{self, Viewport};
use iced::{Element, Length, Rectangle, mouse};

use super::decorations::Decoration;

/// Uniform capacity for dot descriptors. The generated batch is smaller;
/// `dot_count` tells the shader how many entries are live.
pub const MAX_DOTS: usize = 16;

/// Uniform data passed to the ambient shader
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct AmbientUniforms {
    /// Viewport resolution (width, height)
    pub resolution: [f32; 2],
    /// Elapsed animation time in seconds
    pub time: f32,
    /// Overall layer opacity (for fade transitions)
    pub opacity: f32,
    /// Accent color for glow and dots (RGB + alpha)
    pub accent: [f32; 4],
    /// Base background color (RGB + alpha)
    pub background: [f32; 4],
    /// Number of live entries in `dots`
    pub dot_count: u32,
    pub _padding: [u32; 3],
    /// Per-dot placement: left %, top %, diameter px, delay s
    pub dots: [[f32; 4]; MAX_DOTS],
    /// Per-dot timing: float period s (remaining lanes unused)
    pub dot_timing: [[f32; 4]; MAX_DOTS],
}

impl Default for AmbientUniforms {
    fn default() -> Self {
        Self {
            resolution: [1920.0, 1080.0],
            time: 0.0,
            opacity: 1.0,
            accent: [0.518, 0.8, 0.086, 1.0],
            background: [1.0, 1.0, 1.0, 1.0],
            dot_count: 0,
            _padding: [0; 3],
            dots: [[0.0; 4]; MAX_DOTS],
            dot_timing: [[0.0; 4]; MAX_DOTS],
        }
    }
}

/// WGSL shader source for the ambient layer
const AMBIENT_SHADER: &str = r#"
struct Uniforms {
    resolution: vec2f,
    time: f32,
    opacity: f32,
    accent: vec4f,
    background: vec4f,
    dot_count: u32,
    _pad0: u32,
    _pad1: u32,
    _pad2: u32,
    dots: array<vec4f, 16>,
    dot_timing: array<vec4f, 16>,
}

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

struct VertexOut {
    @builtin(position) position: vec4f,
    @location(0) uv: vec2f,
}

// Vertex shader: generates a fullscreen triangle
@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOut {
    let uv = vec2f(
        f32((vertex_index << 1) & 2),
        f32(vertex_index & 2)
    );
    let position = vec4f(uv * 2.0 - 1.0, 0.0, 1.0);
    return VertexOut(position, uv);
}

// Hermite smoothstep, same ease-in-out as the CPU-side keyframes
fn hermite(t: f32) -> f32 {
    return t * t * (3.0 - 2.0 * t);
}

// Triangle wave 0 -> 1 -> 0 across one phase, eased
fn loop_level(phase: f32) -> f32 {
    return hermite(1.0 - abs(2.0 * fract(phase) - 1.0));
}

// Background pulse: opacity 0.6..1.0, scale 1.0..1.05, 6s period
const PULSE_PERIOD: f32 = 6.0;

// Float loop: vertical travel up to 20px, per-dot period and delay
const FLOAT_RISE: f32 = 20.0;

fn float_offset(time: f32, delay: f32, duration: f32) -> f32 {
    if (time < delay || duration <= 0.0) {
        return 0.0;
    }
    return -FLOAT_RISE * loop_level((time - delay) / duration);
}

// One radial glow blob, alpha fading linearly to zero at the radius edge
fn glow_blob(p: vec2f, center: vec2f, radius: f32) -> f32 {
    let dist = distance(p, center);
    return max(0.0, 1.0 - dist / radius);
}

@fragment
fn fs_main(in: VertexOut) -> @location(0) vec4f {
    // Top-left origin in fractions of the viewport, CSS-style
    let frac = vec2f(in.uv.x, 1.0 - in.uv.y);
    let p = frac * uniforms.resolution;

    var color = uniforms.background.rgb;

    // Pulsing radial gradients at three fixed anchors
    let level = loop_level(uniforms.time / PULSE_PERIOD);
    let pulse_opacity = 0.6 + 0.4 * level;
    let pulse_scale = 1.0 + 0.05 * level;
    let radius = 0.5 * pulse_scale;

    var glow = glow_blob(frac, vec2f(0.2, 0.5), radius);
    glow += glow_blob(frac, vec2f(0.8, 0.2), radius);
    glow += glow_blob(frac, vec2f(0.4, 0.8), radius);
    let glow_alpha = min(glow, 1.0) * 0.05 * pulse_opacity * uniforms.opacity;
    color = mix(color, uniforms.accent.rgb, glow_alpha);

    // Floating dots with a soft halo
    for (var i = 0u; i < uniforms.dot_count; i++) {
        let dot = uniforms.dots[i];
        let duration = uniforms.dot_timing[i].x;
        let center = vec2f(
            dot.x / 100.0 * uniforms.resolution.x,
            dot.y / 100.0 * uniforms.resolution.y
                + float_offset(uniforms.time, dot.w, duration),
        );
        let dist = distance(p, center);
        let dot_radius = dot.z * 0.5;

        let core = smoothstep(dot_radius + 0.75, dot_radius - 0.75, dist);
        let halo = 0.5 * exp(-max(dist - dot_radius, 0.0) / 8.0);
        let alpha = min(core + halo, 1.0) * 0.4 * uniforms.opacity;
        color = mix(color, uniforms.accent.rgb, alpha);
    }

    return vec4f(color, uniforms.opacity);
}
"#;

/// WGPU pipeline for the ambient shader - implements iced's Pipeline trait
pub struct AmbientPipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniforms: AmbientUniforms,
}

impl shader::Pipeline for AmbientPipeline {
    fn new(device: &wgpu::Device, _queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Ambient Shader"),
            source: wgpu::ShaderSource::Wgsl(std::borrow::Cow::Borrowed(AMBIENT_SHADER)),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Ambient Uniform Buffer"),
            size: std::mem::size_of::<AmbientUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Ambient Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Ambient Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Ambient Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Ambient Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
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
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            uniforms: AmbientUniforms::default(),
        }
    }
}

impl AmbientPipeline {
    fn update(&mut self, queue: &wgpu::Queue, uniforms: AmbientUniforms) {
        self.uniforms = uniforms;
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
    }
}

/// Shader primitive for ambient rendering
#[derive(Debug, Clone)]
pub struct AmbientPrimitive {
    uniforms: AmbientUniforms,
}

impl AmbientPrimitive {
    pub fn new(uniforms: AmbientUniforms) -> Self {
        Self { uniforms }
    }
}

impl shader::Primitive for AmbientPrimitive {
    type Pipeline = AmbientPipeline;

    fn prepare(
        &self,
        pipeline: &mut Self::Pipeline,
        _device: &wgpu::Device,
        queue: &wgpu::Queue,
        bounds: &Rectangle,
        _viewport: &Viewport,
    ) {
        let mut uniforms = self.uniforms;
        uniforms.resolution = [bounds.width, bounds.height];
        pipeline.update(queue, uniforms);
    }

    fn draw(&self, pipeline: &Self::Pipeline, render_pass: &mut wgpu::RenderPass<'_>) -> bool {
        render_pass.set_pipeline(&pipeline.pipeline);
        render_pass.set_bind_group(0, &pipeline.bind_group, &[]);
        render_pass.draw(0..3, 0..1);
        true
    }
}

/// State for ambient shader interaction
#[derive(Debug, Default)]
pub struct AmbientState;

/// Ambient layer shader program
#[derive(Debug, Clone)]
pub struct AmbientProgram {
    uniforms: AmbientUniforms,
}

impl AmbientProgram {
    pub fn new() -> Self {
        Self {
            uniforms: AmbientUniforms::default(),
        }
    }

    /// Upload a decoration batch. Entries beyond [`MAX_DOTS`] are ignored.
    pub fn with_decorations(mut self, decorations: &[Decoration]) -> Self {
        self.set_decorations(decorations);
        self
    }

    pub fn with_colors(mut self, accent: [f32; 4], background: [f32; 4]) -> Self {
        self.uniforms.accent = accent;
        self.uniforms.background = background;
        self
    }

    pub fn set_decorations(&mut self, decorations: &[Decoration]) {
        let count = decorations.len().min(MAX_DOTS);
        self.uniforms.dot_count = count as u32;
        for (slot, dot) in self.uniforms.dots.iter_mut().zip(decorations) {
            *slot = [dot.left, dot.top, dot.size, dot.delay];
        }
        for (slot, dot) in self.uniforms.dot_timing.iter_mut().zip(decorations) {
            *slot = [dot.duration, 0.0, 0.0, 0.0];
        }
    }

    pub fn set_colors(&mut self, accent: [f32; 4], background: [f32; 4]) {
        self.uniforms.accent = accent;
        self.uniforms.background = background;
    }

    pub fn set_time(&mut self, time: f32) {
        self.uniforms.time = time;
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.uniforms.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn dot_count(&self) -> usize {
        self.uniforms.dot_count as usize
    }
}

impl Default for AmbientProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> shader::Program<Message> for AmbientProgram {
    type State = AmbientState;
    type Primitive = AmbientPrimitive;

    fn draw(
        &self,
        _state: &Self::State,
        _cursor: mouse::Cursor,
        _bounds: Rectangle,
    ) -> Self::Primitive {
        AmbientPrimitive::new(self.uniforms)
    }
}

/// Widget for the ambient layer
pub struct Ambient<'a, Message> {
    program: &'a AmbientProgram,
    width: Length,
    height: Length,
    _phantom: std::marker::PhantomData<Message>,
}

impl<'a, Message> Ambient<'a, Message> {
    pub fn new(program: &'a AmbientProgram) -> Self {
        Self {
            program,
            width: Length::Fill,
            height: Length::Fill,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

impl<'a, Message: 'a> From<Ambient<'a, Message>> for Element<'a, Message> {
    fn from(ambient: Ambient<'a, Message>) -> Self {
        iced::widget::shader(ambient.program)
            .width(ambient.width)
            .height(ambient.height)
            .into()
    }
}

/// Helper to convert iced::Color to shader color array
pub fn color_to_array(color: iced::Color) -> [f32; 4] {
    [color.r, color.g, color.b, color.a]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn decoration_batch_fills_uniform_slots_in_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = crate::ui::effects::decorations::generate_with(&mut rng, 12);
        let program = AmbientProgram::new().with_decorations(&batch);

        assert_eq!(program.dot_count(), 12);
        for (i, dot) in batch.iter().enumerate() {
            assert_eq!(program.uniforms.dots[i], [dot.left, dot.top, dot.size, dot.delay]);
            assert_eq!(program.uniforms.dot_timing[i][0], dot.duration);
        }
    }

    #[test]
    fn oversized_batch_is_truncated_to_capacity() {
        let mut rng = StdRng::seed_from_u64(9);
        let batch = crate::ui::effects::decorations::generate_with(&mut rng, MAX_DOTS + 8);
        let program = AmbientProgram::new().with_decorations(&batch);
        assert_eq!(program.dot_count(), MAX_DOTS);
    }

    #[test]
    fn opacity_is_clamped() {
        let mut program = AmbientProgram::new();
        program.set_opacity(3.0);
        assert_eq!(program.uniforms.opacity, 1.0);
        program.set_opacity(-1.0);
        assert_eq!(program.uniforms.opacity, 0.0);
    }
}
