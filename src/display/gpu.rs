use std::num::NonZeroU32;

use log::{debug, trace};
use winit::{dpi::PhysicalSize, window::Window};

use super::{
    command_encoder::{self, CommandEncoderExt},
    text,
    uniform::{DisplayParams, Uniform},
    DisplayError,
};
use crate::{
    pixel::{self, Argb},
    render::RenderResult,
    screen,
    viewer::Canvas,
    zoom::Zoom,
};

const CLEAR_COLOUR: wgpu::Color = wgpu::Color {
    r: 0.5,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

const TEXT_COLOUR: Argb = pixel::rgb(255, 255, 255);

/// An uploaded image and the bind group that samples it.
struct ImageTexture {
    size: screen::Size,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl ImageTexture {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        params: &Uniform<DisplayParams>,
        format: wgpu::TextureFormat,
        size: screen::Size,
    ) -> Self {
        debug!("creating {}x{} image texture", size.width, size.height);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("image-texture"),
            size: extent(size),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("image-bind-group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: params.binding_resource(),
                },
            ],
        });

        Self {
            size,
            texture,
            bind_group,
        }
    }
}

fn check_texture_size(size: screen::Size, limit: u32) -> Result<(), DisplayError> {
    if size.width > limit || size.height > limit {
        return Err(DisplayError::ImageTooLarge {
            width: size.width,
            height: size.height,
            limit,
        });
    }
    Ok(())
}

fn extent(size: screen::Size) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size.width,
        height: size.height,
        depth_or_array_layers: 1,
    }
}

/**
Shows rendered images in a window.

Each image is copied into a frame owned by the canvas, the timing message is
drawn over it, and the frame is uploaded as a texture. A packed `0xAARRGGBB`
value is stored little-endian as B, G, R, A, so the texture is BGRA and the
pixel data is uploaded without conversion. The fragment shader scales the
texture about the top-left corner of the window by the zoom factor.
*/
pub struct WgpuCanvas {
    surface: wgpu::Surface,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_configuration: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    params: Uniform<DisplayParams>,
    image_format: wgpu::TextureFormat,
    image: Option<ImageTexture>,
    frame: Vec<Argb>,
}

impl WgpuCanvas {
    pub async fn new(window: &Window) -> Result<Self, DisplayError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::Backends::all());
        let surface = unsafe { instance.create_surface(window) };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: Default::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or(DisplayError::NoAdapter)?;
        debug!("using adapter {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("device"),
                    features: wgpu::Features::empty(),
                    limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let format = *surface
            .get_supported_formats(&adapter)
            .first()
            .ok_or(DisplayError::NoSurfaceFormat)?;

        let surface_configuration = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
        };
        surface.configure(&device, &surface_configuration);

        // Sampling an sRGB texture into an sRGB surface round-trips the bytes unchanged.
        let image_format = if format.describe().srgb {
            wgpu::TextureFormat::Bgra8UnormSrgb
        } else {
            wgpu::TextureFormat::Bgra8Unorm
        };
        debug!("surface format {:?}, image format {:?}", format, image_format);

        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("display-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("display-bind-group-layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: false },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::NonFiltering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("display-pipeline-layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("display-pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vertex_main",
                buffers: &[],
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fragment_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor::default());

        let params = Uniform::new(
            &device,
            "display-params",
            DisplayParams::new(1, 1, Zoom::INITIAL.factor()),
        );

        Ok(Self {
            surface,
            device,
            queue,
            surface_configuration,
            render_pipeline,
            bind_group_layout,
            sampler,
            params,
            image_format,
            image: None,
            frame: Vec::new(),
        })
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        debug!("resizing to {:?}", size);

        self.surface_configuration.width = size.width.max(1);
        self.surface_configuration.height = size.height.max(1);
        self.surface.configure(&self.device, &self.surface_configuration);
    }
}

impl Canvas for WgpuCanvas {
    type Error = DisplayError;

    fn present(&mut self, result: &RenderResult, zoom: Zoom) -> Result<(), Self::Error> {
        trace!("begin present");

        let size = result.pixels.size();
        let message = result.message();
        self.frame.clear();
        self.frame.extend_from_slice(result.pixels.as_slice());
        let (x, y) = text::bottom_right_origin(size, &message);
        text::draw_text(&mut self.frame, size, x, y, &message, TEXT_COLOUR);

        let image = match self.image.take() {
            Some(image) if image.size == size => image,
            _ => {
                check_texture_size(size, self.device.limits().max_texture_dimension_2d)?;
                ImageTexture::new(
                    &self.device,
                    &self.bind_group_layout,
                    &self.sampler,
                    &self.params,
                    self.image_format,
                    size,
                )
            }
        };
        let image = &*self.image.insert(image);

        self.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &image.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(&self.frame),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: NonZeroU32::new(4 * size.width),
                rows_per_image: NonZeroU32::new(size.height),
            },
            extent(size),
        );
        self.params.write(
            &self.queue,
            DisplayParams::new(size.width, size.height, zoom.factor()),
        );

        let surface_texture = match self.surface.get_current_texture() {
            Ok(surface_texture) => surface_texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!("surface out of date, reconfiguring");
                self.surface.configure(&self.device, &self.surface_configuration);
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let render_pipeline = &self.render_pipeline;
        let command_buffer = command_encoder::encode(&self.device, "present", |command_encoder| {
            command_encoder.with_render_pass(
                &wgpu::RenderPassDescriptor {
                    label: Some("render-pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &surface_texture_view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(CLEAR_COLOUR),
                            store: true,
                        },
                    })],
                    depth_stencil_attachment: None,
                },
                |render_pass| {
                    render_pass.set_pipeline(render_pipeline);
                    render_pass.set_bind_group(0, &image.bind_group, &[]);
                    render_pass.draw(0..4, 0..1);
                },
            )
        });

        self.queue.submit([command_buffer]);
        surface_texture.present();

        trace!("end present");
        Ok(())
    }
}
