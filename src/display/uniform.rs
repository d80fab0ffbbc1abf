use std::marker::PhantomData;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Shader parameters for `shader.wgsl#DisplayParams`.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct DisplayParams {
    pub image_size: [f32; 2],
    pub zoom: f32,
    pub _padding: f32,
}

impl DisplayParams {
    pub fn new(image_width: u32, image_height: u32, zoom: f64) -> Self {
        Self {
            image_size: [image_width as f32, image_height as f32],
            zoom: zoom as f32,
            _padding: 0.0,
        }
    }
}

/// A uniform buffer holding exactly one `A`.
pub struct Uniform<A> {
    buffer: wgpu::Buffer,
    phantom_data: PhantomData<A>,
}

impl<A: Pod + Zeroable> Uniform<A> {
    pub fn new(device: &wgpu::Device, label: &str, contents: A) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&[contents]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            buffer,
            phantom_data: PhantomData,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue, contents: A) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[contents]));
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }
}
