//! On-screen presentation of rendered images.

mod command_encoder;
mod gpu;
pub mod text;
mod uniform;

pub use gpu::WgpuCanvas;

/// Display error types
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("no graphics adapter is compatible with the window surface")]
    NoAdapter,
    #[error("the window surface supports no texture formats")]
    NoSurfaceFormat,
    #[error("failed to request a graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("a {width}x{height} image exceeds the {limit} pixel texture limit")]
    ImageTooLarge { width: u32, height: u32, limit: u32 },
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
