use anyhow::Context;
use clap::Parser;
use log::{error, info};
use mandelbrot_canvas::{config::Args, display::WgpuCanvas, viewer::Viewer};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.render_config()?;
    let zoom = args.initial_zoom()?;

    let mut viewer = Viewer::new(config, zoom).context("initial render failed")?;
    info!("{}", viewer.current().message().trim());

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Mandelbrot")
        .with_inner_size(PhysicalSize::new(config.size.width, config.size.height))
        .build(&event_loop)
        .context("failed to create window")?;

    let mut canvas =
        pollster::block_on(WgpuCanvas::new(&window)).context("failed to set up display")?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    canvas.resize(size);
                    window.request_redraw();
                }
                WindowEvent::ReceivedCharacter(key) => match viewer.handle_key(key) {
                    Ok(true) => window.request_redraw(),
                    Ok(false) => {}
                    Err(err) => {
                        error!("re-render failed: {err}");
                        *control_flow = ControlFlow::Exit;
                    }
                },
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                if let Err(err) = viewer.present(&mut canvas) {
                    error!("present failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
