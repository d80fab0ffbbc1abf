//! Escape-time rendering of the Mandelbrot set over `[-2, 2] x [-2, 2]`.
//!
//! [`render::render`] turns a [`config::RenderConfig`] and a [`colour::Palette`]
//! into a [`render::RenderResult`]. [`viewer::Viewer`] drives re-renders from
//! key presses and hands each result to a [`viewer::Canvas`];
//! [`display::WgpuCanvas`] is the on-screen one.

pub mod colour;
pub mod compute;
pub mod config;
pub mod display;
pub mod error;
pub mod escape;
pub mod pixel;
pub mod render;
pub mod screen;
pub mod viewer;
pub mod viewport;
pub mod zoom;
