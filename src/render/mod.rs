//! Rendering collaborator interface
//!
//! The simulation never draws. After each tick the host asks for a
//! [`DrawCommand`] list and renders it however it likes; hosts with a GPU
//! can turn the rectangles into vertex data with [`shapes`].

pub mod display;
pub mod shapes;
pub mod vertex;

pub use display::{DrawCommand, TextAlign, display_list};
pub use vertex::Vertex;
