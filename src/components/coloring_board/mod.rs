mod component;
mod render;
mod state;

pub use component::{ColoringBoard, fit_canvas};
