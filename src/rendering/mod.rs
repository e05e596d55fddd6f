//! Rendering pipeline: layout -> paint commands -> SVG / PNG

pub mod layout;
pub mod paint;
pub mod raster;

/// A rasterized diagram
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}
