pub mod composite;
pub mod converter;
pub mod cursor;
pub mod geometry;
pub mod grayscale;
pub mod image;
pub mod pixel;
pub mod raster;
pub mod utils;
