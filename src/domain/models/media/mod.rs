pub mod image_upload;

pub use image_upload::{load_image, Base64Image, ImageSource, RawImage};
