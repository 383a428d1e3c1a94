pub mod interface;
pub mod client;

pub use interface::{parse_image_url, ImageSource};
pub use client::HttpImageFetcher;
