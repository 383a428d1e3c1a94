pub mod interface;
pub mod client;

pub use interface::{split_fragments, TranslateRequest, TranslateResponse, Translator};
pub use client::TranslateServiceClient;
