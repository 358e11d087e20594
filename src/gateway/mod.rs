pub mod client;
pub mod headers;
pub mod json;
pub mod path;
pub mod types;

pub use client::*;
pub use headers::merge_headers;
pub use json::to_js_json;
pub use path::{build_url, validate_path};
pub use types::*;
