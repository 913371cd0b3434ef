//! I/O layer: decoding source screenshots into 16-bit RGBA buffers (`reader`)
//! and encoding finished canvases by output extension (`writers`).
pub mod reader;
pub use reader::{SUPPORTED_INPUT_EXTENSIONS, is_supported_input, open_image};

pub mod writers;
pub use writers::save_image;
