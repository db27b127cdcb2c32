pub mod decode;
pub mod png_encode;

pub use decode::decode_photo;
pub use png_encode::encode_canvas;
