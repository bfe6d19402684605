pub mod bundled;
pub mod decode;
