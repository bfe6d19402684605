pub mod compositor;
pub mod geometry;
