//! Assets compiled into the binary.

pub const DEFAULT_TOP_LEFT: &[u8] = include_bytes!("../../assets/default/top_left.png");
pub const DEFAULT_TOP_CENTER: &[u8] = include_bytes!("../../assets/default/top_center.png");
pub const DEFAULT_TOP_RIGHT: &[u8] = include_bytes!("../../assets/default/top_right.png");
pub const DEFAULT_BORDER: &[u8] = include_bytes!("../../assets/default/1x1_border.png");

/// Upload form served at `GET /`.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");
