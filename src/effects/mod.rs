pub mod blur;
pub mod composite;
pub mod shadow;
