pub mod adapters;
pub mod headless;
pub mod rope_vis2d;
