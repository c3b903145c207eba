// src/gui/components/mod.rs
pub mod banner;
pub mod pickers;
pub mod results;
pub mod tabs;
