pub mod itunes;
pub mod lrclib;
pub mod song;
