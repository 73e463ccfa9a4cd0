pub mod cover;
pub mod lyrics;
pub mod metadata;
pub mod root;
pub use cover::ItunesCoverArt;
pub use lyrics::LrclibSearch;
pub use metadata::MetadataController;
pub use root::RootController;
