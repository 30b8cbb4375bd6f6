//! Operating-system facing adapters.

pub mod app_dirs;

pub use app_dirs::DirsAppDirsAdapter;
