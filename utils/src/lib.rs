pub mod bench;
pub mod generate;
pub mod project_root;
pub mod sharing;

pub use immupath_core;
