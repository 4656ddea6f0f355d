pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod pipeline;

pub use context::gather;
pub use context::record;
pub use pipeline::{Packer, run};
