pub mod filter;
pub mod gather;
pub mod reader;
pub mod record;
pub mod types;
