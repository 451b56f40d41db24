pub mod registry;
pub mod scale;
pub mod tables;
