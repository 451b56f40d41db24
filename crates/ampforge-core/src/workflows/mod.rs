pub mod describe;
pub mod generate;
pub mod library;
