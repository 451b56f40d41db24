pub mod cleaning;
pub mod random;
pub mod wheel;
