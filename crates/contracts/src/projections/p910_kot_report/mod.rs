pub mod dto;
pub mod range;
