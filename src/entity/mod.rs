pub mod channel;
pub mod dto;
