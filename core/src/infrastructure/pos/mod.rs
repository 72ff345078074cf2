pub mod mappers;
pub mod toast_client;
