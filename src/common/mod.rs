pub mod setting;
pub mod logger;
pub mod sqlite;
pub mod http;
pub mod error;
