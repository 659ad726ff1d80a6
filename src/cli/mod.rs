pub mod args;
pub mod commander;
