pub mod access_log;
pub mod cli;
pub mod export;
pub mod logging;
pub mod source;
