pub mod calendar;
pub mod config;
pub mod events;
pub mod export;
pub mod init;
pub mod serve;
pub mod sources;
