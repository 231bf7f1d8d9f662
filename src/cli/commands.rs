pub mod about;
pub mod basket;
pub mod config;
pub mod dataset;
pub mod init;
pub mod trends;
