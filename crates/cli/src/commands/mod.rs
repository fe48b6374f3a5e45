pub mod build;
pub mod init;
pub mod preview;
pub mod project;
pub mod validate;
