pub mod entries;
pub mod init;
pub mod insights;
pub mod misc;
pub mod pin;
