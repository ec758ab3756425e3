pub mod call;
pub mod countdown;
pub mod init;
pub mod save;
pub mod show;
