pub mod init;
pub mod link;
pub mod status;
pub mod unlink;

pub use init::InitHandler;
pub use link::LinkHandler;
pub use status::StatusHandler;
pub use unlink::UnlinkHandler;
