pub mod backend;
pub mod client;
pub mod protocol;

pub use backend::{Backend, BackendError};
pub use client::SocketBackend;
pub use protocol::DEFAULT_SOCKET_PATH;
