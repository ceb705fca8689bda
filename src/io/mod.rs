//! I/O towards the outside world: messages relayed to the GIS host.
pub mod host;
pub use host::{ConsoleMessenger, HostMessage, HostMessenger, RecordingMessenger, Severity};
