//! Configuration model for the Skylink client: forwarders, tunnels and the
//! local DoH resolver, plus content fingerprinting for change detection.

mod decode;
mod delta;
mod error;
mod model;

pub use delta::ConfigDelta;
pub use error::ConfigError;
pub use model::{DnsResolver, Forwarder, Root, Tunnel};
