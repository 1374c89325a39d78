use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Write;

const DEFAULT_RESOLVER_ADDRESS: &str = "localhost";
const DEFAULT_RESOLVER_PORT: u16 = 53;
const DEFAULT_UPSTREAMS: [&str; 2] = [
    "https://1.1.1.1/dns-query",
    "https://1.0.0.1/dns-query",
];
const DEFAULT_BOOTSTRAPS: [&str; 4] = [
    "https://162.159.36.1/dns-query",
    "https://162.159.46.1/dns-query",
    "https://[2606:4700:4700::1111]/dns-query",
    "https://[2606:4700:4700::1001]/dns-query",
];

/// A client-side listener that forwards local traffic to the edge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
// not deny_unknown_fields, in order to accept newer control-plane payloads
pub struct Forwarder {
    pub url: String,
    pub listener: String,
}

/// A tunnel exposing a public URL through a local origin service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tunnel {
    pub url: String,
    pub origin: String,
    #[serde(rename = "type")]
    pub protocol_type: String,
}

/// Local DNS-over-HTTPS proxy settings.
///
/// Zero values mean "unset": consumers must read the effective values
/// through the `*_or_default` accessors, never the raw fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DnsResolver {
    pub enabled: bool,
    pub address: String,
    pub port: u16,
    pub upstreams: Vec<String>,
    #[serde(alias = "bootstreams")]
    pub bootstraps: Vec<String>,
}

/// Desired-state snapshot for the whole client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Root {
    pub org_key: String,
    #[serde(rename = "type")]
    pub config_type: String,
    pub checkin_interval: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forwarders: Vec<Forwarder>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tunnels: Vec<Tunnel>,
    pub resolver: DnsResolver,
}

impl Forwarder {
    /// Content fingerprint over `url` then `listener`.
    ///
    /// Fields are concatenated with no separator, so distinct pairs sharing
    /// a byte stream collide (e.g. `("ab","c")` and `("a","bc")`). Kept as
    /// the established change-detection contract; not a security boundary.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.url.as_bytes());
        hasher.update(self.listener.as_bytes());
        hex_digest(hasher)
    }
}

impl DnsResolver {
    /// Content fingerprint over `address`, joined `bootstraps`, joined
    /// `upstreams`, decimal `port` and `enabled`, in that order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.address.as_bytes());
        hasher.update(self.bootstraps.join(",").as_bytes());
        hasher.update(self.upstreams.join(",").as_bytes());
        hasher.update(self.port.to_string().as_bytes());
        hasher.update(if self.enabled { "true" } else { "false" }.as_bytes());
        hex_digest(hasher)
    }

    pub fn enabled_or_default(&self) -> bool {
        self.enabled
    }

    pub fn address_or_default(&self) -> &str {
        if !self.address.is_empty() {
            &self.address
        } else {
            DEFAULT_RESOLVER_ADDRESS
        }
    }

    pub fn port_or_default(&self) -> u16 {
        if self.port > 0 {
            self.port
        } else {
            DEFAULT_RESOLVER_PORT
        }
    }

    /// Effective DoH upstream endpoints; Cloudflare's resolver family when
    /// none are configured.
    pub fn upstreams_or_default(&self) -> Vec<String> {
        if !self.upstreams.is_empty() {
            self.upstreams.clone()
        } else {
            DEFAULT_UPSTREAMS.iter().map(|s| s.to_string()).collect()
        }
    }

    /// Effective DoH bootstrap endpoints, used to resolve upstream
    /// hostnames; IP-literal Cloudflare endpoints when none are configured.
    pub fn bootstraps_or_default(&self) -> Vec<String> {
        if !self.bootstraps.is_empty() {
            self.bootstraps.clone()
        } else {
            DEFAULT_BOOTSTRAPS.iter().map(|s| s.to_string()).collect()
        }
    }
}

fn hex_digest(hasher: Sha256) -> String {
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        write!(&mut out, "{:02x}", byte).expect("writing to a String cannot fail");
    }
    out
}
