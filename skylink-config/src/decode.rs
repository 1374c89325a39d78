use crate::error::ConfigError;
use crate::model::Root;

/// String-level decode/encode boundary. The surrounding loader owns all
/// file and control-plane I/O; this crate only sees the raw document.
impl Root {
    pub fn from_json(raw: &str) -> Result<Root, ConfigError> {
        let root: Root =
            serde_json::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        log_decoded(&root);
        Ok(root)
    }

    pub fn from_yaml(raw: &str) -> Result<Root, ConfigError> {
        let root: Root =
            serde_yaml::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        log_decoded(&root);
        Ok(root)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Malformed(e.to_string()))
    }
}

fn log_decoded(root: &Root) {
    tracing::debug!(
        forwarders = root.forwarders.len(),
        tunnels = root.tunnels.len(),
        resolver_enabled = root.resolver.enabled,
        "decoded configuration snapshot"
    );
}

#[cfg(test)]
mod tests {
    use crate::model::{DnsResolver, Forwarder, Root, Tunnel};

    #[test]
    fn decode_full_yaml_document() {
        let raw = "\
org_key: org-123
type: managed
checkin_interval: 60
forwarders:
  - url: https://edge.example.com
    listener: 0.0.0.0:8080
tunnels:
  - url: https://app.example.com
    origin: http://localhost:3000
    type: http
resolver:
  enabled: true
  address: 127.0.0.1
  port: 5353
  upstreams:
    - https://9.9.9.9/dns-query
  bootstraps:
    - https://1.1.1.1/dns-query
";
        let root = Root::from_yaml(raw).unwrap();
        assert_eq!(root.org_key, "org-123");
        assert_eq!(root.config_type, "managed");
        assert_eq!(root.checkin_interval, 60);
        assert_eq!(root.forwarders.len(), 1);
        assert_eq!(root.forwarders[0].listener, "0.0.0.0:8080");
        assert_eq!(root.tunnels.len(), 1);
        assert_eq!(root.tunnels[0].protocol_type, "http");
        assert!(root.resolver.enabled);
        assert_eq!(root.resolver.port, 5353);
    }

    #[test]
    fn missing_members_decode_to_zero_values() {
        let root = Root::from_json(r#"{"org_key": "org-123"}"#).unwrap();
        assert_eq!(root.org_key, "org-123");
        assert_eq!(root.config_type, "");
        assert_eq!(root.checkin_interval, 0);
        assert!(root.forwarders.is_empty());
        assert!(root.tunnels.is_empty());
        assert_eq!(root.resolver, DnsResolver::default());
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let root = Root::from_json(r#"{"org_key": "o", "brand_new_field": 42}"#).unwrap();
        assert_eq!(root.org_key, "o");
    }

    #[test]
    fn legacy_bootstreams_spelling_is_accepted() {
        let raw = r#"{"resolver": {"bootstreams": ["https://1.1.1.1/dns-query"]}}"#;
        let root = Root::from_json(raw).unwrap();
        assert_eq!(
            root.resolver.bootstraps,
            vec!["https://1.1.1.1/dns-query".to_string()]
        );
    }

    #[test]
    fn malformed_documents_are_rejected() {
        let err = Root::from_json(r#"{"checkin_interval": "soon"}"#).unwrap_err();
        assert!(err.to_string().starts_with("malformed configuration"));
        assert!(Root::from_yaml("resolver: [not, a, mapping]").is_err());
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let root = Root {
            org_key: "org-123".to_string(),
            config_type: "managed".to_string(),
            checkin_interval: 90,
            forwarders: vec![Forwarder {
                url: "https://edge.example.com".to_string(),
                listener: "0.0.0.0:8080".to_string(),
            }],
            tunnels: vec![Tunnel {
                url: "https://app.example.com".to_string(),
                origin: "http://localhost:3000".to_string(),
                protocol_type: "http".to_string(),
            }],
            resolver: DnsResolver {
                enabled: true,
                address: "127.0.0.1".to_string(),
                port: 5353,
                upstreams: vec!["https://9.9.9.9/dns-query".to_string()],
                bootstraps: vec!["https://1.1.1.1/dns-query".to_string()],
            },
        };
        assert_eq!(Root::from_json(&root.to_json().unwrap()).unwrap(), root);
        assert_eq!(Root::from_yaml(&root.to_yaml().unwrap()).unwrap(), root);
    }

    #[test]
    fn empty_sequences_are_omitted_on_encode() {
        let encoded = Root::default().to_json().unwrap();
        assert!(!encoded.contains("forwarders"));
        assert!(!encoded.contains("tunnels"));
        assert!(encoded.contains("resolver"));
    }
}
