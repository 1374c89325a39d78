use crate::model::{Forwarder, Root};
use std::collections::HashSet;

/// Difference between two configuration snapshots, as consumed by the
/// reconciliation loop to decide which listeners to restart.
///
/// Forwarder membership is decided by fingerprint, so reordering the
/// forwarder list yields an empty delta. Tunnels carry no fingerprint and
/// are compared structurally, order included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDelta {
    pub added_forwarders: Vec<Forwarder>,
    pub removed_forwarders: Vec<Forwarder>,
    pub resolver_changed: bool,
    pub tunnels_changed: bool,
    pub checkin_interval_changed: bool,
}

impl ConfigDelta {
    pub fn between(old: &Root, new: &Root) -> ConfigDelta {
        let old_fps: HashSet<String> =
            old.forwarders.iter().map(Forwarder::fingerprint).collect();
        let new_fps: HashSet<String> =
            new.forwarders.iter().map(Forwarder::fingerprint).collect();
        let delta = ConfigDelta {
            added_forwarders: missing_from(&new.forwarders, &old_fps),
            removed_forwarders: missing_from(&old.forwarders, &new_fps),
            resolver_changed: old.resolver.fingerprint() != new.resolver.fingerprint(),
            tunnels_changed: old.tunnels != new.tunnels,
            checkin_interval_changed: old.checkin_interval != new.checkin_interval,
        };
        if !delta.is_empty() {
            tracing::debug!(
                added = delta.added_forwarders.len(),
                removed = delta.removed_forwarders.len(),
                resolver = delta.resolver_changed,
                tunnels = delta.tunnels_changed,
                "configuration snapshot changed"
            );
        }
        delta
    }

    pub fn is_empty(&self) -> bool {
        self.added_forwarders.is_empty()
            && self.removed_forwarders.is_empty()
            && !self.resolver_changed
            && !self.tunnels_changed
            && !self.checkin_interval_changed
    }
}

/// Forwarders in `candidates` whose fingerprint is absent from `present`;
/// duplicates collapse by fingerprint.
fn missing_from(candidates: &[Forwarder], present: &HashSet<String>) -> Vec<Forwarder> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .filter(|f| {
            let fp = f.fingerprint();
            !present.contains(&fp) && seen.insert(fp)
        })
        .cloned()
        .collect()
}
