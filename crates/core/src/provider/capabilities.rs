//! Provider capability reporting.

use crate::models::CapabilityTier;

/// Describes what a health provider supports on the running platform.
///
/// Queried once when the type registry is built; tiers missing here are never
/// registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderCapabilities {
    /// Capability tiers available on this platform. `Base` is always registered
    /// regardless of whether it is listed.
    pub tiers: Vec<CapabilityTier>,
}

impl ProviderCapabilities {
    /// Capabilities of a provider offering every known tier.
    pub fn full() -> Self {
        Self {
            tiers: vec![CapabilityTier::Base, CapabilityTier::HeartRhythmEvents],
        }
    }

    /// Capabilities of an older provider without heart-rhythm events.
    pub fn base_only() -> Self {
        Self {
            tiers: vec![CapabilityTier::Base],
        }
    }

    pub fn supports(&self, tier: CapabilityTier) -> bool {
        tier == CapabilityTier::Base || self.tiers.contains(&tier)
    }
}

impl Default for ProviderCapabilities {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_always_supported() {
        let caps = ProviderCapabilities { tiers: Vec::new() };
        assert!(caps.supports(CapabilityTier::Base));
        assert!(!caps.supports(CapabilityTier::HeartRhythmEvents));
    }

    #[test]
    fn test_full_supports_events() {
        assert!(ProviderCapabilities::full().supports(CapabilityTier::HeartRhythmEvents));
        assert!(!ProviderCapabilities::base_only().supports(CapabilityTier::HeartRhythmEvents));
    }
}
