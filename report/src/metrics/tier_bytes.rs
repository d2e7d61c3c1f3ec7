use serde::{
    de::{
        MapAccess,
        Visitor,
    },
    ser::SerializeMap,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use std::fmt;

/// Bytes per storage tier, keyed by tier name.
///
/// Tier names are open-ended (`MEM`, `SSD`, `HDD`, ...) so this is not an enum.
/// Entries keep the order in which a tier was first seen, both when built
/// incrementally with [`TierBytes::add`] and when deserialized from a document,
/// which keeps every rendering of the tiers reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierBytes {
    entries: Vec<(String, i64)>,
}

impl TierBytes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tier: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(name, _)| name == tier)
            .map(|(_, bytes)| *bytes)
    }

    /// Bytes for `tier`, or 0 when the tier is absent.
    pub fn get_or_zero(&self, tier: &str) -> i64 {
        self.get(tier).unwrap_or(0)
    }

    /// Adds `bytes` to the running value of `tier`, creating it at 0 on first sight.
    ///
    /// Sums wrap around on overflow.
    pub fn add(&mut self, tier: &str, bytes: i64) {
        match self.entries.iter_mut().find(|(name, _)| name == tier) {
            Some((_, value)) => *value = value.wrapping_add(bytes),
            None => self.entries.push((tier.to_string(), bytes)),
        }
    }

    /// Adds every tier of `other` into `self`.
    pub fn merge(&mut self, other: &TierBytes) {
        for (tier, bytes) in other.iter() {
            self.add(tier, bytes);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.entries.iter().map(|(name, bytes)| (name.as_str(), *bytes))
    }

    pub fn tiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for TierBytes {
    /// Duplicate tier names are summed into the first occurrence.
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut tiers = TierBytes::new();
        for (tier, bytes) in iter {
            let tier: String = tier.into();
            tiers.add(&tier, bytes);
        }
        tiers
    }
}

impl Serialize for TierBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (tier, bytes) in &self.entries {
            map.serialize_entry(tier, bytes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TierBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TierBytesVisitor;

        impl<'de> Visitor<'de> for TierBytesVisitor {
            type Value = TierBytes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from tier name to bytes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut tiers = TierBytes::new();
                while let Some((tier, bytes)) = access.next_entry::<String, i64>()? {
                    tiers.add(&tier, bytes);
                }
                Ok(tiers)
            }
        }

        deserializer.deserialize_map(TierBytesVisitor)
    }
}
