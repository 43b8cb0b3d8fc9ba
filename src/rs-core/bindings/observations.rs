use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use crate::wasm_bindgen;

/// Description of the last frame decoded by a transport client, as read by the
/// JavaScript-side from the client's current frame.
///
/// Not every frame object exposes the same fields, which is why they are all
/// optional:
///   - `timestamp`: the presentation timestamp of the frame, when known.
///   - `id`: any identity-like field of the frame object.
///   - `fingerprint`: a serialization of the frame object's structure, used as a
///     last resort to tell two frames apart.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameObservation {
    timestamp: Option<f64>,
    id: Option<String>,
    fingerprint: Option<String>,
}

#[wasm_bindgen]
impl FrameObservation {
    #[wasm_bindgen(constructor)]
    pub fn new(timestamp: Option<f64>, id: Option<String>, fingerprint: Option<String>) -> Self {
        Self {
            timestamp,
            id,
            fingerprint,
        }
    }
}

impl FrameObservation {
    #[inline(always)]
    pub fn timestamp(&self) -> Option<f64> {
        self.timestamp
    }

    #[inline(always)]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline(always)]
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Returns the value identifying that frame, by order of preference its timestamp,
    /// its id, then a hash of its fingerprint.
    ///
    /// Returns `None` if the observation carries none of them.
    pub fn identity(&self) -> Option<FrameIdentity> {
        if let Some(ts) = self.timestamp.filter(|ts| !ts.is_nan()) {
            return Some(FrameIdentity::Timestamp(ts));
        }
        if let Some(id) = self.id.as_ref() {
            return Some(FrameIdentity::Id(id.clone()));
        }
        self.fingerprint.as_ref().map(|fp| {
            let mut hasher = DefaultHasher::new();
            fp.hash(&mut hasher);
            FrameIdentity::Hash(hasher.finish())
        })
    }
}

/// Value allowing to tell whether two `FrameObservation` concern the same frame.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameIdentity {
    Timestamp(f64),
    Id(String),
    Hash(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_preference() {
        let obs = FrameObservation::new(Some(40.), Some("a".to_owned()), Some("{}".to_owned()));
        assert_eq!(obs.identity(), Some(FrameIdentity::Timestamp(40.)));

        let obs = FrameObservation::new(None, Some("a".to_owned()), Some("{}".to_owned()));
        assert_eq!(obs.identity(), Some(FrameIdentity::Id("a".to_owned())));

        let obs = FrameObservation::new(Some(f64::NAN), Some("b".to_owned()), None);
        assert_eq!(obs.identity(), Some(FrameIdentity::Id("b".to_owned())));

        let obs = FrameObservation::new(None, None, None);
        assert_eq!(obs.identity(), None);
    }

    #[test]
    fn test_fingerprint_hash() {
        let first = FrameObservation::new(None, None, Some("{\"w\":640}".to_owned()));
        let same = FrameObservation::new(None, None, Some("{\"w\":640}".to_owned()));
        let other = FrameObservation::new(None, None, Some("{\"w\":1280}".to_owned()));
        assert!(matches!(first.identity(), Some(FrameIdentity::Hash(_))));
        assert_eq!(first.identity(), same.identity());
        assert_ne!(first.identity(), other.identity());
    }
}
