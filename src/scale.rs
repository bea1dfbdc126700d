//! Scales
//!
//! A scale is a set of intervals from the tonic plus a free-text
//! description. Identity is carried by the interval bitset alone; the
//! description is presentation. Serialization writes both fields
//! explicitly, because the description cannot be recovered from the
//! bitset for arbitrary custom scales.

use crate::interval::{Interval, ALL_INTERVALS};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A set of intervals from the root (tonic) with a description.
#[derive(Debug, Clone, Default)]
pub struct Scale {
    raw: u16,
    description: String,
}

impl Scale {
    /// A scale from its intervals and a description.
    pub fn from_intervals(intervals: &[Interval], description: impl Into<String>) -> Scale {
        let mut raw = 0;
        for interval in intervals {
            raw |= 1 << interval.semitones();
        }
        Scale {
            raw,
            description: description.into(),
        }
    }

    /// A scale from a raw interval bitset, with an empty description.
    pub fn from_raw(raw: u16) -> Scale {
        Scale {
            raw,
            description: String::new(),
        }
    }

    /// The major scale.
    pub fn major() -> Scale {
        Scale::from_intervals(
            &[
                Interval::PerfectUnison,
                Interval::MajorSecond,
                Interval::MajorThird,
                Interval::PerfectFourth,
                Interval::PerfectFifth,
                Interval::MajorSixth,
                Interval::MajorSeventh,
            ],
            "major",
        )
    }

    /// The natural minor scale.
    pub fn natural_minor() -> Scale {
        Scale::from_intervals(
            &[
                Interval::PerfectUnison,
                Interval::MajorSecond,
                Interval::MinorThird,
                Interval::PerfectFourth,
                Interval::PerfectFifth,
                Interval::AugmentedFifth,
                Interval::MinorSeventh,
            ],
            "natural minor",
        )
    }

    /// Raw interval bitset, one bit per semitone offset.
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Free-text description of the scale.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Does the scale include `interval`?
    pub fn contains(&self, interval: Interval) -> bool {
        self.raw & (1 << interval.semitones()) != 0
    }

    /// Member intervals in ascending order.
    pub fn intervals(&self) -> Vec<Interval> {
        ALL_INTERVALS
            .iter()
            .copied()
            .filter(|i| self.contains(*i))
            .collect()
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Two scales are the same scale when their interval bitsets match,
/// whatever their descriptions say.
impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Scale {}

impl Hash for Scale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Scale", 2)?;
        state.serialize_field("intervals", &self.raw)?;
        state.serialize_field("description", &self.description)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            intervals: u16,
            description: String,
        }

        let fields = Fields::deserialize(deserializer)?;
        Ok(Scale {
            raw: fields.intervals,
            description: fields.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(scale: &Scale) -> u64 {
        let mut hasher = DefaultHasher::new();
        scale.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn identity_ignores_the_description() {
        let a = Scale::from_intervals(&[Interval::MajorSecond, Interval::PerfectFifth], "one");
        let b = Scale::from_intervals(&[Interval::MajorSecond, Interval::PerfectFifth], "two");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a.description(), b.description());
    }

    #[test]
    fn intervals_round_trip_the_bitset() {
        let scale = Scale::major();
        assert_eq!(Scale::from_raw(scale.raw()), scale);
        assert_eq!(scale.intervals().len(), 7);
        assert!(scale.contains(Interval::MajorSeventh));
        assert!(!scale.contains(Interval::MinorSeventh));
    }

    #[test]
    fn minor_flattens_third_sixth_and_seventh() {
        let minor = Scale::natural_minor();
        assert!(minor.contains(Interval::MinorThird));
        assert!(minor.contains(Interval::AugmentedFifth));
        assert!(minor.contains(Interval::MinorSeventh));
        assert_ne!(minor, Scale::major());
    }
}
