use fixed_map::{Key, Map as FixedMap};
use serde::{Deserialize, Serialize};

/// The role a fuzzy set plays inside its variable.
///
/// Every variable partitions its domain into exactly three sets; fan speed
/// calls `Low` and `High` "slow" and "fast".
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Key, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Low,
    Medium,
    High,
}

impl Term {
    pub const ALL: [Term; 3] = [Self::Low, Self::Medium, Self::High];
}

/// One value per term, e.g. a line series per fuzzy set.
pub type PerTerm<V> = FixedMap<Term, V>;
