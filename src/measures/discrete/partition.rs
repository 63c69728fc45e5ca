use ndarray::Array1;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::measures::config::GainConfig;
use crate::measures::error::{MeasureError, Result};

/// A value that can key a partition.
///
/// Grouping needs equality and hashing; `is_missing` marks the designated
/// missing sentinel so the grouping pass can apply the configured policy
/// once, instead of special-casing equality everywhere.
pub trait AttributeValue: Eq + Hash + Clone {
    /// Whether this value is the missing sentinel. Defaults to never.
    fn is_missing(&self) -> bool {
        false
    }
}

macro_rules! plain_attribute_value {
    ($($t:ty),* $(,)?) => {
        $(impl AttributeValue for $t {})*
    };
}

plain_attribute_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String, &str,
);

impl<T: AttributeValue> AttributeValue for Option<T> {
    /// `None` is the missing sentinel; a wrapped sentinel stays missing.
    fn is_missing(&self) -> bool {
        match self {
            None => true,
            Some(v) => v.is_missing(),
        }
    }
}

/// Hashable wrapper for `f64` attribute values where NaN is the missing
/// sentinel.
///
/// Non-NaN values compare by bit pattern, with both zero signs collapsed
/// to one key so `0.0` and `-0.0` land in the same partition.
#[derive(Debug, Clone, Copy)]
pub struct FloatValue(pub f64);

impl FloatValue {
    fn key_bits(&self) -> u64 {
        if self.0 == 0.0 { 0 } else { self.0.to_bits() }
    }
}

impl PartialEq for FloatValue {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for FloatValue {}

impl Hash for FloatValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl AttributeValue for FloatValue {
    fn is_missing(&self) -> bool {
        self.0.is_nan()
    }
}

impl From<f64> for FloatValue {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

/// Grouping key for one partition. The missing-value policy is resolved
/// here, at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PartitionKey<A> {
    /// A present attribute value.
    Value(A),
    /// Shared key for all missing observations.
    Missing,
    /// Singleton key for the missing observation at a given position.
    MissingAt(usize),
}

/// One partition: the examples sharing a distinct attribute value.
#[derive(Debug, Clone)]
pub struct Partition<L> {
    /// Number of examples in the partition.
    pub size: usize,
    /// Counts per distinct label within the partition.
    pub label_counts: HashMap<L, usize>,
}

/// Shared dataset for the partition-based gain measures.
///
/// Built from the two parallel sequences in a single O(n) grouping pass.
/// Partitions are stored in first-occurrence order of their keys for
/// determinism.
#[derive(Debug, Clone)]
pub struct PartitionedDataset<L> {
    /// Original label data (1D)
    pub examples: Array1<L>,
    /// Total number of observations
    pub n: usize,
    /// Counts per distinct label over the full sequence
    pub label_counts: HashMap<L, usize>,
    /// Partitions induced by the attribute values
    pub partitions: Vec<Partition<L>>,
    /// Compact partition code per observation (index into `partitions`)
    pub membership: Array1<usize>,
}

impl<L: Eq + Hash + Clone> PartitionedDataset<L> {
    /// Group examples by attribute value under the given configuration.
    ///
    /// Fails with [`MeasureError::SizeMismatch`] before any grouping work
    /// when the two sequences differ in length.
    pub fn from_data<A: AttributeValue>(
        examples: Array1<L>,
        attribute: Array1<A>,
        config: &GainConfig,
    ) -> Result<Self> {
        if examples.len() != attribute.len() {
            return Err(MeasureError::SizeMismatch {
                examples: examples.len(),
                attributes: attribute.len(),
            });
        }

        let n = examples.len();
        let label_counts = count_labels(examples.iter());

        let mut codes: HashMap<PartitionKey<A>, usize> = HashMap::new();
        let mut partitions: Vec<Partition<L>> = Vec::new();
        let mut membership: Vec<usize> = Vec::with_capacity(n);
        for (i, (label, value)) in examples.iter().zip(attribute.iter()).enumerate() {
            let key = if !value.is_missing() {
                PartitionKey::Value(value.clone())
            } else if config.treat_missing_as_equal {
                PartitionKey::Missing
            } else {
                PartitionKey::MissingAt(i)
            };
            let code = *codes.entry(key).or_insert_with(|| {
                partitions.push(Partition {
                    size: 0,
                    label_counts: HashMap::new(),
                });
                partitions.len() - 1
            });
            let partition = &mut partitions[code];
            partition.size += 1;
            *partition.label_counts.entry(label.clone()).or_insert(0) += 1;
            membership.push(code);
        }

        Ok(Self {
            examples,
            n,
            label_counts,
            partitions,
            membership: Array1::from(membership),
        })
    }

    /// Number of distinct partitions.
    pub fn k(&self) -> usize {
        self.partitions.len()
    }

    /// Entropy of the label distribution over the full sequence, in bits.
    pub fn label_entropy(&self) -> f64 {
        entropy_from_counts(self.label_counts.values(), self.n)
    }

    /// Weighted average entropy of the labels within each partition, in bits.
    pub fn conditional_label_entropy(&self) -> f64 {
        let n_f = self.n as f64;
        let mut h = 0.0_f64;
        for partition in &self.partitions {
            let weight = partition.size as f64 / n_f;
            h += weight * entropy_from_counts(partition.label_counts.values(), partition.size);
        }
        h
    }

    /// Entropy of the attribute-value distribution itself, in bits.
    pub fn partition_entropy(&self) -> f64 {
        entropy_from_counts(self.partitions.iter().map(|p| &p.size), self.n)
    }

    /// Map each observation to the probability of its label over the full
    /// sequence.
    pub fn map_label_probs(&self) -> Array1<f64> {
        let n_f = self.n as f64;
        self.examples.map(|l| self.label_counts[l] as f64 / n_f)
    }

    /// Map each observation to the probability of its label within its own
    /// partition.
    pub fn map_conditional_label_probs(&self) -> Array1<f64> {
        Array1::from_iter(self.examples.iter().zip(self.membership.iter()).map(
            |(label, &code)| {
                let partition = &self.partitions[code];
                partition.label_counts[label] as f64 / partition.size as f64
            },
        ))
    }

    /// Map each observation to the relative size of its partition.
    pub fn map_partition_probs(&self) -> Array1<f64> {
        let n_f = self.n as f64;
        self.membership
            .map(|&code| self.partitions[code].size as f64 / n_f)
    }
}

/// Helper function to count the occurrences of each label.
pub fn count_labels<'a, L>(labels: impl IntoIterator<Item = &'a L>) -> HashMap<L, usize>
where
    L: Eq + Hash + Clone + 'a,
{
    let mut counts = HashMap::new();
    for label in labels {
        *counts.entry(label.clone()).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy in bits of the frequency distribution given by `counts`.
///
/// Zero counts contribute nothing; an empty distribution has entropy 0.
pub fn entropy_from_counts<'a>(counts: impl IntoIterator<Item = &'a usize>, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n_f = n as f64;
    // -sum(p * log2 p). Order of iteration doesn't matter for sum.
    let mut h = 0.0_f64;
    for &cnt in counts {
        let p = (cnt as f64) / n_f;
        h -= if p > 0.0 { p * p.log2() } else { 0.0 };
    }
    h
}
