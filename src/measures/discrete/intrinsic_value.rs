use ndarray::Array1;
use std::hash::Hash;

use crate::measures::config::GainConfig;
use crate::measures::discrete::partition::{AttributeValue, PartitionedDataset};
use crate::measures::error::Result;
use crate::measures::traits::{GlobalValue, LocalValues, OptionalLocalValues};

/// Intrinsic value of an attribute: the entropy (base-2 log) of the
/// attribute's own value distribution, independent of the labels.
///
/// Used to normalise information gain against attributes with many distinct
/// values. Zero when the attribute has a single distinct value. Local
/// values are supported, where each observation contributes the surprisal
/// -log2 p of its partition's relative size.
pub struct IntrinsicValue<L> {
    dataset: PartitionedDataset<L>,
}

impl<L: Eq + Hash + Clone> IntrinsicValue<L> {
    /// Build the measure with the default grouping configuration.
    pub fn new<A: AttributeValue>(
        examples: impl Into<Array1<L>>,
        attribute: impl Into<Array1<A>>,
    ) -> Result<Self> {
        Self::with_config(examples, attribute, &GainConfig::default())
    }

    /// Build the measure with an explicit grouping configuration.
    pub fn with_config<A: AttributeValue>(
        examples: impl Into<Array1<L>>,
        attribute: impl Into<Array1<A>>,
        config: &GainConfig,
    ) -> Result<Self> {
        let dataset = PartitionedDataset::from_data(examples.into(), attribute.into(), config)?;
        Ok(Self { dataset })
    }

    /// Number of distinct partitions backing the measure.
    pub fn partition_count(&self) -> usize {
        self.dataset.k()
    }
}

impl<L: Eq + Hash + Clone> GlobalValue for IntrinsicValue<L> {
    fn global_value(&self) -> f64 {
        self.dataset.partition_entropy()
    }
}

impl<L: Eq + Hash + Clone> LocalValues for IntrinsicValue<L> {
    /// Calculate local intrinsic values for each observation in the dataset.
    fn local_values(&self) -> Array1<f64> {
        // Map each observation to its partition probability: local = -log2 p
        let p_local = self.dataset.map_partition_probs();
        -p_local.mapv(f64::log2)
    }
}

impl<L: Eq + Hash + Clone> OptionalLocalValues for IntrinsicValue<L> {
    fn supports_local(&self) -> bool {
        true
    }
    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
