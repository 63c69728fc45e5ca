use ndarray::Array1;
use std::hash::Hash;

use crate::measures::config::GainConfig;
use crate::measures::discrete::partition::{AttributeValue, PartitionedDataset};
use crate::measures::error::Result;
use crate::measures::traits::{GlobalValue, LocalValues, OptionalLocalValues};

/// Information gain of an attribute for a sequence of labelled examples
/// (base-2 log).
///
/// Computes H(labels) minus the weighted average entropy of the labels
/// within each partition induced by the attribute. Partitioning is
/// exhaustive and non-overlapping, so the global value is nonnegative:
/// 0 when the attribute is constant, H(labels) when the attribute uniquely
/// determines the label.
///
/// Local values are supported via LocalValues, where each observation
/// contributes log2(p(label | partition) / p(label)); their mean recovers
/// the global gain.
pub struct InfoGain<L> {
    dataset: PartitionedDataset<L>,
}

impl<L: Eq + Hash + Clone> InfoGain<L> {
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
}

impl<L: Eq + Hash + Clone> GlobalValue for InfoGain<L> {
    /// Calculate the global information gain for the data set.
    /// Separate implementation, not inferred from local_values.
    fn global_value(&self) -> f64 {
        self.dataset.label_entropy() - self.dataset.conditional_label_entropy()
    }
}

impl<L: Eq + Hash + Clone> LocalValues for InfoGain<L> {
    /// Calculate local gain values for each observation in the dataset.
    fn local_values(&self) -> Array1<f64> {
        // local = log2(p(label | partition) / p(label))
        let marginal = self.dataset.map_label_probs();
        let conditional = self.dataset.map_conditional_label_probs();
        (conditional / marginal).mapv(f64::log2)
    }
}

impl<L: Eq + Hash + Clone> OptionalLocalValues for InfoGain<L> {
    fn supports_local(&self) -> bool {
        true
    }
    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
