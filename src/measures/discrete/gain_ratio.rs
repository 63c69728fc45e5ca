use ndarray::Array1;
use std::hash::Hash;

use crate::measures::config::GainConfig;
use crate::measures::discrete::partition::{AttributeValue, PartitionedDataset};
use crate::measures::error::{MeasureError, Result};
use crate::measures::traits::OptionalLocalValues;

/// Information gain ratio: information gain normalised by intrinsic value.
///
/// Both terms share one grouping pass over the data, so building this
/// measure costs the same as building either term alone.
///
/// The ratio is undefined when the intrinsic value is zero, which happens
/// exactly when the attribute has at most one distinct value. That case
/// surfaces as [`MeasureError::ZeroIntrinsicValue`] rather than a sentinel
/// float.
///
/// A ratio of means does not decompose into per-observation values, so
/// [`OptionalLocalValues`] reports no local support.
pub struct InfoGainRatio<L> {
    dataset: PartitionedDataset<L>,
}

impl<L: Eq + Hash + Clone> InfoGainRatio<L> {
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

    /// Compute the gain ratio.
    ///
    /// # Errors
    ///
    /// [`MeasureError::ZeroIntrinsicValue`] when the attribute has at most
    /// one distinct value (this includes empty input).
    pub fn global_value(&self) -> Result<f64> {
        let intrinsic = self.dataset.partition_entropy();
        if intrinsic == 0.0 {
            return Err(MeasureError::ZeroIntrinsicValue);
        }
        let gain = self.dataset.label_entropy() - self.dataset.conditional_label_entropy();
        Ok(gain / intrinsic)
    }
}

impl<L: Eq + Hash + Clone> OptionalLocalValues for InfoGainRatio<L> {
    fn supports_local(&self) -> bool {
        false
    }
    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Err("Gain ratio does not decompose into per-observation local values.")
    }
}
