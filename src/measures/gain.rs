use ndarray::Array1;
use std::hash::Hash;

use crate::measures::config::GainConfig;
use crate::measures::discrete::partition::AttributeValue;
use crate::measures::discrete::{InfoGain, InfoGainRatio, IntrinsicValue};
use crate::measures::error::Result;
use crate::measures::traits::GlobalValue;

/// Computes the information gain of an attribute for the given examples,
/// in bits, under the default grouping configuration.
///
/// # Arguments
///
/// * `examples` - Class labels, positionally paired with `attribute`,
///   i.e. `attribute[i] <--> examples[i]`
/// * `attribute` - Attribute values, positionally paired with `examples`
///
/// # Returns
///
/// Information gain by knowing the given attribute: the entropy of the
/// label distribution minus the weighted average entropy of the labels
/// partitioned by attribute value.
///
/// # Errors
///
/// [`MeasureError::SizeMismatch`](crate::measures::error::MeasureError::SizeMismatch)
/// when the two sequences differ in length.
pub fn info_gain<L, A>(
    examples: impl Into<Array1<L>>,
    attribute: impl Into<Array1<A>>,
) -> Result<f64>
where
    L: Eq + Hash + Clone,
    A: AttributeValue,
{
    Ok(InfoGain::new(examples, attribute)?.global_value())
}

/// Computes the information gain with an explicit grouping configuration.
pub fn info_gain_with_config<L, A>(
    examples: impl Into<Array1<L>>,
    attribute: impl Into<Array1<A>>,
    config: &GainConfig,
) -> Result<f64>
where
    L: Eq + Hash + Clone,
    A: AttributeValue,
{
    Ok(InfoGain::with_config(examples, attribute, config)?.global_value())
}

/// Computes the intrinsic value of an attribute for the given examples,
/// in bits, under the default grouping configuration.
///
/// # Arguments
///
/// * `examples` - Class labels, positionally paired with `attribute`
/// * `attribute` - Attribute values, positionally paired with `examples`
///
/// # Returns
///
/// The entropy of the attribute's own value distribution, independent of
/// the labels.
///
/// # Errors
///
/// [`MeasureError::SizeMismatch`](crate::measures::error::MeasureError::SizeMismatch)
/// when the two sequences differ in length.
pub fn intrinsic_value<L, A>(
    examples: impl Into<Array1<L>>,
    attribute: impl Into<Array1<A>>,
) -> Result<f64>
where
    L: Eq + Hash + Clone,
    A: AttributeValue,
{
    Ok(IntrinsicValue::new(examples, attribute)?.global_value())
}

/// Computes the intrinsic value with an explicit grouping configuration.
pub fn intrinsic_value_with_config<L, A>(
    examples: impl Into<Array1<L>>,
    attribute: impl Into<Array1<A>>,
    config: &GainConfig,
) -> Result<f64>
where
    L: Eq + Hash + Clone,
    A: AttributeValue,
{
    Ok(IntrinsicValue::with_config(examples, attribute, config)?.global_value())
}

/// Computes the information gain ratio of an attribute for the given
/// examples, under the default grouping configuration.
///
/// # Arguments
///
/// * `examples` - Class labels, positionally paired with `attribute`
/// * `attribute` - Attribute values, positionally paired with `examples`
///
/// # Returns
///
/// Information gain normalised by intrinsic value. Both terms are computed
/// over the same partitioning, so the ratio is scale-free in the logarithm
/// base.
///
/// # Errors
///
/// [`MeasureError::SizeMismatch`](crate::measures::error::MeasureError::SizeMismatch)
/// when the two sequences differ in length, and
/// [`MeasureError::ZeroIntrinsicValue`](crate::measures::error::MeasureError::ZeroIntrinsicValue)
/// when the attribute has at most one distinct value.
pub fn info_gain_ratio<L, A>(
    examples: impl Into<Array1<L>>,
    attribute: impl Into<Array1<A>>,
) -> Result<f64>
where
    L: Eq + Hash + Clone,
    A: AttributeValue,
{
    InfoGainRatio::new(examples, attribute)?.global_value()
}

/// Computes the information gain ratio with an explicit grouping
/// configuration.
pub fn info_gain_ratio_with_config<L, A>(
    examples: impl Into<Array1<L>>,
    attribute: impl Into<Array1<A>>,
    config: &GainConfig,
) -> Result<f64>
where
    L: Eq + Hash + Clone,
    A: AttributeValue,
{
    InfoGainRatio::with_config(examples, attribute, config)?.global_value()
}
