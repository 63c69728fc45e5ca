// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete measures module: groups the partition-based gain measures
// and exposes them to the parent measures module.

pub mod partition;

pub mod gain_ratio;
pub mod info_gain;
pub mod intrinsic_value;

// Unified re-exports so tests and users can import
// infogain::measures::discrete::* ergonomically.
pub use gain_ratio::InfoGainRatio;
pub use info_gain::InfoGain;
pub use intrinsic_value::IntrinsicValue;
pub use partition::{AttributeValue, FloatValue, Partition, PartitionedDataset};
