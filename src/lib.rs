// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infogain
//!
//! Rust library for the information-theoretic split measures used in
//! decision-tree learning: information gain, intrinsic value, and
//! information gain ratio.
//!
//! ## Quick Start
//!
//! ```rust
//! use infogain::measures::gain::{info_gain, info_gain_ratio, intrinsic_value};
//!
//! let labels = vec!["yes", "no", "yes", "no"];
//! let outlook = vec!["sunny", "sunny", "rainy", "rainy"];
//!
//! let gain = info_gain(labels.clone(), outlook.clone()).unwrap();
//! let iv = intrinsic_value(labels.clone(), outlook.clone()).unwrap();
//! let ratio = info_gain_ratio(labels, outlook).unwrap();
//!
//! assert!(gain >= 0.0);
//! assert!(iv >= 0.0);
//! assert!((ratio - gain / iv).abs() < 1e-12);
//! ```
//!
//! ## Measures
//!
//! | Measure | Global | Local values |
//! |---------|--------|--------------|
//! | Information Gain | ✅ | ✅ |
//! | Intrinsic Value | ✅ | ✅ |
//! | Information Gain Ratio | ✅ | ❌ (not decomposable) |
//!
//! All measures consume two positionally paired sequences of equal length:
//! example labels and attribute values. Labels and values are opaque
//! hashable data; a mismatch in length fails with
//! [`MeasureError::SizeMismatch`](measures::error::MeasureError::SizeMismatch)
//! before any computation.
//!
//! ## Architecture
//!
//! The library follows a three-layer architecture:
//!
//! 1. **Public API Layer**: facade functions in [`measures::gain`]
//! 2. **Measure Layer**: one estimator type per measure
//!    ([`InfoGain`](measures::discrete::InfoGain),
//!    [`IntrinsicValue`](measures::discrete::IntrinsicValue),
//!    [`InfoGainRatio`](measures::discrete::InfoGainRatio))
//! 3. **Core Infrastructure**: a shared grouping pass that partitions the
//!    examples by attribute value in a single O(n) sweep
//!
//! ## Logarithm Base
//!
//! All entropies are computed in bits (base-2 logarithm), consistently for
//! the gain term and the intrinsic-value term. With a consistent base the
//! gain ratio is scale-free; the concrete bit values of gain and intrinsic
//! value follow the usual decision-tree literature.
//!
//! ## Missing Values
//!
//! The attribute sequence may contain missing observations (`None` for
//! `Option` values, NaN for [`FloatValue`](measures::discrete::FloatValue)).
//! By default all missing observations are grouped into one shared
//! partition; set
//! [`GainConfig::treat_missing_as_equal`](measures::config::GainConfig) to
//! `false` to give each missing observation its own singleton partition.

pub mod measures;
