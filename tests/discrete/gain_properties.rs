//! Randomized property checks for the gain measures, run on seeded data.

use approx::assert_abs_diff_eq;
use infogain::measures::discrete::{InfoGain, IntrinsicValue};
use infogain::measures::gain::{info_gain, info_gain_ratio, intrinsic_value};
use infogain::measures::{GlobalValue, LocalValues};

use crate::test_helpers::{gaussian_binned, random_attribute, random_labels};

#[test]
fn gain_is_nonnegative_on_random_data() {
    let size = 200;
    let states = [2, 3, 4, 10, 15];

    for (i, &num_states) in states.iter().enumerate() {
        let labels = random_labels(size, 3, 42 + i as u64);
        let attribute = random_attribute(size, num_states, 1042 + i as u64);

        let gain = info_gain(labels, attribute).unwrap();
        assert!(
            gain >= -1e-12,
            "gain must be nonnegative, got {gain} for {num_states} states"
        );
    }
}

#[test]
fn gain_never_exceeds_label_entropy() {
    let size = 150;
    for seed in 0..5u64 {
        let labels = random_labels(size, 4, seed);
        let attribute = random_attribute(size, 6, 500 + seed);

        // A unique index per observation predicts the labels perfectly,
        // so its gain recovers the full label entropy.
        let indices: Vec<usize> = (0..size).collect();
        let label_entropy = info_gain(labels.clone(), indices).unwrap();

        let gain = info_gain(labels, attribute).unwrap();
        assert!(gain <= label_entropy + 1e-12);
    }
}

#[test]
fn ratio_is_consistent_with_its_terms_on_random_data() {
    let size = 100;
    for seed in 0..10u64 {
        let labels = random_labels(size, 3, seed);
        let attribute = random_attribute(size, 5, 2000 + seed);

        let gain = info_gain(labels.clone(), attribute.clone()).unwrap();
        let iv = intrinsic_value(labels.clone(), attribute.clone()).unwrap();
        // 100 draws from 5 states always produce at least two partitions.
        assert!(iv > 0.0);

        let ratio = info_gain_ratio(labels, attribute).unwrap();
        assert_abs_diff_eq!(ratio, gain / iv, epsilon = 1e-12);
    }
}

#[test]
fn locals_average_to_globals_on_random_data() {
    let size = 120;
    for seed in 0..5u64 {
        let labels = random_labels(size, 4, 77 + seed);
        let attribute = random_attribute(size, 8, 7000 + seed);

        let gain_est = InfoGain::new(labels.clone(), attribute.clone()).unwrap();
        assert_abs_diff_eq!(
            gain_est.global_from_local(),
            gain_est.global_value(),
            epsilon = 1e-10
        );

        let iv_est = IntrinsicValue::new(labels, attribute).unwrap();
        assert_abs_diff_eq!(
            iv_est.global_from_local(),
            iv_est.global_value(),
            epsilon = 1e-10
        );
    }
}

#[test]
fn gain_properties_hold_on_gaussian_binned_data() {
    // Binned Gaussian draws give skewed partition sizes, unlike the
    // uniform generators above.
    let size = 300;
    let labels = random_labels(size, 2, 123);
    let attribute = gaussian_binned(size, 0.0, 2.0, 321);

    let gain = info_gain(labels.clone(), attribute.clone()).unwrap();
    let iv = intrinsic_value(labels.clone(), attribute.clone()).unwrap();
    assert!(gain >= -1e-12);
    assert!(iv > 0.0);

    let ratio = info_gain_ratio(labels, attribute).unwrap();
    assert_abs_diff_eq!(ratio, gain / iv, epsilon = 1e-12);
}
