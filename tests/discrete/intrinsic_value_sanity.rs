use approx::assert_abs_diff_eq;
use infogain::measures::error::MeasureError;
use infogain::measures::gain::intrinsic_value;

#[test]
fn intrinsic_value_two_even_partitions_is_one_bit() {
    let labels = vec!["yes", "no", "yes", "no"];
    let attribute = vec!["A", "A", "B", "B"];

    let iv = intrinsic_value(labels, attribute).unwrap();
    assert_abs_diff_eq!(iv, 1.0, epsilon = 1e-12);
}

#[test]
fn intrinsic_value_four_singleton_partitions_is_two_bits() {
    // -4 * (1/4 * log2(1/4)) = 2
    let labels = vec!["yes", "no", "yes", "no"];
    let attribute = vec!["A", "B", "C", "D"];

    let iv = intrinsic_value(labels, attribute).unwrap();
    assert_abs_diff_eq!(iv, 2.0, epsilon = 1e-12);
}

#[test]
fn intrinsic_value_constant_attribute_is_zero() {
    let labels = vec![1, 2, 3, 4];
    let attribute = vec!["only", "only", "only", "only"];

    let iv = intrinsic_value(labels, attribute).unwrap();
    assert_abs_diff_eq!(iv, 0.0, epsilon = 1e-12);
}

#[test]
fn intrinsic_value_skewed_partitions() {
    // Sizes 3 and 1: -(3/4 log2 3/4 + 1/4 log2 1/4)
    let labels = vec![0, 0, 1, 1];
    let attribute = vec!["A", "A", "A", "B"];

    let expected = -((3.0f64 / 4.0) * (3.0f64 / 4.0).log2() + (1.0f64 / 4.0) * 0.25f64.log2());
    let iv = intrinsic_value(labels, attribute).unwrap();
    assert_abs_diff_eq!(iv, expected, epsilon = 1e-12);
}

#[test]
fn intrinsic_value_ignores_labels() {
    // The measure depends on the attribute distribution alone.
    let attribute = vec![10, 10, 20, 30];

    let iv_a = intrinsic_value(vec!["x", "x", "x", "x"], attribute.clone()).unwrap();
    let iv_b = intrinsic_value(vec![1, 2, 3, 4], attribute).unwrap();
    assert_abs_diff_eq!(iv_a, iv_b, epsilon = 1e-12);
}

#[test]
fn intrinsic_value_empty_input_is_zero() {
    let labels: Vec<i32> = vec![];
    let attribute: Vec<i32> = vec![];

    let iv = intrinsic_value(labels, attribute).unwrap();
    assert_abs_diff_eq!(iv, 0.0, epsilon = 1e-12);
}

#[test]
fn intrinsic_value_size_mismatch_fails() {
    let err = intrinsic_value(vec![1, 2, 3], vec![1, 2]).unwrap_err();
    assert_eq!(
        err,
        MeasureError::SizeMismatch {
            examples: 3,
            attributes: 2
        }
    );
}
