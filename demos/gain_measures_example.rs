use infogain::measures::discrete::{InfoGain, IntrinsicValue};
use infogain::measures::gain::info_gain_ratio;
use infogain::measures::{GlobalValue, LocalValues};
use std::collections::HashMap;

fn main() {
    // The classic play-tennis toy data: one label per day, one attribute value per day
    let labels = vec![
        "no", "no", "yes", "yes", "yes", "no", "yes", "no", "yes", "yes", "yes", "yes", "yes",
        "no",
    ];
    let outlook = vec![
        "sunny", "sunny", "overcast", "rainy", "rainy", "rainy", "overcast", "sunny", "sunny",
        "rainy", "sunny", "overcast", "overcast", "rainy",
    ];

    // Instantiate the gain measures
    let gain = InfoGain::new(labels.clone(), outlook.clone()).unwrap();
    let intrinsic = IntrinsicValue::new(labels.clone(), outlook.clone()).unwrap();

    // Calculate the label entropy manually to verify
    let mut counts = HashMap::new();
    for &label in &labels {
        *counts.entry(label).or_insert(0usize) += 1;
    }

    let n = labels.len() as f64;
    let mut label_entropy = 0.0;
    for (_, &count) in counts.iter() {
        let p = count as f64 / n;
        label_entropy -= p * p.log2();
    }

    println!("Labels: {labels:?}");
    println!("Outlook: {outlook:?}");
    println!("Manual label entropy (bits): {label_entropy}");

    // Calculate the measures using the library
    let gain_value = gain.global_value();
    let gain_locals = gain.local_values();
    let iv_value = intrinsic.global_value();
    let ratio = info_gain_ratio(labels, outlook).unwrap();

    println!("Information Gain: {gain_value}");
    println!("Local Gain Values: {gain_locals:?}");
    println!("Intrinsic Value: {iv_value}");
    println!("Information Gain Ratio: {ratio}");
    println!("Check: ratio * intrinsic value = {}", ratio * iv_value);
}
