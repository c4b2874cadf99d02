use super::*;

parameterized_test! {can_get_mean_iter, (values, expected), {
    can_get_mean_iter_impl(values, expected);
}}

can_get_mean_iter! {
    case01_empty: (vec![], 0.),
    case02_single: (vec![5.], 5.),
    case03_several: (vec![5., 6., 7.], 6.),
    case04_infinite: (vec![5., Float::INFINITY, 7.], Float::INFINITY),
    case05_all_infinite: (vec![Float::INFINITY, Float::INFINITY], Float::INFINITY),
}

fn can_get_mean_iter_impl(values: Vec<Float>, expected: Float) {
    let mean = get_mean_iter(values.into_iter());

    assert!(mean == expected || (mean - expected).abs() < 1E-9, "expected {expected}, got {mean}");
}

#[test]
fn can_get_mean_of_large_values_without_overflow() {
    let values = vec![1E308, 1.5E308, 1.7E308];

    let mean = get_mean_iter(values.into_iter());

    assert!(mean.is_finite());
    assert!(mean <= 1.7E308);
    assert!((mean / 1E308 - 1.4).abs() < 1E-9);
}
