use super::*;
use crate::helpers::models::{EPS, create_toy_rows};

#[test]
fn can_create_distance_matrix_forcing_diagonal() {
    let rows = vec![vec![0., 1., 2.], vec![1., 5., 3.], vec![2., 3., -0.]];

    let matrix = DistanceMatrix::new(rows.as_slice()).unwrap();

    assert_eq!(matrix.size(), 3);
    (0..3).for_each(|idx| assert_eq!(matrix.distance(idx, idx), DistanceMatrix::DIAGONAL));
    assert_eq!(matrix.distance(0, 2), 2.);
    assert_eq!(matrix.distance(2, 1), 3.);
    assert_eq!(matrix.row(1), &[1., DistanceMatrix::DIAGONAL, 3.]);
}

#[test]
fn can_keep_caller_rows_untouched() {
    let rows = vec![vec![0., 1.], vec![1., 0.]];

    let _ = DistanceMatrix::new(rows.as_slice()).unwrap();

    assert_eq!(rows, vec![vec![0., 1.], vec![1., 0.]]);
}

#[test]
fn can_create_same_matrix_regardless_of_diagonal() {
    let mut other = create_toy_rows();
    other[0][0] = 0.;
    other[1][1] = 42.;
    other[2][2] = Float::NAN;

    let original = DistanceMatrix::new(create_toy_rows().as_slice()).unwrap();
    let other = DistanceMatrix::new(other.as_slice()).unwrap();

    assert_eq!(original, other);
}

#[test]
fn can_reject_non_square_matrix() {
    let rows = vec![vec![0., 1., 2.], vec![1., 0.], vec![2., 3., 0.]];

    let result = DistanceMatrix::new(rows.as_slice());

    assert_eq!(result, Err(InvalidParameterError::NonSquareMatrix { row: 1, expected: 3, actual: 2 }));
}

#[test]
fn can_reject_rectangular_matrix() {
    let rows = vec![vec![0., 1., 2.], vec![1., 0., 3.]];

    assert!(matches!(DistanceMatrix::new(rows.as_slice()), Err(InvalidParameterError::NonSquareMatrix { .. })));
}

#[test]
fn can_reject_too_small_matrix() {
    assert_eq!(DistanceMatrix::new(&[]), Err(InvalidParameterError::TooFewLocations(0)));
    assert_eq!(DistanceMatrix::new(&[vec![0.]]), Err(InvalidParameterError::TooFewLocations(1)));
}

#[test]
fn can_reject_negative_or_nan_distances() {
    let negative = vec![vec![0., -1.], vec![1., 0.]];
    let nan = vec![vec![0., 1.], vec![Float::NAN, 0.]];

    assert!(matches!(
        DistanceMatrix::new(negative.as_slice()),
        Err(InvalidParameterError::InvalidDistance { from: 0, to: 1, .. })
    ));
    assert!(matches!(
        DistanceMatrix::new(nan.as_slice()),
        Err(InvalidParameterError::InvalidDistance { from: 1, to: 0, .. })
    ));
}

#[test]
fn can_accept_infinite_distances() {
    let rows = vec![vec![0., Float::INFINITY], vec![1., 0.]];

    let matrix = DistanceMatrix::new(rows.as_slice()).unwrap();

    assert_eq!(matrix.distance(0, 1), Float::INFINITY);
}

#[test]
fn can_create_from_flatten_values() {
    let matrix = DistanceMatrix::from_flatten(vec![0., 1., 2., 0.]).unwrap();

    assert_eq!(matrix.values(), &[EPS, 1., 2., EPS]);
    assert_eq!(matrix.row(1), &[2., EPS]);
    assert!(DistanceMatrix::from_flatten(vec![0., 1., 2.]).is_err());
}

#[test]
fn can_calculate_closed_tour_length() {
    let matrix = DistanceMatrix::new(create_toy_rows().as_slice()).unwrap();

    assert_eq!(matrix.tour_length(&[0, 1, 3, 2, 0]), 5.);
    assert_eq!(matrix.tour_length(&[0, 2, 1, 3, 0]), 7.);
    assert_eq!(matrix.tour_length(&[2]), 0.);
}

#[test]
fn can_create_pheromone_matrix_with_initial_level() {
    let pheromone = PheromoneMatrix::new(3);

    assert_eq!(pheromone.size(), 3);
    assert_eq!(pheromone.values().len(), 9);
    assert!(pheromone.values().iter().all(|&value| value == PheromoneMatrix::INITIAL));
    assert!(pheromone.is_valid());
}

#[test]
fn can_scale_and_deposit_pheromone() {
    let mut pheromone = PheromoneMatrix::with_value(2, 1.);

    pheromone.scale(0.5);
    pheromone.deposit(0, 1, 2.);

    assert_eq!(pheromone.values(), &[0.5, 2.5, 2.5, 0.5]);
    assert_eq!(pheromone.row(1), &[2.5, 0.5]);
}

#[test]
fn can_detect_invalid_pheromone() {
    let mut pheromone = PheromoneMatrix::with_value(2, 1.);
    pheromone.deposit(0, 1, Float::INFINITY);

    assert!(!pheromone.is_valid());
    assert!(!PheromoneMatrix::with_value(2, -1.).is_valid());
}

#[test]
fn can_select_row_entries_by_indices() {
    let row = [10., 20., 30., 40.];

    assert_eq!(select(&row, &[3, 0, 2]), vec![40., 10., 30.]);
    assert!(select(&row, &[]).is_empty());
}
