use super::*;
use crate::helpers::models::create_toy_matrix;
use crate::models::DistanceMatrix;

fn assert_close(actual: Float, expected: Float) {
    assert!((actual - expected).abs() < 1E-9, "expected {expected}, got {actual}");
}

#[test]
fn can_evaporate_all_entries() {
    let mut pheromone = PheromoneMatrix::with_value(3, 1.);

    evaporate(&mut pheromone, 0.3);

    pheromone.values().iter().for_each(|&value| assert_close(value, 0.7));
}

#[test]
fn can_deposit_on_both_directions_of_tour_edges() {
    let distances = create_toy_matrix();
    let tour = Tour::new(vec![0, 1, 3, 2, 0], &distances);
    let mut pheromone = PheromoneMatrix::with_value(4, 0.);

    deposit(&mut pheromone, [&tour], 10.);

    for (from, to) in [(0, 1), (1, 3), (3, 2), (2, 0)] {
        assert_close(pheromone.get(from, to), 2.);
        assert_close(pheromone.get(to, from), 2.);
    }
    assert_eq!(pheromone.get(0, 3), 0.);
    assert_eq!(pheromone.get(1, 2), 0.);
    assert_eq!(pheromone.get(0, 0), 0.);
}

#[test]
fn can_evaporate_before_deposit() {
    let distances = create_toy_matrix();
    let tours = vec![Tour::new(vec![0, 1, 3, 2, 0], &distances), Tour::new(vec![0, 1, 2, 3, 0], &distances)];
    let mut pheromone = PheromoneMatrix::with_value(4, 1.);

    update_pheromone(&mut pheromone, tours.iter(), 0.5, 30.);

    // edge (0, 1) is shared by both tours: 1 * 0.5 + 30 / 5 + 30 / 6
    assert_close(pheromone.get(0, 1), 11.5);
    assert_close(pheromone.get(1, 0), 11.5);
    // edge (1, 3) is used by the first tour only
    assert_close(pheromone.get(3, 1), 6.5);
    // edge (1, 2) is used by the second tour only
    assert_close(pheromone.get(1, 2), 5.5);
    // diagonal is never traversed
    assert_close(pheromone.get(0, 0), 0.5);
    assert!(pheromone.is_valid());
}

#[test]
fn can_skip_deposit_of_zero_length_tour() {
    let distances = DistanceMatrix::new(&[vec![0., 0.], vec![0., 0.]]).unwrap();
    let tour = Tour::new(vec![0, 1, 0], &distances);
    let mut pheromone = PheromoneMatrix::new(2);

    update_pheromone(&mut pheromone, [&tour], 0.5, 1.);

    assert!(pheromone.is_valid());
    assert_close(pheromone.get(0, 1), 0.05);
}

#[test]
fn can_saturate_deposit_of_tiny_length_tour() {
    let distances = DistanceMatrix::new(&[vec![0., 5E-307], vec![5E-307, 0.]]).unwrap();
    let tour = Tour::new(vec![0, 1, 0], &distances);
    let mut pheromone = PheromoneMatrix::new(2);

    update_pheromone(&mut pheromone, [&tour], 0.3, 100.);

    assert!(pheromone.is_valid());
    assert_eq!(pheromone.get(0, 1), Float::MAX);
    assert_eq!(pheromone.get(1, 0), Float::MAX);
    assert_close(pheromone.get(0, 0), 0.07);
}
