use super::*;
use crate::helpers::models::create_toy_matrix;

#[test]
fn can_create_tour_with_closing_edge_length() {
    let matrix = create_toy_matrix();

    let tour = Tour::new(vec![0, 1, 3, 2, 0], &matrix);

    assert_eq!(tour.length(), 5.);
    assert_eq!(tour.start(), Some(0));
    assert!(tour.is_closed());
    assert!(tour.is_hamiltonian(4));
    assert_eq!(tour.nodes(), &[0, 1, 3, 2, 0]);
}

parameterized_test! {can_detect_hamiltonian_tour, (nodes, expected), {
    can_detect_hamiltonian_tour_impl(nodes, expected);
}}

can_detect_hamiltonian_tour! {
    case_01_valid: (vec![0, 1, 3, 2, 0], true),
    case_02_other_start: (vec![2, 0, 3, 1, 2], true),
    case_03_open: (vec![0, 1, 3, 2], false),
    case_04_repeated: (vec![0, 1, 1, 2, 0], false),
    case_05_missing: (vec![0, 1, 2, 0], false),
    case_06_single: (vec![0], false),
    case_07_empty: (vec![], false),
}

fn can_detect_hamiltonian_tour_impl(nodes: Vec<usize>, expected: bool) {
    let tour = Tour::new(nodes, &create_toy_matrix());

    assert_eq!(tour.is_hamiltonian(4), expected);
}

#[test]
fn can_handle_empty_tour() {
    let tour = Tour::new(vec![], &create_toy_matrix());

    assert_eq!(tour.length(), 0.);
    assert_eq!(tour.start(), None);
    assert!(!tour.is_closed());
}
