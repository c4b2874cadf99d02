use super::*;

#[test]
fn can_create_generic_error() {
    let from_str = GenericError::from("first");
    let from_string = GenericError::from("second".to_string());
    let from_io = GenericError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "third"));

    assert_eq!(from_str.to_string(), "first");
    assert_eq!(from_string.to_string(), "second");
    assert_eq!(from_io.to_string(), "third");
}

#[test]
fn can_convert_parameter_error_into_generic() {
    let error: GenericError = InvalidParameterError::EvaporationRate(1.).into();

    assert_eq!(error.to_string(), "evaporation rate should be in (0, 1) range, got 1");
}

parameterized_test! {can_format_parameter_error, (error, expected), {
    assert_eq!(error.to_string(), expected);
}}

can_format_parameter_error! {
    case_01: (InvalidParameterError::TooFewLocations(1), "distance matrix should have at least 2 locations, got 1"),
    case_02: (
        InvalidParameterError::NonSquareMatrix { row: 2, expected: 3, actual: 4 },
        "non-square distance matrix: row 2 has 4 items, expected 3"
    ),
    case_03: (
        InvalidParameterError::InvalidDistance { from: 0, to: 1, value: -1. },
        "invalid distance from 0 to 1: '-1', expected non-negative value"
    ),
    case_04: (InvalidParameterError::AntCount(0), "ant count should be at least 1, got 0"),
    case_05: (
        InvalidParameterError::Exponent { name: "beta", value: -2. },
        "beta should be a non-negative finite number, got -2"
    ),
    case_06: (InvalidParameterError::DepositConstant(0.), "deposit constant should be a positive finite number, got 0"),
}
