use super::*;
use std::fs::File;
use std::sync::Arc;

fn read_config_from_str(config: &str) -> Config {
    read_config(BufReader::new(config.as_bytes())).expect("cannot read config")
}

#[test]
fn can_read_full_config() {
    let file = File::open("tests/data/config.full.json").expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    let optimizer = config.optimizer.clone().expect("no optimizer config");
    assert_eq!(optimizer.ant_count, Some(5));
    assert_eq!(optimizer.seed, Some(42));
    assert_eq!(optimizer.parallel, Some(false));
    assert_eq!(get_max_iterations(&config), Some(20));
    assert_eq!(get_log_every(&config), 5);

    let logging = config.telemetry.expect("no telemetry config").logging.expect("no logging config");
    assert!(logging.enabled);
}

#[test]
fn can_create_params_from_full_config() {
    let file = File::open("tests/data/config.full.json").expect("cannot read config from file");
    let config = read_config(BufReader::new(file)).unwrap();

    let params = create_params_from_config(&config);

    assert_eq!(params, AcoParams::default().with_ant_count(5).with_seed(42));
}

#[test]
fn can_use_defaults_for_missing_values() {
    let config = read_config_from_str(r#"{ "optimizer": { "rho": 0.5 } }"#);

    let params = create_params_from_config(&config);

    assert_eq!(params, AcoParams::default().with_rho(0.5));
    assert_eq!(get_max_iterations(&config), None);
    assert_eq!(get_log_every(&config), DEFAULT_LOG_EVERY);
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config_from_str("{}");

    assert_eq!(create_params_from_config(&config), AcoParams::default());
    assert!(matches!(create_telemetry_mode(&config, Arc::new(|_: &str| {})), TelemetryMode::None));
}

#[test]
fn can_create_telemetry_mode() {
    let enabled = read_config_from_str(r#"{ "telemetry": { "logging": { "enabled": true, "logEvery": 3 } } }"#);
    let disabled = read_config_from_str(r#"{ "telemetry": { "logging": { "enabled": false } } }"#);

    assert!(matches!(
        create_telemetry_mode(&enabled, Arc::new(|_: &str| {})),
        TelemetryMode::OnlyLogging { log_every: 3, .. }
    ));
    assert!(matches!(create_telemetry_mode(&disabled, Arc::new(|_: &str| {})), TelemetryMode::None));
}

#[test]
fn can_report_invalid_config() {
    let result = read_config(BufReader::new(r#"{ "optimizer": { "antCount": "many" } }"#.as_bytes()));

    let err = result.err().expect("should return error");
    assert!(err.to_string().starts_with("cannot deserialize config"));
}
