//! Integration tests for the perfchart application crate.

use perfchart::run;
use perfchart_common::test_utils::{create_temp_dir, init_test_logging, write_results_csv};
use perfchart_config::Config;

#[test]
fn test_missing_input_aborts_without_output() {
    init_test_logging();
    let dir = create_temp_dir();
    let config = Config {
        input_path: dir.path().join("resultados.csv"),
        output_dir: dir.path().join("graficos"),
        ..Config::default()
    };

    let err = run(config).unwrap_err();

    assert!(err.is_missing_input());
    assert!(!dir.path().join("graficos").exists());
}

#[test]
fn test_unknown_algorithms_only_skip_every_chart() {
    init_test_logging();
    let dir = create_temp_dir();
    let input = write_results_csv(
        dir.path(),
        "algoritmo,tipo_vetor,tamanho_n,tempo_s\nBubbleSort,Random,100,0.01\n",
    );
    let config = Config {
        input_path: input,
        output_dir: dir.path().join("graficos"),
        ..Config::default()
    };

    let report = run(config).unwrap();

    assert!(report.written.is_empty());
    assert_eq!(report.skipped.len(), 2);
    assert!(dir.path().join("graficos").is_dir());
}

#[test]
fn test_malformed_table_is_a_generic_failure() {
    init_test_logging();
    let dir = create_temp_dir();
    let input = write_results_csv(
        dir.path(),
        "algoritmo,tipo_vetor,tamanho_n,tempo_s\nQuickSort,Random,many,0.01\n",
    );
    let config = Config {
        input_path: input,
        output_dir: dir.path().join("graficos"),
        ..Config::default()
    };

    let err = run(config).unwrap_err();
    assert!(!err.is_missing_input());
    assert!(err.to_string().contains("Data error"));
}
