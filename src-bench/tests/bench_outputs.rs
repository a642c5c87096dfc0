use swarmbench::{
    ConvergenceSeries, TuneConfig, load_tuned, read_series, read_tuned, resolve_function, run_benchmark,
    tune_functions, tuned_path, write_convergence_plot, write_tuned,
};
use swarmbench_optim::{Algorithm, BigBangSchedule, RunConfig, RunConfigBuilder};

fn small_config() -> RunConfig {
    RunConfigBuilder::new()
        .particles(8)
        .dimension(2)
        .iterations(30)
        .granularity(10)
        .trials(3)
        .seed(11)
        .build()
}

#[test]
fn test_run_writes_csv_series() {
    let data = tempfile::tempdir().unwrap();
    let functions = vec![resolve_function("rastrigin").unwrap()];
    let summaries =
        run_benchmark(&functions, &Algorithm::ALL, &small_config(), data.path(), false, true).unwrap();
    assert_eq!(summaries.len(), 3);

    let labels: Vec<&str> = summaries.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["pso", "de", "bbbc_geometric"]);

    for summary in &summaries {
        let files = summary.files.as_ref().unwrap();
        let (iterations, raw) = read_series(&files.raw).unwrap();
        assert_eq!(iterations, vec![0, 10, 20, 30]);
        assert_eq!(raw.len(), 3);
        // best values never get worse within a trial
        for row in &raw {
            assert!(row.windows(2).all(|w| w[1] <= w[0]));
        }

        let (_, avg) = read_series(&files.avg).unwrap();
        let (_, var) = read_series(&files.var).unwrap();
        assert_eq!(avg.len(), 1);
        assert_eq!(var.len(), 1);
        assert!(var[0].iter().all(|&v| v >= 0.0));
        let last = avg[0].len() - 1;
        assert!((avg[0][last] - summary.final_mean).abs() <= 1e-9 * summary.final_mean.abs().max(1.0));
    }

    assert!(data.path().join("results").join("rastrigin").join("de_avg.csv").is_file());
    assert!(data.path().join("plots").join("rastrigin_convergence.html").is_file());
}

#[test]
fn test_no_record_writes_nothing() {
    let data = tempfile::tempdir().unwrap();
    let mut config = small_config();
    config.record = false;
    let functions = vec![resolve_function("1").unwrap()];
    let summaries = run_benchmark(&functions, &[Algorithm::Pso], &config, data.path(), false, false).unwrap();
    assert!(summaries[0].files.is_none());
    assert!(!data.path().join("results").join("elliptic").exists());
}

#[test]
fn test_quadratic_schedule_label() {
    let data = tempfile::tempdir().unwrap();
    let mut config = small_config();
    config.bbbc.schedule = BigBangSchedule::Quadratic;
    let functions = vec![resolve_function("step").unwrap()];
    let summaries = run_benchmark(&functions, &[Algorithm::BbBc], &config, data.path(), false, false).unwrap();
    assert_eq!(summaries[0].label, "bbbc_quadratic");
    assert!(data.path().join("results/step/bbbc_quadratic_raw.csv").is_file());
}

#[test]
fn test_tuned_file_roundtrip() {
    let data = tempfile::tempdir().unwrap();
    let path = tuned_path(data.path(), Algorithm::Pso, "ackley");
    write_tuned(&path, &[0.6, 1.2, 1.3]).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "0.6,1.2,1.3");
    assert_eq!(read_tuned(&path).unwrap(), vec![0.6, 1.2, 1.3]);
    assert_eq!(load_tuned(data.path(), Algorithm::Pso, "ackley").unwrap(), Some(vec![0.6, 1.2, 1.3]));
    assert_eq!(load_tuned(data.path(), Algorithm::De, "ackley").unwrap(), None);
}

#[test]
fn test_tune_then_run_with_tuned_parameters() {
    let data = tempfile::tempdir().unwrap();
    let config = RunConfigBuilder::new().particles(6).dimension(2).iterations(10).granularity(5).trials(2).seed(3).build();
    let functions = vec![resolve_function("quartic").unwrap()];
    let tc = TuneConfig { steps: 1, simulations: 1 };

    let outcomes = tune_functions(&functions, Algorithm::BbBc, &config, &tc, data.path()).unwrap();
    assert_eq!(outcomes.len(), 1);
    let path = tuned_path(&data.path().join("params"), Algorithm::BbBc, "quartic");
    assert_eq!(path, data.path().join("params/bbbc/quartic_bbbc.tuned"));
    assert_eq!(read_tuned(&path).unwrap(), outcomes[0].params.to_vec());

    let summaries = run_benchmark(&functions, &[Algorithm::BbBc, Algorithm::De], &config, data.path(), true, false).unwrap();
    assert_eq!(summaries.len(), 2);
    assert!(summaries.iter().all(|s| s.final_mean.is_finite()));
}

#[test]
fn test_plot_from_written_files() {
    let data = tempfile::tempdir().unwrap();
    let functions = vec![resolve_function("salomon").unwrap()];
    let summaries = run_benchmark(&functions, &[Algorithm::De], &small_config(), data.path(), false, false).unwrap();
    let dir = data.path().join("results").join("salomon");
    let series = ConvergenceSeries::from_files(&dir, &summaries[0].label).unwrap();
    assert_eq!(series.iterations, vec![0, 10, 20, 30]);
    assert!(series.std.iter().all(|s| s.is_finite() && *s >= 0.0));

    let path = write_convergence_plot(data.path(), "salomon", &[series]).unwrap();
    let html = std::fs::read_to_string(path).unwrap();
    assert!(html.contains("salomon"));
}

#[test]
fn test_missing_series_file_is_an_error() {
    let data = tempfile::tempdir().unwrap();
    assert!(ConvergenceSeries::from_files(data.path(), "pso").is_err());
}
