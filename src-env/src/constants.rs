/// Environment variable naming the swarmbench project root
pub const SWARMBENCH_DIR: &str = "SWARMBENCH_DIR";

/// Root of everything the benchmarks generate, relative to the project root
pub const DATA_GENERATED: &str = "data_generated";

/// Convergence CSV files, one subdirectory per test function
pub const RESULTS: &str = "results";

/// Tuned control parameters, one subdirectory per algorithm
pub const PARAMS: &str = "params";

/// Convergence plots
pub const PLOTS: &str = "plots";

/// Extension of tuned control parameter files
pub const TUNED_EXTENSION: &str = "tuned";
