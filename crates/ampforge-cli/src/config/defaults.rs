use crate::cli::FamilyArg;

/// Values used when neither the command line nor the config file sets them.
pub struct DefaultsConfig {
    pub family: FamilyArg,
    pub count: usize,
    pub library_count: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub seed: u64,
    pub arc: f64,
    pub mixed_arcs: Vec<f64>,
    pub window: usize,
    pub global_descriptors: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            family: FamilyArg::Random,
            count: 100,
            library_count: 1000,
            min_length: 7,
            max_length: 28,
            seed: 0,
            arc: 180.0,
            mixed_arcs: vec![100.0, 140.0, 180.0, 220.0, 260.0],
            window: 7,
            global_descriptors: vec!["all".to_string()],
        }
    }
}
