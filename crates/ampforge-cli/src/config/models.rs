use ampforge::workflows::describe::DescribeConfig;
use ampforge::workflows::generate::GenerateConfig;
use ampforge::workflows::library::LibraryWorkflowConfig;
use std::path::PathBuf;

pub struct GenerateAppConfig {
    pub output: Option<PathBuf>,
    pub core_config: GenerateConfig,
}

pub struct LibraryAppConfig {
    pub output: Option<PathBuf>,
    pub core_config: LibraryWorkflowConfig,
}

pub struct DescribeAppConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub scales: Option<PathBuf>,
    pub core_config: DescribeConfig,
}
