pub mod resolve;
pub mod types;

pub use resolve::{global_config_path, load_config, resolve_config, ConfigSource, LOCAL_CONFIG};
pub use types::ReduceConfig;
