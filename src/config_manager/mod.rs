pub mod utils;

pub use utils::{build_config, load_config, load_from_path, ENV_PREFIX};
