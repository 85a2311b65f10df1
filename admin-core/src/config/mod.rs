use crate::error::AppError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Resolve `<crate>/config` whether the process starts in the workspace root
/// or inside the crate directory.
pub fn configuration_directory(base_path: &Path, crate_dir: &str) -> PathBuf {
    if base_path.ends_with(crate_dir) {
        base_path.join("config")
    } else {
        base_path.join(crate_dir).join("config")
    }
}

/// Load `config/base.yaml` and overlay `APP_`-prefixed environment variables.
///
/// Nested keys use `__`, e.g. `APP_INVOICE_API__BASE_URL`.
pub fn load_configuration<T: DeserializeOwned>(crate_dir: &str) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let base_path = std::env::current_dir()?;
    let directory = configuration_directory(&base_path, crate_dir);

    let settings = config::Config::builder()
        .add_source(config::File::from(directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}
