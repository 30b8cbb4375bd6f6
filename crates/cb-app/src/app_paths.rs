use std::path::PathBuf;

use cb_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub storage_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            storage_path: dirs.app_data_root.join("local_storage.json"),
            config_path: dirs.app_data_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/cryptobill"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(
            paths.storage_path,
            PathBuf::from("/tmp/cryptobill/local_storage.json")
        );
        assert_eq!(paths.config_path, PathBuf::from("/tmp/cryptobill/config.toml"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/cryptobill/logs"));
    }
}
