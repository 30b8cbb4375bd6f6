use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dirs_holds_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/cryptobill"),
        };
        assert!(dirs.app_data_root.ends_with("cryptobill"));
    }
}
