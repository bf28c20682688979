use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use crate::errors::{Error, Result};
use crate::io;
use std::path::Path;

/// Write the default configuration into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    log::info!("Created {}", config_path.display());
    Ok(())
}

pub fn init_config(force: bool) -> anyhow::Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_template() {
        let temp = TempDir::new().unwrap();
        init_config_in(temp.path(), false).unwrap();
        let written = std::fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "# mine").unwrap();
        let err = init_config_in(temp.path(), false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));

        init_config_in(temp.path(), true).unwrap();
        let written = std::fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
    }
}
