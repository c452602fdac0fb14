//! Настройки подключения: `ESHOST`, флаги командной строки и необязательный YAML-файл
use escli_core::{
    prelude::*,
    transport::{check_timeout, normalize_host},
};
use serde::Deserialize;
use std::{fs::File, path::Path, time::Duration};

/// Содержимое YAML-файла, переданного через `--config`
#[derive(Deserialize, PartialEq, Eq, Debug, Default)]
pub struct ConfigFile {
    pub host: Option<String>,
    /// таймаут запроса в секундах
    pub timeout: Option<u64>,
}

#[derive(PartialEq, Eq, Debug)]
pub struct Config {
    pub host: String,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Собирает итоговые настройки.
    ///
    /// `ESHOST` важнее `host` из файла, таймаут из флага/окружения важнее таймаута из файла.
    /// Пустой `ESHOST` считается незаданным.
    pub fn resolve(
        file: Option<ConfigFile>,
        host_env: Option<String>,
        timeout: Option<u64>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();
        let host = host_env
            .filter(|h| !h.is_empty())
            .or(file.host)
            .ok_or(MissingHost)?;
        let timeout = timeout.or(file.timeout).map(Duration::from_secs);
        if let Some(timeout) = timeout {
            check_timeout(timeout)?;
        }
        Ok(Self {
            host: normalize_host(&host)?,
            timeout,
        })
    }
}

pub fn read_config(path: &Path) -> Result<ConfigFile> {
    let file = File::open(path).context(ReadingConfig(path.to_path_buf()))?;
    let config = serde_yaml::from_reader(file).context(ReadingConfig(path.to_path_buf()))?;
    Ok(config)
}
