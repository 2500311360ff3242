use std::io;
use std::path::PathBuf;
use crate::config::config::validate_jobs;
use crate::config::manifest::MANIFEST;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        let config = self.config_port.get_config()?;
        validate_jobs(&config.jobs)?;
        Ok(config)
    }
}

// 預設配置適配器
pub struct DefaultConfigAdapter {
    icon_dir: PathBuf,
}

impl DefaultConfigAdapter {
    pub fn new(icon_dir: PathBuf) -> Self {
        DefaultConfigAdapter { icon_dir }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            icon_dir: self.icon_dir.clone(),
            jobs: MANIFEST.to_vec(),
            strict: false,
            no_progress: false,
            log_level: "info".to_string(),
        })
    }
}
