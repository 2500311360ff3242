use std::io;
use std::path::PathBuf;
use crate::config::manifest::ConversionJob;
use crate::models::conversion::RunSummary;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub icon_dir: PathBuf,
    pub jobs: Vec<ConversionJob>,
    pub strict: bool,
    pub no_progress: bool,
    pub log_level: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: &AppConfig) -> io::Result<RunSummary>;
}
