use std::env;
use std::io;
use clap::Parser;
use crate::config::config::{validate_icon_dir, Cli};
use crate::config::manifest::MANIFEST;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

/// 解析參數並執行轉換；回傳整體是否成功
pub fn process_cli_mode() -> io::Result<bool> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;
    process_cli(cli, &ConversionAdapter::new())
}

pub fn process_cli(cli: Cli, conversion_port: &dyn ConversionPort) -> io::Result<bool> {
    // 選擇配置適配器
    let config_port: Box<dyn ConfigPort> = if cli.is_default_config() {
        log::info!("未提供選項參數，使用預設配置：目前目錄，固定圖示清單");
        Box::new(DefaultConfigAdapter::new(env::current_dir()?))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone()))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;
    validate_icon_dir(&config.icon_dir)?;

    let summary = conversion_port.execute(&config)?;

    // 若啟用 --show-config，在轉換後顯示配置
    if cli.show_config {
        println!("Resolved configuration: {:#?}", config);
    }

    Ok(summary.is_success(config.strict))
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let icon_dir = match &self.cli.dir {
            Some(dir) => validate_icon_dir(dir)?.to_path_buf(),
            None => env::current_dir()?,
        };

        if self.cli.strict {
            log::warn!("已啟用嚴格模式，略過的圖示也會使執行失敗");
        }

        Ok(AppConfig {
            icon_dir,
            jobs: MANIFEST.to_vec(),
            strict: self.cli.strict,
            no_progress: self.cli.no_progress,
            log_level: self.cli.log_level.clone(),
        })
    }
}
