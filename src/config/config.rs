use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use crate::config::manifest::ConversionJob;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "icon_to_png",
    about = "Rasterize the extension's SVG icons into PNG files",
    long_about = "Converts icon-16.svg, icon-48.svg and icon-128.svg into PNG files of the matching pixel size.\nWith no options the current directory is used. Pass --dir to point at the icons directory and --strict to treat missing sources as a failed run."
)]
pub struct Cli {
    /// 圖示所在目錄，預設為目前工作目錄
    #[arg(long)]
    pub dir: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

impl Cli {
    // 是否未提供任何選項參數
    pub fn is_default_config(&self) -> bool {
        self.dir.is_none() && !self.strict && !self.no_progress && self.log_level == "info"
    }
}

pub fn validate_icon_dir(dir: &Path) -> io::Result<&Path> {
    if !dir.exists() {
        log::error!("圖示目錄不存在：{}", dir.display());
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("icon directory '{}' does not exist", dir.display()),
        ));
    }
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a directory", dir.display()),
        ));
    }
    Ok(dir)
}

pub fn validate_jobs(jobs: &[ConversionJob]) -> io::Result<()> {
    for job in jobs {
        if job.width == 0 || job.height == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid size {}x{} for {}", job.width, job.height, job.target_name),
            ));
        }
    }
    Ok(())
}
