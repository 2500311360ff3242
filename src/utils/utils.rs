use std::io;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use crate::models::conversion::RunSummary;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("logger init failed: {}", e)))
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            let style = ProgressStyle::default_bar()
                .template("{msg} [{bar:30}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-");
            pb.set_style(style);
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, done: u64, current: &str) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(format!("轉換中：{}", current));
        self.pb.set_position(done);
    }

    // 暫時隱藏進度條，避免與標準輸出的狀態行交錯
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.pb.suspend(f)
    }

    pub fn finish(&self, summary: &RunSummary) {
        if self.no_progress {
            return;
        }
        let msg = format!(
            "完成，成功 {} 個，略過 {} 個，失敗 {} 個，耗時 {:.2} 秒",
            summary.converted,
            summary.skipped,
            summary.failed,
            self.start.elapsed().as_secs_f64()
        );
        self.pb.finish_with_message(msg);
    }
}

/// 以千分位格式化位元組數，例如 `12345` 轉為 `12,345`
pub fn format_byte_count(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
