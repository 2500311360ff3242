use std::fs;
use std::io::{self, Write};
use std::path::Path;
use log::{error, info, warn};
use crate::config::manifest::ConversionJob;
use crate::error::ConvertError;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{JobOutcome, RunSummary};
use crate::service::traits::i_service::RasterServiceTrait;
use crate::utils::utils::{format_byte_count, ProgressManager};

const RULE_WIDTH: usize = 50;

pub struct ConversionFacade<'a> {
    raster_service: Box<dyn RasterServiceTrait + 'a>,
    no_progress: bool,
}

impl<'a> ConversionFacade<'a> {
    pub fn new(raster_service: Box<dyn RasterServiceTrait + 'a>, no_progress: bool) -> Self {
        ConversionFacade {
            raster_service,
            no_progress,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade<'_> {
    fn ensure_capability(&self) -> Result<(), ConvertError> {
        match self.raster_service.probe() {
            Ok(()) => {
                info!("光柵化函式庫可用：{}", self.raster_service.name());
                Ok(())
            }
            Err(e) => {
                error!("光柵化函式庫無法使用：{}", e);
                Err(e)
            }
        }
    }

    fn convert_one(
        &self,
        source: &Path,
        target: &Path,
        width: u32,
        height: u32,
        out: &mut dyn Write,
    ) -> io::Result<JobOutcome> {
        match self.raster_service.rasterize(source, target, width, height) {
            Ok(()) => {
                info!("轉換完成：{} -> {}（{}x{}）", source.display(), target.display(), width, height);
                writeln!(out, "✅ Converted {} → {}", source.display(), target.display())?;
                Ok(JobOutcome::Converted { bytes: None })
            }
            Err(e) => {
                error!("轉換失敗：{}，原因：{}", source.display(), e);
                writeln!(out, "❌ Failed to convert {}: {}", source.display(), e)?;
                Ok(JobOutcome::Failed { reason: e.to_string() })
            }
        }
    }

    fn run_all(&self, icon_dir: &Path, jobs: &[ConversionJob], out: &mut dyn Write) -> io::Result<RunSummary> {
        info!("開始轉換圖示，目錄：{}，共 {} 個", icon_dir.display(), jobs.len());
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(out, "Converting SVG icons to PNG format...")?;
        writeln!(out, "{}", rule)?;

        let pm = ProgressManager::new(jobs.len() as u64, self.no_progress);
        let mut summary = RunSummary::new(jobs.len());

        for (index, job) in jobs.iter().enumerate() {
            pm.update(index as u64, job.source_name);
            let source = icon_dir.join(job.source_name);
            let target = icon_dir.join(job.target_name);
            let outcome = pm.suspend(|| self.process_job(job, &source, &target, &mut *out))?;
            summary.record(&outcome);
        }
        pm.update(jobs.len() as u64, "");
        pm.finish(&summary);

        writeln!(out, "{}", rule)?;
        writeln!(
            out,
            "\n✨ Conversion complete: {}/{} icons converted",
            summary.converted, summary.total
        )?;

        if summary.all_converted() {
            writeln!(out, "\n✅ All icons converted successfully!")?;
            writeln!(out, "\nNext steps:")?;
            writeln!(out, "1. Verify PNG files look correct")?;
            writeln!(out, "2. Update manifest.json if needed")?;
            writeln!(
                out,
                "3. Commit to GitHub: git add icons/*.png && git commit -m 'feat: add PNG icon exports'"
            )?;
        } else if summary.failed > 0 {
            writeln!(out, "\n⚠️  Some icons failed to convert. Check errors above.")?;
        } else {
            writeln!(out, "\n⚠️  Some icons were skipped (source not found).")?;
        }

        Ok(summary)
    }
}

impl ConversionFacade<'_> {
    fn process_job(
        &self,
        job: &ConversionJob,
        source: &Path,
        target: &Path,
        out: &mut dyn Write,
    ) -> io::Result<JobOutcome> {
        if !source.exists() {
            warn!("{}", ConvertError::MissingSource(source.to_path_buf()));
            writeln!(out, "⚠️  Skipping {} (file not found)", job.source_name)?;
            return Ok(JobOutcome::Skipped);
        }

        let outcome = self.convert_one(source, target, job.width, job.height, out)?;
        if !matches!(outcome, JobOutcome::Converted { .. }) {
            return Ok(outcome);
        }

        let bytes = match fs::metadata(target) {
            Ok(meta) => {
                writeln!(out, "   Size: {} bytes", format_byte_count(meta.len()))?;
                Some(meta.len())
            }
            Err(e) => {
                warn!("無法讀取輸出檔大小：{}，原因：{}", target.display(), e);
                None
            }
        };
        Ok(JobOutcome::Converted { bytes })
    }
}
