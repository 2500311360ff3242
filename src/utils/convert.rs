use std::io;
use log::info;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::RunSummary;
use crate::service::raster_service::ResvgService;
use crate::service::traits::i_service::RasterServiceTrait;

// 執行轉換並將狀態行寫到標準輸出
pub struct ConversionAdapter {
    raster_service: Box<dyn RasterServiceTrait>,
}

impl ConversionAdapter {
    /// 使用 resvg 作為光柵化服務
    pub fn new() -> Self {
        Self::with_service(Box::new(ResvgService::new()))
    }

    pub fn with_service(raster_service: Box<dyn RasterServiceTrait>) -> Self {
        ConversionAdapter { raster_service }
    }
}

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: &AppConfig) -> io::Result<RunSummary> {
        let facade = ConversionFacade::new(Box::new(self.raster_service.as_ref()), config.no_progress);
        // 能力檢查必須在任何工作開始前完成
        facade.ensure_capability()?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let summary = facade.run_all(&config.icon_dir, &config.jobs, &mut out)?;
        info!(
            "轉換結束：成功 {}，略過 {}，失敗 {}",
            summary.converted, summary.skipped, summary.failed
        );
        Ok(summary)
    }
}
