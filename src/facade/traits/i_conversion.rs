use std::io::{self, Write};
use std::path::Path;
use crate::config::manifest::ConversionJob;
use crate::error::ConvertError;
use crate::models::conversion::{JobOutcome, RunSummary};

// Facade 接口，負責協調圖示轉換流程
pub trait ConversionFacadeTrait {
    /// 確認光柵化能力可用，不可用時整個流程不得開始
    fn ensure_capability(&self) -> Result<(), ConvertError>;

    /// 轉換單一圖示，渲染錯誤只會寫入狀態行，不會向外傳遞
    /// # 回傳
    /// - 成功時為 `Converted`（尚未量測大小），失敗時為帶有錯誤訊息的 `Failed`；
    ///   只有狀態行寫入失敗才返回 IO 錯誤
    fn convert_one(
        &self,
        source: &Path,
        target: &Path,
        width: u32,
        height: u32,
        out: &mut dyn Write,
    ) -> io::Result<JobOutcome>;

    /// 依序處理所有工作並輸出摘要
    fn run_all(&self, icon_dir: &Path, jobs: &[ConversionJob], out: &mut dyn Write) -> io::Result<RunSummary>;
}
