/// 單一工作的處理結果，回報後即併入統計
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// 轉換成功；`bytes` 為輸出檔大小，讀取失敗時為 None
    Converted { bytes: Option<u64> },
    Skipped,
    Failed { reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        RunSummary { total, ..Default::default() }
    }

    pub fn record(&mut self, outcome: &JobOutcome) {
        match outcome {
            JobOutcome::Converted { .. } => self.converted += 1,
            JobOutcome::Skipped => self.skipped += 1,
            JobOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn all_converted(&self) -> bool {
        self.converted == self.total
    }

    /// 決定結束碼：只有實際嘗試後失敗的工作會使執行失敗，
    /// strict 模式下略過的工作也算失敗
    pub fn is_success(&self, strict: bool) -> bool {
        self.failed == 0 && (!strict || self.skipped == 0)
    }
}
