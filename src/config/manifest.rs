/// 單一轉換工作：來源 SVG、目標 PNG 與輸出像素尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionJob {
    pub source_name: &'static str,
    pub target_name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl ConversionJob {
    pub const fn new(source_name: &'static str, target_name: &'static str, width: u32, height: u32) -> Self {
        ConversionJob { source_name, target_name, width, height }
    }
}

// 擴充套件上架所需的固定圖示清單
pub const MANIFEST: [ConversionJob; 3] = [
    ConversionJob::new("icon-16.svg", "icon-16.png", 16, 16),
    ConversionJob::new("icon-48.svg", "icon-48.png", 48, 48),
    ConversionJob::new("icon-128.svg", "icon-128.png", 128, 128),
];
