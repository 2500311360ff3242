use std::path::Path;
use crate::error::ConvertError;

// 光柵化服務接口，封裝外部向量繪圖函式庫
pub trait RasterServiceTrait {
    /// 函式庫名稱，用於日誌與錯誤訊息
    fn name(&self) -> &str;

    /// 啟動前自我檢查，確認函式庫可用
    /// # 回傳
    /// - 不可用時返回 `ConvertError::MissingCapability`
    fn probe(&self) -> Result<(), ConvertError>;

    /// 將來源 SVG 繪製為指定尺寸的 PNG，無條件覆寫目標檔
    /// # 參數
    /// - source: 來源 SVG 路徑
    /// - target: 目標 PNG 路徑
    /// - width / height: 輸出像素尺寸
    /// # 回傳
    /// - 失敗時返回 `ConvertError::RenderFailure`
    fn rasterize(&self, source: &Path, target: &Path, width: u32, height: u32) -> Result<(), ConvertError>;
}

// 讓借用的服務也能交給 facade 使用
impl<T: RasterServiceTrait + ?Sized> RasterServiceTrait for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn probe(&self) -> Result<(), ConvertError> {
        (**self).probe()
    }

    fn rasterize(&self, source: &Path, target: &Path, width: u32, height: u32) -> Result<(), ConvertError> {
        (**self).rasterize(source, target, width, height)
    }
}
