use std::io;
use std::path::PathBuf;
use thiserror::Error;

// 轉換流程的錯誤分類
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 光柵化函式庫無法使用，屬於啟動前置條件，發生時直接中止
    #[error("rasterizer `{name}` is unavailable: {reason}")]
    MissingCapability { name: String, reason: String },

    /// 來源 SVG 不存在，該工作會被略過
    #[error("source file {} not found", .0.display())]
    MissingSource(PathBuf),

    /// 讀取、解析、繪製或寫入失敗，該工作記為失敗
    #[error("{reason}")]
    RenderFailure { path: PathBuf, reason: String },
}

impl From<ConvertError> for io::Error {
    fn from(err: ConvertError) -> Self {
        let kind = match &err {
            ConvertError::MissingCapability { .. } => io::ErrorKind::Unsupported,
            ConvertError::MissingSource(_) => io::ErrorKind::NotFound,
            ConvertError::RenderFailure { .. } => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}
