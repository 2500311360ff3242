use std::fs;
use std::path::Path;
use std::sync::Arc;
use log::{debug, info};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb, Tree};
use crate::error::ConvertError;
use crate::service::traits::i_service::RasterServiceTrait;

// 自我檢查用的最小 SVG
const PROBE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="black"/></svg>"#;

/// 以 resvg 實作的光柵化服務
pub struct ResvgService {
    fontdb: Arc<fontdb::Database>,
}

impl ResvgService {
    /// 建立服務並載入系統字型，供含文字的圖示使用
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!("載入系統字型：{} 個", db.len());
        ResvgService { fontdb: Arc::new(db) }
    }

    /// 不載入任何字型，適合純圖形的圖示
    pub fn without_fonts() -> Self {
        ResvgService { fontdb: Arc::new(fontdb::Database::new()) }
    }

    fn options_for(&self, source: &Path) -> usvg::Options<'static> {
        // 相對路徑的外部資源以 SVG 所在目錄為基準
        let resources_dir = fs::canonicalize(source)
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        usvg::Options {
            resources_dir,
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        }
    }
}

/// 將樹狀結構依兩軸各自縮放，繪製成剛好 `width × height` 的畫布
pub fn render_to_pixmap(tree: &Tree, width: u32, height: u32) -> Result<Pixmap, String> {
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| format!("invalid target size {}x{}", width, height))?;
    let size = tree.size();
    let transform = Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

impl RasterServiceTrait for ResvgService {
    fn name(&self) -> &str {
        "resvg"
    }

    fn probe(&self) -> Result<(), ConvertError> {
        let missing = |reason: String| ConvertError::MissingCapability {
            name: self.name().to_string(),
            reason,
        };
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        };
        let tree = Tree::from_str(PROBE_SVG, &options).map_err(|e| missing(e.to_string()))?;
        let pixmap = render_to_pixmap(&tree, 1, 1).map_err(missing)?;
        pixmap.encode_png().map_err(|e| missing(e.to_string()))?;
        Ok(())
    }

    fn rasterize(&self, source: &Path, target: &Path, width: u32, height: u32) -> Result<(), ConvertError> {
        let failure = |reason: String| ConvertError::RenderFailure {
            path: source.to_path_buf(),
            reason,
        };
        let data = fs::read(source).map_err(|e| failure(e.to_string()))?;
        let tree = Tree::from_data(&data, &self.options_for(source)).map_err(|e| failure(e.to_string()))?;
        info!(
            "解析 SVG：{}，原始尺寸：{}x{}",
            source.display(),
            tree.size().width(),
            tree.size().height()
        );
        let pixmap = render_to_pixmap(&tree, width, height).map_err(failure)?;
        pixmap
            .save_png(target)
            .map_err(|e| failure(format!("cannot write {}: {}", target.display(), e)))?;
        Ok(())
    }
}
