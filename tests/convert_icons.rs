use std::fs;
use std::path::Path;
use icon_to_png::config::manifest::MANIFEST;
use icon_to_png::config::ports::{AppConfig, ConversionPort};
use icon_to_png::error::ConvertError;
use icon_to_png::facade::conversion_facade::ConversionFacade;
use icon_to_png::facade::traits::i_conversion::ConversionFacadeTrait;
use icon_to_png::models::conversion::JobOutcome;
use icon_to_png::service::raster_service::ResvgService;
use icon_to_png::service::traits::i_service::RasterServiceTrait;
use icon_to_png::utils::convert::ConversionAdapter;
use resvg::tiny_skia::Pixmap;
use tempfile::TempDir;

const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <rect x="2" y="2" width="20" height="20" rx="4" fill="#3367d6"/>
  <circle cx="12" cy="12" r="5" fill="#ffffff"/>
</svg>"##;

fn write_sources(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), ICON_SVG).unwrap();
    }
}

fn facade() -> ConversionFacade<'static> {
    ConversionFacade::new(Box::new(ResvgService::without_fonts()), true)
}

fn png_size(path: &Path) -> (u32, u32) {
    let pixmap = Pixmap::load_png(path).unwrap();
    (pixmap.width(), pixmap.height())
}

#[test]
fn converts_all_three_icons() {
    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["icon-16.svg", "icon-48.svg", "icon-128.svg"]);

    let mut out = Vec::new();
    let summary = facade().run_all(dir.path(), &MANIFEST, &mut out).unwrap();

    assert!(summary.is_success(false));
    assert_eq!(png_size(&dir.path().join("icon-16.png")), (16, 16));
    assert_eq!(png_size(&dir.path().join("icon-48.png")), (48, 48));
    assert_eq!(png_size(&dir.path().join("icon-128.png")), (128, 128));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("3/3 icons converted"));
    assert!(text.contains("All icons converted successfully!"));
    assert_eq!(text.matches("   Size: ").count(), 3);
}

#[test]
fn missing_source_is_skipped_and_run_still_succeeds() {
    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["icon-16.svg", "icon-128.svg"]);

    let mut out = Vec::new();
    let summary = facade().run_all(dir.path(), &MANIFEST, &mut out).unwrap();

    assert_eq!((summary.converted, summary.skipped, summary.failed), (2, 1, 0));
    assert!(summary.is_success(false));
    assert!(!summary.is_success(true));
    assert!(!dir.path().join("icon-48.png").exists());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Skipping icon-48.svg (file not found)"));
    assert!(text.contains("2/3 icons converted"));
    assert!(text.contains("Some icons were skipped"));
}

#[test]
fn malformed_source_fails_without_stopping_the_run() {
    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["icon-48.svg", "icon-128.svg"]);
    fs::write(dir.path().join("icon-16.svg"), "this is not svg").unwrap();

    let mut out = Vec::new();
    let summary = facade().run_all(dir.path(), &MANIFEST, &mut out).unwrap();

    assert_eq!((summary.converted, summary.failed), (2, 1));
    assert!(!summary.is_success(false));
    assert!(!dir.path().join("icon-16.png").exists());
    assert_eq!(png_size(&dir.path().join("icon-128.png")), (128, 128));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("❌ Failed to convert"));
    assert!(text.contains("Some icons failed to convert. Check errors above."));
}

#[test]
fn converting_twice_overwrites_with_identical_output() {
    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["icon-48.svg"]);
    let source = dir.path().join("icon-48.svg");
    let target = dir.path().join("icon-48.png");
    fs::write(&target, b"stale").unwrap();

    let facade = facade();
    let mut out = Vec::new();
    let converted = JobOutcome::Converted { bytes: None };
    assert_eq!(facade.convert_one(&source, &target, 48, 48, &mut out).unwrap(), converted);
    let first = fs::read(&target).unwrap();
    assert_eq!(facade.convert_one(&source, &target, 48, 48, &mut out).unwrap(), converted);
    let second = fs::read(&target).unwrap();

    assert_ne!(first, b"stale");
    assert_eq!(first, second);
}

// 自我檢查失敗，但若仍被呼叫繪製就照樣寫出檔案
struct Unavailable;

impl RasterServiceTrait for Unavailable {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn probe(&self) -> Result<(), ConvertError> {
        Err(ConvertError::MissingCapability {
            name: self.name().to_string(),
            reason: "library not linked".to_string(),
        })
    }

    fn rasterize(&self, source: &Path, target: &Path, _width: u32, _height: u32) -> Result<(), ConvertError> {
        fs::write(target, b"png").map_err(|e| ConvertError::RenderFailure {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[test]
fn missing_capability_aborts_before_any_output() {
    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["icon-16.svg", "icon-48.svg", "icon-128.svg"]);
    let config = AppConfig {
        icon_dir: dir.path().to_path_buf(),
        jobs: MANIFEST.to_vec(),
        strict: false,
        no_progress: true,
        log_level: "error".to_string(),
    };

    let adapter = ConversionAdapter::with_service(Box::new(Unavailable));
    let err = adapter.execute(&config).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::Unsupported);
    for job in MANIFEST.iter() {
        assert!(!dir.path().join(job.target_name).exists(), "{} was written", job.target_name);
    }
}
