use std::process::ExitCode;

use icon_to_png::action::cli::process_cli_mode;

fn main() -> ExitCode {
    match process_cli_mode() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("程式執行失敗：{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
