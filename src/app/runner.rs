use crate::config::cli::LocalLines;
use crate::config::settings::{OutputFormat, SolverSettings};
use crate::core::engine::{Outcome, SolverEngine};
use crate::domain::model::{Command, DecodeResult};
use crate::domain::ports::Decoder;
use crate::utils::error::{Result, SolverError};
use crate::utils::logger;
use std::ffi::OsString;
use std::fmt::Write;

/// Shared entry point of the `-f` / `-s` programs.
pub async fn run_solver<D, I, T>(decoder: D, args: I) -> anyhow::Result<()>
where
    D: Decoder + 'static,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let settings = load_settings();
    let command = Command::from_args(args);
    let format = settings.output_format();

    let engine =
        SolverEngine::new(decoder, LocalLines::new()).with_max_concurrency(settings.max_concurrency());

    match engine.run(&command).await {
        Ok(outcome) => {
            print!("{}", render(&outcome, format)?);
        }
        Err(e @ SolverError::UnreadableInput { .. }) => {
            // 原樣回報並以成功結束，不解碼任何一行
            tracing::warn!("📁 {}", e);
            if let Command::SolveFile(path) = &command {
                if format == OutputFormat::Text {
                    println!("{}", file_header(path));
                }
            }
            println!("{}", e.user_friendly_message());
        }
        Err(e) => {
            tracing::error!("❌ Solving failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

fn load_settings() -> SolverSettings {
    match SolverSettings::from_env() {
        Ok(settings) => {
            init_logging(&settings);
            settings
        }
        Err(e) => {
            let settings = SolverSettings::default();
            init_logging(&settings);
            tracing::warn!("⚠️ {}; using default settings", e.user_friendly_message());
            settings
        }
    }
}

fn init_logging(settings: &SolverSettings) {
    let level = settings.logging.level.as_deref();
    if settings.logging.json {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }
}

fn file_header(path: &str) -> String {
    format!("Solving cyphertext in file '{}'.", path)
}

// 串接解碼時先顯示第一階段的結果
fn write_intermediate(out: &mut String, result: &DecodeResult) {
    if let Some(intermediate) = &result.intermediate {
        let _ = writeln!(out, "Solving cyphertext '{}'.", intermediate);
    }
}

/// Text or JSON rendering of one run, as printed on stdout.
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    let mut out = String::new();

    match (outcome, format) {
        (Outcome::NoAction, _) => {}
        (Outcome::Decoded(result), OutputFormat::Text) => {
            let _ = writeln!(out, "Solving cyphertext '{}'.", result.original);
            write_intermediate(&mut out, result);
            let _ = writeln!(out, "{}", result.decoded);
        }
        (Outcome::Decoded(result), OutputFormat::Json) => {
            out.push_str(&serde_json::to_string_pretty(result)?);
            out.push('\n');
        }
        (Outcome::File { path, report }, OutputFormat::Text) => {
            let _ = writeln!(out, "{}", file_header(path));
            for result in &report.results {
                let _ = writeln!(out, "{}", result.original);
                write_intermediate(&mut out, result);
                let _ = writeln!(out, "{}\n", result.decoded);
            }
        }
        (Outcome::File { report, .. }, OutputFormat::Json) => {
            out.push_str(&serde_json::to_string_pretty(&report.results)?);
            out.push('\n');
        }
    }

    Ok(out)
}
