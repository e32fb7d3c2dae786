//! 日志初始化
//!
//! 过滤规则取自 `STEAMER_LOG`（`EnvFilter` 语法），未设置时由 `-v` 次数决定：
//!     0 → warn, 1 → info, ≥2 → debug
//!
//! 命令行子命令写 stderr；TUI 占用整个终端，日志改写到
//! `<缓存目录>/steamer/steamer.log.<日期>`，按天轮转，只保留最近几天。
//! `steamer-provider` 使用 `log` 门面，其记录经 tracing-log 桥接到同一个订阅者。

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志过滤的环境变量
pub const LOG_ENV: &str = "STEAMER_LOG";

const LOG_FILE: &str = "steamer.log";

/// 保留的日志文件个数
const MAX_LOG_FILES: usize = 7;

/// 日志输出位置
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    /// 写入该目录下的 steamer.log.<日期>
    File(PathBuf),
}

/// `-v` 次数对应的默认级别
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// TUI 日志目录
pub fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("steamer")
}

/// 安装全局订阅者
///
/// 写文件时返回的 guard 必须存活到程序结束，否则尾部日志会丢失。
pub fn init(verbosity: u8, target: LogTarget) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .with(filter)
                .try_init()?;
            Ok(None)
        }
        LogTarget::File(dir) => {
            let appender = file_appender(&dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .with(filter)
                .try_init()?;
            tracing::info!(dir = %dir.display(), "logging to file");
            Ok(Some(guard))
        }
    }
}

/// 按天轮转的日志文件
fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(7), "debug");
    }

    #[test]
    fn log_dir_is_namespaced() {
        assert!(default_log_dir().ends_with("steamer"));
    }

    #[test]
    fn file_appender_writes_dated_file() {
        use std::io::Write;

        let dir = std::env::temp_dir().join(format!("steamer-log-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut appender = file_appender(&dir).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("steamer.log."), "{names:?}");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
