//! 配置加载
//!
//! 凭据来源（优先级从高到低）：
//!     1. 环境变量 `PORKBUN_APIKEY` / `PORKBUN_SECRETAPIKEY`
//!        （兼容旧名 `API_KEY` / `API_SECRET`）
//!     2. 当前目录下 `.env` 中的同名变量（不覆盖已有的环境变量）
//!     3. `--config` 指定的文件；未指定时依次查找：
//!         · ~/.config/steamer/{config.toml, config.yaml, steamer.yaml}
//!         · <系统配置目录>/steamer/{config.toml, config.yaml, steamer.yaml}
//!         · ~/.steamer.toml, ~/steamer.yaml
//!
//! 扩展名为 `.yaml` / `.yml` 的文件按 YAML 解析，其余按 TOML。
//!
//! 配置文件示例：
//!
//! ```toml
//! apikey = "pk1_..."
//! secretapikey = "sk1_..."
//! theme = "dark"
//! ```
//!
//! ```yaml
//! apikey: pk1_...
//! secretapikey: sk1_...
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use steamer_provider::{Credentials, ProviderError};
use thiserror::Error;

use crate::view::theme::Theme;

const API_KEY_VARS: [&str; 2] = ["PORKBUN_APIKEY", "API_KEY"];
const SECRET_KEY_VARS: [&str; 2] = ["PORKBUN_SECRETAPIKEY", "API_SECRET"];

const DOTENV_FILE: &str = ".env";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "Porkbun credentials are not configured: set apikey and secretapikey in \
         ~/.config/steamer/config.toml or export PORKBUN_APIKEY and PORKBUN_SECRETAPIKEY ({0})"
    )]
    MissingCredentials(#[source] ProviderError),
}

/// 配置文件内容
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default, alias = "api_key")]
    apikey: Option<String>,
    #[serde(default, alias = "api_secret", alias = "apisecret", alias = "secretkey")]
    secretapikey: Option<String>,
    #[serde(default)]
    theme: Option<Theme>,
}

/// 加载完成的设置
#[derive(Debug)]
pub struct Settings {
    pub credentials: Credentials,
    pub theme: Theme,
    /// 实际读取的配置文件（仅凭环境变量时为 None）
    pub source: Option<PathBuf>,
}

/// 从默认位置、进程环境与 `.env` 加载设置
pub fn load(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let dotenv = dotenv_vars(Path::new(DOTENV_FILE));
    load_from(explicit, &default_locations(), |name| {
        std::env::var(name).ok().or_else(|| dotenv.get(name).cloned())
    })
}

/// 读取 `.env` 文件中的变量，不修改进程环境
///
/// 文件不存在时返回空表；格式错误的行之后的内容被忽略。
pub fn dotenv_vars(path: &Path) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    let Ok(iter) = dotenvy::from_path_iter(path) else {
        return vars;
    };
    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring rest of env file: {e}");
                break;
            }
        }
    }
    vars
}

/// 默认配置文件候选路径，按查找顺序排列
pub fn default_locations() -> Vec<PathBuf> {
    let home = dirs::home_dir();
    let mut roots = Vec::new();
    if let Some(home) = &home {
        roots.push(home.join(".config").join("steamer"));
    }
    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join("steamer");
        if !roots.contains(&dir) {
            roots.push(dir);
        }
    }

    let mut paths: Vec<PathBuf> = roots
        .iter()
        .flat_map(|dir| ["config.toml", "config.yaml", "steamer.yaml"].map(|name| dir.join(name)))
        .collect();
    if let Some(home) = &home {
        paths.push(home.join(".steamer.toml"));
        paths.push(home.join("steamer.yaml"));
    }
    paths
}

/// 加载设置
///
/// `env` 用于查询环境变量，测试中可替换。
pub fn load_from(
    explicit: Option<&Path>,
    candidates: &[PathBuf],
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ConfigError> {
    let source = match explicit {
        Some(path) if path.is_file() => Some(path.to_path_buf()),
        Some(path) => return Err(ConfigError::NotFound(path.to_path_buf())),
        None => candidates.iter().find(|path| path.is_file()).cloned(),
    };

    let file = match &source {
        Some(path) => read_file(path)?,
        None => FileConfig::default(),
    };

    let api_key = first_env(&env, &API_KEY_VARS).or(file.apikey).unwrap_or_default();
    let secret_key = first_env(&env, &SECRET_KEY_VARS)
        .or(file.secretapikey)
        .unwrap_or_default();

    let credentials =
        Credentials::new(api_key, secret_key).map_err(ConfigError::MissingCredentials)?;

    tracing::debug!(
        source = ?source,
        credentials = ?credentials,
        "configuration loaded"
    );

    Ok(Settings {
        credentials,
        theme: file.theme.unwrap_or_default(),
        source,
    })
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if is_yaml(path) {
        serde_yaml::from_str::<Option<FileConfig>>(&text)
            .map(Option::unwrap_or_default)
            .map_err(|source| ConfigError::ParseYaml {
                path: path.to_path_buf(),
                source,
            })
    } else {
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// 取第一个非空的环境变量
fn first_env(env: &impl Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env(name))
        .find(|value| !value.trim().is_empty())
}
