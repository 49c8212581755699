//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::converter::{Converter, Mode};

/// numeral 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NumeralConfig {
    /// 모드를 지정하지 않았을 때 사용할 변환 모드
    #[serde(default = "default_mode")]
    pub default_mode: Mode,
    /// 로마 숫자 출력을 소문자로
    #[serde(default)]
    pub lowercase_roman: bool,
    /// Auto 모드에서 1~3999 정수를 로마 숫자로 변환 (false면 영어 단어)
    #[serde(default = "default_prefer_roman")]
    pub prefer_roman: bool,
}

fn default_mode() -> Mode {
    Mode::Auto
}

fn default_prefer_roman() -> bool {
    true
}

impl Default for NumeralConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            lowercase_roman: false,
            prefer_roman: default_prefer_roman(),
        }
    }
}

impl NumeralConfig {
    /// 설정을 반영한 변환기 생성
    pub fn converter(&self) -> Converter {
        Converter::new()
            .with_lowercase_roman(self.lowercase_roman)
            .with_prefer_roman(self.prefer_roman)
    }
}

/// 설정 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "config file I/O error: {}", e),
            ConfigError::ParseError(e) => write!(f, "config JSON error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::ParseError(e)
    }
}

/// 설정 파일 경로
///
/// `$XDG_CONFIG_HOME/numeral/config.json`, 없으면 `~/.config/numeral/config.json`
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };

    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("numeral").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> NumeralConfig {
    let path = config_path();
    match try_load_config(&path) {
        Ok(config) => config,
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            NumeralConfig::default()
        }
        Err(e) => {
            log::warn!("설정 파일 무시 ({}): {}", path.display(), e);
            NumeralConfig::default()
        }
    }
}

/// 지정 경로에서 설정 로드 (에러 그대로 반환)
pub fn try_load_config(path: &Path) -> Result<NumeralConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 저장
pub fn save_config(config: &NumeralConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 지정 경로에 설정 저장 (상위 디렉토리 자동 생성)
pub fn save_config_to(config: &NumeralConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
