use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Product sheets fetched when neither the config nor the command line names any URLs.
pub const BUILTIN_URLS: &[&str] = &[
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10000/00HB0002_BDH00211_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10000/00HB0006_BDEV0021212_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10005/00HB0002_BDH38606_USENG%20(1).pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10005/00HB0002_BD000209_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10006/00HB0002_BD000205_USENG%20(2).pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10006/00HB0003_BDH00239_USENG%20(1).pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10000/00HB0003_BDH49499_USENG%20(4).pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10005/00C45037_BD820172_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10005/00C45037_BD8201P6_USENG%20(1).pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10006/00HB0003_BD000232_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10000/00HB0006_BDH00212_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10005/00HB0004_BDH00203_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10000/BDEV00261_BDEV00261_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10000/BDEV00262_BDEV00262_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10005/BD8101P6_BD8101P6_USENG%20(1).pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10000/00C2D066_BD0EPS12_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10004/00HB0003_BDH00241_USENG%20(1).pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10005/BD000204_BD000204_USENG.pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10000/BDH00222_BDH00222_USENG%20(1).pdf",
    "https://highlinewarrenproduction.s3.us-east-2.amazonaws.com/DAMRoot/Original/10000/BDEV49496_BDEV49496_USENG%20(1).pdf",
];

/// Global configuration loaded from `~/.config/pdfdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfdlConfig {
    /// Directory the PDFs are written into. Relative paths resolve against the working directory.
    pub output_dir: PathBuf,
    /// Total time allowed for one GET, connect through last body byte.
    pub timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    pub max_redirects: u32,
    /// Permission bits used when the output directory has to be created (Unix only).
    pub dir_mode: u32,
    /// Optional User-Agent header; libcurl sends none by default.
    pub user_agent: Option<String>,
    /// URLs to fetch when none are given on the command line.
    pub urls: Vec<String>,
}

impl Default for PdfdlConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("PDFs"),
            timeout_secs: 30,
            max_redirects: 10,
            dir_mode: crate::batch::DEFAULT_DIR_MODE,
            user_agent: None,
            urls: BUILTIN_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdfdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG location, creating a default file if none exists.
pub fn load_or_init() -> Result<PdfdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PdfdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from_path(path: &Path) -> Result<PdfdlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: PdfdlConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
