// src/config.rs
use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;
use file_processing_shared_kernel::{FileProcessingError, FileSize};

use crate::parsers::SizeArg;

/// 既定のアップロード上限 (1 MiB)
pub const DEFAULT_MAX_UPLOAD: FileSize = FileSize::from_mebibytes(1);

#[derive(Parser, Debug, Clone)]
#[command(name = "file_processing", version, about = "テキストファイルの行数/単語数を集計する HTTP サービス")]
pub struct ServerArgs {
    /// 待ち受けアドレス
    #[arg(long, env = "FILE_PROCESSING_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// 待ち受けポート
    #[arg(long, env = "FILE_PROCESSING_PORT", default_value_t = 5000)]
    pub port: u16,

    /// アップロード上限 (例: 1048576, 512KiB, 1MiB)
    #[arg(long, env = "FILE_PROCESSING_MAX_UPLOAD", default_value = "1MiB")]
    pub max_upload: SizeArg,

    /// ログレベル (RUST_LOG が設定されていればそちらが優先)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// ログファイルの出力先ディレクトリ
    #[arg(long, env = "FILE_PROCESSING_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Validated settings the server is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub max_upload: FileSize,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            max_upload: DEFAULT_MAX_UPLOAD,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl TryFrom<ServerArgs> for ServerConfig {
    type Error = FileProcessingError;

    fn try_from(args: ServerArgs) -> Result<Self, Self::Error> {
        let max_upload = FileSize::from(args.max_upload);
        if max_upload.bytes() == 0 {
            return Err(FileProcessingError::invalid_input("--max-upload must be greater than zero"));
        }
        if args.log_level.trim().is_empty() {
            return Err(FileProcessingError::invalid_input("--log-level must not be empty"));
        }

        Ok(Self {
            addr: SocketAddr::new(args.host, args.port),
            max_upload,
            log_level: args.log_level,
            log_dir: args.log_dir,
        })
    }
}

/// Parses the process arguments into a validated config.
///
/// # Errors
///
/// Returns an error when the parsed values are out of range.
pub fn load_config() -> Result<ServerConfig, FileProcessingError> {
    ServerConfig::try_from(ServerArgs::parse())
}
