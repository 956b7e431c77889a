use std::path::PathBuf;

use thiserror::Error;

/// 写出 xlsx 失败：权限不足、目录不存在、磁盘已满，或序列化本身出错。
#[derive(Debug, Error)]
#[error("无法保存文件: {}", .path.display())]
pub struct FileWriteError {
    pub path: PathBuf,
    #[source]
    pub source: umya_spreadsheet::XlsxError,
}
