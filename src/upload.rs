use std::path::Path;

use crate::error::{Error, Result};

/// 清洗上传文件名
///
/// - 丢弃路径部分，只保留最后一段
/// - 字母数字和 `.` `-` `_` 之外的字符折叠为 `_`
/// - 去掉开头的 `.`，防止隐藏文件和 `..`
///
/// 清洗后为空的文件名返回 `None`。
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        return None;
    }

    Some(cleaned.to_string())
}

/// 把上传内容写入配置的目录
///
/// 同名文件直接覆盖。目录不存在时先创建。
pub async fn save_upload(dir: &Path, raw_name: &str, data: &[u8]) -> Result<String> {
    let name = sanitize_filename(raw_name).ok_or(Error::FormatError("invalid file name"))?;

    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(dir.join(&name), data).await?;

    Ok(name)
}
