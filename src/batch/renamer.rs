//! # 按二维码记录重命名
//!
//! 目标文件名格式：
//!
//! ```text
//! {姓名(空格→下划线)}_{rb_id}_set{set_id}_p{page}{原扩展名}
//! ```
//!
//! 若目标已存在且不是文件本身，依次尝试 `_copy1`、`_copy2`……直到找到空位。
//! 从不覆盖已有文件。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `models/record.rs`

use crate::error::{Result, ScanError};
use crate::models::QrRecord;

use std::fs;
use std::path::Path;

/// 重命名结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// 已重命名
    Renamed { from: String, to: String },
    /// 文件名已经是目标名
    Unchanged,
}

/// 目标文件名（不含扩展名）
pub fn target_stem(record: &QrRecord) -> String {
    let name: String = record
        .name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();

    format!(
        "{}_{}_set{}_p{}",
        name, record.record_id, record.set_id, record.page
    )
}

/// 原文件扩展名，带点号；没有扩展名时为空串
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default()
}

/// 计算最终目标文件名，无需改名时返回 `None`
pub fn resolve_target(folder: &Path, original: &str, record: &QrRecord) -> Option<String> {
    let stem = target_stem(record);
    let ext = extension_of(original);

    let mut candidate = format!("{}{}", stem, ext);
    let mut copy = 1;
    while candidate != original && folder.join(&candidate).exists() {
        candidate = format!("{}_copy{}{}", stem, copy, ext);
        copy += 1;
    }

    if candidate == original {
        None
    } else {
        Some(candidate)
    }
}

/// 按记录重命名文件
pub fn apply(folder: &Path, original: &str, record: &QrRecord) -> Result<RenameOutcome> {
    let target = match resolve_target(folder, original, record) {
        Some(target) => target,
        None => return Ok(RenameOutcome::Unchanged),
    };

    let from = folder.join(original);
    let to = folder.join(&target);
    log::debug!("Renaming {} -> {}", from.display(), to.display());

    fs::rename(&from, &to).map_err(|e| ScanError::RenameError {
        from: from.display().to_string(),
        to: to.display().to_string(),
        source: e,
    })?;

    Ok(RenameOutcome::Renamed {
        from: original.to_string(),
        to: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> QrRecord {
        QrRecord::from_payload(r#"{"rb_id":101,"set_id":1,"name":"Alice","page":1}"#)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_target_stem() {
        let record =
            QrRecord::from_payload(r#"{"rb_id":101,"set_id":1,"name":"Alice Smith","page":1}"#)
                .unwrap()
                .unwrap();
        assert_eq!(target_stem(&record), "Alice_Smith_101_set1_p1");
    }

    #[test]
    fn test_target_stem_strips_path_separators() {
        let record =
            QrRecord::from_payload(r#"{"rb_id":"x","set_id":"2","name":"../a\\b","page":7}"#)
                .unwrap()
                .unwrap();
        assert_eq!(target_stem(&record), ".._a_b_x_set2_p7");
    }

    #[test]
    fn test_extension_kept_verbatim() {
        assert_eq!(extension_of("scan1.JPG"), ".JPG");
        assert_eq!(extension_of("archive.tar.jpg"), ".jpg");
        assert_eq!(extension_of("noext"), "");
    }

    #[test]
    fn test_resolve_collisions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scan1.jpg"), b"src").unwrap();
        fs::write(dir.path().join("Alice_101_set1_p1.jpg"), b"taken").unwrap();

        assert_eq!(
            resolve_target(dir.path(), "scan1.jpg", &alice()).as_deref(),
            Some("Alice_101_set1_p1_copy1.jpg")
        );

        fs::write(dir.path().join("Alice_101_set1_p1_copy1.jpg"), b"taken").unwrap();
        assert_eq!(
            resolve_target(dir.path(), "scan1.jpg", &alice()).as_deref(),
            Some("Alice_101_set1_p1_copy2.jpg")
        );
    }

    #[test]
    fn test_resolve_already_named() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Alice_101_set1_p1.jpg"), b"src").unwrap();

        assert_eq!(
            resolve_target(dir.path(), "Alice_101_set1_p1.jpg", &alice()),
            None
        );
    }

    #[test]
    fn test_resolve_stops_at_own_copy_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Alice_101_set1_p1.jpg"), b"other").unwrap();
        fs::write(dir.path().join("Alice_101_set1_p1_copy1.jpg"), b"src").unwrap();

        assert_eq!(
            resolve_target(dir.path(), "Alice_101_set1_p1_copy1.jpg", &alice()),
            None
        );
    }

    #[test]
    fn test_apply_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scan1.jpg"), b"src").unwrap();
        fs::write(dir.path().join("Alice_101_set1_p1.jpg"), b"taken").unwrap();

        let outcome = apply(dir.path(), "scan1.jpg", &alice()).unwrap();
        assert_eq!(
            outcome,
            RenameOutcome::Renamed {
                from: "scan1.jpg".to_string(),
                to: "Alice_101_set1_p1_copy1.jpg".to_string(),
            }
        );
        assert!(!dir.path().join("scan1.jpg").exists());
        assert_eq!(
            fs::read(dir.path().join("Alice_101_set1_p1.jpg")).unwrap(),
            b"taken"
        );
        assert_eq!(
            fs::read(dir.path().join("Alice_101_set1_p1_copy1.jpg")).unwrap(),
            b"src"
        );
    }
}
