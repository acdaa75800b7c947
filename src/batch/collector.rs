//! # 文件收集器
//!
//! 在扫描目录中按模式收集待处理图像文件。
//!
//! ## 功能
//! - glob 模式匹配，大小写不敏感（`*.jpg` 同时匹配 `a.JPG`）
//! - 只看目录第一层，不递归
//! - 结果按自然顺序排序
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名
//! - 使用 `batch/natural.rs` 排序

use super::natural::NaturalSorter;
use crate::error::{Result, ScanError};

use glob::{MatchOptions, Pattern};
use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 扫描目录
    folder: PathBuf,
    /// 原始匹配模式
    pattern: String,
}

impl FileCollector {
    /// 创建新的文件收集器，默认匹配所有文件
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            pattern: "*".to_string(),
        }
    }

    /// 设置匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// 收集所有匹配的文件名（不含目录部分），按自然顺序排列
    pub fn collect(&self) -> Result<Vec<String>> {
        if !self.folder.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: self.folder.display().to_string(),
            });
        }

        let expanded = case_insensitive_pattern(&self.pattern);
        let glob_pattern = Pattern::new(&expanded).map_err(|e| ScanError::InvalidPattern {
            pattern: self.pattern.clone(),
            reason: e.to_string(),
        })?;
        log::debug!(
            "Listing '{}' in {} as '{}'",
            self.pattern,
            self.folder.display(),
            expanded
        );

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.folder)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            // 跟随符号链接
            if !entry.path().is_file() {
                continue;
            }

            let name = match entry.file_name().to_str() {
                Some(name) => name,
                None => {
                    log::debug!("Skipping non UTF-8 file name: {:?}", entry.file_name());
                    continue;
                }
            };

            if glob_pattern.matches_with(name, Self::match_options()) {
                names.push(name.to_string());
            }
        }

        NaturalSorter::new().sort(&mut names);
        log::debug!("Matched {} file(s)", names.len());
        Ok(names)
    }

    /// 大小写已经展开到模式里，这里按字面匹配；隐藏文件需显式的 `.`
    fn match_options() -> MatchOptions {
        MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: true,
        }
    }
}

/// 将模式中的每个字母展开成同时匹配大小写的括号表达式
///
/// `*.jpg` → `*.[jJ][pP][gG]`
pub fn case_insensitive_pattern(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| {
            if c.is_alphabetic() {
                let lower: String = c.to_lowercase().collect();
                let upper: String = c.to_uppercase().collect();
                format!("[{}{}]", lower, upper)
            } else {
                c.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_case_insensitive_pattern() {
        assert_eq!(case_insensitive_pattern("*.jpg"), "*.[jJ][pP][gG]");
        assert_eq!(case_insensitive_pattern("p?_1.JPG"), "[pP]?_1.[jJ][pP][gG]");
    }

    #[test]
    fn test_expanded_pattern_matches_any_case() {
        let pattern = Pattern::new(&case_insensitive_pattern("*.jpg")).unwrap();
        for name in ["Page1.JPG", "page1.jpg", "PAGE1.jpg", "scan.Jpg"] {
            assert!(pattern.matches(name), "{} should match", name);
        }
        assert!(!pattern.matches("page1.jpeg"));
        assert!(!pattern.matches("page1.png"));
    }

    #[test]
    fn test_collect_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["page10.Jpg", "page2.jpg", "page1.JPG", "notes.txt", ".hidden.jpg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("folder.jpg")).unwrap();

        let files = FileCollector::new(dir.path())
            .with_pattern("*.jpg")
            .collect()
            .unwrap();

        assert_eq!(files, vec!["page1.JPG", "page2.jpg", "page10.Jpg"]);
    }

    #[test]
    fn test_collect_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = FileCollector::new(&missing)
            .with_pattern("*.jpg")
            .collect()
            .unwrap_err();
        assert!(matches!(err, ScanError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_collect_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let files = FileCollector::new(dir.path())
            .with_pattern("*.jpg")
            .collect()
            .unwrap();
        assert!(files.is_empty());
    }
}
