//! # 自然排序
//!
//! 按"人类习惯"对文件名排序：`page2` 排在 `page10` 之前。
//!
//! 文件名被切分为交替的非数字段 / 数字段（首段总是非数字段，可能为空），
//! 数字段按数值比较，非数字段按字符串比较。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 使用
//! - 使用 `regex` 切分数字段

use regex::Regex;
use std::cmp::Ordering;

/// 排序键的一段
#[derive(Debug, Clone, PartialEq, Eq)]
enum Chunk {
    Text(String),
    /// 去掉前导零后的数字串，保证任意长度都能按数值比较
    Number(String),
}

impl Ord for Chunk {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Chunk::Number(a), Chunk::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
            // 切分结果严格交替，同一位置不会出现不同类型
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Chunk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 自然排序键，不同文件名的键相等时回退到原始字符串比较
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey {
    chunks: Vec<Chunk>,
    raw: String,
}

/// 自然排序器，持有编译好的数字段正则
pub struct NaturalSorter {
    digits: Regex,
}

impl NaturalSorter {
    pub fn new() -> Self {
        Self {
            digits: Regex::new(r"[0-9]+").expect("digit-run regex is valid"),
        }
    }

    /// 构造排序键
    pub fn key(&self, text: &str) -> NaturalKey {
        let mut chunks = Vec::new();
        let mut last = 0;

        for m in self.digits.find_iter(text) {
            chunks.push(Chunk::Text(text[last..m.start()].to_string()));
            let trimmed = m.as_str().trim_start_matches('0');
            chunks.push(Chunk::Number(trimmed.to_string()));
            last = m.end();
        }
        chunks.push(Chunk::Text(text[last..].to_string()));

        NaturalKey {
            chunks,
            raw: text.to_string(),
        }
    }

    /// 原地自然排序
    pub fn sort(&self, names: &mut [String]) {
        names.sort_by_cached_key(|name| self.key(name));
    }
}

impl Default for NaturalSorter {
    fn default() -> Self {
        Self::new()
    }
}
