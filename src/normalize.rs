//! 输入规范化（只用于解码路径）
//!
//! 顺序固定：
//! 1. 提取有效载荷（去掉 URL 协议头等噪声）
//! 2. 正向转义（标点/空白变成字母表内的记号）
//! 3. 逐字符：去掉分隔符 -> 大写（哨兵除外）-> 形近字符替换 -> 过滤非字母数字
//!
//! 转义必须在过滤之前，形近替换必须在大小写折叠之后（别名键区分大小写）。

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::charset::{AliasTable, Alphabet};
use crate::escape::EscapeTable;

/// URL 载荷的拼装方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum UrlMode {
    /// 只取最后一个非空路径段（没有路径时退回主机名）
    LastSegment,
    /// 主机名 + 路径段
    #[default]
    HostPath,
    /// 主机名 + 路径段 + 查询串 + 片段
    Full,
}

/// 规范化选项
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct NormalizeOptions {
    pub url_mode: UrlMode,
    /// URL 各部分之间的连接符
    pub joiner: String,
    /// 直接丢弃的分隔符集合
    pub separators: String,
    /// 丢弃所有非 ASCII 字母数字
    pub keep_alphanumeric: bool,
    /// 对载荷做百分号解码
    pub percent_decode: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            url_mode: UrlMode::HostPath,
            joiner: "/".to_string(),
            separators: "/".to_string(),
            keep_alphanumeric: true,
            percent_decode: true,
        }
    }
}

/// URL 拆分结果（各部分仍是原始编码形式）
#[derive(Debug, Default)]
struct UrlParts<'a> {
    host: Cow<'a, str>,
    path: Cow<'a, str>,
    query: Option<Cow<'a, str>>,
    fragment: Option<Cow<'a, str>>,
}

impl<'a> UrlParts<'a> {
    fn from_url(url: &Url) -> UrlParts<'static> {
        UrlParts {
            host: Cow::Owned(url.host_str().unwrap_or_default().to_string()),
            path: Cow::Owned(url.path().to_string()),
            query: url.query().map(|q| Cow::Owned(q.to_string())),
            fragment: url.fragment().map(|f| Cow::Owned(f.to_string())),
        }
    }

    /// 无协议头的 `host/path?query#fragment`，手工拆分，
    /// 不经过 URL 解析器，避免 `3.14` 之类被当成 IPv4 改写
    fn split_host_like(s: &'a str) -> Self {
        let (rest, fragment) = match s.split_once('#') {
            Some((rest, fragment)) => (rest, Some(Cow::Borrowed(fragment))),
            None => (s, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(Cow::Borrowed(query))),
            None => (rest, None),
        };
        let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
        Self {
            host: Cow::Borrowed(strip_port(host)),
            path: Cow::Borrowed(path),
            query,
            fragment,
        }
    }

    fn assemble(&self, options: &NormalizeOptions) -> String {
        let host = decode_component(&self.host, options);
        let mut segments: Vec<String> = self
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| decode_component(s, options))
            .collect();

        let pieces: Vec<String> = match options.url_mode {
            UrlMode::LastSegment => return segments.pop().unwrap_or(host),
            UrlMode::HostPath => std::iter::once(host).chain(segments).collect(),
            UrlMode::Full => std::iter::once(host)
                .chain(segments)
                .chain(self.query.iter().map(|q| decode_component(q, options)))
                .chain(self.fragment.iter().map(|f| decode_component(f, options)))
                .collect(),
        };

        pieces
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(&options.joiner)
    }
}

/// 去掉 `:port`（冒号后全是数字才算端口），与 URL 解析结果一致
fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}

/// 百分号解码；结果不是合法 UTF-8 时保留原文
fn decode_component(s: &str, options: &NormalizeOptions) -> String {
    if !options.percent_decode || !s.contains('%') {
        return s.to_string();
    }
    percent_decode_str(s)
        .decode_utf8()
        .map_or_else(|_| s.to_string(), Cow::into_owned)
}

/// 第一个 `/`、`?`、`#` 之前的部分含 `.`、不含空白、且不以 `.` 开头或结尾
fn looks_like_host(s: &str) -> bool {
    let head = s.split(['/', '?', '#']).next().unwrap_or_default();
    head.contains('.')
        && !head.starts_with('.')
        && !head.ends_with('.')
        && !head.chars().any(char::is_whitespace)
}

/// 从自由输入中提取载荷.
///
/// - 含 `://`：按 URL 解析，按 [`UrlMode`] 拼装；解析失败返回去空白后的原串
/// - 不含协议但形似主机名：同样的主机 + 路径逻辑
/// - 其它：去空白（并按配置做百分号解码）后原样返回
#[must_use]
pub fn extract_payload(raw: &str, options: &NormalizeOptions) -> String {
    let trimmed = raw.trim();
    if trimmed.contains("://") {
        return Url::parse(trimmed).map_or_else(
            |_| trimmed.to_string(),
            |url| UrlParts::from_url(&url).assemble(options),
        );
    }
    if looks_like_host(trimmed) {
        return UrlParts::split_host_like(trimmed).assemble(options);
    }
    decode_component(trimmed, options)
}

/// 大小写折叠 + 形近字符替换；`strip` 时同时去掉分隔符并过滤非字母数字.
fn fold_with(
    input: &str,
    alphabet: &Alphabet,
    aliases: &AliasTable,
    options: &NormalizeOptions,
    strip: bool,
) -> String {
    let sentinel = alphabet.sentinel();
    input
        .chars()
        .filter(|&c| !strip || !options.separators.contains(c))
        .map(|c| {
            if Some(c) == sentinel {
                c
            } else {
                c.to_ascii_uppercase()
            }
        })
        .map(|c| aliases.apply(c))
        .filter(|c| !strip || !options.keep_alphanumeric || c.is_ascii_alphanumeric())
        .collect()
}

/// 规范化第 3 步：去分隔符、大写（哨兵除外）、形近替换、过滤.
#[must_use]
pub fn fold(
    input: &str,
    alphabet: &Alphabet,
    aliases: &AliasTable,
    options: &NormalizeOptions,
) -> String {
    fold_with(input, alphabet, aliases, options, true)
}

/// 已经是编码串的输入只做大小写和形近折叠，其余字符留给解码策略处理.
#[must_use]
pub fn fold_code(input: &str, alphabet: &Alphabet, aliases: &AliasTable) -> String {
    fold_with(input, alphabet, aliases, &NormalizeOptions::default(), false)
}

/// 完整规范化：提取载荷 -> 正向转义 -> 折叠过滤.
#[must_use]
pub fn normalize_for_decode(
    raw: &str,
    escapes: &EscapeTable,
    alphabet: &Alphabet,
    aliases: &AliasTable,
    options: &NormalizeOptions,
) -> String {
    let payload = extract_payload(raw, options);
    let escaped = escapes.forward(&payload);
    fold(&escaped, alphabet, aliases, options)
}
