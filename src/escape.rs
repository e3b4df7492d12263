//! 转义变换
//!
//! 把任意文本转换为只含字母表字符的串：危险字符替换为以 `Q` 开头的双字符记号，
//! `Q` 自身先转义为 `QQ`，因此后续规则产生的记号不会被再次转义。
//!
//! 规则按声明顺序逐条做全局替换；反向时在每个位置取最长匹配的记号。

use crate::charset::Alphabet;
use crate::error::{Error, Result};

/// 默认转义表 `(literal, token)`，顺序有意义
pub const DEFAULT_ESCAPES: [(&str, &str); 21] = [
    ("Q", "QQ"),
    ("q", "QQ"),
    (" ", "QX"),
    ("\t", "QX"),
    ("\n", "QX"),
    ("!", "QB"),
    (".", "QD"),
    (",", "QC"),
    ("?", "QM"),
    ("-", "QH"),
    ("_", "QN"),
    (":", "QK"),
    ("@", "QA"),
    ("#", "QP"),
    ("&", "QE"),
    ("=", "QV"),
    ("+", "QY"),
    ("'", "QJ"),
    ("\"", "QW"),
    ("(", "QR"),
    (")", "QT"),
];

/// 单条转义规则
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct EscapeRule {
    pub literal: String,
    pub token: String,
}

impl EscapeRule {
    #[must_use]
    pub fn new(literal: &str, token: &str) -> Self {
        Self {
            literal: literal.to_string(),
            token: token.to_string(),
        }
    }
}

/// [`DEFAULT_ESCAPES`] 的规则形式
#[must_use]
pub fn default_rules() -> Vec<EscapeRule> {
    DEFAULT_ESCAPES
        .iter()
        .map(|(literal, token)| EscapeRule::new(literal, token))
        .collect()
}

/// `literal` 在任何文本中的匹配是否可能与 `token` 的某次出现重叠.
fn overlaps(literal: &str, token: &str) -> bool {
    if token.contains(literal) || literal.contains(token) {
        return true;
    }
    token.char_indices().skip(1).any(|(i, _)| {
        let (head, tail) = token.split_at(i);
        literal.ends_with(head) || literal.starts_with(tail)
    })
}

/// 有序转义表及其反向映射.
#[derive(Debug, Clone)]
pub struct EscapeTable {
    rules: Vec<EscapeRule>,
    /// `(token, literal)`，按记号长度降序；同一记号只保留最先声明的字面量
    reverse: Vec<(String, String)>,
}

impl EscapeTable {
    /// 构造并校验转义表.
    ///
    /// # Errors
    /// 以下情况返回 [`Error::InvalidEscapeTable`]：
    /// - 字面量或记号为空，或记号含字母表外字符
    /// - 记号的首字符没有在此规则或之前的规则中被自转义
    /// - 后面规则的字面量能与前面规则的记号重叠：落在记号内、包含记号、
    ///   或跨过记号的首尾边界（会破坏已生成的记号）
    /// - 某记号是后面另一记号的真前缀
    pub fn new(alphabet: &Alphabet, rules: Vec<EscapeRule>) -> Result<Self> {
        for (j, rule) in rules.iter().enumerate() {
            if rule.literal.is_empty() || rule.token.is_empty() {
                return Err(Error::InvalidEscapeTable(format!(
                    "rule #{j} has an empty literal or token"
                )));
            }
            if let Some(c) = rule.token.chars().find(|&c| !alphabet.contains(c)) {
                return Err(Error::InvalidEscapeTable(format!(
                    "token '{}' contains '{c}', which is not an alphabet symbol",
                    rule.token
                )));
            }
            let introducer = rule.token.chars().take(1).collect::<String>();
            if !rules.iter().take(j + 1).any(|r| r.literal == introducer) {
                return Err(Error::InvalidEscapeTable(format!(
                    "token '{}' starts with '{introducer}', which is not escaped by rule #{j} or earlier",
                    rule.token
                )));
            }
            for (i, earlier) in rules.iter().take(j).enumerate() {
                if overlaps(&rule.literal, &earlier.token) {
                    return Err(Error::InvalidEscapeTable(format!(
                        "literal {:?} of rule #{j} can match across token '{}' of rule #{i}",
                        rule.literal, earlier.token
                    )));
                }
                if earlier.token != rule.token && rule.token.starts_with(earlier.token.as_str()) {
                    return Err(Error::InvalidEscapeTable(format!(
                        "token '{}' of rule #{i} is a prefix of later token '{}'",
                        earlier.token, rule.token
                    )));
                }
            }
        }

        Ok(Self::from_rules(rules))
    }

    /// 默认表 [`DEFAULT_ESCAPES`]
    #[must_use]
    pub fn standard() -> Self {
        Self::from_rules(default_rules())
    }

    fn from_rules(rules: Vec<EscapeRule>) -> Self {
        let mut reverse: Vec<(String, String)> = Vec::with_capacity(rules.len());
        for rule in &rules {
            if !reverse.iter().any(|(token, _)| *token == rule.token) {
                reverse.push((rule.token.clone(), rule.literal.clone()));
            }
        }
        // 稳定排序：等长记号保持声明顺序
        reverse.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self { rules, reverse }
    }

    /// 正向转义：按声明顺序逐条全局替换.
    #[must_use]
    pub fn forward(&self, text: &str) -> String {
        self.rules.iter().fold(text.to_string(), |acc, rule| {
            if acc.contains(rule.literal.as_str()) {
                acc.replace(rule.literal.as_str(), &rule.token)
            } else {
                acc
            }
        })
    }

    /// 反向转义：每个位置取最长匹配记号，未匹配字符原样保留.
    ///
    /// 共享记号的字面量只能还原为最先声明者（例如 `q` 还原为 `Q`）。
    #[must_use]
    pub fn reverse(&self, escaped: &str) -> String {
        let mut out = String::with_capacity(escaped.len());
        let mut rest = escaped;
        while !rest.is_empty() {
            let matched = self.reverse.iter().find_map(|(token, literal)| {
                rest.strip_prefix(token.as_str()).map(|tail| (literal, tail))
            });
            if let Some((literal, tail)) = matched {
                out.push_str(literal);
                rest = tail;
            } else {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
        out
    }

    #[must_use]
    pub fn rules(&self) -> &[EscapeRule] {
        &self.rules
    }
}
