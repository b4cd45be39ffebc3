use core::{fmt, str::FromStr};

use serde::Serialize;

/// 输出详尽程度的有序等级。
///
/// ### 设计目的（Why）
/// - 旧版输入文档以符号名书写等级（`io_verbosity="VERBOSE"`），运行时按序比较；
///   封闭枚举让“未知符号名”在解码阶段即被拒绝，而不是悄悄退化为默认等级。
///
/// ### 契约定义（What）
/// - 六个等级按详尽程度递增：`ERROR < SILENT < NORMAL < VERBOSE < NERD < ANAL`；
/// - [`ordinal`](Self::ordinal) 从 `0` 开始编号，`VERBOSE` 对应 `3`；
/// - [`decode`](Self::decode) 与 [`encode`](Self::encode) 互为逆映射，符号名区分大小写。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Verbosity {
    Error = 0,
    Silent = 1,
    Normal = 2,
    Verbose = 3,
    Nerd = 4,
    Anal = 5,
}

impl Verbosity {
    /// 按详尽程度递增排列的全部等级。
    pub const ALL: [Verbosity; 6] = [
        Self::Error,
        Self::Silent,
        Self::Normal,
        Self::Verbose,
        Self::Nerd,
        Self::Anal,
    ];

    /// 返回等级序号。
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// 由序号还原等级，越界返回 `None`。
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Error),
            1 => Some(Self::Silent),
            2 => Some(Self::Normal),
            3 => Some(Self::Verbose),
            4 => Some(Self::Nerd),
            5 => Some(Self::Anal),
            _ => None,
        }
    }

    /// 编码为稳定的符号名，供渲染器输出。
    #[inline]
    pub const fn encode(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Silent => "SILENT",
            Self::Normal => "NORMAL",
            Self::Verbose => "VERBOSE",
            Self::Nerd => "NERD",
            Self::Anal => "ANAL",
        }
    }

    /// 解码符号名。
    ///
    /// ### 契约（What）
    /// - **输入**：已去除首尾空白的符号名；匹配严格区分大小写，`"verbose"` 不被接受；
    /// - **输出**：命中时返回对应等级，否则返回 `None`，由调用方转换为带上下文的解析错误。
    pub fn decode(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.encode() == name)
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode())
    }
}

/// 未知符号名的解码错误。
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown verbosity level `{0}`")]
pub struct UnknownVerbosity(pub String);

impl FromStr for Verbosity {
    type Err = UnknownVerbosity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s).ok_or_else(|| UnknownVerbosity(s.to_owned()))
    }
}
