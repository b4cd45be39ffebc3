//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 装配过程只有两类真正的错误：单个属性无法转换（[`ParseError`]，可恢复、逐条收集）
//!   与结构性失控（[`FatalConfigError`]，立即中止）；
//! - 其余不规则输入（未知元素、未知属性、缺失或未闭合的根节点）不构成错误，退化为默认值。
//!
//! ## 设计要求（What）
//! - 枚举型错误派生 `thiserror::Error`，文案使用小写英文，便于日志检索；
//! - [`ParseError`] 携带元素名、属性名与原始文本，调用方无需回查输入即可定位问题。

use core::fmt;

use crate::schema::Namespace;

/// 单个属性值转换失败的具体原因。
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("expected a floating-point literal")]
    InvalidFloat,
    #[error("expected an integer literal")]
    InvalidInteger,
    #[error("expected one of T, F, true, false, .true., .false., 1, 0")]
    InvalidBoolean,
    #[error("expected exactly 3 whitespace-separated numbers, found {found}")]
    VectorArity { found: usize },
    #[error("component {index} of the vector is not a floating-point literal")]
    VectorComponent { index: usize },
    #[error("unknown verbosity level, expected one of ERROR, SILENT, NORMAL, VERBOSE, NERD, ANAL")]
    UnknownVerbosity,
    #[error("element is not a known namespace")]
    UnknownElement,
    #[error("attribute is not defined for this namespace")]
    UnknownAttribute,
}

/// 可恢复的逐属性诊断。
///
/// ### 契约说明（What）
/// - `element`：出错属性所在的元素名，通常即命名空间名；
/// - `attribute`：属性名，针对整个元素的诊断（未知元素）为 `None`；
/// - `raw`：原始文本，未知元素时为空串；
/// - 该错误从不终止装配：对应字段保持先前值，错误进入 [`BuildReport`](crate::BuildReport)。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub element: String,
    pub attribute: Option<String>,
    pub raw: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn attribute(
        namespace: Namespace,
        attribute: &str,
        raw: &str,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            element: namespace.as_str().to_owned(),
            attribute: Some(attribute.to_owned()),
            raw: raw.to_owned(),
            kind,
        }
    }

    pub(crate) fn unknown_attribute(element: &str, attribute: &str, raw: &str) -> Self {
        Self {
            element: element.to_owned(),
            attribute: Some(attribute.to_owned()),
            raw: raw.to_owned(),
            kind: ParseErrorKind::UnknownAttribute,
        }
    }

    pub(crate) fn unknown_element(element: &str) -> Self {
        Self {
            element: element.to_owned(),
            attribute: None,
            raw: String::new(),
            kind: ParseErrorKind::UnknownElement,
        }
    }

    /// 返回诊断所指的命名空间，未知元素返回 `None`。
    pub fn namespace(&self) -> Option<Namespace> {
        Namespace::parse(&self.element)
    }

    /// 返回 `namespace_attribute` 形式的完全限定键；元素级诊断仅返回元素名。
    pub fn qualified_key(&self) -> String {
        match &self.attribute {
            Some(attribute) => format!("{}_{}", self.element, attribute),
            None => self.element.clone(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attribute) => write!(
                f,
                "cannot apply `{}` in <{}> from {:?}: {}",
                attribute, self.element, self.raw, self.kind
            ),
            None => write!(f, "cannot apply <{}>: {}", self.element, self.kind),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// 不可恢复的结构性错误，出现即中止整个装配。
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FatalConfigError {
    /// 可打印属性列表超过上限，文档结构不可信。
    #[error("printable property list holds {count} entries, exceeding the maximum of {max}")]
    PropertyListTooLong { count: usize, max: usize },
}

/// [`CrackParamsBuilder::build`](crate::CrackParamsBuilder::build) 的失败结果。
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error(transparent)]
    Fatal(#[from] FatalConfigError),
    /// 严格模式下存在任意诊断，整体拒绝。
    #[error("strict build rejected {} diagnostic(s)", .diagnostics.len())]
    Rejected { diagnostics: Vec<ParseError> },
}

/// Schema 构造期的一致性错误。
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("fully-qualified key `{key}` is defined more than once")]
    DuplicateKey { key: String },
    #[error("namespace `{namespace}` is declared more than once")]
    DuplicateNamespace { namespace: Namespace },
}

const _: fn() = || {
    fn assert_error_traits<T: std::error::Error + Send + Sync + 'static>() {}

    assert_error_traits::<ParseError>();
    assert_error_traits::<FatalConfigError>();
    assert_error_traits::<BuildError>();
    assert_error_traits::<SchemaError>();
};
