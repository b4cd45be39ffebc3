//! 原始属性文本到字段语义类型的转换。
//!
//! ## 契约概览（What）
//! - 文本：仅去除首尾空白，不做其他校验；
//! - 浮点：去除空白后按十进制浮点字面量解析，兼容旧格式的 `d`/`D` 指数标记（`1.0d-3`）；
//! - 整数：可选符号加十进制数字，`"10.0"` 不是合法整数；
//! - 布尔：大小写不敏感地接受 `t`、`true`、`.true.`、`1` 与 `f`、`false`、`.false.`、`0`；
//! - 三维向量：恰好三个以空白分隔的浮点字面量；
//! - 详尽等级与属性列表分别委托 [`Verbosity::decode`] 与
//!   [`normalize_property_list`](crate::properties::normalize_property_list)。
//!
//! 转换失败区分两类：[`CoerceError::Parse`] 仅影响当前属性，[`CoerceError::Fatal`] 终止装配。

use crate::{
    error::{FatalConfigError, ParseErrorKind},
    properties,
    value::{FieldKind, FieldValue},
    verbosity::Verbosity,
};

/// 单次转换的失败原因。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoerceError {
    Parse(ParseErrorKind),
    Fatal(FatalConfigError),
}

impl From<ParseErrorKind> for CoerceError {
    fn from(kind: ParseErrorKind) -> Self {
        Self::Parse(kind)
    }
}

impl From<FatalConfigError> for CoerceError {
    fn from(error: FatalConfigError) -> Self {
        Self::Fatal(error)
    }
}

/// 将原始文本转换为 `kind` 指定的字段值。
pub fn coerce(raw: &str, kind: FieldKind) -> Result<FieldValue, CoerceError> {
    let value = match kind {
        FieldKind::Text => FieldValue::Text(raw.trim().to_owned()),
        FieldKind::Float => FieldValue::Float(parse_float(raw)?),
        FieldKind::Integer => FieldValue::Integer(parse_integer(raw)?),
        FieldKind::Boolean => FieldValue::Boolean(parse_boolean(raw)?),
        FieldKind::Vector3 => FieldValue::Vector3(parse_vector3(raw)?),
        FieldKind::Verbosity => FieldValue::Verbosity(
            Verbosity::decode(raw.trim()).ok_or(ParseErrorKind::UnknownVerbosity)?,
        ),
        FieldKind::PropertyList => {
            FieldValue::PropertyList(properties::normalize_property_list(raw)?)
        }
    };
    Ok(value)
}

/// 解析浮点字面量。
pub fn parse_float(raw: &str) -> Result<f64, ParseErrorKind> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(ParseErrorKind::InvalidFloat);
    }
    let parsed = token.parse::<f64>().ok().or_else(|| {
        // 旧格式双精度字面量以 d/D 作为指数标记。
        let markers = token.bytes().filter(|b| b.eq_ignore_ascii_case(&b'd')).count();
        (markers == 1)
            .then(|| token.replace(['d', 'D'], "e"))
            .and_then(|rewritten| rewritten.parse::<f64>().ok())
    });
    // `inf`、`NaN` 与溢出值不是十进制字面量。
    parsed
        .filter(|value| value.is_finite())
        .ok_or(ParseErrorKind::InvalidFloat)
}

/// 解析整数字面量。
pub fn parse_integer(raw: &str) -> Result<i64, ParseErrorKind> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ParseErrorKind::InvalidInteger)
}

/// 解析布尔字面量。
pub fn parse_boolean(raw: &str) -> Result<bool, ParseErrorKind> {
    let token = raw.trim().to_ascii_lowercase();
    match token.as_str() {
        "t" | "true" | ".true." | "1" => Ok(true),
        "f" | "false" | ".false." | "0" => Ok(false),
        _ => Err(ParseErrorKind::InvalidBoolean),
    }
}

/// 解析三分量向量。
pub fn parse_vector3(raw: &str) -> Result<[f64; 3], ParseErrorKind> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let &[x, y, z] = tokens.as_slice() else {
        return Err(ParseErrorKind::VectorArity {
            found: tokens.len(),
        });
    };
    let component = |index: usize, token: &str| {
        parse_float(token).map_err(|_| ParseErrorKind::VectorComponent { index })
    };
    Ok([component(0, x)?, component(1, y)?, component(2, z)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed_only() {
        assert_eq!(
            coerce("  IP SW  ", FieldKind::Text),
            Ok(FieldValue::Text("IP SW".to_owned()))
        );
        assert_eq!(coerce("", FieldKind::Text), Ok(FieldValue::Text(String::new())));
    }

    #[test]
    fn floats_accept_standard_and_legacy_exponents() {
        assert_eq!(parse_float(" 2.5 "), Ok(2.5));
        assert_eq!(parse_float("1e-3"), Ok(1e-3));
        assert_eq!(parse_float("1.0d-3"), Ok(1e-3));
        assert_eq!(parse_float("2D2"), Ok(200.0));
        assert_eq!(parse_float("7"), Ok(7.0));
    }

    #[test]
    fn floats_reject_partial_tokens() {
        for raw in ["abc", "", "1.0x", "1 2", "1d2d3", "d", "inf", "NaN", "1e400"] {
            assert_eq!(parse_float(raw), Err(ParseErrorKind::InvalidFloat), "{raw:?}");
        }
    }

    #[test]
    fn integers_require_whole_decimal_tokens() {
        assert_eq!(parse_integer(" -12 "), Ok(-12));
        assert_eq!(parse_integer("+4"), Ok(4));
        assert_eq!(parse_integer("10.0"), Err(ParseErrorKind::InvalidInteger));
        assert_eq!(parse_integer("ten"), Err(ParseErrorKind::InvalidInteger));
    }

    /// 验证：布尔字面量的完整接受集合。
    #[test]
    fn boolean_literals() {
        for raw in ["T", "t", "true", "TRUE", ".true.", ".TRUE.", "1", " T "] {
            assert_eq!(parse_boolean(raw), Ok(true), "{raw:?}");
        }
        for raw in ["F", "f", "false", "False", ".false.", "0"] {
            assert_eq!(parse_boolean(raw), Ok(false), "{raw:?}");
        }
        for raw in ["maybe", "yes", "", "2"] {
            assert_eq!(parse_boolean(raw), Err(ParseErrorKind::InvalidBoolean), "{raw:?}");
        }
    }

    #[test]
    fn vectors_need_exactly_three_numbers() {
        assert_eq!(parse_vector3(" 8.0  5.0\t10.0 "), Ok([8.0, 5.0, 10.0]));
        assert_eq!(
            parse_vector3("1 2"),
            Err(ParseErrorKind::VectorArity { found: 2 })
        );
        assert_eq!(
            parse_vector3("1 2 3 4"),
            Err(ParseErrorKind::VectorArity { found: 4 })
        );
        assert_eq!(
            parse_vector3("1 x 3"),
            Err(ParseErrorKind::VectorComponent { index: 1 })
        );
    }

    #[test]
    fn special_kinds_delegate_to_codecs() {
        assert_eq!(
            coerce(" NERD ", FieldKind::Verbosity),
            Ok(FieldValue::Verbosity(Verbosity::Nerd))
        );
        assert_eq!(
            coerce("verbose", FieldKind::Verbosity),
            Err(CoerceError::Parse(ParseErrorKind::UnknownVerbosity))
        );
        assert_eq!(
            coerce("pos:nn", FieldKind::PropertyList),
            Ok(FieldValue::PropertyList(vec![
                "species".to_owned(),
                "pos".to_owned(),
                "nn".to_owned(),
            ]))
        );
    }
}
