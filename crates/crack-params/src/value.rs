use core::fmt::{self, Write as _};

use crate::verbosity::Verbosity;

/// 字段的语义类型。
///
/// - `Vector3` 仅用于 `selection_ellipse`；
/// - `PropertyList` 仅用于 `io_print_properties`；
/// - `Verbosity` 仅用于 `io_verbosity`。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Float,
    Integer,
    Boolean,
    Vector3,
    PropertyList,
    Verbosity,
}

impl FieldKind {
    /// 返回类型的稳定字符串描述。
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Vector3 => "vector3",
            Self::PropertyList => "property_list",
            Self::Verbosity => "verbosity",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema 中登记的默认值。
///
/// ### 设计目标（Why）
/// - 默认值表是静态常量，需要在 `const` 上下文中构造，因此文本与列表以 `&'static` 借用形式存放；
/// - 装配时通过 [`to_value`](Self::to_value) 转换为拥有型的 [`FieldValue`]。
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DefaultValue {
    Text(&'static str),
    Float(f64),
    Integer(i64),
    Boolean(bool),
    Vector3([f64; 3]),
    PropertyList(&'static [&'static str]),
    Verbosity(Verbosity),
}

impl DefaultValue {
    /// 返回默认值对应的字段类型。
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Float(_) => FieldKind::Float,
            Self::Integer(_) => FieldKind::Integer,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Vector3(_) => FieldKind::Vector3,
            Self::PropertyList(_) => FieldKind::PropertyList,
            Self::Verbosity(_) => FieldKind::Verbosity,
        }
    }

    /// 转换为拥有型字段值。
    pub fn to_value(&self) -> FieldValue {
        match *self {
            Self::Text(text) => FieldValue::Text(text.to_owned()),
            Self::Float(value) => FieldValue::Float(value),
            Self::Integer(value) => FieldValue::Integer(value),
            Self::Boolean(value) => FieldValue::Boolean(value),
            Self::Vector3(value) => FieldValue::Vector3(value),
            Self::PropertyList(items) => {
                FieldValue::PropertyList(items.iter().map(|item| (*item).to_owned()).collect())
            }
            Self::Verbosity(level) => FieldValue::Verbosity(level),
        }
    }
}

/// 运行期的字段值，装配与渲染均以此为交换格式。
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
    Vector3([f64; 3]),
    PropertyList(Vec<String>),
    Verbosity(Verbosity),
}

impl FieldValue {
    /// 返回值对应的字段类型。
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Float(_) => FieldKind::Float,
            Self::Integer(_) => FieldKind::Integer,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Vector3(_) => FieldKind::Vector3,
            Self::PropertyList(_) => FieldKind::PropertyList,
            Self::Verbosity(_) => FieldKind::Verbosity,
        }
    }
}

/// 渲染格式。
///
/// ### 契约说明（What）
/// - 浮点数采用最短往返表示并保留小数点（`200.0`、`1e-6`）；
/// - 布尔值输出 `T` / `F`；
/// - 文本中的换行等控制字符按转义形式输出（`\n`、`\r`、`\u{1b}`），保证每个字段恰好占一行；
/// - 向量与列表以单个空格连接各元素；
/// - 详尽等级输出符号名。
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write_escaped(f, text),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => f.write_str(if *value { "T" } else { "F" }),
            Self::Vector3([x, y, z]) => write!(f, "{x:?} {y:?} {z:?}"),
            Self::PropertyList(items) => f.write_str(&items.join(" ")),
            Self::Verbosity(level) => f.write_str(level.encode()),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_char('\t')?,
            ch if ch.is_control() => write!(f, "{}", ch.escape_unicode())?,
            ch => f.write_char(ch)?,
        }
    }
    Ok(())
}

/// 强类型字段与 [`FieldValue`] 之间的桥接。
///
/// 由命名空间宏为每个字段调用；类型不匹配时原样退回传入的值。
pub(crate) trait FieldSlot: Sized {
    fn to_value(&self) -> FieldValue;
    fn from_value(value: FieldValue) -> Result<Self, FieldValue>;
}

macro_rules! impl_field_slot {
    ($ty:ty, $variant:ident) => {
        impl FieldSlot for $ty {
            fn to_value(&self) -> FieldValue {
                FieldValue::$variant(self.clone())
            }

            fn from_value(value: FieldValue) -> Result<Self, FieldValue> {
                match value {
                    FieldValue::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

impl_field_slot!(String, Text);
impl_field_slot!(f64, Float);
impl_field_slot!(i64, Integer);
impl_field_slot!(bool, Boolean);
impl_field_slot!([f64; 3], Vector3);
impl_field_slot!(Vec<String>, PropertyList);
impl_field_slot!(Verbosity, Verbosity);
