//! 命名空间声明宏。
//!
//! - 一张声明表同时生成强类型结构体、Schema 字段表与默认值，三者不会彼此偏离；
//! - 字段名默认即属性名，属性名不符合 Rust 命名习惯时以 `as "Attr"` 显式给出。

/// 字段类型标签到 Rust 类型的映射。
macro_rules! field_type {
    (Text) => { String };
    (Float) => { f64 };
    (Integer) => { i64 };
    (Boolean) => { bool };
    (Vector3) => { [f64; 3] };
    (PropertyList) => { Vec<String> };
    (Verbosity) => { $crate::verbosity::Verbosity };
}

/// 由常量默认值构造拥有型字段初值。
macro_rules! field_default {
    (Text, $default:expr) => {
        String::from($default)
    };
    (PropertyList, $default:expr) => {
        $default.iter().map(|item| String::from(*item)).collect()
    };
    ($kind:ident, $default:expr) => {
        $default
    };
}

/// 返回字段对应的属性名。
macro_rules! attr_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $attr:literal) => {
        $attr
    };
}

/// 声明一个参数命名空间。
///
/// # 展开结果（How）
/// - `pub struct $section`：每个字段一个公开成员，派生 `Serialize`，序列化名即属性名；
/// - `$section::NAMESPACE` 与 `$section::FIELDS`：供 [`Schema`](crate::schema::Schema) 登记；
/// - `get` / `assign`：按属性名读写 [`FieldValue`](crate::value::FieldValue)；
/// - `Default`：逐字段取声明表中的默认值。
///
/// # 契约说明（What）
/// - `$kind` 取 `Text`、`Float`、`Integer`、`Boolean`、`Vector3`、`PropertyList`、`Verbosity` 之一；
/// - `Float` 默认值必须写成浮点字面量（`200.0`），否则 `DefaultValue::Float` 无法通过类型检查。
macro_rules! namespace_section {
    (
        $(#[$meta:meta])*
        pub struct $section:ident for $namespace:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident $(as $attr:literal)? : $kind:ident = $default:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, serde::Serialize)]
        pub struct $section {
            $(
                $(#[doc = $doc])*
                $(#[serde(rename = $attr)])?
                pub $field: $crate::schema::macros::field_type!($kind),
            )+
        }

        impl $section {
            /// 本结构体对应的命名空间。
            pub const NAMESPACE: $crate::schema::Namespace =
                $crate::schema::Namespace::$namespace;

            /// 声明顺序下的字段表。
            pub const FIELDS: &'static [$crate::schema::FieldSpec] = &[
                $(
                    $crate::schema::FieldSpec::new(
                        $crate::schema::macros::attr_name!($field $(, $attr)?),
                        $crate::value::DefaultValue::$kind($default),
                    ),
                )+
            ];

            /// 按属性名读取字段值，未知属性返回 `None`。
            pub fn get(&self, attribute: &str) -> Option<$crate::value::FieldValue> {
                $(
                    if attribute == $crate::schema::macros::attr_name!($field $(, $attr)?) {
                        return Some($crate::value::FieldSlot::to_value(&self.$field));
                    }
                )+
                None
            }

            pub(crate) fn assign(
                &mut self,
                attribute: &str,
                value: $crate::value::FieldValue,
            ) -> Result<(), $crate::record::AssignError> {
                $(
                    if attribute == $crate::schema::macros::attr_name!($field $(, $attr)?) {
                        self.$field = $crate::value::FieldSlot::from_value(value).map_err(
                            |rejected| $crate::record::AssignError::KindMismatch {
                                expected: $crate::value::FieldKind::$kind,
                                found: rejected.kind(),
                            },
                        )?;
                        return Ok(());
                    }
                )+
                Err($crate::record::AssignError::UnknownAttribute)
            }
        }

        impl Default for $section {
            fn default() -> Self {
                Self {
                    $( $field: $crate::schema::macros::field_default!($kind, $default), )+
                }
            }
        }
    };
}

pub(crate) use attr_name;
pub(crate) use field_default;
pub(crate) use field_type;
pub(crate) use namespace_section;
