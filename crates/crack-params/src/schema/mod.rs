//! 参数 Schema：全部已识别的 `(命名空间, 属性)` 组合、类型与默认值。
//!
//! # 设计目标概述
//! - 静态且穷尽：字段清单由 [`catalog`] 中的声明表一次性生成，运行期不可追加；
//! - 完全限定键 `namespace_attribute` 在整张表内唯一，[`Schema::new`] 在构造时校验；
//! - 声明顺序即渲染顺序，是对外的兼容性契约。

mod catalog;
mod macros;

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use crate::{
    error::SchemaError,
    value::{DefaultValue, FieldKind},
};

pub use catalog::{
    ClassicalSection, CrackSection, FitSection, ForceIntegrationSection, HackSection, IoSection,
    MdSection, MinimSection, QmSection, QuasiStaticSection, SelectionSection, SimulationSection,
};

/// 默认的根节点元素名。
pub const STANZA_ROOT: &str = "crack_params";

/// 参数命名空间。
///
/// ## 契约定义（What）
/// - 与输入文档中根节点下的子元素名一一对应；
/// - [`Namespace::ALL`] 给出声明顺序，渲染与快照均按此顺序输出。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    Crack,
    Simulation,
    Md,
    Minim,
    Io,
    Selection,
    Classical,
    Qm,
    Fit,
    ForceIntegration,
    QuasiStatic,
    Hack,
}

impl Namespace {
    /// 声明顺序下的全部命名空间。
    pub const ALL: [Namespace; 12] = [
        Self::Crack,
        Self::Simulation,
        Self::Md,
        Self::Minim,
        Self::Io,
        Self::Selection,
        Self::Classical,
        Self::Qm,
        Self::Fit,
        Self::ForceIntegration,
        Self::QuasiStatic,
        Self::Hack,
    ];

    /// 返回命名空间的元素名。
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crack => "crack",
            Self::Simulation => "simulation",
            Self::Md => "md",
            Self::Minim => "minim",
            Self::Io => "io",
            Self::Selection => "selection",
            Self::Classical => "classical",
            Self::Qm => "qm",
            Self::Fit => "fit",
            Self::ForceIntegration => "force_integration",
            Self::QuasiStatic => "quasi_static",
            Self::Hack => "hack",
        }
    }

    /// 根据元素名解析命名空间，大小写敏感。
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.as_str() == value)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个字段的 Schema 条目。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub attribute: &'static str,
    pub kind: FieldKind,
    pub default: DefaultValue,
}

impl FieldSpec {
    /// 构造条目，类型由默认值推导。
    pub const fn new(attribute: &'static str, default: DefaultValue) -> Self {
        Self {
            attribute,
            kind: default.kind(),
            default,
        }
    }

    /// 返回 `namespace_attribute` 形式的完全限定键。
    pub fn qualified_key(&self, namespace: Namespace) -> String {
        format!("{}_{}", namespace.as_str(), self.attribute)
    }
}

/// 一个命名空间及其字段表。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamespaceSpec {
    pub namespace: Namespace,
    pub fields: &'static [FieldSpec],
}

impl NamespaceSpec {
    pub const fn new(namespace: Namespace, fields: &'static [FieldSpec]) -> Self {
        Self { namespace, fields }
    }
}

/// 完整的参数 Schema。
///
/// ### 逻辑解析（How）
/// - `namespaces` 按声明顺序保存各命名空间的字段表；
/// - `index` 将完全限定键映射到 `(命名空间, 字段下标)`，用于按键查询与唯一性校验。
#[derive(Clone, Debug)]
pub struct Schema {
    namespaces: Vec<NamespaceSpec>,
    index: BTreeMap<String, (Namespace, usize)>,
}

static STANDARD: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(catalog::standard_namespaces())
        .expect("built-in parameter table must have unique fully-qualified keys")
});

impl Schema {
    /// 由命名空间表构造 Schema。
    ///
    /// ### 契约（What）
    /// - 同一命名空间出现两次返回 [`SchemaError::DuplicateNamespace`]；
    /// - 任意两个条目的完全限定键相同返回 [`SchemaError::DuplicateKey`]。
    pub fn new(namespaces: Vec<NamespaceSpec>) -> Result<Self, SchemaError> {
        let mut index = BTreeMap::new();
        for (position, spec) in namespaces.iter().enumerate() {
            if namespaces[..position]
                .iter()
                .any(|earlier| earlier.namespace == spec.namespace)
            {
                return Err(SchemaError::DuplicateNamespace {
                    namespace: spec.namespace,
                });
            }
            for (field_index, field) in spec.fields.iter().enumerate() {
                let key = field.qualified_key(spec.namespace);
                if index.contains_key(&key) {
                    return Err(SchemaError::DuplicateKey { key });
                }
                index.insert(key, (spec.namespace, field_index));
            }
        }
        Ok(Self { namespaces, index })
    }

    /// 返回内置 Schema，首次调用时构造。
    pub fn standard() -> &'static Schema {
        &STANDARD
    }

    /// 声明顺序下的命名空间表。
    pub fn namespaces(&self) -> &[NamespaceSpec] {
        &self.namespaces
    }

    /// 返回命名空间的全部字段及默认值；未登记的命名空间返回空切片。
    pub fn defaults_for(&self, namespace: Namespace) -> &'static [FieldSpec] {
        self.namespaces
            .iter()
            .find(|spec| spec.namespace == namespace)
            .map(|spec| spec.fields)
            .unwrap_or(&[])
    }

    /// 查询单个字段。
    pub fn field(&self, namespace: Namespace, attribute: &str) -> Option<&'static FieldSpec> {
        self.defaults_for(namespace)
            .iter()
            .find(|field| field.attribute == attribute)
    }

    /// 按完全限定键查询字段。
    pub fn resolve(&self, qualified_key: &str) -> Option<(Namespace, &'static FieldSpec)> {
        let (namespace, field_index) = *self.index.get(qualified_key)?;
        self.defaults_for(namespace)
            .get(field_index)
            .map(|field| (namespace, field))
    }

    /// 声明顺序下的全部 `(命名空间, 字段)`。
    pub fn fields(&self) -> impl Iterator<Item = (Namespace, &'static FieldSpec)> + '_ {
        self.namespaces
            .iter()
            .flat_map(|spec| spec.fields.iter().map(move |field| (spec.namespace, field)))
    }

    /// 字段总数。
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
