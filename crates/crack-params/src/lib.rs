#![deny(unsafe_code)]
#![doc = "crack-params: 断裂模拟参数集的强类型 Schema 与标记文档装配引擎。"]
#![doc = ""]
#![doc = "== 使用方式 =="]
#![doc = "1. 外部适配器把标记文档解析为 [`MarkupEvent`] 序列；"]
#![doc = "2. [`CrackParamsBuilder::build`] 从 Schema 默认值出发逐属性覆盖，产出 [`CrackParams`] 与 [`BuildReport`]；"]
#![doc = "3. 装配结果只读，按字段（`params.md.time_step`）或完全限定键（`md_time_step`）读取。"]
#![doc = ""]
#![doc = "== 错误语义 =="]
#![doc = "单个属性转换失败只产生诊断并保留默认值；仅属性列表超长等结构性错误中止装配。"]

pub mod builder;
pub mod coerce;
pub mod error;
pub mod event;
pub mod properties;
pub mod record;
pub mod render;
pub mod schema;
pub mod value;
pub mod verbosity;

pub use builder::{
    BuildContext, BuildOptions, BuildOutcome, BuildReport, CrackParamsBuilder, Flow, IgnoredItem,
    StanzaOutcome, StanzaState, UnknownPolicy,
};
pub use error::{BuildError, FatalConfigError, ParseError, ParseErrorKind, SchemaError};
pub use event::{MarkupEvent, stanza};
pub use record::CrackParams;
pub use render::render;
pub use schema::{FieldSpec, Namespace, NamespaceSpec, STANZA_ROOT, Schema};
pub use value::{DefaultValue, FieldKind, FieldValue};
pub use verbosity::{UnknownVerbosity, Verbosity};
