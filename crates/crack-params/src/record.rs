use serde::Serialize;

use crate::{
    schema::{
        ClassicalSection, CrackSection, FitSection, ForceIntegrationSection, HackSection,
        IoSection, MdSection, MinimSection, Namespace, QmSection, QuasiStaticSection, Schema,
        SelectionSection, SimulationSection,
    },
    value::{FieldKind, FieldValue},
};

/// 一次模拟运行的完整参数集。
///
/// ### 设计目的（Why）
/// - 以强类型成员暴露全部参数（`params.md.time_step`），消费方无需经由字符串键取值；
/// - 同时保留按 `(命名空间, 属性)` 或完全限定键读取的动态入口，供渲染器与工具链遍历。
///
/// ### 生命周期（What）
/// - 创建：[`Default`] 逐字段复制 Schema 默认值，不存在“未设置”状态；
/// - 变更：仅在 [`CrackParamsBuilder`](crate::CrackParamsBuilder) 装配期间逐属性覆盖；
/// - 消费：装配完成后只读，可在多个读者之间共享（`Arc<CrackParams>` 或直接克隆）。
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CrackParams {
    pub crack: CrackSection,
    pub simulation: SimulationSection,
    pub md: MdSection,
    pub minim: MinimSection,
    pub io: IoSection,
    pub selection: SelectionSection,
    pub classical: ClassicalSection,
    pub qm: QmSection,
    pub fit: FitSection,
    pub force_integration: ForceIntegrationSection,
    pub quasi_static: QuasiStaticSection,
    pub hack: HackSection,
}

/// 字段写入失败的原因，仅在 Schema 与记录结构不一致时出现。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AssignError {
    UnknownAttribute,
    KindMismatch { expected: FieldKind, found: FieldKind },
}

impl CrackParams {
    /// 按命名空间与属性名读取字段值。
    pub fn get(&self, namespace: Namespace, attribute: &str) -> Option<FieldValue> {
        match namespace {
            Namespace::Crack => self.crack.get(attribute),
            Namespace::Simulation => self.simulation.get(attribute),
            Namespace::Md => self.md.get(attribute),
            Namespace::Minim => self.minim.get(attribute),
            Namespace::Io => self.io.get(attribute),
            Namespace::Selection => self.selection.get(attribute),
            Namespace::Classical => self.classical.get(attribute),
            Namespace::Qm => self.qm.get(attribute),
            Namespace::Fit => self.fit.get(attribute),
            Namespace::ForceIntegration => self.force_integration.get(attribute),
            Namespace::QuasiStatic => self.quasi_static.get(attribute),
            Namespace::Hack => self.hack.get(attribute),
        }
    }

    /// 按完全限定键（如 `md_time_step`）读取字段值。
    pub fn get_qualified(&self, qualified_key: &str) -> Option<FieldValue> {
        let (namespace, field) = Schema::standard().resolve(qualified_key)?;
        self.get(namespace, field.attribute)
    }

    pub(crate) fn assign(
        &mut self,
        namespace: Namespace,
        attribute: &str,
        value: FieldValue,
    ) -> Result<(), AssignError> {
        match namespace {
            Namespace::Crack => self.crack.assign(attribute, value),
            Namespace::Simulation => self.simulation.assign(attribute, value),
            Namespace::Md => self.md.assign(attribute, value),
            Namespace::Minim => self.minim.assign(attribute, value),
            Namespace::Io => self.io.assign(attribute, value),
            Namespace::Selection => self.selection.assign(attribute, value),
            Namespace::Classical => self.classical.assign(attribute, value),
            Namespace::Qm => self.qm.assign(attribute, value),
            Namespace::Fit => self.fit.assign(attribute, value),
            Namespace::ForceIntegration => self.force_integration.assign(attribute, value),
            Namespace::QuasiStatic => self.quasi_static.assign(attribute, value),
            Namespace::Hack => self.hack.assign(attribute, value),
        }
    }

    /// 以 serde_json 输出带缩进的 JSON 快照，字段顺序与 Schema 声明一致。
    #[cfg(feature = "std_json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
