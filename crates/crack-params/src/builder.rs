//! 参数装配引擎。
//!
//! # 执行流程（How）
//! 1. 记录先复位为 Schema 默认值，调用方无法跳过；
//! 2. 状态机 `{Outside, Inside}` 只在根节点开始 / 结束事件上迁移，`Outside` 期间的事件全部忽略；
//!    `Inside` 期间再次出现的同名根节点按嵌套深度计数，只有与最外层开始事件配对的结束事件才离开根节点；
//! 3. `Inside` 期间，元素名命中命名空间时逐个属性转换并覆盖，后出现者生效；
//! 4. 根节点结束或事件耗尽即返回，未闭合的根节点不视为错误。
//!
//! # 并发模型（What）
//! - 被装配的记录、状态与诊断全部保存在显式的 [`BuildContext`] 中，不存在进程级共享目标；
//! - 多次装配可以在不同线程上同时进行，彼此互不干扰。

use std::borrow::{Borrow, Cow};

use tracing::{debug, debug_span, error, info, warn};

use crate::{
    coerce::{CoerceError, coerce},
    error::{BuildError, FatalConfigError, ParseError},
    event::MarkupEvent,
    record::CrackParams,
    schema::{Namespace, STANZA_ROOT, Schema},
};

/// 根节点内未知元素 / 属性的处理策略。
///
/// 根节点自身的属性与嵌套出现的同名根节点同样视为未知项。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// 静默忽略，仅记入 [`BuildReport::ignored`] 并输出 debug 日志。
    #[default]
    Ignore,
    /// 作为诊断收集；配合严格模式即可拒绝含未知项的文档。
    Report,
}

/// 装配选项。
///
/// ### 契约说明（What）
/// - `stanza_root`：识别的根节点元素名，默认 `crack_params`；
/// - `strict`：为真时任意诊断都会使装配返回 [`BuildError::Rejected`]；
/// - `unknown_policy`：见 [`UnknownPolicy`]。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    pub stanza_root: Cow<'static, str>,
    pub strict: bool,
    pub unknown_policy: UnknownPolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            stanza_root: Cow::Borrowed(STANZA_ROOT),
            strict: false,
            unknown_policy: UnknownPolicy::Ignore,
        }
    }
}

/// 根节点状态机。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StanzaState {
    Outside,
    Inside,
}

/// 装配结束时根节点的闭合情况。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StanzaOutcome {
    /// 从未遇到根节点，记录保持全默认值。
    Missing,
    Closed,
    /// 根节点已打开但事件先行耗尽，已应用的覆盖仍然有效。
    Unterminated,
}

/// 单个事件处理后的走向。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// 根节点已闭合，后续事件不再处理。
    Finished,
}

/// 被忽略的未知元素或属性。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IgnoredItem {
    pub element: String,
    pub attribute: Option<String>,
}

/// 装配过程的汇总。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildReport {
    pub diagnostics: Vec<ParseError>,
    pub ignored: Vec<IgnoredItem>,
    /// 成功写入的属性次数（同一字段多次覆盖分别计数）。
    pub applied: usize,
    pub stanza: StanzaOutcome,
}

impl BuildReport {
    /// 没有任何诊断时返回真。
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// 装配成功的结果：完整参数集与过程汇总。
#[derive(Clone, Debug, PartialEq)]
pub struct BuildOutcome {
    pub params: CrackParams,
    pub report: BuildReport,
}

/// 单次装配的显式上下文。
///
/// ### 设计目的（Why）
/// - 事件处理所需的全部可变状态都经由本结构传递，事件回调不依赖任何全局变量；
/// - 适配器若以回调方式驱动解析，可在回调中持有 `&mut BuildContext` 逐个调用
///   [`apply_event`](Self::apply_event)。
///
/// ### 契约（What）
/// - [`new`](Self::new) 会先把传入记录复位为默认值；
/// - 返回 [`Flow::Finished`] 后再调用 `apply_event` 不会产生任何效果。
pub struct BuildContext<'r> {
    record: &'r mut CrackParams,
    options: &'r BuildOptions,
    schema: &'static Schema,
    state: StanzaState,
    /// `Inside` 期间尚未闭合的嵌套根节点个数。
    depth: usize,
    stanza_seen: bool,
    closed: bool,
    applied: usize,
    diagnostics: Vec<ParseError>,
    ignored: Vec<IgnoredItem>,
}

impl<'r> BuildContext<'r> {
    /// 绑定待装配记录并复位为默认值。
    pub fn new(record: &'r mut CrackParams, options: &'r BuildOptions) -> Self {
        *record = CrackParams::default();
        Self {
            record,
            options,
            schema: Schema::standard(),
            state: StanzaState::Outside,
            depth: 0,
            stanza_seen: false,
            closed: false,
            applied: 0,
            diagnostics: Vec::new(),
            ignored: Vec::new(),
        }
    }

    /// 当前状态机位置。
    #[inline]
    pub fn state(&self) -> StanzaState {
        self.state
    }

    /// 目前为止收集到的诊断。
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    /// 处理一个事件。
    ///
    /// ### 契约（What）
    /// - 可恢复的转换失败被收集为诊断，不返回 `Err`；
    /// - 仅 [`FatalConfigError`] 以 `Err` 返回，调用方应立即停止装配。
    pub fn apply_event(&mut self, event: &MarkupEvent<'_>) -> Result<Flow, FatalConfigError> {
        if self.closed {
            return Ok(Flow::Finished);
        }

        match event {
            MarkupEvent::Start {
                element,
                attributes,
            } => {
                if element.as_ref() == self.options.stanza_root.as_ref() {
                    match self.state {
                        StanzaState::Outside => {
                            debug!(root = %element, "entered parameter stanza");
                            self.state = StanzaState::Inside;
                            self.stanza_seen = true;
                        }
                        StanzaState::Inside => {
                            self.depth += 1;
                            self.note_unknown(element, None, "");
                        }
                    }
                    for (attribute, raw) in attributes {
                        self.note_unknown(element, Some(attribute.as_ref()), raw);
                    }
                    return Ok(Flow::Continue);
                }
                if self.state == StanzaState::Outside {
                    return Ok(Flow::Continue);
                }
                match Namespace::parse(element) {
                    Some(namespace) => self.apply_attributes(namespace, attributes)?,
                    None => self.note_unknown(element, None, ""),
                }
                Ok(Flow::Continue)
            }
            MarkupEvent::End { element } => {
                if self.state == StanzaState::Inside
                    && element.as_ref() == self.options.stanza_root.as_ref()
                {
                    if self.depth > 0 {
                        self.depth -= 1;
                        return Ok(Flow::Continue);
                    }
                    debug!(root = %element, "left parameter stanza");
                    self.state = StanzaState::Outside;
                    self.closed = true;
                    return Ok(Flow::Finished);
                }
                Ok(Flow::Continue)
            }
        }
    }

    /// 结束装配并产出汇总。
    pub fn finish(self) -> BuildReport {
        let stanza = if self.closed {
            StanzaOutcome::Closed
        } else if self.stanza_seen {
            StanzaOutcome::Unterminated
        } else {
            StanzaOutcome::Missing
        };
        BuildReport {
            diagnostics: self.diagnostics,
            ignored: self.ignored,
            applied: self.applied,
            stanza,
        }
    }

    fn apply_attributes(
        &mut self,
        namespace: Namespace,
        attributes: &[(Cow<'_, str>, Cow<'_, str>)],
    ) -> Result<(), FatalConfigError> {
        for (attribute, raw) in attributes {
            let Some(field) = self.schema.field(namespace, attribute) else {
                self.note_unknown(namespace.as_str(), Some(attribute.as_ref()), raw);
                continue;
            };

            match coerce(raw, field.kind) {
                Ok(value) => match self.record.assign(namespace, attribute, value) {
                    Ok(()) => {
                        self.applied += 1;
                        debug!(
                            key = %field.qualified_key(namespace),
                            raw = %raw,
                            "applied attribute"
                        );
                    }
                    Err(mismatch) => {
                        error!(
                            key = %field.qualified_key(namespace),
                            ?mismatch,
                            "schema entry has no matching record field"
                        );
                    }
                },
                Err(CoerceError::Parse(kind)) => {
                    let diagnostic = ParseError::attribute(namespace, attribute, raw, kind);
                    warn!(%diagnostic, "attribute kept its previous value");
                    self.diagnostics.push(diagnostic);
                }
                Err(CoerceError::Fatal(fatal)) => {
                    error!(
                        key = %field.qualified_key(namespace),
                        %fatal,
                        "aborting parameter build"
                    );
                    return Err(fatal);
                }
            }
        }
        Ok(())
    }

    fn note_unknown(&mut self, element: &str, attribute: Option<&str>, raw: &str) {
        match self.options.unknown_policy {
            UnknownPolicy::Ignore => {
                debug!(element, attribute, "ignored unknown item");
                self.ignored.push(IgnoredItem {
                    element: element.to_owned(),
                    attribute: attribute.map(str::to_owned),
                });
            }
            UnknownPolicy::Report => {
                let diagnostic = match attribute {
                    Some(attribute) => ParseError::unknown_attribute(element, attribute, raw),
                    None => ParseError::unknown_element(element),
                };
                warn!(%diagnostic, "unknown item reported");
                self.diagnostics.push(diagnostic);
            }
        }
    }
}

/// 参数装配器。
///
/// ```
/// use crack_params::{CrackParamsBuilder, event::stanza};
///
/// let events = stanza("crack_params", [("md", vec![("time_step", "2.0")])]);
/// let outcome = CrackParamsBuilder::new().build(events).expect("no fatal error");
/// assert_eq!(outcome.params.md.time_step, 2.0);
/// assert!(outcome.report.is_clean());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CrackParamsBuilder {
    options: BuildOptions,
}

impl CrackParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    /// 更换识别的根节点元素名。
    pub fn with_stanza_root(mut self, root: impl Into<Cow<'static, str>>) -> Self {
        self.options.stanza_root = root.into();
        self
    }

    /// 开启或关闭严格模式。
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    pub fn with_unknown_policy(mut self, policy: UnknownPolicy) -> Self {
        self.options.unknown_policy = policy;
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// 消费事件序列，产出完整参数集。
    ///
    /// ### 契约（What）
    /// - 空序列或不含根节点的序列返回全默认值记录且无诊断；
    /// - [`FatalConfigError`] 立即中止并返回 [`BuildError::Fatal`]；
    /// - 严格模式下存在诊断时返回 [`BuildError::Rejected`]，否则诊断随
    ///   [`BuildReport`] 一并返回。
    pub fn build<'a, I>(&self, events: I) -> Result<BuildOutcome, BuildError>
    where
        I: IntoIterator,
        I::Item: Borrow<MarkupEvent<'a>>,
    {
        let span = debug_span!(
            "crack_params.build",
            root = %self.options.stanza_root,
            strict = self.options.strict
        );
        let _entered = span.enter();

        let mut params = CrackParams::default();
        let mut context = BuildContext::new(&mut params, &self.options);
        for event in events {
            if context.apply_event(Borrow::<MarkupEvent<'a>>::borrow(&event))? == Flow::Finished {
                break;
            }
        }
        let report = context.finish();

        info!(
            applied = report.applied,
            diagnostics = report.diagnostics.len(),
            ignored = report.ignored.len(),
            stanza = ?report.stanza,
            "parameter build finished"
        );

        if self.options.strict && !report.diagnostics.is_empty() {
            return Err(BuildError::Rejected {
                diagnostics: report.diagnostics,
            });
        }
        Ok(BuildOutcome { params, report })
    }
}
