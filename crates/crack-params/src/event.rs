//! 标记文档事件模型。
//!
//! 标记解析本身由外部适配器完成；本模块只定义适配器交付给
//! [`CrackParamsBuilder`](crate::CrackParamsBuilder) 的事件形态。

use std::borrow::Cow;

/// 元素开始 / 结束事件。
///
/// ### 契约说明（What）
/// - 事件必须按文档顺序交付；
/// - `attributes` 保留文档中的出现顺序，允许同名属性重复出现，装配时后出现者生效；
/// - 自闭合元素（`<md time_step="1.0"/>`）由适配器拆分为一对 `Start` / `End`。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupEvent<'a> {
    Start {
        element: Cow<'a, str>,
        attributes: Vec<(Cow<'a, str>, Cow<'a, str>)>,
    },
    End {
        element: Cow<'a, str>,
    },
}

impl<'a> MarkupEvent<'a> {
    /// 构造开始事件。
    pub fn start<E, I, K, V>(element: E, attributes: I) -> Self
    where
        E: Into<Cow<'a, str>>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'a, str>>,
        V: Into<Cow<'a, str>>,
    {
        Self::Start {
            element: element.into(),
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// 构造结束事件。
    pub fn end<E>(element: E) -> Self
    where
        E: Into<Cow<'a, str>>,
    {
        Self::End {
            element: element.into(),
        }
    }

    /// 自闭合元素对应的 `Start` / `End` 事件对。
    pub fn empty_element<E, I, K, V>(element: E, attributes: I) -> [Self; 2]
    where
        E: Into<Cow<'a, str>>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'a, str>>,
        V: Into<Cow<'a, str>>,
    {
        let element = element.into();
        [
            Self::start(element.clone(), attributes),
            Self::end(element),
        ]
    }

    /// 事件所属的元素名。
    pub fn element(&self) -> &str {
        match self {
            Self::Start { element, .. } | Self::End { element } => element,
        }
    }

    /// 转换为不借用输入缓冲区的事件。
    pub fn into_owned(self) -> MarkupEvent<'static> {
        match self {
            Self::Start {
                element,
                attributes,
            } => MarkupEvent::Start {
                element: Cow::Owned(element.into_owned()),
                attributes: attributes
                    .into_iter()
                    .map(|(name, value)| {
                        (Cow::Owned(name.into_owned()), Cow::Owned(value.into_owned()))
                    })
                    .collect(),
            },
            Self::End { element } => MarkupEvent::End {
                element: Cow::Owned(element.into_owned()),
            },
        }
    }
}

/// 以根节点包裹若干自闭合子元素，生成完整的事件序列。
///
/// 适配器测试与基准常用：`stanza("crack_params", [("md", vec![("time_step", "2.0")])])`。
pub fn stanza<'a, I, A>(root: &'a str, children: I) -> Vec<MarkupEvent<'a>>
where
    I: IntoIterator<Item = (&'a str, A)>,
    A: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut events = vec![MarkupEvent::start(root, Vec::<(&str, &str)>::new())];
    for (element, attributes) in children {
        events.extend(MarkupEvent::empty_element(element, attributes));
    }
    events.push(MarkupEvent::end(root));
    events
}
