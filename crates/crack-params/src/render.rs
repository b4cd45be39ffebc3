//! 参数集的人类可读渲染。
//!
//! 输出按 Schema 声明顺序排列，每个命名空间一个 `[namespace]` 标题行，
//! 随后是 `  namespace_attribute = value` 形式的字段行。

use core::fmt;

use crate::{record::CrackParams, schema::Schema};

/// 将参数集渲染为文本。
pub fn render(params: &CrackParams) -> String {
    params.to_string()
}

impl fmt::Display for CrackParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for spec in Schema::standard().namespaces() {
            writeln!(f, "[{}]", spec.namespace)?;
            for field in spec.fields {
                let Some(value) = self.get(spec.namespace, field.attribute) else {
                    continue;
                };
                writeln!(f, "  {} = {}", field.qualified_key(spec.namespace), value)?;
            }
        }
        Ok(())
    }
}
