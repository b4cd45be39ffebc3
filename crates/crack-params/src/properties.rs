//! 可打印属性列表的规范化。
//!
//! 旧版输入文档经常省略必选的首项 `species`；规范化保证列表首位恒为该哨兵，
//! 消费方无需各自处理缺失情形。

use crate::error::FatalConfigError;

/// 列表首位必须出现的哨兵标识。
pub const SENTINEL: &str = "species";

/// 规范化后列表允许的最大元素数。
pub const MAX_PRINT_PROPERTIES: usize = 100;

/// 解析冒号分隔的属性列表并规范化。
///
/// ### 逻辑解析（How）
/// 1. 以 `:` 切分，去除各项首尾空白并丢弃空项（`"pos::nn"` 等价于 `"pos:nn"`）；
/// 2. 交由 [`normalize_properties`] 完成哨兵前置与长度校验。
///
/// ### 契约（What）
/// - `"pos:species:nn"` → `["species", "pos", "nn"]`；
/// - `"pos:nn"` → `["species", "pos", "nn"]`；
/// - 空串 → `["species"]`。
pub fn normalize_property_list(raw: &str) -> Result<Vec<String>, FatalConfigError> {
    normalize_properties(
        raw.split(':')
            .map(str::trim)
            .filter(|item| !item.is_empty()),
    )
}

/// 对已切分的标识序列执行哨兵前置。
///
/// ### 契约（What）
/// - 若序列中存在 `species`，将其首次出现移动到位置 0，其余元素相对顺序不变；
///   之后重复出现的 `species` 保留在原位；
/// - 若不存在，则在最前方插入；
/// - 结果长度超过 [`MAX_PRINT_PROPERTIES`] 时返回 [`FatalConfigError::PropertyListTooLong`]，
///   校验发生在分配结果之前；
/// - 对已规范化的列表再次调用结果不变。
pub fn normalize_properties<I, S>(items: I) -> Result<Vec<String>, FatalConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<S> = items.into_iter().collect();
    let sentinel_at = items.iter().position(|item| item.as_ref() == SENTINEL);
    let count = items.len() + usize::from(sentinel_at.is_none());
    if count > MAX_PRINT_PROPERTIES {
        return Err(FatalConfigError::PropertyListTooLong {
            count,
            max: MAX_PRINT_PROPERTIES,
        });
    }

    let mut normalized = Vec::with_capacity(count);
    normalized.push(SENTINEL.to_owned());
    normalized.extend(
        items
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != sentinel_at)
            .map(|(_, item)| item.as_ref().to_owned()),
    );
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(raw: &str) -> Vec<String> {
        normalize_property_list(raw).expect("within bounds")
    }

    #[test]
    fn sentinel_is_rotated_to_front() {
        assert_eq!(list("pos:species:nn"), ["species", "pos", "nn"]);
    }

    #[test]
    fn missing_sentinel_is_prepended() {
        assert_eq!(list("pos:nn"), ["species", "pos", "nn"]);
        assert_eq!(list(""), ["species"]);
    }

    /// 验证：规范化幂等。
    #[test]
    fn normalization_is_idempotent() {
        let once = list("load:avg_ke:species:pos");
        let twice = normalize_properties(&once).expect("within bounds");
        assert_eq!(once, twice);
        assert_eq!(list(&once.join(":")), once);
    }

    #[test]
    fn blank_segments_are_dropped() {
        assert_eq!(list(" pos :: nn "), ["species", "pos", "nn"]);
    }

    #[test]
    fn later_duplicates_of_sentinel_stay_in_place() {
        assert_eq!(list("pos:species:nn:species"), ["species", "pos", "nn", "species"]);
    }

    /// 验证：恰好达到上限可接受，超过上限为致命错误。
    #[test]
    fn length_limit_counts_the_inserted_sentinel() {
        let at_limit: Vec<String> = (1..MAX_PRINT_PROPERTIES).map(|i| format!("p{i}")).collect();
        assert_eq!(
            normalize_properties(&at_limit).map(|items| items.len()),
            Ok(MAX_PRINT_PROPERTIES)
        );

        let over: Vec<String> = (0..MAX_PRINT_PROPERTIES).map(|i| format!("p{i}")).collect();
        assert_eq!(
            normalize_property_list(&over.join(":")),
            Err(FatalConfigError::PropertyListTooLong {
                count: MAX_PRINT_PROPERTIES + 1,
                max: MAX_PRINT_PROPERTIES,
            })
        );
    }
}
