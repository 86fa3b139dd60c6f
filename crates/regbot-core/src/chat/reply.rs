//! Canned bot replies.
//!
//! The bot speaks a fixed set of Korean phrases. Keeping them in one place
//! makes the conversational surface auditable and keeps the session logic
//! free of string literals.

use crate::catalog::Regulation;

/// Reply when no regulation matched the user's input, or when fetching the
/// matched regulation's content failed.
pub const UNKNOWN_REPLY: &str =
    "죄송합니다. 해당 내용을 찾을 수 없습니다. 다시 한 번 확인해 주세요.";

/// Reply when the user submits input before selecting a category.
pub const SELECT_CATEGORY_REPLY: &str = "먼저 카테고리를 선택해 주세요.";

/// Builds the listing reply shown after a category is selected.
///
/// The regulation titles are joined with newlines, in the order given,
/// followed by a prompt asking for a title.
pub fn regulation_listing(regulations: &[Regulation]) -> String {
    let titles = regulations
        .iter()
        .map(|r| r.title.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    format!("선택하신 카테고리의 규정 목록입니다:\n{titles}\n\n원하시는 규정의 제목을 입력해 주세요.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regulation(title: &str) -> Regulation {
        Regulation {
            id: format!("id-{title}"),
            category_id: "c1".to_string(),
            title: title.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn test_listing_joins_titles_in_order() {
        let regulations = vec![regulation("Leave Policy"), regulation("Travel Policy")];

        let listing = regulation_listing(&regulations);

        assert_eq!(
            listing,
            "선택하신 카테고리의 규정 목록입니다:\nLeave Policy\nTravel Policy\n\n원하시는 규정의 제목을 입력해 주세요."
        );
    }

    #[test]
    fn test_listing_with_empty_catalog_keeps_shape() {
        let listing = regulation_listing(&[]);

        assert_eq!(
            listing,
            "선택하신 카테고리의 규정 목록입니다:\n\n\n원하시는 규정의 제목을 입력해 주세요."
        );
    }

    #[test]
    fn test_listing_single_title_has_no_trailing_separator() {
        let listing = regulation_listing(&[regulation("휴가 규정")]);

        assert!(listing.contains("규정 목록입니다:\n휴가 규정\n\n"));
    }
}
