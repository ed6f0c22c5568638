const FENCE_PATTERN: &str = r"```json\n?|\n?```";

/// Removes markdown code fences from model output and trims the remainder.
///
/// Every opening fence "```json" (with its trailing newline, if any) and every
/// closing fence "```" (with its leading newline, if any) is removed, so:
/// - text without a fence is only trimmed;
/// - a leading fence without a closing one is removed;
/// - a full fence pair, tagged or bare, is removed;
/// - whitespace inside the fenced document is kept, whitespace around it is trimmed.
pub fn strip_code_fence(content: &str) -> String {
    regex::Regex::new(FENCE_PATTERN)
        .map(|re| re.replace_all(content, "").to_string())
        .unwrap_or_else(|_| content.to_string())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    #[test]
    fn should_trim_text_without_fence() {
        assert_eq!(strip_code_fence("  {\"total\":1}\n"), "{\"total\":1}");
    }

    #[test]
    fn should_remove_leading_fence_only() {
        assert_eq!(strip_code_fence("```json\n{\"total\":1}"), "{\"total\":1}");
    }

    #[test]
    fn should_remove_full_fence_pair() {
        assert_eq!(
            strip_code_fence("```json\n{\"total\":1}\n```"),
            "{\"total\":1}"
        );
    }

    #[test]
    fn should_remove_bare_fence_pair() {
        assert_eq!(strip_code_fence("```\n{\"total\":1}\n```"), "{\"total\":1}");
    }

    #[test]
    fn should_remove_fence_without_newlines() {
        assert_eq!(strip_code_fence("```json{\"total\":1}```"), "{\"total\":1}");
    }

    #[test]
    fn should_keep_internal_whitespace() {
        let content = "```json\n{\n  \"merchant\": \"Cafe X\",\n  \"total\": 3.8\n}\n```\n";

        assert_eq!(
            strip_code_fence(content),
            "{\n  \"merchant\": \"Cafe X\",\n  \"total\": 3.8\n}"
        );
    }

    #[test]
    fn should_trim_whitespace_around_fence() {
        assert_eq!(
            strip_code_fence("\n\n  ```json\n[]\n```  \n"),
            "[]"
        );
    }

    #[test]
    fn should_return_empty_string_for_empty_fence() {
        assert_eq!(strip_code_fence("```json\n```"), "");
    }

    fn receipt_strategy() -> impl Strategy<Value = Value> {
        let item = ("[A-Za-z ]{1,16}", 0u32..20, 0u32..100_000).prop_map(|(name, quantity, cents)| {
            json!({ "name": name, "quantity": quantity, "price": f64::from(cents) / 100.0 })
        });
        (
            "[A-Za-z0-9 &'.-]{0,24}",
            "[0-9]{4}-[0-9]{2}-[0-9]{2}",
            proptest::collection::vec(item, 0..6),
            0u32..100_000,
            0u32..10_000,
        )
            .prop_map(|(merchant, date, items, subtotal, tax)| {
                json!({
                    "merchant": merchant,
                    "date": date,
                    "items": items,
                    "subtotal": f64::from(subtotal) / 100.0,
                    "tax": f64::from(tax) / 100.0,
                    "tip": 0,
                    "total": f64::from(subtotal + tax) / 100.0,
                })
            })
    }

    proptest! {
        #[test]
        fn should_recover_fenced_receipt_unchanged(receipt in receipt_strategy(), pretty in any::<bool>()) {
            let body = if pretty {
                serde_json::to_string_pretty(&receipt).unwrap()
            } else {
                serde_json::to_string(&receipt).unwrap()
            };
            let fenced = format!("```json\n{}\n```", body);

            let parsed: Value = serde_json::from_str(&strip_code_fence(&fenced)).unwrap();

            prop_assert_eq!(parsed, receipt);
        }
    }
}
