//! The update record model: one candidate row update for `SJQDMS_UILAN`.

/// One candidate row update, produced by the parser and consumed exactly
/// once by an environment run. Never mutated after creation.
///
/// The triple (`code`, `group_title`, `id`) is the business key that
/// uniquely addresses one localizable string row. The three localized
/// fields may each be empty, where empty means "no value" (the literal
/// `NULL` token is normalized away during parsing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    pub code: String,
    pub group_title: String,
    pub id: String,
    pub chinese: String,
    pub english: String,
    pub vietnamese: String,
}

impl UpdateRecord {
    /// Returns `true` if at least one localized field carries a value.
    ///
    /// A record with all three fields empty must never cause a write;
    /// callers classify such records as skipped without touching the
    /// database.
    pub fn has_translations(&self) -> bool {
        !self.chinese.is_empty() || !self.english.is_empty() || !self.vietnamese.is_empty()
    }

    /// The composite snapshot key, `code|id`. Distinct rows can share a
    /// code but differ by id, so the code alone would collapse them.
    pub fn snapshot_key(&self) -> String {
        format!("{}|{}", self.code, self.id)
    }
}

/// Distinct group titles across `records`, in first-appearance order.
pub fn distinct_titles(records: &[UpdateRecord]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for record in records {
        if !titles.contains(&record.group_title) {
            titles.push(record.group_title.clone());
        }
    }
    titles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, title: &str, id: &str, cn: &str, en: &str, yn: &str) -> UpdateRecord {
        UpdateRecord {
            code: code.to_string(),
            group_title: title.to_string(),
            id: id.to_string(),
            chinese: cn.to_string(),
            english: en.to_string(),
            vietnamese: yn.to_string(),
        }
    }

    #[test]
    fn all_empty_has_no_translations() {
        assert!(!record("C1", "G", "1", "", "", "").has_translations());
    }

    #[test]
    fn single_field_counts_as_translation() {
        assert!(record("C1", "G", "1", "你好", "", "").has_translations());
        assert!(record("C1", "G", "1", "", "Hello", "").has_translations());
        assert!(record("C1", "G", "1", "", "", "Xin chào").has_translations());
    }

    #[test]
    fn snapshot_key_joins_code_and_id() {
        assert_eq!(record("C1", "G", "7", "a", "b", "c").snapshot_key(), "C1|7");
    }

    #[test]
    fn distinct_titles_preserves_first_appearance_order() {
        let records = vec![
            record("C1", "GroupB", "1", "a", "", ""),
            record("C2", "GroupA", "2", "a", "", ""),
            record("C3", "GroupB", "3", "a", "", ""),
        ];
        assert_eq!(distinct_titles(&records), vec!["GroupB", "GroupA"]);
    }

    #[test]
    fn distinct_titles_empty_input() {
        assert!(distinct_titles(&[]).is_empty());
    }
}
