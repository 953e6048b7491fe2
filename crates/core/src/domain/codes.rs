// Result Code Definitions
// Small integer codes embedded in response envelopes by the gateway,
// distinct from HTTP status codes.

/// Result code returned by gateway operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Ok,
    Error,
    NotExist,
    TooLarge,
    InvalidInput,
}

impl ResultCode {
    pub const fn code(self) -> i64 {
        match self {
            ResultCode::Ok => 0,
            ResultCode::Error => 1,
            ResultCode::NotExist => 2,
            ResultCode::TooLarge => 3,
            ResultCode::InvalidInput => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ResultCode::Ok),
            1 => Some(ResultCode::Error),
            2 => Some(ResultCode::NotExist),
            3 => Some(ResultCode::TooLarge),
            4 => Some(ResultCode::InvalidInput),
            _ => None,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            ResultCode::Ok => "Operation succeeded!",
            ResultCode::Error => "Error occurs during operation!",
            ResultCode::NotExist => "Specified task not exist!",
            ResultCode::TooLarge => "Submitted task too large!",
            ResultCode::InvalidInput => "Invalid input discovered!",
        }
    }
}

/// Immutable code -> message table, built once at startup and injected
/// into the `ErrorNormalizer`.
///
/// Deployments with different code conventions construct their own table
/// instead of sharing an ambient global, so two tables can coexist in one
/// process without cross-contamination.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: Vec<(i64, String)>,
}

impl CodeTable {
    /// Build a table from `(code, message)` pairs.
    ///
    /// Order is preserved; on duplicate codes the first entry wins.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (i64, S)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(c, m)| (c, m.into())).collect(),
        }
    }

    /// The standard gateway table (codes 0..=4)
    pub fn gateway_default() -> Self {
        Self::new([
            ResultCode::Ok,
            ResultCode::Error,
            ResultCode::NotExist,
            ResultCode::TooLarge,
            ResultCode::InvalidInput,
        ].map(|c| (c.code(), c.message())))
    }

    /// Message for a code, if the table maps it
    pub fn message(&self, code: i64) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, m)| m.as_str())
    }

    /// Message for a code, with a defined fallback for unmapped codes
    /// so an unknown code never surfaces as a blank message.
    pub fn message_or_fallback(&self, code: i64) -> String {
        match self.message(code) {
            Some(msg) => msg.to_string(),
            None => format!("Unknown error code: {}!", code),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(code, message)` entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.entries.iter().map(|(c, m)| (*c, m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_maps_every_result_code() {
        let table = CodeTable::gateway_default();
        assert_eq!(table.len(), 5);

        for code in 0..=4 {
            let expected = ResultCode::from_code(code).unwrap().message();
            assert_eq!(table.message(code), Some(expected));
            assert_eq!(table.message_or_fallback(code), expected);
        }
    }

    #[test]
    fn test_unmapped_code_gets_fallback_message() {
        let table = CodeTable::gateway_default();
        assert_eq!(table.message(99), None);
        assert_eq!(table.message_or_fallback(99), "Unknown error code: 99!");
        assert_eq!(table.message_or_fallback(-1), "Unknown error code: -1!");
    }

    #[test]
    fn test_custom_table_does_not_leak_into_default() {
        let custom = CodeTable::new([(0, "done"), (7, "backend offline")]);
        let default = CodeTable::gateway_default();

        assert_eq!(custom.message(7), Some("backend offline"));
        assert_eq!(default.message(7), None);
        assert_eq!(custom.message(2), None);
    }

    #[test]
    fn test_duplicate_codes_first_entry_wins() {
        let table = CodeTable::new([(1, "first"), (1, "second")]);
        assert_eq!(table.message(1), Some("first"));
    }
}
