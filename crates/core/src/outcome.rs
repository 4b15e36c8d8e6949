use std::borrow::Cow;

use serde::Serialize;

use crate::error::ArgumentError;

/// What a parse observed besides the values it stored.
///
/// Every anomaly is data here. Whether an unparsed argument or a missing
/// value is an error is up to the command that ran the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// Tokens no keyword claimed, in input order, duplicates kept.
    pub unparsed_arguments: Vec<String>,
    /// Keywords that opened a value-requiring receiver and got nothing,
    /// once per such occurrence.
    pub keywords_missing_value: Vec<Cow<'static, str>>,
    /// Keywords seen, in first-occurrence order. Group keywords are listed
    /// once per occurrence.
    pub parsed_keywords: Vec<Cow<'static, str>>,
}

impl ParseOutcome {
    /// True when nothing was left over and no value was missing.
    pub fn is_clean(&self) -> bool {
        self.unparsed_arguments.is_empty() && self.keywords_missing_value.is_empty()
    }

    /// True when `keyword` appears among the parsed keywords.
    pub fn saw_keyword(&self, keyword: &str) -> bool {
        self.parsed_keywords.iter().any(|k| k == keyword)
    }

    /// Apply the strict policy: leftovers first, then the first keyword
    /// missing its value.
    pub fn check(&self) -> Result<(), ArgumentError> {
        if !self.unparsed_arguments.is_empty() {
            return Err(ArgumentError::UnparsedArguments {
                arguments: self.unparsed_arguments.clone(),
            });
        }
        if let Some(keyword) = self.keywords_missing_value.first() {
            return Err(ArgumentError::MissingValue {
                keyword: keyword.clone(),
            });
        }
        Ok(())
    }

    /// Serialize with every field present, empty sequences included.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "keywords_missing_value": self.keywords_missing_value,
            "parsed_keywords":        self.parsed_keywords,
            "unparsed_arguments":     self.unparsed_arguments,
        })
    }
}
