use thiserror::Error;

/// Error type for season statistics computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    #[error("malformed timestamp '{value}' in observation #{index}: {source}")]
    TimestampParse {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::formatter::parse_timestamp;

    #[test]
    fn test_summary_error_display() {
        let source = parse_timestamp("yesterday").unwrap_err();
        let err = SummaryError::TimestampParse {
            index: 3,
            value: "yesterday".to_string(),
            source,
        };
        let text = err.to_string();
        assert!(text.starts_with("malformed timestamp 'yesterday' in observation #3: "));
    }
}
