use crate::error::{Error, Result};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

static PULL_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/pull/(\d+)$").expect("pull number pattern must compile"));

const WORKING_BRANCH_PREFIX: &str = "update";

/// Extracts the pull request number from its HTML URL.
pub fn pull_request_number(reference: &str) -> Result<u64> {
    PULL_NUMBER
        .captures(reference)
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse::<u64>().ok())
        .ok_or_else(|| Error::Protocol {
            reference: reference.to_owned(),
        })
}

/// Name for the branch that carries the changes of a single call.
pub fn working_branch_name() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();

    format!(
        "{}-{}-{}",
        WORKING_BRANCH_PREFIX,
        Utc::now().timestamp_millis(),
        &suffix[..8]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_parse_trailing_pull_number() {
        let number = pull_request_number("https://github.com/owner/repo/pull/42").unwrap();

        assert_eq!(number, 42);
    }

    #[test]
    fn should_reject_reference_without_number() {
        for reference in [
            "https://github.com/owner/repo/pulls",
            "https://github.com/owner/repo/pull/42/files",
            "https://github.com/owner/repo/pull/abc",
            "",
        ] {
            let err = pull_request_number(reference).unwrap_err();

            assert!(matches!(err, Error::Protocol { .. }), "{}", reference);
        }
    }

    #[test]
    fn should_generate_unique_branch_names() {
        let names = (0..100).map(|_| working_branch_name()).collect::<HashSet<_>>();

        assert_eq!(names.len(), 100);
        assert!(names.iter().all(|name| name.starts_with("update-")));
    }
}
