//! Classification titles and message composition.

/// Classification code to display title, as reported by the download tool.
pub const MESSAGE_TYPES: &[(&str, &str)] = &[
    ("startup", "Startup/Shutdown"),
    ("download", "Added NZB"),
    ("pp", "Post-processing started"),
    ("complete", "Job finished"),
    ("failed", "Job failed"),
    ("warning", "Warning"),
    ("error", "Error"),
    ("disk_full", "Disk full"),
    ("queue_done", "Queue finished"),
    ("new_login", "User logged in"),
    ("other", "Other Messages"),
];

/// Classification used when the tool supplied no message.
pub const DEFAULT_CLASSIFICATION: &str = "other";

/// Body used when the tool supplied no message. Doubles as a connectivity test.
pub const SELF_TEST_BODY: &str = "Test message";

pub const SEPARATOR: &str = " .:. ";

/// Look up the display title for a classification code.
///
/// Unknown codes are returned verbatim so the message is still delivered.
pub fn title_for(classification: &str) -> &str {
    MESSAGE_TYPES
        .iter()
        .find(|(code, _)| *code == classification)
        .map(|(_, title)| *title)
        .unwrap_or(classification)
}

/// Build `"<Title> .:. <Body>"`.
pub fn compose(classification: &str, body: &str) -> String {
    format!("{}{SEPARATOR}{body}", title_for(classification))
}

/// A single classified message as handed over by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub classification: String,
    pub body: String,
}

impl Invocation {
    /// Resolve command-line positionals.
    ///
    /// Without a body the invocation becomes the self-test message, whatever
    /// classification was given.
    pub fn from_args(classification: Option<String>, body: Option<String>) -> Self {
        match (classification, body) {
            (Some(classification), Some(body)) => Self {
                classification,
                body,
            },
            _ => Self::self_test(),
        }
    }

    pub fn self_test() -> Self {
        Self {
            classification: DEFAULT_CLASSIFICATION.to_string(),
            body: SELF_TEST_BODY.to_string(),
        }
    }

    pub fn compose(&self) -> String {
        compose(&self.classification, &self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_use_catalog_title() {
        for (code, title) in MESSAGE_TYPES {
            assert_eq!(compose(code, "body"), format!("{title} .:. body"));
        }
    }

    #[test]
    fn complete_job_message() {
        assert_eq!(
            compose("complete", "Download finished: Ubuntu.iso"),
            "Job finished .:. Download finished: Ubuntu.iso"
        );
    }

    #[test]
    fn unknown_code_falls_back_to_code() {
        assert_eq!(compose("bogus_code", "test"), "bogus_code .:. test");
        assert_eq!(title_for(""), "");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(title_for("Complete"), "Complete");
    }

    #[test]
    fn compose_is_pure() {
        let first = compose("failed", "Job X failed");
        let second = compose("failed", "Job X failed");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_args_become_self_test() {
        let invocation = Invocation::from_args(None, None);
        assert_eq!(invocation, Invocation::self_test());
        assert_eq!(invocation.compose(), "Other Messages .:. Test message");
    }

    #[test]
    fn missing_body_ignores_classification() {
        let invocation = Invocation::from_args(Some("error".to_string()), None);
        assert_eq!(invocation.classification, DEFAULT_CLASSIFICATION);
        assert_eq!(invocation.body, SELF_TEST_BODY);
    }

    #[test]
    fn full_args_are_kept() {
        let invocation =
            Invocation::from_args(Some("warning".to_string()), Some("low disk".to_string()));
        assert_eq!(invocation.compose(), "Warning .:. low disk");
    }
}
