use clap::Parser;

use sabnotify_notify::Invocation;

/// Relay a download-tool notification to Pushover, Slack and Discord.
///
/// Invoked by the download tool as `sabnotify <type> <title> <message>`,
/// or by hand as `sabnotify <type> <message>`. With no message, sends
/// "Test message" as a connectivity check.
#[derive(Parser, Debug)]
#[command(name = "sabnotify", version, about)]
pub struct CliArgs {
    /// Notification type, e.g. complete, failed, disk_full
    pub classification: Option<String>,

    /// Notification title (not used; taken as the message when it is the last positional)
    #[arg(hide = true, allow_hyphen_values = true)]
    pub title: Option<String>,

    /// Message body
    #[arg(allow_hyphen_values = true)]
    pub message: Option<String>,

    /// Path to the credentials file (default: creds.json beside the executable)
    #[arg(long, env = "SABNOTIFY_CREDS")]
    pub creds: Option<String>,

    /// Path to the delivery log (default: notify.log beside the executable)
    #[arg(long, env = "SABNOTIFY_LOG")]
    pub log_file: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "SABNOTIFY_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl CliArgs {
    /// The message to relay. With only two positionals the second one is
    /// the body.
    pub fn invocation(&self) -> Invocation {
        let body = self.message.clone().or_else(|| self.title.clone());
        Invocation::from_args(self.classification.clone(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_positionals() {
        let args = CliArgs::try_parse_from([
            "sabnotify",
            "complete",
            "SABnzbd",
            "Download finished: Ubuntu.iso",
        ])
        .unwrap();
        assert_eq!(args.classification.as_deref(), Some("complete"));
        assert_eq!(args.title.as_deref(), Some("SABnzbd"));
        assert_eq!(args.message.as_deref(), Some("Download finished: Ubuntu.iso"));
        assert_eq!(args.timeout, 30);
    }

    #[test]
    fn no_arguments() {
        let args = CliArgs::try_parse_from(["sabnotify"]).unwrap();
        assert!(args.classification.is_none());
        assert!(args.message.is_none());
    }

    #[test]
    fn message_may_start_with_hyphen() {
        let args =
            CliArgs::try_parse_from(["sabnotify", "warning", "SABnzbd", "-5 GB left on /data"])
                .unwrap();
        assert_eq!(args.message.as_deref(), Some("-5 GB left on /data"));
    }

    #[test]
    fn two_positionals_use_second_as_body() {
        let args =
            CliArgs::try_parse_from(["sabnotify", "complete", "Download finished: Ubuntu.iso"])
                .unwrap();
        assert_eq!(
            args.invocation().compose(),
            "Job finished .:. Download finished: Ubuntu.iso"
        );
    }

    #[test]
    fn title_is_ignored_when_message_present() {
        let args = CliArgs::try_parse_from(["sabnotify", "failed", "SABnzbd", "Ubuntu.iso failed"])
            .unwrap();
        assert_eq!(args.invocation().compose(), "Job failed .:. Ubuntu.iso failed");
    }

    #[test]
    fn classification_alone_is_self_test() {
        let args = CliArgs::try_parse_from(["sabnotify", "complete"]).unwrap();
        assert_eq!(args.invocation(), Invocation::self_test());
    }

    #[test]
    fn zero_timeout_rejected() {
        let result = CliArgs::try_parse_from(["sabnotify", "--timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn path_overrides() {
        let args = CliArgs::try_parse_from([
            "sabnotify",
            "--creds",
            "/etc/sabnotify/creds.json",
            "--log-file",
            "/var/log/sabnotify.log",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(args.creds.as_deref(), Some("/etc/sabnotify/creds.json"));
        assert_eq!(args.log_file.as_deref(), Some("/var/log/sabnotify.log"));
        assert_eq!(args.timeout, 5);
    }
}
