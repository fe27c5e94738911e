use clap::Parser;
use ssl_expiry::cli::{Cli, OutputFormat};
use ssl_expiry::config::ProbeSettings;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["ssl-expiry", "--urls", "hosts.txt"]).unwrap();
    assert_eq!(cli.urls, PathBuf::from("hosts.txt"));
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(cli.days.is_none());

    let mut probe = ProbeSettings::default();
    cli.apply_overrides(&mut probe);
    assert_eq!(probe.threshold_days, 7);
    assert_eq!(probe.concurrency, 4);
    assert_eq!(probe.connect_timeout_secs, 15);
}

#[test]
fn test_overrides() {
    let cli = Cli::try_parse_from([
        "ssl-expiry", "-u", "hosts.txt", "-d", "30", "-c", "8", "--timeout", "5", "--format",
        "json",
    ])
    .unwrap();
    assert_eq!(cli.format, OutputFormat::Json);

    let mut probe = ProbeSettings::default();
    cli.apply_overrides(&mut probe);
    assert_eq!(probe.threshold_days, 30);
    assert_eq!(probe.concurrency, 8);
    assert_eq!(probe.connect_timeout_secs, 5);
    assert_eq!(probe.handshake_timeout_secs, 15);
}

#[test]
fn test_urls_required() {
    let err = Cli::try_parse_from(["ssl-expiry", "-d", "3"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}
