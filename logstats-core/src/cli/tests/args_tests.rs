use super::test_helpers::date;
use crate::cli::AnalyzeArgs;
use crate::export::ExportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    args: AnalyzeArgs,
}

#[test]
fn parses_short_flags() {
    let cli = TestCli::try_parse_from([
        "logstats",
        "-p",
        "logs/*.log",
        "-f",
        "markdown",
        "-o",
        "report.md",
    ])
    .unwrap();

    assert_eq!(cli.args.path, "logs/*.log");
    assert_eq!(cli.args.format, ExportFormat::Markdown);
    assert_eq!(cli.args.output, PathBuf::from("report.md"));
    assert_eq!(cli.args.from, None);
    assert_eq!(cli.args.to, None);
}

#[test]
fn parses_date_range() {
    let cli = TestCli::try_parse_from([
        "logstats",
        "--path",
        "access.log",
        "--format",
        "JSON",
        "--output",
        "out.json",
        "--from",
        "2015-05-17",
        "--to",
        "2015-05-18",
    ])
    .unwrap();

    assert_eq!(cli.args.format, ExportFormat::Json);
    assert_eq!(cli.args.from, Some(date(2015, 5, 17)));
    assert_eq!(cli.args.to, Some(date(2015, 5, 18)));
}

#[test]
fn rejects_unknown_format_and_bad_dates() {
    let bad_format =
        TestCli::try_parse_from(["logstats", "-p", "a.log", "-f", "xml", "-o", "out.xml"]);
    let bad_date = TestCli::try_parse_from([
        "logstats", "-p", "a.log", "-f", "json", "-o", "out.json", "--from", "17/05/2015",
    ]);
    let missing_path = TestCli::try_parse_from(["logstats", "-f", "json", "-o", "out.json"]);

    assert!(bad_format.is_err());
    assert!(bad_date.is_err());
    assert!(missing_path.is_err());
}
