use clap::CommandFactory;
use rstest::rstest;

use super::*;

fn parse(args: &[&str]) -> Opt {
    Opt::try_parse_from(std::iter::once("globgrep").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_patterns() {
    let opt = parse(&["*.rs", "-e", "-x*", "Cargo.*", "--pattern", "?"]);
    assert_eq!(opt.patterns, vec!["*.rs", "Cargo.*"]);
    assert_eq!(opt.all_patterns().collect::<Vec<_>>(), vec!["*.rs", "Cargo.*", "-x*", "?"]);
}

#[test]
fn test_flags() {
    let opt = parse(&["-vcnH", "--show-pattern", "--mode", "all", "-f", "a.log", "-f", "-", "x"]);
    assert!(opt.invert_match);
    assert!(opt.count);
    assert!(opt.line_number);
    assert!(opt.with_filename);
    assert!(opt.show_pattern);
    assert_eq!(opt.mode, Some(MatchMode::All));
    assert_eq!(opt.files, vec![PathBuf::from("a.log"), PathBuf::from("-")]);
}

#[test]
fn test_defaults() {
    let opt = parse(&["x"]);
    assert!(!opt.invert_match);
    assert!(opt.files.is_empty());
    assert!(opt.config.is_empty());
}

#[test]
fn test_patterns_are_optional() {
    let opt = parse(&["--count"]);
    assert!(opt.patterns.is_empty());
    assert_eq!(opt.all_patterns().count(), 0);
}

#[test]
fn test_invalid_mode() {
    assert!(Opt::try_parse_from(["globgrep", "--mode", "some", "x"]).is_err());
}

#[rstest]
#[case(&[], &[], false)]
#[case(&["a.yaml"], &["a.yaml"], false)]
#[case(&["a.yaml", "b.toml"], &["a.yaml", "b.toml"], false)]
#[case(&["a.yaml", "-"], &[], true)]
#[case(&["a.yaml", "", "b.toml"], &["b.toml"], true)]
#[case(&["-", "a.yaml", "-", "b.toml"], &["b.toml"], true)]
fn test_config_files(#[case] args: &[&str], #[case] expected: &[&str], #[case] no_default: bool) {
    let args = args.iter().flat_map(|x| ["--config", *x]).collect::<Vec<_>>();
    let opt = parse(&args);
    let (files, skip) = opt.config_files();
    assert_eq!(files, expected);
    assert_eq!(skip, no_default);
}
