use cmdline::{CmdParser, FlagKind, ParseError, ParserConfig};
use std::fs;
use tempfile::TempDir;

fn parser() -> CmdParser {
    let mut parser = CmdParser::new();
    parser.add_flag(FlagKind::Int, "n", false);
    parser.add_flag(FlagKind::String, "s", false);
    parser.add_flag(FlagKind::Bool, "verbose", false);
    parser
}

#[test]
fn file_parses_like_the_joined_string() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("args.txt");
    fs::write(&path, "-n 5 # comment\n\n-s hello\n")?;

    let mut from_file = parser();
    from_file.parse_from_file(&path)?;

    let mut from_str = parser();
    from_str.parse_from_str("-n 5 -s hello")?;

    for name in ["n", "s", "verbose"] {
        assert_eq!(from_file.get_var(name), from_str.get_var(name), "{name}");
        assert_eq!(from_file.is_loaded(name), from_str.is_loaded(name), "{name}");
    }
    Ok(())
}

#[test]
fn flag_and_value_may_span_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("args.txt");
    fs::write(&path, "# run settings\n-s\n  world\n\t# trailing note\n-verbose\n")?;

    let mut parser = parser();
    parser.parse_from_file(&path)?;

    assert_eq!(parser.get::<String>("s")?, "world");
    assert!(parser.get::<bool>("verbose")?);
    assert!(!parser.is_loaded("n"));
    Ok(())
}

#[test]
fn missing_file_is_an_io_failure() {
    let tmp = TempDir::new().unwrap();
    let mut parser = parser();

    let err = parser.parse_from_file(tmp.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, ParseError::Io { context: Some(_), .. }), "unexpected error: {err:?}");
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn file_contents_go_through_required_checks() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("args.txt");
    fs::write(&path, "-s only\n")?;

    let mut parser = parser();
    parser.add_flag(FlagKind::Int, "count", true);

    let err = parser.parse_from_file(&path).unwrap_err();
    assert!(matches!(err, ParseError::MissingRequired { .. }));
    assert!(parser.is_loaded("s"));
    Ok(())
}

#[test]
fn configured_comment_marker_is_honoured() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("args.txt");
    fs::write(&path, "-n 3 % three\n% -s skipped\n")?;

    let config = ParserConfig { comment_marker: '%', ..ParserConfig::default() };
    let mut parser = CmdParser::with_config(config);
    parser.add_flag(FlagKind::Int, "n", false);
    parser.add_flag(FlagKind::String, "s", false);
    parser.parse_from_file(&path)?;

    assert_eq!(parser.get::<isize>("n")?, 3);
    assert!(!parser.is_loaded("s"));
    Ok(())
}
