/// End-to-end tests of argument parsing through the public entry point
use goverter_cli::prelude::*;

fn argv(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn generate(items: &[&str]) -> GenerateConfig {
    match parse(&argv(items)) {
        Ok(Command::Generate { config }) => *config,
        other => panic!("expected generate, got {:?}", other),
    }
}

#[test]
fn test_empty_argv_is_usage_error() {
    assert!(parse(&[]).is_err());
}

#[test]
fn test_missing_command() {
    let err = parse(&argv(&["x"])).unwrap_err();
    assert_eq!(err.message(), "missing command");
}

#[test]
fn test_missing_pattern() {
    let err = parse(&argv(&["x", "gen"])).unwrap_err();
    assert_eq!(err.message(), "missing PATTERN");
    assert_eq!(err.usage(), usage("x"));
}

#[test]
fn test_generate_defaults() {
    let config = generate(&["x", "gen", "./pkg"]);
    assert_eq!(config, GenerateConfig::new(vec!["./pkg".to_string()]));
    assert_eq!(config.build_tags, "goverter");
    assert_eq!(config.output_build_constraint, "!goverter");
    assert_eq!(config.working_dir, "");
    assert!(config.global.lines.is_empty());
}

#[test]
fn test_global_order_preserved_across_aliases() {
    let config = generate(&["x", "gen", "-g", "a", "-global", "b", "./pkg"]);
    assert_eq!(config.global.lines, vec!["a", "b"]);
}

#[test]
fn test_version() {
    assert_eq!(parse(&argv(&["x", "version"])).unwrap(), Command::Version);
}

#[test]
fn test_help_at_every_level() {
    for args in [&["x", "help"][..], &["x", "-h"][..], &["x", "gen", "-h"][..]] {
        match parse(&argv(args)).unwrap() {
            Command::Help { usage: text } => {
                assert_eq!(text, usage("x"));
                assert_eq!(text.matches("  x ").count(), 7);
            }
            other => panic!("expected help for {:?}, got {:?}", args, other),
        }
    }
}

#[test]
fn test_usage_is_pure() {
    assert_eq!(usage("x").as_bytes(), usage("x").as_bytes());
}

#[test]
fn test_unknown_command_names_token() {
    let err = parse(&argv(&["x", "frobnicate"])).unwrap_err();
    assert!(err.message().contains("frobnicate"));
    assert!(err.to_string().contains("frobnicate"));
}

#[test]
fn test_reparse_is_idempotent() {
    let inputs = [
        argv(&["x", "gen", "-g", "a", "-cwd", "/w", "./..."]),
        argv(&["x", "help"]),
        argv(&["x", "bogus"]),
        argv(&["x", "gen", "-nope", "p"]),
    ];
    for args in &inputs {
        assert_eq!(parse(args), parse(args));
    }
}

#[test]
fn test_selectors_forwarded_verbatim() {
    let config = generate(&["x", "gen", "-cwd", "/src", "--", "-odd", "github.com/a/b/..."]);
    assert_eq!(config.working_dir, "/src");
    assert_eq!(config.package_patterns, vec!["-odd", "github.com/a/b/..."]);
}
