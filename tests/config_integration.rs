use std::path::PathBuf;

use dotgrid::config::{ConfigFlags, load_config_flags, parse_flag_tokens, save_config_flags};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".dotgridrc");
    let content = r#"
# comment
--watch

--size 9
   
--dot-color=cyan
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.watch);
    assert_eq!(flags.size, Some(9));
    assert_eq!(flags.dot_color.as_deref(), Some("cyan"));
    assert_eq!(flags.debug_log, None);
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".dotgridrc");
    let content = "--watch\n--size 6\n--debug-log file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_flags = ConfigFlags {
        size: Some(12),
        width: Some(800),
        ..ConfigFlags::default()
    };

    let effective = file_flags.union(&cli_flags);
    assert!(effective.watch, "file flags should remain enabled");
    assert_eq!(effective.size, Some(12), "cli should override size");
    assert_eq!(effective.width, Some(800), "cli flags should be applied");
    assert_eq!(
        effective.debug_log,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_local_override_wins_over_global() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".dotgridrc");
    save_config_flags(
        &global,
        &ConfigFlags {
            size: Some(5),
            dot_color: Some("white".to_string()),
            ..ConfigFlags::default()
        },
    )
    .unwrap();
    std::fs::write(&local, "--dot-color magenta\n").unwrap();

    let merged = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert_eq!(merged.size, Some(5));
    assert_eq!(merged.dot_color.as_deref(), Some("magenta"));
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "--size=7".to_string(),
        "--width=320".to_string(),
        "--debug-log=render.log".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.size, Some(7));
    assert_eq!(flags.width, Some(320));
    assert_eq!(flags.debug_log, Some(PathBuf::from("render.log")));
}
