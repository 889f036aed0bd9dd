use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Run the binary with an isolated HOME so no user config leaks in.
fn run(home: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stringmanip"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The binary may exit before reading stdin (argument errors, `list`)
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn sorts_stdin_naturally_by_default() {
    let home = TempDir::new().unwrap();
    let output = run(&home, &["sort"], "item10\nitem2\nitem1\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "item1\nitem2\nitem10\n");
}

#[test]
fn sorts_with_named_strategy() {
    let home = TempDir::new().unwrap();
    let output = run(&home, &["sort", "line-length-long-short"], "a\nccc\nbb");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "ccc\nbb\na");
}

#[test]
fn sorts_multiple_selections() {
    let home = TempDir::new().unwrap();
    let output = run(
        &home,
        &["-s", "9..13", "-s", "15..18", "-s", "20..26", "sort"],
        "let x = [pear, fig, banana];",
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "let x = [banana, fig, pear];");
}

#[test]
fn converts_case_from_input_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("input.txt");
    std::fs::write(&input, "11foo22fooBAR33BAR44foo55x6Y7Z\n").unwrap();

    let output = run(&home, &["case", "--input", input.to_str().unwrap()], "");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "11.foo22.foo.bar33.bar44.foo55.x6.y7.z\n");
}

#[test]
fn uses_defaults_from_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "case_style = \"pascal\"\n").unwrap();

    let output = run(
        &home,
        &["case", "--config", config.to_str().unwrap()],
        "http_request_id",
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "HttpRequestId");
}

#[test]
fn reads_config_from_home_directory() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config/stringmanip");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "sort_strategy = \"case-sensitive-z-a\"\n",
    )
    .unwrap();

    let output = run(&home, &["sort"], "a\nc\nb\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "c\nb\na\n");
}

#[test]
fn invalid_selection_fails() {
    let home = TempDir::new().unwrap();
    let output = run(&home, &["-s", "0..99", "sort"], "short");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid selection"));
}

#[test]
fn unknown_strategy_fails() {
    let home = TempDir::new().unwrap();
    let output = run(&home, &["sort", "shuffle"], "a\nb");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown sort strategy: shuffle"));
}

#[test]
fn lists_names() {
    let home = TempDir::new().unwrap();
    let output = run(&home, &["list"], "");

    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.contains("case-insensitive-z-a"));
    assert!(listing.contains("screaming-snake"));
}
