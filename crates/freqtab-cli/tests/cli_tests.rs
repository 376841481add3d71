use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn freqtab(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_freqtab"))
        .args(args)
        .output()
        .expect("Failed to execute freqtab")
}

fn freqtab_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_freqtab"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn freqtab");

    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "freqtab failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn letters_json_hello_world() {
    let output = freqtab(&["letters", "--text", "hello world", "--output-format", "json"]);
    let json = stdout_json(&output);

    assert_eq!(json["total"], 10);
    assert_eq!(json["unique"], 7);
    // without --top, entries are alphabetical
    let tokens: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["token"].as_str().unwrap())
        .collect();
    assert_eq!(tokens, vec!["d", "e", "h", "l", "o", "r", "w"]);
}

#[test]
fn letters_top_one_is_most_common() {
    let output = freqtab(&[
        "letters",
        "--text",
        "hello world",
        "--top",
        "1",
        "--output-format",
        "json",
    ]);
    let json = stdout_json(&output);

    assert_eq!(json["entries"], serde_json::json!([{"token": "l", "count": 3}]));
}

#[test]
fn words_read_from_stdin() {
    let output = freqtab_with_stdin(&["words", "--output-format", "json"], b"aa bb aa");
    let json = stdout_json(&output);

    assert_eq!(json["total"], 3);
    assert_eq!(
        json["entries"],
        serde_json::json!([{"token": "aa", "count": 2}, {"token": "bb", "count": 1}])
    );
}

#[test]
fn words_boundary_rule_strips_punctuation() {
    let output = freqtab(&[
        "words",
        "--text",
        "Dog. dog, DOG!",
        "--rule",
        "boundary",
        "--output-format",
        "json",
    ]);
    let json = stdout_json(&output);

    assert_eq!(json["entries"], serde_json::json!([{"token": "dog", "count": 3}]));
}

#[test]
fn empty_text_is_not_an_error() {
    let output = freqtab(&["analyze", "--text", "", "--output-format", "json"]);
    let json = stdout_json(&output);

    assert_eq!(json["letter_count"], 0);
    assert_eq!(json["letters"], serde_json::json!({}));
    assert!(json.get("letter_statistics").is_none());
    assert_eq!(json["top_words"], serde_json::json!([]));
}

#[test]
fn analyze_json_report() {
    let output = freqtab(&[
        "analyze",
        "--text",
        "the cat and the hat",
        "--top",
        "2",
        "--output-format",
        "json",
    ]);
    let json = stdout_json(&output);

    assert_eq!(json["word_count"], 5);
    assert_eq!(json["unique_words"], 4);
    assert_eq!(json["word_rule"], "whitespace");
    assert_eq!(
        json["word_statistics"]["most_common"],
        serde_json::json!({"token": "the", "count": 2})
    );
    assert_eq!(json["top_words"].as_array().unwrap().len(), 2);
}

#[test]
fn analyze_text_output() {
    let output = freqtab(&["analyze", "--text", "hello world"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total letters: 10"));
    assert!(stdout.contains("Most common letter: 'l' (appears 3 times)"));
    assert!(stdout.contains("1. 'l': 3 times"));
}

#[test]
fn letters_ascii_chart() {
    let output = freqtab(&[
        "letters", "--text", "aab", "--top", "2", "--chart", "--width", "4",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("LETTER FREQUENCY CHART\n"));
    assert!(stdout.contains("a  | #### 2\n"));
    assert!(stdout.contains("b  | ## 1\n"));
}

#[test]
fn empty_chart_reports_no_data() {
    let output = freqtab(&["words", "--text", "", "--chart"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No data to chart"));
}

#[test]
fn invalid_utf8_input_exits_with_input_error() {
    let path = std::env::temp_dir().join(format!("freqtab-invalid-{}.txt", std::process::id()));
    std::fs::write(&path, b"caf\xe9").unwrap();

    let output = freqtab(&[
        "letters",
        path.to_str().unwrap(),
        "--output-format",
        "json",
    ]);
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(2));
    let err: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["exit_code"], 2);
    assert_eq!(err["kind"], "input");
    assert!(err["error"].as_str().unwrap().contains("not valid UTF-8"));
}

#[test]
fn missing_file_exits_with_runtime_error() {
    let output = freqtab(&["words", "no-such-file.txt"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: Failed to open file 'no-such-file.txt'"));
}

#[test]
fn unknown_word_rule_is_rejected() {
    let output = freqtab(&["words", "--text", "x", "--rule", "regex"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown word rule: 'regex'"));
}

#[test]
fn unknown_output_format_is_rejected() {
    let output = freqtab(&["letters", "--text", "x", "--output-format", "xml"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid value 'xml'"));
}

#[test]
fn output_format_before_subcommand() {
    let output = freqtab(&["--output-format", "json", "words", "--text", "aa bb aa"]);
    let json = stdout_json(&output);

    assert_eq!(json["unique"], 2);
}

#[test]
fn oversized_chart_width_is_rejected() {
    let output = freqtab(&[
        "letters",
        "--text",
        "aab",
        "--chart",
        "--width",
        "18446744073709551615",
    ]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--width"));
}

#[test]
fn zero_chart_width_is_rejected() {
    let output = freqtab(&["letters", "--text", "aab", "--chart", "--width", "0"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn widest_chart_width_renders() {
    let output = freqtab(&["letters", "--text", "aab", "--chart", "--width", "1000"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(&format!("a  | {} 2\n", "#".repeat(1000))));
    assert!(stdout.contains(&format!("b  | {} 1\n", "#".repeat(500))));
}

#[test]
fn sample_text_flag() {
    let output = freqtab(&["words", "--sample", "--top", "1", "--output-format", "json"]);
    let json = stdout_json(&output);

    assert_eq!(json["total"], 16);
    assert_eq!(json["entries"], serde_json::json!([{"token": "the", "count": 2}]));
}
