//! End-to-end classification and reporting

use std::cell::Cell;
use std::io;

use asod_cli::render::OutputFormat;
use asod_cli::{classify_line, run_classify};

#[test]
fn text_report_per_input() {
    let mut out = Vec::new();
    let inputs =
        ["0", "", "  ", r#"{"isIdentity": true}"#].map(|s| Ok::<_, io::Error>(s.to_string()));
    let written = run_classify(inputs, OutputFormat::Text, &mut out).unwrap();
    assert_eq!(written, 2);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("0\tkind=number"));
    assert!(lines[0].contains("neutral=true"));
    assert!(lines[1].contains("identity=true"));
    assert!(lines[1].contains("capabilities=isIdentity"));
}

#[test]
fn json_report_per_input() {
    let line = classify_line(r#"{"$bigint": "1"}"#, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(parsed["kind"], "bigint");
    assert_eq!(parsed["identity_operand"], true);
    assert_eq!(parsed["falsy_operand"], false);
}

#[test]
fn failing_capability_names_the_method() {
    let err = classify_line(r#"{"isFalsy": {"$throw": "nope"}}"#, OutputFormat::Text).unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("isFalsy"), "{rendered}");
    assert!(rendered.contains("nope"), "{rendered}");
}

#[test]
fn decoding_failure_stops_the_run() {
    let mut out = Vec::new();
    let inputs = ["1", "{", "2"].map(|s| Ok::<_, io::Error>(s.to_string()));
    let err = run_classify(inputs, OutputFormat::Text, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("cannot decode {"));
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn reports_are_written_as_inputs_arrive() {
    let mut out = Vec::new();
    let pulled = Cell::new(0);
    let inputs = ["0", "1"].into_iter().map(|s| {
        pulled.set(pulled.get() + 1);
        Ok::<_, io::Error>(s.to_string())
    });
    let inputs = inputs.chain(std::iter::once_with(|| {
        Err(io::Error::new(io::ErrorKind::InvalidData, "stream broke"))
    }));

    let err = run_classify(inputs, OutputFormat::Text, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("stream broke"), "{err:#}");
    assert_eq!(pulled.get(), 2);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("0\tkind=number"));
}
