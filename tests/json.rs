#![cfg(feature = "json")]
use fizz_buzz::filter::{Filter, Format};
use fizz_buzz::{range, Record};

#[test]
fn records() {
    let json = serde_json::to_value(Record::from(3)).unwrap();
    assert_eq!(json, serde_json::json!({ "n": 3, "value": "Fizz" }));

    let json = serde_json::to_value(Record::from(-7)).unwrap();
    assert_eq!(json, serde_json::json!({ "n": -7, "value": "-7" }));
}

#[test]
fn json_lines() {
    let filter = Filter {
        format: Format::Json,
        ..Filter::default()
    };

    let mut output = Vec::new();
    let summary = filter.run(&b"14\nx\n15\n"[..], &mut output).unwrap();
    assert_eq!(summary.rejected, 1);

    let output = String::from_utf8(output).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(
        lines,
        [
            r#"{"n":14,"value":"14"}"#,
            "null",
            r#"{"n":15,"value":"FizzBuzz"}"#,
        ]
    );
}

#[test]
fn json_range() {
    let filter = Filter {
        format: Format::Json,
        ..Filter::default()
    };

    let mut output = Vec::new();
    for record in range(4, 6) {
        filter.write_record(&mut output, record).unwrap();
    }

    let values: Vec<serde_json::Value> = output
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_slice(line).unwrap())
        .collect();

    assert_eq!(values.len(), 3);
    assert_eq!(values[1]["value"], "Buzz");
    assert_eq!(values[2]["n"], 6);
}
