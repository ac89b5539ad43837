use assert_fs::{NamedTempFile, prelude::*};
use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[test]
fn help() -> Result<(), Box<dyn std::error::Error>> {
	tinyjson_cmd()
		.arg("--help")
		.assert()
		.success()
		.stderr(str::is_empty())
		.stdout(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] [INPUTS]...")));
	Ok(())
}

#[rstest]
#[case("--max-depth", "a value is required for '--max-depth <MAX_DEPTH>'")]
#[case("--max-depth=-1", "invalid value '-1' for '--max-depth <MAX_DEPTH>'")]
#[case("--unknown", "unexpected argument '--unknown' found")]
fn bad_arguments(#[case] arg: &str, #[case] message: &str) -> Result<(), Box<dyn std::error::Error>> {
	tinyjson_cmd()
		.arg(arg)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(message));
	Ok(())
}

#[rstest]
#[case("null", "Null\n")]
#[case(" true ", "Boolean(true)\n")]
#[case("-12.5e2", "Number(Float(-1250.0))\n")]
#[case("\"\\u00e9\\n\"", "String(\"é\\n\")\n")]
#[case("[1,\n2]\n", "Array([Number(Integer(1)), Number(Integer(2))])\n")]
#[case("{\"a\":1,\"b\":[true,null]}", "Object({\"a\": Number(Integer(1)), \"b\": Array([Boolean(true), Null])})\n")]
fn stdin(#[case] input: &str, #[case] output: &str) -> Result<(), Box<dyn std::error::Error>> {
	tinyjson_cmd()
		.write_stdin(input)
		.assert()
		.success()
		.stderr(str::is_empty())
		.stdout(output.to_string());
	Ok(())
}

#[test]
fn stdin_dash() -> Result<(), Box<dyn std::error::Error>> {
	tinyjson_cmd()
		.arg("-")
		.write_stdin("[]")
		.assert()
		.success()
		.stdout("Array([])\n");
	Ok(())
}

#[test]
fn file() -> Result<(), Box<dyn std::error::Error>> {
	tinyjson_cmd()
		.arg(get_testdata("sample.json"))
		.assert()
		.success()
		.stderr(str::is_empty())
		.stdout(concat!(
			"Object({\"name\": String(\"tinyjson\"), \"version\": Number(Integer(1)), ",
			"\"ratio\": Number(Float(0.25)), \"tags\": Array([String(\"json\"), String(\"parser\")]), ",
			"\"nested\": Object({\"empty\": Array([]), \"none\": Null, \"ok\": Boolean(true)})})\n"
		));
	Ok(())
}

#[test]
fn malformed_file() -> Result<(), Box<dyn std::error::Error>> {
	let path = get_testdata("malformed.json");
	tinyjson_cmd()
		.arg(&path)
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("while parsing JSON from '{path}'")))
		.stderr(str::contains(
			"malformed JSON at position 0, no value matches at position 16: x]}<EOF>",
		));
	Ok(())
}

#[test]
fn missing_file() -> Result<(), Box<dyn std::error::Error>> {
	tinyjson_cmd()
		.arg("does-not-exist.json")
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("failed to open does-not-exist.json"));
	Ok(())
}

#[rstest]
#[case(&[], "true false", false)]
#[case(&["--lenient"], "true false", true)]
#[case(&[], "[1,]", false)]
#[case(&["--trailing-commas"], "[1,]", true)]
#[case(&["--trailing-commas"], "{\"a\":1,}", true)]
#[case(&["--max-depth", "2"], "[[1]]", true)]
#[case(&["--max-depth", "2"], "[[[1]]]", false)]
fn options(#[case] args: &[&str], #[case] input: &str, #[case] success: bool) -> Result<(), Box<dyn std::error::Error>> {
	let assert = tinyjson_cmd().args(args).write_stdin(input).assert();
	if success {
		assert.success();
	} else {
		assert.failure().code(1).stdout(str::is_empty());
	}
	Ok(())
}

#[test]
fn too_deep_message() -> Result<(), Box<dyn std::error::Error>> {
	tinyjson_cmd()
		.args(["--max-depth", "1"])
		.write_stdin("[[]]")
		.assert()
		.failure()
		.stderr(str::contains("nesting deeper than 1 levels at position 1"));
	Ok(())
}

#[test]
fn trailing_content_message() -> Result<(), Box<dyn std::error::Error>> {
	tinyjson_cmd()
		.write_stdin("{} x")
		.assert()
		.failure()
		.stderr(str::contains("while parsing JSON from <stdin>"))
		.stderr(str::contains("unexpected trailing content at position 3: x<EOF>"));
	Ok(())
}

#[test]
fn pretty_temp_file() -> Result<(), Box<dyn std::error::Error>> {
	let file = NamedTempFile::new("pretty.json")?;
	file.write_str("{\"a\": [true]}")?;
	tinyjson_cmd()
		.args(["--pretty", file.path().to_str().unwrap()])
		.assert()
		.success()
		.stdout("Object(\n    {\n        \"a\": Array(\n            [\n                Boolean(\n                    true,\n                ),\n            ],\n        ),\n    },\n)\n");
	Ok(())
}

#[test]
fn verbose_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
	tinyjson_cmd()
		.arg("-vv")
		.write_stdin("1")
		.assert()
		.success()
		.stdout("Number(Integer(1))\n")
		.stderr(str::contains("parsing 1 characters from <stdin>"));
	Ok(())
}
