use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn json_flag_renders_contacts_as_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let script = concat!("1\n7\nAna\n09171234567\n", "2\n7\n", "6\ny\n");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--json")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains(
            r#"{"reference":7,"name":"Ana","phone":"09171234567"}"#,
        ));

    Ok(())
}

#[test]
fn json_flag_keeps_empty_store_notice_as_text() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--json")
        .write_stdin("5\n6\ny\n")
        .assert()
        .success()
        .stdout(contains("No contacts available."));

    Ok(())
}
