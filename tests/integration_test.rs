use assert_cmd::Command;
use std::process::Output;

#[test]
fn missing_file() {
    let output = run("./tests/this_file_does_not_exist.csv");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("NotFound"));
}

#[test]
fn empty_file() {
    let output = run("./tests/empty.csv");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, expect(&[]));
}

#[test]
fn junk_file() {
    let output = run("./tests/junk.csv");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, expect(&[]));
}

#[test]
fn batch() {
    let output = run("./tests/batch.csv");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(
        stdout,
        expect(&["0001,1,111,100.00,1", "0001,2,222,300.00,3"])
    );
}

#[test]
fn rejected_rows_are_skipped() {
    let output = run("./tests/rejected.csv");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, expect(&["0001,1,111,25.50,0"]));
}

#[test]
fn rejected_rows_are_logged() {
    let mut cmd = Command::cargo_bin("minibank").unwrap();
    let output = cmd
        .env("RUST_LOG", "warn")
        .arg("./tests/rejected.csv")
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("operation rejected"));
    assert!(stderr.contains("skipping unreadable row"));
}

#[test]
fn overflowing_deposit_is_skipped() {
    let output = run("./tests/overflow.csv");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with(
        "branch,account,tax_id,balance,withdrawals\n0001,1,111,79228162514264337593543950335"
    ));
    assert!(stdout.ends_with("0001,2,222,5.00,0\n"));
}

#[test]
fn short_rows_and_whitespace() {
    let output = run("./tests/short_rows.csv");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, expect(&["0001,1,111,0.00,1"]));
}

#[test]
fn limits_from_environment() {
    let mut cmd = Command::cargo_bin("minibank").unwrap();
    let output = cmd
        .env("MINIBANK_MAX_WITHDRAWALS", "1")
        .env("MINIBANK_WITHDRAWAL_CEILING", "2000")
        .arg("./tests/batch.csv")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(
        stdout,
        expect(&["0001,1,111,100.00,1", "0001,2,222,499.00,1"])
    );
}

#[test]
fn invalid_limits_fall_back_to_defaults() {
    let mut cmd = Command::cargo_bin("minibank").unwrap();
    let output = cmd
        .env("RUST_LOG", "warn")
        .env("MINIBANK_MAX_WITHDRAWALS", "many")
        .arg("./tests/batch.csv")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("falling back to default withdrawal limits"));
    assert_eq!(
        stdout,
        expect(&["0001,1,111,100.00,1", "0001,2,222,300.00,3"])
    );
}

#[test]
fn interactive_session() {
    let output = interactive(
        "1\n111\nAna\n01/02/1990\nRua A, 1\n\
         2\n111\n\
         3\n111\n200.00\n\
         4\n111\n600.00\n\
         4\n111\n100.00\n\
         5\n111\n\
         0\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Success: Account opened. Branch: 0001 | Account: 1"));
    assert!(stdout.contains("Error: insufficient balance."));
    assert!(stdout.contains("Deposit: 200.00\nWithdrawal: 100.00\n"));
    assert!(stdout.contains("Balance: 100.00"));
    assert!(stdout.ends_with("Thank you for using minibank!\n"));
}

#[test]
fn interactive_withdrawal_limits() {
    let output = interactive(
        "1\n111\nAna\n\n\n2\n111\n3\n111\n1000\n\
         4\n111\n501\n\
         4\n111\n10\n4\n111\n10\n4\n111\n10\n\
         4\n111\n10\n\
         0\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Error: withdrawal exceeds maximum allowed amount of 500.00."));
    assert_eq!(stdout.matches("Success: Withdrew 10.00.").count(), 3);
    assert!(stdout.contains("Error: daily withdrawal limit reached."));
}

#[test]
fn interactive_unknown_customer() {
    let output = interactive("2\n999\n3\n999\n0\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Error: customer 999 not found, register first."));
    assert!(stdout.contains("Error: no account found for customer 999."));
}

#[test]
fn interactive_end_of_input() {
    let output = interactive("1\n111\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.ends_with("Thank you for using minibank!\n"));
}

fn run(file: &str) -> Output {
    let mut cmd = Command::cargo_bin("minibank").unwrap();
    cmd.arg(file).output().unwrap()
}

fn interactive(input: &str) -> Output {
    let mut cmd = Command::cargo_bin("minibank").unwrap();
    cmd.write_stdin(input).output().unwrap()
}

fn expect(expected_accounts: &[&str]) -> String {
    let mut expect = String::from("branch,account,tax_id,balance,withdrawals\n");
    for i in expected_accounts {
        expect.push_str(i);
        expect.push('\n');
    }

    expect
}
