//! End-to-end tests for the `contacts` binary.
//!
//! Each test feeds a scripted conversation on stdin and checks stdout.

use assert_cmd::Command;
use predicates::prelude::*;

fn contacts() -> Command {
    let mut cmd = Command::cargo_bin("contacts").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("CONTACT_BOOK_PAGE_SIZE")
        .env_remove("CONTACT_BOOK_PROMPT")
        .env_remove("CONTACT_BOOK_LOG");
    cmd
}

#[test]
fn test_greeting_and_exit() {
    contacts()
        .write_stdin("hello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Bot assistant is running. Type 'exit' to exit.",
        ))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::ends_with("Good bye!\n"));
}

#[test]
fn test_exit_stops_reading_input() {
    contacts()
        .write_stdin("good bye\nhello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?").not());
}

#[test]
fn test_add_and_lookup() {
    contacts()
        .write_stdin(
            "add john 1234567890 1990-05-01\n\
             phone john\n\
             change john 0987654321\n\
             phone john\n\
             close\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added contact: john, 1234567890, Birthday: 1990-05-01",
        ))
        .stdout(predicate::str::contains("Phone number for john: 1234567890"))
        .stdout(predicate::str::contains("Updated contact: john, 0987654321"))
        .stdout(predicate::str::contains("Phone number for john: 0987654321"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    contacts()
        .write_stdin(
            "add john 123 1990-05-01\n\
             phone unknownperson\n\
             sing\n\
             show page 0\n\
             hello\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid phone number format"))
        .stdout(predicate::str::contains(
            "Error: Contact 'unknownperson' not found.",
        ))
        .stdout(predicate::str::contains("Error: Unknown command."))
        .stdout(predicate::str::contains("Invalid page number."))
        .stdout(predicate::str::contains("How can I help you?"));
}

#[test]
fn test_pagination() {
    let mut script = String::new();
    for i in 1..=6 {
        script.push_str(&format!("add user{} 555000000{} 1990-01-0{}\n", i, i, i));
    }
    script.push_str("show all\nshow page 2\nexit\n");

    contacts()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: user5, phones: 5550000005"))
        .stdout(predicate::str::contains(
            "Enter a command: Contact name: user6, phones: 5550000006, Birthday: 1990-01-06\n",
        ));
}

#[test]
fn test_page_size_flag() {
    contacts()
        .args(["--page-size", "1", "--prompt", "> "])
        .write_stdin(
            "add ann 1111111111 1990-01-01\n\
             add bob 2222222222 1990-01-02\n\
             show all\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "> Contact name: ann, phones: 1111111111, Birthday: 1990-01-01\n> Good bye!",
        ));
}

#[test]
fn test_zero_page_size_rejected() {
    contacts()
        .args(["--page-size", "0"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("page size must be at least 1"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    contacts()
        .write_stdin("show all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found"));
}
