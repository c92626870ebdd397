//! Scripted REPL sessions.

use std::io::Cursor;

fn transcript(script: &str) -> String {
    let mut output = Vec::new();
    tictactoe::repl::run(Cursor::new(script), &mut output).expect("in-memory i/o");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn test_win_session() {
    let out = transcript("move 0\nmove 4\nmove 1\nmove 5\nmove 2\n");
    assert_eq!(
        out,
        "Continued(O)\nContinued(X)\nContinued(O)\nContinued(X)\nWin(X)\nX wins!\n"
    );
}

#[test]
fn test_tie_session() {
    let out = transcript("move 0\nmove 1\nmove 2\nmove 4\nmove 3\nmove 5\nmove 7\nmove 6\nmove 8\n");
    assert!(out.ends_with("Tie\nIt's a tie!\n"), "{out}");
}

#[test]
fn test_ignored_moves() {
    let out = transcript("move 4\nmove 4\n");
    assert_eq!(out, "Continued(O)\nIgnored\n");
}

#[test]
fn test_out_of_range_keeps_going() {
    let out = transcript("move 10\nmove 0\n");
    assert_eq!(
        out,
        "error: cell index 10 is out of range (expected 0-8)\nContinued(O)\n"
    );
}

#[test]
fn test_bad_lines_reported() {
    let out = transcript("\nfly\nmove x\nmove\n");
    assert_eq!(
        out,
        "error: unknown command `fly` (try `help`)\n\
         error: `x` is not a cell index\n\
         error: `move` needs a cell index 0-8\n"
    );
}

#[test]
fn test_reset_and_board() {
    let out = transcript("move 0\nmove 4\nboard\nreset\nboard\nstatus\n");
    assert_eq!(
        out,
        "Continued(O)\nContinued(X)\nX . .\n. O .\n. . .\nReset\n. . .\n. . .\n. . .\nin progress, X to move\n"
    );
}

#[test]
fn test_status_after_win() {
    let out = transcript("move 0\nmove 4\nmove 1\nmove 5\nmove 2\nstatus\nmove 8\n");
    assert!(out.ends_with("won by X\nIgnored\n"), "{out}");
}

#[test]
fn test_quit_stops_reading() {
    let out = transcript("move 0\nquit\nmove 1\n");
    assert_eq!(out, "Continued(O)\n");
}

#[test]
fn test_help_lists_commands() {
    let out = transcript("help\n");
    assert!(out.contains("move <0-8>"));
    assert!(out.contains("reset"));
}
