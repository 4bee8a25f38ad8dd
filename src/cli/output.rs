//! Output formatting for CLI

use crate::tictactoe::Board;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board as its wire encoding followed by an indented grid
pub fn print_board(title: &str, board: &Board) {
    print_kv(title, &board.encode());
    for row in board.to_string().lines() {
        println!("  {:20} {row}", "");
    }
}
