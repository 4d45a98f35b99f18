/* src/cli/core/src/ui.rs */

// Terminal output for the `foodgram` binary. Diagnostics go through
// `tracing`; this module only prints what the user asked to see.

#![allow(clippy::print_stdout, clippy::print_stderr)]

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const CYAN: &str = "\x1b[36m";

pub fn banner(title: &str, subtitle: Option<&str>) {
  match subtitle {
    Some(sub) => println!("\n  {BOLD}foodgram {title}{RESET} {DIM}{sub}{RESET}\n"),
    None => println!("\n  {BOLD}foodgram {title}{RESET}\n"),
  }
}

pub fn arrow(msg: &str) {
  println!("  {CYAN}→{RESET} {msg}");
}

pub fn ok(msg: &str) {
  println!("  {GREEN}✓{RESET} {msg}");
}

pub fn fail(msg: &str) {
  eprintln!("  {RED}✗{RESET} {msg}");
}

pub fn detail(msg: &str) {
  println!("    {msg}");
}

/// Raw output, e.g. a rendered document piped to a file.
pub fn raw(text: &str) {
  println!("{text}");
}
