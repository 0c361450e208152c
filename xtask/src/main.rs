//! Development automation tasks for the Workdeck workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! Output is plain `println!`/`eprintln!`; this is a developer tool.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::{bail, Context};

const TASKS: [(&str, &str); 6] = [
    ("ci", "Run all CI checks (fmt, clippy, test, deny, audit)"),
    ("fmt", "Check Rust code formatting"),
    ("clippy", "Run Clippy lints on every target"),
    ("test", "Run all workspace tests"),
    ("deny", "Check dependencies with cargo-deny"),
    ("audit", "Audit dependencies for security vulnerabilities"),
];

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("deny") => run_deny(),
        Some("audit") => run_audit(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}\n");
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Workdeck Development Tasks\n");
    println!("USAGE:\n    cargo xtask <TASK>\n");
    println!("TASKS:");
    for (name, about) in TASKS {
        println!("    {name:<8}  {about}");
    }
    println!("    {:<8}  Show this help message", "help");
}

fn run_ci() -> anyhow::Result<()> {
    let steps: [(&str, fn() -> anyhow::Result<()>); 5] = [
        ("Checking format", run_fmt),
        ("Running Clippy", run_clippy),
        ("Running tests", run_test),
        ("Checking dependencies", run_deny),
        ("Auditing dependencies", run_audit),
    ];

    for (index, (label, step)) in steps.iter().enumerate() {
        println!("\n==> Step {}/{}: {label}...", index + 1, steps.len());
        step()?;
    }

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        "Clippy run failed. See output above.",
    )
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace"], "Tests failed")
}

fn run_deny() -> anyhow::Result<()> {
    require_subcommand("deny", "cargo-deny")?;
    cargo(&["deny", "check"], "cargo-deny found issues")
}

fn run_audit() -> anyhow::Result<()> {
    require_subcommand("audit", "cargo-audit")?;
    cargo(&["audit"], "cargo-audit found vulnerabilities")
}

/// Run `cargo <args>` and fail with `failure` on a non-zero exit.
fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("failed to spawn cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("{failure}");
    }
    Ok(())
}

fn require_subcommand(subcommand: &str, crate_name: &str) -> anyhow::Result<()> {
    let installed = Command::new("cargo")
        .args([subcommand, "--version"])
        .output()
        .is_ok_and(|output| output.status.success());

    if !installed {
        eprintln!("{crate_name} is not installed.");
        eprintln!("Install it with: cargo install {crate_name}");
        bail!("{crate_name} not found");
    }
    Ok(())
}
