//! Custom cargo commands for checked-span.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests under both contract policies
//!   cargo xtask check     - Quick check (tests + clippy)
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz      - Run every fuzz target briefly
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["subview_ops", "cursor_walk", "byte_view"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (SAFETY comments, tests, clippy, Kani)
  test      Run all tests, aborting and catchable contract policies
  check     Quick check (cargo test + clippy)
  kani      Run Kani model checking proofs
  fuzz      Run each fuzz target for 60 seconds
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("checked-span Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking SAFETY comments...");
    let blocks = check_safety_comments()?;
    println!("✓ All {} unsafe blocks documented\n", blocks);

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    clippy()?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs hold\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests, once per contract policy.
///
/// The default build aborts on a violation, so only the `try_*` paths are exercised;
/// the catchable build adds the `#[should_panic]` suites.
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--features", "catchable-contracts"])?;
    run_cargo(&["test", "--quiet", "--all-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    clippy()?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn clippy() -> Result<()> {
    run_cargo(&["clippy", "--quiet", "--all-targets", "--all-features", "--", "-D", "warnings"])
}

/// Run Kani proofs in the standalone proof crate
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    if !kani_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&kani_dir)
        .status()
        .context("Failed to run cargo kani (is kani-verifier installed?)")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Run every fuzz target for a bounded time
fn fuzz() -> Result<()> {
    let root = project_root()?;
    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
            .current_dir(&root)
            .status()
            .with_context(|| format!("Failed to run cargo fuzz for {}", target))?;

        if !status.success() {
            bail!("fuzz target {} found a failure", target);
        }
    }
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every `unsafe` block and impl in `src/` must sit under a `// SAFETY:` comment.
///
/// Returns the number of unsafe sites checked.
fn check_safety_comments() -> Result<usize> {
    let mut files = Vec::new();
    collect_rust_files(&project_root()?.join("src"), &mut files)?;

    let mut sites = 0;
    let mut missing = Vec::new();
    for path in &files {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let lines: Vec<&str> = content.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            let code = line.split("//").next().unwrap_or("");
            if !(code.contains("unsafe {") || code.trim_start().starts_with("unsafe impl")) {
                continue;
            }
            sites += 1;
            // The comment may span several lines above the block.
            let documented = lines[..i]
                .iter()
                .rev()
                .take_while(|l| l.trim_start().starts_with("//") || l.contains("unsafe"))
                .any(|l| l.contains("SAFETY:"));
            if !documented {
                missing.push(format!("{}:{}", path.display(), i + 1));
            }
        }
    }

    if !missing.is_empty() {
        bail!(
            "{} unsafe sites without a SAFETY comment:\n  {}",
            missing.len(),
            missing.join("\n  ")
        );
    }

    Ok(sites)
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_rust_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(())
}
