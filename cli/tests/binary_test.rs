//! Process-level behaviour of the `mach` binary: exit codes and streams.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn mach(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mach"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn mach")
}

fn source_file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::with_suffix(".mach").unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn run_success_exits_zero() {
    let src = source_file("set x 0\nlabel loop\ndisplay x\nexec x add x 1\nexec c lt x 3\nbranchif c loop\nend\n");
    let path = src.path().to_str().unwrap();

    for args in [vec![path], vec!["run", path]] {
        let out = mach(&args);
        assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
        assert_eq!(String::from_utf8_lossy(&out.stdout), "0\n1\n2\n");
    }
}

#[test]
fn runtime_fault_exits_one_with_pc() {
    let src = source_file("set s \"a\"\ndisplay 1\nexec d add s 1\ndisplay d\n");
    let out = mach(&[src.path().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("pc 5"), "stderr: {}", stderr);
}

#[test]
fn compile_error_exits_one() {
    let src = source_file("jump nowhere\n");
    let out = mach(&[src.path().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown label `nowhere`"), "stderr: {}", stderr);
}

#[test]
fn missing_arguments_print_usage() {
    let out = mach(&[]);

    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}
