use std::process::Command;

#[test]
fn cli_compiles_without_warnings() {
    let status = Command::new(env!("CARGO"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["check", "--quiet", "--bin", "color-alchemy"])
        .status()
        .expect("failed to invoke cargo check for color-alchemy CLI binary");

    assert!(status.success(), "cargo check --bin color-alchemy should succeed");
}

#[test]
fn levels_listing_reads_a_fresh_store() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_color-alchemy"))
        .current_dir(dir.path())
        .args(["--date", "2026-10-19", "levels"])
        .output()
        .expect("failed to run color-alchemy levels");

    assert!(output.status.success(), "levels should succeed on an empty store");
    let stdout = String::from_utf8(output.stdout).expect("utf8 output");
    assert!(stdout.starts_with("50 levels, 1 unlocked (2026-10-19)"));
    assert_eq!(stdout.matches("[open]").count(), 1);
    assert_eq!(stdout.matches("[locked]").count(), 49);
}

#[test]
fn corrupt_progress_file_does_not_block_startup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = dir.path().join("progress.json");
    std::fs::write(&store, r#"{"unlockedLevels": "[0,1]", "dailyWo"#).expect("seed file");

    let output = Command::new(env!("CARGO_BIN_EXE_color-alchemy"))
        .current_dir(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--date", "2026-10-19", "levels"])
        .output()
        .expect("failed to run color-alchemy levels");

    assert!(output.status.success(), "a corrupt store must fall back to defaults");
    let stdout = String::from_utf8(output.stdout).expect("utf8 output");
    assert!(stdout.starts_with("50 levels, 1 unlocked (2026-10-19)"));
}
