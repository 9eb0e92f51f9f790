use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Tests that fork take this lock so no child can inherit a script's write
// handle while another test executes that script (ETXTBSY).
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn spawn_guard() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

// Helper function to get the path to the compiled binary
fn mediaprobe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mediaprobe").expect("Failed to find mediaprobe binary");
    cmd.env_remove("MEDIAPROBE_FFPROBE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_subcommand_fails() {
    let _guard = spawn_guard();
    mediaprobe_cmd().assert().failure().stderr(contains("Usage"));
}

#[test]
fn test_probe_requires_file_argument() {
    let _guard = spawn_guard();
    mediaprobe_cmd()
        .arg("probe")
        .assert()
        .failure()
        .stderr(contains("FILE"));
}

#[test]
fn test_missing_ffprobe_is_reported() -> Result<(), Box<dyn Error>> {
    let _guard = spawn_guard();
    mediaprobe_cmd()
        .args(["--ffprobe", "mediaprobe-no-such-ffprobe", "probe", "movie.mkv"])
        .assert()
        .code(127)
        .stderr(contains("Failed to start command 'mediaprobe-no-such-ffprobe'"));
    Ok(())
}

#[test]
fn test_check_with_missing_ffprobe_fails() {
    let _guard = spawn_guard();
    mediaprobe_cmd()
        .env("MEDIAPROBE_FFPROBE", "mediaprobe-no-such-ffprobe")
        .arg("check")
        .assert()
        .code(127)
        .stderr(contains("not found"));
}

#[cfg(unix)]
mod scripted {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    const REPORT: &str = r#"{"streams": [{"index": 0, "codec_type": "video", "codec_name": "hevc", "profile": "Main 10", "width": 3840, "height": 2160, "avg_frame_rate": "24/1", "disposition": {"default": 1}}, {"index": 1, "codec_type": "audio", "codec_name": "eac3", "tags": {"language": "eng"}}], "format": {"filename": "movie.mkv", "nb_streams": 2, "format_name": "matroska,webm", "format_long_name": "Matroska / WebM", "duration": "5400.000000", "size": "4294967296", "bit_rate": "6362915", "probe_score": 100, "tags": {"title": "A Movie"}}}"#;

    fn fake_ffprobe(dir: &TempDir, body: &str) -> Result<PathBuf, Box<dyn Error>> {
        let path = dir.path().join("fake-ffprobe");
        fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    fn report_script(dir: &TempDir) -> Result<PathBuf, Box<dyn Error>> {
        fake_ffprobe(dir, &format!("cat <<'JSON'\n{REPORT}\nJSON"))
    }

    #[test]
    fn test_probe_prints_summary() -> Result<(), Box<dyn Error>> {
        let _guard = spawn_guard();
        let dir = tempdir()?;
        let script = report_script(&dir)?;

        mediaprobe_cmd()
            .arg("--ffprobe")
            .arg(&script)
            .args(["probe", "movie.mkv"])
            .assert()
            .success()
            .stdout(contains("Matroska / WebM (matroska,webm)"))
            .stdout(contains("1:30:00.000"))
            .stdout(contains("4.00 GiB"))
            .stdout(contains("#0 video: hevc (Main 10) 3840x2160 24.000 fps {default}"))
            .stdout(contains("#1 audio: eac3 [eng]"))
            .stdout(contains("A Movie"));
        Ok(())
    }

    #[test]
    fn test_probe_json_output_is_valid() -> Result<(), Box<dyn Error>> {
        let _guard = spawn_guard();
        let dir = tempdir()?;
        let script = report_script(&dir)?;

        let output = mediaprobe_cmd()
            .env("MEDIAPROBE_FFPROBE", &script)
            .args(["probe", "movie.mkv", "--json", "--compact"])
            .output()?;
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["format"]["filename"], "movie.mkv");
        assert_eq!(value["streams"][0]["height"], 2160);
        assert_eq!(value["streams"][1]["tags"]["language"], "eng");
        Ok(())
    }

    #[test]
    fn test_probe_reports_ffprobe_error() -> Result<(), Box<dyn Error>> {
        let _guard = spawn_guard();
        let dir = tempdir()?;
        let script = fake_ffprobe(
            &dir,
            r#"echo '{"error": {"code": -2, "string": "No such file or directory"}}'; exit 1"#,
        )?;

        mediaprobe_cmd()
            .arg("--ffprobe")
            .arg(&script)
            .args(["probe", "missing.mkv"])
            .assert()
            .code(1)
            .stderr(contains("No such file or directory (code -2)"));
        Ok(())
    }

    #[test]
    fn test_probe_reports_invalid_json() -> Result<(), Box<dyn Error>> {
        let _guard = spawn_guard();
        let dir = tempdir()?;
        let script = fake_ffprobe(&dir, "printf 'not json'")?;

        mediaprobe_cmd()
            .arg("--ffprobe")
            .arg(&script)
            .args(["probe", "movie.mkv"])
            .assert()
            .code(1)
            .stderr(contains("Could not decode ffprobe JSON output"));
        Ok(())
    }

    #[test]
    fn test_check_prints_version() -> Result<(), Box<dyn Error>> {
        let _guard = spawn_guard();
        let dir = tempdir()?;
        let script = fake_ffprobe(&dir, "echo 'ffprobe version 7.1 Copyright (c) 2007-2024'")?;

        mediaprobe_cmd()
            .arg("--ffprobe")
            .arg(&script)
            .arg("check")
            .assert()
            .success()
            .stdout(contains("ffprobe version 7.1"));
        Ok(())
    }
}
