//! End-to-end tests of the optjpg binary.
//!
//! Runs the real binary against a temp photo directory, with stub
//! `convert` and `jpegoptim` executables prepended to PATH. The stubs
//! append their argv to a log file (and the convert stub writes its
//! output file), so tests can assert the exact command lines a run
//! issues without ImageMagick installed. Tests that need the real tools
//! are `#[ignore]`d.

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestEnv {
    _tmp: TempDir,
    /// The photo directory optjpg runs against.
    pub pics: PathBuf,
    bin: PathBuf,
    log: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let pics = tmp.path().join("pics");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&pics).expect("create pics dir");
        fs::create_dir_all(&bin).expect("create stub bin dir");
        let log = tmp.path().join("invocations.log");

        let env = Self {
            _tmp: tmp,
            pics,
            bin,
            log,
        };
        env.install_stub(
            "convert",
            "#!/bin/sh\n\
             echo \"convert $*\" >> \"$OPTJPG_TEST_LOG\"\n\
             for dst; do :; done\n\
             echo resized > \"$dst\"\n",
        );
        env.install_stub(
            "jpegoptim",
            "#!/bin/sh\n\
             echo \"jpegoptim $*\" >> \"$OPTJPG_TEST_LOG\"\n",
        );
        env
    }

    /// Replace the convert stub with one that fails (exit 1, stderr
    /// message) whenever its argv contains `needle`.
    fn break_convert_on(&self, needle: &str) {
        self.install_stub(
            "convert",
            &format!(
                "#!/bin/sh\n\
                 echo \"convert $*\" >> \"$OPTJPG_TEST_LOG\"\n\
                 case \"$*\" in *{needle}*)\n\
                   echo 'improper image header' >&2\n\
                   exit 1;;\n\
                 esac\n\
                 for dst; do :; done\n\
                 echo resized > \"$dst\"\n"
            ),
        );
    }

    fn install_stub(&self, name: &str, script: &str) {
        let path = self.bin.join(name);
        fs::write(&path, script).expect("write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    }

    fn add_photo(&self, name: &str) {
        fs::write(self.pics.join(name), b"jpeg-bytes").expect("write photo");
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("optjpg").unwrap();
        let path = std::env::var("PATH").unwrap_or_default();
        cmd.env("PATH", format!("{}:{}", self.bin.display(), path))
            .env("OPTJPG_TEST_LOG", &self.log);
        cmd
    }

    fn logged(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn in_pics(env: &TestEnv, name: &str) -> String {
    env.pics.join(name).display().to_string()
}

// =============================================================================
// CLI surface
// =============================================================================

#[test]
fn help_shows_usage_and_defaults() {
    TestEnv::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("640x480"))
        .stdout(contains("85"))
        .stdout(contains("NAME_PREFIX"));
}

#[test]
fn version_flag_works() {
    TestEnv::new().cmd().arg("--version").assert().success();
}

#[test]
fn path_is_required() {
    TestEnv::new().cmd().assert().failure().code(2);
}

#[test]
fn invalid_geometry_is_a_usage_error() {
    let env = TestEnv::new();
    env.cmd()
        .args([env.pics.to_str().unwrap(), "wide"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid geometry"));
    assert!(env.logged().is_empty(), "no tool should have run");
}

#[test]
fn invalid_compress_ratio_is_a_usage_error() {
    let env = TestEnv::new();
    env.cmd()
        .args([env.pics.to_str().unwrap(), "640x480", "best"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid compress ratio"));
}

// =============================================================================
// Preflight and scan failures
// =============================================================================

#[test]
fn missing_tools_fail_before_touching_any_file() {
    let env = TestEnv::new();
    env.add_photo("DSC01.JPG");

    let mut cmd = Command::cargo_bin("optjpg").unwrap();
    // Empty PATH: neither stub nor real tools are findable.
    cmd.env("PATH", "")
        .arg(env.pics.to_str().unwrap())
        .assert()
        .failure()
        .stderr(contains("convert not found on PATH"));

    assert!(env.logged().is_empty());
}

#[test]
fn missing_directory_is_fatal() {
    let env = TestEnv::new();
    let gone = env.pics.join("nope");
    env.cmd()
        .arg(gone.to_str().unwrap())
        .assert()
        .failure()
        .stderr(contains("directory not found"));
}

#[test]
fn file_argument_is_not_a_directory() {
    let env = TestEnv::new();
    env.add_photo("photo.jpg");
    env.cmd()
        .arg(in_pics(&env, "photo.jpg"))
        .assert()
        .failure()
        .stderr(contains("not a directory"));
}

#[test]
fn empty_directory_succeeds_with_a_notice() {
    let env = TestEnv::new();
    env.cmd()
        .arg(env.pics.to_str().unwrap())
        .assert()
        .success()
        .stdout(contains("No matching JPEG files"));
    assert!(env.logged().is_empty());
}

// =============================================================================
// Full runs against the stubs
// =============================================================================

#[test]
fn prefixed_run_issues_the_documented_commands_in_order() {
    let env = TestEnv::new();
    env.add_photo("DSC01.JPG");
    env.add_photo("DSC02.JPG");

    env.cmd()
        .args([env.pics.to_str().unwrap(), "640x480", "85", "trip"])
        .assert()
        .success()
        .stdout(contains("Optimized 2 of 2 photos"));

    assert_eq!(
        env.logged(),
        vec![
            format!(
                "convert {} -resize 640x480 {}",
                in_pics(&env, "DSC01.JPG"),
                in_pics(&env, "trip-1.jpg")
            ),
            format!("jpegoptim -m85 {}", in_pics(&env, "trip-1.jpg")),
            format!(
                "convert {} -resize 640x480 {}",
                in_pics(&env, "DSC02.JPG"),
                in_pics(&env, "trip-2.jpg")
            ),
            format!("jpegoptim -m85 {}", in_pics(&env, "trip-2.jpg")),
        ]
    );

    assert!(env.pics.join("trip-1.jpg").exists());
    assert!(env.pics.join("trip-2.jpg").exists());
    // Originals stay put.
    assert!(env.pics.join("DSC01.JPG").exists());
}

#[test]
fn defaults_apply_when_only_path_is_given() {
    let env = TestEnv::new();
    env.add_photo("dawn.jpeg");

    env.cmd().arg(env.pics.to_str().unwrap()).assert().success();

    let logged = env.logged();
    assert!(logged[0].contains("-resize 640x480"), "log: {logged:?}");
    assert!(logged[1].starts_with("jpegoptim -m85 "), "log: {logged:?}");
    // Stem naming: dawn.jpeg → dawn.jpg.
    assert!(env.pics.join("dawn.jpg").exists());
}

#[test]
fn custom_geometry_and_quality_are_forwarded_verbatim() {
    let env = TestEnv::new();
    env.add_photo("a.jpg");

    env.cmd()
        .args([env.pics.to_str().unwrap(), "50%", "70"])
        .assert()
        .success();

    let logged = env.logged();
    assert!(logged[0].contains("-resize 50%"), "log: {logged:?}");
    assert!(logged[1].starts_with("jpegoptim -m70 "), "log: {logged:?}");
}

#[test]
fn non_jpeg_and_hidden_files_are_left_alone() {
    let env = TestEnv::new();
    env.add_photo("keep.jpg");
    env.add_photo("skip.png");
    env.add_photo(".hidden.jpg");

    env.cmd()
        .args([env.pics.to_str().unwrap(), "640x480", "85", "out"])
        .assert()
        .success()
        .stdout(contains("Optimized 1 of 1 photos"));

    assert_eq!(env.logged().len(), 2);
    assert!(env.pics.join("out-1.jpg").exists());
    assert!(!env.pics.join("out-2.jpg").exists());
}

#[test]
fn failed_file_is_reported_and_the_rest_still_optimize() {
    let env = TestEnv::new();
    env.add_photo("broken.jpg");
    env.add_photo("fine.jpg");
    env.break_convert_on("broken");

    env.cmd()
        .args([env.pics.to_str().unwrap(), "640x480", "85", "web"])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("FAILED"))
        .stdout(contains("improper image header"))
        .stdout(contains("Optimized 1 of 2 photos (1 failed)"));

    // broken.jpg: convert only (recompress skipped). fine.jpg: both.
    let programs: Vec<String> = env
        .logged()
        .iter()
        .map(|l| l.split_whitespace().next().unwrap().to_string())
        .collect();
    assert_eq!(programs, vec!["convert", "convert", "jpegoptim"]);

    // The failed file consumed index 1; the survivor is web-2.
    assert!(!env.pics.join("web-1.jpg").exists());
    assert!(env.pics.join("web-2.jpg").exists());
}

// =============================================================================
// Real ImageMagick (ignored by default)
// =============================================================================

/// Requires ImageMagick and jpegoptim installed. Run with `--ignored`.
#[test]
#[ignore]
fn real_tools_produce_a_resized_output() {
    let tmp = TempDir::new().unwrap();
    let pics = tmp.path().join("pics");
    fs::create_dir_all(&pics).unwrap();

    // Make a real source image with convert itself.
    let status = std::process::Command::new("convert")
        .args(["-size", "100x100", "xc:red"])
        .arg(pics.join("red.jpg"))
        .status()
        .expect("convert available");
    assert!(status.success());

    Command::cargo_bin("optjpg")
        .unwrap()
        .args([pics.to_str().unwrap(), "10x10", "85", "tiny"])
        .assert()
        .success()
        .stdout(contains("Optimized 1 of 1 photos"));

    let out = pics.join("tiny-1.jpg");
    assert!(out.exists());
    assert!(fs::metadata(&out).unwrap().len() > 0);
}
