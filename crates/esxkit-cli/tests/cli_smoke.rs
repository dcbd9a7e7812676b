use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "esxkit-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_esxkit<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_esxkit");
    Command::new(bin)
        .args(args)
        .output()
        .expect("esxkit command should execute")
}

fn write_project(dir: &Path) {
    fs::write(
        dir.join("floorPlans.json"),
        serde_json::json!({
            "floorPlans": [
                {"id": "f1", "name": "Ground Floor", "width": 1000.0, "height": 800.0,
                 "cropMinX": 0.0, "cropMinY": 0.0, "cropMaxX": 1000.0, "cropMaxY": 800.0}
            ]
        })
        .to_string(),
    )
    .expect("floor plans fixture should write");
    fs::write(
        dir.join("accessPoints.json"),
        serde_json::json!({
            "accessPoints": [
                {"id": "ap-1", "name": "AP-001", "color": "#00FF00", "model": "AP-655",
                 "location": {"floorPlanId": "f1", "coord": {"x": 1.0, "y": 1.0}},
                 "tags": []}
            ]
        })
        .to_string(),
    )
    .expect("access points fixture should write");
    fs::write(
        dir.join("simulatedRadios.json"),
        serde_json::json!({
            "simulatedRadios": [
                {"accessPointId": "ap-1", "accessPointIndex": 1,
                 "radioTechnology": "IEEE802_11", "enabled": true,
                 "antennaTilt": -10.0, "antennaMounting": "CEILING", "antennaHeight": 3.0}
            ]
        })
        .to_string(),
    )
    .expect("radios fixture should write");
    fs::write(
        dir.join("requirements.json"),
        serde_json::json!({
            "requirements": [{
                "requirementId": "req-1",
                "name": "Primary Design",
                "isDefault": true,
                "criteria": [
                    {"radioTechnology": "IEEE802_11", "frequencyBand": "FIVE",
                     "type": "SIGNAL_STRENGTH", "value": -65.0}
                ]
            }]
        })
        .to_string(),
    )
    .expect("requirements fixture should write");
}

fn write_profile(dir: &Path) -> PathBuf {
    let path = dir.join("profile.toml");
    fs::write(
        &path,
        r#"
name = "smoke"

[coverage_expectation]
name = "Primary Design"
is_default = true

[[coverage_expectation.criteria]]
radioTechnology = "IEEE802_11"
frequencyBand = "FIVE"
type = "SIGNAL_STRENGTH"
value = -65.0
"#,
    )
    .expect("profile fixture should write");
    path
}

#[test]
fn validate_passes_a_conformant_project() {
    let guard = TempDirGuard::new("validate-pass");
    write_project(guard.path());
    let profile = write_profile(guard.path());

    let output = run_esxkit([
        OsStr::new("validate"),
        guard.path().as_os_str(),
        OsStr::new("--profile-file"),
        profile.as_os_str(),
    ]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "expected success, stdout:\n{stdout}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("### VALIDATION PASSED ###"));
    assert!(stdout.contains("### AP NAME FORMATTING ###"));
    assert!(stdout.contains("Coverage Requirement 'Primary Design' is defined"));
}

#[test]
fn validate_fails_on_a_bad_name_with_exit_code_one() {
    let guard = TempDirGuard::new("validate-fail");
    write_project(guard.path());
    let profile = write_profile(guard.path());

    // Break the AP name.
    fs::write(
        guard.path().join("accessPoints.json"),
        serde_json::json!({
            "accessPoints": [
                {"id": "ap-1", "name": "Lobby-AP", "color": "#00FF00",
                 "location": {"floorPlanId": "f1", "coord": {"x": 1.0, "y": 1.0}},
                 "tags": []}
            ]
        })
        .to_string(),
    )
    .expect("access points fixture should write");

    let output = run_esxkit([
        OsStr::new("validate"),
        guard.path().as_os_str(),
        OsStr::new("--profile-file"),
        profile.as_os_str(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("### VALIDATION FAILED ###"));
    assert!(stdout.contains("Lobby-AP"));
}

#[test]
fn validate_json_summary_reports_outcomes() {
    let guard = TempDirGuard::new("validate-json");
    write_project(guard.path());
    let profile = write_profile(guard.path());

    let output = run_esxkit([
        OsStr::new("validate"),
        guard.path().as_os_str(),
        OsStr::new("--profile-file"),
        profile.as_os_str(),
        OsStr::new("--json"),
    ]);

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(payload["passed"], true);
    assert_eq!(payload["total_access_points"], 1);
    assert_eq!(payload["outcomes"][0]["check"], "name_format");
    assert_eq!(payload["outcomes"][0]["status"], "pass");
}

#[test]
fn list_prints_sorted_records() {
    let guard = TempDirGuard::new("list");
    write_project(guard.path());

    let output = run_esxkit([OsStr::new("list"), guard.path().as_os_str()]);
    assert!(output.status.success());
    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(records[0]["name"], "AP-001");
    assert_eq!(records[0]["floor"], "Ground Floor");
    assert_eq!(records[0]["model"], "AP-655");
}

#[test]
fn rename_rewrites_the_access_points_document() {
    let guard = TempDirGuard::new("rename");
    write_project(guard.path());
    fs::write(
        guard.path().join("accessPoints.json"),
        serde_json::json!({
            "accessPoints": [
                {"id": "ap-1", "name": "zulu",
                 "location": {"floorPlanId": "f1", "coord": {"x": 5.0, "y": 1.0}}},
                {"id": "ap-2", "name": "alpha",
                 "location": {"floorPlanId": "f1", "coord": {"x": 1.0, "y": 1.0}}}
            ]
        })
        .to_string(),
    )
    .expect("access points fixture should write");

    let output = run_esxkit([OsStr::new("rename"), guard.path().as_os_str()]);
    assert!(output.status.success());

    let rewritten = fs::read_to_string(guard.path().join("accessPoints.json"))
        .expect("document should be rewritten");
    let doc: serde_json::Value =
        serde_json::from_str(&rewritten).expect("document should be JSON");
    // Sorted by X before renaming: ap-2 comes first.
    assert_eq!(doc["accessPoints"][0]["id"], "ap-2");
    assert_eq!(doc["accessPoints"][0]["name"], "AP-001");
    assert_eq!(doc["accessPoints"][1]["name"], "AP-002");
}

#[test]
fn profiles_lists_the_builtin_registry() {
    let output = run_esxkit([OsStr::new("profiles")]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("baseline"));
    assert!(stdout.contains("acme-office"));
    assert!(stdout.contains("Primary Design"));
}
