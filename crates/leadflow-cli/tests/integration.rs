use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn leadflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("leadflow").unwrap();
    cmd.current_dir(dir.path()).env("LEADFLOW_ROOT", dir.path());
    cmd
}

const SNAPSHOT: &str = r#"{
    "filtered_prospects": {
        "CTI Foods": {
            "category": "Food Processing",
            "business_score": 164,
            "conversation_score": 10,
            "overall_score": 300,
            "latest_contact": "2020-01-01T00:00:00+00:00"
        },
        "Riverside Builders": {
            "category": "Construction",
            "business_score": 25,
            "conversation_score": 2,
            "overall_score": 40
        }
    },
    "summary_stats": {"total": 2}
}"#;

/// Workspace with a snapshot and a messenger stubbed to /bin/true so sends
/// always succeed without touching anything external.
fn init_workspace(dir: &TempDir) {
    std::fs::write(dir.path().join("filtered_crm_data.json"), SNAPSHOT).unwrap();
    std::fs::write(
        dir.path().join("crm.yaml"),
        "messenger:\n  program: \"true\"\n  recipient: Tyler\n",
    )
    .unwrap();
}

// ---------------------------------------------------------------------------
// dispatcher surface
// ---------------------------------------------------------------------------

#[test]
fn no_args_prints_usage_and_succeeds() {
    let dir = TempDir::new().unwrap();
    leadflow(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_command_prints_error_and_usage_hint() {
    let dir = TempDir::new().unwrap();
    leadflow(&dir)
        .arg("defragment")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").and(predicate::str::contains("Usage")));
}

// ---------------------------------------------------------------------------
// check-overdue
// ---------------------------------------------------------------------------

#[test]
fn check_overdue_with_no_data_is_a_noop() {
    let dir = TempDir::new().unwrap();
    leadflow(&dir)
        .arg("check-overdue")
        .assert()
        .success()
        .stdout(predicate::str::contains("No overdue follow-ups."));
}

#[test]
fn check_overdue_lists_past_due_companies() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    std::fs::create_dir_all(dir.path().join("user_data")).unwrap();
    std::fs::write(
        dir.path().join("user_data/CTI Foods.json"),
        r#"{"next_followup": "2020-06-01T09:00:00Z"}"#,
    )
    .unwrap();

    leadflow(&dir)
        .arg("check-overdue")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1 follow-ups past due")
                .and(predicate::str::contains("CTI Foods")),
        );
}

// ---------------------------------------------------------------------------
// update-scores
// ---------------------------------------------------------------------------

#[test]
fn update_scores_persists_custom_scores() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir)
        .arg("update-scores")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated scores for"));

    // CTI Foods: 300 + 30 (business) + 20 (conversation) + 25 (category) = 375.
    let overlay = std::fs::read_to_string(dir.path().join("user_data/CTI Foods.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&overlay).unwrap();
    assert_eq!(value["custom_score"], 375.0);
    assert!(value["score_updated"].is_string());
}

#[test]
fn update_scores_is_stable_on_second_run() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir).arg("update-scores").assert().success();
    leadflow(&dir)
        .arg("update-scores")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated scores for 0 prospects"));
}

// ---------------------------------------------------------------------------
// pipeline-automation
// ---------------------------------------------------------------------------

#[test]
fn pipeline_automation_promotes_new_prospects() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);
    std::fs::create_dir_all(dir.path().join("user_data")).unwrap();
    std::fs::write(
        dir.path().join("user_data/Riverside Builders.json"),
        r#"{"status": "new"}"#,
    )
    .unwrap();

    // business_score 25 > 20: new -> warm.
    leadflow(&dir)
        .arg("pipeline-automation")
        .assert()
        .success()
        .stdout(predicate::str::contains("Riverside Builders: new -> warm"));

    let overlay =
        std::fs::read_to_string(dir.path().join("user_data/Riverside Builders.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&overlay).unwrap();
    assert_eq!(value["status"], "warm");
    assert_eq!(value["previous_status"], "new");
}

#[test]
fn pipeline_automation_leaves_unmatched_companies_alone() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    // No overlays: both companies default to cold and stay there.
    leadflow(&dir)
        .arg("pipeline-automation")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 pipeline updates"));
}

// ---------------------------------------------------------------------------
// weekly-report / full-automation
// ---------------------------------------------------------------------------

#[test]
fn weekly_report_renders_summary() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir)
        .arg("weekly-report")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total Prospects: 2")
                .and(predicate::str::contains("Food Processing: 1"))
                .and(predicate::str::contains("Construction: 1")),
        );
}

#[test]
fn full_automation_dry_run() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir)
        .args(["full-automation", "--dry-run"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Done:").and(predicate::str::contains("dry run")),
        );
}

#[test]
fn full_automation_json_summary() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    let output = leadflow(&dir)
        .args(["full-automation", "--dry-run", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["overdue"], 0);
    assert!(value["score_updates"].as_u64().unwrap() >= 1);
}

// ---------------------------------------------------------------------------
// prospect inspection
// ---------------------------------------------------------------------------

#[test]
fn list_sorts_by_score_descending() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    let output = leadflow(&dir).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let cti = stdout.find("CTI Foods").unwrap();
    let riverside = stdout.find("Riverside Builders").unwrap();
    assert!(cti < riverside, "higher score should list first");
}

#[test]
fn show_unknown_company_fails() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir)
        .args(["show", "Nonexistent LLC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no prospect named"));
}

#[test]
fn score_breakdown_output() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir)
        .args(["score", "Riverside Builders"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Score breakdown for Riverside Builders")
                .and(predicate::str::contains("category:")),
        );
}

// ---------------------------------------------------------------------------
// overlay editing
// ---------------------------------------------------------------------------

#[test]
fn status_and_tags_roundtrip_through_show() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir)
        .args(["status", "CTI Foods", "hot"])
        .assert()
        .success();
    leadflow(&dir)
        .args(["tag", "add", "CTI Foods", "decision-maker"])
        .assert()
        .success();

    leadflow(&dir)
        .args(["show", "CTI Foods"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("status:         hot")
                .and(predicate::str::contains("decision-maker")),
        );
}

#[test]
fn invalid_status_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir)
        .args(["status", "CTI Foods", "scorching"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status"));
}

// ---------------------------------------------------------------------------
// followup scheduling
// ---------------------------------------------------------------------------

#[test]
fn followup_schedules_and_sets_next_followup() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir)
        .args([
            "followup",
            "CTI Foods",
            "--kind",
            "site_visit",
            "--at",
            "2030-06-15T09:30",
            "--notes",
            "walk the plant floor",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Follow-up scheduled for CTI Foods"));

    let overlay = std::fs::read_to_string(dir.path().join("user_data/CTI Foods.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&overlay).unwrap();
    assert_eq!(value["next_followup"], "2030-06-15T09:30");
    assert_eq!(value["followups"][0]["kind"], "site_visit");
}

#[test]
fn followup_with_bad_timestamp_fails() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    leadflow(&dir)
        .args(["followup", "CTI Foods", "--kind", "call", "--at", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid follow-up timestamp"));
}
