use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{read, setup_timefile, wt, wt_notify};

const CLOSED_LOG: &str = "24/03/04,08h00,17h00\n";
const OPEN_LOG: &str = "24/03/04,08h00,17h00\n24/03/05,09h00,\n";

#[test]
fn test_arrive_appends_open_entry() {
    let (home, path) = setup_timefile(CLOSED_LOG);

    wt(home.path())
        .args(["--timefile", path.to_str().unwrap(), "--now", "2024-03-05 09:00", "arrive"])
        .assert()
        .success()
        .stdout(contains("Last entry is 1 day ago."))
        .stdout(contains("Added a new entry, arrival now."));

    assert_eq!(read(&path), OPEN_LOG);
}

#[test]
fn test_quit_closes_open_entry() {
    let (home, path) = setup_timefile(OPEN_LOG);

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 17:30", "quit"])
        .assert()
        .success()
        .stdout(contains("Changed last entry, quitting now."))
        .stdout(contains("17h30"));

    assert_eq!(read(&path), "24/03/04,08h00,17h00\n24/03/05,09h00,17h30\n");
}

#[test]
fn test_arrive_on_open_log_is_declined() {
    let (home, path) = setup_timefile(OPEN_LOG);

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 10:00", "arrive"])
        .assert()
        .code(3)
        .stdout(contains("You either never quit, or used the wrong command."));

    assert_eq!(read(&path), OPEN_LOG);
}

#[test]
fn test_quit_on_closed_log_is_declined() {
    let (home, path) = setup_timefile(CLOSED_LOG);

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 18:00", "quit"])
        .assert()
        .code(3)
        .stdout(contains("You either never arrived, or used the wrong command."));

    assert_eq!(read(&path), CLOSED_LOG);
}

#[test]
fn test_overwrite_corrects_arrival() {
    let (home, path) = setup_timefile(OPEN_LOG);

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 09:45", "arrive", "--overwrite"])
        .assert()
        .success()
        .stdout(contains("Changed last arrival at now."));

    assert_eq!(read(&path), "24/03/04,08h00,17h00\n24/03/05,09h45,\n");
}

#[test]
fn test_dry_run_does_not_write() {
    let (home, path) = setup_timefile(CLOSED_LOG);

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 09:00", "--dry-run", "arrive"])
        .assert()
        .success()
        .stdout(contains("Dry run"));

    assert_eq!(read(&path), CLOSED_LOG);
}

#[test]
fn test_porcelain_arrive_is_silent() {
    let (home, path) = setup_timefile(CLOSED_LOG);

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 09:00", "-p", "arrive"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    assert_eq!(read(&path), OPEN_LOG);
}

#[test]
fn test_stats_porcelain() {
    let (home, path) = setup_timefile("24/01/01,08h00,12h00\n24/01/02,09h00,17h30\n");

    wt(home.path())
        .args([
            "-f",
            path.to_str().unwrap(),
            "--now",
            "2024-06-01 12:00",
            "stats",
            "--porcelain",
            "--hours-per-day",
            "8",
        ])
        .assert()
        .success()
        .stdout(
            "worked_days_count 2\n\
             first_day 24/01/01\n\
             last_day 24/01/02\n\
             total_worked_minutes 750\n\
             total_deviation_minutes -210\n\
             average_minutes_per_day 375\n",
        );
}

#[test]
fn test_stats_not_today_excludes_current_session() {
    let (home, path) = setup_timefile(OPEN_LOG);

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 12:00", "stats", "-p", "-n"])
        .assert()
        .success()
        .stdout(contains("total_worked_minutes 540"))
        .stdout(contains("last_day 24/03/04"))
        .stdout(contains("total_deviation_minutes").not());
}

#[test]
fn test_stats_human_output() {
    let (home, path) = setup_timefile(OPEN_LOG);

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 12:00", "stats"])
        .assert()
        .success()
        .stdout(contains("Last entry is today."))
        .stdout(contains("Statistics on 2 worked days (including today), from 24/03/04 to 24/03/05"))
        .stdout(contains("You worked a total of 12h00m."));
}

#[test]
fn test_stats_on_unsorted_log_fails() {
    let (home, path) = setup_timefile("24/03/05,08h00,17h00\n24/03/04,08h00,17h00\n");

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-06 12:00", "stats"])
        .assert()
        .code(1)
        .stderr(contains("not sorted"));
}

#[test]
fn test_missing_timefile_fails() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("missing");

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "stats"])
        .assert()
        .code(1)
        .stderr(contains("I/O error"));
}

#[test]
fn test_init_creates_timefile() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("data").join("temps");

    wt(home.path())
        .args(["--test", "-f", path.to_str().unwrap(), "init"])
        .assert()
        .success();

    assert_eq!(read(&path), "");
    assert!(!home.path().join(".worktime").join("worktime.conf").exists());

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 09:00", "arrive"])
        .assert()
        .success()
        .stdout(contains("The timefile is empty."));

    assert_eq!(read(&path), "24/03/05,09h00,\n");
}

#[test]
fn test_init_writes_config_used_by_later_runs() {
    let (home, path) = setup_timefile(CLOSED_LOG);

    wt(home.path()).args(["init"]).assert().success();
    let conf = home.path().join(".worktime").join("worktime.conf");
    assert!(conf.exists());

    let yaml = format!(
        "timefile: {}\nhours_per_day: 8.0\n",
        path.to_str().unwrap()
    );
    std::fs::write(&conf, yaml).unwrap();

    wt(home.path())
        .args(["--now", "2024-03-06 12:00", "stats", "-p"])
        .assert()
        .success()
        .stdout(contains("total_deviation_minutes 60"));

    wt(home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("notify_threshold_minutes: 10"));
}

#[test]
fn test_list_shows_entries() {
    let (home, path) = setup_timefile(OPEN_LOG);

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "--now", "2024-03-05 10:00", "list"])
        .assert()
        .success()
        .stdout(contains("24/03/04"))
        .stdout(contains("09h00m"))
        .stdout(contains("01h00m*"));

    wt(home.path())
        .args(["-f", path.to_str().unwrap(), "list", "--last", "1", "-p"])
        .assert()
        .success()
        .stdout("24/03/05,09h00,\n");
}

#[test]
fn test_notify_reports_overwork() {
    let (home, path) = setup_timefile("24/01/01,08h00,16h30\n");

    wt_notify(home.path())
        .args([
            "--timefile",
            path.to_str().unwrap(),
            "--now",
            "2024-06-01 12:00",
            "--hours-per-day",
            "8",
            "--notifier",
            "true",
        ])
        .assert()
        .success()
        .stdout("OVERWORK: 00h30m\n");
}

#[test]
fn test_notify_is_silent_under_threshold() {
    let (home, path) = setup_timefile("24/01/01,08h00,16h05\n");

    wt_notify(home.path())
        .args([
            "--timefile",
            path.to_str().unwrap(),
            "--now",
            "2024-06-01 12:00",
            "--hours-per-day",
            "8",
            "--notifier",
            "true",
        ])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn test_notify_reports_work_needed_and_survives_missing_notifier() {
    let (home, path) = setup_timefile("24/01/01,08h00,12h00\n");

    wt_notify(home.path())
        .args([
            "--timefile",
            path.to_str().unwrap(),
            "--now",
            "2024-06-01 12:00",
            "--notifier",
            "/nonexistent/notifier",
        ])
        .assert()
        .success()
        .stdout("WORK NEEDED: 03h24m\n");
}
