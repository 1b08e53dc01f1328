use logbook::errors::AppError;
use logbook::journal_core::CalendarDate;
use logbook::journal_io::scan_log_dir;
use logbook::render::render_entry;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn ymd(s: &str) -> CalendarDate {
    CalendarDate::from_ymd(s).unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_scan_files_reminders_under_target_dates() {
    let temp_dir = tempdir().unwrap();
    write(
        temp_dir.path(),
        "2024-01-01.md",
        "# Monday\n\nin 5 days: buy milk\n\ntomorrow: call Bob\n",
    );
    write(temp_dir.path(), "2024-01-04.md", "in 2 days: water plants\n");

    let index = scan_log_dir(temp_dir.path()).unwrap();

    let sixth = index.get(ymd("2024-01-06")).unwrap();
    let reminders: Vec<_> = sixth.reminders().collect();
    assert_eq!(
        reminders,
        vec![
            (ymd("2024-01-01"), "buy milk"),
            (ymd("2024-01-04"), "water plants"),
        ]
    );
    assert_eq!(
        sixth.source_path,
        temp_dir.path().join("2024-01-06.md")
    );

    let second = index.get(ymd("2024-01-02")).unwrap();
    assert_eq!(
        second.reminders().collect::<Vec<_>>(),
        vec![(ymd("2024-01-01"), "call Bob")]
    );

    // Every scanned file has an entry, even without incoming reminders.
    let first = index.get(ymd("2024-01-01")).unwrap();
    assert!(!first.has_reminders());
    assert_eq!(first.source_path, temp_dir.path().join("2024-01-01.md"));
}

#[test]
fn test_scan_is_idempotent() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "2024-01-01.md", "in 1 week: review\nsomeday: later\n");
    write(temp_dir.path(), "2023/2023-12-31.md", "tomorrow: new year\n");

    let first = scan_log_dir(temp_dir.path()).unwrap();
    let second = scan_log_dir(temp_dir.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_scan_recurses_and_ignores_other_files() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "2023/12/2023-12-31.md", "tomorrow: new year\n");
    write(temp_dir.path(), "README.md", "tomorrow: not an entry\n");
    write(temp_dir.path(), "2024-01-02.txt", "tomorrow: not markdown\n");
    write(temp_dir.path(), "notes/todo.md", "tomorrow: still not an entry\n");

    let index = scan_log_dir(temp_dir.path()).unwrap();

    assert_eq!(
        index.get(ymd("2024-01-01")).unwrap().reminders().collect::<Vec<_>>(),
        vec![(ymd("2023-12-31"), "new year")]
    );
    assert!(index.get(ymd("2024-01-03")).is_none());
    assert!(index.skipped().is_empty());
    assert_eq!(index.len(), 2);
}

#[test]
fn test_scan_skips_impossible_dates_and_continues() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "2015-02-29.md", "tomorrow: never\n");
    write(temp_dir.path(), "2015-03-01.md", "tomorrow: still scanned\n");

    let index = scan_log_dir(temp_dir.path()).unwrap();

    assert_eq!(index.skipped().len(), 1);
    assert_eq!(
        index.skipped()[0].path,
        temp_dir.path().join("2015-02-29.md")
    );
    assert!(index.get(ymd("2015-03-02")).unwrap().has_reminders());
}

#[test]
fn test_unresolvable_instruction_falls_back_to_origin() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "2024-01-01.md", "next tuesday: dentist\n");

    let index = scan_log_dir(temp_dir.path()).unwrap();
    let entry = index.get(ymd("2024-01-01")).unwrap();

    assert_eq!(
        entry.reminders().collect::<Vec<_>>(),
        vec![(ymd("2024-01-01"), "dentist")]
    );
    assert_eq!(entry.errors.len(), 1);
    assert!(entry.errors[0].message.contains("next tuesday"));
}

#[test]
fn test_scan_then_render_end_to_end() {
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path(), "2024-01-31.md", "in 1 month: pay rent\n");
    write(temp_dir.path(), "2023-02-28.md", "in 1 year: anniversary\n");

    let index = scan_log_dir(temp_dir.path()).unwrap();

    assert_eq!(
        render_entry(&index, ymd("2024-02-29"), "Me"),
        "# Me - 2024-02-29\n\nReminders:\nFrom 2024-01-31: pay rent\n"
    );
    assert_eq!(
        render_entry(&index, ymd("2024-02-28"), "Me"),
        "# Me - 2024-02-28\n\nReminders:\nFrom 2023-02-28: anniversary\n"
    );
}

#[test]
fn test_scan_survives_deeply_nested_entry() {
    let temp_dir = tempdir().unwrap();
    write(
        temp_dir.path(),
        "2024-04-01.md",
        &format!("{} tomorrow: deep\n", ">".repeat(20_000)),
    );
    write(temp_dir.path(), "2024-04-02.md", "tomorrow: shallow\n");

    let index = scan_log_dir(temp_dir.path()).unwrap();

    assert_eq!(
        index.get(ymd("2024-04-02")).unwrap().reminders().collect::<Vec<_>>(),
        vec![(ymd("2024-04-01"), "deep")]
    );
    assert_eq!(
        index.get(ymd("2024-04-03")).unwrap().reminders().collect::<Vec<_>>(),
        vec![(ymd("2024-04-02"), "shallow")]
    );
}

#[test]
fn test_scan_missing_directory_is_fatal() {
    let temp_dir = tempdir().unwrap();

    let result = scan_log_dir(&temp_dir.path().join("nope"));

    match result {
        Err(e @ AppError::Walk { .. }) => assert_eq!(e.exit_code(), 5),
        other => panic!("Expected AppError::Walk, got {:?}", other),
    }
}
