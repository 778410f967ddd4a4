mod common;
use common::{
    HEADERS, files_with_suffix, read_sheet, rts, sheet_names, standard_rows, temp_workspace,
    write_fixture,
};
use predicates::str::contains;
use std::fs;

#[test]
fn test_summarize_xlsx_end_to_end() {
    let dir = temp_workspace("cli_xlsx");
    let input = dir.join("attendance.xlsx");
    write_fixture(&input, &HEADERS, &standard_rows());

    let out_dir = dir.join("out");
    let cfg = dir.join("missing.conf");

    rts()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "summarize",
            input.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("1 row(s) skipped"))
        .stdout(contains("Employees"))
        .stdout(contains("Business units"));

    let files = files_with_suffix(&out_dir, ".xlsx");
    // main report + X + Y_Z
    assert_eq!(files.len(), 3);

    let main = files
        .iter()
        .find(|p| {
            let name = p.file_name().unwrap().to_string_lossy().to_string();
            !name.contains("_X_") && !name.contains("_Y_Z_")
        })
        .expect("main report");

    assert_eq!(
        sheet_names(main),
        vec!["一覧", "A", "B", "事業別_X", "事業別_Y_Z"]
    );

    let overview = read_sheet(main, "一覧");
    assert_eq!(overview.len(), 3);
    assert_eq!(overview[1], vec!["A", "X", "2", "16:45", "8:22", "2"]);
    assert_eq!(overview[2], vec!["B", "Y/Z", "2", "10:00", "5:00", "0"]);

    let detail = read_sheet(main, "A");
    // sorted by date even though the input lists 04/02 first
    assert_eq!(detail[1][0], "2024/04/01");
    assert_eq!(detail[2][0], "2024/04/02");
    assert_eq!(detail[3][0], "合計");
    assert_eq!(detail[3][8], "違反: 2日");

    let unit_x = files
        .iter()
        .find(|p| p.to_string_lossy().contains("_X_"))
        .expect("unit X report");
    assert_eq!(sheet_names(unit_x), vec!["一覧", "A"]);
}

#[test]
fn test_summarize_json_format() {
    let dir = temp_workspace("cli_json");
    let input = dir.join("attendance.xlsx");
    write_fixture(&input, &HEADERS, &standard_rows());

    rts()
        .args([
            "--config",
            dir.join("none.conf").to_str().unwrap(),
            "summarize",
            input.to_str().unwrap(),
            "--out-dir",
            dir.to_str().unwrap(),
            "--format",
            "json",
            "--force",
        ])
        .assert()
        .success();

    let files = files_with_suffix(&dir, ".json");
    assert_eq!(files.len(), 1);
    let content = fs::read_to_string(&files[0]).unwrap();
    assert!(content.contains("\"name\": \"A\""));
    assert!(content.contains("\"Y/Z\""));
}

#[test]
fn test_summarize_rejects_unsupported_extension() {
    let dir = temp_workspace("cli_bad_ext");
    let input = dir.join("attendance.txt");
    fs::write(&input, "not a workbook").unwrap();

    rts()
        .args([
            "--config",
            dir.join("none.conf").to_str().unwrap(),
            "summarize",
            input.to_str().unwrap(),
            "--out-dir",
            dir.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("Unsupported file type"));
}

#[test]
fn test_summarize_missing_input_fails() {
    let dir = temp_workspace("cli_missing");

    rts()
        .args([
            "--config",
            dir.join("none.conf").to_str().unwrap(),
            "summarize",
            dir.join("nope.xlsx").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("File not found"));
}

#[test]
fn test_config_from_file_renames_columns_and_prefix() {
    let dir = temp_workspace("cli_custom_config");
    let cfg = dir.join("custom.conf");
    fs::write(
        &cfg,
        "file_prefix: timesheet\nbusiness_files: false\ncolumns:\n  work_date: date\n  employee_name: name\n  clock_in: in\n  clock_out: out\n",
    )
    .unwrap();

    let input = dir.join("input.xlsx");
    write_fixture(
        &input,
        &["date", "name", "in", "out"],
        &[vec!["2024/04/01", "C", "08:00", "12:00"]],
    );

    rts()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "summarize",
            input.to_str().unwrap(),
            "--out-dir",
            dir.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success();

    let reports: Vec<_> = files_with_suffix(&dir, ".xlsx")
        .into_iter()
        .filter(|p| p.file_name().unwrap().to_string_lossy().starts_with("timesheet_"))
        .collect();
    assert_eq!(reports.len(), 1);

    let overview = read_sheet(&reports[0], "一覧");
    assert_eq!(overview[1], vec!["C", "", "1", "4:00", "4:00", "0"]);
}

#[test]
fn test_init_then_check_config() {
    let dir = temp_workspace("cli_init");
    let cfg = dir.join("nested").join("rtimesheet.conf");
    let cfg_str = cfg.to_str().unwrap();

    rts()
        .args(["--config", cfg_str, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(&cfg).unwrap();
    assert!(content.contains("勤務日"));
    assert!(content.contains("休憩1復帰時刻"));

    rts()
        .args(["--config", cfg_str, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rts()
        .args(["--config", cfg_str, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}

#[test]
fn test_config_check_reports_defaulted_fields() {
    let dir = temp_workspace("cli_partial_config");
    let cfg = dir.join("partial.conf");
    fs::write(&cfg, "output_dir: /tmp\n").unwrap();

    rts()
        .args(["--config", cfg.to_str().unwrap(), "config", "--check"])
        .assert()
        .success()
        .stdout(contains("'file_prefix' not set"))
        .stdout(contains("'columns' not set"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = temp_workspace("cli_bad_config");
    let cfg = dir.join("bad.conf");
    fs::write(&cfg, "file_prefix: \"\"\n").unwrap();

    rts()
        .args(["--config", cfg.to_str().unwrap(), "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("file_prefix must not be empty"));
}
