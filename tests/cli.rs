use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const PROBLEM: &str = "\
300 200
3
0,0 60,0 60,40 0,40
0,0 50,0 50,50 25,20 0,50
0,0 30,0 15,26
";

fn workspace() -> Result<TempDir, Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    tmp.child("problem.txt").write_str(PROBLEM)?;
    tmp.child("Bin-1.txt")
        .write_str("2\n1 0 10,10\n2 90 100,10\n")?;
    tmp.child("Bin-2.txt").write_str("1\n3 180 20,30\n")?;
    Ok(tmp)
}

#[test]
fn cli_renders_every_bin() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = workspace()?;
    Command::cargo_bin("nestlabel")?
        .current_dir(&tmp)
        .args(["--problem", "problem.txt", "--output-dir", "out", "--erosion-step", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 bin(s)"));

    let first = fs::read_to_string(tmp.path().join("out/Bin-1.svg"))?;
    assert!(first.contains("piece_1"));
    assert!(first.contains("piece_2"));
    assert!(first.contains("stroke=\"blue\""));
    let second = fs::read_to_string(tmp.path().join("out/Bin-2.svg"))?;
    assert!(second.contains("piece_3"));
    assert!(second.contains("width=\"350\""));
    tmp.close()?;
    Ok(())
}

#[test]
fn cli_reads_results_from_other_directory() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    tmp.child("problem.txt").write_str(PROBLEM)?;
    let results = tmp.child("results");
    results.create_dir_all()?;
    results.child("Bin-10.txt").write_str("1\n2 0 0,0\n")?;
    results.child("Bin-2.txt").write_str("1\n1 0 0,0\n")?;
    results.child("Bin-3.txt").write_str("0\n")?;
    results.child("notes.txt").write_str("ignored")?;

    Command::cargo_bin("nestlabel")?
        .current_dir(&tmp)
        .args(["--problem", "problem.txt", "--results-dir", "results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 bin(s)"));

    assert!(tmp.path().join("Bin-2.svg").exists());
    assert!(tmp.path().join("Bin-10.svg").exists());
    assert!(!tmp.path().join("Bin-3.svg").exists());
    tmp.close()?;
    Ok(())
}

#[test]
fn cli_skips_unknown_pieces() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = workspace()?;
    tmp.child("Bin-1.txt")
        .write_str("3\n1 0 10,10\n42 0 0,0\nnot a placement\n")?;
    Command::cargo_bin("nestlabel")?
        .current_dir(&tmp)
        .args(["--problem", "problem.txt", "--erosion-step", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("piece 42"));

    let first = fs::read_to_string(tmp.path().join("Bin-1.svg"))?;
    assert!(first.contains("piece_1"));
    assert!(!first.contains("piece_42"));
    tmp.close()?;
    Ok(())
}

#[test]
fn cli_outlines_only() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = workspace()?;
    Command::cargo_bin("nestlabel")?
        .current_dir(&tmp)
        .args(["--problem", "problem.txt", "--no-labels"])
        .assert()
        .success();
    let first = fs::read_to_string(tmp.path().join("Bin-1.svg"))?;
    assert!(!first.contains("stroke=\"black\""));
    tmp.close()?;
    Ok(())
}

#[test]
fn cli_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = workspace()?;
    tmp.child("render.json").write_str(
        r#"{"erosion_step": 2.0, "piece_stroke": {"color": "red", "width": 0.5}}"#,
    )?;
    Command::cargo_bin("nestlabel")?
        .current_dir(&tmp)
        .args(["--problem", "problem.txt", "--config-file", "render.json"])
        .assert()
        .success();
    let first = fs::read_to_string(tmp.path().join("Bin-1.svg"))?;
    assert!(first.contains("stroke=\"red\""));
    tmp.close()?;
    Ok(())
}

#[test]
fn cli_fails_without_results() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    tmp.child("problem.txt").write_str(PROBLEM)?;
    Command::cargo_bin("nestlabel")?
        .current_dir(&tmp)
        .args(["--problem", "problem.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no packing results found"));
    tmp.close()?;
    Ok(())
}

#[test]
fn cli_fails_on_missing_problem() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    Command::cargo_bin("nestlabel")?
        .current_dir(&tmp)
        .args(["--problem", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read problem file"));
    tmp.close()?;
    Ok(())
}

#[test]
fn cli_renders_written_results() -> Result<(), Box<dyn std::error::Error>> {
    use nestlabel::geometry::Point;
    use nestlabel::results::{PlacementResult, PlacementSource, ResultDirectory, write_bin_files};

    let tmp = TempDir::new()?;
    tmp.child("problem.txt").write_str(PROBLEM)?;
    let placed = |piece_id, rotation, x, y| PlacementResult {
        piece_id,
        rotation,
        position: Point::new(x, y),
    };
    let bins = vec![
        vec![placed(1, 0.0, 0.0, 0.0), placed(3, 270.0, 70.0, 0.0)],
        vec![placed(2, 45.0, 5.0, 5.0)],
    ];
    let written = write_bin_files(tmp.path(), &bins)?;
    assert_eq!(written.len(), 2);

    let loaded = ResultDirectory::new(tmp.path()).load_bins()?;
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].placements, bins[0]);
    assert_eq!(loaded[1].number, 2);

    Command::cargo_bin("nestlabel")?
        .current_dir(&tmp)
        .args(["--problem", "problem.txt", "--erosion-step", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 bin(s)"));
    tmp.child("Bin-2.svg").assert(predicate::str::contains("piece_2"));
    tmp.close()?;
    Ok(())
}

#[test]
fn cli_survives_non_finite_records() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    tmp.child("problem.txt")
        .write_str("300 200\n2\n0,0 inf,0 40,40 0,40\n0,0 30,0 15,26\n")?;
    tmp.child("Bin-1.txt")
        .write_str("3\n1 NaN 10,10\n2 0 50,50\n1 0 nan,5\n")?;
    tmp.child("Bin-2.txt")
        .write_binary(b"1\n1 0 100,100\n\xff\xfe\n")?;
    Command::cargo_bin("nestlabel")?
        .current_dir(&tmp)
        .args(["--problem", "problem.txt", "--erosion-step", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 bin(s)"));

    let first = fs::read_to_string(tmp.path().join("Bin-1.svg"))?;
    assert!(first.contains("piece_2"));
    assert!(!first.contains("piece_1"));
    tmp.child("Bin-2.svg").assert(predicate::str::contains("piece_1"));
    tmp.close()?;
    Ok(())
}
