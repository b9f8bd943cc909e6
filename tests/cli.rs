extern crate assert_cmd;
extern crate mandelgrid;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn cli_writes_a_grid() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("grid.dat");

    Command::cargo_bin("mandelgrid")
        .unwrap()
        .arg("--output")
        .arg(&out)
        .args(&["--size", "8x6", "--iterations", "50"])
        .args(&["--leftlower", "-2.0,-1.5", "--rightupper", "1.0,1.5"])
        .assert()
        .success();

    let dump = mandelgrid::load_grid(&out).unwrap();
    assert_eq!((dump.im, dump.jm), (8, 6));
    assert_eq!(dump.records.len(), 48);
    assert_eq!(dump.records[0].point.re, -2.0);
    assert_eq!(dump.records[47].point.im, 1.5);
}

#[test]
fn cli_writes_a_preview_too() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("grid.dat");
    let pgm = dir.path().join("grid.pgm");

    Command::cargo_bin("mandelgrid")
        .unwrap()
        .arg("-o")
        .arg(&out)
        .arg("-p")
        .arg(&pgm)
        .args(&["-s", "10x10", "-i", "20"])
        .assert()
        .success();

    let bytes = fs::read(&pgm).unwrap();
    assert!(bytes.starts_with(b"P5"));
}

#[test]
fn cli_refuses_a_degenerate_grid_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("grid.dat");

    Command::cargo_bin("mandelgrid")
        .unwrap()
        .arg("-o")
        .arg(&out)
        .args(&["-s", "1x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));

    assert!(!out.exists());
}

#[test]
fn cli_rejects_unparseable_corners() {
    Command::cargo_bin("mandelgrid")
        .unwrap()
        .args(&["-o", "unused.dat", "-l", "minus-two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("left lower corner"));
}

#[test]
fn cli_refuses_a_negative_grid_before_doing_any_work() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("grid.dat");

    Command::cargo_bin("mandelgrid")
        .unwrap()
        .arg("-o")
        .arg(&out)
        .args(&["-s", "10x-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "the vertical resolution must be at least 2 samples, got -3",
        ));

    assert!(!out.exists());
}
