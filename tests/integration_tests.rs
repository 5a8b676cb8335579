mod common;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use common::{create_jpeg, create_png, create_stack_inputs, png_files_in, BLUE, RED};
use image::{GenericImageView, ImageReader, Rgba};
use predicates::prelude::*;

fn imgmerge() -> Command {
    Command::cargo_bin("imgmerge").unwrap()
}

#[test]
fn test_cli_help() {
    imgmerge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("imgmerge -od ~/Desktop/ -i ~/Desktop/imgs"));
}

#[test]
fn test_version_flag() {
    imgmerge()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Version: {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    imgmerge()
        .args(["-od", &temp.path().to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input supplied"));
}

#[test]
fn test_missing_output_fails() {
    let temp = TempDir::new().unwrap();
    let inputs = create_stack_inputs(temp.path());
    imgmerge()
        .args(inputs.iter().map(|p| p.as_os_str()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No output supplied"));
}

#[test]
fn test_compress_without_key_fails() {
    let temp = TempDir::new().unwrap();
    let inputs = create_stack_inputs(temp.path());
    let output = temp.child("merged.png");

    imgmerge()
        .arg("-of")
        .arg(output.path())
        .arg("-c")
        .args(&inputs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));

    output.assert(predicate::path::missing());
}

#[test]
fn test_merge_explicit_files() {
    let temp = TempDir::new().unwrap();
    let inputs = create_stack_inputs(temp.path());
    let output = temp.child("merged.png");

    imgmerge()
        .arg("-of")
        .arg(output.path())
        .args(&inputs)
        .assert()
        .success()
        .stdout(predicate::str::contains("found 2 images"))
        .stdout(predicate::str::contains("output picture: 400x500"))
        .stdout(predicate::str::contains("saved to:"));

    output.assert(predicate::path::is_file());
    let merged = ImageReader::open(output.path()).unwrap().decode().unwrap();
    assert_eq!(merged.dimensions(), (400, 500));
    assert_eq!(merged.get_pixel(0, 0), Rgba(RED));
    assert_eq!(merged.get_pixel(0, 199), Rgba(RED));
    assert_eq!(merged.get_pixel(0, 200), Rgba(BLUE));
}

#[test]
fn test_merge_directory_into_output_directory() {
    let temp = TempDir::new().unwrap();
    let inputs = temp.child("imgs");
    inputs.create_dir_all().unwrap();
    create_png(inputs.path(), "1.png", 300, 100, RED);
    create_jpeg(inputs.path(), "2.jpg", 600, 100);
    inputs.child("notes.txt").write_str("not an image").unwrap();
    let out = temp.child("out");
    out.create_dir_all().unwrap();

    imgmerge()
        .arg("-od")
        .arg(format!("{}/", out.path().display()))
        .args(["-m", "min", "-i"])
        .arg(inputs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("scaling picture 1 from 600x100 to 300x50"));

    let files = png_files_in(out.path());
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("imgmerge_"));

    let merged = ImageReader::open(&files[0]).unwrap().decode().unwrap();
    assert_eq!(merged.dimensions(), (300, 150));
}

#[test]
fn test_long_flag_spelling() {
    let temp = TempDir::new().unwrap();
    let inputs = create_stack_inputs(temp.path());
    let output = temp.child("merged.png");

    imgmerge()
        .arg(format!("--of={}", output.path().display()))
        .args(["--scale", "0.5", "--quiet"])
        .args(&inputs)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let merged = ImageReader::open(output.path()).unwrap().decode().unwrap();
    assert_eq!(merged.dimensions(), (200, 250));
}

#[test]
fn test_missing_output_directory_fails() {
    let temp = TempDir::new().unwrap();
    let inputs = create_stack_inputs(temp.path());
    let missing = temp.child("missing");

    imgmerge()
        .arg("-od")
        .arg(missing.path())
        .args(&inputs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not accessible"));

    missing.assert(predicate::path::missing());
}

#[test]
fn test_corrupt_image_fails() {
    let temp = TempDir::new().unwrap();
    let good = create_png(temp.path(), "a.png", 10, 10, RED);
    let broken = temp.child("broken.jpg");
    broken.write_binary(b"fake image data").unwrap();
    let output = temp.child("merged.png");

    imgmerge()
        .arg("-of")
        .arg(output.path())
        .arg(&good)
        .arg(broken.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode"));

    output.assert(predicate::path::missing());
}

#[test]
fn test_empty_directory_fails() {
    let temp = TempDir::new().unwrap();
    let inputs = temp.child("imgs");
    inputs.create_dir_all().unwrap();
    let output = temp.child("merged.png");

    imgmerge()
        .arg("-of")
        .arg(output.path())
        .arg("-i")
        .arg(inputs.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn test_negative_scale_fails() {
    let temp = TempDir::new().unwrap();
    let inputs = create_stack_inputs(temp.path());
    let output = temp.child("merged.png");

    imgmerge()
        .arg("-of")
        .arg(output.path())
        .arg("-s=-1")
        .args(&inputs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scale factor"));
}
