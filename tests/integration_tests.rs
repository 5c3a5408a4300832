use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use filediff::config::FileDiffConfig;
use filediff::diff::{compare, DiffFormat, DiffFormatter, LineKind};
use filediff::error::FileDiffError;
use filediff::export::DiffExporter;
use filediff::loader::FileLoader;
use filediff::merge::{self, ApplyDirection};

fn write_pair(dir: &TempDir, left: &str, right: &str) -> (PathBuf, PathBuf) {
    let left_path = dir.path().join("left.txt");
    let right_path = dir.path().join("right.txt");
    fs::write(&left_path, left).expect("Failed to write left file");
    fs::write(&right_path, right).expect("Failed to write right file");
    (left_path, right_path)
}

#[test]
fn test_compare_files_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (left_path, right_path) = write_pair(
        &temp_dir,
        "fn main() {\n    println!(\"Hello\");\n}\n",
        "fn main() {\n    println!(\"Hello, world!\");\n}\n",
    );

    let loader = FileLoader::new(0);
    let (left_text, right_text) = loader
        .load_pair(&left_path, &right_path)
        .expect("Failed to load inputs");

    let result = compare(&left_text, &right_text);

    assert_eq!(result.left_lines.len(), 3);
    assert_eq!(result.right_lines.len(), 3);
    assert_eq!(result.left_lines[1].kind, LineKind::Removed);
    assert_eq!(result.right_lines[1].kind, LineKind::Added);
    assert_eq!(result.left_lines[2].kind, LineKind::Same);

    let rendered =
        DiffFormatter::format_side_by_side(&result, &left_path, &right_path, 120, false);
    assert!(rendered.contains("Hello, world!"));
    assert!(rendered.contains(" | "));
}

#[test]
fn test_missing_input_surfaces_before_comparison() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (left_path, _) = write_pair(&temp_dir, "a\n", "b\n");
    let missing = temp_dir.path().join("missing.txt");

    let loader = FileLoader::new(0);
    let err = loader.load_pair(&left_path, &missing).unwrap_err();

    assert!(matches!(err, FileDiffError::InputUnavailable { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_json_wire_shape() {
    let result = compare("a\nb\n", "a\nc\n");
    let value = serde_json::to_value(&result).expect("Failed to serialize");

    assert!(value["leftLines"].is_array());
    assert!(value["rightLines"].is_array());
    let removed = &value["leftLines"][1];
    assert_eq!(removed["lineNumber"], 2);
    assert_eq!(removed["content"], "b");
    assert_eq!(removed["type"], "removed");
    let added = &value["rightLines"][1];
    assert_eq!(added["type"], "added");
}

#[test]
fn test_identical_files_render_no_changes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (left_path, right_path) = write_pair(&temp_dir, "same\ncontent\n", "same\ncontent\n");

    let loader = FileLoader::new(0);
    let (left_text, right_text) = loader.load_pair(&left_path, &right_path).unwrap();
    let result = compare(&left_text, &right_text);

    assert!(!result.has_changes());
    assert_eq!(DiffFormatter::format_stats(&result), "No changes");
}

#[test]
fn test_export_then_merge_flow() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (left_path, right_path) = write_pair(&temp_dir, "a\nb\n", "a\nc\n");

    let loader = FileLoader::new(0);
    let (left_text, right_text) = loader.load_pair(&left_path, &right_path).unwrap();
    let result = compare(&left_text, &right_text);

    let export_path = temp_dir.path().join("review.diff");
    DiffExporter::with_format(DiffFormat::Unified)
        .export_diff(&result, &left_path, &right_path, &export_path)
        .expect("Failed to export");
    let exported = fs::read_to_string(&export_path).unwrap();
    assert!(exported.contains("-b"));
    assert!(exported.contains("+c"));

    let merged_path = temp_dir.path().join("merged.txt");
    merge::merge_files(&left_path, &right_path, &merged_path).expect("Failed to merge");
    assert_eq!(fs::read_to_string(&merged_path).unwrap(), "a\nc\n");
}

#[test]
fn test_apply_changes_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (left_path, right_path) = write_pair(&temp_dir, "keep me\n", "replace me\n");

    merge::apply_changes(&left_path, &right_path, ApplyDirection::LeftToRight)
        .expect("Failed to apply");
    assert_eq!(fs::read_to_string(&right_path).unwrap(), "keep me\n");

    // Both sides now identical; a fresh comparison agrees.
    let loader = FileLoader::new(0);
    let (left_text, right_text) = loader.load_pair(&left_path, &right_path).unwrap();
    assert!(!compare(&left_text, &right_text).has_changes());
}

#[test]
fn test_config_file_controls_width() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("filediff.toml");
    fs::write(&config_path, "[display]\nwidth = 60\n").unwrap();

    let config = FileDiffConfig::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(config.display.width, 60);
    assert!(config.validate().is_ok());

    let result = compare("a\n", "b\n");
    let rendered = DiffFormatter::format_side_by_side(&result, "l", "r", config.display.width, false);
    for line in rendered.lines() {
        assert!(line.chars().count() <= 60);
    }
}
