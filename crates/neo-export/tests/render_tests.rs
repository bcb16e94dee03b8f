//! Integration tests for rendering and writing the data module.

use neo_export::{DataModule, SourceInfo};
use test_utils::{cell, stats_with_means};

fn sources() -> SourceInfo {
    SourceInfo {
        sst: "NASA NEO MODIS Aqua SST (MYD28M)".to_string(),
        chlorophyll: "NASA NEO MODIS Aqua Chlorophyll (MY1DMM_CHLORA)".to_string(),
    }
}

fn run() -> Vec<features::MonthStats> {
    let mut september = stats_with_means("2024-09", 24.0, 0.9, 0.10, 0.50, 3);
    september.cells = vec![
        cell(40.05, -69.95, 25.0, 1.0, 0.15, 0.7),
        cell(40.15, -69.85, 23.0, 0.8, 0.10, 0.3),
    ];
    let mut october = stats_with_means("2024-10", 26.5, 0.7, 0.25, 0.64, 8);
    october.cells = vec![
        cell(40.05, -69.95, 27.5, 0.8, 0.30, 0.84),
        cell(40.15, -69.85, 25.5, 0.6, 0.20, 0.44),
    ];
    vec![september, october]
}

#[tokio::test]
async fn test_write_creates_parents_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("src/data/oceanData.js");
    let module = DataModule::assemble(&run(), &sources(), 800).unwrap();

    module.write(&path).await.unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(content.starts_with("// Generated by neo-pipeline on "));
    assert!(content.contains("export const oceanLayers = {"));
    assert!(content.contains("export const simulationTimeline = ["));
    assert!(content.ends_with(";\n"));
}

#[tokio::test]
async fn test_write_replaces_previous_module() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("oceanData.js");
    tokio::fs::write(&path, "stale").await.unwrap();

    let module = DataModule::assemble(&run(), &sources(), 800).unwrap();
    module.write(&path).await.unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(!content.contains("stale"));
    assert!(content.contains("export const insightRegions = ["));

    // No sidecar files are left behind.
    let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.unwrap() {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    assert_eq!(names, vec!["oceanData.js".to_string()]);
}

#[test]
fn test_rendered_sections_are_valid_json() {
    let module = DataModule::assemble(&run(), &sources(), 800).unwrap();
    let out = module.render(chrono::Utc::now()).unwrap();

    for section in out.split("export const ").skip(1) {
        let json = section
            .split_once(" = ")
            .map(|(_, rest)| rest.trim_end().trim_end_matches(';'))
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert!(parsed.is_object() || parsed.is_array());
    }
}
