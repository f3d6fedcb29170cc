use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use trellis_cli::{Args, run};

fn args(input: impl Into<PathBuf>, output: Option<&Path>) -> Args {
    Args {
        input: input.into(),
        output: output.map(Path::to_path_buf),
        config: None,
        check: false,
        log_level: "off".to_string(),
    }
}

/// Collects all .toml scene files from a directory
fn collect_scene_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Scenes live at the workspace root, not in the crate
fn scenes_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("scenes")
}

#[test]
fn e2e_smoke_test_scenes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let scenes = collect_scene_files(scenes_dir());
    assert!(!scenes.is_empty(), "No scenes found in scenes/");

    let mut failed_scenes = Vec::new();

    for scene_path in &scenes {
        let output_filename = format!(
            "{}.svg",
            scene_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args(scene_path, Some(&output_path))) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output should exist");
                assert!(svg.contains("<svg"), "{} produced no SVG", scene_path.display());
            }
            Err(e) => failed_scenes.push((scene_path.clone(), e)),
        }
    }

    if !failed_scenes.is_empty() {
        eprintln!("\nScenes that failed:");
        for (path, err) in &failed_scenes {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} scene(s) failed unexpectedly", failed_scenes.len());
    }
}

#[test]
fn e2e_commit_graph_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("commit_graph.svg");

    let input = scenes_dir().join("commit_graph.toml");
    run(&args(input, Some(&output_path))).expect("commit_graph.toml should render");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains(r##"xlink:href="#commit-main""##));
    assert!(svg.contains(r#"transform="translate(90, 50)""#));
    assert!(svg.contains("dominant-baseline"));
}

#[test]
fn e2e_invalid_scene_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("broken.toml");
    fs::write(&input_path, "[[nodes]]\nkind = \"hexagon\"\n").unwrap();

    assert!(run(&args(&input_path, None)).is_err(), "Invalid scene should fail");
    assert!(!temp_dir.path().join("broken.svg").exists());
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input = temp_dir.path().join("absent.toml");
    let output = temp_dir.path().join("out.svg");

    assert!(run(&args(input, Some(&output))).is_err(), "Missing input should fail");
}

#[test]
fn e2e_default_output_next_to_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("label.toml");
    fs::write(
        &input_path,
        "[[nodes]]\nkind = \"text\"\ncontent = \"a < b\"\n",
    )
    .unwrap();

    run(&args(&input_path, None)).expect("label.toml should render");

    let svg = fs::read_to_string(temp_dir.path().join("label.svg")).unwrap();
    assert!(svg.contains(r#"dominant-baseline="central">a &lt; b</text>"#));
}

#[test]
fn e2e_check_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("commit_graph.svg");

    let mut check = args(scenes_dir().join("commit_graph.toml"), Some(&output_path));
    check.check = true;
    run(&check).expect("commit_graph.toml should pass the check");
    assert!(!output_path.exists());

    let broken = temp_dir.path().join("typo.toml");
    fs::write(
        &broken,
        "[[nodes]]\nkind = \"circle\"\nradius = 5\nfil = \"red\"\n",
    )
    .unwrap();
    let mut check = args(&broken, None);
    check.check = true;
    assert!(run(&check).is_err(), "Misspelled option should fail the check");
}
