use std::{fs, path::PathBuf};

use tempfile::tempdir;

use ramify_cli::{Args, OutputFormat, run};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Collects all .md files from a directory
fn collect_outline_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("md")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demos_path() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(input: &str, output: &str) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        format: None,
        theme: None,
        zoom: None,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = collect_outline_files(demos_path());

    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed = Vec::new();

    for demo in &demos {
        let stem = demo.file_stem().unwrap().to_string_lossy().to_string();
        for extension in ["png", "svg"] {
            let output_path = temp_dir.path().join(format!("{stem}.{extension}"));
            let args = args(&demo.to_string_lossy(), &output_path.to_string_lossy());

            if let Err(e) = run(&args) {
                failed.push((demo.clone(), extension, e));
                continue;
            }

            let bytes = fs::read(&output_path).expect("Output should exist");
            match args.output_format() {
                OutputFormat::Png => assert!(bytes.starts_with(PNG_SIGNATURE)),
                OutputFormat::Svg => assert!(String::from_utf8_lossy(&bytes).contains("</svg>")),
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, extension, err) in &failed {
            eprintln!("  - {} ({extension}): {}", path.display(), err);
        }
        panic!("{} demo render(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} demos rendered", demos.len());
}

#[test]
fn e2e_overrides_and_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[canvas]\nwidth = 400\nheight = 300\n\n[style]\ntheme = \"dark\"\n",
    )
    .unwrap();

    let input = demos_path().join("new_topic.md");
    let output = temp_dir.path().join("map.svg");

    let mut args = args(&input.to_string_lossy(), &output.to_string_lossy());
    args.config = Some(config_path.to_string_lossy().to_string());
    args.zoom = Some(5.0);
    run(&args).expect("Render should succeed");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 400 300""#));
    assert!(svg.contains("scale(2)"), "zoom should be clamped to 2");
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out.png");
    let args = args("/no/such/outline.md", &output.to_string_lossy());
    assert!(run(&args).is_err());
    assert!(!output.exists());
}

#[test]
fn e2e_broken_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style\ntheme = \"dark\"").unwrap();

    let input = demos_path().join("new_topic.md");
    let output = temp_dir.path().join("out.svg");
    let mut args = args(&input.to_string_lossy(), &output.to_string_lossy());
    args.config = Some(config_path.to_string_lossy().to_string());

    assert!(run(&args).is_err());
}
