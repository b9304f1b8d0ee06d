//! End-to-end runs of the command line against pre-built CSS.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;
use twconst::{commands, Cli, GeneratorConfig};
use twconst_classify::{Category, UtilityManifest};

const CSS: &str = r".flex{display:flex}.hidden{display:none}.p-4{padding:1rem}.-mt-2{margin-top:-.5rem}.w-1\/2{width:50%}.text-2xl{font-size:1.5rem}.shadow{box-shadow:0 1px 3px}.cursor-pointer{cursor:pointer}.hover\:underline:hover{text-decoration:underline}";

fn project(config_json: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("built.css"), CSS).unwrap();
    fs::write(dir.path().join("generator.config.json"), config_json).unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> anyhow::Result<()> {
    let config = dir.join("generator.config.json");
    let mut argv = vec![
        "twconst".to_string(),
        "--config".to_string(),
        config.display().to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));
    twconst::run(Cli::try_parse_from(argv)?)
}

const CONFIG: &str = r#"{
    "tailwind": { "version": "4.1.18", "cssFile": "built.css" },
    "java": { "package": "com.example.ui", "className": "Tw", "sinceVersion": "1.0" },
    "output": { "directory": "gen", "createPackageStructure": true }
}"#;

#[test]
fn run_writes_manifest_and_grouped_java() {
    let dir = project(CONFIG);
    let manifest_path = dir.path().join("categorized-utilities.json");
    let manifest_arg = manifest_path.display().to_string();

    run(dir.path(), &["run", "--manifest", &manifest_arg]).unwrap();

    let manifest: UtilityManifest =
        serde_json::from_str(&fs::read_to_string(&manifest_path).unwrap()).unwrap();
    assert_eq!(manifest.metadata.tailwind_version, "4.1.18");
    assert_eq!(manifest.metadata.total_utilities, 8);
    assert_eq!(manifest.utilities.get(Category::Display).unwrap(), ["flex", "hidden"]);

    let java_path = dir.path().join("gen/com/example/ui/Tw.java");
    let java = fs::read_to_string(java_path).unwrap();
    assert!(java.starts_with("package com.example.ui;"));
    assert!(java.contains("public static final class Spacing {"));
    assert!(java.contains(r#"public static final String NEG_TOP_2 = "-mt-2";"#));
    assert!(java.contains(r#"public static final String W_1_2 = "w-1/2";"#));
    assert!(java.contains(r#"public static final String XXLARGE = "text-2xl";"#));
    assert!(java.contains(r#"public static final String DEFAULT = "shadow";"#));
    assert!(java.contains(r#"public static final String CURSOR_POINTER = "cursor-pointer";"#));
    assert!(!java.contains("hover:underline\";"));
}

#[test]
fn flat_layout_when_grouping_disabled() {
    let config = r#"{
        "tailwind": { "version": "4.1.18", "cssFile": "built.css" },
        "output": { "directory": "gen", "createPackageStructure": false },
        "grouping": { "enabled": false, "structure": {} }
    }"#;
    let dir = project(config);
    let manifest_arg = dir.path().join("m.json").display().to_string();

    run(dir.path(), &["run", "--manifest", &manifest_arg]).unwrap();

    let java = fs::read_to_string(dir.path().join("gen/TW.java")).unwrap();
    assert!(java.contains("// ========== DISPLAY =========="));
    assert!(java.contains(r#"public static final String NEG_MT_2 = "-mt-2";"#));
    assert!(java.contains(r#"public static final String SHADOW = "shadow";"#));
    assert!(!java.contains("public static final class Spacing"));
}

#[test]
fn overrides_beat_the_config_file() {
    let dir = project(CONFIG);
    let manifest_arg = dir.path().join("m.json").display().to_string();
    let output = dir.path().join("elsewhere");
    let output_arg = output.display().to_string();

    run(
        dir.path(),
        &[
            "run",
            "--manifest",
            &manifest_arg,
            "--package",
            "org.acme",
            "--class-name",
            "Css",
            "--output",
            &output_arg,
        ],
    )
    .unwrap();

    let java = fs::read_to_string(output.join("org/acme/Css.java")).unwrap();
    assert!(java.contains("public final class Css implements Serializable {"));
}

#[test]
fn extract_then_generate_separately() {
    let dir = project(CONFIG);
    let manifest_arg = dir.path().join("m.json").display().to_string();

    run(dir.path(), &["extract", "--manifest", &manifest_arg]).unwrap();
    assert!(!dir.path().join("gen").exists());

    run(dir.path(), &["generate", "--manifest", &manifest_arg]).unwrap();
    assert!(dir.path().join("gen/com/example/ui/Tw.java").exists());
}

#[test]
fn generate_without_manifest_fails() {
    let dir = project(CONFIG);
    let manifest_arg = dir.path().join("missing.json").display().to_string();
    let err = run(dir.path(), &["generate", "--manifest", &manifest_arg]).unwrap_err();
    assert!(format!("{err:#}").contains("twconst extract"));
}

#[test]
fn auto_version_from_package_json() {
    let config = r#"{ "tailwind": { "version": "auto", "cssFile": "built.css" } }"#;
    let dir = project(config);
    fs::write(
        dir.path().join("package.json"),
        r#"{ "devDependencies": { "tailwindcss": "^4.0.7" } }"#,
    )
    .unwrap();
    let manifest_path = dir.path().join("m.json");
    let manifest_arg = manifest_path.display().to_string();

    run(dir.path(), &["extract", "--manifest", &manifest_arg]).unwrap();

    let manifest: UtilityManifest =
        serde_json::from_str(&fs::read_to_string(manifest_path).unwrap()).unwrap();
    assert_eq!(manifest.metadata.tailwind_version, "4.0.7");
}

#[test]
fn undetectable_version_with_prebuilt_css() {
    let config = r#"{ "tailwind": { "cssFile": "built.css" } }"#;
    let dir = project(config);
    let manifest_path = dir.path().join("m.json");
    let manifest_arg = manifest_path.display().to_string();

    run(dir.path(), &["extract", "--manifest", &manifest_arg]).unwrap();

    let manifest: UtilityManifest =
        serde_json::from_str(&fs::read_to_string(manifest_path).unwrap()).unwrap();
    assert_eq!(manifest.metadata.tailwind_version, "unknown");
}

#[test]
fn build_requires_a_version() {
    let config = r#"{ "tailwind": { "version": "auto" } }"#;
    let dir = project(config);
    let manifest_arg = dir.path().join("m.json").display().to_string();
    let err = run(dir.path(), &["extract", "--manifest", &manifest_arg]).unwrap_err();
    assert!(format!("{err:#}").contains("package.json"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = project("{ not json");
    let err = run(dir.path(), &["classify", "p-4"]).unwrap_err();
    assert!(format!("{err:#}").contains("invalid JSON"));
}

#[test]
fn classify_uses_configured_grouping() {
    let config: GeneratorConfig = GeneratorConfig::default();
    let classified = commands::classify(&config, &["pl-4".to_string(), "-mt-2".to_string()]);
    assert_eq!(classified[0].top_level, "Spacing");
    assert_eq!(classified[0].sub_category.as_deref(), Some("Padding"));
    assert_eq!(classified[0].constant_name, "LEFT_4");
    assert_eq!(classified[1].constant_name, "NEG_TOP_2");
}
