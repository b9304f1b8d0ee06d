//! File-system and process tests for the extraction pipeline.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;
use twconst_extract::{
    detect_tailwind_version, extract_class_names, load_css, BuildError, CssSource, ExtractError,
    TailwindBuild,
};

const TAILWIND_V4_SAMPLE: &str = r#"/*! tailwindcss v4.1.18 | MIT License | https://tailwindcss.com */
@layer properties{@supports (((-webkit-hyphens:none)) and (not (margin-trim:inline))){*,:before,:after{--tw-space-x-reverse:0}}}
@layer theme{:root,:host{--spacing:.25rem;--color-blue-500:oklch(62.3% .214 259.815)}}
@layer base{*,:after,:before{box-sizing:border-box}}
@layer utilities{.absolute{position:absolute}.-mt-2{margin-top:calc(var(--spacing)*-2)}.p-0\.5{padding:calc(var(--spacing)*.5)}.pl-4{padding-left:calc(var(--spacing)*4)}:where(.space-x-4>:not(:last-child)){margin-inline-start:calc(var(--spacing)*4)}.w-1\/2{width:50%}.bg-blue-500{background-color:var(--color-blue-500)}.text-2xl{font-size:var(--text-2xl)}.group-hover\:flex:is(:where(.group):hover *){display:flex}@media (min-width:40rem){.sm\:flex{display:flex}}.hover\:underline:hover{text-decoration-line:underline}}
@keyframes spin{to{transform:rotate(360deg)}}
@property --tw-space-x-reverse{syntax:"*";inherits:false;initial-value:0}
"#;

#[test]
fn realistic_tailwind_output() {
    let extracted = extract_class_names(TAILWIND_V4_SAMPLE);
    let names: Vec<&str> = extracted.classes.iter().map(String::as_str).collect();
    assert_eq!(
        names,
        [
            "-mt-2",
            "absolute",
            "bg-blue-500",
            "p-0.5",
            "pl-4",
            "space-x-4",
            "text-2xl",
            "w-1/2"
        ]
    );
}

#[test]
fn css_file_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tailwind.css");
    fs::write(&path, ".flex{display:flex}").unwrap();

    let css = load_css(&CssSource::File(path)).unwrap();
    assert_eq!(extract_class_names(&css).len(), 1);
}

#[test]
fn missing_css_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.css");
    match load_css(&CssSource::File(path.clone())) {
        Err(ExtractError::Read { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn version_from_package_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(
        &path,
        r#"{ "name": "site", "devDependencies": { "@tailwindcss/cli": "^4.1.18" } }"#,
    )
    .unwrap();
    assert_eq!(detect_tailwind_version(&path).unwrap(), "4.1.18");
}

#[test]
fn version_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");

    assert!(matches!(
        detect_tailwind_version(&path),
        Err(BuildError::MissingPackageJson(_))
    ));

    fs::write(&path, r#"{ "dependencies": { "react": "18" } }"#).unwrap();
    assert!(matches!(
        detect_tailwind_version(&path),
        Err(BuildError::VersionNotFound(_))
    ));

    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        detect_tailwind_version(&path),
        Err(BuildError::PackageJson(_))
    ));
}

#[cfg(unix)]
mod fake_cli {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Writes an executable that stands in for `npx`: it copies a fixed
    /// stylesheet to the path following `-o`.
    fn fake_npx(dir: &TempDir, body: &str) -> String {
        let script = dir.path().join("fake-npx");
        fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).unwrap();
        format!("\"{}\"", script.display())
    }

    const WRITE_OUTPUT: &str = r#"while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then shift; printf '.flex{display:flex}.p-4{padding:1rem}' > "$1"; fi
  shift
done"#;

    #[test]
    fn build_reads_output() {
        let dir = TempDir::new().unwrap();
        let program = fake_npx(&dir, WRITE_OUTPUT);
        let build = TailwindBuild::new(
            "4.1.18",
            dir.path().join("in.css"),
            dir.path().join("tailwind.config.js"),
            dir.path().join("out.css"),
        )
        .with_program(program)
        .with_timeout(Duration::from_secs(10));

        let css = load_css(&CssSource::Build(build)).unwrap();
        let extracted = extract_class_names(&css);
        assert_eq!(extracted.classes.len(), 2);
    }

    #[test]
    fn build_without_output() {
        let dir = TempDir::new().unwrap();
        let program = fake_npx(&dir, "exit 0");
        let output = dir.path().join("out.css");
        let build = TailwindBuild::new("4", "in.css", "tw.js", &output).with_program(program);
        match build.run() {
            Err(BuildError::MissingOutput(p)) => assert_eq!(p, output),
            other => panic!("expected missing output, got {other:?}"),
        }
    }

    #[test]
    fn build_failure() {
        let dir = TempDir::new().unwrap();
        let program = fake_npx(&dir, "exit 3");
        let build = TailwindBuild::new("4", "in.css", "tw.js", "out.css").with_program(program);
        assert!(matches!(
            load_css(&CssSource::Build(build)),
            Err(ExtractError::Build(BuildError::CommandFailed(_, _)))
        ));
    }
}
