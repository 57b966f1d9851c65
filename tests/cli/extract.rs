use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const HOME_VIEW: &str = r#"<template>
  <div class="home">
    <h1>欢迎 {{ userName }}</h1>
    <p>请 点击</p>
    <button>点击</button>
    <span>123</span>
  </div>
</template>

<script setup lang="ts">
defineProps<{ userName: string }>();
</script>
"#;

#[test]
fn test_extract_default_layout() -> Result<()> {
    let test = CliTest::with_file("src/views/Home.vue", HOME_VIEW)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("src/lang/locales/views/Home.ts")?,
        "const documentation = {
  userName: `欢迎 {userName}`,
  点击: `请 点击`,
  点击_1: `点击`,
  w3: `123`,
};

export default documentation;
"
    );

    let out = stdout(&output);
    assert!(out.contains("Generated: "));
    assert!(out.contains("views/Home.ts"));
    assert!(out.contains("Extracted 4 entries from 1 file (0 skipped)"));

    Ok(())
}

#[test]
fn test_extract_mirrors_nested_directories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.vue", "<template><h1>App</h1></template>")?;
    test.write_file("src/a/b/c.vue", "<template><p>Deep</p></template>")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    assert!(test.exists("src/lang/locales/App.ts"));
    assert!(test.exists("src/lang/locales/a/b/c.ts"));

    let out = stdout(&output);
    let first = out.find("App.ts").unwrap();
    let second = out.find("c.ts").unwrap();
    assert!(first < second, "files are processed in walk order");

    Ok(())
}

#[test]
fn test_extract_skips_files_without_text() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Logic.vue", "<script>export default {}</script>")?;
    test.write_file("src/Icon.vue", "<template><svg><path d=\"M0\"/></svg></template>")?;
    test.write_file("src/Label.vue", "<template><span>Label</span></template>")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    assert!(!test.exists("src/lang/locales/Logic.ts"));
    assert!(!test.exists("src/lang/locales/Icon.ts"));
    assert!(test.exists("src/lang/locales/Label.ts"));
    assert!(stdout(&output).contains("Extracted 1 entry from 1 file (2 skipped)"));
    assert!(!stderr(&output).contains("skipped:"));

    Ok(())
}

#[test]
fn test_extract_verbose_reports_skipped_files() -> Result<()> {
    let test = CliTest::with_file("src/Logic.vue", "<script>export default {}</script>")?;

    let output = test.extract_command().arg("--verbose").output()?;
    assert!(output.status.success());

    let err = stderr(&output);
    assert!(err.contains("config: defaults"));
    assert!(err.contains("skipped: "));
    assert!(err.contains("Logic.vue (no template text)"));

    Ok(())
}

#[test]
fn test_extract_warns_when_no_files_found() -> Result<()> {
    let test = CliTest::with_file("src/main.ts", "console.log('no components')")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let err = stderr(&output);
    assert!(err.contains("warning: no .vue files found under"));
    assert_eq!(err.lines().count(), 1);
    assert!(!test.exists("src/lang"));

    Ok(())
}

#[test]
fn test_extract_missing_source_root_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to read directory"));

    Ok(())
}

#[test]
fn test_extract_escapes_backticks() -> Result<()> {
    let test = CliTest::with_file(
        "src/Help.vue",
        "<template><p>Run `npm install` first</p></template>",
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let content = test.read_file("src/lang/locales/Help.ts")?;
    assert!(content.contains("  first: `Run \\`npm install\\` first`,\n"));

    Ok(())
}

#[test]
fn test_extract_with_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nextractrc.json",
        r#"{
          "sourceRoot": "components",
          "outputRoot": "locales/zh",
          "format": "json",
          "ignores": ["legacy/**"]
        }"#,
    )?;
    test.write_file("components/Card.vue", "<template><h2>卡片 标题</h2></template>")?;
    test.write_file("components/legacy/Old.vue", "<template><p>Old</p></template>")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("locales/zh/Card.json")?,
        "{\n  \"标题\": \"卡片 标题\"\n}\n"
    );
    assert!(!test.exists("locales/zh/legacy"));

    Ok(())
}

#[test]
fn test_extract_flags_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nextractrc.json", r#"{ "exportName": "messages" }"#)?;
    test.write_file("web/Nav.vue", "<template><a>Home</a><a>About us</a></template>")?;

    let output = test
        .extract_command()
        .args(["--source-root", "web", "--output-root", "i18n/en"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("i18n/en/Nav.ts")?,
        "const messages = {\n  Home: `Home`,\n  us: `About us`,\n};\n\nexport default messages;\n"
    );

    Ok(())
}

#[test]
fn test_extract_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", "<template><p>One</p><p>Two</p></template>")?;

    let output = test.extract_command().arg("--dry-run").output()?;
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Would generate: "));
    assert!(out.contains("App.ts (2 entries)"));
    assert!(out.contains("Dry run: would extract 2 entries from 1 file (0 skipped)"));
    assert!(!test.exists("src/lang"));

    Ok(())
}

#[test]
fn test_extract_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", "<template><p>Hi</p></template>")?;
    test.write_file(".i18nextractrc.json", r#"{ "ignores": ["[broken"] }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));
    assert!(!test.exists("src/lang"));

    Ok(())
}

#[test]
fn test_extract_is_repeatable() -> Result<()> {
    let test = CliTest::with_file("src/views/Home.vue", HOME_VIEW)?;

    test.extract_command().output()?;
    let first = test.read_file("src/lang/locales/views/Home.ts")?;
    test.extract_command().output()?;
    let second = test.read_file("src/lang/locales/views/Home.ts")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("extract"));
    assert!(stdout(&output).contains("init"));

    Ok(())
}

#[test]
fn test_extract_verbose_reports_ignored_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nextractrc.json", r#"{ "ignores": ["legacy"] }"#)?;
    test.write_file("src/legacy/Old.vue", "<template><p>Old</p></template>")?;
    test.write_file("src/App.vue", "<template><p>New</p></template>")?;

    let output = test.extract_command().arg("-v").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("ignored: 1 path matched ignore patterns"));
    assert!(!test.exists("src/lang/locales/legacy"));

    Ok(())
}

#[test]
fn test_extract_source_root_must_be_a_directory() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", "<template><p>Hi</p></template>")?;

    let output = test
        .extract_command()
        .args(["--source-root", "src/App.vue"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to read directory"));
    assert!(stderr(&output).contains("not a directory"));

    Ok(())
}
