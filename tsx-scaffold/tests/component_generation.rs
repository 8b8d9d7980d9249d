//! Integration tests for component generation

use serde_json::{json, Map};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tsx_scaffold::{ComponentGenerator, ScaffoldError, StyleMode};

fn dir_entries(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn expected(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Fully featured component
#[test]
fn test_home_with_every_option() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let mut props = Map::new();
    props.insert("name".to_string(), json!("Hasan"));

    let component = ComponentGenerator::new("home")
        .save_to(temp_dir.path())
        .style_mode(StyleMode::All)
        .with_story_book(true)
        .with_tests(true)
        .with_types(true)
        .with_default_props(props)
        .generate()?;

    let dir = temp_dir.path().join("Home");
    assert_eq!(component.name, "Home");
    assert_eq!(component.directory, dir);
    assert_eq!(component.files.len(), 7);

    assert_eq!(
        dir_entries(&dir),
        expected(&[
            "index.ts",
            "Home.tsx",
            "Home.types.ts",
            "Home.styled.ts",
            "Home.scss",
            "Home.storybook.tsx",
            "Home.test.tsx",
        ])
    );

    let index = fs::read_to_string(dir.join("index.ts"))?;
    assert!(index.contains("export { default } from \"./Home\";"));
    assert!(index.contains("export * from \"./Home.types\";"));

    let body = fs::read_to_string(dir.join("Home.tsx"))?;
    assert!(body.contains("import { HomeProps } from \"./Home.types\";"));
    assert!(body.contains("import classes from \"./Home.scss\";"));
    assert!(body.contains("import { HomeWrapper } from \"./Home.styled\";"));
    assert!(body.contains("props: HomeProps"));
    assert!(body.contains("Home.defaultProps = {"));
    assert!(body.contains("name: \"Hasan\","));
    assert!(!body.contains("{{"));

    let story = fs::read_to_string(dir.join("Home.storybook.tsx"))?;
    assert!(story.contains("import Home from \"./Home\";"));

    let test = fs::read_to_string(dir.join("Home.test.tsx"))?;
    assert!(test.contains("describe(\"Home\""));

    Ok(())
}

/// Component with every option left at its default
#[test]
fn test_user_card_with_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    ComponentGenerator::new("user-card")
        .save_to(temp_dir.path())
        .generate()?;

    let dir = temp_dir.path().join("UserCard");
    assert_eq!(dir_entries(&dir), expected(&["index.ts", "UserCard.tsx"]));

    let index = fs::read_to_string(dir.join("index.ts"))?;
    assert_eq!(index, "export { default } from \"./UserCard\";\n");

    let body = fs::read_to_string(dir.join("UserCard.tsx"))?;
    assert!(!body.contains("import"));
    assert!(body.contains("props: any"));
    assert!(!body.contains("defaultProps"));

    Ok(())
}

/// Existing target directory aborts without side effects
#[test]
fn test_existing_directory_is_left_alone() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path().join("Home");
    fs::create_dir(&dir)?;
    fs::write(dir.join("Home.tsx"), "original")?;

    let result = ComponentGenerator::new("home")
        .save_to(temp_dir.path())
        .style_mode(StyleMode::All)
        .with_types(true)
        .generate();

    match result {
        Err(ScaffoldError::AlreadyExists { name, target_dir }) => {
            assert_eq!(name, "Home");
            assert_eq!(target_dir, temp_dir.path());
        }
        other => panic!("expected conflict, got {other:?}"),
    }

    assert_eq!(dir_entries(&dir), expected(&["Home.tsx"]));
    assert_eq!(fs::read_to_string(dir.join("Home.tsx"))?, "original");
    assert_eq!(dir_entries(temp_dir.path()), expected(&["Home"]));

    Ok(())
}

/// Each style mode produces exactly its styling files
#[test]
fn test_style_modes_file_sets() -> anyhow::Result<()> {
    let cases = [
        (StyleMode::None, vec!["index.ts", "Card.tsx"]),
        (StyleMode::Scss, vec!["index.ts", "Card.tsx", "Card.scss"]),
        (StyleMode::Styled, vec!["index.ts", "Card.tsx", "Card.styled.ts"]),
        (
            StyleMode::All,
            vec!["index.ts", "Card.tsx", "Card.scss", "Card.styled.ts"],
        ),
    ];

    for (mode, files) in cases {
        let temp_dir = TempDir::new()?;
        ComponentGenerator::new("card")
            .save_to(temp_dir.path())
            .style_mode(mode)
            .generate()?;

        let dir = temp_dir.path().join("Card");
        assert_eq!(dir_entries(&dir), expected(&files), "style mode {mode:?}");

        let body = fs::read_to_string(dir.join("Card.tsx"))?;
        assert_eq!(
            body.contains("import classes"),
            files.contains(&"Card.scss"),
            "style mode {mode:?}"
        );
        assert_eq!(
            body.contains("CardWrapper"),
            files.contains(&"Card.styled.ts"),
            "style mode {mode:?}"
        );
    }

    Ok(())
}

/// Dry rendering leaves the filesystem untouched
#[test]
fn test_render_files_writes_nothing() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let files = ComponentGenerator::new("home")
        .save_to(temp_dir.path())
        .with_tests(true)
        .render_files()?;

    assert_eq!(files.len(), 3);
    assert!(dir_entries(temp_dir.path()).is_empty());

    Ok(())
}
