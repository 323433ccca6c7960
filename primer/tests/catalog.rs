use std::fs;
use std::path::{Path, PathBuf};

use primer::catalog::{ExerciseFile, TemplateCategory, TemplateFile, TemplateKey, Variant};
use primer::error::CatalogError;
use primer::{Catalog, CatalogConfig};
use tempfile::tempdir;

fn load_paths() -> Vec<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("exercise_paths.json");
    let data = fs::read(path).expect("fixture must exist");
    serde_json::from_slice(&data).expect("fixture must be a list of paths")
}

#[test]
fn parses_solved_and_unsolved_names() {
    let config = CatalogConfig::default();
    let solved =
        ExerciseFile::parse(Path::new("03_loops/level_4/ex_prime-solved.cpp"), &config).unwrap();
    assert_eq!(solved.key.topic, "03_loops");
    assert_eq!(solved.key.level, 4);
    assert_eq!(solved.key.slug, "prime");
    assert_eq!(solved.key.language, "C++");
    assert_eq!(solved.variant, Variant::Solved);

    let unsolved =
        ExerciseFile::parse(Path::new("03_loops/level_4/ex_prime.cpp"), &config).unwrap();
    assert_eq!(unsolved.key, solved.key);
    assert_eq!(unsolved.variant, Variant::Unsolved);
}

#[test]
fn only_the_last_three_components_matter() {
    let config = CatalogConfig::default();
    let path = Path::new("cpp/exercises/02_if_conditions/level_3/ex_leap_year.cpp");
    let file = ExerciseFile::parse(path, &config).unwrap();
    assert_eq!(file.key.topic, "02_if_conditions");
    assert_eq!(file.key.level, 3);
}

#[test]
fn rejects_paths_outside_the_layout() {
    let config = CatalogConfig::default();
    let parse = |p: &str| ExerciseFile::parse(Path::new(p), &config).unwrap_err();
    assert!(matches!(parse("level_4/ex_prime.cpp"), CatalogError::Layout { depth: 2, .. }));
    assert!(matches!(parse("03_loops/advanced/ex_prime.cpp"), CatalogError::Level { .. }));
    assert!(matches!(parse("03_loops/level_4/prime.cpp"), CatalogError::Prefix { .. }));
    assert!(matches!(parse("03_loops/level_4/ex_prime.rb"), CatalogError::Language { .. }));
    assert!(matches!(parse("03_loops/level_4/ex_-solved.cpp"), CatalogError::EmptySlug { .. }));
}

#[test]
fn groups_pairs_from_paths() {
    let catalog = Catalog::from_paths(load_paths(), &CatalogConfig::default());
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.topics(), vec!["01_basics_variables", "02_if_conditions", "03_loops"]);
    assert_eq!(catalog.levels("03_loops"), vec![4, 5]);
    assert_eq!(catalog.levels("01_basics_variables"), vec![3, 5]);
    assert_eq!(catalog.skipped().len(), 3);

    let incomplete: Vec<&str> = catalog.incomplete().map(|e| e.key.slug.as_str()).collect();
    assert_eq!(incomplete, vec!["modulo", "ticket_pricing"]);

    let gcd = catalog.by_topic("03_loops").find(|e| e.key.slug == "gcd").unwrap();
    assert!(gcd.is_complete());
    assert_eq!(gcd.solved.as_deref(), Some(Path::new("03_loops/level_5/ex_gcd-solved.cpp")));
    assert_eq!(gcd.unsolved.as_deref(), Some(Path::new("03_loops/level_5/ex_gcd.cpp")));
}

#[test]
fn duplicate_files_keep_the_first() {
    let paths = ["a/03_loops/level_4/ex_prime.cpp", "b/03_loops/level_4/ex_prime.cpp"];
    let catalog = Catalog::from_paths(paths, &CatalogConfig::default());
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].unsolved.as_deref(), Some(Path::new(paths[0])));
    assert_eq!(catalog.skipped(), [PathBuf::from(paths[1])]);
}

#[test]
fn scans_a_directory_tree() {
    let dir = tempdir().expect("tempdir");
    for rel in load_paths() {
        let path = dir.path().join(&rel);
        fs::create_dir_all(path.parent().unwrap()).expect("mkdir");
        fs::write(&path, "// exercise\n").expect("write");
    }

    let scanned = Catalog::scan(dir.path(), &CatalogConfig::default()).expect("scan");
    let listed = Catalog::from_paths(load_paths(), &CatalogConfig::default());
    assert_eq!(scanned.entries(), listed.entries());
    assert_eq!(scanned.skipped().len(), listed.skipped().len());
}

#[test]
fn scan_requires_a_directory() {
    let dir = tempdir().expect("tempdir");
    let err = Catalog::scan(&dir.path().join("missing"), &CatalogConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Root { .. }));
}

#[test]
fn catalog_serializes_flat_entries() {
    let catalog = Catalog::from_paths(
        ["03_loops/level_4/ex_prime.cpp", "03_loops/level_4/ex_prime-solved.cpp"],
        &CatalogConfig::default(),
    );
    let json: serde_json::Value = serde_json::from_str(&catalog.to_json().unwrap()).unwrap();
    assert_eq!(
        json["entries"][0],
        serde_json::json!({
            "topic": "03_loops",
            "level": 4,
            "slug": "prime",
            "language": "C++",
            "solved": "03_loops/level_4/ex_prime-solved.cpp",
            "unsolved": "03_loops/level_4/ex_prime.cpp",
        })
    );
    assert_eq!(json["skipped"], serde_json::json!([]));
}

fn load_template_paths() -> Vec<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("template_paths.json");
    let data = fs::read(path).expect("fixture must exist");
    serde_json::from_slice(&data).expect("fixture must be a list of paths")
}

#[test]
fn parses_categorised_and_flat_templates() {
    let config = CatalogConfig::default();
    let nested =
        TemplateFile::parse(Path::new("cpp/templates/06_Algorithms/search-binary.cpp"), &config)
            .unwrap();
    assert_eq!(nested.key, TemplateKey { language: "C++".into(), id: "search-binary".into() });
    assert_eq!(
        nested.category,
        Some(TemplateCategory { order: Some(6), name: "Algorithms".into() })
    );

    let flat = TemplateFile::parse(Path::new("python/templates/gcd.py"), &config).unwrap();
    assert_eq!(flat.key.language, "Python");
    assert_eq!(flat.key.id, "gcd");
    assert_eq!(flat.category, None);
}

#[test]
fn rejects_templates_outside_the_layout() {
    let config = CatalogConfig::default();
    let parse = |p: &str| TemplateFile::parse(Path::new(p), &config).unwrap_err();
    assert!(matches!(parse("python/templates/a/b/deep.py"), CatalogError::TemplateLayout { .. }));
    assert!(matches!(parse("python/templates/README"), CatalogError::TemplateLayout { .. }));
    assert!(matches!(parse("python/templates"), CatalogError::TemplateLayout { .. }));
    assert!(matches!(parse("python/templates/gcd.rb"), CatalogError::Language { .. }));
}

#[test]
fn registers_templates_per_language() {
    let catalog = Catalog::from_paths(load_template_paths(), &CatalogConfig::default());
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.templates().len(), 8);
    // README, the nested file and the second cpp gcd.
    assert_eq!(catalog.skipped().len(), 3);
    assert!(catalog.skipped().contains(&PathBuf::from("cpp/templates/extra/gcd.cpp")));

    let cpp: Vec<&str> = catalog.templates_for("C++").map(|t| t.key.id.as_str()).collect();
    // Flat templates first, then categories by their number.
    assert_eq!(cpp, vec!["prime", "hello-world", "gcd", "search-binary"]);

    let gcd = catalog.template("Java", "gcd").expect("java gcd template");
    assert_eq!(gcd.path, Path::new("java/templates/06_Algorithms/gcd.java"));
    assert!(catalog.template("Python", "fibonacci").is_none());
}

#[test]
fn templates_directory_is_configurable() {
    let config = CatalogConfig { templates_dir: "snippets".into(), ..CatalogConfig::default() };
    let catalog = Catalog::from_paths(["cpp/snippets/gcd.cpp", "cpp/templates/gcd.cpp"], &config);
    assert_eq!(catalog.templates().len(), 1);
    assert_eq!(catalog.templates()[0].path, Path::new("cpp/snippets/gcd.cpp"));
    assert_eq!(catalog.skipped(), [PathBuf::from("cpp/templates/gcd.cpp")]);
}

#[cfg(unix)]
#[test]
fn non_utf8_component_is_rejected_not_shifted() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let path = Path::new("content")
        .join(OsStr::from_bytes(b"0\xff_topic"))
        .join("level_2")
        .join("ex_a.cpp");
    let err = ExerciseFile::parse(&path, &CatalogConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogError::NonUtf8 { .. }));

    let catalog = Catalog::from_paths([&path], &CatalogConfig::default());
    assert!(catalog.is_empty());
    assert_eq!(catalog.skipped(), [path]);
}

#[cfg(unix)]
#[test]
fn unreadable_walk_entries_are_reported_as_skipped() {
    let dir = tempdir().expect("tempdir");
    let level = dir.path().join("03_loops").join("level_4");
    fs::create_dir_all(&level).expect("mkdir");
    fs::write(level.join("ex_prime.cpp"), "// exercise\n").expect("write");
    std::os::unix::fs::symlink(level.join("gone"), level.join("ex_dangling.cpp"))
        .expect("symlink");

    let catalog = Catalog::scan(dir.path(), &CatalogConfig::default()).expect("scan");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.skipped(), [PathBuf::from("03_loops/level_4/ex_dangling.cpp")]);
}
