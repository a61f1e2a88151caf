use std::fs;
use std::path::PathBuf;
use tailwind_content_paths::{generate, ContentPathsError, DiscoveryArgs, GenerateArgs};
use tempfile::TempDir;

fn generate_args(project: PathBuf) -> GenerateArgs {
    GenerateArgs {
        project,
        discovery: DiscoveryArgs {
            config: None,
            deterministic_order: false,
            jobs: None,
            manifest_file_name: None,
        },
        output_file_name: None,
        minify: false,
        dry_run: false,
        verbose: false,
    }
}

fn write_project(temp_dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let project_dir = temp_dir.path().join(name);
    fs::create_dir_all(&project_dir).unwrap();
    let project_file = project_dir.join(format!("{}.csproj", name));
    fs::write(&project_file, body).unwrap();
    project_file
}

#[test]
fn test_error_message_for_missing_project() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("Nope").join("Nope.csproj");

    let result = generate(generate_args(missing));
    assert!(result.is_err());

    if let Err(e) = result {
        assert!(matches!(e, ContentPathsError::Resolution { .. }));
        let error_msg = format!("{}", e);
        assert!(error_msg.contains("Nope.csproj"),
                "Error message should contain the project path: {}", error_msg);
    }
}

#[test]
fn test_error_message_for_missing_reference() {
    let temp_dir = TempDir::new().unwrap();
    let r = write_project(
        &temp_dir,
        "R",
        r#"<Project><ItemGroup><ProjectReference Include="..\Gone\Gone.csproj" /></ItemGroup></Project>"#,
    );

    let result = generate(generate_args(r));

    match result {
        Err(ContentPathsError::Resolution { project, message }) => {
            assert!(project.ends_with("R.csproj"), "{}", project);
            assert!(message.contains("Gone.csproj"), "{}", message);
        }
        other => panic!("Expected resolution error, got {:?}", other),
    }
    assert!(!temp_dir.path().join("R").join("tailwind-all-content-paths.json").exists());
}

#[test]
fn test_error_message_for_malformed_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let r = write_project(&temp_dir, "R", "<Project />");
    fs::write(
        temp_dir.path().join("R").join("tailwind-content-paths.json"),
        r#"{ "content": ["./src/**/*.html"] }"#,
    )
    .unwrap();

    let result = generate(generate_args(r));
    assert!(result.is_err());

    if let Err(e) = result {
        let error_msg = format!("{}", e);
        assert!(matches!(e, ContentPathsError::ManifestRead { .. }));
        assert!(error_msg.contains("tailwind-content-paths.json"),
                "Error should name the manifest: {}", error_msg);
    }
}

#[test]
fn test_stale_output_survives_failed_run() {
    let temp_dir = TempDir::new().unwrap();
    let r = write_project(&temp_dir, "R", "<Project />");
    let output = temp_dir.path().join("R").join("tailwind-all-content-paths.json");
    fs::write(&output, "[\"./stale/*.html\"]").unwrap();
    fs::write(temp_dir.path().join("R").join("tailwind-content-paths.json"), "not json").unwrap();

    assert!(generate(generate_args(r)).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "[\"./stale/*.html\"]");
}

#[test]
fn test_error_for_identical_manifest_and_output_names() {
    let temp_dir = TempDir::new().unwrap();
    let r = write_project(&temp_dir, "R", "<Project />");

    let mut args = generate_args(r);
    args.output_file_name = Some("tailwind-content-paths.json".to_string());

    let result = generate(args);
    assert!(matches!(result, Err(ContentPathsError::InvalidInput(_))));
}

#[test]
fn test_error_for_unsupported_config_format() {
    let temp_dir = TempDir::new().unwrap();
    let r = write_project(&temp_dir, "R", "<Project />");
    let config = temp_dir.path().join("config.yaml");
    fs::write(&config, "deterministic_order: true").unwrap();

    let mut args = generate_args(r);
    args.discovery.config = Some(config);

    let result = generate(args);
    assert!(matches!(result, Err(ContentPathsError::Config { .. })));
}

#[test]
fn test_error_for_zero_jobs() {
    let temp_dir = TempDir::new().unwrap();
    let r = write_project(&temp_dir, "R", "<Project />");

    let mut args = generate_args(r);
    args.discovery.jobs = Some(0);

    let result = generate(args);
    assert!(matches!(result, Err(ContentPathsError::InvalidInput(_))));
}

#[cfg(unix)]
#[test]
fn test_unwritable_output_is_output_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let r = write_project(&temp_dir, "R", "<Project />");
    fs::write(temp_dir.path().join("R").join("tailwind-content-paths.json"), "[\"*.html\"]").unwrap();

    let project_dir = temp_dir.path().join("R");
    fs::set_permissions(&project_dir, fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions, so only check when the write really fails.
    let result = generate(generate_args(r));
    fs::set_permissions(&project_dir, fs::Permissions::from_mode(0o755)).unwrap();

    if let Err(e) = result {
        assert!(matches!(e, ContentPathsError::OutputWrite { .. }), "{:?}", e);
    }
}
