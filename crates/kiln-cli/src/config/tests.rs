#[cfg(test)]
mod tests {
    use crate::cli::{BuildOptions, DependencyArg, TargetArg};
    use crate::config::*;
    use crate::error::{CliError, ConfigError};
    use serial_test::serial;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn valid() -> KilnConfig {
        KilnConfig {
            sources: vec![PathBuf::from("main.cpp")],
            ..KilnConfig::default_config()
        }
    }

    fn write_config(dir: &std::path::Path, json: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_serialization() {
        let config = KilnConfig {
            dependencies: vec![DependencyName::Graphics],
            opt_level: Some("2".to_string()),
            out_dir: Some(PathBuf::from("build")),
            ..valid()
        };

        let json_val = serde_json::to_value(&config).unwrap();
        assert!(json_val.get("optLevel").is_some());
        assert!(json_val.get("outDir").is_some());
        assert!(json_val.get("opt_level").is_none());
        assert!(json_val.get("configFile").is_none());
        assert_eq!(json_val["target"], "native");
        assert_eq!(json_val["dependencies"][0], "graphics");

        // skip_serializing_if
        let minimal = serde_json::to_value(KilnConfig::default_config()).unwrap();
        assert!(minimal.get("dependencies").is_none());
        assert!(minimal.get("depsDir").is_none());
        assert_eq!(minimal["port"], 8000);
    }

    #[test]
    fn test_deserialize_aliases_and_defaults() {
        let config: KilnConfig =
            serde_json::from_str(r#"{ "sources": ["a.cpp"], "dependencies": ["opengl", "asio"] }"#)
                .unwrap();
        assert_eq!(
            config.dependencies,
            vec![DependencyName::Graphics, DependencyName::Networking]
        );
        assert_eq!(config.port, 8000);
        assert_eq!(config.target, BuildTarget::Native);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<KilnConfig>(r#"{ "sources": [], "entry": "x" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        assert!(valid().validate().is_ok());

        // Empty sources fail
        let err = KilnConfig::default_config().validate().unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::MissingField { ref field, .. }) if field == "sources"
        ));

        // Port 0 fails
        assert!(KilnConfig { port: 0, ..valid() }.validate().is_err());

        // Unknown optimization level fails
        assert!(KilnConfig {
            opt_level: Some("fast".to_string()),
            ..valid()
        }
        .validate()
        .is_err());

        // Malformed define fails
        assert!(KilnConfig {
            defines: vec!["BAD NAME".to_string()],
            ..valid()
        }
        .validate()
        .is_err());

        // Networking in the browser fails
        assert!(KilnConfig {
            target: BuildTarget::Browser,
            dependencies: vec![DependencyName::Networking],
            ..valid()
        }
        .validate()
        .is_err());

        // Graphics in the browser is fine
        assert!(KilnConfig {
            target: BuildTarget::Browser,
            dependencies: vec![DependencyName::Graphics],
            ..valid()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(BuildTarget::from(TargetArg::Browser), BuildTarget::Browser);
        assert_eq!(
            DependencyName::from(DependencyArg::Networking),
            DependencyName::Networking
        );
        assert_eq!(
            kiln_core::Target::from(BuildTarget::Browser),
            kiln_core::Target::Browser
        );
        assert_eq!(
            kiln_core::Dependency::from(DependencyName::Graphics),
            kiln_core::Dependency::Graphics
        );
    }

    #[test]
    fn test_json_schema() {
        let schema = KilnConfig::json_schema();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("sources"));
        assert!(properties.contains_key("optLevel"));
        assert!(!properties.contains_key("configFile"));
    }

    #[test]
    fn test_example_config_is_valid() {
        let example = KilnConfig::example_config().unwrap();
        let parsed: KilnConfig = serde_json::from_str(&example).unwrap();
        assert!(parsed.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let args = BuildOptions {
            sources: vec![PathBuf::from("main.cpp")],
            ..BuildOptions::default()
        };

        let config = KilnConfig::load(&args, temp.path()).unwrap();
        assert_eq!(config.sources, vec![PathBuf::from("main.cpp")]);
        assert_eq!(config.port, 8000);
        assert!(config.config_file.is_none());
    }

    #[test]
    #[serial]
    fn test_load_resolves_file_paths_against_file() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("game");
        fs::create_dir(&project).unwrap();
        let file = write_config(
            &project,
            r#"{
                "sources": ["src/main.cpp"],
                "target": "browser",
                "dependencies": ["graphics"],
                "outDir": "build",
                "port": 9100
            }"#,
        );

        let args = BuildOptions {
            config: Some(PathBuf::from("game/kiln.config.json")),
            ..BuildOptions::default()
        };
        let config = KilnConfig::load(&args, temp.path()).unwrap();

        assert_eq!(config.sources, vec![project.join("src/main.cpp")]);
        assert_eq!(config.out_dir, Some(project.join("build")));
        assert_eq!(config.target, BuildTarget::Browser);
        assert_eq!(config.dependencies, vec![DependencyName::Graphics]);
        assert_eq!(config.port, 9100);
        assert_eq!(config.config_file, Some(file));
    }

    #[test]
    #[serial]
    fn test_cli_overrides_file() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            r#"{ "sources": ["file.cpp"], "target": "browser", "debug": true, "port": 9100 }"#,
        );

        let args = BuildOptions {
            sources: vec![PathBuf::from("cli.cpp")],
            target: Some(TargetArg::Native),
            port: Some(9200),
            ..BuildOptions::default()
        };
        let config = KilnConfig::load(&args, temp.path()).unwrap();

        // CLI paths stay relative to the working directory
        assert_eq!(config.sources, vec![PathBuf::from("cli.cpp")]);
        assert_eq!(config.target, BuildTarget::Native);
        assert_eq!(config.port, 9200);
        // Unset flags keep the file value
        assert!(config.debug);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{ "sources": ["main.cpp"], "port": 9100 }"#);

        unsafe {
            std::env::set_var("KILN_PORT", "9300");
            std::env::set_var("KILN_TARGET", "browser");
        }
        let result = KilnConfig::load(&BuildOptions::default(), temp.path());
        unsafe {
            std::env::remove_var("KILN_PORT");
            std::env::remove_var("KILN_TARGET");
        }

        let config = result.unwrap();
        assert_eq!(config.port, 9300);
        assert_eq!(config.target, BuildTarget::Browser);
    }

    #[test]
    #[serial]
    fn test_env_out_dir_overrides_file_out_dir() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            r#"{ "sources": ["main.cpp"], "outDir": "build", "depsDir": "vendor" }"#,
        );

        unsafe {
            std::env::set_var("KILN_OUT_DIR", "/from-env");
        }
        let result = KilnConfig::load(&BuildOptions::default(), temp.path());
        unsafe {
            std::env::remove_var("KILN_OUT_DIR");
        }

        let config = result.unwrap();
        assert_eq!(config.out_dir, Some(PathBuf::from("/from-env")));
        // Untouched by the environment, still relative to the file
        assert_eq!(config.deps_dir, Some(temp.path().join("vendor")));
    }

    #[test]
    #[serial]
    fn test_cli_out_dir_overrides_env_out_dir() {
        let temp = TempDir::new().unwrap();
        let args = BuildOptions {
            sources: vec![PathBuf::from("main.cpp")],
            out_dir: Some(PathBuf::from("/from-cli")),
            ..BuildOptions::default()
        };

        unsafe {
            std::env::set_var("KILN_OUT_DIR", "/from-env");
            std::env::set_var("KILN_DEPS_DIR", "/deps-from-env");
        }
        let result = KilnConfig::load(&args, temp.path());
        unsafe {
            std::env::remove_var("KILN_OUT_DIR");
            std::env::remove_var("KILN_DEPS_DIR");
        }

        let config = result.unwrap();
        assert_eq!(config.out_dir, Some(PathBuf::from("/from-cli")));
        assert_eq!(config.deps_dir, Some(PathBuf::from("/deps-from-env")));
    }

    #[test]
    fn test_snake_case_keys_rejected_in_file() {
        let result =
            serde_json::from_str::<KilnConfig>(r#"{ "sources": ["a.cpp"], "out_dir": "build" }"#);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_missing_explicit_config() {
        let temp = TempDir::new().unwrap();
        let args = BuildOptions {
            config: Some(PathBuf::from("nope.json")),
            ..BuildOptions::default()
        };

        let err = KilnConfig::load(&args, temp.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::NotFound(_))));
    }

    #[test]
    #[serial]
    fn test_invalid_field_type() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{ "sources": ["main.cpp"], "port": "eighty" }"#);

        let err = KilnConfig::load(&BuildOptions::default(), temp.path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "port"
        ));
    }
}
