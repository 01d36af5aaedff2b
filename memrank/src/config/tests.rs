#[cfg(test)]
mod tests {
    use crate::config::{
        ConfigBuilder, ConfigError, ConfigLoader, LogFormat, LogLevel, MemrankConfig,
        user_config_dir, validation,
    };
    use crate::marshal::MalformedPolicy;
    use crate::ranking::TieBreak;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = MemrankConfig::default();
        assert_eq!(config.ranking.malformed_records, MalformedPolicy::Skip);
        assert_eq!(config.ranking.tie_break, TieBreak::InputOrder);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Default);
        assert!(config.logging.stdout);
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_strict_records()
            .with_tie_break(TieBreak::IdAscending)
            .with_log_level(LogLevel::Debug)
            .with_log_file("/tmp/memrank/test.log")
            .build()
            .unwrap();

        assert_eq!(config.ranking.malformed_records, MalformedPolicy::Strict);
        assert_eq!(config.ranking.tie_break, TieBreak::IdAscending);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/tmp/memrank/test.log"))
        );
        assert!(!config.logging.stdout);
    }

    #[test]
    fn test_validation() {
        let valid = ConfigBuilder::new().build();
        assert!(valid.is_ok());

        let config = MemrankConfig::default();
        assert!(validation::validate_config(&config).is_ok());

        let invalid = ConfigBuilder::new().with_log_file("").build();
        assert!(matches!(invalid, Err(ConfigError::ValidationError(_))));

        let invalid = ConfigBuilder::new().with_log_file("/").build();
        assert!(matches!(invalid, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_predefined_configs() {
        let dev = ConfigBuilder::development().build().unwrap();
        let test = ConfigBuilder::testing().build().unwrap();
        let prod = ConfigBuilder::production().build().unwrap();

        assert_eq!(dev.logging.level, LogLevel::Debug);
        assert_eq!(dev.logging.format, LogFormat::Pretty);

        assert_eq!(test.ranking.malformed_records, MalformedPolicy::Strict);
        assert_eq!(test.ranking.tie_break, TieBreak::IdAscending);
        assert!(!test.logging.stdout);

        assert_eq!(prod.ranking.malformed_records, MalformedPolicy::Skip);
        assert_eq!(prod.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::testing().build().unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MemrankConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
        assert!(json.contains(r#""tie_break":"id_ascending""#));
        assert!(json.contains(r#""malformed_records":"strict""#));
    }

    #[test]
    fn test_loader_defaults() {
        let config = ConfigLoader::new().extract().unwrap();
        assert_eq!(config, MemrankConfig::default());
    }

    #[test]
    fn test_loader_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memrank.toml");
        std::fs::write(
            &path,
            r#"
[ranking]
malformed_records = "strict"
tie_break = "id_ascending"

[logging]
level = "warn"
"#,
        )
        .unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        let config = loader.extract().unwrap();

        assert_eq!(config.ranking.malformed_records, MalformedPolicy::Strict);
        assert_eq!(config.ranking.tie_break, TieBreak::IdAscending);
        assert_eq!(config.logging.level, LogLevel::Warn);
        // Unset keys keep their defaults
        assert_eq!(config.logging.format, LogFormat::Default);
    }

    #[test]
    fn test_loader_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memrank.json");
        std::fs::write(&path, r#"{"ranking": {"tie_break": "id_ascending"}}"#).unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        let config = loader.extract().unwrap();

        assert_eq!(config.ranking.tie_break, TieBreak::IdAscending);
        assert_eq!(config.ranking.malformed_records, MalformedPolicy::Skip);
    }

    #[test]
    fn test_loader_rejects_missing_and_unknown_files() {
        let dir = tempfile::tempdir().unwrap();

        let mut loader = ConfigLoader::new();
        let missing = loader.load_file(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::FileLoadError(_))));

        let ini = dir.path().join("memrank.ini");
        std::fs::write(&ini, "[ranking]").unwrap();
        let unsupported = loader.load_file(&ini);
        assert!(matches!(unsupported, Err(ConfigError::FileLoadError(_))));
    }

    #[test]
    fn test_loader_invalid_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memrank.toml");
        std::fs::write(&path, "[ranking]\ntie_break = \"random\"\n").unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        assert!(matches!(loader.extract(), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_loader_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "memrank.toml",
                "[ranking]\ntie_break = \"id_ascending\"\nmalformed_records = \"skip\"\n",
            )?;
            jail.set_env("MEMRANK_RANKING__MALFORMED_RECORDS", "strict");

            let mut loader = ConfigLoader::new();
            loader.load_default_files().load_env();
            let config = loader.extract().expect("config extracts");

            assert_eq!(config.ranking.tie_break, TieBreak::IdAscending);
            assert_eq!(config.ranking.malformed_records, MalformedPolicy::Strict);
            Ok(())
        });
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_loader_user_config_dir_overrides_local_file() {
        figment::Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());
            assert_eq!(user_config_dir(), Some(xdg.join("memrank")));

            std::fs::create_dir_all(xdg.join("memrank")).expect("create user config dir");
            jail.create_file(
                "memrank.toml",
                "[ranking]\ntie_break = \"id_ascending\"\nmalformed_records = \"strict\"\n",
            )?;
            jail.create_file(
                "xdg/memrank/config.yaml",
                "ranking:\n  malformed_records: skip\nlogging:\n  level: error\n",
            )?;

            let mut loader = ConfigLoader::new();
            loader.load_default_files();
            let config = loader.extract().expect("config extracts");

            // Local file value survives where the user file is silent
            assert_eq!(config.ranking.tie_break, TieBreak::IdAscending);
            assert_eq!(config.ranking.malformed_records, MalformedPolicy::Skip);
            assert_eq!(config.logging.level, LogLevel::Error);
            Ok(())
        });
    }

    #[test]
    fn test_loader_without_any_files_keeps_defaults() {
        figment::Jail::expect_with(|jail| {
            let empty = jail.directory().join("empty");
            jail.set_env("XDG_CONFIG_HOME", empty.display());

            let mut loader = ConfigLoader::new();
            loader.load_default_files();
            assert_eq!(loader.extract().expect("config extracts"), MemrankConfig::default());
            Ok(())
        });
    }
}
