// Configuration loading and parsing (generator.toml).

use std::path::{Path, PathBuf};

use prospect_core::config::{AgeChoice, GenerationConfig, OriginMode, SizeChoice, MAX_QUANTITY};
use prospect_core::data::ReferenceData;
use prospect_core::sport::{ParseError, Position, Sport};
use serde::Deserialize;
use thiserror::Error;

/// Name of the single config file under `config/` (and `defaults/`).
pub const CONFIG_FILE: &str = "generator.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },

    #[error("failed to load reference data from {path}: {message}")]
    ReferenceData { path: PathBuf, message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub defaults: GenerationDefaults,
    pub db_path: String,
    /// Replacement reference tables, resolved against the base directory.
    pub reference_path: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// generator.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct GeneratorFile {
    #[serde(default)]
    defaults: GenerationDefaults,
    storage: StorageSection,
    #[serde(default)]
    data: DataSection,
}

#[derive(Debug, Clone, Deserialize)]
struct StorageSection {
    db_path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataSection {
    reference_path: Option<String>,
}

/// Generation settings as written in the `[defaults]` table. Strings stay
/// raw here; `to_generation_config` parses them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    pub sport: String,
    pub lock_sport: bool,
    pub position: String,
    pub lock_position: bool,
    pub quantity: usize,
    pub draft_class: bool,
    pub origin: String,
    pub college: String,
    pub country: String,
    pub lock_origin: bool,
    pub age: Option<i32>,
    pub lock_age: bool,
    pub height_feet: Option<i32>,
    pub height_inches: Option<i32>,
    pub weight_pounds: Option<i32>,
    pub lock_size: bool,
    pub number: String,
    pub lock_number: bool,
    pub seed: String,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            sport: Sport::AmericanFootball.code().to_string(),
            lock_sport: false,
            position: String::new(),
            lock_position: false,
            quantity: 10,
            draft_class: false,
            origin: "random".into(),
            college: "Alabama".into(),
            country: "United States".into(),
            lock_origin: false,
            age: None,
            lock_age: false,
            height_feet: None,
            height_inches: None,
            weight_pounds: None,
            lock_size: false,
            number: String::new(),
            lock_number: false,
            seed: String::new(),
        }
    }
}

impl GenerationDefaults {
    /// Parse the raw settings into an engine config. Quantity and manual
    /// values are passed through as-is; the engine clamps them.
    pub fn to_generation_config(&self) -> Result<GenerationConfig, ParseError> {
        let sport: Sport = self.sport.parse()?;
        let position = match self.position.trim() {
            "" => None,
            code => Some(code.parse::<Position>()?),
        };
        let origin = OriginMode::from_parts(&self.origin, &self.college, &self.country)?;
        let age = self.age.map_or(AgeChoice::Random, AgeChoice::Manual);
        let size = match (self.height_feet, self.weight_pounds) {
            (Some(feet), Some(weight_pounds)) => SizeChoice::Manual {
                feet,
                inches: self.height_inches.unwrap_or(0),
                weight_pounds,
            },
            _ => SizeChoice::Random,
        };

        Ok(GenerationConfig {
            sport,
            lock_sport: self.lock_sport,
            position,
            lock_position: self.lock_position,
            quantity: self.quantity,
            draft_class: self.draft_class,
            age,
            lock_age: self.lock_age,
            manual_number: non_blank(&self.number),
            lock_number: self.lock_number,
            origin,
            lock_origin: self.lock_origin,
            size,
            lock_size: self.lock_size,
            seed: non_blank(&self.seed),
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/generator.toml` relative to `base_dir`.
///
/// Does not copy defaults; see `load_config_in`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let file: GeneratorFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        defaults: file.defaults,
        db_path: file.storage.db_path,
        reference_path: file
            .data
            .reference_path
            .filter(|p| !p.trim().is_empty())
            .map(|p| base_dir.join(p)),
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or pass --base-dir",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Copy missing defaults into `base_dir/config`, then load.
pub fn load_config_in(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_files(base_dir)?;
    load_config_from(base_dir)
}

/// The built-in tables, or the JSON replacement named by `data.reference_path`.
pub fn load_reference_data(config: &Config) -> Result<ReferenceData, ConfigError> {
    let Some(path) = &config.reference_path else {
        return Ok(ReferenceData::builtin());
    };
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReferenceData {
        path: path.clone(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| ConfigError::ReferenceData {
        path: path.clone(),
        message: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.db_path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "storage.db_path".into(),
            message: "must not be empty".into(),
        });
    }
    validate_defaults(&config.defaults)
}

/// Field-level checks on generation settings, shared by the file loader and
/// command-line overrides.
pub fn validate_defaults(d: &GenerationDefaults) -> Result<(), ConfigError> {
    if !(1..=MAX_QUANTITY).contains(&d.quantity) {
        return Err(ConfigError::ValidationError {
            field: "defaults.quantity".into(),
            message: format!("must be between 1 and {MAX_QUANTITY}, got {}", d.quantity),
        });
    }

    if let Err(e) = d.sport.parse::<Sport>() {
        return Err(invalid("defaults.sport", e));
    }

    if !d.position.trim().is_empty() {
        if let Err(e) = d.position.parse::<Position>() {
            return Err(invalid("defaults.position", e));
        }
    }

    if let Err(e) = OriginMode::from_parts(&d.origin, &d.college, &d.country) {
        return Err(invalid("defaults.origin", e));
    }

    match (d.height_feet, d.weight_pounds) {
        (Some(_), None) => {
            return Err(ConfigError::ValidationError {
                field: "defaults.weight_pounds".into(),
                message: "required when height_feet is set".into(),
            });
        }
        (None, Some(_)) => {
            return Err(ConfigError::ValidationError {
                field: "defaults.height_feet".into(),
                message: "required when weight_pounds is set".into(),
            });
        }
        _ => {}
    }

    Ok(())
}

fn invalid(field: &str, e: ParseError) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: e.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Helper: the prospect-cli crate root, which holds `defaults/`.
    fn crate_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    /// Helper: a fresh temp dir with `config/generator.toml` holding `toml`.
    fn temp_with_config(name: &str, toml: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        fs::write(tmp.join("config").join(CONFIG_FILE), toml).unwrap();
        tmp
    }

    fn default_toml() -> String {
        fs::read_to_string(crate_root().join("defaults").join(CONFIG_FILE)).unwrap()
    }

    #[test]
    fn shipped_defaults_load_and_validate() {
        let tmp = temp_with_config("prospect_config_shipped", &default_toml());
        let config = load_config_from(&tmp).expect("shipped defaults should load");

        assert_eq!(config.db_path, "prospect.db");
        assert!(config.reference_path.is_none());
        assert_eq!(config.defaults.sport, "american_football");
        assert_eq!(config.defaults.quantity, 10);
        assert_eq!(config.defaults.origin, "random");

        let gen = config.defaults.to_generation_config().unwrap();
        assert_eq!(gen.sport, Sport::AmericanFootball);
        assert_eq!(gen.position, None);
        assert_eq!(gen.origin, OriginMode::Random);
        assert_eq!(gen.age, AgeChoice::Random);
        assert_eq!(gen.size, SizeChoice::Random);
        assert_eq!(gen.manual_number, None);
        assert_eq!(gen.seed, None);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn manual_values_become_manual_choices() {
        let toml = r#"
[defaults]
sport = "basketball"
position = "g/f"
age = 27
height_feet = 6
height_inches = 7
weight_pounds = 215
number = " 23 "
seed = "abc123"
origin = "country"
country = "Serbia"

[storage]
db_path = "x.db"
"#;
        let tmp = temp_with_config("prospect_config_manual", toml);
        let config = load_config_from(&tmp).unwrap();
        let gen = config.defaults.to_generation_config().unwrap();

        assert_eq!(gen.sport, Sport::Basketball);
        assert_eq!(gen.position, Some(Position::GuardForward));
        assert_eq!(gen.age, AgeChoice::Manual(27));
        assert_eq!(
            gen.size,
            SizeChoice::Manual {
                feet: 6,
                inches: 7,
                weight_pounds: 215
            }
        );
        assert_eq!(gen.manual_number.as_deref(), Some("23"));
        assert_eq!(gen.seed.as_deref(), Some("abc123"));
        assert_eq!(gen.origin, OriginMode::Country("Serbia".into()));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_defaults_table_uses_builtin_defaults() {
        let tmp = temp_with_config("prospect_config_no_defaults", "[storage]\ndb_path = \"a.db\"\n");
        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.defaults, GenerationDefaults::default());
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn reference_path_is_resolved_against_base_dir() {
        let toml = "[storage]\ndb_path = \"a.db\"\n\n[data]\nreference_path = \"data/ref.json\"\n";
        let tmp = temp_with_config("prospect_config_ref_path", toml);
        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.reference_path, Some(tmp.join("data/ref.json")));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_db_path() {
        let tmp = temp_with_config("prospect_config_empty_db", "[storage]\ndb_path = \"  \"\n");
        match load_config_from(&tmp).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "storage.db_path"),
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_quantity_out_of_range() {
        for (name, quantity) in [("prospect_config_qty_zero", 0), ("prospect_config_qty_big", 201)] {
            let toml = format!("[defaults]\nquantity = {quantity}\n\n[storage]\ndb_path = \"a.db\"\n");
            let tmp = temp_with_config(name, &toml);
            match load_config_from(&tmp).unwrap_err() {
                ConfigError::ValidationError { field, .. } => assert_eq!(field, "defaults.quantity"),
                other => panic!("expected ValidationError, got: {other}"),
            }
            let _ = fs::remove_dir_all(&tmp);
        }
    }

    #[test]
    fn rejects_unknown_strings() {
        let cases = [
            ("prospect_config_bad_sport", "sport = \"cricket\"", "defaults.sport"),
            ("prospect_config_bad_pos", "position = \"XX\"", "defaults.position"),
            ("prospect_config_bad_origin", "origin = \"moon\"", "defaults.origin"),
        ];
        for (name, line, expected) in cases {
            let toml = format!("[defaults]\n{line}\n\n[storage]\ndb_path = \"a.db\"\n");
            let tmp = temp_with_config(name, &toml);
            match load_config_from(&tmp).unwrap_err() {
                ConfigError::ValidationError { field, .. } => assert_eq!(field, expected),
                other => panic!("expected ValidationError, got: {other}"),
            }
            let _ = fs::remove_dir_all(&tmp);
        }
    }

    #[test]
    fn rejects_half_specified_size() {
        let toml = "[defaults]\nheight_feet = 6\n\n[storage]\ndb_path = \"a.db\"\n";
        let tmp = temp_with_config("prospect_config_half_size", toml);
        match load_config_from(&tmp).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "defaults.weight_pounds"),
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_config() {
        let tmp = std::env::temp_dir().join("prospect_config_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        match load_config_from(&tmp).unwrap_err() {
            ConfigError::FileNotFound { path } => assert!(path.ends_with(CONFIG_FILE)),
            other => panic!("expected FileNotFound, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = temp_with_config("prospect_config_bad_toml", "[storage\ndb_path = ");
        assert!(matches!(
            load_config_from(&tmp).unwrap_err(),
            ConfigError::ParseError { .. }
        ));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_copies_and_skips() {
        let tmp = std::env::temp_dir().join("prospect_config_ensure");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::write(defaults_dir.join(CONFIG_FILE), default_toml()).unwrap();
        fs::write(defaults_dir.join("notes.toml.example"), "# example\n").unwrap();

        let copied = ensure_config_files(&tmp).unwrap();
        assert_eq!(copied.len(), 1);
        assert!(copied[0].ends_with(CONFIG_FILE));
        assert!(!tmp.join("config/notes.toml.example").exists());

        // Second run leaves the edited copy alone.
        fs::write(tmp.join("config").join(CONFIG_FILE), "# custom\n").unwrap();
        assert!(ensure_config_files(&tmp).unwrap().is_empty());
        assert_eq!(
            fs::read_to_string(tmp.join("config").join(CONFIG_FILE)).unwrap(),
            "# custom\n"
        );

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_errors_when_both_dirs_missing() {
        let tmp = std::env::temp_dir().join("prospect_config_both_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        match ensure_config_files(&tmp).unwrap_err() {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("neither defaults/ nor config/"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn reference_data_loads_from_json() {
        let tmp = std::env::temp_dir().join("prospect_config_ref_json");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let mut data = ReferenceData::builtin();
        data.colleges = vec!["Only U".into()];
        let path = tmp.join("ref.json");
        fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

        let config = Config {
            defaults: GenerationDefaults::default(),
            db_path: "a.db".into(),
            reference_path: Some(path),
        };
        let loaded = load_reference_data(&config).unwrap();
        assert_eq!(loaded.colleges, vec!["Only U".to_string()]);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn reference_data_errors_are_typed() {
        let config = Config {
            defaults: GenerationDefaults::default(),
            db_path: "a.db".into(),
            reference_path: Some(std::env::temp_dir().join("prospect_no_such_ref.json")),
        };
        assert!(matches!(
            load_reference_data(&config),
            Err(ConfigError::ReferenceData { .. })
        ));
    }
}
