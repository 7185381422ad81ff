use crate::specimen::{BodyType, Diet, Period, Specimen};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub specimens: Vec<SpecimenEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub json: bool,
    pub fail_at: FailAt,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            json: false,
            fail_at: FailAt::None,
        }
    }
}

/// CI gate: exit non-zero when any assessed specimen reaches this tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailAt {
    #[default]
    None,
    High,
    Extreme,
}

impl fmt::Display for FailAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::High => write!(f, "high"),
            Self::Extreme => write!(f, "extreme"),
        }
    }
}

/// One roster row. Categorical fields stay free-form strings here; they are
/// folded into the closed vocabularies (with silent default fallback) when
/// the row is turned into a specimen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecimenEntry {
    pub name: String,
    pub length_m: f64,
    pub height_m: f64,
    pub diet: String,
    pub body_type: String,
    pub period: String,
    pub start_mya: f64,
    pub end_mya: f64,
}

impl Default for SpecimenEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            length_m: 0.0,
            height_m: 0.0,
            diet: "unknown".to_string(),
            body_type: String::new(),
            period: String::new(),
            start_mya: 0.0,
            end_mya: 0.0,
        }
    }
}

impl SpecimenEntry {
    pub fn to_specimen(&self) -> Result<Specimen> {
        Specimen::new(
            self.name.clone(),
            self.length_m,
            self.height_m,
            Diet::parse(&self.diet),
            BodyType::parse(&self.body_type),
            Period::parse(&self.period),
            self.start_mya,
            self.end_mya,
        )
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
        });
    }

    let local_path = cwd.join("paleoimpact.toml");
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
        });
    }

    Ok(LoadedConfig {
        config: Config::default(),
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&starter_config()).context("failed to serialize default config")
}

/// Default file contents for `init`: defaults plus a two-row starter roster
/// so `batch` works immediately.
fn starter_config() -> Config {
    Config {
        general: GeneralConfig::default(),
        specimens: vec![
            SpecimenEntry {
                name: "Tyrannosaurus rex".to_string(),
                length_m: 12.0,
                height_m: 4.0,
                diet: "carnivorous".to_string(),
                body_type: "large theropod".to_string(),
                period: "Late Cretaceous".to_string(),
                start_mya: 68.0,
                end_mya: 66.0,
            },
            SpecimenEntry {
                name: "Brontosaurus".to_string(),
                length_m: 21.0,
                height_m: 12.0,
                diet: "herbivorous".to_string(),
                body_type: "sauropod".to_string(),
                period: "Late Jurassic".to_string(),
                start_mya: 156.3,
                end_mya: 146.8,
            },
        ],
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_roster_config() {
        let raw = r#"
[general]
json = true
fail_at = "high"

[[specimens]]
name = "Allosaurus"
length_m = 9.7
height_m = 3.0
diet = "Carnivorous"
body_type = "large-theropod"
period = "Late Jurassic"
start_mya = 155.0
end_mya = 145.0
"#;
        let config: Config = toml::from_str(raw).expect("config parses");
        assert!(config.general.json);
        assert_eq!(config.general.fail_at, FailAt::High);
        assert_eq!(config.specimens.len(), 1);

        let specimen = config.specimens[0].to_specimen().expect("valid row");
        assert_eq!(specimen.diet, Diet::Carnivorous);
        assert_eq!(specimen.body_type, BodyType::LargeTheropod);
        assert_eq!(specimen.period, Period::LateJurassic);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");
        assert!(!config.general.json);
        assert_eq!(config.general.fail_at, FailAt::None);
        assert!(config.specimens.is_empty());
    }

    #[test]
    fn default_config_round_trips() {
        let raw = default_config_toml().expect("serializes");
        let config: Config = toml::from_str(&raw).expect("parses back");
        assert_eq!(config.specimens.len(), 2);
        assert!(config.specimens.iter().all(|row| row.to_specimen().is_ok()));
    }

    #[test]
    fn zero_length_roster_row_is_rejected_at_conversion() {
        let entry = SpecimenEntry {
            name: "fragment".to_string(),
            ..SpecimenEntry::default()
        };
        assert!(entry.to_specimen().is_err());
    }
}
