use anyhow::{Result, bail};
use std::fmt;

/// Categorical axes all share the same lookup discipline: free-form input
/// strings are folded (case, separators) and matched against a small closed
/// vocabulary, and anything unrecognized silently lands in the default
/// bucket. The scorer stays total over its input domain that way.
fn fold(raw: &str) -> String {
    raw.to_ascii_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Diet {
    Carnivorous,
    Herbivorous,
    Omnivorous,
    #[default]
    Unknown,
}

impl Diet {
    pub fn parse(raw: &str) -> Self {
        match fold(raw).as_str() {
            "carnivorous" => Self::Carnivorous,
            "herbivorous" => Self::Herbivorous,
            "omnivorous" => Self::Omnivorous,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Carnivorous => "carnivorous",
            Self::Herbivorous => "herbivorous",
            Self::Omnivorous => "omnivorous",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BodyType {
    Sauropod,
    LargeTheropod,
    SmallTheropod,
    Ceratopsian,
    ArmouredDinosaur,
    Euornithopod,
    #[default]
    Other,
}

impl BodyType {
    pub fn parse(raw: &str) -> Self {
        match fold(raw).as_str() {
            "sauropod" => Self::Sauropod,
            "large theropod" => Self::LargeTheropod,
            "small theropod" => Self::SmallTheropod,
            "ceratopsian" => Self::Ceratopsian,
            "armoured dinosaur" | "armored dinosaur" => Self::ArmouredDinosaur,
            "euornithopod" => Self::Euornithopod,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sauropod => "sauropod",
            Self::LargeTheropod => "large theropod",
            Self::SmallTheropod => "small theropod",
            Self::Ceratopsian => "ceratopsian",
            Self::ArmouredDinosaur => "armoured dinosaur",
            Self::Euornithopod => "euornithopod",
            Self::Other => "unclassified",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    LateTriassic,
    EarlyJurassic,
    MidJurassic,
    LateJurassic,
    EarlyCretaceous,
    LateCretaceous,
    #[default]
    Other,
}

impl Period {
    pub fn parse(raw: &str) -> Self {
        match fold(raw).as_str() {
            "late triassic" => Self::LateTriassic,
            "early jurassic" => Self::EarlyJurassic,
            "mid jurassic" | "middle jurassic" => Self::MidJurassic,
            "late jurassic" => Self::LateJurassic,
            "early cretaceous" => Self::EarlyCretaceous,
            "late cretaceous" => Self::LateCretaceous,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LateTriassic => "Late Triassic",
            Self::EarlyJurassic => "Early Jurassic",
            Self::MidJurassic => "Mid Jurassic",
            Self::LateJurassic => "Late Jurassic",
            Self::EarlyCretaceous => "Early Cretaceous",
            Self::LateCretaceous => "Late Cretaceous",
            Self::Other => "unspecified",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dinosaur as the scorer sees it. Timing fields are carried through to
/// the report but do not participate in the math.
#[derive(Debug, Clone, PartialEq)]
pub struct Specimen {
    pub name: String,
    pub length_m: f64,
    pub height_m: f64,
    pub diet: Diet,
    pub body_type: BodyType,
    pub period: Period,
    pub start_mya: f64,
    pub end_mya: f64,
}

impl Specimen {
    /// Validating constructor. Morphology must be finite and positive; the
    /// scorer itself assumes this and never checks again.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        length_m: f64,
        height_m: f64,
        diet: Diet,
        body_type: BodyType,
        period: Period,
        start_mya: f64,
        end_mya: f64,
    ) -> Result<Self> {
        let name = name.into();
        if !length_m.is_finite() || length_m <= 0.0 {
            bail!("specimen {:?}: length must be a positive number of meters", name);
        }
        if !height_m.is_finite() || height_m <= 0.0 {
            bail!("specimen {:?}: height must be a positive number of meters", name);
        }

        Ok(Self {
            name,
            length_m,
            height_m,
            diet,
            body_type,
            period,
            start_mya,
            end_mya,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categoricals_case_and_separator_insensitively() {
        assert_eq!(Diet::parse("Carnivorous"), Diet::Carnivorous);
        assert_eq!(BodyType::parse("large theropod"), BodyType::LargeTheropod);
        assert_eq!(BodyType::parse("Large-Theropod"), BodyType::LargeTheropod);
        assert_eq!(BodyType::parse("armored_dinosaur"), BodyType::ArmouredDinosaur);
        assert_eq!(Period::parse("late  cretaceous"), Period::LateCretaceous);
        assert_eq!(Period::parse("Middle Jurassic"), Period::MidJurassic);
    }

    #[test]
    fn unrecognized_values_fall_back_silently() {
        assert_eq!(Diet::parse("piscivorous"), Diet::Unknown);
        assert_eq!(BodyType::parse("pterosaur"), BodyType::Other);
        assert_eq!(Period::parse("Permian"), Period::Other);
        assert_eq!(Period::parse(""), Period::Other);
    }

    #[test]
    fn rejects_non_positive_morphology() {
        let bad_length = Specimen::new(
            "x",
            0.0,
            1.0,
            Diet::Unknown,
            BodyType::Other,
            Period::Other,
            0.0,
            0.0,
        );
        assert!(bad_length.is_err());

        let bad_height = Specimen::new(
            "x",
            1.0,
            f64::NAN,
            Diet::Unknown,
            BodyType::Other,
            Period::Other,
            0.0,
            0.0,
        );
        assert!(bad_height.is_err());
    }
}
