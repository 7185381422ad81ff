use crate::core::mass;
use crate::specimen::{BodyType, Diet, Period, Specimen};
use serde::Serialize;

/// Five-tier impact classification with the fixed display attributes the
/// report layer renders.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Minimal,
    Low,
    Moderate,
    High,
    Extreme,
}

impl Tier {
    /// Threshold bucketing over the clamped composite score. Boundaries are
    /// half-open: 20.0 is already Low, 85.0 is already Extreme.
    pub fn for_score(score: f64) -> Self {
        if score < 20.0 {
            Self::Minimal
        } else if score < 40.0 {
            Self::Low
        } else if score < 65.0 {
            Self::Moderate
        } else if score < 85.0 {
            Self::High
        } else {
            Self::Extreme
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal Impact",
            Self::Low => "Low Impact",
            Self::Moderate => "Moderate Impact",
            Self::High => "High Impact",
            Self::Extreme => "Extreme Impact",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Minimal => "\u{1f7e2}",
            Self::Low => "\u{1f7e1}",
            Self::Moderate => "\u{1f7e0}",
            Self::High => "\u{1f534}",
            Self::Extreme => "\u{1f480}",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Minimal => "#00ff88",
            Self::Low => "#ffaa00",
            Self::Moderate => "#ff6600",
            Self::High => "#ff4400",
            Self::Extreme => "#ff0000",
        }
    }
}

/// The four capped sub-indices the composite score is built from, kept for
/// the report breakdown. Caps: resource 30, habitat 25, competition 25,
/// stability 20.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Breakdown {
    pub resource: f64,
    pub habitat: f64,
    pub competition: f64,
    pub stability: f64,
}

/// Scorer output: presentation-rounded score and mass, the tier, and the
/// sub-index breakdown. Tiering happens on the unrounded score.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score: f64,
    pub tier: Tier,
    pub estimated_mass_kg: f64,
    pub breakdown: Breakdown,
}

fn diet_metabolic_factor(diet: Diet) -> f64 {
    match diet {
        Diet::Carnivorous => 2.8,
        Diet::Herbivorous => 1.0,
        Diet::Omnivorous => 1.8,
        Diet::Unknown => 1.5,
    }
}

fn niche_breadth(body_type: BodyType) -> f64 {
    match body_type {
        BodyType::Sauropod => 2.8,
        BodyType::LargeTheropod => 3.5,
        BodyType::Ceratopsian => 2.2,
        BodyType::ArmouredDinosaur => 1.8,
        BodyType::Euornithopod => 2.4,
        BodyType::SmallTheropod | BodyType::Other => 2.0,
    }
}

fn period_factor(period: Period) -> f64 {
    match period {
        Period::LateTriassic => 1.2,
        Period::EarlyJurassic => 1.1,
        Period::MidJurassic => 1.0,
        Period::LateJurassic => 0.9,
        Period::EarlyCretaceous => 0.95,
        Period::LateCretaceous => 0.85,
        Period::Other => 1.0,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Composite ecological impact of one specimen. Pure and total: every
/// well-formed specimen scores, and identical inputs produce identical
/// output bits.
pub fn score(specimen: &Specimen) -> Assessment {
    let mass_kg =
        mass::estimate_mass_kg(specimen.length_m, specimen.height_m, specimen.body_type);

    // Kleiber's law baseline scaled by diet energetics.
    let metabolic_demand = mass_kg.powf(0.75) * diet_metabolic_factor(specimen.diet);

    // Home range and competition pressure split three ways by trophic role.
    let (home_range_factor, competition_intensity) = match specimen.diet {
        Diet::Carnivorous => (mass_kg.powf(0.75) * 0.02, 3.5),
        Diet::Herbivorous => (mass_kg.powf(0.65) * 0.008, 1.8),
        Diet::Omnivorous | Diet::Unknown => (mass_kg.powf(0.7) * 0.015, 2.5),
    };

    // Individuals per 100 km^2 the ecosystem supports, bucketed by mass class.
    let capacity_numerator = if mass_kg > 20_000.0 {
        2000.0
    } else if mass_kg > 10_000.0 {
        3000.0
    } else if mass_kg > 5_000.0 {
        4000.0
    } else if mass_kg > 1_000.0 {
        5000.0
    } else {
        6000.0
    };
    let carrying_capacity = capacity_numerator / mass_kg.powf(0.6);

    let niche = niche_breadth(specimen.body_type);
    let context = period_factor(specimen.period);

    let resource = (metabolic_demand / 10_000.0 * context).min(30.0);
    let habitat = (home_range_factor / 1000.0 * niche).min(25.0);
    let competition = (competition_intensity * (1.0 / carrying_capacity) * 1000.0).min(25.0);
    let stability = (niche * 5.0 + context * 10.0).min(20.0);

    let composite = ((resource + habitat + competition + stability) * 1.2).clamp(5.0, 100.0);
    let tier = Tier::for_score(composite);

    Assessment {
        score: round1(composite),
        tier,
        estimated_mass_kg: mass_kg.round(),
        breakdown: Breakdown {
            resource: round1(resource),
            habitat: round1(habitat),
            competition: round1(competition),
            stability: round1(stability),
        },
    }
}
