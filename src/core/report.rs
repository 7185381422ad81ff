use crate::config::{Config, FailAt};
use crate::core::impact::{Assessment, Breakdown, Tier};
use crate::specimen::Specimen;
use colored::Colorize;
use serde::Serialize;

impl Tier {
    pub fn meets_fail_at(self, fail_at: FailAt) -> bool {
        match fail_at {
            FailAt::None => false,
            FailAt::High => matches!(self, Self::High | Self::Extreme),
            FailAt::Extreme => matches!(self, Self::Extreme),
        }
    }

    /// Terminal rendering of the tier label in its fixed display color.
    fn colored(self) -> String {
        let (r, g, b) = match self {
            Self::Minimal => (0, 255, 136),
            Self::Low => (255, 170, 0),
            Self::Moderate => (255, 102, 0),
            Self::High => (255, 68, 0),
            Self::Extreme => (255, 0, 0),
        };
        self.label().truecolor(r, g, b).bold().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ScoredSpecimen {
    pub specimen: Specimen,
    pub assessment: Assessment,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Counts {
    pub minimal: usize,
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
    pub extreme: usize,
    pub total: usize,
}

impl Counts {
    pub fn from_results(results: &[ScoredSpecimen]) -> Self {
        let mut counts = Self::default();
        for result in results {
            match result.assessment.tier {
                Tier::Minimal => counts.minimal += 1,
                Tier::Low => counts.low += 1,
                Tier::Moderate => counts.moderate += 1,
                Tier::High => counts.high += 1,
                Tier::Extreme => counts.extreme += 1,
            }
        }
        counts.total = results.len();
        counts
    }
}

/// Head-to-head outcome for `compare`.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub winner: String,
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub fail_at: FailAt,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub results: Vec<ScoredSpecimen>,
    pub verdict: Option<Verdict>,
    pub counts: Counts,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

/// JSON result object. The `score`/`category`/`emoji`/`color`/
/// `estimated_mass` fields are the stable output contract; the input echo
/// and breakdown ride along for tooling.
#[derive(Debug, Clone, Serialize)]
pub struct JsonResult {
    pub name: String,
    pub length_m: f64,
    pub height_m: f64,
    pub diet: &'static str,
    pub body_type: &'static str,
    pub period: &'static str,
    pub start_mya: f64,
    pub end_mya: f64,
    pub score: f64,
    pub category: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub estimated_mass: f64,
    pub breakdown: Breakdown,
}

impl From<&ScoredSpecimen> for JsonResult {
    fn from(result: &ScoredSpecimen) -> Self {
        let specimen = &result.specimen;
        let assessment = &result.assessment;
        Self {
            name: specimen.name.clone(),
            length_m: specimen.length_m,
            height_m: specimen.height_m,
            diet: specimen.diet.as_str(),
            body_type: specimen.body_type.as_str(),
            period: specimen.period.as_str(),
            start_mya: specimen.start_mya,
            end_mya: specimen.end_mya,
            score: assessment.score,
            category: assessment.tier.label(),
            emoji: assessment.tier.emoji(),
            color: assessment.tier.color(),
            estimated_mass: assessment.estimated_mass_kg,
            breakdown: assessment.breakdown,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub results: Vec<JsonResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    pub counts: Counts,
    pub config: ConfigSummary,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            results: report.results.iter().map(JsonResult::from).collect(),
            winner: report
                .verdict
                .as_ref()
                .map(|verdict| verdict.winner.clone()),
            counts: report.counts.clone(),
            config: report.config.clone(),
        }
    }
}

pub fn evaluate_exit(results: &[ScoredSpecimen], cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if cfg.general.fail_at != FailAt::None {
        let offenders: Vec<&str> = results
            .iter()
            .filter(|result| result.assessment.tier.meets_fail_at(cfg.general.fail_at))
            .map(|result| result.specimen.name.as_str())
            .collect();

        if !offenders.is_empty() {
            reasons.push(format!(
                "{} specimen(s) reached the '{}' impact gate: {}",
                offenders.len(),
                cfg.general.fail_at,
                offenders.join(", ")
            ));
        }
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(report: &FinalReport) {
    for result in &report.results {
        let specimen = &result.specimen;
        let assessment = &result.assessment;

        println!(
            "{} ({} {}, {})",
            specimen.name.bold(),
            specimen.diet,
            specimen.body_type,
            specimen.period
        );
        println!(
            "  estimated mass: {:.0} kg",
            assessment.estimated_mass_kg
        );
        println!(
            "  impact: {:.1}/100 {} {}",
            assessment.score,
            assessment.tier.colored(),
            assessment.tier.emoji()
        );
        println!(
            "  breakdown: resource {:.1} | habitat {:.1} | competition {:.1} | stability {:.1}",
            assessment.breakdown.resource,
            assessment.breakdown.habitat,
            assessment.breakdown.competition,
            assessment.breakdown.stability
        );
        println!();
    }

    if let Some(verdict) = &report.verdict {
        println!("winner: {}", verdict.winner.bold());
        println!();
    }

    if report.counts.total > 1 {
        println!(
            "assessed {} specimens: {} minimal, {} low, {} moderate, {} high, {} extreme",
            report.counts.total,
            report.counts.minimal,
            report.counts.low,
            report.counts.moderate,
            report.counts.high,
            report.counts.extreme
        );
    }

    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

pub fn print_catalog() {
    for entry in crate::catalog::entries() {
        println!(
            "{} ({} {}, {}, {:.1} m / {:.1} m)",
            entry.name.bold(),
            entry.diet,
            entry.body_type,
            entry.period,
            entry.length_m,
            entry.height_m
        );
        println!("  {}", entry.blurb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;
    use crate::core::impact;
    use crate::specimen::{BodyType, Diet, Period, Specimen};

    fn scored(name: &str, length_m: f64) -> ScoredSpecimen {
        let specimen = Specimen::new(
            name,
            length_m,
            4.0,
            Diet::Carnivorous,
            BodyType::LargeTheropod,
            Period::LateCretaceous,
            0.0,
            0.0,
        )
        .expect("valid test specimen");
        let assessment = impact::score(&specimen);
        ScoredSpecimen {
            specimen,
            assessment,
        }
    }

    #[test]
    fn counts_bucket_by_tier() {
        let results = vec![scored("a", 2.0), scored("b", 12.0)];
        let counts = Counts::from_results(&results);
        assert_eq!(counts.total, 2);
        assert_eq!(
            counts.minimal + counts.low + counts.moderate + counts.high + counts.extreme,
            2
        );
    }

    #[test]
    fn exit_gate_only_fires_at_or_above_the_configured_tier() {
        let results = vec![scored("rex", 12.0)]; // scores Moderate
        let mut cfg = Config {
            general: GeneralConfig {
                json: false,
                fail_at: FailAt::High,
            },
            specimens: Vec::new(),
        };

        assert!(evaluate_exit(&results, &cfg).ok);

        cfg.general.fail_at = FailAt::None;
        assert!(evaluate_exit(&results, &cfg).ok);
    }

    #[test]
    fn tier_gate_matrix() {
        assert!(!Tier::Moderate.meets_fail_at(FailAt::High));
        assert!(Tier::High.meets_fail_at(FailAt::High));
        assert!(Tier::Extreme.meets_fail_at(FailAt::High));
        assert!(!Tier::High.meets_fail_at(FailAt::Extreme));
        assert!(Tier::Extreme.meets_fail_at(FailAt::Extreme));
        assert!(!Tier::Extreme.meets_fail_at(FailAt::None));
    }

    #[test]
    fn json_result_carries_the_output_contract_fields() {
        let result = scored("rex", 12.0);
        let json = JsonResult::from(&result);
        assert_eq!(json.category, result.assessment.tier.label());
        assert_eq!(json.color, result.assessment.tier.color());
        assert_eq!(json.estimated_mass, result.assessment.estimated_mass_kg);

        let value = serde_json::to_value(&json).expect("serializes");
        for field in [
            "score",
            "category",
            "emoji",
            "color",
            "estimated_mass",
            "breakdown",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
