pub mod impact;
pub mod mass;
pub mod report;

use crate::catalog;
use crate::cli::ScoreArgs;
use crate::config::Config;
use crate::core::report::{ConfigSummary, Counts, FinalReport, ScoredSpecimen, Verdict};
use crate::specimen::{BodyType, Diet, Period, Specimen};
use anyhow::{Result, bail};

pub fn assess_one(specimen: Specimen, cfg: &Config) -> FinalReport {
    let results = vec![scored(specimen)];
    build_report(results, None, cfg)
}

/// Head to head. The first specimen wins only on a strictly greater score;
/// ties go to the second.
pub fn assess_pair(first: Specimen, second: Specimen, cfg: &Config) -> FinalReport {
    let first = scored(first);
    let second = scored(second);

    let winner = if first.assessment.score > second.assessment.score {
        first.specimen.name.clone()
    } else {
        second.specimen.name.clone()
    };

    build_report(vec![first, second], Some(Verdict { winner }), cfg)
}

/// Scores every roster row from the config file.
pub fn assess_roster(cfg: &Config) -> Result<FinalReport> {
    if cfg.specimens.is_empty() {
        bail!("no [[specimens]] entries in the config; run `paleoimpact init` for a starter roster");
    }

    let mut results = Vec::with_capacity(cfg.specimens.len());
    for row in &cfg.specimens {
        results.push(scored(row.to_specimen()?));
    }

    Ok(build_report(results, None, cfg))
}

/// Finds a specimen by name: config roster rows shadow the built-in catalog.
pub fn resolve_named(name: &str, cfg: &Config) -> Result<Specimen> {
    let folded = name.trim().to_ascii_lowercase();
    if let Some(row) = cfg
        .specimens
        .iter()
        .find(|row| row.name.trim().to_ascii_lowercase() == folded)
    {
        return row.to_specimen();
    }

    if let Some(entry) = catalog::lookup(name) {
        return Ok(entry.to_specimen());
    }

    bail!(
        "unknown specimen {:?}: not in the config roster or the built-in catalog (try `paleoimpact catalog`)",
        name
    )
}

/// Assembles the `score` subcommand's specimen. With `--specimen` a catalog
/// or roster entry is the base and explicit flags override its fields;
/// without it, length and height are required.
pub fn build_specimen(args: &ScoreArgs, cfg: &Config) -> Result<Specimen> {
    if let Some(key) = &args.specimen {
        let base = resolve_named(key, cfg)?;
        return Specimen::new(
            args.name.clone().unwrap_or(base.name),
            args.length.unwrap_or(base.length_m),
            args.height.unwrap_or(base.height_m),
            args.diet.as_deref().map(Diet::parse).unwrap_or(base.diet),
            args.body_type
                .as_deref()
                .map(BodyType::parse)
                .unwrap_or(base.body_type),
            args.period
                .as_deref()
                .map(Period::parse)
                .unwrap_or(base.period),
            args.start_mya.unwrap_or(base.start_mya),
            args.end_mya.unwrap_or(base.end_mya),
        );
    }

    let Some(length) = args.length else {
        bail!("--length is required unless --specimen names a known specimen");
    };
    let Some(height) = args.height else {
        bail!("--height is required unless --specimen names a known specimen");
    };

    Specimen::new(
        args.name.clone().unwrap_or_else(|| "specimen".to_string()),
        length,
        height,
        args.diet.as_deref().map(Diet::parse).unwrap_or_default(),
        args.body_type
            .as_deref()
            .map(BodyType::parse)
            .unwrap_or_default(),
        args.period.as_deref().map(Period::parse).unwrap_or_default(),
        args.start_mya.unwrap_or(0.0),
        args.end_mya.unwrap_or(0.0),
    )
}

fn scored(specimen: Specimen) -> ScoredSpecimen {
    let assessment = impact::score(&specimen);
    ScoredSpecimen {
        specimen,
        assessment,
    }
}

fn build_report(
    results: Vec<ScoredSpecimen>,
    verdict: Option<Verdict>,
    cfg: &Config,
) -> FinalReport {
    let counts = Counts::from_results(&results);
    let exit = report::evaluate_exit(&results, cfg);

    FinalReport {
        results,
        verdict,
        counts,
        config: ConfigSummary {
            fail_at: cfg.general.fail_at,
        },
        exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{RunArgs, ScoreArgs};
    use crate::config::SpecimenEntry;

    fn score_args() -> ScoreArgs {
        ScoreArgs {
            run: RunArgs {
                config: None,
                json: false,
            },
            specimen: None,
            name: None,
            length: None,
            height: None,
            diet: None,
            body_type: None,
            period: None,
            start_mya: None,
            end_mya: None,
        }
    }

    #[test]
    fn builds_a_specimen_from_flags() {
        let mut args = score_args();
        args.length = Some(12.0);
        args.height = Some(4.0);
        args.diet = Some("carnivorous".to_string());
        args.body_type = Some("large theropod".to_string());
        args.period = Some("Late Cretaceous".to_string());

        let specimen = build_specimen(&args, &Config::default()).expect("valid flags");
        assert_eq!(specimen.diet, Diet::Carnivorous);
        assert_eq!(specimen.body_type, BodyType::LargeTheropod);
        assert_eq!(specimen.name, "specimen");
    }

    #[test]
    fn length_and_height_are_required_without_a_base() {
        let mut args = score_args();
        args.length = Some(12.0);
        assert!(build_specimen(&args, &Config::default()).is_err());
    }

    #[test]
    fn catalog_base_with_flag_overrides() {
        let mut args = score_args();
        args.specimen = Some("trex".to_string());
        args.length = Some(13.0);

        let specimen = build_specimen(&args, &Config::default()).expect("catalog base");
        assert_eq!(specimen.name, "Tyrannosaurus rex");
        assert_eq!(specimen.length_m, 13.0);
        assert_eq!(specimen.height_m, 4.0);
    }

    #[test]
    fn roster_rows_shadow_the_catalog() {
        let mut cfg = Config::default();
        cfg.specimens.push(SpecimenEntry {
            name: "Tyrannosaurus rex".to_string(),
            length_m: 11.0,
            height_m: 3.8,
            diet: "carnivorous".to_string(),
            body_type: "large theropod".to_string(),
            period: "Late Cretaceous".to_string(),
            start_mya: 68.0,
            end_mya: 66.0,
        });

        let specimen = resolve_named("tyrannosaurus rex", &cfg).expect("roster row");
        assert_eq!(specimen.length_m, 11.0);
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(resolve_named("nessie", &Config::default()).is_err());
    }

    #[test]
    fn pair_ties_go_to_the_second_specimen() {
        let cfg = Config::default();
        let first = resolve_named("trex", &cfg).expect("catalog");
        let mut second = first.clone();
        second.name = "Challenger rex".to_string();

        let report = assess_pair(first, second, &cfg);
        let verdict = report.verdict.expect("compare sets a verdict");
        assert_eq!(verdict.winner, "Challenger rex");
    }

    #[test]
    fn pair_higher_score_wins() {
        let cfg = Config::default();
        let apex = resolve_named("trex", &cfg).expect("catalog");
        let small = resolve_named("coelophysis", &cfg).expect("catalog");

        let report = assess_pair(small, apex, &cfg);
        assert_eq!(
            report.verdict.expect("verdict").winner,
            "Tyrannosaurus rex"
        );
    }

    #[test]
    fn empty_roster_is_an_error_for_batch() {
        assert!(assess_roster(&Config::default()).is_err());
    }
}
