use crate::specimen::{BodyType, Diet, Period, Specimen};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in reference specimen: morphology plus a one-line description for
/// the `catalog` listing.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub length_m: f64,
    pub height_m: f64,
    pub diet: Diet,
    pub body_type: BodyType,
    pub period: Period,
    pub start_mya: f64,
    pub end_mya: f64,
    pub blurb: &'static str,
}

impl CatalogEntry {
    pub fn to_specimen(&self) -> Specimen {
        Specimen {
            name: self.name.to_string(),
            length_m: self.length_m,
            height_m: self.height_m,
            diet: self.diet,
            body_type: self.body_type,
            period: self.period,
            start_mya: self.start_mya,
            end_mya: self.end_mya,
        }
    }
}

/// Well-known specimens covering every body plan and every period in the
/// lookup tables. Dimensions follow the usual published adult estimates.
static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Tyrannosaurus rex",
        aliases: &["t rex", "t. rex", "trex", "tyrannosaurus"],
        length_m: 12.0,
        height_m: 4.0,
        diet: Diet::Carnivorous,
        body_type: BodyType::LargeTheropod,
        period: Period::LateCretaceous,
        start_mya: 68.0,
        end_mya: 66.0,
        blurb: "One of the largest land predators known, around 12 m long.",
    },
    CatalogEntry {
        name: "Triceratops",
        aliases: &[],
        length_m: 9.0,
        height_m: 3.0,
        diet: Diet::Herbivorous,
        body_type: BodyType::Ceratopsian,
        period: Period::LateCretaceous,
        start_mya: 68.0,
        end_mya: 66.0,
        blurb: "Three-horned ceratopsid with a large bony frill.",
    },
    CatalogEntry {
        name: "Brontosaurus",
        aliases: &["bronto"],
        length_m: 21.0,
        height_m: 12.0,
        diet: Diet::Herbivorous,
        body_type: BodyType::Sauropod,
        period: Period::LateJurassic,
        start_mya: 156.3,
        end_mya: 146.8,
        blurb: "Gentle sauropod browser around 21 m from nose to tail.",
    },
    CatalogEntry {
        name: "Allosaurus",
        aliases: &[],
        length_m: 9.7,
        height_m: 3.0,
        diet: Diet::Carnivorous,
        body_type: BodyType::LargeTheropod,
        period: Period::LateJurassic,
        start_mya: 155.0,
        end_mya: 145.0,
        blurb: "Dominant Late Jurassic predator of the Morrison plains.",
    },
    CatalogEntry {
        name: "Ankylosaurus",
        aliases: &[],
        length_m: 7.0,
        height_m: 1.7,
        diet: Diet::Herbivorous,
        body_type: BodyType::ArmouredDinosaur,
        period: Period::LateCretaceous,
        start_mya: 68.0,
        end_mya: 66.0,
        blurb: "Low browser armoured in bony plates, with a tail club.",
    },
    CatalogEntry {
        name: "Iguanodon",
        aliases: &[],
        length_m: 10.0,
        height_m: 2.7,
        diet: Diet::Herbivorous,
        body_type: BodyType::Euornithopod,
        period: Period::EarlyCretaceous,
        start_mya: 126.0,
        end_mya: 113.0,
        blurb: "Thumb-spiked ornithopod, an Early Cretaceous staple.",
    },
    CatalogEntry {
        name: "Cetiosaurus",
        aliases: &[],
        length_m: 16.0,
        height_m: 5.0,
        diet: Diet::Herbivorous,
        body_type: BodyType::Sauropod,
        period: Period::MidJurassic,
        start_mya: 168.0,
        end_mya: 166.0,
        blurb: "Early sauropod known from Mid Jurassic England.",
    },
    CatalogEntry {
        name: "Dilophosaurus",
        aliases: &[],
        length_m: 7.0,
        height_m: 2.0,
        diet: Diet::Carnivorous,
        body_type: BodyType::LargeTheropod,
        period: Period::EarlyJurassic,
        start_mya: 196.0,
        end_mya: 183.0,
        blurb: "Double-crested predator from the Early Jurassic.",
    },
    CatalogEntry {
        name: "Coelophysis",
        aliases: &[],
        length_m: 3.0,
        height_m: 1.0,
        diet: Diet::Carnivorous,
        body_type: BodyType::SmallTheropod,
        period: Period::LateTriassic,
        start_mya: 221.5,
        end_mya: 196.0,
        blurb: "Slender pack hunter from the dawn of the dinosaurs.",
    },
];

static BY_NAME: Lazy<HashMap<String, &'static CatalogEntry>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for entry in CATALOG {
        index.insert(key(entry.name), entry);
        for alias in entry.aliases {
            index.insert(key(alias), entry);
        }
    }
    index
});

fn key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    BY_NAME.get(&key(name)).copied()
}

pub fn entries() -> &'static [CatalogEntry] {
    CATALOG
}
