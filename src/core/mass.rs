use crate::specimen::BodyType;

/// Allometric scaling constants per body plan: mass multiplier, exponent on
/// the femur-circumference proxy, exponent on standing height. The numbers
/// follow Campione & Evans-style limb-scaling fits per clade and are kept
/// verbatim; they are calibration constants, not tunables.
fn scaling(body_type: BodyType) -> (f64, f64, f64) {
    match body_type {
        BodyType::Sauropod => (2.4, 2.6, 0.4),
        BodyType::LargeTheropod => (3.2, 2.7, 0.6),
        BodyType::SmallTheropod => (1.8, 2.5, 0.5),
        BodyType::Ceratopsian => (2.8, 2.6, 0.55),
        BodyType::ArmouredDinosaur => (3.0, 2.65, 0.5),
        BodyType::Euornithopod => (2.2, 2.55, 0.5),
        BodyType::Other => (2.5, 2.6, 0.5),
    }
}

/// Estimated adult body mass in kilograms from total length and standing
/// height. The femur proxy is taken as 8% of body length. Super-giant
/// corrections apply only on the sauropod branch, then square-cube
/// compression kicks in above 30 t and again above 50 t, with a 50 kg
/// adult floor.
pub fn estimate_mass_kg(length_m: f64, height_m: f64, body_type: BodyType) -> f64 {
    let femur_proxy = length_m * 0.08;
    let (multiplier, femur_exp, height_exp) = scaling(body_type);

    let mut mass = multiplier * femur_proxy.powf(femur_exp) * height_m.powf(height_exp) * 1000.0;

    if body_type == BodyType::Sauropod {
        if length_m > 25.0 {
            mass *= 1.3;
        } else if length_m > 20.0 {
            mass *= 1.1;
        }
    }

    if mass > 50_000.0 {
        mass = 50_000.0 + (mass - 50_000.0) * 0.3;
    } else if mass > 30_000.0 {
        mass = 30_000.0 + (mass - 30_000.0) * 0.6;
    }

    if mass < 50.0 {
        mass = 50.0;
    }

    mass
}
