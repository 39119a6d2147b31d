//! 밀도 삼각 관계, 배합비, 참고 물질 테이블 테스트.
use approx::assert_relative_eq;
use proptest::prelude::*;
use unit_converter_toolbox::calc::density::{self, DensityQuery, Measure};
use unit_converter_toolbox::calc::mixture::{self, Ingredient, RatioKind};
use unit_converter_toolbox::conversion::ConversionError;
use unit_converter_toolbox::material_db;

#[test]
fn triangle_reference_values() {
    assert_eq!(density::density(10.0, 2.0), 5.0);
    assert_eq!(density::mass(1000.0, 0.001), 1.0);
    assert_eq!(density::volume(10.0, 0.0), 0.0);
}

#[test]
fn triangle_defines_zero_denominators() {
    assert_relative_eq!(density::density(1.0, 0.001), 1000.0);
    assert_eq!(density::density(5.0, 0.0), 0.0);
    assert_eq!(density::volume(5.0, 0.0), 0.0);
    assert_relative_eq!(density::mass(7850.0, 0.002), 15.7, epsilon = 1e-12);
    assert_relative_eq!(density::volume(15.7, 7850.0), 0.002, epsilon = 1e-15);
}

#[test]
fn solve_density_renders_equation() {
    let solution = density::solve(&DensityQuery::Density {
        mass: Measure::new(1.0, "kg"),
        volume: Measure::new(0.001, "m3"),
        unit: "kg_m3".into(),
    })
    .unwrap()
    .unwrap();
    assert_relative_eq!(solution.value, 1000.0);
    assert_eq!(
        solution.equation,
        "Density = Mass / Volume = 1 kg / 0.001 m³ = 1000 kg/m³"
    );
}

#[test]
fn solve_mass_converts_units() {
    let solution = density::solve(&DensityQuery::Mass {
        density: Measure::new(1.0, "g_cm3"),
        volume: Measure::new(1.0, "l"),
        unit: "kg".into(),
    })
    .unwrap()
    .unwrap();
    assert_relative_eq!(solution.value, 1.0, epsilon = 1e-12);
    assert_eq!(solution.unit, "kg");
    assert_eq!(
        solution.equation,
        "Mass = Density × Volume = 1 g/cm³ × 1 L = 1 kg"
    );
}

#[test]
fn solve_volume_with_material_density() {
    let water = material_db::find_material("water").unwrap();
    let solution = density::solve(&DensityQuery::Volume {
        mass: Measure::new(2.0, "kg"),
        density: Measure::new(water.density_kg_m3, "kg_m3"),
        unit: "l".into(),
    })
    .unwrap()
    .unwrap();
    assert_relative_eq!(solution.value, 2.0, epsilon = 1e-12);
    assert!(solution.equation.starts_with("Volume = Mass / Density = 2 kg / 1000 kg/m³"));
}

#[test]
fn solve_with_zero_volume_is_zero() {
    let solution = density::solve(&DensityQuery::Density {
        mass: Measure::new(3.0, "kg"),
        volume: Measure::new(0.0, "l"),
        unit: "kg_m3".into(),
    })
    .unwrap()
    .unwrap();
    assert_eq!(solution.value, 0.0);
    assert!(solution.equation.ends_with("= 0 kg/m³"));
}

#[test]
fn solve_rejects_units_from_wrong_category() {
    let err = density::solve(&DensityQuery::Density {
        mass: Measure::new(1.0, "kg"),
        volume: Measure::new(1.0, "kg"),
        unit: "kg_m3".into(),
    })
    .unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit { ref code, .. } if code == "kg"));
}

#[test]
fn solve_without_finite_input_has_no_result() {
    let result = density::solve(&DensityQuery::Mass {
        density: Measure::new(f64::NAN, "kg_m3"),
        volume: Measure::new(1.0, "m3"),
        unit: "kg".into(),
    });
    assert_eq!(result, Ok(None));
}

#[test]
fn parts_split_target_total() {
    let list = [
        Ingredient::new("cement", 1.0),
        Ingredient::new("sand", 2.0),
        Ingredient::new("gravel", 3.0),
    ];
    let portions = mixture::mix(&list, RatioKind::Parts, 60.0);
    let amounts: Vec<f64> = portions.iter().map(|p| p.amount).collect();
    assert_relative_eq!(amounts[0], 10.0, epsilon = 1e-12);
    assert_relative_eq!(amounts[1], 20.0, epsilon = 1e-12);
    assert_relative_eq!(amounts[2], 30.0, epsilon = 1e-12);
    assert_eq!(portions[2].name, "gravel");
}

#[test]
fn percentages_are_rescaled_to_hundred() {
    let list = [Ingredient::new("a", 30.0), Ingredient::new("b", 20.0)];
    let portions = mixture::mix(&list, RatioKind::Percentage, 10.0);
    assert_relative_eq!(portions[0].amount, 6.0, epsilon = 1e-12);
    assert_relative_eq!(portions[1].amount, 4.0, epsilon = 1e-12);
}

#[test]
fn zero_sum_gives_zero_amounts() {
    let list = [Ingredient::new("a", 0.0), Ingredient::new("b", 0.0)];
    for kind in [RatioKind::Parts, RatioKind::Percentage] {
        for portion in mixture::mix(&list, kind, 100.0) {
            assert_eq!(portion.amount, 0.0);
        }
    }
}

#[test]
fn normalize_scales_to_hundred() {
    let mut list = vec![Ingredient::new("a", 1.0), Ingredient::new("b", 3.0)];
    mixture::normalize_percentages(&mut list);
    assert_relative_eq!(list[0].value, 25.0, epsilon = 1e-12);
    assert_relative_eq!(list[1].value, 75.0, epsilon = 1e-12);
}

#[test]
fn materials_lookup_ignores_case() {
    assert_eq!(material_db::materials().len(), 20);
    assert_eq!(material_db::find_material("STEEL").unwrap().density_kg_m3, 7850.0);
    assert_eq!(material_db::find_material("wood (oak)").unwrap().density_kg_m3, 750.0);
    assert!(material_db::find_material("unobtainium").is_none());
    let water = material_db::find_material("Water (4°C)").unwrap();
    assert_eq!(water.density_in("g_cm3"), Ok(Some(1.0)));
    assert!(water.density_in("kg").is_err());
}

proptest! {
    #[test]
    fn parts_always_sum_to_target(
        values in prop::collection::vec(0.01_f64..100.0, 1..8),
        target in 0.0_f64..1.0e4,
    ) {
        let list: Vec<Ingredient> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Ingredient::new(format!("i{i}"), *v))
            .collect();
        let sum: f64 = mixture::mix(&list, RatioKind::Parts, target)
            .iter()
            .map(|p| p.amount)
            .sum();
        prop_assert!((sum - target).abs() <= 1e-9 * target.max(1.0));
    }
}
