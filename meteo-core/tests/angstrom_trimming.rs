//! Trimming tests for the Ångström coefficients.
//!
//! These tests verify the joint constraint between the "a" and "b"
//! coefficients for a range of assignments:
//! - both coefficients stay within [0, 1]
//! - each is bounded by one minus its sibling where the sibling is defined
//! - re-trimming valid values changes nothing

use is_close::is_close;
use meteo_core::{ControlConfig, MeteoControl, MeteoError, Month, N_MONTHS};

fn seasonal(base: f64, amplitude: f64) -> [f64; N_MONTHS] {
    let mut values = [0.0; N_MONTHS];
    for (i, v) in values.iter_mut().enumerate() {
        *v = base + amplitude * (i as f64 * std::f64::consts::PI / 6.0).sin();
    }
    values
}

fn assert_trimmed(control: &MeteoControl) {
    for month in Month::ALL {
        let a = control.angstrom_constant().get(month);
        let b = control.angstrom_factor().get(month);
        for value in [a, b].into_iter().flatten() {
            assert!((0.0..=1.0).contains(&value), "{} out of [0, 1]", value);
        }
        if let (Some(a), Some(b)) = (a, b) {
            assert!(a + b <= 1.0 || is_close!(a + b, 1.0), "{} + {} > 1", a, b);
        }
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_constant_without_factor_is_clamped_to_one() {
        let mut control = MeteoControl::new();
        control.set_angstrom_constant(1.5);

        for month in Month::ALL {
            assert_eq!(control.angstrom_constant().get(month), Some(1.0));
        }
    }

    #[test]
    fn test_constant_bounded_by_factor() {
        let mut control = MeteoControl::new();
        control.set_angstrom_factor(0.6);
        control.set_angstrom_constant(0.5);

        for month in Month::ALL {
            assert!(is_close!(control.angstrom_constant().get(month).unwrap(), 0.4));
        }
        assert_eq!(control.angstrom_constant().to_string(), "angstromconstant(0.4)");
    }

    #[test]
    fn test_factor_bounded_by_constant() {
        let mut control = MeteoControl::new();
        control.set_angstrom_constant(0.6);
        control.set_angstrom_factor(0.5);

        for month in Month::ALL {
            assert!(is_close!(control.angstrom_factor().get(month).unwrap(), 0.4));
        }
        assert_eq!(control.angstrom_factor().to_string(), "angstromfactor(0.4)");
    }

    #[test]
    fn test_defaults() {
        let control = MeteoControl::default();

        for month in Month::ALL {
            assert_eq!(control.angstrom_constant().get(month), Some(0.25));
            assert_eq!(control.angstrom_factor().get(month), Some(0.5));
            assert_eq!(control.angstrom_alternative().get(month), Some(0.15));
        }
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_bounds_hold_for_seasonal_values() {
        for (a_base, b_base) in [(0.2, 0.5), (0.6, 0.6), (-0.3, 1.4), (0.9, 0.05)] {
            let mut control = MeteoControl::new();
            control.set_angstrom_factor(seasonal(b_base, 0.3));
            control.set_angstrom_constant(seasonal(a_base, 0.3));
            assert_trimmed(&control);

            control.set_angstrom_factor(seasonal(b_base, 0.3));
            assert_trimmed(&control);
        }
    }

    #[test]
    fn test_undefined_sibling_months_bound_at_one() {
        let mut factor = [0.7; N_MONTHS];
        factor[Month::January.index()] = f64::NAN;
        factor[Month::August.index()] = f64::NAN;

        let mut control = MeteoControl::new();
        control.set_angstrom_factor(factor);
        control.set_angstrom_constant(0.95);

        for month in Month::ALL {
            let a = control.angstrom_constant().get(month).unwrap();
            if matches!(month, Month::January | Month::August) {
                assert_eq!(a, 0.95);
            } else {
                assert!(is_close!(a, 0.3));
            }
        }
    }

    #[test]
    fn test_retrim_is_idempotent() {
        let mut control = MeteoControl::new();
        control.set_angstrom_factor(seasonal(0.5, 0.2));
        control.set_angstrom_constant(seasonal(0.6, 0.1));
        let before = control.clone();

        assert_eq!(control.trim_angstrom_constant(None, None), 0);
        assert_eq!(control, before);
    }

    #[test]
    fn test_sibling_is_not_modified() {
        let mut control = MeteoControl::new();
        control.set_angstrom_factor(0.9);
        control.set_angstrom_constant(0.9);

        assert_eq!(control.angstrom_factor().values().uniform_value(), Some(0.9));
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_config_file() {
        let path = std::env::temp_dir().join("meteo_core_control_test.toml");
        std::fs::write(
            &path,
            "latitude = 95.0\nlongitude = 6.1\nangstromconstant = 0.3\nangstromfactor = 0.9\n",
        )
        .unwrap();

        let config = ControlConfig::from_file(&path).unwrap();
        let control = MeteoControl::from_config(&config).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(control.latitude().value(), Some(90.0));
        assert!(is_close!(
            control.angstrom_factor().get(Month::March).unwrap(),
            0.7
        ));
        control.verify().unwrap();
    }

    #[test]
    fn test_missing_config_file() {
        let err = ControlConfig::from_file("/nonexistent/meteo.toml").unwrap_err();
        assert!(matches!(err, MeteoError::Config(_)));
    }
}
