//! End-to-end checks of the public API.
//!
//! Reference values come from the operational implementation these formulas are
//! compatible with; tolerances are tight because the formulas are closed-form.

use approx::assert_abs_diff_eq;
use ndarray::{Array1, array};
use wx_core::{Tolerances, all_close};
use wx_params::{
    Formula, WxError, conversion, direction_to_compass8, direction_to_compass16, humidity,
    hydrostatic, into_scalar, inverse_vapor_pressure, polar_to_vector, stability, vapor_pressure,
    vector_to_polar,
};

#[test]
fn dew_point_regression_grid() {
    let t = array![[0.0, 5.0], [10.0, 20.0]];
    let rh = array![[90.0, 50.0], [70.0, 99.5]];
    let formula: Formula = "Bolton".parse().unwrap();

    let td = humidity::dew_point(&t, &rh, formula).unwrap();

    let expected = array![[-1.44330606, -4.56523582], [4.78251527, 19.91913689]];
    assert!(all_close(&td, &expected, Tolerances::absolute(1e-6)), "td = {td}");
}

#[test]
fn dew_point_accepts_views_and_vectors() {
    let t = array![[0.0, 5.0], [10.0, 20.0]];
    let row = t.row(1);
    let td = humidity::dew_point(row, vec![70.0, 99.5], Formula::Bolton).unwrap();
    assert_abs_diff_eq!(td[[0]], 4.78251527, epsilon = 1e-6);
    assert_abs_diff_eq!(td[[1]], 19.91913689, epsilon = 1e-6);
}

#[test]
fn unknown_formula_is_rejected() {
    let err = "Goff-Gratch".parse::<Formula>().unwrap_err();
    assert!(matches!(err, WxError::InvalidFormula { ref received, .. } if received == "Goff-Gratch"));
    assert!(err.to_string().contains("Bolton, Tetens, WMO"));
}

#[test]
fn vapor_pressure_round_trip_all_formulas() {
    let t = Array1::linspace(-60.0, 50.0, 111);
    for formula in Formula::ALL {
        let back = inverse_vapor_pressure(&vapor_pressure(&t, formula), formula);
        assert!(all_close(&back, &t, Tolerances::absolute(1e-6)), "{formula}");
    }
}

#[test]
fn relative_humidity_floor() {
    let t = array![-20.0, 0.0, 30.0];
    for formula in Formula::ALL {
        let at_zero = humidity::dew_point(&t, 0.0, formula).unwrap();
        let at_floor = humidity::dew_point(&t, 0.1, formula).unwrap();
        assert_eq!(at_zero, at_floor);
    }
}

#[test]
fn compass_boundaries() {
    assert_eq!(into_scalar(direction_to_compass8(360.0, None)), Some(Some("N")));
    assert_eq!(into_scalar(direction_to_compass8(0.0, Some("VRB"))), Some(Some("VRB")));
    assert_eq!(into_scalar(direction_to_compass16(22.5, None)), Some(Some("NNE")));
}

#[test]
fn calm_wind() {
    let (speed, dir) = vector_to_polar(0.0, 0.0).unwrap();
    assert_eq!(into_scalar(speed), Some(0.0));
    assert_eq!(into_scalar(dir), Some(0.0));
}

#[test]
fn wind_round_trip_and_compass() {
    let u = array![3.0, -4.0, 0.0, 7.5];
    let v = array![-3.0, 0.0, -6.0, 2.5];
    let (speed, dir) = vector_to_polar(&u, &v).unwrap();
    let (u2, v2) = polar_to_vector(&speed, &dir).unwrap();
    assert!(all_close(&u2, &u, Tolerances::absolute(1e-9)));
    assert!(all_close(&v2, &v, Tolerances::absolute(1e-9)));

    let labels = direction_to_compass8(&dir, None);
    assert_eq!(labels, array![Some("NW"), Some("E"), Some("N"), Some("W")].into_dyn());
}

#[test]
fn unit_conversion_round_trips() {
    let x = array![-40.0, 0.0, 1.5, 1234.5];
    let x_dyn = x.clone().into_dyn();
    let tol = Tolerances::default();
    assert!(all_close(&conversion::kt_to_mps(conversion::mps_to_kt(&x)), &x_dyn, tol));
    assert!(all_close(&conversion::ft_to_m(conversion::m_to_ft(&x)), &x_dyn, tol));
    assert!(all_close(&conversion::deg_f_to_deg_c(conversion::deg_c_to_deg_f(&x)), &x_dyn, tol));
}

#[test]
fn k_index_monotone_in_td850() {
    let td850 = Array1::linspace(-10.0, 20.0, 31);
    let k = stability::k_index(18.0, &td850, 6.0, -2.0, -12.0).unwrap();
    let values: Vec<f64> = k.iter().copied().collect();
    assert!(values.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn batch_independence_with_zero_pressure() {
    let p = array![1000.0, 0.0, 850.0];
    let td = 12.0;
    let t = 18.0;

    let all = humidity::virtual_temperature(t, td, &p, Formula::Bolton).unwrap();
    let theta = stability::potential_temperature(t, &p).unwrap();
    let ssi = stability::showalter_index(&p, 500.0, t, -12.0, td, Formula::Bolton).unwrap();

    for i in [0, 2] {
        let pi = p[i];
        let single = into_scalar(humidity::virtual_temperature(t, td, pi, Formula::Bolton).unwrap());
        assert_eq!(Some(all[[i]]), single);
        assert!(theta[[i]].is_finite());
        let single_ssi =
            into_scalar(stability::showalter_index(pi, 500.0, t, -12.0, td, Formula::Bolton).unwrap());
        assert_eq!(Some(ssi[[i]]), single_ssi);
    }
    assert!(theta[[1]].is_infinite());
    assert!(ssi[[1]].is_nan());
}

#[test]
fn incompatible_shapes_fail_whole_call() {
    let err = stability::k_index([1.0_f64, 2.0], [1.0_f64, 2.0, 3.0], 0.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, WxError::ShapeMismatch { .. }));
}

#[test]
fn sounding_diagnostics_flow() {
    // 850/700/500 hPa profile of a moist, conditionally unstable summer day.
    let (t850, td850) = (20.0, 16.0);
    let (t700, td700) = (8.0, 2.0);
    let t500 = -10.0;

    let k = into_scalar(stability::k_index(t850, td850, t700, td700, t500).unwrap()).unwrap();
    assert_eq!(k, 40.0);

    let ssi = into_scalar(
        stability::showalter_index(850.0, 500.0, t850, t500, td850, Formula::Bolton).unwrap(),
    )
    .unwrap();
    assert!(ssi < 0.0, "ssi = {ssi}");

    // Passing the hypsometric thickness explicitly is equivalent.
    let dz = into_scalar(hydrostatic::layer_thickness(850.0, 500.0, t850, t500).unwrap()).unwrap();
    let ssi_dz = into_scalar(
        stability::showalter_index_with_thickness(850.0, 500.0, t850, t500, td850, dz, Formula::Bolton)
            .unwrap(),
    )
    .unwrap();
    assert_eq!(ssi, ssi_dz);
}
