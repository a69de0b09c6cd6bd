//! Olivine and forsterite datasets.

use crate::arrhenius::ArrheniusLaw;
use crate::record::Orientation::{Unoriented, X, Y, Z};
use crate::record::{Diffusivities, RecordError};
use crate::units;

use super::MARKER_SIZE;

/// Temperatures shared by the Padrón-Navarta et al. (2014) forsterite runs
const PADRON_NAVARTA_CELSIUS: [f64; 3] = [1000.0, 900.0, 800.0];

pub(super) fn records() -> Result<Vec<(&'static str, Diffusivities)>, RecordError> {
    let padron_navarta = Diffusivities::builder("").celsius_all(PADRON_NAVARTA_CELSIUS);
    let point = |marker: &str, color: &str| {
        style! {
            "marker" => marker, "color" => color, "alpha" => 0.5,
            "markersize" => MARKER_SIZE, "linestyle" => "none",
        }
    };
    let open_marker = |color: &str, marker: &str| {
        style! {
            "color" => color, "marker" => marker, "fillstyle" => "none",
            "markersize" => MARKER_SIZE, "linestyle" => "none",
        }
    };
    let km98_slow_color = "green";

    Ok(vec![
        (
            "wanamaker-si-vacancy",
            Diffusivities::builder("San Carlos ol. $V''''_{Si}$\nWanamaker 1994")
                .celsius(Unoriented, [1100.0, 1200.0])
                .log_d(Unoriented, [-10.4, -9.99])
                .style(style! {
                    "color" => "k", "marker" => "*", "alpha" => 0.5,
                    "linestyle" => "none", "markersize" => 10,
                })
                .build()?,
        ),
        (
            "wanamaker-me-vacancy",
            Diffusivities::builder("San Carlos ol. $V''_{Me}$\nWanamaker 1994")
                .celsius(Unoriented, [1100.0, 1200.0, 1300.0])
                .log_d(Unoriented, [-11.20, -10.8, -10.3])
                .style(style! {
                    "color" => "g", "marker" => "*", "alpha" => 0.5, "fillstyle" => "none",
                    "linestyle" => "none", "markersize" => 10,
                })
                .build()?,
        ),
        (
            "dm03",
            Diffusivities::builder("bulk H forsterite\nDemouchy & Mackwell 2003")
                .celsius(X, [1100.0, 1058.0, 1056.0, 1015.0])
                .log_d(X, [-12.2829, -12.6956, -12.6956, -12.9896])
                .celsius(Y, [1109.0, 1099.0, 1060.0, 1056.0, 1001.0])
                .log_d(Y, [-11.7728, -11.9740, -11.9688, -12.2108, -12.5100])
                .celsius(Z, [1109.0, 1060.0, 1057.0, 999.0, 949.0, 899.0, 898.0])
                .log_d(
                    Z,
                    [-11.4380, -11.5100, -11.6748, -11.9740, -12.1440, -12.5924, -12.6800],
                )
                .style(point("v", "green"))
                .build()?,
        ),
        (
            "pnav-si",
            padron_navarta
                .clone()
                .description("forsterite, [Si]")
                .celsius(Unoriented, [1000.0, 1100.0, 1200.0])
                .log_d(Unoriented, [-15.66, -14.17, -13.02])
                .style(open_marker("black", "^"))
                .build()?,
        ),
        (
            "pnav-si-ti",
            padron_navarta
                .clone()
                .description("forsterite, [Si-Ti]")
                .log_d(Unoriented, [-13.35, -14.3, -15.29])
                .style(open_marker("red", ">"))
                .build()?,
        ),
        (
            "pnav-ti",
            padron_navarta
                .clone()
                .description("forsterite, [Ti]")
                .log_d(Unoriented, [-13.16, -14.1, -15.26])
                .style(open_marker("blue", "v"))
                .build()?,
        ),
        (
            "pnav-mg",
            padron_navarta
                .description("forsterite, [Mg]")
                .log_d(Unoriented, [-12.66, -13.7, -14.29])
                .style(open_marker("green", "<"))
                .build()?,
        ),
        (
            "du-frane",
            Diffusivities::builder("H self-diffusion\nDuFrane & Tybeursky 2012")
                .celsius(X, [750.0, 800.0, 900.0])
                .log_d(X, [-12.3, -11.7, -11.2])
                .celsius(Z, [900.0])
                .log_d(Z, [-12.0])
                .style(point("d", "purple"))
                .build()?,
        ),
        (
            "km98-fast",
            Diffusivities::builder("fast mech., KM98")
                .celsius_all([1000.0, 1000.0, 900.0, 900.0, 800.0])
                .log_d(X, [-9.5634, -9.3928, -9.9876, -10.3970, -10.8071])
                .log_d(Y, [-11.0066, -10.6898, -11.3043, -11.9967, -12.2306])
                .log_d(Z, [-11.4068, -11.0066, -11.2551, -11.1582, -12.1140])
                .law(X, ArrheniusLaw::new(145.0, -4.0))
                .law(Y, ArrheniusLaw::new(180.0, -3.9))
                .law(Z, ArrheniusLaw::new(110.0, -6.8))
                .style(point("d", "navy"))
                .build()?,
        ),
        (
            "dm06-fast",
            Diffusivities::builder("fast mech., DM06")
                .celsius_all([900.0])
                .diffusivity(X, &[4e-11])
                .diffusivity(Y, &[2e-12])
                .diffusivity(Z, &[1e-12])
                .style(point("s", "navy"))
                .build()?,
        ),
        (
            "km98-slow",
            Diffusivities::builder("slow mech., KM98")
                .celsius_all([900.0, 1000.0])
                .log_d(X, [-13.994, -12.783])
                .log_d(Y, [-14.17, -13.171])
                .log_d(Z, [-12.885, -11.776])
                .style(point("D", km98_slow_color).with("markersize", MARKER_SIZE + 3))
                .build()?,
        ),
        (
            "dm06-slow",
            Diffusivities::builder("slow mech., DM06")
                .celsius_all([900.0])
                .diffusivity(X, &[5e-13])
                .celsius(Y, [900.0, 1000.0])
                .diffusivity(Y, &[5e-14, 3e-13])
                .diffusivity(Z, &[1e-12])
                .style(point("s", km98_slow_color).with("markersize", MARKER_SIZE + 3))
                .build()?,
        ),
        (
            "single-mechanism",
            Diffusivities::builder("San Carlos ol.\nsingle mech.")
                .celsius_all([900.0])
                .log_d(X, [-11.3])
                .log_d(Y, [-13.6])
                .log_d(Z, [-12.1])
                .log_d_error(X, [0.1])
                .log_d_error(Y, [0.6])
                .log_d_error(Z, [0.2])
                .style(style! {
                    "color" => "orangered", "marker" => "*", "markersize" => MARKER_SIZE + 5,
                    "linestyle" => "none", "alpha" => 1,
                })
                .build()?,
        ),
        (
            "mech2",
            Diffusivities::builder("Slow mechanism in simultaneous model")
                .celsius_all([900.0])
                .log_d(X, [-12.2])
                .log_d(Y, [-13.2])
                .log_d(Z, [-12.3])
                .style(style! {
                    "marker" => "D", "color" => "yellow", "alpha" => 1,
                    "markersize" => MARKER_SIZE, "linestyle" => "none",
                })
                .build()?,
        ),
        (
            "hauri02",
            Diffusivities::builder("Hauri 2002")
                .celsius(Unoriented, [1275.0])
                .diffusivity(Unoriented, &[4e-9])
                .style(style! {
                    "marker" => "+", "color" => "blue", "markersize" => MARKER_SIZE,
                    "linestyle" => "none", "markeredgewidth" => "1",
                })
                .build()?,
        ),
        (
            "portnyagin08",
            Diffusivities::builder("Portnyagin et al. 2008")
                .celsius(Unoriented, [1140.0])
                .diffusivity(Unoriented, &[5e-12])
                .style(style! {
                    "marker" => 1, "color" => "crimson", "markersize" => MARKER_SIZE,
                    "linestyle" => "none", "markeredgewidth" => "3", "fillstyle" => "none",
                })
                .build()?,
        ),
        (
            "chen11",
            Diffusivities::builder("Chen et al. 2011")
                .celsius(
                    Unoriented,
                    [1533.0, 1471.0, 1437.0, 1561.0].map(units::kelvin_to_celsius),
                )
                .diffusivity(Unoriented, &[2e-11, 2.5e-11, 0.5e-11, 2.5e-11])
                .style(style! {
                    "marker" => "x", "color" => "black", "markersize" => MARKER_SIZE,
                    "linestyle" => "none", "markeredgewidth" => "1",
                })
                .build()?,
        ),
        (
            "gaetani12",
            Diffusivities::builder("Gaetani et al., 2012")
                .celsius(Unoriented, [1250.0])
                .diffusivity(Unoriented, &[1.7e-11])
                .style(style! {
                    "marker" => "h", "color" => "red", "markersize" => MARKER_SIZE,
                    "linestyle" => "none", "markeredgewidth" => "1", "fillstyle" => "none",
                })
                .build()?,
        ),
    ])
}
