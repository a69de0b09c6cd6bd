//! Clinopyroxene (mostly diopside) datasets.

use crate::record::Orientation::{Unoriented, X, Y, Z};
use crate::record::{Diffusivities, RecordError};
use crate::uncertainty::Uncertain;

use super::{log_d_cm2, log_d_of, MARKER_SIZE};

pub(super) fn records() -> Result<Vec<(&'static str, Diffusivities)>, RecordError> {
    let kunlun_style = style! {
        "color" => "black", "marker" => "D", "markersize" => MARKER_SIZE,
        "linestyle" => "none", "alpha" => 0.5,
    };
    let tracer_style = |color: &str| {
        style! {
            "color" => color, "marker" => "o", "linestyle" => "none",
            "markersize" => 7, "fillstyle" => "right", "alpha" => 0.5,
        }
    };
    let dimanov_celsius = [
        1000.0, 1150.0, 1100.0, 1190.0, 1100.0, 1100.0, 1100.0, 1100.0, 1050.0, 1150.0, 1100.0,
        1100.0,
    ];
    let woods_x = [700.0, 750.0, 800.0, 800.0, 800.0, 850.0, 700.0, 850.0];
    let woods_y = [750.0, 800.0, 800.0, 800.0, 850.0];
    let woods_z = [700.0, 750.0, 800.0, 800.0, 800.0, 850.0];
    let woods_dx = [5e-13, 7e-12, 1.1e-11, 1.5e-11, 2e-11, 1.8e-11, 3.5e-12, 3.5e-11];
    let woods_dy = [1.5e-12, 3e-12, 2.5e-12, 8e-13, 2e-12];
    let woods_dz = [2e-12, 7e-12, 1.5e-11, 1.5e-11, 6e-12, 3e-11];

    Ok(vec![
        (
            "h-cr-diopside-ingrin95",
            Diffusivities::builder(
                "H in Cr-rich diopside in air\nmainly 3645 cm$^{-1}$\nIngrin et al. 1995",
            )
            .celsius_all([700.0, 800.0, 900.0, 1000.0])
            .diffusivity(X, &[3e-14, 9e-14, 5.5e-13, 1.9e-12])
            .diffusivity(Z, &[5e-14, 13e-14, 4.5e-13, 12e-13])
            .style(style! {
                "color" => "green", "marker" => "^", "markersize" => 12,
                "linestyle" => "none", "alpha" => 1.0,
            })
            .build()?,
        ),
        (
            "h-cpx-wade2008",
            Diffusivities::builder("H in cpx phenocryst\nWade et al. 2008")
                .celsius_all([1100.0])
                .log_d(Unoriented, [-13.0])
                .style(style! {
                    "color" => "indigo", "marker" => "$\\clubsuit$", "markersize" => 12,
                    "markeredgewidth" => 0, "linestyle" => "none", "alpha" => 1.0,
                })
                .build()?,
        ),
        (
            "h-diopside-woods00",
            Diffusivities::builder("Jaipur bulk H\nWoods et al. 2000")
                .celsius(X, woods_x)
                .diffusivity(X, &woods_dx)
                .celsius(Y, woods_y)
                .diffusivity(Y, &woods_dy)
                .celsius(Z, woods_z)
                .diffusivity(Z, &woods_dz)
                .style(style! {
                    "color" => "k", "marker" => "s", "markerfacecolor" => "turquoise",
                    "markersize" => 10, "linestyle" => "none", "alpha" => 1.0,
                    "markeredgewidth" => 0.5,
                })
                .build()?,
        ),
        (
            "h-cpx-basanite-xia00",
            Diffusivities::builder(
                "H in basanite cpx\n3630 + 3500 cm$^{-1}$\nf$_{02}=10^{-14}$ Xia et al. 2000",
            )
            .celsius(Z, [850.0, 950.0])
            .diffusivity(Z, &[1.8e-12, 6.5e-12])
            .style(style! {
                "color" => "k", "marker" => ">", "markerfacecolor" => "k",
                "markersize" => 8, "linestyle" => "none", "alpha" => 1.0,
                "markeredgewidth" => 1,
            })
            .build()?,
        ),
        (
            "h-diopside-sundvall-fe-free",
            Diffusivities::builder("pure synth. diopside in air\nSundvall et al. 2009")
                .celsius(X, [1000.0, 800.0])
                .log_d(X, [-12.3, -14.7])
                .celsius(Y, [1000.0, 900.0, 800.0])
                .log_d(Y, [-12.6, -13.9, -15.1])
                .style(style! {
                    "color" => "b", "marker" => ">", "markerfacecolor" => "b",
                    "markersize" => 8, "linestyle" => "none", "alpha" => 1.0,
                    "markeredgewidth" => 1,
                })
                .build()?,
        ),
        (
            "h-diopside-sundvall",
            Diffusivities::builder("synth. Fe-bearing diopside\nin air; Sundvall et al. 2009")
                .celsius(Y, [1000.0, 900.0, 800.0])
                .log_d(Y, [-13.7, -15.3, -15.9])
                .style(style! {
                    "color" => "y", "marker" => "v", "markerfacecolor" => "y",
                    "markersize" => 13, "linestyle" => "none", "alpha" => 1.0,
                    "markeredgewidth" => 1,
                })
                .build()?,
        ),
        (
            "kunlun-bulk-h",
            Diffusivities::builder("Kunlun diopside\nbulk H, QFM")
                .celsius_all([1000.0])
                .log_d(X, [-13.0])
                .log_d(Y, [-13.5])
                .log_d(Z, [-13.5])
                .log_d_error(X, [0.1])
                .log_d_error(Y, [0.1])
                .log_d_error(Z, [0.1])
                .style(kunlun_style.clone())
                .build()?,
        ),
        (
            "kunlun-peak-3617",
            Diffusivities::builder("Kunlun diopside\nPeak at 3617 cm$^{-1}$")
                .celsius_all([1000.0])
                .log_d(X, [-13.4])
                .log_d(Y, [-12.3])
                .log_d(Z, [-13.5])
                .log_d_error(X, [0.4])
                .log_d_error(Y, [0.03])
                .log_d_error(Z, [0.2])
                .style(kunlun_style.clone().with("color", "red"))
                .build()?,
        ),
        (
            "kunlun-peak-3540",
            Diffusivities::builder("Kunlun diopside\nPeak at 3540 cm$^{-1}$")
                .celsius_all([1000.0])
                .log_d(X, [-12.7])
                .log_d(Y, [-12.2])
                .log_d(Z, [-12.7])
                .log_d_error(X, [0.3])
                .log_d_error(Y, [0.1])
                .log_d_error(Z, [0.3])
                .style(kunlun_style.with("color", "blue"))
                .build()?,
        ),
        (
            "jaipur-bulk-h",
            Diffusivities::builder("Jaipur diopside bulk H\n(Woods et al. 2001)")
                .celsius(X, woods_x)
                .diffusivity(X, &woods_dx)
                .celsius(Y, woods_y)
                .diffusivity(Y, &woods_dy)
                .celsius(Z, woods_z)
                .diffusivity(Z, &woods_dz)
                .style(style! {
                    "color" => "green", "marker" => "s", "markersize" => MARKER_SIZE,
                    "linestyle" => "none",
                })
                .build()?,
        ),
        (
            "o-diopside-self",
            Diffusivities::builder("O self-diffusion in diopside\nRyerson & McKeegan 1994")
                .celsius(
                    Z,
                    [
                        1104.0, 1104.0, 1104.0, 1105.0, 1150.0, 1200.0, 1200.0, 1200.0, 1200.0,
                        1202.0, 1202.0, 1202.0, 1251.0, 1251.0, 1251.0,
                    ],
                )
                .diffusivity(
                    Z,
                    &[
                        1.96e-21, 2.04e-21, 1.48e-21, 2.29e-21, 1.19e-20, 2.47e-20, 3.63e-20,
                        1.9e-20, 3.17e-20, 1.75e-20, 2.17e-20, 3.74e-20, 8.94e-20, 9.64e-20,
                        1.22e-19,
                    ],
                )
                .style(style! {
                    "color" => "red", "marker" => "^", "linestyle" => "none",
                    "fillstyle" => "right", "alpha" => 0.5,
                })
                .build()?,
        ),
        (
            "u-diopside",
            Diffusivities::builder("U in diopside\nVan Orman et al. 1998")
                .celsius(Z, [1150.0, 1150.0, 1200.0, 1200.0, 1200.0, 1300.0, 1300.0])
                .diffusivity(
                    Z,
                    &[4.54e-22, 9.44e-22, 2.90e-21, 3.95e-21, 2.35e-21, 2.35e-21, 2.18e-20],
                )
                .style(tracer_style("orange"))
                .build()?,
        ),
        (
            "th-diopside",
            Diffusivities::builder("Th in diopside\nVan Orman et al. 1998")
                .celsius(Z, [1150.0, 1150.0, 1200.0, 1200.0, 1200.0, 1300.0, 1300.0])
                .diffusivity(
                    Z,
                    &[1.59e-21, 1.2e-21, 5.26e-21, 3.80e-21, 3.22e-21, 2.12e-20, 2.75e-20],
                )
                .style(tracer_style("yellow"))
                .build()?,
        ),
        (
            "ce-diopside",
            Diffusivities::builder("Ce in diopside\nVan Orman et al. 2001")
                .celsius(
                    Z,
                    [
                        1300.0, 1275.0, 1250.0, 1250.0, 1225.0, 1200.0, 1200.0, 1200.0, 1200.0,
                        1175.0, 1150.0,
                    ],
                )
                .diffusivity(
                    Z,
                    &[
                        31.9e-21, 25.0e-21, 11.5e-21, 6.83e-21, 5.83e-21, 2.53e-21, 4.45e-21,
                        4.01e-21, 4.53e-21, 0.68e-21, 0.62e-21,
                    ],
                )
                .style(tracer_style("lime"))
                .build()?,
        ),
        (
            "al-diopside",
            Diffusivities::builder("Al in diopside; Sautter\net al. EPSL 1988")
                .celsius(Unoriented, [1180.0])
                .log_d(Unoriented, [-18.495])
                .style(style! {
                    "color" => "g", "marker" => "x", "linestyle" => "none",
                    "fillstyle" => "full",
                })
                .build()?,
        ),
        (
            "ca-mg-diopside-2010",
            Diffusivities::builder("Ca-Mg interdiffusion in di.\nZhang et al. 2010")
                .celsius(
                    X,
                    [1150.0, 1150.0, 1100.0, 1100.0, 1050.0, 1050.0, 1000.0, 1000.0, 950.0, 950.0],
                )
                .log_d(
                    X,
                    [-19.33, -19.37, -19.92, -19.55, -19.99, -19.97, -20.39, -20.41, -20.82, -21.18],
                )
                .celsius(
                    Y,
                    [1150.0, 1150.0, 1050.0, 1050.0, 1000.0, 1000.0, 1000.0, 1000.0, 950.0, 950.0],
                )
                .log_d(
                    Y,
                    [-19.39, -19.38, -20.06, -20.07, -20.95, -21.08, -20.92, -21.18, -21.26, -21.36],
                )
                .celsius(Z, [1150.0, 1150.0, 1050.0, 1050.0, 950.0, 950.0])
                .log_d(Z, [-19.49, -19.44, -20.12, -20.24, -21.36, -21.38])
                .style(style! {
                    "color" => "orange", "marker" => "s", "linestyle" => "none",
                    "markersize" => 7, "fillstyle" => "full", "alpha" => 0.8,
                })
                .build()?,
        ),
        (
            "ca-mg-diopside-1983",
            Diffusivities::builder("Ca-Mg interdiffusion in cpx\nBrady & McCallister 1983")
                .celsius_all([
                    1100.0, 1100.0, 1100.0, 1100.0, 1100.0, 1150.0, 1150.0, 1150.0, 1150.0, 1200.0,
                    1200.0, 1250.0,
                ])
                .log_d(
                    Unoriented,
                    log_d_cm2(&log_d_of(&[
                        1.4e-16, 6.9e-17, 5.6e-17, 2.0e-17, 5.7e-18, 5.6e-16, 2.8e-16, 1.7e-16,
                        6.9e-17, 8.3e-16, 4.2e-16, 5.6e-16,
                    ])),
                )
                .style(style! {
                    "color" => "orange", "marker" => "s", "linestyle" => "none",
                    "markersize" => 9, "fillstyle" => "none", "alpha" => 0.5,
                })
                .build()?,
        ),
        (
            "fe-mg-cpx-2013",
            Diffusivities::builder("Fe-Mg interdiffusion in cpx\nMueller et al. 2013")
                .celsius(
                    Z,
                    [
                        850.0, 900.0, 950.0, 1150.0, 800.0, 905.0, 1106.0, 1006.0, 1154.0, 1200.0,
                        1035.0, 924.0, 956.0, 1048.0, 1102.0, 945.0, 999.0, 1100.0, 1000.0, 1007.0,
                        1007.0, 1007.0,
                    ],
                )
                .log_d(
                    Z,
                    [
                        -21.0, -20.8, -20.46, -18.0, -21.89, -21.05, -18.64, -19.75, -18.3, -17.52,
                        -19.52, -20.4, -20.46, -19.41, -18.7, -20.4, -19.7, -18.7, -19.92, -19.52,
                        -19.82, -19.92,
                    ],
                )
                .style(style! {
                    "color" => "grey", "marker" => "h", "linestyle" => "none",
                    "markersize" => 7, "fillstyle" => "right", "alpha" => 0.8,
                })
                .build()?,
        ),
        (
            "fe-mg-diopside",
            Diffusivities::builder("Fe-Mg interdiffusion\nDimanov & Wiedenbeck 2006")
                .celsius(Z, dimanov_celsius)
                .log_d(
                    Z,
                    log_d_cm2(&[
                        -16.6649, -14.9891, -14.5297, -14.6098, -15.0794, -15.6405, -15.9297,
                        -15.8744, -16.139, -15.224, -16.0353, -14.1226,
                    ]),
                )
                .style(style! {
                    "color" => "green", "marker" => "o", "linestyle" => "none",
                    "fillstyle" => "right", "alpha" => 0.5,
                })
                .build()?,
        ),
        (
            "mn-mg-diopside",
            Diffusivities::builder("Mn-Mg interdiffusion\nDimanov & Wiedenbeck 2006")
                .celsius(Z, dimanov_celsius)
                .log_d(
                    Z,
                    log_d_cm2(&[
                        -16.6923, -15.0946, -14.8291, -14.8714, -15.223, -15.711, -15.9744,
                        -16.0584, -16.2665, -15.8388, -16.2668, -14.3497,
                    ]),
                )
                .style(style! {
                    "color" => "yellow", "marker" => "o", "linestyle" => "none",
                    "fillstyle" => "right", "alpha" => 0.5,
                })
                .build()?,
        ),
        (
            "fe-mn-mg-diopside",
            Diffusivities::builder("(Fe,Mn)Mg interdiffusion in di.\nDimanov & Wiedenbeck 2006")
                .celsius(Z, dimanov_celsius)
                .log_d(
                    Z,
                    log_d_cm2(&[
                        -16.6784, -15.0387, -14.6541, -14.7212, -15.1453, -15.6743, -15.9515,
                        -15.9567, -16.1981, -15.4307, -16.1358, -14.2215,
                    ]),
                )
                .style(style! {
                    "color" => "g", "marker" => "s", "linestyle" => "none",
                    "fillstyle" => "right", "alpha" => 0.5,
                })
                .build()?,
        ),
        (
            "ti-diopside",
            Diffusivities::builder("Ti in diopside\nCherniak & Liang 2012")
                .celsius(
                    Z,
                    [
                        1250.0, 1200.0, 1200.0, 1151.0, 1102.0, 1102.0, 1090.0, 1052.0, 999.0,
                        1000.0, 952.0, 954.0, 905.0, 905.0,
                    ],
                )
                .log_d(
                    Z,
                    [
                        -19.89, -19.90, -20.25, -20.43, -20.98, -20.92, -21.41, -21.05, -21.43,
                        -21.58, -22.22, -22.27, -22.24, -22.77,
                    ],
                )
                .style(tracer_style("b"))
                .build()?,
        ),
        (
            "he-cpx",
            Diffusivities::builder("He in cpx\nTrull & Kurz 1993")
                .celsius(
                    Unoriented,
                    [
                        965.0, 965.0, 965.0, 965.0, 1070.0, 1070.0, 1070.0, 1070.0, 1170.0, 1170.0,
                        1170.0, 1170.0, 1170.0,
                    ],
                )
                .log_d(
                    Unoriented,
                    log_d_cm2(&log_d_of(&[
                        1.26e-10, 1.34e-10, 1.32e-10, 1.17e-10, 7.24e-10, 9.29e-10, 8.04e-10,
                        6.52e-10, 1.47e-8, 1.48e-8, 9.19e-9, 5.06e-9, 4.12e-9,
                    ])),
                )
                .style(style! {
                    "color" => "lawngreen", "marker" => "$\\spadesuit$", "linestyle" => "none",
                    "markersize" => 10, "fillstyle" => "full", "alpha" => 1.0,
                })
                .build()?,
        ),
        (
            "li-cpx-interstitial",
            Diffusivities::builder("Li in cpx as interstitial\nRichter et al. 2014")
                .celsius(Unoriented, vec![900.0; 8])
                .diffusivity(
                    Unoriented,
                    &[9.2e-10, 1.6e-9, 1.6e-9, 3.3e-8, 3.7e-8, 1.2e-8, 4.6e-10, 6.4e-12],
                )
                .style(style! {
                    "color" => "darkorchid", "marker" => "+", "linestyle" => "none",
                    "markersize" => 10, "alpha" => 1.0,
                })
                .build()?,
        ),
        (
            "li-cpx-effective",
            Diffusivities::builder("effective Li in cpx\nRichter et al. 2014")
                .celsius(Unoriented, vec![900.0; 4])
                .diffusivity(Unoriented, &[1.8e-10, 2.6e-10, 2.5e-9, 2.1e-9])
                .style(style! {
                    "color" => "darkorchid", "marker" => "+", "linestyle" => "none",
                    "mew" => 3, "markersize" => 10, "alpha" => 1.0,
                })
                .build()?,
        ),
    ])
}

/// Kunlun diopside H diffusivities at 1000 °C (log10 m²/s) from whole-block
/// and slice profiles, labelled K5 in the whole-block study.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KunlunProfiles {
    /// Whole-block fit along x
    pub dx_whole_block: Uncertain,
    /// Whole-block fit along y
    pub dy_whole_block: Uncertain,
    /// Whole-block fit along z
    pub dz_whole_block: Uncertain,
    /// Slice profile along y, measured by FTIR
    pub dy_slice_ftir: Uncertain,
    /// Slice profile along z, measured by FTIR
    pub dz_slice_ftir: Uncertain,
    /// Slice profile along y, measured by SIMS
    pub dy_slice_sims: Uncertain,
    /// Slice profile along z, measured by SIMS
    pub dz_slice_sims: Uncertain,
}

impl KunlunProfiles {
    /// Published values
    pub const fn published() -> Self {
        Self {
            dx_whole_block: Uncertain::new(-13.2, 0.2),
            dy_whole_block: Uncertain::new(-13.4, 0.2),
            dz_whole_block: Uncertain::new(-13.6, 0.3),
            dy_slice_ftir: Uncertain::new(-13.1, 0.3),
            dz_slice_ftir: Uncertain::new(-13.1, 0.2),
            dy_slice_sims: Uncertain::new(-13.3, 0.4),
            dz_slice_sims: Uncertain::new(-13.2, 0.4),
        }
    }

    /// Mean of the FTIR slice, SIMS slice and whole-block values along y
    pub fn dy_average(&self) -> Uncertain {
        mean3(self.dy_slice_ftir, self.dy_slice_sims, self.dy_whole_block)
    }

    /// Mean of the FTIR slice, SIMS slice and whole-block values along z
    pub fn dz_average(&self) -> Uncertain {
        mean3(self.dz_slice_ftir, self.dz_slice_sims, self.dz_whole_block)
    }
}

fn mean3(a: Uncertain, b: Uncertain, c: Uncertain) -> Uncertain {
    Uncertain::mean(&[a, b, c]).unwrap_or(a)
}
