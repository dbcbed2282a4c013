//! Built-in reference records.
//!
//! Values are representative of public type-certificate and ICAO engine
//! emissions databank figures; they are meant for examples and tests, not
//! for operational use.

use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{Angle, Area, Force, Length, Mass, MassRate, Ratio},
    force::kilonewton,
    length::{foot, kilometer, meter},
    mass::kilogram,
    mass_rate::kilogram_per_second,
    ratio::per_mille,
};

use super::{
    AircraftSpec, Catalog, CleanPolar, CruisePoint, DEFAULT_FUEL_ALTITUDE_COEFFICIENT, DragPolar,
    EngineCruise, EngineInstallation, EngineMount, EngineSpec, FlapPolar, FuelCurve, Lto,
    MassLimits, RecordError, Wing, WrapParameter,
};

pub(super) fn catalog() -> Catalog {
    build().expect("reference records satisfy catalog constraints")
}

fn build() -> Result<Catalog, RecordError> {
    let mut catalog = Catalog::new(FuelCurve {
        c1: 1.1,
        c2: 1.8,
        c3: 0.3,
        reference_engine: None,
    });

    for engine in engines() {
        catalog.insert_engine(engine)?;
    }

    catalog.insert_aircraft(AircraftSpec {
        code: "A320".to_owned(),
        name: "Airbus A320".to_owned(),
        wing: wing(122.6, 34.1, 4.29, 25.0, Some(0.12)),
        limits: limits(78_000.0, 66_000.0, 42_600.0, 19_000.0),
        cruise: Some(cruise(11_000.0, 0.78, Some(6_100.0))),
        engine: Some(EngineInstallation {
            mount: EngineMount::Wing,
            count: 2,
            default: Some("CFM56-5B4".to_owned()),
            options: vec!["CFM56-5".to_owned(), "V25".to_owned()],
        }),
    })?;
    catalog.insert_drag_polar("A320", polar(0.018, 0.042, 0.8, 0.9, 0.3, 0.6))?;
    catalog.insert_fuel_curve(
        "A320",
        FuelCurve {
            c1: 2.45,
            c2: 1.9,
            c3: 0.25,
            reference_engine: Some("CFM56-5B4".to_owned()),
        },
    )?;
    catalog.insert_synonym("A20N", "A320")?;

    catalog.insert_aircraft(AircraftSpec {
        code: "A319".to_owned(),
        name: "Airbus A319".to_owned(),
        wing: wing(122.6, 34.1, 4.29, 25.0, Some(0.12)),
        limits: limits(75_500.0, 62_500.0, 40_800.0, 19_000.0),
        cruise: Some(cruise(11_000.0, 0.78, Some(6_900.0))),
        engine: Some(EngineInstallation {
            mount: EngineMount::Wing,
            count: 2,
            default: Some("CFM56-5B6".to_owned()),
            options: vec!["CFM56-5".to_owned(), "V25".to_owned()],
        }),
    })?;
    catalog.insert_drag_polar("A319", polar(0.0185, 0.042, 0.8, 0.9, 0.3, 0.6))?;
    catalog.insert_synonym("A19N", "A319")?;

    catalog.insert_aircraft(AircraftSpec {
        code: "B738".to_owned(),
        name: "Boeing 737-800".to_owned(),
        wing: wing(124.6, 34.3, 3.96, 25.02, None),
        limits: limits(79_016.0, 66_361.0, 41_413.0, 20_894.0),
        cruise: Some(cruise(10_700.0, 0.785, Some(5_400.0))),
        engine: Some(EngineInstallation {
            mount: EngineMount::Wing,
            count: 2,
            default: Some("CFM56-7B26".to_owned()),
            options: vec!["CFM56-7".to_owned()],
        }),
    })?;
    catalog.insert_drag_polar("B738", polar(0.019, 0.0427, 0.79, 0.85, 0.28, 0.55))?;
    catalog.insert_fuel_curve(
        "B738",
        FuelCurve {
            c1: 2.6,
            c2: 1.85,
            c3: 0.27,
            reference_engine: Some("CFM56-7B26".to_owned()),
        },
    )?;
    catalog.insert_synonym("B739", "B738")?;

    catalog.insert_aircraft(AircraftSpec {
        code: "CRJ9".to_owned(),
        name: "Bombardier CRJ-900".to_owned(),
        wing: wing(71.1, 24.9, 3.1, 26.5, Some(0.11)),
        limits: limits(38_330.0, 34_065.0, 21_845.0, 8_800.0),
        cruise: Some(cruise(11_000.0, 0.78, Some(2_900.0))),
        engine: Some(EngineInstallation {
            mount: EngineMount::Rear,
            count: 2,
            default: Some("CF34-8C5".to_owned()),
            options: vec!["CF34-8C".to_owned()],
        }),
    })?;
    catalog.insert_drag_polar("CRJ9", polar(0.021, 0.0468, 0.78, 0.9, 0.3, 0.55))?;

    for (variable, parameter) in a320_wrap() {
        catalog.insert_wrap_parameter("A320", variable, parameter)?;
    }

    Ok(catalog)
}

fn engines() -> Vec<EngineSpec> {
    vec![
        EngineSpec {
            name: "CFM56-5B4".to_owned(),
            bypass_ratio: 5.9,
            max_thrust: Force::new::<kilonewton>(120.1),
            cruise: Some(EngineCruise {
                thrust: Force::new::<kilonewton>(25.0),
                mach: 0.8,
                altitude: Length::new::<foot>(35_000.0),
            }),
            fuel_flow: fuel_flow(0.104, 0.291, 0.902, 1.104),
            ei_nox: ei(4.6, 9.9, 21.4, 26.9),
            ei_co: ei(31.2, 2.4, 0.6, 0.5),
            ei_hc: ei(4.2, 0.1, 0.05, 0.04),
            fuel_altitude_coefficient: DEFAULT_FUEL_ALTITUDE_COEFFICIENT,
        },
        EngineSpec {
            name: "CFM56-5B6".to_owned(),
            bypass_ratio: 6.0,
            max_thrust: Force::new::<kilonewton>(104.5),
            cruise: None,
            fuel_flow: fuel_flow(0.094, 0.26, 0.778, 0.936),
            ei_nox: ei(4.2, 8.9, 18.6, 22.5),
            ei_co: ei(34.0, 2.6, 0.7, 0.6),
            ei_hc: ei(5.0, 0.12, 0.06, 0.05),
            fuel_altitude_coefficient: DEFAULT_FUEL_ALTITUDE_COEFFICIENT,
        },
        EngineSpec {
            name: "V2527-A5".to_owned(),
            bypass_ratio: 4.8,
            max_thrust: Force::new::<kilonewton>(111.2),
            cruise: Some(EngineCruise {
                thrust: Force::new::<kilonewton>(22.2),
                mach: 0.78,
                altitude: Length::new::<foot>(35_000.0),
            }),
            fuel_flow: fuel_flow(0.114, 0.326, 0.949, 1.153),
            ei_nox: ei(5.6, 11.2, 26.3, 32.2),
            ei_co: ei(18.0, 2.0, 0.2, 0.15),
            ei_hc: ei(0.8, 0.08, 0.06, 0.06),
            fuel_altitude_coefficient: DEFAULT_FUEL_ALTITUDE_COEFFICIENT,
        },
        EngineSpec {
            name: "CFM56-7B26".to_owned(),
            bypass_ratio: 5.1,
            max_thrust: Force::new::<kilonewton>(117.0),
            cruise: Some(EngineCruise {
                thrust: Force::new::<kilonewton>(24.0),
                mach: 0.79,
                altitude: Length::new::<foot>(35_000.0),
            }),
            fuel_flow: fuel_flow(0.105, 0.31, 0.98, 1.19),
            ei_nox: ei(4.4, 10.1, 22.8, 28.7),
            ei_co: ei(29.0, 2.6, 0.5, 0.4),
            ei_hc: ei(2.8, 0.08, 0.05, 0.04),
            fuel_altitude_coefficient: DEFAULT_FUEL_ALTITUDE_COEFFICIENT,
        },
        EngineSpec {
            name: "CF34-8C5".to_owned(),
            bypass_ratio: 5.0,
            max_thrust: Force::new::<kilonewton>(64.5),
            cruise: None,
            fuel_flow: fuel_flow(0.053, 0.148, 0.448, 0.548),
            ei_nox: ei(4.0, 8.2, 16.9, 20.8),
            ei_co: ei(38.0, 4.1, 0.6, 0.5),
            ei_hc: ei(3.3, 0.2, 0.06, 0.05),
            fuel_altitude_coefficient: DEFAULT_FUEL_ALTITUDE_COEFFICIENT,
        },
    ]
}

fn a320_wrap() -> Vec<(&'static str, WrapParameter)> {
    let norm = |optimum: f64, minimum: f64, maximum: f64, scale: f64| WrapParameter {
        optimum,
        minimum,
        maximum,
        model: "norm".to_owned(),
        parameters: vec![optimum, scale],
    };

    vec![
        ("to_v_lof", norm(83.2, 73.0, 93.5, 6.2)),
        ("ic_va_avg", norm(79.5, 71.0, 88.0, 5.1)),
        ("cr_v_mach_mean", norm(0.78, 0.75, 0.8, 0.012)),
        ("de_h_cas_const", norm(8.9, 5.7, 12.1, 1.9)),
    ]
}

fn wing(area: f64, span: f64, mean_chord: f64, sweep: f64, thickness_to_chord: Option<f64>) -> Wing {
    Wing {
        area: Area::new::<square_meter>(area),
        span: Length::new::<meter>(span),
        mean_chord: Length::new::<meter>(mean_chord),
        sweep: Angle::new::<degree>(sweep),
        thickness_to_chord,
    }
}

fn limits(mtow: f64, mlw: f64, oew: f64, max_fuel: f64) -> MassLimits {
    MassLimits {
        mtow: Mass::new::<kilogram>(mtow),
        mlw: Mass::new::<kilogram>(mlw),
        oew: Mass::new::<kilogram>(oew),
        max_fuel: Mass::new::<kilogram>(max_fuel),
    }
}

fn cruise(height_m: f64, mach: f64, range_km: Option<f64>) -> CruisePoint {
    CruisePoint {
        height: Length::new::<meter>(height_m),
        mach,
        range: range_km.map(Length::new::<kilometer>),
    }
}

fn polar(cd0: f64, k: f64, e: f64, lambda_f: f64, cf_c: f64, sf_s: f64) -> DragPolar {
    DragPolar {
        clean: CleanPolar { cd0, k, e },
        flaps: FlapPolar {
            lambda_f,
            cf_c,
            sf_s,
        },
    }
}

fn fuel_flow(idle: f64, approach: f64, climb_out: f64, takeoff: f64) -> Lto<MassRate> {
    Lto {
        idle,
        approach,
        climb_out,
        takeoff,
    }
    .map(MassRate::new::<kilogram_per_second>)
}

fn ei(idle: f64, approach: f64, climb_out: f64, takeoff: f64) -> Lto<Ratio> {
    Lto {
        idle,
        approach,
        climb_out,
        takeoff,
    }
    .map(Ratio::new::<per_mille>)
}
