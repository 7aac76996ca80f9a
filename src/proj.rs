//! RD (EPSG:28992) map projection
//!
//! Forward-projects WGS84 geographic coordinates onto the Dutch
//! Rijksdriehoek planar grid and back. The datum pipeline is the classic
//! double projection: geodetic WGS84 -> geocentric -> seven-parameter
//! Helmert shift -> Bessel geodetic -> Gauss conformal sphere -> oblique
//! stereographic plane, with a scale factor and false origin applied at
//! the end.
//!
//! The projection is pure and stateless; all derived constants are
//! computed once at first use. Out-of-range coordinates are not validated,
//! they simply project to whatever the formulas yield.

use crate::types::Point;
use once_cell::sync::Lazy;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// WGS84 semi-major axis (m)
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// Bessel 1841 semi-major axis (m)
const BESSEL_A: f64 = 6_377_397.155;
/// Bessel 1841 flattening
const BESSEL_F: f64 = 1.0 / 299.152_812_8;

/// Projection origin latitude (degrees, on Bessel)
const LAT_0: f64 = 52.156_160_555_555_55;
/// Projection origin longitude (degrees, on Bessel)
const LON_0: f64 = 5.387_638_888_888_89;
/// Scale factor at the origin
const K_0: f64 = 0.999_907_9;
/// False easting (m)
const FALSE_EASTING: f64 = 155_000.0;
/// False northing (m)
const FALSE_NORTHING: f64 = 463_000.0;

/// Seven-parameter Helmert shift, Bessel/RD -> WGS84
/// (position-vector convention; rotations in arcseconds, scale in ppm)
const HELMERT: Helmert = Helmert {
    dx: 565.417,
    dy: 50.331_9,
    dz: 465.552,
    rx: -0.398_957,
    ry: 0.343_988,
    rz: -1.877_4,
    ppm: 4.072_5,
};

const SEC_TO_RAD: f64 = PI / (180.0 * 3600.0);
const MAX_ITER: usize = 20;
const ITER_TOL: f64 = 1e-14;

/// Project a WGS84 coordinate (degrees) to RD planar meters.
pub fn wgs84_to_rd(latitude: f64, longitude: f64) -> Point {
    RD.forward(latitude, longitude)
}

/// Inverse-project an RD planar coordinate (meters) back to WGS84 degrees,
/// returned as (latitude, longitude).
pub fn rd_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    RD.inverse(x, y)
}

#[derive(Debug, Clone, Copy)]
struct Helmert {
    dx: f64,
    dy: f64,
    dz: f64,
    rx: f64,
    ry: f64,
    rz: f64,
    ppm: f64,
}

impl Helmert {
    /// Apply the shift (source -> target datum) to geocentric coordinates
    fn forward(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let m = 1.0 + self.ppm * 1e-6;
        let rx = self.rx * SEC_TO_RAD;
        let ry = self.ry * SEC_TO_RAD;
        let rz = self.rz * SEC_TO_RAD;
        (
            m * (x - rz * y + ry * z) + self.dx,
            m * (rz * x + y - rx * z) + self.dy,
            m * (-ry * x + rx * y + z) + self.dz,
        )
    }

    /// Apply the inverse shift (target -> source datum)
    fn inverse(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let m = 1.0 + self.ppm * 1e-6;
        let rx = self.rx * SEC_TO_RAD;
        let ry = self.ry * SEC_TO_RAD;
        let rz = self.rz * SEC_TO_RAD;
        let xt = (x - self.dx) / m;
        let yt = (y - self.dy) / m;
        let zt = (z - self.dz) / m;
        (
            xt + rz * yt - ry * zt,
            -rz * xt + yt + rx * zt,
            ry * xt - rx * yt + zt,
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Ellipsoid {
    a: f64,
    /// First eccentricity squared
    es: f64,
    /// First eccentricity
    e: f64,
}

impl Ellipsoid {
    fn new(a: f64, f: f64) -> Self {
        let es = f * (2.0 - f);
        Ellipsoid { a, es, e: es.sqrt() }
    }

    /// Geodetic (radians, ellipsoidal height) to geocentric XYZ
    fn geodetic_to_geocentric(&self, phi: f64, lam: f64, h: f64) -> (f64, f64, f64) {
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let n = self.a / (1.0 - self.es * sin_phi * sin_phi).sqrt();
        (
            (n + h) * cos_phi * lam.cos(),
            (n + h) * cos_phi * lam.sin(),
            (n * (1.0 - self.es) + h) * sin_phi,
        )
    }

    /// Geocentric XYZ to geodetic (radians, ellipsoidal height)
    fn geocentric_to_geodetic(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let p = x.hypot(y);
        if p < 1e-9 {
            // On the polar axis
            let phi = if z >= 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
            let b = self.a * (1.0 - self.es).sqrt();
            return (phi, 0.0, z.abs() - b);
        }
        let lam = y.atan2(x);
        let mut phi = z.atan2(p * (1.0 - self.es));
        for _ in 0..MAX_ITER {
            let sin_phi = phi.sin();
            let n = self.a / (1.0 - self.es * sin_phi * sin_phi).sqrt();
            let next = (z + self.es * n * sin_phi).atan2(p);
            if (next - phi).abs() < ITER_TOL {
                phi = next;
                break;
            }
            phi = next;
        }
        let sin_phi = phi.sin();
        let n = self.a / (1.0 - self.es * sin_phi * sin_phi).sqrt();
        let h = p / phi.cos() - n;
        (phi, lam, h)
    }
}

/// Precomputed constants of the Gauss conformal sphere mapping
#[derive(Debug, Clone, Copy)]
struct Gauss {
    c: f64,
    k: f64,
    ratexp: f64,
    /// Conformal latitude of the projection origin
    chi0: f64,
    /// Radius of the conformal sphere (in units of a)
    rc: f64,
}

fn srat(esinp: f64, exp: f64) -> f64 {
    ((1.0 - esinp) / (1.0 + esinp)).powf(exp)
}

impl Gauss {
    fn new(ell: &Ellipsoid, phi0: f64) -> Self {
        let sphi = phi0.sin();
        let cphi2 = phi0.cos() * phi0.cos();
        let rc = (1.0 - ell.es).sqrt() / (1.0 - ell.es * sphi * sphi);
        let c = (1.0 + ell.es * cphi2 * cphi2 / (1.0 - ell.es)).sqrt();
        let chi0 = (sphi / c).asin();
        let ratexp = 0.5 * c * ell.e;
        let k = (0.5 * chi0 + FRAC_PI_4).tan()
            / ((0.5 * phi0 + FRAC_PI_4).tan().powf(c) * srat(ell.e * sphi, ratexp));
        Gauss { c, k, ratexp, chi0, rc }
    }

    /// Ellipsoid (phi, lam) -> conformal sphere (chi, lam)
    fn forward(&self, ell: &Ellipsoid, phi: f64, lam: f64) -> (f64, f64) {
        let chi = 2.0
            * (self.k
                * (0.5 * phi + FRAC_PI_4).tan().powf(self.c)
                * srat(ell.e * phi.sin(), self.ratexp))
            .atan()
            - FRAC_PI_2;
        (chi, self.c * lam)
    }

    /// Conformal sphere (chi, lam) -> ellipsoid (phi, lam)
    fn inverse(&self, ell: &Ellipsoid, chi: f64, lam: f64) -> (f64, f64) {
        let lam_out = lam / self.c;
        let num = ((0.5 * chi + FRAC_PI_4).tan() / self.k).powf(1.0 / self.c);
        let mut phi = chi;
        for _ in 0..MAX_ITER {
            let next = 2.0 * (num * srat(ell.e * phi.sin(), -0.5 * ell.e)).atan() - FRAC_PI_2;
            if (next - phi).abs() < ITER_TOL {
                phi = next;
                break;
            }
            phi = next;
        }
        (phi, lam_out)
    }
}

/// The fully assembled RD projection
struct RdProjection {
    wgs84: Ellipsoid,
    bessel: Ellipsoid,
    gauss: Gauss,
    sinc0: f64,
    cosc0: f64,
    /// Twice the conformal sphere radius (in units of a)
    r2: f64,
    lam0: f64,
}

static RD: Lazy<RdProjection> = Lazy::new(RdProjection::new);

impl RdProjection {
    fn new() -> Self {
        let bessel = Ellipsoid::new(BESSEL_A, BESSEL_F);
        let gauss = Gauss::new(&bessel, LAT_0.to_radians());
        RdProjection {
            wgs84: Ellipsoid::new(WGS84_A, WGS84_F),
            sinc0: gauss.chi0.sin(),
            cosc0: gauss.chi0.cos(),
            r2: 2.0 * gauss.rc,
            lam0: LON_0.to_radians(),
            bessel,
            gauss,
        }
    }

    /// WGS84 degrees -> RD meters
    fn forward(&self, latitude: f64, longitude: f64) -> Point {
        let (phi, lam) = self.datum_to_bessel(latitude.to_radians(), longitude.to_radians());
        let (chi, lam_g) = self.gauss.forward(&self.bessel, phi, lam - self.lam0);

        let sinc = chi.sin();
        let cosc = chi.cos();
        let cosl = lam_g.cos();
        let k = K_0 * self.r2 / (1.0 + self.sinc0 * sinc + self.cosc0 * cosc * cosl);
        let x = k * cosc * lam_g.sin();
        let y = k * (self.cosc0 * sinc - self.sinc0 * cosc * cosl);

        Point::new(
            FALSE_EASTING + self.bessel.a * x,
            FALSE_NORTHING + self.bessel.a * y,
        )
    }

    /// RD meters -> WGS84 degrees, as (latitude, longitude)
    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let xn = (x - FALSE_EASTING) / self.bessel.a / K_0;
        let yn = (y - FALSE_NORTHING) / self.bessel.a / K_0;

        let rho = xn.hypot(yn);
        let (chi, lam_g) = if rho == 0.0 {
            (self.gauss.chi0, 0.0)
        } else {
            let c = 2.0 * rho.atan2(self.r2);
            let sinc = c.sin();
            let cosc = c.cos();
            let chi = (cosc * self.sinc0 + yn * sinc * self.cosc0 / rho).asin();
            let lam_g = (xn * sinc).atan2(rho * self.cosc0 * cosc - yn * self.sinc0 * sinc);
            (chi, lam_g)
        };
        let (phi, lam) = self.gauss.inverse(&self.bessel, chi, lam_g);
        let (lat, lon) = self.datum_to_wgs84(phi, lam + self.lam0);
        (lat.to_degrees(), lon.to_degrees())
    }

    /// WGS84 geodetic radians -> Bessel geodetic radians
    fn datum_to_bessel(&self, phi: f64, lam: f64) -> (f64, f64) {
        let (x, y, z) = self.wgs84.geodetic_to_geocentric(phi, lam, 0.0);
        let (x, y, z) = HELMERT.inverse(x, y, z);
        let (phi, lam, _h) = self.bessel.geocentric_to_geodetic(x, y, z);
        (phi, lam)
    }

    /// Bessel geodetic radians -> WGS84 geodetic radians
    fn datum_to_wgs84(&self, phi: f64, lam: f64) -> (f64, f64) {
        let (x, y, z) = self.bessel.geodetic_to_geocentric(phi, lam, 0.0);
        let (x, y, z) = HELMERT.forward(x, y, z);
        let (phi, lam, _h) = self.wgs84.geocentric_to_geodetic(x, y, z);
        (phi, lam)
    }
}
