use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source/probe pair with unit normals, away from the degenerate configurations.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub source: Vector3<f64>,
    pub probe: Vector3<f64>,
    pub source_normal: Vector3<f64>,
    pub probe_normal: Vector3<f64>,
}

impl Sample {
    pub fn source_array(&self) -> [f64; 3] {
        [self.source.x, self.source.y, self.source.z]
    }

    pub fn probe_array(&self) -> [f64; 3] {
        [self.probe.x, self.probe.y, self.probe.z]
    }

    pub fn distance(&self) -> f64 {
        (self.source - self.probe).norm()
    }

    /// Magnitude of the individual terms of the ionic liquid hessian, used as absolute
    /// tolerance scale where the terms cancel.
    pub fn hessian_scale(&self, permittivity: f64, kappa: f64) -> f64 {
        let r = self.distance();
        let kr = kappa * r;
        (4.0 + 4.0 * kr + kr * kr) * (-kr).exp() / (permittivity * r.powi(3))
    }
}

fn random_vector(rng: &mut StdRng) -> Vector3<f64> {
    Vector3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
}

/// Points in the unit cube with normals `(point + noise).normalize()`.
///
/// Pairs closer than 0.2 bohr, and normals nearly orthogonal to the separation, are
/// rejected so that relative comparisons of directional derivatives stay meaningful.
pub fn random_samples(seed: u64, count: usize) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(count);
    while samples.len() < count {
        let source = random_vector(&mut rng);
        let source_normal = (source + random_vector(&mut rng)).normalize();
        let probe = random_vector(&mut rng);
        let probe_normal = (probe + random_vector(&mut rng)).normalize();

        let d = source - probe;
        let r = d.norm();
        if r < 0.2 || !source_normal.norm().is_finite() || !probe_normal.norm().is_finite() {
            continue;
        }
        let unit = d / r;
        if unit.dot(&source_normal).abs() < 0.1 || unit.dot(&probe_normal).abs() < 0.1 {
            continue;
        }
        samples.push(Sample {
            source,
            probe,
            source_normal,
            probe_normal,
        });
    }
    samples
}

/// Value, probe derivative, source derivative and hessian of the ionic liquid kernel,
/// written out independently of the kernel implementation.
pub fn ionic_reference(
    eps: f64,
    k: f64,
    sp_normal: &Vector3<f64>,
    sp: &Vector3<f64>,
    pp_normal: &Vector3<f64>,
    pp: &Vector3<f64>,
) -> [f64; 4] {
    let distance = (sp - pp).norm();
    let distance_3 = distance.powf(3.0);
    let distance_5 = distance.powf(5.0);
    let screening = (-k * distance).exp();

    let value = screening / (eps * distance);
    let der_probe = (sp - pp).dot(pp_normal) * (1.0 + k * distance) * screening / (eps * distance_3);
    let der_source =
        -(sp - pp).dot(sp_normal) * (1.0 + k * distance) * screening / (eps * distance_3);
    let hessian = sp_normal.dot(pp_normal) * (1.0 + k * distance) * screening / (eps * distance_3)
        - k.powf(2.0) * (sp - pp).dot(sp_normal) * (sp - pp).dot(pp_normal) * screening
            / (eps * distance_3)
        - 3.0 * (sp - pp).dot(sp_normal) * (sp - pp).dot(pp_normal) * (1.0 + k * distance)
            * screening
            / (eps * distance_5);

    [value, der_probe, der_source, hessian]
}
