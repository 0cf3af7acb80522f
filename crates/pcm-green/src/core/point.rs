use nalgebra::Vector3;

/// A location at which a Green's function is evaluated, either as source or as probe.
///
/// The normal, when present, is the outward unit normal of the cavity surface at this
/// point and is normalized on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationPoint {
    /// Cartesian coordinates, in bohr.
    pub position: Vector3<f64>,
    /// Outward unit normal, if the point lies on a surface.
    pub normal: Option<Vector3<f64>>,
}

impl EvaluationPoint {
    pub fn new(position: Vector3<f64>) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    pub fn with_normal(position: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            normal: Some(normal.normalize()),
        }
    }

    #[inline]
    pub fn distance(&self, other: &EvaluationPoint) -> f64 {
        (self.position - other.position).norm()
    }
}

impl From<Vector3<f64>> for EvaluationPoint {
    fn from(position: Vector3<f64>) -> Self {
        Self::new(position)
    }
}

#[inline]
pub(crate) fn to_array(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}
