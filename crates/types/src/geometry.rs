//! Points, angles and rotations over exact coordinates.

use crate::error::GeometryError;
use crate::number::Surd;
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or displacement vector) in the plane with exact coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: Surd,
    pub y: Surd,
}

/// Segments are stored as the displacement between consecutive points.
pub type Vector = Point;

impl Point {
    pub fn new(x: Surd, y: Surd) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    pub fn from_integers(x: i64, y: i64) -> Self {
        Self::new(Surd::integer(x), Surd::integer(y))
    }

    /// Anisotropic scaling about the origin.
    pub fn scaled(&self, sx: &Surd, sy: &Surd) -> Point {
        Point::new(&self.x * sx, &self.y * sy)
    }

    /// Product of the two points read as complex numbers `x + iy`.
    ///
    /// Refinement rules use this to turn and shrink a segment in one step
    /// when the turn angle is not a multiple of π/6.
    pub fn complex_mul(&self, other: &Point) -> Point {
        Point::new(
            &self.x * &other.x - &self.y * &other.y,
            &self.x * &other.y + &self.y * &other.x,
        )
    }

    pub fn squared_length(&self) -> Surd {
        &self.x * &self.x + &self.y * &self.y
    }

    pub fn to_f64(&self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, rhs: &Point) -> Point {
        Point::new(&self.x + &rhs.x, &self.y + &rhs.y)
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        &self + &rhs
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    fn sub(self, rhs: &Point) -> Point {
        Point::new(&self.x - &rhs.x, &self.y - &rhs.y)
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        &self - &rhs
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-&self.x, -&self.y)
    }
}

impl Mul<&Surd> for &Point {
    type Output = Point;

    fn mul(self, factor: &Surd) -> Point {
        Point::new(&self.x * factor, &self.y * factor)
    }
}

const STEPS_PER_TURN: i64 = 12;

/// An angle that is an integer multiple of π/6.
///
/// These are exactly the angles whose sine and cosine lie in Q(√3), so every
/// rotation built from an `Angle` keeps coordinates exact. Angles wrap at a
/// full turn, which makes `a + b` the angle of the composed rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Angle {
    steps: u8,
}

impl Angle {
    pub const ZERO: Angle = Angle { steps: 0 };

    /// `steps · π/6`, reduced modulo 2π.
    pub fn from_steps(steps: i64) -> Self {
        Self {
            steps: steps.rem_euclid(STEPS_PER_TURN) as u8,
        }
    }

    /// The angle `numerator/denominator · π` radians.
    pub fn from_pi_ratio(numerator: i64, denominator: i64) -> Result<Self, GeometryError> {
        let unsupported = GeometryError::UnsupportedAngle {
            numerator,
            denominator,
        };
        if denominator == 0 {
            return Err(unsupported);
        }
        let sixths = i128::from(numerator) * 6;
        let denominator = i128::from(denominator);
        if sixths % denominator != 0 {
            return Err(unsupported);
        }
        let steps = (sixths / denominator).rem_euclid(i128::from(STEPS_PER_TURN));
        Ok(Self { steps: steps as u8 })
    }

    pub fn steps(self) -> u8 {
        self.steps
    }

    pub fn radians(self) -> f64 {
        f64::from(self.steps) * std::f64::consts::PI / 6.0
    }

    /// Exact `(cos θ, sin θ)`.
    pub fn cos_sin(self) -> (Surd, Surd) {
        let half = || Surd::ratio(1, 2);
        let half_sqrt3 = || Surd::sqrt3() * Surd::ratio(1, 2);
        let (cos, sin) = match self.steps % 6 {
            0 => (Surd::one(), Surd::zero()),
            1 => (half_sqrt3(), half()),
            2 => (half(), half_sqrt3()),
            3 => (Surd::zero(), Surd::one()),
            4 => (-half(), half_sqrt3()),
            _ => (-half_sqrt3(), half()),
        };
        if self.steps >= 6 { (-cos, -sin) } else { (cos, sin) }
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_steps(i64::from(self.steps) + i64::from(rhs.steps))
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_steps(i64::from(self.steps) - i64::from(rhs.steps))
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_steps(-i64::from(self.steps))
    }
}

/// The rotation matrix `[[c, -s], [s, c]]` for an exact angle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    cos: Surd,
    sin: Surd,
}

impl Rotation {
    pub fn new(theta: Angle) -> Self {
        let (cos, sin) = theta.cos_sin();
        Self { cos, sin }
    }

    /// The rotation as a unit complex number `cos + i·sin`.
    pub fn as_unit(&self) -> Point {
        Point::new(self.cos.clone(), self.sin.clone())
    }

    pub fn apply(&self, v: &Point) -> Point {
        Point::new(
            &self.cos * &v.x - &self.sin * &v.y,
            &self.sin * &v.x + &self.cos * &v.y,
        )
    }
}

impl From<Angle> for Rotation {
    fn from(theta: Angle) -> Self {
        Rotation::new(theta)
    }
}
