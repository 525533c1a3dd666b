//! 2D affine transformation type.

use super::Point2;
use num_traits::Float;

/// A 2D affine transformation matrix.
///
/// Represented as a 2x3 matrix in row-major order:
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// ```
///
/// Points map as `(x, y) → (a·x + b·y + tx, c·x + d·y + ty)`.
///
/// Transforms are built fresh for each editing operation and applied
/// once; they are never cached or composed across operations.
///
/// # Example
///
/// ```
/// use planigon::primitives::{Affine2, Point2};
///
/// // Rotate 90 degrees around (1, 1)
/// let t: Affine2<f64> = Affine2::rotation_around(90.0_f64.to_radians(), Point2::new(1.0, 1.0));
/// let p = t.apply_point(Point2::new(2.0, 1.0));
/// assert!((p.x - 1.0).abs() < 1e-10 && (p.y - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2<F> {
    /// Matrix element [0,0] - x scale / rotation component
    pub a: F,
    /// Matrix element [0,1] - x shear / rotation component
    pub b: F,
    /// Matrix element [1,0] - y shear / rotation component
    pub c: F,
    /// Matrix element [1,1] - y scale / rotation component
    pub d: F,
    /// Translation x component
    pub tx: F,
    /// Translation y component
    pub ty: F,
}

impl<F: Float> Affine2<F> {
    /// Creates a new affine transform from matrix components.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F, tx: F, ty: F) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Creates the identity transform (no change).
    #[inline]
    pub fn identity() -> Self {
        Self {
            a: F::one(),
            b: F::zero(),
            c: F::zero(),
            d: F::one(),
            tx: F::zero(),
            ty: F::zero(),
        }
    }

    /// Creates a translation transform.
    #[inline]
    pub fn translation(dx: F, dy: F) -> Self {
        Self {
            a: F::one(),
            b: F::zero(),
            c: F::zero(),
            d: F::one(),
            tx: dx,
            ty: dy,
        }
    }

    /// Creates a rotation transform around the origin.
    ///
    /// Angle is in radians, positive rotates counter-clockwise in a
    /// y-up coordinate system.
    #[inline]
    pub fn rotation(angle: F) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self {
            a: cos_a,
            b: -sin_a,
            c: sin_a,
            d: cos_a,
            tx: F::zero(),
            ty: F::zero(),
        }
    }

    /// Creates a rotation transform around a pivot point.
    ///
    /// Equivalent to translating the pivot to the origin, rotating,
    /// and translating back, folded into a single matrix.
    pub fn rotation_around(angle: F, pivot: Point2<F>) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self {
            a: cos_a,
            b: -sin_a,
            c: sin_a,
            d: cos_a,
            tx: pivot.x - pivot.x * cos_a + pivot.y * sin_a,
            ty: pivot.y - pivot.x * sin_a - pivot.y * cos_a,
        }
    }

    /// Creates a uniform scaling transform around the origin.
    #[inline]
    pub fn scale(factor: F) -> Self {
        Self {
            a: factor,
            b: F::zero(),
            c: F::zero(),
            d: factor,
            tx: F::zero(),
            ty: F::zero(),
        }
    }

    /// Creates a uniform scaling transform around a pivot point.
    ///
    /// The factor is taken as-is: values below 1 shrink, above 1 grow,
    /// 0 collapses everything onto the pivot, negative values mirror.
    pub fn scale_around(factor: F, pivot: Point2<F>) -> Self {
        Self {
            a: factor,
            b: F::zero(),
            c: F::zero(),
            d: factor,
            tx: pivot.x - pivot.x * factor,
            ty: pivot.y - pivot.y * factor,
        }
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn apply_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }

    /// Applies this transform to every point in a slice, in place.
    pub fn apply_points(&self, points: &mut [Point2<F>]) {
        for p in points.iter_mut() {
            *p = self.apply_point(*p);
        }
    }
}

impl<F: Float> Default for Affine2<F> {
    fn default() -> Self {
        Self::identity()
    }
}
