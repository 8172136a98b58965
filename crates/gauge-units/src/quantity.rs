//! Unit-tagged arrays.
//!
//! A [`Quantity`] is the value type every field evaluation produces: an
//! n-dimensional `f64` array plus the [`Unit`] its samples are expressed
//! in. Multiplication and division compose units; addition and
//! subtraction are dimension-checked and rescale the right operand into
//! the left operand's unit. The `try_*` methods check that the operand
//! shapes broadcast before touching the arrays.

use std::ops::{Div, Mul};

use ndarray::{ArrayD, IxDyn};

use crate::equivalence::{self, Equivalence};
use crate::error::UnitError;
use crate::unit::Unit;
use crate::Dimensions;

/// An array of samples tagged with a unit.
///
/// # Panics
///
/// The `*` and `/` operators between two quantities broadcast like
/// `ndarray` arithmetic and panic if the shapes cannot be broadcast
/// together. [`try_mul`](Self::try_mul) and [`try_div`](Self::try_div)
/// return [`UnitError::ShapeMismatch`] instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity {
    data: ArrayD<f64>,
    units: Unit,
}

impl Quantity {
    /// Wrap an array with its unit.
    pub fn new(data: ArrayD<f64>, units: Unit) -> Self {
        Self { data, units }
    }

    /// An array of the given shape filled with `value`.
    pub fn full(shape: &[usize], value: f64, units: Unit) -> Self {
        Self::new(ArrayD::from_elem(IxDyn(shape), value), units)
    }

    /// An array of the given shape filled with zeros.
    pub fn zeros(shape: &[usize], units: Unit) -> Self {
        Self::new(ArrayD::zeros(IxDyn(shape)), units)
    }

    /// A rank-0 quantity.
    pub fn scalar(value: f64, units: Unit) -> Self {
        Self::full(&[], value, units)
    }

    /// The sample array.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Consume the quantity and return its sample array.
    pub fn into_data(self) -> ArrayD<f64> {
        self.data
    }

    /// The unit samples are expressed in.
    pub fn units(&self) -> &Unit {
        &self.units
    }

    /// Dimensions of the unit.
    pub fn dims(&self) -> Dimensions {
        self.units.dims()
    }

    /// Array shape.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The first sample as a rank-0 quantity, or `None` if empty.
    ///
    /// Used for per-chunk constants such as uniform cell spacings.
    pub fn first(&self) -> Option<Quantity> {
        self.data
            .iter()
            .next()
            .map(|&v| Quantity::scalar(v, self.units.clone()))
    }

    /// The single sample of a one-element quantity.
    pub fn value(&self) -> Option<f64> {
        if self.data.len() == 1 {
            self.data.iter().next().copied()
        } else {
            None
        }
    }

    /// Rescale into another unit of the same dimensions.
    ///
    /// When the conversion factor is exactly 1 the samples are copied
    /// unchanged.
    pub fn in_units(&self, to: &Unit) -> Result<Quantity, UnitError> {
        self.clone().into_units(to)
    }

    /// Owned variant of [`in_units`](Self::in_units).
    pub fn into_units(self, to: &Unit) -> Result<Quantity, UnitError> {
        let factor = self.units.conversion_factor(to)?;
        let data = if factor == 1.0 {
            self.data
        } else {
            self.data.mapv_into(|v| v * factor)
        };
        Ok(Quantity::new(data, to.clone()))
    }

    /// Convert across unit conventions (Gaussian ↔ SI).
    ///
    /// Falls back to a plain rescale when `to` already has this quantity's
    /// dimensions.
    pub fn to_equivalent(&self, to: &Unit, equivalence: Equivalence) -> Result<Quantity, UnitError> {
        equivalence::convert(self, to, equivalence)
    }

    /// Element-wise square root; the unit exponents halve.
    pub fn sqrt(&self) -> Result<Quantity, UnitError> {
        let units = self.units.sqrt()?;
        Ok(Quantity::new(self.data.mapv(f64::sqrt), units))
    }

    /// Element-wise integer power.
    pub fn powi(&self, n: i32) -> Quantity {
        Quantity::new(self.data.mapv(|v| v.powi(n)), self.units.powi(n))
    }

    /// Dimension- and shape-checked sum, expressed in `self`'s unit.
    pub fn try_add(&self, rhs: &Quantity) -> Result<Quantity, UnitError> {
        self.check_broadcast(rhs)?;
        let rhs = rhs.in_units(&self.units)?;
        Ok(Quantity::new(&self.data + &rhs.data, self.units.clone()))
    }

    /// Dimension- and shape-checked difference, expressed in `self`'s unit.
    pub fn try_sub(&self, rhs: &Quantity) -> Result<Quantity, UnitError> {
        self.check_broadcast(rhs)?;
        let rhs = rhs.in_units(&self.units)?;
        Ok(Quantity::new(&self.data - &rhs.data, self.units.clone()))
    }

    /// Shape-checked product.
    pub fn try_mul(&self, rhs: &Quantity) -> Result<Quantity, UnitError> {
        self.check_broadcast(rhs)?;
        Ok(self * rhs)
    }

    /// Shape-checked quotient.
    pub fn try_div(&self, rhs: &Quantity) -> Result<Quantity, UnitError> {
        self.check_broadcast(rhs)?;
        Ok(self / rhs)
    }

    fn check_broadcast(&self, rhs: &Quantity) -> Result<(), UnitError> {
        match broadcast_shape(self.shape(), rhs.shape()) {
            Some(_) => Ok(()),
            None => Err(UnitError::ShapeMismatch {
                left: self.shape().to_vec(),
                right: rhs.shape().to_vec(),
            }),
        }
    }

    /// Same samples under a different unit, without rescaling.
    pub fn with_units(self, units: Unit) -> Quantity {
        Quantity::new(self.data, units)
    }
}

/// Shape two arrays broadcast to, aligning trailing axes; `None` if some
/// axis pair differs and neither is 1.
pub fn broadcast_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let rank = a.len().max(b.len());
    let axis = |s: &[usize], i: usize| (i + s.len()).checked_sub(rank).map_or(1, |j| s[j]);
    (0..rank)
        .map(|i| match (axis(a, i), axis(b, i)) {
            (x, y) if x == y => Some(x),
            (1, y) => Some(y),
            (x, 1) => Some(x),
            _ => None,
        })
        .collect()
}

impl Mul for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: &Quantity) -> Quantity {
        Quantity::new(&self.data * &rhs.data, self.units.multiply(&rhs.units))
    }
}

impl Div for &Quantity {
    type Output = Quantity;

    fn div(self, rhs: &Quantity) -> Quantity {
        Quantity::new(&self.data / &rhs.data, self.units.divide(&rhs.units))
    }
}

impl Mul<f64> for &Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(&self.data * rhs, self.units.clone())
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.data * rhs, self.units)
    }
}

impl Mul<&Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: &Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for &Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(&self.data / rhs, self.units.clone())
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.data / rhs, self.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn multiplication_composes_units() {
        let b = Quantity::full(&[2, 2], 3.0, Unit::GAUSS);
        let b2 = &b * &b;
        assert_eq!(b2.units(), &Unit::BARYE);
        assert!(b2.data().iter().all(|&v| v == 9.0));
    }

    #[test]
    fn division_by_scalar_quantity_broadcasts() {
        let b = Quantity::full(&[3, 3, 3], 6.0, Unit::GAUSS);
        let dx = Quantity::scalar(2.0, Unit::CENTIMETER);
        let q = &b / &dx;
        assert_eq!(q.shape(), &[3, 3, 3]);
        assert_eq!(q.dims(), Dimensions::MAGNETIC_FIELD_CGS / Dimensions::LENGTH);
        assert!(q.data().iter().all(|&v| v == 3.0));
    }

    #[test]
    fn addition_rejects_mismatched_dimensions() {
        let a = Quantity::scalar(1.0, Unit::GAUSS);
        let b = Quantity::scalar(1.0, Unit::TESLA);
        assert!(matches!(
            a.try_add(&b),
            Err(UnitError::IncompatibleDimensions { .. })
        ));
    }

    #[test]
    fn addition_rescales_rhs() {
        let a = Quantity::scalar(1.0, Unit::METER);
        let b = Quantity::scalar(50.0, Unit::CENTIMETER);
        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.units(), &Unit::METER);
        assert_relative_eq!(sum.value().unwrap(), 1.5);
    }

    #[test]
    fn mismatched_shapes_are_errors_not_panics() {
        let a = Quantity::full(&[2, 2, 2], 1.0, Unit::GAUSS);
        let b = Quantity::full(&[3, 3, 3], 1.0, Unit::GAUSS);
        let expected = UnitError::ShapeMismatch {
            left: vec![2, 2, 2],
            right: vec![3, 3, 3],
        };
        assert_eq!(a.try_add(&b).unwrap_err(), expected);
        assert_eq!(a.try_sub(&b).unwrap_err(), expected);
        assert_eq!(a.try_mul(&b).unwrap_err(), expected);
        assert_eq!(a.try_div(&b).unwrap_err(), expected);
    }

    #[test]
    fn scalars_and_unit_axes_broadcast() {
        assert_eq!(broadcast_shape(&[4, 3], &[]), Some(vec![4, 3]));
        assert_eq!(broadcast_shape(&[4, 1], &[3]), Some(vec![4, 3]));
        assert_eq!(broadcast_shape(&[2, 2, 2], &[3]), None);

        let b = Quantity::full(&[2, 3], 6.0, Unit::GAUSS);
        let dx = Quantity::scalar(2.0, Unit::CENTIMETER);
        let q = b.try_div(&dx).unwrap();
        assert_eq!(q.shape(), &[2, 3]);
        assert!(q.data().iter().all(|&v| v == 3.0));
    }

    #[test]
    fn same_unit_conversion_is_bit_exact() {
        let q = Quantity::full(&[4], 0.1 + 0.2, Unit::GAUSS);
        let same = q.in_units(&Unit::GAUSS).unwrap();
        assert_eq!(same.data(), q.data());
    }

    #[test]
    fn sqrt_halves_exponents() {
        let p = Quantity::scalar(25.0, Unit::BARYE);
        let b = p.sqrt().unwrap();
        assert_eq!(b.units(), &Unit::GAUSS);
        assert_eq!(b.value(), Some(5.0));
        assert!(b.sqrt().is_err());
    }

    #[test]
    fn first_extracts_leading_sample() {
        let q = Quantity::new(
            ArrayD::from_shape_vec(IxDyn(&[3]), vec![4.0, 5.0, 6.0]).unwrap(),
            Unit::CENTIMETER,
        );
        let head = q.first().unwrap();
        assert_eq!(head.shape(), &[] as &[usize]);
        assert_eq!(head.value(), Some(4.0));
        assert!(Quantity::zeros(&[0], Unit::CENTIMETER).first().is_none());
    }
}
