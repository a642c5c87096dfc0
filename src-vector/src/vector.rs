use std::fmt;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorError};

/// Fixed-length real vector
///
/// Operations never modify `self`: they return a new vector. The only in-place
/// mutation is [`Vector::edit`], meant for building a modified copy obtained
/// from [`Vector::duplicate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    /// Create a vector of length `len` filled with 0.0
    pub fn new(len: usize) -> Self {
        Self { data: Array1::zeros(len) }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data: Array1::from_vec(data) }
    }

    pub fn from_array(data: Array1<f64>) -> Self {
        Self { data }
    }

    /// Vector with entries `1, 2, ..., len`
    pub fn ascending(len: usize) -> Self {
        Self { data: Array1::from_shape_fn(len, |i| (i + 1) as f64) }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn into_array(self) -> Array1<f64> {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// Deep copy, safe to [`edit`](Vector::edit) while the original is still read
    pub fn duplicate(&self) -> Self {
        Self { data: self.data.to_owned() }
    }

    /// Entry at `index`
    pub fn at(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange { index, len: self.len() })
    }

    /// Overwrite the entry at `index`
    pub fn edit(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.len();
        match self.data.get_mut(index) {
            Some(entry) => {
                *entry = value;
                Ok(())
            }
            None => Err(VectorError::IndexOutOfRange { index, len }),
        }
    }

    fn check_len(&self, that: &Vector) -> Result<()> {
        if self.len() != that.len() {
            return Err(VectorError::DimensionMismatch { left: self.len(), right: that.len() });
        }
        Ok(())
    }

    /// `self + that`
    pub fn add(&self, that: &Vector) -> Result<Self> {
        self.check_len(that)?;
        Ok(Self { data: &self.data + &that.data })
    }

    /// `self - that`
    pub fn sub(&self, that: &Vector) -> Result<Self> {
        self.check_len(that)?;
        Ok(Self { data: &self.data - &that.data })
    }

    /// Element-wise (Hadamard) product
    pub fn prod(&self, that: &Vector) -> Result<Self> {
        self.check_len(that)?;
        Ok(Self { data: &self.data * &that.data })
    }

    pub fn dot(&self, that: &Vector) -> Result<f64> {
        self.check_len(that)?;
        Ok(self.data.dot(&that.data))
    }

    /// Euclidean distance between the two points
    pub fn distance(&self, that: &Vector) -> Result<f64> {
        self.check_len(that)?;
        Ok(self
            .data
            .iter()
            .zip(that.data.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt())
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.data.dot(&self.data).sqrt()
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self { data: &self.data * factor }
    }

    /// Add `offset` to every entry
    pub fn shift(&self, offset: f64) -> Self {
        Self { data: &self.data + offset }
    }

    pub fn pow(&self, exponent: i32) -> Self {
        self.map(|x| x.powi(exponent))
    }

    /// Integer-cast flooring: truncates toward zero (1.3 -> 1, 3.9 -> 3, -1.5 -> -1)
    pub fn floor(&self) -> Self {
        self.map(f64::trunc)
    }

    pub fn cos(&self) -> Self {
        self.map(f64::cos)
    }

    pub fn sin(&self) -> Self {
        self.map(f64::sin)
    }

    /// Square root of every entry, fails if any entry is negative
    pub fn sqrt(&self) -> Result<Self> {
        if let Some(bad) = self.data.iter().find(|&&x| x < 0.0) {
            return Err(VectorError::InvalidDomainArgument(format!(
                "square root of negative value {}",
                bad
            )));
        }
        Ok(self.map(f64::sqrt))
    }

    /// Natural logarithm, fails if any entry is not strictly positive
    pub fn ln(&self) -> Result<Self> {
        self.check_log_domain()?;
        Ok(self.map(f64::ln))
    }

    /// Logarithm in `base`, fails if any entry is not strictly positive
    pub fn log(&self, base: f64) -> Result<Self> {
        if base <= 0.0 || base == 1.0 {
            return Err(VectorError::InvalidDomainArgument(format!(
                "logarithm base {} is not valid",
                base
            )));
        }
        self.check_log_domain()?;
        Ok(self.map(|x| x.log(base)))
    }

    fn check_log_domain(&self) -> Result<()> {
        if let Some(bad) = self.data.iter().find(|&&x| x <= 0.0) {
            return Err(VectorError::InvalidDomainArgument(format!(
                "logarithm of non-positive value {}",
                bad
            )));
        }
        Ok(())
    }

    /// Apply `f` to every entry
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self { data: self.data.mapv(f) }
    }

    /// Sum of all entries
    pub fn sum(&self) -> Result<f64> {
        self.sum_range(0, self.len().wrapping_sub(1))
    }

    /// Sum from `start` (inclusive) to the last entry
    pub fn sum_from(&self, start: usize) -> Result<f64> {
        self.sum_range(start, self.len().wrapping_sub(1))
    }

    /// Sum of entries `start..=end`
    pub fn sum_range(&self, start: usize, end: usize) -> Result<f64> {
        let len = self.len();
        if start >= len {
            return Err(VectorError::IndexOutOfRange { index: start, len });
        }
        if end >= len {
            return Err(VectorError::IndexOutOfRange { index: end, len });
        }
        if end < start {
            return Err(VectorError::InvalidRange { start, end });
        }
        Ok(self.data.iter().skip(start).take(end - start + 1).sum())
    }

    pub fn average(&self) -> Result<f64> {
        Ok(self.sum()? / self.len() as f64)
    }

    /// Pareto domination: every entry `<=` the other's and at least one strictly `<`
    pub fn dominates(&self, that: &Vector) -> Result<bool> {
        self.check_len(that)?;
        let mut strictly_less = false;
        for (a, b) in self.data.iter().zip(that.data.iter()) {
            if a > b {
                return Ok(false);
            }
            if a < b {
                strictly_less = true;
            }
        }
        Ok(strictly_less)
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::from_vec(data)
    }
}

impl From<Array1<f64>> for Vector {
    fn from(data: Array1<f64>) -> Self {
        Self::from_array(data)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.data.iter().map(|x| format!("{:.4}", x)).collect();
        write!(f, "[ {} ]", entries.join(", "))
    }
}
