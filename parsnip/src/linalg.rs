use std::array;
use std::ops::{Add, Index, Mul};

use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinalgError {
    #[error("an identity matrix needs an order of at least 1")]
    EmptyIdentity,
}

/// A vector with `N` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize>([f64; N]);

impl<const N: usize> Vector<N> {
    pub fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    pub fn components(&self) -> [f64; N] {
        self.0
    }

    pub fn order(&self) -> usize {
        N
    }

    pub fn magnitude(&self) -> f64 {
        self.dot_product(self).sqrt()
    }

    pub fn plus(&self, other: &Self) -> Self {
        Self(array::from_fn(|i| self.0[i] + other.0[i]))
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Self(self.0.map(|x| x * scalar))
    }

    pub fn dot_product(&self, other: &Self) -> f64 {
        self.0.iter().zip_eq(&other.0).map(|(a, b)| a * b).sum()
    }

    /// Angle between the two vectors, in radians.
    pub fn angle_between(&self, other: &Self) -> f64 {
        (self.dot_product(other) / (self.magnitude() * other.magnitude())).acos()
    }

    pub fn as_row_matrix(&self) -> Matrix<1, N> {
        Matrix([*self])
    }

    pub fn as_column_matrix(&self) -> Matrix<N, 1> {
        Matrix(self.0.map(|x| Vector([x])))
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(&rhs)
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

/// An `M`x`N` matrix: `M` rows of `N` components each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const M: usize, const N: usize>([Vector<N>; M]);

impl<const O: usize> Matrix<O, O> {
    pub fn identity() -> Result<Self, LinalgError> {
        if O == 0 {
            return Err(LinalgError::EmptyIdentity);
        }
        Ok(Self(array::from_fn(|i| {
            Vector(array::from_fn(|j| if i == j { 1.0 } else { 0.0 }))
        })))
    }
}

impl<const M: usize, const N: usize> Matrix<M, N> {
    pub fn new(rows: [Vector<N>; M]) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> [Vector<N>; M] {
        self.0
    }

    pub fn columns(&self) -> [Vector<M>; N] {
        self.transpose().rows()
    }

    pub fn width(&self) -> usize {
        N
    }

    pub fn height(&self) -> usize {
        M
    }

    pub fn transpose(&self) -> Matrix<N, M> {
        Matrix(array::from_fn(|j| Vector(array::from_fn(|i| self.0[i].0[j]))))
    }

    pub fn plus(&self, other: &Self) -> Self {
        Self(array::from_fn(|i| self.0[i].plus(&other.0[i])))
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Self(self.0.map(|row| row.scale(scalar)))
    }

    pub fn times<const P: usize>(&self, other: &Matrix<N, P>) -> Matrix<M, P> {
        let columns = other.columns();
        Matrix(array::from_fn(|i| {
            Vector(array::from_fn(|j| self.0[i].dot_product(&columns[j])))
        }))
    }

    /// `None` unless the matrix is square with an order of at least 2.
    pub fn determinant(&self) -> Option<f64> {
        if M != N || M < 2 {
            return None;
        }
        let rows = self.0.iter().map(|row| row.0.to_vec()).collect_vec();
        Some(cofactor_expansion(&rows))
    }
}

fn cofactor_expansion(m: &[Vec<f64>]) -> f64 {
    if m.len() == 2 {
        return m[0][0] * m[1][1] - m[1][0] * m[0][1];
    }
    (0..m.len())
        .map(|i| {
            let minor = m[1..]
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, x)| *x)
                        .collect_vec()
                })
                .collect_vec();
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            sign * m[0][i] * cofactor_expansion(&minor)
        })
        .sum()
}

impl<const M: usize, const N: usize> Add for Matrix<M, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(&rhs)
    }
}

impl<const M: usize, const N: usize> Mul<f64> for Matrix<M, N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl<const M: usize, const N: usize, const P: usize> Mul<Matrix<N, P>> for Matrix<M, N> {
    type Output = Matrix<M, P>;

    fn mul(self, rhs: Matrix<N, P>) -> Matrix<M, P> {
        self.times(&rhs)
    }
}
