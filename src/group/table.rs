//! Multiplication (Cayley) tables of finite groups
//!
//! A table of order N stores the product `g·h` at `[g, h]`, with elements
//! labelled `0..N`. Construction always checks that the table is square, that
//! every entry names an element, and that every row and column is a
//! permutation of the elements. The group axioms can be checked on top of
//! that with [`Validation::Full`] or [`MultiplicationTable::validate_axioms`].

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::error::{GroupError, Result};
use crate::config::Validation;

/// A validated multiplication table of a finite group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")]
pub struct MultiplicationTable {
    table: Array2<usize>,
}

impl MultiplicationTable {
    /// Builds a table, checking only the Latin-square property
    pub fn new(table: Array2<usize>) -> Result<Self> {
        Self::with_validation(table, Validation::default())
    }

    /// Builds a table with the requested validation strictness
    pub fn with_validation(table: Array2<usize>, validation: Validation) -> Result<Self> {
        let order = check_shape(&table)?;
        check_latin_square(&table)?;

        let table = MultiplicationTable { table };
        if validation.checks_axioms() {
            table.validate_axioms()?;
        }

        log::debug!(
            "Accepted multiplication table of order {} ({:?} validation).",
            order,
            validation
        );
        Ok(table)
    }

    /// Number of elements in the group
    pub fn order(&self) -> usize {
        self.table.nrows()
    }

    /// The product `g·h`
    pub fn product(&self, g: usize, h: usize) -> Result<usize> {
        self.check_element(g)?;
        self.check_element(h)?;
        Ok(self.table[[g, h]])
    }

    /// Row `g` of the table, i.e. left multiplication by `g`
    pub fn row(&self, g: usize) -> Result<ArrayView1<'_, usize>> {
        self.check_element(g)?;
        Ok(self.table.row(g))
    }

    /// The underlying `[N, N]` array
    pub fn as_array(&self) -> &Array2<usize> {
        &self.table
    }

    /// Index of the identity element.
    ///
    /// The identity is the unique element whose row is `0, 1, ..., N-1`.
    pub fn identity(&self) -> Result<usize> {
        let n = self.order();
        let candidates: Vec<usize> = (0..n)
            .filter(|&g| (0..n).all(|h| self.table[[g, h]] == h))
            .collect();

        match candidates.as_slice() {
            [e] => Ok(*e),
            _ => Err(GroupError::InvalidGroup(
                "No or multiple identities".to_string(),
            )),
        }
    }

    /// Index of the inverse of `g`
    pub fn inverse(&self, g: usize) -> Result<usize> {
        self.check_element(g)?;
        let e = self.identity()?;
        let mut found = (0..self.order()).filter(|&h| self.table[[g, h]] == e);

        match (found.next(), found.next()) {
            (Some(h), None) => Ok(h),
            _ => Err(GroupError::InvalidGroup(format!(
                "Element {} does not have exactly one inverse",
                g
            ))),
        }
    }

    /// Inverses of all elements, where entry `g` holds `g⁻¹`
    pub fn inverses(&self) -> Result<Vec<usize>> {
        let e = self.identity()?;
        let n = self.order();

        let mut inverses = Vec::with_capacity(n);
        for g in 0..n {
            let hits: Vec<usize> = (0..n).filter(|&h| self.table[[g, h]] == e).collect();
            if hits.len() != 1 {
                return Err(GroupError::InvalidGroup(
                    "Every element does not have one inverse".to_string(),
                ));
            }
            inverses.push(hits[0]);
        }
        Ok(inverses)
    }

    /// Checks `(g·h)·k = g·(h·k)` for every triple
    pub fn is_associative(&self) -> bool {
        self.first_non_associative_triple().is_none()
    }

    fn first_non_associative_triple(&self) -> Option<(usize, usize, usize)> {
        let n = self.order();
        let t = &self.table;
        for g in 0..n {
            for h in 0..n {
                let gh = t[[g, h]];
                for k in 0..n {
                    if t[[gh, k]] != t[[g, t[[h, k]]]] {
                        return Some((g, h, k));
                    }
                }
            }
        }
        None
    }

    /// Checks the group axioms: two-sided identity, two-sided inverses, associativity
    pub fn validate_axioms(&self) -> Result<()> {
        let e = self.identity()?;
        let n = self.order();

        if let Some(g) = (0..n).find(|&g| self.table[[g, e]] != g) {
            return Err(GroupError::InvalidGroup(format!(
                "Identity {} is not a right identity for element {}",
                e, g
            )));
        }

        let inverses = self.inverses()?;
        if let Some(g) = (0..n).find(|&g| self.table[[inverses[g], g]] != e) {
            return Err(GroupError::InvalidGroup(format!(
                "Inverse of element {} is not two-sided",
                g
            )));
        }

        if let Some((g, h, k)) = self.first_non_associative_triple() {
            return Err(GroupError::InvalidGroup(format!(
                "Operation is not associative: ({0}·{1})·{2} ≠ {0}·({1}·{2})",
                g, h, k
            )));
        }

        log::debug!("Group axioms hold for table of order {}.", n);
        Ok(())
    }

    /// Whether `g·h = h·g` for all elements
    pub fn is_abelian(&self) -> bool {
        self.table == self.table.t()
    }

    /// Smallest k ≥ 1 with `g^k = e`
    pub fn element_order(&self, g: usize) -> Result<usize> {
        self.check_element(g)?;
        let e = self.identity()?;

        let mut power = g;
        for k in 1..=self.order() {
            if power == e {
                return Ok(k);
            }
            power = self.table[[power, g]];
        }
        Err(GroupError::InvalidGroup(format!(
            "Powers of element {} never reach the identity",
            g
        )))
    }

    fn check_element(&self, g: usize) -> Result<()> {
        if g < self.order() {
            Ok(())
        } else {
            Err(GroupError::DimensionMismatch(format!(
                "Element {} is outside a group of order {}",
                g,
                self.order()
            )))
        }
    }
}

/// Checks the table is square, non-empty and only names elements `0..N`.
/// Returns the order on success.
fn check_shape(table: &Array2<usize>) -> Result<usize> {
    let (rows, cols) = table.dim();
    if rows != cols {
        return Err(GroupError::DimensionMismatch(format!(
            "Multiplication table must be square, got {}x{}",
            rows, cols
        )));
    }
    if rows == 0 {
        return Err(GroupError::DimensionMismatch(
            "Multiplication table is empty".to_string(),
        ));
    }
    if let Some(((g, h), &value)) = table.indexed_iter().find(|(_, &v)| v >= rows) {
        return Err(GroupError::DimensionMismatch(format!(
            "Entry [{}, {}] = {} is outside 0..{}",
            g, h, value, rows
        )));
    }
    Ok(rows)
}

fn is_permutation(line: ArrayView1<'_, usize>) -> bool {
    let mut seen = vec![false; line.len()];
    for &value in line.iter() {
        if seen[value] {
            return false;
        }
        seen[value] = true;
    }
    true
}

fn check_latin_square(table: &Array2<usize>) -> Result<()> {
    for (g, row) in table.rows().into_iter().enumerate() {
        if !is_permutation(row) {
            return Err(GroupError::InvalidGroup(format!(
                "Row {} is not a permutation of the elements",
                g
            )));
        }
    }
    for (h, column) in table.columns().into_iter().enumerate() {
        if !is_permutation(column) {
            return Err(GroupError::InvalidGroup(format!(
                "Column {} is not a permutation of the elements",
                h
            )));
        }
    }
    Ok(())
}

impl TryFrom<Array2<usize>> for MultiplicationTable {
    type Error = GroupError;

    fn try_from(table: Array2<usize>) -> Result<Self> {
        MultiplicationTable::new(table)
    }
}

impl TryFrom<Vec<Vec<usize>>> for MultiplicationTable {
    type Error = GroupError;

    fn try_from(rows: Vec<Vec<usize>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(GroupError::DimensionMismatch(format!(
                "Row {} has length {}, expected {}",
                i,
                row.len(),
                n_cols
            )));
        }

        let flat: Vec<usize> = rows.into_iter().flatten().collect();
        let table = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| GroupError::DimensionMismatch(e.to_string()))?;
        MultiplicationTable::new(table)
    }
}

impl From<MultiplicationTable> for Vec<Vec<usize>> {
    fn from(table: MultiplicationTable) -> Self {
        table
            .table
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }
}
