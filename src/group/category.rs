//! A finite group viewed as a one-object category

use super::error::Result;
use super::table::MultiplicationTable;
use crate::category::Category;

/// The category with a single object whose morphisms are the group elements.
///
/// Composition "g after f" is the product `g·f`.
#[derive(Debug, Clone)]
pub struct GroupCategory {
    table: MultiplicationTable,
    identity: usize,
}

impl GroupCategory {
    pub fn new(table: MultiplicationTable) -> Result<Self> {
        let identity = table.identity()?;
        Ok(GroupCategory { table, identity })
    }

    pub fn table(&self) -> &MultiplicationTable {
        &self.table
    }

    /// All morphisms, i.e. every group element
    pub fn elements(&self) -> Vec<usize> {
        (0..self.table.order()).collect()
    }
}

impl Category for GroupCategory {
    type Object = ();
    type Morphism = usize;

    fn domain(&self, _f: &usize) -> Self::Object {}

    fn codomain(&self, _f: &usize) -> Self::Object {}

    fn identity(&self, _obj: &()) -> usize {
        self.identity
    }

    fn compose(&self, f: &usize, g: &usize) -> Option<usize> {
        self.table.product(*g, *f).ok()
    }
}
