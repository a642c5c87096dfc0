//! Registry of objective functions keyed by integer id
//!
//! Adding a function means implementing [`ObjectiveFunction`] and registering it,
//! the lookup code never changes.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use swarmbench_vector::Vector;

use crate::domain::Domain;
use crate::error::{CatalogError, Result};
use crate::functions::{
    Ackley, BentCigar, CosineMixture, Elliptic, Mishra1, Quartic, Rastrigin, Salomon, Step,
    Zakharov,
};

/// A stateless minimization benchmark
pub trait ObjectiveFunction: Send + Sync + fmt::Debug {
    /// Catalog id
    fn id(&self) -> u8;

    /// Lowercase name, used for result directories and tuned parameter files
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn multimodal(&self) -> bool;

    fn evaluate(&self, x: &Vector) -> swarmbench_vector::Result<f64>;

    /// Interval shared by every coordinate
    fn domain(&self) -> Domain;

    /// True iff every coordinate lies within [`domain`](ObjectiveFunction::domain), bounds included
    fn in_domain(&self, x: &Vector) -> bool {
        self.domain().contains_all(x)
    }

    /// Documented global minimizer in dimension `dim`
    fn minimizer(&self, dim: usize) -> Vector {
        Vector::new(dim)
    }

    /// Objective value at [`minimizer`](ObjectiveFunction::minimizer)
    fn minimum(&self, _dim: usize) -> f64 {
        0.0
    }
}

/// Id -> function registry
#[derive(Clone, Default)]
pub struct Catalog {
    functions: BTreeMap<u8, Arc<dyn ObjectiveFunction>>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.functions.iter().map(|(id, func)| (id, func.name())))
            .finish()
    }
}

impl Catalog {
    /// Empty registry
    pub fn new() -> Self {
        Self { functions: BTreeMap::new() }
    }

    /// The ten benchmark functions with ids 1..=10
    pub fn standard() -> Self {
        let functions: [Arc<dyn ObjectiveFunction>; 10] = [
            Arc::new(Elliptic),
            Arc::new(Ackley),
            Arc::new(Rastrigin),
            Arc::new(Step),
            Arc::new(CosineMixture),
            Arc::new(Quartic),
            Arc::new(Zakharov),
            Arc::new(Salomon),
            Arc::new(BentCigar),
            Arc::new(Mishra1),
        ];
        Self { functions: functions.into_iter().map(|f| (f.id(), f)).collect() }
    }

    /// Add a function, its id must not be taken yet
    pub fn register(&mut self, function: Arc<dyn ObjectiveFunction>) -> Result<()> {
        let id = function.id();
        if self.functions.contains_key(&id) {
            return Err(CatalogError::DuplicateFunctionId(id));
        }
        self.functions.insert(id, function);
        Ok(())
    }

    pub fn get(&self, id: u8) -> Result<&Arc<dyn ObjectiveFunction>> {
        self.functions.get(&id).ok_or(CatalogError::UnrecognizedFunctionId(id))
    }

    pub fn by_name(&self, name: &str) -> Option<&Arc<dyn ObjectiveFunction>> {
        let wanted = name.to_lowercase();
        self.functions.values().find(|f| f.name() == wanted)
    }

    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.functions.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ObjectiveFunction>> {
        self.functions.values()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn evaluate(&self, x: &Vector, id: u8) -> Result<f64> {
        Ok(self.get(id)?.evaluate(x)?)
    }

    pub fn get_domain(&self, id: u8) -> Result<Domain> {
        Ok(self.get(id)?.domain())
    }

    pub fn in_domain(&self, x: &Vector, id: u8) -> Result<bool> {
        Ok(self.get(id)?.in_domain(x))
    }
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(Catalog::standard);

/// Process-wide, read-only standard catalog
pub fn standard_catalog() -> &'static Catalog {
    &STANDARD
}

/// Shared handle on a standard catalog entry
pub fn lookup(id: u8) -> Result<Arc<dyn ObjectiveFunction>> {
    standard_catalog().get(id).cloned()
}

pub fn evaluate(x: &Vector, id: u8) -> Result<f64> {
    standard_catalog().evaluate(x, id)
}

pub fn get_domain(id: u8) -> Result<Domain> {
    standard_catalog().get_domain(id)
}

pub fn in_domain(x: &Vector, id: u8) -> Result<bool> {
    standard_catalog().in_domain(x, id)
}

pub fn function_name(id: u8) -> Result<&'static str> {
    Ok(standard_catalog().get(id)?.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Sphere;

    impl ObjectiveFunction for Sphere {
        fn id(&self) -> u8 {
            42
        }
        fn name(&self) -> &str {
            "sphere"
        }
        fn multimodal(&self) -> bool {
            false
        }
        fn evaluate(&self, x: &Vector) -> swarmbench_vector::Result<f64> {
            x.pow(2).sum()
        }
        fn domain(&self) -> Domain {
            Domain::new(-5.0, 5.0)
        }
    }

    #[test]
    fn test_standard_ids() {
        let catalog = standard_catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.ids().collect::<Vec<_>>(), (1..=10).collect::<Vec<u8>>());
        for f in catalog.iter() {
            assert_eq!(catalog.get(f.id()).unwrap().name(), f.name());
        }
    }

    #[test]
    fn test_unrecognized_ids() {
        let x = Vector::new(2);
        for id in [0u8, 11, 255] {
            assert_eq!(evaluate(&x, id), Err(CatalogError::UnrecognizedFunctionId(id)));
            assert!(get_domain(id).is_err());
            assert!(in_domain(&x, id).is_err());
            assert!(lookup(id).is_err());
        }
    }

    #[test]
    fn test_register_custom_function() {
        let mut catalog = Catalog::standard();
        catalog.register(Arc::new(Sphere)).unwrap();
        let x = Vector::from_vec(vec![1.0, 2.0]);
        assert_eq!(catalog.evaluate(&x, 42).unwrap(), 5.0);
        assert!(catalog.by_name("Sphere").is_some());
        assert_eq!(
            catalog.register(Arc::new(Sphere)),
            Err(CatalogError::DuplicateFunctionId(42))
        );
        assert_eq!(
            catalog.register(Arc::new(Elliptic)),
            Err(CatalogError::DuplicateFunctionId(1))
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(function_name(1).unwrap(), "elliptic");
        assert_eq!(function_name(10).unwrap(), "mishra1");
        assert_eq!(standard_catalog().by_name("bent_cigar").unwrap().id(), 9);
        assert!(standard_catalog().by_name("griewank").is_none());
    }
}
