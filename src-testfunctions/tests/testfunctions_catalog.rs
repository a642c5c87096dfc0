use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use swarmbench_testfunctions::{
    Catalog, CatalogError, Domain, ObjectiveFunction, evaluate, get_domain, in_domain,
    standard_catalog,
};
use swarmbench_vector::Vector;

fn v(data: &[f64]) -> Vector {
    Vector::from_vec(data.to_vec())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "{} != {}",
        actual,
        expected
    );
}

#[test]
fn test_known_values_by_id() {
    assert_close(evaluate(&v(&[1.0, 2.0]), 1).unwrap(), 9.0);
    assert_close(evaluate(&v(&[1.0, 1.0]), 3).unwrap(), 2.0);
    assert_close(evaluate(&v(&[1.5, -0.9]), 4).unwrap(), 2.0);
    assert_close(evaluate(&v(&[1.0, 0.0]), 5).unwrap(), 2.0);
    assert_close(evaluate(&v(&[1.0, 1.0]), 6).unwrap(), 3.0);
    assert_close(evaluate(&v(&[1.0, 1.0]), 7).unwrap(), 9.3125);
    assert_close(evaluate(&v(&[3.0, 4.0]), 8).unwrap(), 0.5);
    assert_close(evaluate(&v(&[1.0, 1.0]), 9).unwrap(), 1.0 + 1e6);
    assert_close(evaluate(&v(&[0.5, 0.3]), 10).unwrap(), 2.5f64.powf(1.5) - 2.0);
}

#[test]
fn test_origin_is_minimum_for_zero_centered_functions() {
    for id in [1u8, 2, 3, 4, 6, 7, 8, 9] {
        for dim in [2usize, 10] {
            let origin = Vector::new(dim);
            let value = evaluate(&origin, id).unwrap();
            assert!(value.abs() < 1e-10, "id {} dim {}: {}", id, dim, value);
            assert!(in_domain(&origin, id).unwrap());
        }
    }
    // cosine mixture reaches 0 at the origin only in dimension 10
    assert!(evaluate(&Vector::new(10), 5).unwrap().abs() < 1e-10);
}

#[test]
fn test_domains_match_table() {
    let expected = [
        (1u8, -5.0, 5.0),
        (2, -5.0, 5.0),
        (3, -5.12, 5.12),
        (4, -100.0, 100.0),
        (5, -1.0, 1.0),
        (6, -1.28, 1.28),
        (7, -5.0, 10.0),
        (8, -100.0, 100.0),
        (9, -100.0, 100.0),
        (10, 0.0, 1.0),
    ];
    for (id, low, high) in expected {
        assert_eq!(get_domain(id).unwrap(), Domain::new(low, high), "id {}", id);
    }
}

#[test]
fn test_in_domain_bounds_are_inclusive() {
    assert!(in_domain(&v(&[-5.0, 10.0]), 7).unwrap());
    assert!(!in_domain(&v(&[-5.0, 10.000001]), 7).unwrap());
    assert!(in_domain(&v(&[0.0, 1.0, 1.0]), 10).unwrap());
    assert!(!in_domain(&v(&[-0.0001, 0.5]), 10).unwrap());
}

#[test]
fn test_random_points_in_domain() {
    let mut rng = StdRng::seed_from_u64(17);
    for f in standard_catalog().iter() {
        let x = f.domain().random_vector(10, &mut rng).unwrap();
        assert!(f.in_domain(&x));
        assert!(f.evaluate(&x).unwrap().is_finite());
    }
}

#[test]
fn test_unknown_function_id() {
    let err = evaluate(&Vector::new(3), 11).unwrap_err();
    assert_eq!(err, CatalogError::UnrecognizedFunctionId(11));
    assert!(err.to_string().contains("not recognized"));
}

#[test]
fn test_dimension_errors_propagate() {
    let err = evaluate(&Vector::new(0), 3).unwrap_err();
    assert!(matches!(err, CatalogError::Vector(_)));
}

#[derive(Debug)]
struct ShiftedSphere;

impl ObjectiveFunction for ShiftedSphere {
    fn id(&self) -> u8 {
        11
    }
    fn name(&self) -> &str {
        "shifted_sphere"
    }
    fn multimodal(&self) -> bool {
        false
    }
    fn evaluate(&self, x: &Vector) -> swarmbench_vector::Result<f64> {
        x.shift(-1.0).pow(2).sum()
    }
    fn domain(&self) -> Domain {
        Domain::new(-2.0, 2.0)
    }
    fn minimizer(&self, dim: usize) -> Vector {
        Vector::new(dim).shift(1.0)
    }
}

#[test]
fn test_registering_a_new_function() {
    let mut catalog = Catalog::standard();
    catalog.register(Arc::new(ShiftedSphere)).unwrap();
    assert_eq!(catalog.len(), 11);
    let f = catalog.get(11).unwrap();
    assert_eq!(f.evaluate(&f.minimizer(3)).unwrap(), 0.0);
    assert!(catalog.in_domain(&v(&[2.0, -2.0]), 11).unwrap());
    // the process-wide catalog is untouched
    assert!(standard_catalog().get(11).is_err());
}
