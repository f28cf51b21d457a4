//! End-to-end tests driving a system definition through the loader into the
//! elimination engine.

use approx::assert_relative_eq;
use gauss_solver::{GaussConfig, GaussError, LinearSystem, LoadError, gauss_solve};
use ndarray::Array2;

#[test]
fn test_load_and_solve() {
    let definition = "3
         2.0  1.0 -1.0   8.0
        -3.0 -1.0  2.0 -11.0
        -2.0  1.0  2.0  -3.0
    ";

    let system = LinearSystem::from_reader(definition.as_bytes()).expect("definition should parse");
    let original = system.clone();

    let solution =
        gauss_solve(system.a, system.b, &GaussConfig::default()).expect("system should solve");

    let residual = original.a.dot(&solution.x) - &original.b;
    for r in residual.iter() {
        assert_relative_eq!(*r, 0.0, epsilon = 1e-10);
    }
}

#[test]
fn test_load_and_reject_degenerate() {
    // Second equation is twice the first.
    let definition = "2  1.0 2.0 1.0  2.0 4.0 2.0";

    let system = LinearSystem::from_reader(definition.as_bytes()).expect("definition should parse");
    let err = gauss_solve(system.a, system.b, &GaussConfig::default())
        .expect_err("singular system must fail");

    assert_eq!(err, GaussError::DegenerateSystem { pivot: 1 });
}

#[test]
fn test_loader_reports_truncation() {
    let err = LinearSystem::from_reader("3 1.0 2.0".as_bytes())
        .expect_err("incomplete definition must fail");
    assert!(matches!(err, LoadError::Truncated { expected: 12, found: 2 }));
}

#[test]
fn test_generated_system_round_trips() {
    let system = LinearSystem::random(6, Some(42));

    let mut buffer = Vec::new();
    system.write(&mut buffer).expect("write to memory cannot fail");
    let parsed = LinearSystem::from_reader(buffer.as_slice()).expect("output should parse");

    assert_eq!(parsed.dim(), 6);
    for (&written, &read) in system.a.iter().zip(parsed.a.iter()) {
        assert_relative_eq!(written, read, epsilon = 1e-12);
    }
    for (&written, &read) in system.b.iter().zip(parsed.b.iter()) {
        assert_relative_eq!(written, read, epsilon = 1e-12);
    }
}

#[test]
fn test_generated_system_solves_after_conditioning() {
    // Shift the diagonal to make the random system diagonally dominant, so
    // every pivot is comfortably above the tolerance.
    let mut system = LinearSystem::random(8, Some(3));
    system.a += &(Array2::eye(8) * 8.0);
    let original = system.clone();

    let solution =
        gauss_solve(system.a, system.b, &GaussConfig::default()).expect("system should solve");

    let residual = original.a.dot(&solution.x) - &original.b;
    for r in residual.iter() {
        assert_relative_eq!(*r, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_parallel_agrees_with_sequential_end_to_end() {
    let mut system = LinearSystem::random(16, Some(9));
    system.a += &(Array2::eye(16) * 16.0);

    let sequential = gauss_solve(
        system.a.clone(),
        system.b.clone(),
        &GaussConfig::default(),
    )
    .expect("system should solve");
    let parallel = gauss_solve(
        system.a,
        system.b,
        &GaussConfig {
            parallel: true,
            ..GaussConfig::default()
        },
    )
    .expect("system should solve in parallel");

    assert_eq!(sequential.x, parallel.x);
}
