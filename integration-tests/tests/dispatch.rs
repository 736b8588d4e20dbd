use std::{cell::Cell, rc::Rc};

use approx::assert_relative_eq;
use integration_tests::{counted, sample};
use ndarray::array;
use weft_core::{Container, Dense, Tag, Tagged};
use weft_dispatch::{
    Config, Path, ReduceError, Registry, RegistryError, max_over, reduce_max, reduce_max_with,
    reduce_min, register, tag_of,
};

#[test]
fn registered_exp_matches_the_scan() {
    register(&f64::exp, Tag::Increasing).unwrap();

    let mapped = sample().map(f64::exp);
    assert_eq!(tag_of::<f64, _>(mapped.transform()), Tag::Increasing);

    let fast = reduce_max(&mapped).unwrap();
    let slow = reduce_max_with(&mapped, &Config::default().with_tags(false)).unwrap();

    assert_relative_eq!(fast, slow);
    assert_relative_eq!(fast, 0.9_f64.exp());
}

#[test]
fn tagged_transform_is_applied_once() {
    let calls = Rc::new(Cell::new(0));
    let mapped = sample().map(Tagged::increasing(counted(&calls, f64::exp)));

    assert_relative_eq!(reduce_max(&mapped).unwrap(), 0.9_f64.exp());
    assert_eq!(calls.get(), 1);
}

#[test]
fn untagged_transform_is_applied_to_every_element() {
    let calls = Rc::new(Cell::new(0));
    let mapped = sample().map(counted(&calls, f64::exp));

    assert_relative_eq!(reduce_max(&mapped).unwrap(), 0.9_f64.exp());
    assert_eq!(calls.get(), 3);
}

#[test]
fn empty_container_fails_on_both_paths() {
    let untagged = Dense::<f64>::from(Vec::new()).map(|x: f64| x * x);
    assert_eq!(reduce_max(&untagged), Err(ReduceError::Empty));

    let tagged = Dense::<f64>::from(Vec::new()).map(Tagged::increasing(f64::cbrt));
    assert_eq!(reduce_max(&tagged), Err(ReduceError::Empty));
    assert_eq!(reduce_min(&tagged), Err(ReduceError::Empty));
}

#[test]
fn decreasing_transform_over_an_array() {
    let base = array![[3.0, 1.0], [4.0, 1.5]];
    let mapped = Container::map(base, Tagged::decreasing(|x: f64| 1.0 / x));

    assert_relative_eq!(reduce_max(&mapped).unwrap(), 1.0);
    assert_relative_eq!(reduce_min(&mapped).unwrap(), 0.25);
}

#[test]
fn private_registry_is_isolated_from_the_global_one() {
    let registry = Registry::new();
    registry.register(&f64::tanh, Tag::Increasing).unwrap();

    assert_eq!(
        registry.register(&f64::tanh, Tag::Decreasing),
        Err(RegistryError::Conflict {
            name: std::any::type_name_of_val(&f64::tanh),
            existing: Tag::Increasing,
            requested: Tag::Decreasing,
        })
    );
    assert_eq!(
        Path::for_max(registry.tag_of::<f64, _>(&f64::tanh)),
        Path::TransformOfMax
    );
    assert_eq!(Registry::global().lookup(&f64::tanh), None);
}

#[test]
fn capturing_closures_cannot_be_registered() {
    let offset = 2.0;
    let shift = move |x: f64| x + offset;

    assert!(matches!(
        Registry::new().register(&shift, Tag::Increasing),
        Err(RegistryError::Stateful { .. })
    ));
}

#[test]
fn scans_work_on_any_container() {
    let labeled = Dense::new(&[2, 2], vec![4, 9, 2, 9]).unwrap().with_label("hits");
    assert_eq!(max_over(&labeled), Ok(9));
}
