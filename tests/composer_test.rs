//! Tests for composition: merging, provenance, duplicate detection

use std::sync::Arc;

use rsopt::application::compose;
use rsopt::domain::{extend_spec, OptionDescriptor, OptionModule, SpecError};

/// Module with a fixed descriptor list built from textual declarations.
struct StaticModule {
    name: &'static str,
    descriptors: Vec<OptionDescriptor>,
}

impl StaticModule {
    fn new(name: &'static str, decls: &[&str]) -> Self {
        let descriptors = decls
            .iter()
            .map(|decl| OptionDescriptor::from_decl(decl, "test option").expect("valid decl"))
            .collect();
        Self { name, descriptors }
    }
}

impl OptionModule for StaticModule {
    fn name(&self) -> &str {
        self.name
    }

    fn opt_spec(&self) -> Vec<OptionDescriptor> {
        self.descriptors.clone()
    }
}

/// Module extending a parent by appending its own descriptors.
struct ExtendingModule {
    name: &'static str,
    parent: StaticModule,
    own: Vec<OptionDescriptor>,
}

impl ExtendingModule {
    fn new(name: &'static str, parent: StaticModule, decls: &[&str]) -> Self {
        let own = decls
            .iter()
            .map(|decl| OptionDescriptor::from_decl(decl, "test option").expect("valid decl"))
            .collect();
        Self { name, parent, own }
    }
}

impl OptionModule for ExtendingModule {
    fn name(&self) -> &str {
        self.name
    }

    fn opt_spec(&self) -> Vec<OptionDescriptor> {
        extend_spec(&self.parent, &self.own)
    }
}

fn keys(spec: &rsopt::domain::OptionSpecification) -> Vec<String> {
    spec.keys().collect()
}

#[test]
fn given_disjoint_modules_when_composing_then_order_is_concatenation() {
    // Arrange
    let first = StaticModule::new("first", &["alpha", "beta=s"]);
    let second = StaticModule::new("second", &["gamma=s"]);
    let modules: Vec<Arc<dyn OptionModule>> = vec![Arc::new(first), Arc::new(second)];

    // Act
    let spec = compose(&modules).expect("disjoint modules compose");

    // Assert
    assert_eq!(keys(&spec), vec!["alpha", "beta", "gamma"]);
    assert_eq!(spec.owner_of("alpha"), Some("first"));
    assert_eq!(spec.owner_of("beta"), Some("first"));
    assert_eq!(spec.owner_of("gamma"), Some("second"));
}

#[test]
fn given_shared_alias_when_composing_then_fails_with_duplicate() {
    // "v" is an alias in both modules
    let first = StaticModule::new("first", &["verbose|v"]);
    let second = StaticModule::new("second", &["version|v"]);
    let modules: Vec<Arc<dyn OptionModule>> = vec![Arc::new(first), Arc::new(second)];

    let result = compose(&modules);

    assert_eq!(
        result.err().map(|e| match e {
            SpecError::DuplicateOption {
                name,
                first,
                second,
            } => (name, first, second),
            other => panic!("expected DuplicateOption, got {other:?}"),
        }),
        Some(("v".to_string(), "first".to_string(), "second".to_string()))
    );
}

#[test]
fn given_shared_primary_name_when_composing_then_fails_with_duplicate() {
    // Same name, different arity: not an inherited copy, a real conflict
    let first = StaticModule::new("first", &["dbshow"]);
    let second = StaticModule::new("second", &["dbshow=s"]);
    let modules: Vec<Arc<dyn OptionModule>> = vec![Arc::new(first), Arc::new(second)];

    let result = compose(&modules);

    assert!(matches!(result, Err(SpecError::DuplicateOption { .. })));
}

#[test]
fn given_colliding_normalized_keys_when_composing_then_fails_with_duplicate() {
    // "db-name" and "db_name" share the accessor key db_name
    let first = StaticModule::new("first", &["db-name=s"]);
    let second = StaticModule::new("second", &["db_name=s"]);
    let modules: Vec<Arc<dyn OptionModule>> = vec![Arc::new(first), Arc::new(second)];

    let result = compose(&modules);

    assert!(matches!(result, Err(SpecError::DuplicateOption { .. })));
}

#[test]
fn given_parent_and_child_when_composing_then_inherited_prefix_unified() {
    // Arrange: child inherits the parent's two descriptors and adds one
    let parent = StaticModule::new("parent", &["alpha", "beta=s"]);
    let child = ExtendingModule::new(
        "child",
        StaticModule::new("parent", &["alpha", "beta=s"]),
        &["gamma"],
    );
    let modules: Vec<Arc<dyn OptionModule>> = vec![Arc::new(parent), Arc::new(child)];

    // Act
    let spec = compose(&modules).expect("extension chain composes");

    // Assert: no duplicates, inherited descriptors attributed to the parent
    assert_eq!(keys(&spec), vec!["alpha", "beta", "gamma"]);
    assert_eq!(spec.owner_of("alpha"), Some("parent"));
    assert_eq!(spec.owner_of("gamma"), Some("child"));
}

#[test]
fn given_child_alone_when_composing_then_child_owns_inherited_descriptors() {
    let child = ExtendingModule::new(
        "child",
        StaticModule::new("parent", &["alpha", "beta=s"]),
        &["gamma"],
    );
    let modules: Vec<Arc<dyn OptionModule>> = vec![Arc::new(child)];

    let spec = compose(&modules).expect("child composes alone");

    assert_eq!(keys(&spec), vec!["alpha", "beta", "gamma"]);
    // without the parent in the list, the child is the most specific contributor
    assert_eq!(spec.owner_of("alpha"), Some("child"));
}

#[test]
fn given_extension_when_reading_opt_spec_then_parent_first_own_appended() {
    let parent = StaticModule::new("parent", &["alpha", "beta=s"]);
    let parent_spec = parent.opt_spec();
    let child = ExtendingModule::new("child", parent, &["gamma"]);

    let child_spec = child.opt_spec();

    assert_eq!(child_spec.len(), parent_spec.len() + 1);
    assert_eq!(&child_spec[..parent_spec.len()], &parent_spec[..]);
    assert_eq!(child_spec[parent_spec.len()].primary(), "gamma");
}

#[test]
fn given_same_module_list_when_composing_twice_then_specs_identical() {
    let build = || -> Vec<Arc<dyn OptionModule>> {
        vec![
            Arc::new(StaticModule::new("first", &["alpha", "beta=s"])),
            Arc::new(StaticModule::new("second", &["gamma=s"])),
        ]
    };

    let spec_a = compose(&build()).expect("first composition");
    let spec_b = compose(&build()).expect("second composition");

    assert_eq!(spec_a, spec_b);
}

#[test]
fn given_identical_declarations_when_composing_then_unified_under_first_module() {
    // Byte-identical descriptors are indistinguishable from an inherited
    // copy and merge into one entry owned by the earliest contributor.
    let first = StaticModule::new("first", &["alpha"]);
    let second = StaticModule::new("second", &["alpha"]);
    let modules: Vec<Arc<dyn OptionModule>> = vec![Arc::new(first), Arc::new(second)];

    let spec = compose(&modules).expect("identical declarations unify");

    assert_eq!(keys(&spec), vec!["alpha"]);
    assert_eq!(spec.owner_of("alpha"), Some("first"));
}

#[test]
fn given_empty_module_list_when_composing_then_empty_spec() {
    let modules: Vec<Arc<dyn OptionModule>> = vec![];

    let spec = compose(&modules).expect("empty composition");

    assert!(spec.is_empty());
}
