use rimtag_rs::load_order::*;
use rimtag_rs::{BaseContent, PackageId};
use rimtag_rs_test_utils::*;

#[test]
fn alternative_satisfies_group() {
	let ws = working_set([
		PackageBuilder::new("m").depends(&["foo", "bar"]).unwrap(),
		PackageBuilder::new("bar"),
	]).unwrap();

	let report = validate(&ws, "1.6", &BaseContent::default());
	assert!(report.is_ok());
	assert!(report.missing.is_empty());
	assert!(check_dependencies(&ws, "1.6", &BaseContent::default()).is_ok());
}

#[test]
fn missing_strict_dependency_fails() {
	let _ = env_logger::builder().is_test(true).try_init();

	let ws = working_set([
		PackageBuilder::new("m").depends(&["baz"]).unwrap(),
	]).unwrap();

	let report = validate(&ws, "1.6", &BaseContent::default());
	assert_eq!(report.missing, vec![MissingDependency { required_by: PackageId::new("m"), identifier: PackageId::new("baz") }]);

	match check_dependencies(&ws, "1.6", &BaseContent::default()) {
		Err(ResolveError::MissingDependencies(ids)) => assert_eq!(names(ids), vec!["baz"]),
		other => panic!("expected missing dependencies, got {:?}", other),
	}
}

#[test]
fn every_member_of_failed_group_is_reported() {
	let ws = working_set([
		PackageBuilder::new("m").depends(&["foo", "bar"]).unwrap(),
	]).unwrap();

	let report = validate(&ws, "1.6", &BaseContent::default());
	assert_eq!(names(report.missing.iter().map(|m| &m.identifier)), vec!["foo", "bar"]);
}

#[test]
fn groups_after_a_satisfied_group_are_checked() {
	let ws = working_set([
		PackageBuilder::new("m")
			.depends(&["present"]).unwrap()
			.depends(&["absent"]).unwrap()
			.depends(&["other.absent", "present"]).unwrap()
			.depends(&["gone"]).unwrap(),
		PackageBuilder::new("present"),
	]).unwrap();

	let report = validate(&ws, "1.6", &BaseContent::default());
	assert_eq!(names(report.missing_identifiers()), vec!["absent", "gone"]);
}

#[test]
fn violations_across_packages_are_all_reported() {
	let ws = working_set([
		PackageBuilder::new("a").depends(&["x"]).unwrap(),
		PackageBuilder::new("b").depends(&["y"]).unwrap().depends(&["x"]).unwrap(),
	]).unwrap();

	let report = validate(&ws, "1.6", &BaseContent::default());
	assert_eq!(report.missing.len(), 3);
	assert_eq!(names(report.missing_identifiers()), vec!["x", "y"]);
}

#[test]
fn version_mismatch_is_only_a_warning() {
	let ws = working_set([
		PackageBuilder::new("old.mod").supported_versions(&["1.3", "1.4"]),
		PackageBuilder::new("new.mod").supported_versions(&["1.5"]),
	]).unwrap();

	let report = check_dependencies(&ws, "1.5", &BaseContent::default()).expect("incompatibility should not fail validation");
	assert_eq!(names(report.incompatible), vec!["old.mod"]);
}

#[test]
fn base_game_is_exempt_from_version_check() {
	let ws = working_set([
		PackageBuilder::new("ludeon.rimworld").supported_versions(&[]),
		PackageBuilder::new("ludeon.rimworld.royalty").supported_versions(&[]),
	]).unwrap();

	let report = validate(&ws, "1.6", &BaseContent::default());
	assert_eq!(names(report.incompatible), vec!["ludeon.rimworld.royalty"]);
}

#[test]
fn dependencies_are_case_insensitive() {
	let ws = working_set([
		PackageBuilder::new("m").depends(&["Brrainz.Harmony"]).unwrap(),
		PackageBuilder::new("brrainz.harmony"),
	]).unwrap();

	assert!(validate(&ws, "1.6", &BaseContent::default()).is_ok());
}
