use rimtag_rs::load_order::DependencyGraph;
use rimtag_rs::{BaseContent, PackageId, WorkingSet};
use rimtag_rs_test_utils::*;

fn index(ws: &WorkingSet, id: &str) -> usize {
	ws.index_of(&PackageId::new(id)).expect("package should be in working set")
}

#[test]
fn load_after_adds_predecessor() {
	let ws = working_set([
		PackageBuilder::new("a").load_after("b"),
		PackageBuilder::new("b"),
	]).unwrap();
	let graph = DependencyGraph::build(&ws, &BaseContent::default());

	assert!(graph.has_edge(index(&ws, "b"), index(&ws, "a")));
	assert_eq!(graph.edge_count(), 1);
}

#[test]
fn load_before_is_translated_to_load_after() {
	let ws = working_set([
		PackageBuilder::new("a").load_before("b"),
		PackageBuilder::new("b"),
	]).unwrap();
	let graph = DependencyGraph::build(&ws, &BaseContent::default());

	assert_eq!(graph.predecessors(index(&ws, "b")).collect::<Vec<_>>(), vec![index(&ws, "a")]);
	assert_eq!(graph.dependents(index(&ws, "a")).collect::<Vec<_>>(), vec![index(&ws, "b")]);
}

#[test]
fn forced_hints_are_equal_to_normal_hints() {
	let ws = working_set([
		PackageBuilder::new("a").force_load_after("b").force_load_before("c"),
		PackageBuilder::new("b"),
		PackageBuilder::new("c"),
	]).unwrap();
	let graph = DependencyGraph::build(&ws, &BaseContent::default());

	assert!(graph.has_edge(index(&ws, "b"), index(&ws, "a")));
	assert!(graph.has_edge(index(&ws, "a"), index(&ws, "c")));
}

#[test]
fn unresolved_references_are_ignored() {
	let ws = working_set([
		PackageBuilder::new("a").load_after("not.installed").load_before("also.missing"),
	]).unwrap();
	let graph = DependencyGraph::build(&ws, &BaseContent::default());

	assert_eq!(graph.node_count(), 1);
	assert_eq!(graph.edge_count(), 0);
}

#[test]
fn redundant_hints_give_a_single_edge() {
	/* Both sides declare the same relation */
	let ws = working_set([
		PackageBuilder::new("a").load_after("b").force_load_after("B"),
		PackageBuilder::new("b").load_before("a"),
	]).unwrap();
	let graph = DependencyGraph::build(&ws, &BaseContent::default());

	assert_eq!(graph.edge_count(), 1);
}

#[test]
fn relinking_is_idempotent() {
	let ws = working_set([
		PackageBuilder::new("a").load_after("b"),
		PackageBuilder::new("b").load_before("c"),
		PackageBuilder::new("c").third_party(),
		PackageBuilder::new("ludeon.rimworld"),
	]).unwrap();
	let base = BaseContent::default();
	let mut graph = DependencyGraph::build(&ws, &base);

	let edges = graph.edge_count();
	let predecessors: Vec<usize> = (0..ws.len()).map(|i| graph.predecessors(i).count()).collect();

	graph.link_packages(&ws, &base);

	assert_eq!(graph.edge_count(), edges);
	assert_eq!((0..ws.len()).map(|i| graph.predecessors(i).count()).collect::<Vec<_>>(), predecessors);
}

#[test]
fn third_party_packages_load_after_base_content() {
	let ws = working_set([
		PackageBuilder::new("ludeon.rimworld"),
		PackageBuilder::new("ludeon.rimworld.royalty"),
		PackageBuilder::new("ludeon.rimworld.biotech"),
		PackageBuilder::new("brrainz.harmony").third_party(),
	]).unwrap();
	let graph = DependencyGraph::build(&ws, &BaseContent::default());

	let harmony = index(&ws, "brrainz.harmony");
	let mut predecessors = names(graph.predecessors(harmony).map(|i| ws[i].identifier.clone()));
	predecessors.sort();
	assert_eq!(predecessors, vec!["ludeon.rimworld", "ludeon.rimworld.biotech", "ludeon.rimworld.royalty"]);

	/* Official content gets no implicit ordering */
	assert_eq!(graph.predecessors(index(&ws, "ludeon.rimworld.royalty")).count(), 0);
}

#[test]
fn loading_before_base_game_skips_implicit_ordering() {
	let ws = working_set([
		PackageBuilder::new("ludeon.rimworld"),
		PackageBuilder::new("early.patcher").third_party().load_before("Ludeon.RimWorld"),
	]).unwrap();
	let graph = DependencyGraph::build(&ws, &BaseContent::default());

	assert!(graph.has_edge(index(&ws, "early.patcher"), index(&ws, "ludeon.rimworld")));
	assert_eq!(graph.edge_count(), 1);
}

#[test]
fn custom_base_content_is_used() {
	let base = BaseContent { base: PackageId::new("core"), expansions: vec![PackageId::new("dlc")] };
	let ws = working_set([
		PackageBuilder::new("core"),
		PackageBuilder::new("dlc"),
		PackageBuilder::new("local.mod").source(rimtag_rs::package::SourceKind::Local),
	]).unwrap();
	let graph = DependencyGraph::build(&ws, &base);

	assert!(graph.has_edge(index(&ws, "core"), index(&ws, "local.mod")));
	assert!(graph.has_edge(index(&ws, "dlc"), index(&ws, "local.mod")));
	assert_eq!(graph.edge_count(), 2);
}

#[test]
fn hints_are_case_insensitive() {
	let ws = working_set([
		PackageBuilder::new("Author.Mod").load_after("AUTHOR.LIB"),
		PackageBuilder::new("author.lib"),
	]).unwrap();
	let graph = DependencyGraph::build(&ws, &BaseContent::default());

	assert!(graph.has_edge(index(&ws, "author.lib"), index(&ws, "author.mod")));
}
