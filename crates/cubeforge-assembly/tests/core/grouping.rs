use cubeforge_assembly::{compute_groups, Assembly};
use cubeforge_core::{GroupId, Module, ModuleId, ModuleKind, Vec3};

fn module(id: u64, x: f64, y: f64, z: f64) -> Module {
    Module {
        id: ModuleId(id),
        position: Vec3::new(x, y, z),
        color_index: 0,
        kind: ModuleKind::Default,
    }
}

fn assembly_of(modules: &[Module]) -> Assembly {
    let mut assembly = Assembly::new();
    for m in modules {
        assembly.insert(*m);
    }
    assembly
}

#[test]
fn test_adjacent_pair_and_remote_singleton() {
    let assembly = assembly_of(&[
        module(1, 0.0, 0.0, 0.0),
        module(2, 1.0, 0.0, 0.0),
        module(3, 5.0, 0.0, 5.0),
    ]);

    let groups = compute_groups(&assembly);
    assert_eq!(groups.len(), 2);

    let pair = groups.group_of(ModuleId(1)).unwrap();
    assert_eq!(groups.group_of(ModuleId(2)), Some(pair));
    assert_eq!(groups.members(pair).unwrap().len(), 2);

    let singleton = groups.group_of(ModuleId(3)).unwrap();
    assert_ne!(singleton, pair);
    assert_eq!(groups.members(singleton).unwrap(), &[ModuleId(3)]);
}

#[test]
fn test_diagonal_adjacency_connects() {
    let assembly = assembly_of(&[module(1, 0.0, 0.0, 0.0), module(2, 1.0, 1.0, 1.0)]);
    let groups = compute_groups(&assembly);
    assert_eq!(groups.len(), 1);
}

#[test]
fn test_transitive_connectivity_spans_chains() {
    // A chain where the endpoints are far apart but linked through the
    // middle.
    let assembly = assembly_of(&[
        module(1, 0.0, 0.0, 0.0),
        module(2, 1.0, 0.0, 0.0),
        module(3, 2.0, 0.0, 0.0),
        module(4, 3.0, 0.0, 0.0),
    ]);

    let groups = compute_groups(&assembly);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.members(GroupId(0)).unwrap().len(), 4);
}

#[test]
fn test_groups_partition_the_assembly() {
    let assembly = assembly_of(&[
        module(1, 0.0, 0.0, 0.0),
        module(2, 1.0, 0.0, 0.0),
        module(3, 4.0, 0.0, 0.0),
        module(4, 4.0, 0.0, 1.0),
        module(5, -8.0, 0.0, 3.0),
    ]);

    let groups = compute_groups(&assembly);
    let mut seen: Vec<ModuleId> = groups
        .iter()
        .flat_map(|(_, members)| members.iter().copied())
        .collect();
    seen.sort();

    let mut expected: Vec<ModuleId> = assembly.modules().iter().map(|m| m.id).collect();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn test_recomputation_is_isomorphic() {
    let assembly = assembly_of(&[
        module(1, 0.0, 0.0, 0.0),
        module(2, 1.0, 0.0, 0.0),
        module(3, 5.0, 0.0, 5.0),
    ]);

    let first = compute_groups(&assembly);
    let second = compute_groups(&assembly);

    // Same member sets; ids are only meaningful within one computation.
    for (_, members) in first.iter() {
        let anchor = members[0];
        let other = second.group_of(anchor).unwrap();
        let mut a: Vec<ModuleId> = members.to_vec();
        let mut b: Vec<ModuleId> = second.members(other).unwrap().to_vec();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}

#[test]
fn test_fractional_positions_use_inclusive_threshold() {
    // Members of a rotated group sit at sub-grid offsets; adjacency keeps
    // the literal <= 1.0 threshold against them.
    let assembly = assembly_of(&[
        module(1, 0.0, 0.0, 0.0),
        module(2, 0.9, 0.3, -0.4),
        module(3, 2.1, 0.0, 0.0),
    ]);

    let groups = compute_groups(&assembly);
    assert_eq!(groups.group_of(ModuleId(1)), groups.group_of(ModuleId(2)));
    assert_ne!(groups.group_of(ModuleId(1)), groups.group_of(ModuleId(3)));
}

#[test]
fn test_empty_assembly_has_no_groups() {
    let groups = compute_groups(&Assembly::new());
    assert!(groups.is_empty());
    assert_eq!(groups.group_of(ModuleId(1)), None);
}
