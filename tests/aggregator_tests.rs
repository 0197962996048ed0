mod common;

use common::{table, POWER_COLUMNS, THERMAL_COLUMNS};
use perflog::aggregator::{
    classify_column, group_columns, reduce, reduce_by_group, total_energy, total_power_series,
    ColumnClass, Group, ReduceMethod,
};
use perflog::parser::parse_table;
use perflog::utils::TransformError;
use pretty_assertions::assert_eq;

#[test]
fn test_group_mixed_columns() {
    let groups = group_columns(&["Core_0_Temp", "Core_0_Util", "TotalPower"]);

    assert_eq!(
        groups,
        vec![
            Group {
                key: "Core_0".to_string(),
                columns: vec!["Core_0_Temp".to_string(), "Core_0_Util".to_string()],
            },
            Group {
                key: "TotalPower".to_string(),
                columns: vec!["TotalPower".to_string()],
            },
        ]
    );
}

#[test]
fn test_group_power_log_columns() {
    let groups = group_columns(&POWER_COLUMNS);
    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();

    assert_eq!(keys, vec!["Core_0", "Core_1", "Uncore"]);
    assert_eq!(groups[1].columns, vec!["Core_1_Dynamic", "Core_1_Static"]);
}

#[test]
fn test_group_thermal_columns_are_their_own_keys() {
    let groups = group_columns(&THERMAL_COLUMNS);
    assert_eq!(groups.len(), 4);
    assert!(groups.iter().all(|g| g.columns == vec![g.key.clone()]));
}

#[test]
fn test_groups_partition_columns() {
    let columns = ["Cluster_12_A", "Core_3", "fan", "Cluster_12_B", "Core_30", "fan2"];
    let groups = group_columns(&columns);

    let mut seen: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.columns.iter().map(String::as_str))
        .collect();
    seen.sort_unstable();
    let mut expected = columns.to_vec();
    expected.sort_unstable();

    assert_eq!(seen, expected);
    assert_eq!(classify_column("Core_30"), ColumnClass::Grouped("Core_30"));
}

#[test]
fn test_reduce_two_column_group() {
    let source = table(&["A_0_x", "A_0_y"], vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
    let groups = group_columns(source.columns());

    let summed = reduce(&source, &groups, ReduceMethod::Sum).unwrap();
    let maxed = reduce(&source, &groups, ReduceMethod::Maximum).unwrap();

    assert_eq!(summed.column("A_0"), Some(vec![4.0, 6.0]));
    assert_eq!(maxed.column("A_0"), Some(vec![3.0, 4.0]));
}

#[test]
fn test_reduce_by_group_power_log() {
    let source = table(
        &POWER_COLUMNS,
        vec![vec![1.0, 0.5, 2.0, 0.5, 3.0], vec![1.5, 0.5, 2.5, 0.5, 3.0]],
    );

    let reduced = reduce_by_group(&source, ReduceMethod::Sum).unwrap();

    assert_eq!(reduced.columns(), &["Core_0".to_string(), "Core_1".to_string(), "Uncore".to_string()][..]);
    assert_eq!(reduced.len(), 2);
    assert_eq!(reduced.row(0), Some(&[1.5, 2.5, 3.0][..]));
    assert_eq!(reduced.row(1), Some(&[2.0, 3.0, 3.0][..]));
}

#[test]
fn test_unknown_method_is_invalid_argument() {
    assert!(matches!(
        "median".parse::<ReduceMethod>(),
        Err(TransformError::InvalidArgument(_))
    ));
}

#[test]
fn test_energy_of_power_log() {
    assert_eq!(total_energy([1.0, 2.0, 3.0], 0.5), 3.0);

    let source = table(&["Core_0", "Core_1"], vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 1.0]]);
    let power = total_power_series(&source);

    assert_eq!(power.values(), &[2.0, 4.0, 4.0]);
    assert_eq!(total_energy(&power, 0.25), 2.5);
}

#[test]
fn test_group_reductions_skip_nan() {
    let source = parse_table("Core_0_A\tCore_0_B\n1\tnan\nnan\tnan\n").unwrap();

    let summed = reduce_by_group(&source, ReduceMethod::Sum).unwrap();
    assert_eq!(summed.column("Core_0"), Some(vec![1.0, 0.0]));

    let maxed = reduce_by_group(&source, ReduceMethod::Maximum).unwrap();
    let values = maxed.column("Core_0").unwrap();
    assert_eq!(values[0], 1.0);
    assert!(values[1].is_nan());
}
