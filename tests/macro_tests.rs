use dataset_show::{dataset, DataSet, KeyType, Value};

#[test]
fn test_dataset_macro_bare_node() {
    let node = dataset!("Dimm");
    assert_eq!(node, DataSet::new("Dimm"));
    assert!(node.is_leaf());
    assert_eq!(node.key_count(), 0);
}

#[test]
fn test_dataset_macro_attributes_pick_types() {
    let node = dataset!("Dimm" {
        "DimmID" => "0x0001",
        "Capacity" => 16u64,
        "Socket" => 1u8,
        "Temp" => -4i16,
        "Healthy" => true,
    });

    let types: Vec<_> = node.values().iter().map(|(_, v)| v.key_type()).collect();
    assert_eq!(
        types,
        [KeyType::WStr, KeyType::U64, KeyType::U8, KeyType::I16, KeyType::Bool]
    );
    assert_eq!(node.value("Temp"), Some(&Value::I16(-4)));
}

#[test]
fn test_dataset_macro_empty_blocks() {
    let node = dataset!("Dimm" {} []);
    assert_eq!(node, DataSet::new("Dimm"));

    let node = dataset!("Dimm" []);
    assert!(node.is_leaf());
}

#[test]
fn test_dataset_macro_nested() {
    let tree = dataset!("DimmList" [
        dataset!("Dimm" { "DimmID" => 1u16 } [
            dataset!("Sensor" { "Temp" => 40i32 }),
            dataset!("Sensor"),
        ]),
        dataset!("Dimm" { "DimmID" => 2u16 }),
    ]);

    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.find("Dimm[1]").unwrap().get::<u16>("DimmID"), Ok(2));
    assert!(tree.find("Dimm/Sensor[1]").unwrap().is_leaf());
}

#[test]
fn test_dataset_macro_runtime_names() {
    let ids = [3u16, 7];
    let dimms: Vec<DataSet> = ids
        .iter()
        .map(|id| dataset!(format!("Dimm{}", id), { "DimmID" => *id }))
        .collect();

    let mut root = dataset!(String::from("DimmList"));
    for dimm in dimms {
        root.push_child(dimm);
    }
    let key = "Extra";
    root.set_value(key, 1u8);

    assert_eq!(root.find("Dimm7").unwrap().get::<u16>("DimmID"), Ok(7));
    assert_eq!(root.child_count(), 2);
    assert!(root.contains_key("Extra"));
}

#[test]
fn test_dataset_macro_matches_builder() {
    let from_macro = dataset!("Dimm" { "DimmID" => "0x0001" } [
        dataset!("Sensor" { "Temp" => 41i32 }),
    ]);

    let mut built = DataSet::new("Dimm");
    built.set_wstr("DimmID", "0x0001");
    built.create_child("Sensor").set_i32("Temp", 41);

    assert_eq!(from_macro, built);
}
