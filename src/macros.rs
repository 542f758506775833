/// Builds a [`DataSet`](crate::DataSet) tree declaratively.
///
/// A node is written as its name, an optional `{ key => value, ... }` block of
/// attributes, and an optional `[ child, ... ]` list of nested `dataset!`
/// invocations (or any expression producing a `DataSet`). Values go through
/// `Into<Value>`, so literal suffixes pick the stored type.
///
/// # Examples
///
/// ```rust
/// use dataset_show::{dataset, KeyType};
///
/// let root = dataset!("DimmList" [
///     dataset!("Dimm" { "DimmID" => "0x0001", "Capacity" => 16u64 } [
///         dataset!("Sensor" { "Temp" => 41i32, "Alarm" => false }),
///     ]),
///     dataset!("Dimm" { "DimmID" => "0x0101" }),
/// ]);
///
/// assert_eq!(root.node_count(), 4);
/// let info = root.find("Dimm/Sensor").unwrap().next_key(None).unwrap();
/// assert_eq!((info.key, info.key_type), ("Temp", KeyType::I32));
/// ```
#[macro_export]
macro_rules! dataset {
    // Literal name and children
    ($name:literal [ $($child:expr),* $(,)? ]) => {
        $crate::dataset!($name, [ $($child),* ])
    };

    // Literal name, attributes and optional children
    ($name:literal { $($key:expr => $value:expr),* $(,)? } $([ $($child:expr),* $(,)? ])?) => {
        $crate::dataset!($name, { $($key => $value),* } $([ $($child),* ])?)
    };

    ($name:literal) => {
        $crate::DataSet::new($name)
    };

    ($name:expr, [ $($child:expr),* $(,)? ]) => {{
        #[allow(unused_mut)]
        let mut node = $crate::DataSet::new($name);
        $(
            node.push_child($child);
        )*
        node
    }};

    ($name:expr, { $($key:expr => $value:expr),* $(,)? } $([ $($child:expr),* $(,)? ])?) => {{
        #[allow(unused_mut)]
        let mut node = $crate::DataSet::new($name);
        $(
            node.set_value($key, $value);
        )*
        $($(
            node.push_child($child);
        )*)?
        node
    }};

    ($name:expr) => {
        $crate::DataSet::new($name)
    };
}
