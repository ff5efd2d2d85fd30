use std::cell::RefCell;
use std::collections::HashSet;

use thrift2columnar::core::{Requirement, SchemaType};
use thrift2columnar::{
    FieldDescriptor, FieldPath, KeepAll, ProjectionFilter, PrunePaths, SchemaConverter,
    StructDescriptor, ThriftKind,
};

/// Filter that records every path it is asked about.
struct RecordingFilter {
    pruned: HashSet<String>,
    queried: RefCell<Vec<String>>,
}

impl RecordingFilter {
    fn pruning(paths: &[&str]) -> Self {
        Self {
            pruned: paths.iter().map(|p| p.to_string()).collect(),
            queried: RefCell::new(Vec::new()),
        }
    }
}

impl ProjectionFilter for RecordingFilter {
    fn keep(&self, path: &FieldPath, _kind: ThriftKind) -> bool {
        let path = path.to_string();
        self.queried.borrow_mut().push(path.clone());
        !self.pruned.contains(&path)
    }
}

fn scalar(name: &str, id: i16, kind: ThriftKind) -> FieldDescriptor {
    FieldDescriptor::scalar(name, id, kind, None)
}

fn person() -> StructDescriptor {
    let address = StructDescriptor::new(
        "Address",
        vec![
            scalar("street", 1, ThriftKind::String),
            scalar("city", 2, ThriftKind::String),
        ],
    );
    StructDescriptor::new(
        "Person",
        vec![
            FieldDescriptor::scalar("name", 1, ThriftKind::String, Some(Requirement::Required)),
            FieldDescriptor::structure("address", 2, None, address),
            FieldDescriptor::list("tags", 3, None, scalar("tags_elem", 1, ThriftKind::String)),
        ],
    )
}

#[test]
fn keep_all_keeps_everything() {
    let message = SchemaConverter::with_filter(KeepAll).convert(&person()).unwrap();
    let names: Vec<&str> = message.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["name", "address", "tags"]);
}

#[test]
fn pruning_a_leaf_keeps_sibling_order() {
    let filter = PrunePaths::new(["address.city"]);
    let message = SchemaConverter::with_filter(filter).convert(&person()).unwrap();

    let SchemaType::Struct(members) = &message.fields[1].schema_type else {
        panic!("expected struct");
    };
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "street");
}

#[test]
fn pruning_a_container_removes_the_whole_subtree() {
    let filter = PrunePaths::new(["address"]);
    let message = SchemaConverter::with_filter(filter).convert(&person()).unwrap();

    let names: Vec<&str> = message.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["name", "tags"]);
    assert_eq!(message.fields[1].id, 3);
}

#[test]
fn pruned_subtrees_are_never_visited() {
    let filter = RecordingFilter::pruning(&["address"]);
    let converter = SchemaConverter::with_filter(filter);
    converter.convert(&person()).unwrap();

    let queried = converter.filter().queried.borrow().clone();
    assert_eq!(queried, ["name", "address", "tags"]);
    assert!(queried.iter().all(|p| !p.starts_with("address.")));
}

#[test]
fn top_level_pruning_matches_worked_example() {
    let root = StructDescriptor::new(
        "Document",
        vec![
            FieldDescriptor::scalar("id", 1, ThriftKind::I32, Some(Requirement::Required)),
            FieldDescriptor::list(
                "tags",
                2,
                Some(Requirement::Optional),
                scalar("tags_elem", 1, ThriftKind::String),
            ),
            FieldDescriptor::map(
                "counts",
                3,
                Some(Requirement::Optional),
                scalar("key", 1, ThriftKind::String),
                scalar("value", 2, ThriftKind::I64),
            ),
        ],
    );
    let filter = PrunePaths::new(["tags"]);
    let message = SchemaConverter::with_filter(filter).convert(&root).unwrap();

    let names: Vec<&str> = message.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["id", "counts"]);
}

#[test]
fn field_path_renders_dotted() {
    let mut path = FieldPath::new();
    assert_eq!(path.to_string(), "");
    path.push("address");
    path.push("city");
    assert_eq!(path.to_string(), "address.city");
    assert_eq!(path.segments(), ["address", "city"]);
    path.pop();
    assert_eq!(path.to_string(), "address");
}
