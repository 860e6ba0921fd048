use enum_reflect::{get_size, EnumReflect};

#[derive(Debug, Clone, Copy, PartialEq, EnumReflect)]
enum Never {}

fn main() {
    assert_eq!(get_size::<Never>(), 0);
    assert!(Never::DESCRIPTOR.is_empty());
}
