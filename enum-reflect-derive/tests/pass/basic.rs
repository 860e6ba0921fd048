use enum_reflect::{get_name, get_size, get_value, EnumReflect};

#[derive(Debug, Clone, Copy, PartialEq, EnumReflect)]
enum Color {
    Red,
    Green,
    Blue,
}

fn main() {
    assert_eq!(get_size::<Color>(), 3);
    assert_eq!(get_name(Color::Green), Ok("Green"));
    assert_eq!(get_value::<Color>("Blue"), Ok(Color::Blue));
}
