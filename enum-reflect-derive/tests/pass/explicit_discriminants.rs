use enum_reflect::EnumReflect;

#[derive(Debug, Clone, Copy, PartialEq, EnumReflect)]
enum Signal {
    Hangup = 1,
    Interrupt = 2,
    Kill = 9,
    Terminate = 15,
}

fn main() {
    assert_eq!(Signal::Kill.discriminant(), 9);
    assert_eq!(Signal::DESCRIPTOR.name_of(15), Ok("Terminate"));
    assert!(Signal::DESCRIPTOR.name_of(3).is_err());
}
