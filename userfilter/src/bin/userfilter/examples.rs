use crate::commands::{catalog, list, lookup};

#[derive(Clone, Copy)]
pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

#[derive(Clone, Copy)]
pub struct CommandExample {
    pub name: &'static str,
    pub groups: &'static [ExampleGroup],
}

pub fn command_examples() -> &'static [CommandExample] {
    &[
        CommandExample {
            name: "fields",
            groups: list::FIELD_EXAMPLES,
        },
        CommandExample {
            name: "types",
            groups: list::TYPE_EXAMPLES,
        },
        CommandExample {
            name: "label",
            groups: lookup::LABEL_EXAMPLES,
        },
        CommandExample {
            name: "discriminator",
            groups: lookup::DISCRIMINATOR_EXAMPLES,
        },
        CommandExample {
            name: "catalog",
            groups: catalog::EXAMPLES,
        },
    ]
}
