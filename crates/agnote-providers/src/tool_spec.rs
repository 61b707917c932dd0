use agnote_types::ToolKind;

/// Tool specification with its semantic kind
pub struct ToolSpec {
    pub name: &'static str,
    pub kind: ToolKind,
}

impl ToolSpec {
    pub const fn new(name: &'static str, kind: ToolKind) -> Self {
        Self { name, kind }
    }
}
