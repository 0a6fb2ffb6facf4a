//! Code generation options.

/// Markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Flavor {
    /// `class="..."`
    #[default]
    Html,
    /// `className="..."`
    Jsx,
}

impl Flavor {
    pub const fn class_attribute(self) -> &'static str {
        match self {
            Flavor::Html => "class",
            Flavor::Jsx => "className",
        }
    }
}

/// Options for [`generate_code`](crate::generate_code).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CodegenOptions {
    pub flavor: Flavor,
    /// Spaces per nesting level
    pub indent: usize,
    /// Marker class of the outermost grid
    pub root_class: String,
    /// Marker class of grids nested in an item, filling the parent cell
    pub nested_class: String,
    /// Emit `Item N` text inside leaf items
    pub item_labels: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            flavor: Flavor::Html,
            indent: 2,
            root_class: "w-full".to_string(),
            nested_class: "size-full".to_string(),
            item_labels: true,
        }
    }
}

impl CodegenOptions {
    pub fn jsx() -> Self {
        Self {
            flavor: Flavor::Jsx,
            ..Self::default()
        }
    }
}
