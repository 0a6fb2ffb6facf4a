//! Nested `div` markup generator.

use gridkit_core::{GridItem, GridSettingsMap};

use crate::classes::{container_classes, item_classes};
use crate::options::CodegenOptions;

/// Markup generator over a fixed set of options.
pub struct MarkupGenerator<'a> {
    options: &'a CodegenOptions,
}

impl<'a> MarkupGenerator<'a> {
    pub fn new(options: &'a CodegenOptions) -> Self {
        Self { options }
    }

    /// Render the root grid and every item below it.
    pub fn generate(&self, items: &[GridItem], settings: &GridSettingsMap) -> String {
        let mut lines = Vec::new();
        self.render_grid(items, settings, &self.options.root_class, 0, &mut lines);
        lines.join("\n")
    }

    fn render_grid(
        &self,
        items: &[GridItem],
        settings: &GridSettingsMap,
        marker: &str,
        depth: usize,
        lines: &mut Vec<String>,
    ) {
        let spaces = self.spaces(depth);
        let mut classes = vec!["grid".to_string()];
        if !marker.is_empty() {
            classes.push(marker.to_string());
        }
        classes.extend(container_classes(settings));
        let open = format!("{}<div{}>", spaces, self.class_attribute(&classes));

        if items.is_empty() {
            lines.push(format!("{}</div>", open));
            return;
        }

        lines.push(open);
        for item in items {
            self.render_item(item, depth + 1, lines);
        }
        lines.push(format!("{}</div>", spaces));
    }

    fn render_item(&self, item: &GridItem, depth: usize, lines: &mut Vec<String>) {
        let spaces = self.spaces(depth);
        let attribute = self.class_attribute(&item_classes(&item.layout));

        match &item.grid {
            Some(grid) => {
                lines.push(format!("{}<div{}>", spaces, attribute));
                self.render_grid(
                    &grid.children,
                    &grid.settings,
                    &self.options.nested_class,
                    depth + 1,
                    lines,
                );
                lines.push(format!("{}</div>", spaces));
            }
            None => {
                let label = if self.options.item_labels {
                    format!("Item {}", item.id)
                } else {
                    String::new()
                };
                lines.push(format!("{}<div{}>{}</div>", spaces, attribute, label));
            }
        }
    }

    fn class_attribute(&self, classes: &[String]) -> String {
        if classes.is_empty() {
            return String::new();
        }
        format!(
            " {}=\"{}\"",
            self.options.flavor.class_attribute(),
            escape_attribute(&classes.join(" "))
        )
    }

    fn spaces(&self, depth: usize) -> String {
        " ".repeat(depth * self.options.indent)
    }
}

/// Generate markup for a layout.
///
/// An empty item list yields a single empty container element.
pub fn generate_code(
    items: &[GridItem],
    settings: &GridSettingsMap,
    options: &CodegenOptions,
) -> String {
    MarkupGenerator::new(options).generate(items, settings)
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::{create_layout_map, Axis, Breakpoint, ItemId, SubGrid};

    fn sample_items() -> Vec<GridItem> {
        let mut first = create_layout_map();
        first[Breakpoint::Xs].col_start = "1".into();
        first[Breakpoint::Xs].col_end = "3".into();
        first[Breakpoint::Xs].order = "1".into();
        first[Breakpoint::Md].col_span = 2;

        let mut nested = create_layout_map();
        nested[Breakpoint::Xs].row_span = 2;

        let mut second = create_layout_map();
        second[Breakpoint::Xs].order = "2".into();

        let mut grid = SubGrid::new(GridSettingsMap::subgrid_default());
        grid.children.push(GridItem::leaf(ItemId(3), "amber").with_layout(nested));

        vec![
            GridItem::leaf(ItemId(1), "sky").with_layout(first),
            GridItem::leaf(ItemId(2), "emerald")
                .with_layout(second)
                .with_grid(grid),
        ]
    }

    #[test]
    fn test_empty_root() {
        let code = generate_code(&[], &GridSettingsMap::default(), &CodegenOptions::default());
        insta::assert_snapshot!(code, @r#"<div class="grid w-full grid-cols-4 grid-rows-4 gap-4"></div>"#);
    }

    #[test]
    fn test_nested_markup() {
        let mut settings = GridSettingsMap::default();
        for bp in [Breakpoint::Lg, Breakpoint::Xl, Breakpoint::Xxl] {
            settings[bp].set_count(Axis::Column, 12);
        }

        let code = generate_code(&sample_items(), &settings, &CodegenOptions::default());
        insta::assert_snapshot!(code, @r#"
        <div class="grid w-full grid-cols-4 grid-rows-4 gap-4 lg:grid-cols-12">
          <div class="col-start-1 col-end-3 order-1 md:col-span-2">Item 1</div>
          <div class="order-2">
            <div class="grid size-full grid-cols-2 grid-rows-2 gap-2">
              <div class="row-span-2">Item 3</div>
            </div>
          </div>
        </div>
        "#);
    }

    #[test]
    fn test_jsx_flavor_without_labels() {
        let options = CodegenOptions {
            item_labels: false,
            indent: 4,
            ..CodegenOptions::jsx()
        };
        let items = vec![GridItem::leaf(ItemId(1), "sky")];
        let code = generate_code(&items, &GridSettingsMap::default(), &options);
        insta::assert_snapshot!(code, @r#"
        <div className="grid w-full grid-cols-4 grid-rows-4 gap-4">
            <div></div>
        </div>
        "#);
    }

    #[test]
    fn test_empty_subgrid_is_self_closing_line() {
        let items = vec![GridItem::leaf(ItemId(7), "rose")
            .with_grid(SubGrid::new(GridSettingsMap::subgrid_default()))];
        let code = generate_code(&items, &GridSettingsMap::default(), &CodegenOptions::default());
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[2],
            r#"    <div class="grid size-full grid-cols-2 grid-rows-2 gap-2"></div>"#
        );
    }

    #[test]
    fn test_attribute_escaping() {
        assert_eq!(escape_attribute(r#"a"b<c>&"#), "a&quot;b&lt;c&gt;&amp;");
    }
}
