//! Code generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridkit_codegen::{generate_code, CodegenOptions};
use gridkit_core::{Breakpoint, GridItem, GridSettingsMap, ItemId, LayoutField, SubGrid};

fn nested_tree(roots: u64, children: u64) -> Vec<GridItem> {
    let mut next = 0;
    let mut id = || {
        next += 1;
        ItemId(next)
    };
    (0..roots)
        .map(|r| {
            let mut grid = SubGrid::new(GridSettingsMap::subgrid_default());
            for c in 0..children {
                let mut child = GridItem::leaf(id(), "rose");
                child.layout[Breakpoint::Md].set_field(LayoutField::ColStart, &(c % 2 + 1).to_string());
                child.layout[Breakpoint::Lg].set_field(LayoutField::RowSpan, "2");
                grid.children.push(child);
            }
            let mut item = GridItem::leaf(id(), "sky").with_grid(grid);
            item.layout[Breakpoint::Sm].set_field(LayoutField::ColSpan, &(r % 3 + 1).to_string());
            item
        })
        .collect()
}

fn generate_nested(c: &mut Criterion) {
    let items = nested_tree(16, 8);
    let settings = GridSettingsMap::default();
    let html = CodegenOptions::default();
    c.bench_function("generate_16x8_html", |b| {
        b.iter(|| generate_code(black_box(&items), &settings, &html))
    });
}

fn generate_flat(c: &mut Criterion) {
    let items = nested_tree(128, 0);
    let settings = GridSettingsMap::default();
    let options = CodegenOptions::default();
    c.bench_function("generate_128_flat", |b| {
        b.iter(|| generate_code(black_box(&items), &settings, &options))
    });
}

criterion_group!(benches, generate_nested, generate_flat);
criterion_main!(benches);
