use crate::cli::LegendArgs;
use crate::error::Result;
use xtalscene::core::elements::{color_of, covalent_radius, display_radius};
use xtalscene::core::models::structure::StructureRecord;
use xtalscene::engine::scene::{BOND_COLOR, CELL_EDGE_COLOR};

pub fn run(args: LegendArgs) -> Result<()> {
    let record = super::load_structure(&args.input)?;
    print_legend(&record);
    Ok(())
}

fn print_legend(record: &StructureRecord) {
    println!(
        "{:<8} {:>6}  {:<8} {:>14} {:>14}",
        "Element", "Count", "Color", "Covalent r (Å)", "Display r (Å)"
    );
    for (symbol, count) in element_counts(record) {
        println!(
            "{:<8} {:>6}  {:<8} {:>14.2} {:>14.3}",
            symbol,
            count,
            color_of(&symbol),
            covalent_radius(&symbol),
            display_radius(&symbol),
        );
    }
    println!();
    println!("Bonds:      {BOND_COLOR}");
    println!("Cell edges: {CELL_EDGE_COLOR}");
}

/// Per-element atom counts, ordered by first appearance in the record.
fn element_counts(record: &StructureRecord) -> Vec<(String, usize)> {
    record
        .element_symbols()
        .into_iter()
        .map(|symbol| {
            let count = record
                .atoms
                .iter()
                .filter(|atom| atom.element == symbol)
                .count();
            (symbol, count)
        })
        .collect()
}
