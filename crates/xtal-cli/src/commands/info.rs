use crate::cli::InfoArgs;
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::info;
use xtalscene::core::models::structure::StructureRecord;

pub fn run(args: InfoArgs) -> Result<()> {
    let record = super::load_structure(&args.input)?;

    print_summary(&record);

    if let Some(path) = &args.atoms_csv {
        export_atoms_csv(&record, path)?;
        info!(path = %path.display(), "Atom table exported.");
    }
    if let Some(path) = &args.bonds_csv {
        export_bonds_csv(&record, path)?;
        info!(path = %path.display(), "Bond table exported.");
    }

    Ok(())
}

fn print_summary(record: &StructureRecord) {
    if let Some(formula) = &record.formula {
        println!("Formula:         {} ({})", formula.reduced, formula.pretty);
    }
    if let Some(group) = &record.space_group {
        match group.number {
            Some(number) => println!("Space group:     {} (#{})", group.symbol, number),
            None => println!("Space group:     {}", group.symbol),
        }
    }
    if let Some(system) = &record.crystal_system {
        println!("Crystal system:  {system}");
    }
    if let Some(group) = &record.point_group {
        println!("Point group:     {group}");
    }
    println!("Atoms:           {}", record.num_atoms());
    println!("Bonds:           {}", record.num_bonds());
    println!("Elements:        {}", record.element_symbols().join(", "));

    if let Some(lattice) = &record.lattice {
        println!();
        println!("Lattice parameters:");
        println!("  a = {:>9.4} Å   alpha = {:>8.3}°", lattice.a, lattice.alpha);
        println!("  b = {:>9.4} Å   beta  = {:>8.3}°", lattice.b, lattice.beta);
        println!("  c = {:>9.4} Å   gamma = {:>8.3}°", lattice.c, lattice.gamma);
        println!("  volume = {:.4} Å³", lattice.volume);
    }
}

fn export_atoms_csv(record: &StructureRecord, path: &Path) -> Result<()> {
    write_atom_rows(record, path).map_err(|source| CliError::CsvExport {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atom_rows(record: &StructureRecord, path: &Path) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "index", "element", "frac_x", "frac_y", "frac_z", "cart_x", "cart_y", "cart_z",
        "occupancy",
    ])?;
    for atom in &record.atoms {
        writer.write_record([
            atom.index.to_string(),
            atom.element.clone(),
            atom.fractional.x.to_string(),
            atom.fractional.y.to_string(),
            atom.fractional.z.to_string(),
            atom.cartesian.x.to_string(),
            atom.cartesian.y.to_string(),
            atom.cartesian.z.to_string(),
            atom.occupancy.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn export_bonds_csv(record: &StructureRecord, path: &Path) -> Result<()> {
    write_bond_rows(record, path).map_err(|source| CliError::CsvExport {
        path: path.to_path_buf(),
        source,
    })
}

fn write_bond_rows(record: &StructureRecord, path: &Path) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "atom1_index",
        "atom2_index",
        "atom1_element",
        "atom2_element",
        "distance",
    ])?;
    for bond in &record.bonds {
        writer.write_record([
            bond.atom1_index.to_string(),
            bond.atom2_index.to_string(),
            bond.atom1_element.clone(),
            bond.atom2_element.clone(),
            bond.distance.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
