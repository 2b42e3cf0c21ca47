use crate::cli::SceneArgs;
use crate::config::DisplayConfig;
use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};
use xtalscene::engine::policy::{ViewCategory, VisibilityPolicy};
use xtalscene::engine::scene::Scene;
use xtalscene::workflows::derive;

pub fn run(args: SceneArgs) -> Result<()> {
    let record = super::load_structure(&args.input)?;

    let mut policy = VisibilityPolicy::new();
    policy.rebuild_elements(record.element_symbols());

    if let Some(path) = &args.config {
        DisplayConfig::from_file(path)?.apply(&mut policy);
    }
    apply_flags(&args, &mut policy);

    let scene = derive::run(&record, &policy);

    match &args.output {
        Some(path) => {
            write_scene_file(&scene, path)?;
            info!(path = %path.display(), "Scene written.");
        }
        None => write_scene_stdout(&scene)?,
    }

    Ok(())
}

/// Flags override whatever the configuration file set.
fn apply_flags(args: &SceneArgs, policy: &mut VisibilityPolicy) {
    if args.no_atoms {
        policy.set_category(ViewCategory::Atoms, false);
    }
    if args.no_bonds {
        policy.set_category(ViewCategory::Bonds, false);
    }
    if args.no_cell {
        policy.set_category(ViewCategory::UnitCell, false);
    }
    for symbol in &args.hide {
        if !policy.set_element(symbol, false) {
            warn!(
                element = %symbol,
                "Ignoring --hide for an element the structure does not contain."
            );
        }
    }
}

fn write_scene_file(scene: &Scene, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, scene).map_err(|source| CliError::SceneWrite {
        path: path.to_path_buf(),
        source,
    })?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn write_scene_stdout(scene: &Scene) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, scene).map_err(io::Error::from)?;
    writeln!(handle)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn base_args(input: std::path::PathBuf) -> SceneArgs {
        SceneArgs {
            input,
            output: None,
            config: None,
            no_atoms: false,
            no_bonds: false,
            no_cell: false,
            hide: Vec::new(),
        }
    }

    fn sample_policy() -> VisibilityPolicy {
        let mut policy = VisibilityPolicy::new();
        policy.rebuild_elements(["Fe", "O"]);
        policy
    }

    #[test]
    fn flags_turn_off_categories() {
        let mut policy = sample_policy();
        let mut args = base_args(std::path::PathBuf::new());
        args.no_bonds = true;
        args.no_cell = true;

        apply_flags(&args, &mut policy);

        assert!(policy.categories().atoms);
        assert!(!policy.categories().bonds);
        assert!(!policy.categories().unit_cell);
    }

    #[test]
    fn hide_flag_targets_known_elements_only() {
        let mut policy = sample_policy();
        let mut args = base_args(std::path::PathBuf::new());
        args.hide = vec!["Fe".to_string(), "Xx".to_string()];

        apply_flags(&args, &mut policy);

        assert_eq!(policy.element("Fe"), Some(false));
        assert_eq!(policy.element("O"), Some(true));
        assert_eq!(policy.element("Xx"), None);
    }

    #[test]
    fn run_writes_a_scene_document_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fe.json");
        let output = dir.path().join("scene.json");
        fs::write(
            &input,
            r#"{
                "atoms": [
                    {
                        "index": 0,
                        "element": "Fe",
                        "fractional_coordinates": [0.0, 0.0, 0.0],
                        "cartesian_coordinates": [0.0, 0.0, 0.0]
                    }
                ],
                "bonds": [],
                "lattice_parameters": {
                    "a": 2.87, "b": 2.87, "c": 2.87,
                    "alpha": 90.0, "beta": 90.0, "gamma": 90.0
                }
            }"#,
        )
        .unwrap();

        let mut args = base_args(input);
        args.output = Some(output.clone());
        run(args).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["spheres"].as_array().unwrap().len(), 1);
        assert_eq!(value["segments"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn run_respects_hide_and_category_flags_together() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fe.json");
        let output = dir.path().join("scene.json");
        fs::write(
            &input,
            r#"{
                "atoms": [
                    {
                        "index": 0,
                        "element": "Fe",
                        "fractional_coordinates": [0.0, 0.0, 0.0],
                        "cartesian_coordinates": [0.0, 0.0, 0.0]
                    }
                ],
                "bonds": [],
                "lattice_parameters": {
                    "a": 2.87, "b": 2.87, "c": 2.87,
                    "alpha": 90.0, "beta": 90.0, "gamma": 90.0
                }
            }"#,
        )
        .unwrap();

        let mut args = base_args(input);
        args.output = Some(output.clone());
        args.no_cell = true;
        args.hide = vec!["Fe".to_string()];
        run(args).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert!(value["spheres"].as_array().unwrap().is_empty());
        assert!(value["segments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn missing_input_reports_the_path() {
        let args = base_args(std::path::PathBuf::from("/nonexistent/structure.json"));
        let err = run(args).unwrap_err();
        assert!(matches!(err, CliError::StructureRead { .. }));
        assert!(err.to_string().contains("/nonexistent/structure.json"));
    }
}
