//! JSON persistence of the extracted collections

use crate::pipeline::AnalysisReport;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TYPE_DATA_FILE: &str = "typeData.json";
pub const METHOD_DATA_FILE: &str = "methodData.json";

/// `<output>/<app>/`, created if missing
pub fn prepare_output_dir(output: &Path, app_name: &str) -> Result<PathBuf> {
    let dir = output.join(app_name);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    Ok(dir)
}

/// Write `typeData.json` and `methodData.json` into `dir`
pub fn save_data(report: &AnalysisReport, dir: &Path) -> Result<()> {
    let entities: Vec<_> = report.entities().collect();
    let executables: Vec<_> = report.executables().collect();

    write_json(&dir.join(TYPE_DATA_FILE), &entities)?;
    write_json(&dir.join(METHOD_DATA_FILE), &executables)?;
    info!("Saved data in {}", dir.display());
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::pipeline::analyze;
    use serde_json::Value;
    use tempfile::TempDir;

    #[test]
    fn test_save_data_writes_both_files() {
        let source = TempDir::new().unwrap();
        let app_dir = source.path().join("shop");
        fs::create_dir_all(app_dir.join("cart")).unwrap();
        fs::write(app_dir.join("cart/go.mod"), "module cart\n").unwrap();
        fs::write(
            app_dir.join("cart/cart.go"),
            "package cart\n\ntype Cart struct{}\n\nfunc (c *Cart) Add() {}\n",
        )
        .unwrap();

        let report = analyze(&app_dir, &AnalyzerConfig::default()).unwrap();
        let output = TempDir::new().unwrap();
        let dir = prepare_output_dir(output.path(), &report.app_name).unwrap();
        save_data(&report, &dir).unwrap();

        assert_eq!(dir, output.path().join("shop"));

        let types: Value =
            serde_json::from_str(&fs::read_to_string(dir.join(TYPE_DATA_FILE)).unwrap()).unwrap();
        assert_eq!(types[0]["fullName"], "$$cart$$$Cart");
        assert_eq!(types[0]["serviceName"], "shop-cart");
        assert_eq!(types[0]["isInterface"], false);
        assert_eq!(types[0]["isAnnotation"], false);
        assert_eq!(
            types[0]["content"],
            "Cart struct{}\n\nfunc (c *Cart) Add() {}"
        );

        let methods: Value =
            serde_json::from_str(&fs::read_to_string(dir.join(METHOD_DATA_FILE)).unwrap())
                .unwrap();
        assert_eq!(methods[0]["fullName"], "$$cart$$$Cart.Add()");
        assert_eq!(methods[0]["parentName"], "$$cart$$$Cart");
    }

    #[test]
    fn test_empty_report_writes_empty_arrays() {
        let source = TempDir::new().unwrap();
        let report = analyze(source.path(), &AnalyzerConfig::default()).unwrap();
        let output = TempDir::new().unwrap();

        save_data(&report, output.path()).unwrap();
        assert_eq!(
            fs::read_to_string(output.path().join(TYPE_DATA_FILE)).unwrap(),
            "[]"
        );
    }
}
