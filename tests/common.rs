#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn gco2() -> Command {
    cargo_bin_cmd!("grocery-co2")
}

/// Saved copy of the reference page used by every test
pub fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path.to_string_lossy().to_string()
}

/// A scratch directory plus a config path inside it that does not exist yet,
/// so the defaults apply and the user's own config is never touched.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().to_string()
    }

    pub fn config(&self) -> String {
        self.path("grocery-co2.conf")
    }

    /// Command preloaded with the sandbox config and the saved reference page
    pub fn cmd(&self) -> Command {
        let mut cmd = gco2();
        cmd.args([
            "--config",
            &self.config(),
            "--source",
            &fixture("klimadatabase.html"),
        ]);
        cmd
    }

    pub fn write(&self, name: &str, content: &str) -> String {
        let path = self.path(name);
        fs::write(&path, content).expect("write sandbox file");
        path
    }
}

/// Distinct values of the first CSV column, header excluded
pub fn distinct_dates(csv_path: &Path) -> Vec<String> {
    let content = fs::read_to_string(csv_path).expect("read csv");
    let mut dates: Vec<String> = content
        .lines()
        .skip(1)
        .filter_map(|l| l.split(',').next())
        .map(str::to_string)
        .collect();
    dates.sort();
    dates.dedup();
    dates
}

pub const HISTORY_CSV: &str = "\
Date of Purchase,Product,Category,C02e pr kg,Agriculture,ILUC,Processing,Packaging,Transport,Retail
2024-01-01,Beef,Meat,30,25,2,1,1,0.5,0.5
2024-01-01,Milk,Dairy,1.2,0.9,0.1,0.1,0.05,0.03,0.02
2024-01-02,Potatoes,Vegetables,0.3,0.15,0.02,0.01,0.02,0.06,0.04
";
