// Shared fixtures for contentstats integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header row written by the MonoGame content pipeline
pub const HEADER: &str = "\"Source File\",\"Dest File\",\"Processor Type\",\"Content Type\",\"Source File Size\",\"Dest File Size\",\"Build Seconds\"";

/// Three rows: two textures and one effect
pub const SAMPLE_ROWS: &[&str] = &[
    "\"Content/hero.png\",\"bin/hero.xnb\",\"TextureProcessor\",\"Texture2DContent\",\"2048\",\"100\",\"2.0\"",
    "\"Content/tiles.png\",\"bin/tiles.xnb\",\"TextureProcessor\",\"Texture2DContent\",\"4096\",\"50\",\"1.0\"",
    "\"Content/glow.fx\",\"bin/glow.xnb\",\"EffectProcessor\",\"EffectContent\",\"512\",\"200\",\"3.0\"",
];

/// Build a stats document from the standard header and `rows`
pub fn stats_document(rows: &[&str]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// Temporary directory holding stats and config files for one test
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write `content` to `name` inside the workspace
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the three-row sample as `name`
    pub fn sample(&self, name: &str) -> PathBuf {
        self.write(name, &stats_document(SAMPLE_ROWS))
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
