use serde::Serialize;
use std::path::PathBuf;

pub const BACKGROUND: [u8; 3] = [102, 126, 234];
pub const FOREGROUND: [u8; 3] = [255, 255, 255];
pub const SIZES: [u32; 4] = [16, 32, 48, 128];

#[derive(Debug, Clone, Serialize)]
pub struct GeneratorConfig {
    pub out_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub background: [u8; 3],
    pub foreground: [u8; 3],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("icons"),
            sizes: SIZES.to_vec(),
            background: BACKGROUND,
            foreground: FOREGROUND,
        }
    }
}

impl GeneratorConfig {
    /// Output path for one icon, e.g. `icons/icon16.png`
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.out_dir.join(format!("icon{}.png", size))
    }
}
