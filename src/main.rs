use std::io;

use checkicons::{generate_all, GeneratorConfig, IconError};

fn main() -> Result<(), IconError> {
    let cfg = GeneratorConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_all(&cfg, &mut out)
}
