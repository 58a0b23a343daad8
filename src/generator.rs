use std::io::Write;

use crate::config::GeneratorConfig;
use crate::error::IconError;
use crate::icon::{create_icon_with_colors, CheckmarkGeometry};
use crate::logger::{log_error, log_line};

/// Render and save every configured size in order, reporting each file on `out`.
///
/// Stops at the first failed write; files already written are left in place.
pub fn generate_all<W: Write>(cfg: &GeneratorConfig, out: &mut W) -> Result<(), IconError> {
    log_line(&format!("config: {}", serde_json::to_string(cfg)?));

    for &size in &cfg.sizes {
        let g = CheckmarkGeometry::for_size(size);
        log_line(&format!("icon {}: {:?}", size, g));

        let icon = create_icon_with_colors(size, cfg.background, cfg.foreground);
        let path = cfg.icon_path(size);
        if let Err(e) = icon.save(&path) {
            log_error(&format!("saving {}", path.display()), &e);
            return Err(e);
        }
        writeln!(out, "Generated {}", path.display())?;
    }

    writeln!(out, "All icons generated successfully!")?;
    Ok(())
}
