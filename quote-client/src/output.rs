use crate::error::Result;
use crate::models::Quote;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes the quote as a single `"<label>: <bid>"` line, replacing any
/// previous content. The file is only touched on a fully decoded quote, so
/// a failed run leaves prior output intact.
pub fn write_quote_file(path: &Path, label: &str, quote: &Quote) -> Result<()> {
    let content = format!("{}: {}", label, quote.bid);

    fs::write(path, &content)?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, Permissions::from_mode(0o644))?;
    }

    info!("Quote saved to {}", path.display());
    Ok(())
}
