use crate::commands::{CheetoPaths, CmdMessage, CmdResult};
use crate::error::{CheetoError, Result};
use crate::markdown::renderer_named;
use crate::sheets::{DiscoveryMode, Sheets};
use tracing::debug;

/// Shows one sheet: markdown sheets go through `renderer`, others are returned
/// verbatim. A missing sheet is reported as a message, not an error.
pub fn run(
    paths: &CheetoPaths,
    mode: DiscoveryMode,
    name: &str,
    renderer: &str,
) -> Result<CmdResult> {
    let sheet = match Sheets::named_sheet_at_with(name, &paths.data, mode) {
        Ok(sheet) => sheet,
        Err(err @ CheetoError::SheetNotFound { .. }) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(err.to_string()));
            return Ok(result);
        }
        Err(err) => return Err(err),
    };

    let text = sheet.text()?;
    if !sheet.probably_markdown()? {
        return Ok(CmdResult::default().with_output(text));
    }

    debug!(sheet = %sheet.path().display(), renderer, "rendering markdown sheet");
    let rendered = renderer_named(renderer)?.render(&text)?;
    Ok(CmdResult::default().with_output(rendered))
}
