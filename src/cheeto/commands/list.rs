use crate::commands::{CheetoPaths, CmdResult, SheetSummary};
use crate::error::Result;
use crate::sheet::{Sheet, SheetName};
use crate::sheets::{DiscoveryMode, Sheets};

pub fn run(paths: &CheetoPaths, mode: DiscoveryMode) -> Result<CmdResult> {
    let sheets = Sheets::at_with(&paths.data, mode)?;
    let listed = sheets
        .iter()
        .map(|(name, sheet)| summarize(name, sheet))
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_listed_sheets(listed))
}

fn summarize(name: &SheetName, sheet: &Sheet) -> Result<SheetSummary> {
    Ok(SheetSummary {
        name: name.clone(),
        filename: sheet.filename(),
        path: sheet.display_path(),
        title: sheet.title()?,
        size: sheet.len()?,
        markdown: sheet.probably_markdown()?,
    })
}
