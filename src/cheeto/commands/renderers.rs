use crate::commands::{CmdResult, RendererInfo};
use crate::error::Result;
use crate::markdown::all_renderers;

/// Lists every registered markdown renderer, marking `default` as the default.
pub fn run(default: &str) -> Result<CmdResult> {
    let renderers = all_renderers()
        .iter()
        .map(|renderer| RendererInfo {
            name: renderer.name(),
            description: renderer.description(),
            available: renderer.is_available(),
            is_default: renderer.name() == default,
        })
        .collect();

    Ok(CmdResult::default().with_renderers(renderers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_registered_renderers() {
        let result = run("term").unwrap();
        let names: Vec<&str> = result.renderers.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["plain", "term", "mdcat", "glow", "glow-light"]);
    }

    #[test]
    fn marks_default_and_builtin_availability() {
        let result = run("plain").unwrap();
        let defaults: Vec<&str> = result
            .renderers
            .iter()
            .filter(|r| r.is_default)
            .map(|r| r.name)
            .collect();
        assert_eq!(defaults, vec!["plain"]);
        assert!(result.renderers.iter().take(2).all(|r| r.available));
    }
}
