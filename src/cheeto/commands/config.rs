use crate::commands::{CheetoPaths, CmdMessage, CmdResult};
use crate::config::CheetoConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &CheetoPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config;
    match action {
        ConfigAction::ShowAll => {
            let config = CheetoConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = CheetoConfig::load(dir)?;
            let mut result = CmdResult::default();
            if !CheetoConfig::keys().contains(&key.as_str()) {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                return Ok(result);
            }
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => result.add_message(CmdMessage::info(format!("{} is not set", key))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = CheetoConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| "(unset)".to_string());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
