use crate::commands::{CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Template,
}

pub fn run(config: &RosterConfig, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::Show => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::Template => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(RosterConfig::template()));
            Ok(result)
        }
    }
}
