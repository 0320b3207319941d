use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &RosterPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized roster store at {}",
        paths.data.display()
    )));
    if !paths.config_file().exists() {
        result.add_message(CmdMessage::info(
            "Tip: `roster config --template` prints a sample roster.toml".to_string(),
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_data_dir() {
        let temp = tempdir().unwrap();
        let paths = RosterPaths {
            data: temp.path().join("a").join("b"),
        };

        let result = run(&paths).unwrap();

        assert!(paths.data.is_dir());
        assert!(result.messages[0].content.contains("Initialized roster store"));
        // Running again is harmless
        run(&paths).unwrap();
    }
}
