use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::config::{unknown_key, RosterConfig};
use crate::error::Result;
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or changes the `config.json` of `scope`. Unknown keys and bad
/// values are errors and leave the file as it was.
pub fn run(paths: &RosterPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = RosterConfig::load(&dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            CmdMessage::info(config.get(&key).ok_or_else(|| unknown_key(&key))?)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&dir)?;
            tracing::debug!(%key, dir = %dir.display(), "config updated");
            let shown = config.get(&key).unwrap_or(value);
            CmdMessage::success(format!("{} set to {}", key, shown))
        }
    };

    let mut result = CmdResult::default();
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RosterError;
    use tempfile::TempDir;

    fn paths() -> (TempDir, RosterPaths) {
        let dir = TempDir::new().unwrap();
        let paths = RosterPaths {
            project: Some(dir.path().join(".roster")),
            global: dir.path().join("global"),
        };
        (dir, paths)
    }

    #[test]
    fn set_persists_to_scope_dir() {
        let (_dir, paths) = paths();
        let action = ConfigAction::Set("max-gpa".into(), "4.0".into());
        let result = run(&paths, Scope::Project, action).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "max-gpa set to 4");
        let project = paths.scope_dir(Scope::Project).unwrap();
        assert_eq!(RosterConfig::load(project).unwrap().max_gpa, Some(4.0));

        let global = paths.scope_dir(Scope::Global).unwrap();
        assert_eq!(RosterConfig::load(global).unwrap().max_gpa, None);
    }

    #[test]
    fn show_key_returns_value() {
        let (_dir, paths) = paths();
        let result = run(&paths, Scope::Global, ConfigAction::ShowKey("max-gpa".into())).unwrap();
        assert_eq!(result.messages[0].content, "none");
    }

    #[test]
    fn unknown_key_is_an_api_error() {
        let (_dir, paths) = paths();
        let err = run(&paths, Scope::Global, ConfigAction::ShowKey("color".into())).unwrap_err();
        assert!(matches!(err, RosterError::Api(ref m) if m == "Unknown config key: color"));

        let action = ConfigAction::Set("color".into(), "red".into());
        assert!(matches!(
            run(&paths, Scope::Global, action),
            Err(RosterError::Api(_))
        ));
    }

    #[test]
    fn bad_value_is_an_error_and_writes_nothing() {
        let (_dir, paths) = paths();
        let action = ConfigAction::Set("max-gpa".into(), "abc".into());
        let err = run(&paths, Scope::Project, action).unwrap_err();
        assert_eq!(err.to_string(), "Api Error: Invalid max-gpa: abc");

        let project = paths.scope_dir(Scope::Project).unwrap();
        assert!(!project.join("config.json").exists());
    }

    #[test]
    fn show_all_returns_config() {
        let (_dir, paths) = paths();
        let result = run(&paths, Scope::Project, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(RosterConfig::default()));
    }

    #[test]
    fn missing_project_scope_is_a_store_error() {
        let paths = RosterPaths {
            project: None,
            global: std::env::temp_dir(),
        };
        assert!(matches!(
            run(&paths, Scope::Project, ConfigAction::ShowAll),
            Err(RosterError::Store(_))
        ));
    }
}
