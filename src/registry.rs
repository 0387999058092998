//! Named actions
//!
//! Maps stable names (`users`, `user-group`, ...) to configured actions so
//! a caller can pick a provider by string.

use std::collections::BTreeMap;

use crate::action::Action;
use crate::config::Config;

struct Entry {
    description: &'static str,
    action: Action,
}

pub struct Registry {
    entries: BTreeMap<String, Entry>,
}

impl Registry {
    /// Registry with the built-in system actions, paths and commands taken
    /// from `config`
    pub fn new(config: &Config) -> Self {
        let users = Action::Users(config.passwd_path.clone());
        let groups = Action::Groups(config.group_path.clone());

        let mut registry = Self {
            entries: BTreeMap::new(),
        };
        registry.register("environment-variables", "Environment variables", Action::Environment);
        registry.register("groups", "System group names", groups.clone());
        registry.register("kill-signals", "Kill signals", Action::KillSignals);
        registry.register("path-executables", "Executables from PATH", Action::PathExecutables);
        registry.register(
            "process-executables",
            "Executable names of running processes",
            Action::ProcessExecutables,
        );
        registry.register("process-states", "Process state codes", Action::ProcessStates);
        registry.register(
            "shells",
            "Available login shells",
            Action::command(config.shells_command.as_str(), config.shells_args.iter().cloned()),
        );
        registry.register("user-group", "user:group pairs", Action::user_group_from(users.clone(), groups));
        registry.register("users", "System user names", users);
        registry
    }

    /// Add or replace an action
    pub fn register(&mut self, name: &str, description: &'static str, action: Action) {
        self.entries
            .insert(name.to_string(), Entry { description, action });
    }

    pub fn get(&self, name: &str) -> Option<&Action> {
        self.entries.get(name).map(|e| &e.action)
    }

    /// `(name, description)` pairs, sorted by name
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.description))
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_builtin_names() {
        let registry = Registry::default();
        let names: Vec<&str> = registry.list().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "environment-variables",
                "groups",
                "kill-signals",
                "path-executables",
                "process-executables",
                "process-states",
                "shells",
                "user-group",
                "users",
            ]
        );
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_config_paths_applied() {
        let config = Config {
            passwd_path: PathBuf::from("/srv/passwd"),
            shells_command: "cat".into(),
            shells_args: vec!["/etc/shells".into()],
            ..Config::default()
        };
        let registry = Registry::new(&config);

        match registry.get("users") {
            Some(Action::Users(path)) => assert_eq!(path, &PathBuf::from("/srv/passwd")),
            other => panic!("unexpected {:?}", other),
        }
        match registry.get("shells") {
            Some(Action::Command { program, args }) => {
                assert_eq!(program, "cat");
                assert_eq!(args, &vec!["/etc/shells".to_string()]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
