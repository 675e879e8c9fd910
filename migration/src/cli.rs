//! Argument handling for the `migrate` binary.

use std::path::PathBuf;

use crate::error::MigrationError;

/// What the `migrate` binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply pending migrations (default).
    Up,
    /// Roll back all applied migrations.
    Down,
    /// Roll back all applied migrations, then apply everything again.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    /// Overrides `MIGRATIONS_DIR` when given with `--dir`.
    pub dir: Option<PathBuf>,
}

impl Command {
    /// Parses arguments, excluding the program name.
    ///
    /// Single-dash spellings (`-reset`, `-down`, `-dir`) are accepted as well.
    pub fn parse<I>(args: I) -> Result<Self, MigrationError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut command = Self {
            action: Action::Up,
            dir: None,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.trim_start_matches('-') {
                "reset" => command.action = Action::Reset,
                "down" => command.action = Action::Down,
                "up" => command.action = Action::Up,
                "dir" => {
                    let dir = args
                        .next()
                        .ok_or_else(|| MigrationError::UnknownArgument(arg.clone()))?;
                    command.dir = Some(PathBuf::from(dir));
                }
                _ => return Err(MigrationError::UnknownArgument(arg)),
            }
        }

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn defaults_to_up() {
        let command = Command::parse(args(&[])).unwrap();
        assert_eq!(command.action, Action::Up);
        assert_eq!(command.dir, None);
    }

    #[test]
    fn accepts_single_dash_reset() {
        let command = Command::parse(args(&["-reset"])).unwrap();
        assert_eq!(command.action, Action::Reset);
    }

    #[test]
    fn reads_directory_override() {
        let command = Command::parse(args(&["--down", "--dir", "db/sql"])).unwrap();
        assert_eq!(command.action, Action::Down);
        assert_eq!(command.dir, Some(PathBuf::from("db/sql")));
    }

    #[test]
    fn rejects_unknown_argument() {
        let result = Command::parse(args(&["--force"]));
        assert!(matches!(result, Err(MigrationError::UnknownArgument(a)) if a == "--force"));
    }

    #[test]
    fn rejects_dir_without_value() {
        let result = Command::parse(args(&["--dir"]));
        assert!(matches!(result, Err(MigrationError::UnknownArgument(_))));
    }
}
