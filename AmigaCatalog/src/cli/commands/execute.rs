//! Command execution implementations

use super::Commands;
use super::catalog;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Dump { path, json, quiet } => catalog::dump(path, *json, *quiet),
            Commands::Get { path, id } => catalog::get(path, *id),
            Commands::Search { path, query, limit } => catalog::search(path, query, *limit),
            Commands::Inspect { path } => catalog::inspect(path),
            Commands::Locate {
                signature,
                language,
                roots,
            } => catalog::locate(signature, language, &roots.resolve()?),
            Commands::Languages { signature, roots } => {
                catalog::languages(signature, &roots.resolve()?)
            }
            Commands::Stats { paths } => catalog::stats(paths),
        }
    }
}
