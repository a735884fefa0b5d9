use anyhow::Result;
use clap::CommandFactory;

use crate::cli::{Cli, handlers};

/// Defines a system command, its aliases, and its handler function.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(&Cli) -> Result<()>,
}

/// The single source of truth for all system commands.
/// Any other argument is treated as a URI to open.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "install-protocol",
        aliases: &["install"],
        handler: handlers::protocol::handle_install,
    },
    CommandDefinition {
        name: "uninstall-protocol",
        aliases: &["uninstall"],
        handler: handlers::protocol::handle_uninstall,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Routes the parsed arguments to a handler.
///
/// - no argument: print the help text.
/// - a registered command name or alias: run that command.
/// - anything else: open it as an `mpv://` URI.
pub fn dispatch(cli: &Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let Some(target) = cli.target.as_deref() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match find_command(target) {
        Some(command) => (command.handler)(cli),
        None => handlers::open::handle(target, cli),
    }
}
