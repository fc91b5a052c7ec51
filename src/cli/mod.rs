use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod run;

pub use args::{Arguments, CheckCommand, Command, CommonArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
