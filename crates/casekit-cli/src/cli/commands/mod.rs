use super::args::{Cli, Command};

pub mod hashlock;
pub mod releasepack;
pub mod replaycheck;
pub mod tracecheck;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Hashlock(args) => hashlock::run(args),
        Command::Releasepack(args) => releasepack::run(args),
        Command::Replaycheck(args) => replaycheck::run(args),
        Command::Tracecheck(args) => tracecheck::run(args),
    }
}
