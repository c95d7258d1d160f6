use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::{Cli, CompletionsArgs};

pub fn run(args: &CompletionsArgs) {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "mdp", &mut io::stdout());
}
