use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "project-packer", version)]
#[command(
    about = "Pack every recognized source file under the current directory into \
             project_context.txt, one fenced block per file."
)]
pub struct Cli {}
