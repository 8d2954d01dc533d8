use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mach")]
#[command(about = "Mach assembly compiler and virtual machine", long_about = None)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub struct Cli {
    /// Program to run when no subcommand is given (.mach or .machb)
    pub path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a source file or binary
    Run {
        /// Path to the file (.mach or .machb)
        path: String,
    },
    /// Print the memory table and instruction listing
    Disassemble {
        /// Path to the file
        path: String,
    },
    /// Compile a source file, optionally saving the binary form
    Compile {
        /// Input source file
        path: String,
        /// Output binary file (.machb)
        #[arg(short, long)]
        output: Option<String>,
    },
}
