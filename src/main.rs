use std::{
    fs,
    fs::File,
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use miniclass_class_file::ClassFile;
use miniclass_payload::TemplateBuilder;

use crate::render::Section;

mod hex;
mod render;

/// Inspect JVM class files, or build a minimal one that runs a command.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a class file and print its structure
    Inspect {
        file: PathBuf,
        /// Print a single section instead of everything
        #[arg(long, value_enum)]
        section: Option<Section>,
    },
    /// Build a class whose main routes a command line through Runtime.exec
    Build {
        /// Output path; the base name must be Code.class
        out_path: PathBuf,
        /// Command line to embed
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        commandline: Vec<String>,
    },
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".dark_red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Inspect { file, section } => {
            let class_file = ClassFile::parse(File::open(&file)?)?;
            log::debug!("decoded {}", file.display());

            render::print_class(&class_file, section);
        }
        Command::Build {
            out_path,
            commandline,
        } => {
            let payload = TemplateBuilder::new().build(&out_path, &commandline.join(" "))?;

            println!(
                "Output path:         {}",
                out_path.display().to_string().blue()
            );
            println!(
                "Original string:     {}",
                payload.original_commandline.as_str().blue()
            );
            println!(
                "New string:          {}",
                payload.encoded_commandline.as_str().blue()
            );
            println!(
                "Encoded string size: {}",
                format!("{} bytes", payload.encoded_size()).blue()
            );
            println!(
                "Total class size:    {}",
                format!("{} bytes", payload.total_size()).blue()
            );
            println!();
            hex::print_bytes(&payload.bytes);

            fs::write(&out_path, &payload.bytes)?;
            log::info!("wrote {} bytes to {}", payload.total_size(), out_path.display());
        }
    }

    Ok(())
}
