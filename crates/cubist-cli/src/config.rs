//! Command line and environment parsing.

use std::path::PathBuf;

/// Environment variable that toggles ANSI colors in the terminal net.
pub const COLOR_ENV: &str = "CUBIST_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show { facelets: String },
    Assemble { captures: PathBuf },
    Quads { facelets: String },
    Play { facelets: String, solution: PathBuf },
    Help,
}

/// Everything the binary needs to run one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    /// Paint the terminal net with ANSI colors.
    pub color: bool,
}

impl CliConfig {
    /// Parse arguments (without the program name) and the `CUBIST_COLOR` value.
    pub fn parse<I>(args: I, color_env: Option<&str>) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut color = color_env.map_or(true, color_enabled);
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--no-color" => color = false,
                "-h" | "--help" => {
                    return Ok(Self {
                        command: Command::Help,
                        color,
                    })
                }
                flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let Some(name) = positional.next() else {
            return Err("missing command".to_string());
        };
        let mut operand = |what: &str| {
            positional
                .next()
                .ok_or_else(|| format!("{name} requires a {what} argument"))
        };

        let command = match name.as_str() {
            "show" => Command::Show {
                facelets: operand("facelets")?,
            },
            "assemble" => Command::Assemble {
                captures: operand("capture file")?.into(),
            },
            "quads" => Command::Quads {
                facelets: operand("facelets")?,
            },
            "play" => Command::Play {
                facelets: operand("facelets")?,
                solution: operand("solution file")?.into(),
            },
            "help" => Command::Help,
            other => return Err(format!("unknown command {other}")),
        };

        if let Some(extra) = positional.next() {
            return Err(format!("unexpected argument {extra}"));
        }
        Ok(Self { command, color })
    }
}

fn color_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

pub fn print_usage() {
    eprintln!("cubist - inspect, assemble and replay 3x3x3 cube states");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cubist show <facelets>                 Print the cube as an unfolded net");
    eprintln!("  cubist assemble <capture.json>         Combine six captures into a facelet string");
    eprintln!("  cubist quads <facelets>                Print the projected sticker quads as JSON");
    eprintln!("  cubist play <facelets> <solution.json> Step through a solution (n/p/q)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-color  Plain text net");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CUBIST_COLOR  Set to 0 to disable ANSI colors");
    eprintln!("  RUST_LOG      Log filter (default: cubist=info)");
}
