use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use virtual_shell::session::{self, SessionConfig, SessionError};
use virtual_shell::{ConsoleSink, Locale, ShellStatus};

#[derive(Parser)]
#[command(name = "virtual-shell")]
#[command(about = "A shell emulator over the directory tree of a tar archive")]
#[command(version)]
struct Cli {
    /// Tar or tar.gz archive backing the virtual filesystem
    #[arg()]
    archive: Option<PathBuf>,

    /// TOML session configuration
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// File of newline-separated commands to replay at startup
    #[arg(long = "script")]
    script: Option<PathBuf>,

    /// Prompt label
    #[arg(long = "prompt")]
    prompt: Option<String>,

    /// Message language (en, ru)
    #[arg(long = "locale")]
    locale: Option<Locale>,

    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// With -c, print the result as JSON (output, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Log to stderr; repeat for more detail
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Config file values, overridden by command-line flags.
    fn session_config(&self) -> Result<SessionConfig, SessionError> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };
        if let Some(archive) = &self.archive {
            config.archive = Some(archive.clone());
        }
        if let Some(script) = &self.script {
            config.script = Some(script.clone());
        }
        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    virtual_shell::logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("virtual-shell: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, SessionError> {
    let config = cli.session_config()?;
    let mut shell = config.open_shell()?;

    if let Some(command) = &cli.command {
        let result = shell.run(command);
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "output": result.lines,
                    "exitCode": result.exit_code,
                })
            );
        } else {
            for line in &result.lines {
                println!("{}", line);
            }
        }
        return Ok(ExitCode::from(result.exit_code.clamp(0, 255) as u8));
    }

    let mut out = ConsoleSink::stdout();
    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!("{}", config.locale.welcome());
    }

    if session::replay_configured_script(&mut shell, &config, &mut out)? == ShellStatus::Exit {
        return Ok(ExitCode::SUCCESS);
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();
    loop {
        if interactive {
            print!("{}:{}$ ", config.prompt, shell.cwd());
            if let Err(e) = std::io::stdout().flush() {
                log::warn!("failed to flush prompt: {}", e);
            }
        }
        let line = session::read_command_line(&mut input, &mut buf).map_err(|source| {
            SessionError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            }
        })?;
        let Some(line) = line else {
            break;
        };
        if shell.execute(&line, &mut out) == ShellStatus::Exit {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}
