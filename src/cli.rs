// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use crate::{
    config::options::AppOptions,
    directory::{Directory, RegistrationError, MSG_NO_RESULTS, MSG_REGISTERED},
    labour::Labour,
    locations,
    provider::Provider,
    query::Criteria,
    store::JsonFileStore,
    validate::RegistrationDraft,
};

const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search { labour: String, state: String, lga: String },
    Register(RegistrationDraft),
    List,
    Labours,
    States { state: Option<String> },
    Help,
}

#[derive(Clone, Debug)]
pub struct Invocation {
    pub options: AppOptions,
    pub command: Command,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let inv = parse_args(env::args().skip(1), AppOptions::from_env())?;
    crate::log::init(inv.options.store.dir());
    logf!("CLI: {:?}", inv.command);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&inv, &mut out)
}

/// Parse `args` (program name already skipped) on top of `options`.
pub fn parse_args<I>(args: I, mut options: AppOptions) -> Result<Invocation, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut command: Option<String> = None;
    let mut draft = RegistrationDraft::default();
    let mut state_given = false;
    // per-command flags seen, checked once the command is known
    let mut given: Vec<&'static str> = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--store-dir" => options.set_store_dir(value("--store-dir")?),
            "--data-url" => options.locations.url = value("--data-url")?,
            "--locations" => options.locations.local_file = Some(PathBuf::from(value("--locations")?)),
            "--name" => { draft.name = value("--name")?; given.push("--name"); }
            "--phone" => { draft.phone = value("--phone")?; given.push("--phone"); }
            "--email" => { draft.email = value("--email")?; given.push("--email"); }
            "--labour" => { draft.labour = value("--labour")?; given.push("--labour"); }
            "--state" => { draft.state = value("--state")?; state_given = true; given.push("--state"); }
            "--lga" => { draft.lga = value("--lga")?; given.push("--lga"); }
            "--desc" => { draft.desc = value("--desc")?; given.push("--desc"); }
            "-h" | "--help" => command = Some(s!("help")),
            flag if flag.starts_with('-') => return Err(format!("Unknown arg: {flag}").into()),
            word if command.is_none() => command = Some(s!(word)),
            extra => return Err(format!("Unexpected argument: {extra}").into()),
        }
    }

    if let Some(cmd) = command.as_deref() {
        if let Some(allowed) = command_flags(cmd) {
            if let Some(flag) = given.iter().find(|f| !allowed.contains(*f)) {
                return Err(format!("{flag} does not apply to '{cmd}'").into());
            }
        }
    }

    let command = match command.as_deref() {
        Some("search") => Command::Search { labour: draft.labour, state: draft.state, lga: draft.lga },
        Some("register") => Command::Register(draft),
        Some("list") => Command::List,
        Some("labours") => Command::Labours,
        Some("states") => Command::States { state: state_given.then_some(draft.state) },
        Some("help") => Command::Help,
        Some(other) => return Err(format!("Unknown command: {other}").into()),
        None => return Err("Specify a command: search, register, list, labours or states (see --help)".into()),
    };

    Ok(Invocation { options, command })
}

/// Flags a command accepts besides the global ones. `None` for help and
/// unknown commands, which are reported on their own.
fn command_flags(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "search" => Some(&["--labour", "--state", "--lga"]),
        "register" => Some(&["--name", "--phone", "--email", "--labour", "--state", "--lga", "--desc"]),
        "states" => Some(&["--state"]),
        "list" | "labours" => Some(&[]),
        _ => None,
    }
}

pub fn execute<W: Write>(inv: &Invocation, out: &mut W) -> Result<(), Box<dyn Error>> {
    match &inv.command {
        Command::Help => {
            write!(out, "{HELP}")?;
            return Ok(());
        }
        Command::Labours => {
            for l in Labour::ALL {
                writeln!(out, "{l}")?;
            }
            return Ok(());
        }
        _ => {}
    }

    let catalog = locations::load(&inv.options.locations)?;
    let mut dir = Directory::new(JsonFileStore::from_options(&inv.options.store), catalog);

    match &inv.command {
        Command::States { state: None } => {
            for st in dir.catalog().states() {
                writeln!(out, "{st}")?;
            }
        }
        Command::States { state: Some(st) } => {
            let lgas = dir.catalog().lgas(st).ok_or_else(|| format!("Unknown state: {st}"))?;
            for l in lgas {
                writeln!(out, "{l}")?;
            }
        }
        Command::List => write_providers(out, &dir.read_all())?,
        Command::Search { labour, state, lga } => {
            let criteria = Criteria::from_raw(labour, state, lga)?;
            write_providers(out, &dir.submit_search(&criteria))?;
        }
        Command::Register(draft) => match dir.submit_registration(draft) {
            Ok(p) => writeln!(out, "{MSG_REGISTERED} (id {})", p.id)?,
            Err(RegistrationError::Rejected(r)) => {
                return Err(format!("{} ({r})", r.user_message()).into());
            }
            Err(e) => return Err(e.into()),
        },
        Command::Help | Command::Labours => {}
    }
    Ok(())
}

fn write_providers<W: Write>(out: &mut W, providers: &[Provider]) -> io::Result<()> {
    if providers.is_empty() {
        return writeln!(out, "{MSG_NO_RESULTS}");
    }
    for p in providers {
        write!(out, "{} | {} | {}", p.name, p.meta_line(), p.phone)?;
        if p.has_email() {
            write!(out, " | {}", p.email)?;
        }
        writeln!(out)?;
        if !p.desc.is_empty() {
            writeln!(out, "    {}", p.desc)?;
        }
    }
    Ok(())
}
