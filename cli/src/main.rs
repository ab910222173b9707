use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use modhunt_core::{Avatar, Dice, GameSession, Hunter, RevealOutcome, RngDice};
use modhunt_runtime::{AudioDirector, AudioSettings, Disconnected, GameDriver, Ports};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::input::Command;
use crate::settings::Settings;
use crate::sound::TerminalSound;

mod input;
mod render;
mod settings;
mod sound;

#[derive(Parser, Debug)]
#[command(version, about = "Hunt down the rogue mods on the CARV grid", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Hunter name, defaults to the avatar's
    #[arg(short, long, default_value = "")]
    name: String,

    #[arg(short, long, value_enum)]
    avatar: Option<AvatarArg>,

    /// TOML file with `[game]` and `[audio]` settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ring the terminal bell on explosions and game end
    #[arg(long)]
    bell: bool,

    /// Start muted, regardless of the settings file
    #[arg(long)]
    muted: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum AvatarArg {
    Nova,
    Vex,
    Shadow,
    Cypher,
}

impl From<AvatarArg> for Avatar {
    fn from(avatar: AvatarArg) -> Self {
        match avatar {
            AvatarArg::Nova => Avatar::Nova,
            AvatarArg::Vex => Avatar::Vex,
            AvatarArg::Shadow => Avatar::Shadow,
            AvatarArg::Cypher => Avatar::Cypher,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let settings = Settings::load(args.config.as_deref())?;
    let dice = match args.seed {
        Some(seed) => RngDice::seeded(seed),
        None => RngDice::from_entropy(),
    };
    let session = GameSession::with_dice(settings.game, dice).context("Could not set up the grid")?;

    let audio = AudioDirector::new(
        TerminalSound { bell: args.bell },
        AudioSettings {
            muted: args.muted || settings.audio.muted,
            ..settings.audio
        },
    );
    let ports = Ports {
        audio: Arc::new(audio),
        wallet: Arc::new(Disconnected),
        minter: Arc::new(Disconnected),
    };
    let avatar = args.avatar.map(Avatar::from).unwrap_or_default();
    let hunter = Hunter::new(avatar, &args.name);
    let (driver, mut notices) = GameDriver::new(session, ports);

    render::intro(&hunter);
    driver.start_new_game();
    show(&driver, &hunter);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Could not read input")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match input::parse(&line, driver.config().size) {
                    Ok(command) => {
                        if run(&driver, command, &hunter).is_break() {
                            break;
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Some(notice) = notices.recv() => render::notice(&hunter, &notice),
        }
    }

    driver.audio().stop_music();
    log::debug!("bye");
    Ok(())
}

fn run<D: Dice + Send + 'static>(
    driver: &GameDriver<D>,
    command: Command,
    hunter: &Hunter,
) -> ControlFlow<()> {
    match command {
        Command::Reveal(id) => match driver.reveal(id) {
            RevealOutcome::NoChange => println!("Nothing to reveal there"),
            _ => show(driver, hunter),
        },
        Command::Restart => {
            driver.start_new_game();
            show(driver, hunter);
        }
        Command::ToggleMute => {
            let muted = driver.audio().toggle_mute();
            println!("Sound {}", if muted { "off" } else { "on" });
        }
        Command::ToggleMusic => {
            let playing = driver.audio().toggle_music();
            println!("Music {}", if playing { "on" } else { "off" });
        }
        Command::Volume(level) => {
            driver.audio().set_music_volume(f32::from(level) / 100.0);
            println!("Music volume {level}%");
        }
        Command::Help => render::help(),
        Command::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

fn show<D: Dice + Send + 'static>(driver: &GameDriver<D>, hunter: &Hunter) {
    let config = driver.config();
    render::game(&driver.view(), config.size, config.mods_to_win(), hunter);
}
