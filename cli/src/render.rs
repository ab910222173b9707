use modhunt_core::{Coord2, GameStatus, Hunter, Reaction, TileKind};
use modhunt_runtime::{Notice, SessionView};

const BRIDGE_URL: &str = "https://bridge.testnet.carv.io/";

pub fn intro(hunter: &Hunter) {
    println!("CARV Mod Hunt");
    println!();
    println!("Three rogue moderators have gone into hiding across the digital grid.");
    println!(
        "Locate and capture all three before your HP runs out, {} ({:?}).",
        hunter.name(),
        hunter.avatar()
    );
    println!();
    help();
}

pub fn help() {
    println!("  <id> or <row>,<col>  reveal a tile");
    println!("  r                    start over");
    println!("  m / music / vol <n>  mute, toggle music, set music volume (0-100)");
    println!("  q                    quit");
    println!();
    println!(
        "  {} mod   {} trap (-1 HP)   {} HP (+1 HP)   {} random   {} empty",
        TileKind::Mod.symbol(),
        TileKind::Trap.symbol(),
        TileKind::Hp.symbol(),
        TileKind::Random.symbol(),
        TileKind::Empty.symbol(),
    );
}

pub fn game(view: &SessionView, (width, _): Coord2, mods_to_win: u8, hunter: &Hunter) {
    println!();
    print!("    ");
    for col in 0..width {
        print!("{col:>3}");
    }
    println!();
    for (row, tiles) in view.tiles.chunks(usize::from(width).max(1)).enumerate() {
        print!("{row:>4}");
        for tile in tiles {
            let symbol = if tile.revealed { tile.kind.symbol() } else { '#' };
            print!("{symbol:>3}");
        }
        println!();
    }

    let stats = view.stats;
    println!();
    println!(
        "HP {} | Mods {}/{} | Tiles {}",
        stats.hp, stats.mods_found, mods_to_win, stats.tiles_revealed
    );
    if let Some(reaction) = view.reaction {
        self::reaction(hunter, reaction);
    }

    match view.status {
        GameStatus::Playing => {}
        GameStatus::Won => {
            println!();
            println!("Mission Complete! {} captured all mods!", hunter.name());
            println!(
                "HP Remaining: {} | Tiles Revealed: {}",
                stats.hp, stats.tiles_revealed
            );
            println!("r to try again, q to quit");
        }
        GameStatus::Lost => {
            println!();
            println!("Mission Failed. {} has no HP left...", hunter.name());
            println!(
                "Mods Found: {}/{} | Tiles Revealed: {}",
                stats.mods_found, mods_to_win, stats.tiles_revealed
            );
            println!("r to try again, q to quit");
        }
    }
}

pub fn reaction(hunter: &Hunter, reaction: Reaction) {
    match reaction.emotion.emoji() {
        Some(emoji) => println!("{} {emoji}: {}", hunter.name(), reaction.message),
        None => println!("{}: {}", hunter.name(), reaction.message),
    }
}

pub fn notice(hunter: &Hunter, notice: &Notice) {
    match notice {
        Notice::TransactionSent { explorer_link, .. } => {
            println!("Transaction sent! View on CARV Explorer: {explorer_link}")
        }
        Notice::TransactionFailed { reason, .. } => {
            println!("Transaction failed - game continues! {reason}")
        }
        Notice::InsufficientBalance { balance } => println!(
            "Insufficient SOL balance ({balance} SOL). Get testnet SOL from {BRIDGE_URL}"
        ),
        Notice::Minting => println!("Minting your Victory NFT..."),
        Notice::Minted(receipt) => {
            println!("Victory NFT minted! View it at {}", receipt.explorer_url)
        }
        Notice::MintFailed { .. } => println!("NFT minting failed, but you still won!"),
        Notice::Reaction(r) => reaction(hunter, *r),
    }
}
