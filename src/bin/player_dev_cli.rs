// src/bin/player_dev_cli.rs

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use card_player::api::{apply_command, build_player_view, CommandResponse, PlayerCommand};
use card_player::domain::{Card, Chips};
use card_player::infra::{init_logging, PlayerConfig};

/// Dev-CLI: создать игрока и прогнать над ним последовательность действий.
///
/// Пример:
///   player_dev_cli --name Alice --chips 100 bet:30 card:As bet:1000 fold
#[derive(Debug, Parser)]
#[command(name = "player_dev_cli", version)]
struct Cli {
    /// TOML-конфиг игрока (name, starting_chips).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Имя игрока (перекрывает конфиг).
    #[arg(long)]
    name: Option<String>,

    /// Стартовый стек (перекрывает конфиг).
    #[arg(long, allow_negative_numbers = true)]
    chips: Option<i64>,

    /// Подробные логи.
    #[arg(long)]
    debug: bool,

    /// Вывести итог в JSON вместо текстовой руки.
    #[arg(long)]
    json: bool,

    /// Действия: `card:Ah`, `bet:30`, `allin`, `fold`.
    actions: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut cfg = PlayerConfig::load_or_default(cli.config.as_deref())?;
    if let Some(name) = cli.name {
        cfg.name = name;
    }
    if let Some(chips) = cli.chips {
        cfg.starting_chips = Chips(chips);
    }

    tracing::info!(name = %cfg.name, chips = %cfg.starting_chips, "player created");
    let mut player = cfg.build_player();

    for raw in &cli.actions {
        let command = parse_action(raw).with_context(|| format!("action '{raw}'"))?;
        match apply_command(&mut player, command) {
            Ok(CommandResponse::BetPlaced { amount, chips_left }) => {
                println!("[CLI] {raw}: поставлено {amount}, осталось {chips_left}");
            }
            Ok(CommandResponse::CardReceived { hand_len }) => {
                println!("[CLI] {raw}: карт в руке {hand_len}");
            }
            Ok(CommandResponse::Ok) => println!("[CLI] {raw}: ok"),
            Err(e) => println!("[CLI] {raw}: отклонено ({e})"),
        }
    }

    if cli.json {
        let view = build_player_view(&player);
        let text = serde_json::to_string_pretty(&view).context("serializing player view")?;
        println!("{text}");
    } else {
        player.print_hand().context("writing hand to stdout")?;
    }

    Ok(())
}

/// Разобрать одно действие из командной строки.
fn parse_action(raw: &str) -> Result<PlayerCommand> {
    let (verb, arg) = match raw.split_once(':') {
        Some((v, a)) => (v, Some(a)),
        None => (raw, None),
    };

    let command = match (verb.to_lowercase().as_str(), arg) {
        ("card", Some(code)) => PlayerCommand::ReceiveCard {
            card: code.parse::<Card>()?,
        },
        ("bet", Some(amount)) => PlayerCommand::Bet {
            amount: Chips(
                amount
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("bet amount '{amount}' is not an integer"))?,
            ),
        },
        ("allin", None) => PlayerCommand::AllIn,
        ("fold", None) => PlayerCommand::Fold,
        _ => bail!("unknown action (expected card:XX, bet:N, allin, fold)"),
    };

    Ok(command)
}
