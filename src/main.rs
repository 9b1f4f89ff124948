use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use neo_snake::app::App;
use neo_snake::game::GameConfig;
use neo_snake::storage::DEFAULT_HIGH_SCORE_FILE;
use neo_snake::theme::ThemeId;

#[derive(Parser)]
#[command(name = "neo-snake")]
#[command(version, about = "Terminal snake with buffered steering and colour themes")]
struct Cli {
    /// Colour theme to start with (cycle with 't' in game)
    #[arg(long, value_enum, default_value = "matrix")]
    theme: ThemeId,

    /// Where the high score is stored
    #[arg(long, default_value = DEFAULT_HIGH_SCORE_FILE)]
    high_score_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::default();

    let mut app = App::new(config, cli.theme, cli.high_score_file);
    app.run().await
}
