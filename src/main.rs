use env_logger::Env;
use log::info;
use soccer_core::{
    Coin, MatchConfig, MatchEngine, PlayerSide, TeamSetup, LEFT_TEAM_COLOR, RIGHT_TEAM_COLOR,
};
use std::env;
use std::fs;

const DEFAULT_FRAMES: u32 = 3600;
const FRAME_MS: f32 = 16.0;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match env::var("SOCCER_CONFIG") {
        Ok(path) => {
            let raw = fs::read_to_string(&path)?;
            let config: MatchConfig = serde_json::from_str(&raw)?;
            info!("config loaded from {}", path);
            config
        }
        Err(_) => MatchConfig::default(),
    };

    config.validate()?;

    let frames = match env::var("SOCCER_FRAMES") {
        Ok(value) => value.parse::<u32>()?,
        Err(_) => DEFAULT_FRAMES,
    };

    let mut engine = MatchEngine::new(
        config,
        TeamSetup::standard("Team 1", LEFT_TEAM_COLOR),
        TeamSetup::standard("Team 2", RIGHT_TEAM_COLOR),
        Coin::toss(),
    )?;

    engine.init(Coin::toss());

    for _ in 0..frames {
        engine.update(FRAME_MS);
    }

    engine.finish();

    let (left, right) = engine.debug_score();
    info!(
        "{} frames, {:.1}s simulated: {} {} - {} {}",
        frames,
        engine.time() / 1000.0,
        engine.team(PlayerSide::Left).name(),
        left,
        right,
        engine.team(PlayerSide::Right).name()
    );

    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);

    Ok(())
}
