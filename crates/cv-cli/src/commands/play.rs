use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use cv_engine::{GameConfig, Session};
use tracing::info;

pub fn run(data: Option<&Path>, seed: Option<u64>, instructions: bool) -> Result<(), String> {
    let loaded = super::load(data)?;

    let mut config = GameConfig::default().with_instructions(instructions);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    info!(?seed, instructions, "starting game");
    let mut session = Session::new(Arc::new(loaded.data), config);
    let mut stdout = io::stdout();

    let opening = session
        .start()
        .map_err(|e| format!("failed to start game: {e}"))?;
    write!(stdout, "{opening}").map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_terminated() {
        stdout.flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let reply = session.process(&line).map_err(|e| e.to_string())?;
        write!(stdout, "{reply}").map_err(|e| e.to_string())?;
    }

    stdout.flush().map_err(|e| e.to_string())
}
