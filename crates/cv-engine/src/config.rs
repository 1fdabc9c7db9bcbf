/// Settings for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Seed for the random source. `None` picks one at random.
    pub seed: Option<u64>,
    /// Ask whether the player wants instructions before the game starts.
    pub instructions: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            instructions: true,
        }
    }
}

impl GameConfig {
    /// Fix the random seed so the game can be replayed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn the opening instructions prompt on or off.
    pub fn with_instructions(mut self, ask: bool) -> Self {
        self.instructions = ask;
        self
    }
}
