//! A game in progress: the turn loop, arrival and travel.
//!
//! [`Session::process`] takes one line of input and returns everything the
//! game says in reply. Inside a turn, control moves through a small step
//! machine: travelling may lead to an arrival, arriving at a forced room
//! leads to more travel, and the turn ends when the game waits for input.

mod context;
mod dispatch;

use std::fmt;
use std::sync::Arc;

use cv_core::{
    Destination, Holder, ItemId, LocationId, MessageId, MotionCode, WorldData, WorldState,
};
use tracing::{debug, info, warn};

use crate::adversary::{self, Encounter};
use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::light;
use crate::narration::Narration;
use crate::parser::is_affirmative;
use crate::rng::{RandomSource, SeededSource};
use crate::travel::{self, SequenceOutcome};

pub use context::{Hint, PlayerState, TurnContext};

use context::DETAIL_WARNINGS;

/// Arrivals and travels allowed in one turn before forced travel is
/// considered stuck.
const MAX_HOPS: u32 = 32;

/// Percent chance of hearing the hollow voice at Y2.
const VOICE_CHANCE: u32 = 25;

const MSG_WELCOME: MessageId = MessageId(65);
const MSG_INSTRUCTIONS: MessageId = MessageId(1);
const MSG_BLOCKED: MessageId = MessageId(2);
const MSG_AMBUSH: MessageId = MessageId(3);
const MSG_ONE_DWARF: MessageId = MessageId(4);
const MSG_ONE_KNIFE: MessageId = MessageId(5);
const MSG_ONE_OF_MANY_HITS: MessageId = MessageId(6);
const MSG_ALL_MISS: MessageId = MessageId(7);
const MSG_HOLLOW_VOICE: MessageId = MessageId(8);
const MSG_NO_EXITS: MessageId = MessageId(13);
const MSG_NO_DETAIL: MessageId = MessageId(15);
const MSG_PITCH_DARK: MessageId = MessageId(16);
const MSG_KNIFE_MISSES: u16 = 52;
const MSG_OK: MessageId = MessageId(54);
const MSG_NEAR_SURFACE: MessageId = MessageId(57);
const MSG_UNDERGROUND: MessageId = MessageId(58);

/// Where the session is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the answer to the instructions question.
    Welcome,
    /// Playing.
    Running,
    /// Waiting for a yes or no to a hint offer.
    AwaitingHint(Hint),
    /// The game ended; waiting to hear whether to play again.
    AwaitingRestart,
    /// The player declined to play again.
    Terminated,
}

/// What happens next within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    /// Try to move with a motion code.
    Travel(MotionCode),
    /// Arrive at a room.
    Arrive(LocationId),
    /// Wait for input, keeping the pending verb and object.
    Prompt,
    /// Wait for input with a fresh context.
    Clear,
    /// Offer a hint and wait for the answer.
    Offer(Hint),
    /// The player died or the game otherwise ended.
    GameOver,
}

/// One game against a world.
pub struct Session {
    data: Arc<WorldData>,
    state: WorldState,
    rng: Box<dyn RandomSource>,
    config: GameConfig,
    phase: Phase,
    context: TurnContext,
    player: PlayerState,
    out: Narration,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("phase", &self.phase)
            .field("location", &self.state.location)
            .field("context", &self.context)
            .field("player", &self.player)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session. Without a configured seed one is picked at random.
    pub fn new(data: Arc<WorldData>, config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        debug!(seed, "new session");
        let state = WorldState::new(&data);
        Self {
            data,
            state,
            rng: Box::new(SeededSource::new(seed)),
            config,
            phase: Phase::Welcome,
            context: TurnContext::default(),
            player: PlayerState::default(),
            out: Narration::new(),
        }
    }

    /// Replace the random source.
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// The world being played.
    pub fn data(&self) -> &WorldData {
        &self.data
    }

    /// The mutable game state.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Mutable access to the game state, for setting up situations.
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    /// Where the session is in its life cycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pending verb, object and counters.
    pub fn context(&self) -> &TurnContext {
        &self.context
    }

    /// Player flags and counters.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// True once the player has declined to play again.
    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// Produce the opening text. With instructions switched off the game
    /// begins straight away.
    pub fn start(&mut self) -> EngineResult<String> {
        if self.config.instructions {
            self.phase = Phase::Welcome;
            self.say(MSG_WELCOME);
        } else {
            self.begin()?;
        }
        Ok(self.out.drain())
    }

    /// Handle one line of input and return the reply.
    pub fn process(&mut self, line: &str) -> EngineResult<String> {
        match self.phase {
            Phase::Terminated => return Err(EngineError::Terminated),
            Phase::Welcome => {
                if is_affirmative(line) {
                    self.say(MSG_INSTRUCTIONS);
                }
                self.begin()?;
            }
            Phase::AwaitingHint(hint) => {
                self.phase = Phase::Running;
                if is_affirmative(line) {
                    self.say(hint.answer());
                } else {
                    self.say(MSG_OK);
                    self.context.clear();
                }
            }
            Phase::AwaitingRestart => {
                if is_affirmative(line) {
                    info!("restarting");
                    self.state = WorldState::new(&self.data);
                    self.context = TurnContext::default();
                    self.player = PlayerState::default();
                    self.begin()?;
                } else {
                    self.say(MSG_OK);
                    self.phase = Phase::Terminated;
                }
            }
            Phase::Running => {
                let next = self.command(line)?;
                self.run(next)?;
            }
        }
        Ok(self.out.drain())
    }

    fn begin(&mut self) -> EngineResult<()> {
        self.phase = Phase::Running;
        self.run(Next::Arrive(LocationId::START))
    }

    fn run(&mut self, mut next: Next) -> EngineResult<()> {
        let mut hops = 0;
        loop {
            next = match next {
                Next::Travel(motion) => {
                    hops += 1;
                    self.check_hops(hops)?;
                    self.travel(motion)?
                }
                Next::Arrive(target) => {
                    hops += 1;
                    self.check_hops(hops)?;
                    self.arrive(target)?
                }
                Next::Prompt => return Ok(()),
                Next::Clear => {
                    self.context.clear();
                    return Ok(());
                }
                Next::Offer(hint) => {
                    self.say(hint.question());
                    self.phase = Phase::AwaitingHint(hint);
                    return Ok(());
                }
                Next::GameOver => {
                    self.game_over();
                    return Ok(());
                }
            };
        }
    }

    fn check_hops(&self, hops: u32) -> EngineResult<()> {
        if hops > MAX_HOPS {
            return Err(EngineError::ForcedLoop(self.state.location));
        }
        Ok(())
    }

    fn game_over(&mut self) {
        info!(room = %self.state.location, "game over");
        self.out.line("THE GAME IS OVER.");
        self.out.line("WOULD YOU LIKE TO PLAY AGAIN?");
        self.context.clear();
        self.phase = Phase::AwaitingRestart;
    }

    /// Print a message from the message bank.
    fn say(&mut self, id: MessageId) {
        match self.data.message(id) {
            Some(text) => self.out.block(text),
            None => warn!(message = %id, "no text for message"),
        }
    }

    fn arrive(&mut self, target: LocationId) -> EngineResult<Next> {
        if target == LocationId::GAME_OVER {
            return Ok(Next::GameOver);
        }
        let mut here = target;
        if self.state.dwarves.blocks(target) {
            here = self.state.location;
            self.say(MSG_BLOCKED);
        }
        if here != self.state.location {
            debug!(from = %self.state.location, to = %here, "moved");
        }
        self.state.location = here;

        let encounter = adversary::advance(&mut self.state.dwarves, here, self.rng.as_mut());
        if self.narrate(encounter)? {
            return Ok(Next::GameOver);
        }

        let data = Arc::clone(&self.data);
        let room = data.require_location(here)?;
        if let Some(text) = room.description(self.state.wants_long_description(here)) {
            self.out.block(text);
        }
        if room.is_forced() {
            let motion = self.context.last_motion.unwrap_or(MotionCode::ANY);
            return Ok(Next::Travel(motion));
        }
        if here == LocationId::Y2 && self.rng.chance(VOICE_CHANCE) {
            self.say(MSG_HOLLOW_VOICE);
        }

        self.context.trouble = 0;
        self.state.record_visit(here);
        self.player.dark = !light::is_lit(room, &self.state);
        if self.player.dark {
            self.say(MSG_PITCH_DARK);
        }
        self.list_items(here);
        Ok(Next::Clear)
    }

    /// Report what the dwarves did. Returns true if the player was killed.
    fn narrate(&mut self, encounter: Encounter) -> EngineResult<bool> {
        match encounter {
            Encounter::Quiet => {}
            Encounter::Ambush => {
                self.say(MSG_AMBUSH);
                let here = self.state.location;
                self.state.move_item(ItemId::AXE, Holder::Room(here))?;
            }
            Encounter::Threat {
                present,
                attackers,
                hits,
            } => {
                if present == 1 {
                    self.say(MSG_ONE_DWARF);
                } else {
                    self.out.line(format!(
                        "THERE ARE {present} THREATENING LITTLE DWARVES IN THE ROOM WITH YOU."
                    ));
                }
                match attackers {
                    0 => {}
                    1 => {
                        self.say(MSG_ONE_KNIFE);
                        self.say(MessageId(MSG_KNIFE_MISSES + hits.min(1) as u16));
                    }
                    _ => {
                        self.out
                            .line(format!(" {attackers} OF THEM THROW KNIVES AT YOU!"));
                        match hits {
                            0 => self.say(MSG_ALL_MISS),
                            1 => self.say(MSG_ONE_OF_MANY_HITS),
                            _ => self.out.line(format!(" {hits} OF THEM GET YOU.")),
                        }
                    }
                }
                if encounter.is_fatal() {
                    info!(hits, "killed by dwarves");
                }
            }
        }
        Ok(encounter.is_fatal())
    }

    /// Describe the items lying in a room.
    fn list_items(&mut self, room: LocationId) {
        let nugget_carried = self.state.is_carried(ItemId::NUGGET);
        let items = self.state.items_at(room).to_vec();
        for item in items {
            if nugget_carried && (item == ItemId::STEPS_DOWN || item == ItemId::STEPS_UP) {
                continue;
            }
            if let Some(text) = self.data.item_appearance(item, self.state.prop(item)) {
                self.out.block(text);
            }
        }
    }

    /// Move the player with a motion word, after the darkness check.
    fn motion(&mut self, motion: MotionCode) -> Next {
        if light::falls_in_dark(self.player.dark, self.rng.as_mut()) {
            info!(room = %self.state.location, "fell into a pit");
            self.say(light::MSG_FELL);
            return Next::GameOver;
        }
        self.context.last_motion = Some(motion);
        Next::Travel(motion)
    }

    fn travel(&mut self, motion: MotionCode) -> EngineResult<Next> {
        let here = self.state.location;
        let data = Arc::clone(&self.data);
        let edges = data.travel(here);
        if edges.is_empty() {
            self.say(MSG_NO_EXITS);
            return Ok(Next::Arrive(here));
        }
        if motion == MotionCode::LOOK {
            if self.player.detail_count < DETAIL_WARNINGS {
                self.say(MSG_NO_DETAIL);
            }
            self.player.detail_count += 1;
            self.state.forget_visit(here);
            return Ok(Next::Arrive(here));
        }
        if motion == MotionCode::CAVE {
            let hint = if here <= LocationId::SURFACE_LIMIT {
                MSG_NEAR_SURFACE
            } else {
                MSG_UNDERGROUND
            };
            self.say(hint);
            return Ok(Next::Arrive(here));
        }
        if motion == MotionCode::BACK {
            let target = self.state.previous;
            self.state.previous = here;
            return Ok(Next::Arrive(target));
        }

        self.state.previous = here;
        let Some(edge) = travel::find_edge(edges, motion) else {
            self.say(travel::failure_message(motion, self.context.verb));
            return Ok(Next::Arrive(here));
        };
        let target = match edge.destination {
            Destination::Room(room) => room,
            Destination::Sequence(seq) => {
                let outcome = travel::resolve_sequence(seq, &self.state, self.rng.as_mut());
                debug!(from = %here, ?outcome, "forced sequence");
                match outcome {
                    SequenceOutcome::Room(room) => room,
                    SequenceOutcome::Crawled(room) => {
                        self.say(travel::CRAWLED_AROUND);
                        room
                    }
                    SequenceOutcome::Fatal => return Ok(Next::GameOver),
                }
            }
        };
        Ok(Next::Arrive(target))
    }
}
