//! Turning a line of input into an action.

use cv_core::{Holder, ItemId, LocationId, MessageId, MotionCode, WordClass};
use tracing::debug;

use super::context::WEST_TIP_AT;
use super::{Hint, MSG_OK, Next, Session};
use crate::adversary::{self, Duel};
use crate::error::{EngineError, EngineResult};
use crate::light;
use crate::parser::{Word, parse_line};
use crate::verb::Verb;

const MSG_WEST_TIP: MessageId = MessageId(17);
const MSG_ROD_TIP: MessageId = MessageId(22);
const MSG_ALREADY_CARRYING: MessageId = MessageId(24);
const MSG_NOT_SERIOUS: MessageId = MessageId(25);
const MSG_BIRD_AFRAID: MessageId = MessageId(26);
const MSG_NO_CAGE: MessageId = MessageId(27);
const MSG_NO_LOCK_HERE: MessageId = MessageId(28);
const MSG_SNAKE_DRIVEN_OFF: MessageId = MessageId(30);
const MSG_NO_LOCK: MessageId = MessageId(32);
const MSG_CANNOT_LOCK: MessageId = MessageId(33);
const MSG_ALREADY_LOCKED: MessageId = MessageId(34);
const MSG_NOW_LOCKED: MessageId = MessageId(35);
const MSG_ALREADY_UNLOCKED: MessageId = MessageId(36);
const MSG_NOW_UNLOCKED: MessageId = MessageId(37);
const MSG_LAMP_ON: MessageId = MessageId(39);
const MSG_LAMP_OFF: MessageId = MessageId(40);
const MSG_NOTHING_HAPPENS: MessageId = MessageId(42);
const MSG_NOTHING_TO_ATTACK: MessageId = MessageId(44);
const MSG_BIRD_DEAD: MessageId = MessageId(45);
const MSG_DWARF_KILLED: MessageId = MessageId(47);
const MSG_DWARF_DODGES: MessageId = MessageId(48);
const MSG_KEYS_HAVE_NO_LOCK: MessageId = MessageId(55);
const MSG_DONT_KNOW: MessageId = MessageId(60);
const MSG_WHAT: MessageId = MessageId(61);
const MSG_DONT_UNDERSTAND: MessageId = MessageId(13);
const MSG_WET_FEET: MessageId = MessageId(70);
const MSG_EATEN: MessageId = MessageId(72);
const MSG_BOTTLE_EMPTY: MessageId = MessageId(74);
const MSG_RUB_OTHER: MessageId = MessageId(76);
const MSG_POURED: MessageId = MessageId(77);
const MSG_CANNOT_POUR: MessageId = MessageId(78);

/// Percent chance for each of the two rerolls of the unknown-word reply.
const CONFUSION_CHANCE: u32 = 20;
/// Unknown lines in one room before a hint is considered.
const TROUBLE_LIMIT: u32 = 3;

/// Surface rooms where GRATE means "go to the depression".
const GRATE_FROM_SURFACE: [u16; 3] = [1, 4, 7];

/// Item state for "used up" food and water, and for a struck fissure.
const USED: u8 = 1;

impl Session {
    /// Work out what a line of input means and start acting on it.
    pub(super) fn command(&mut self, line: &str) -> EngineResult<Next> {
        let parsed = parse_line(line, self.data.vocabulary());
        let Some(mut word) = parsed.first else {
            return Ok(self.unknown_word());
        };
        let mut second = parsed.second;

        if word.is("ENTER") {
            if let Some(next) = second.take() {
                if next.is("STREA") || next.is("WATER") {
                    self.say(MSG_WET_FEET);
                    return Ok(Next::Clear);
                }
                word = next;
            }
        }
        if word.is("WEST") {
            self.player.west_count += 1;
            if self.player.west_count == WEST_TIP_AT {
                self.say(MSG_WEST_TIP);
            }
        }

        loop {
            let Some(entry) = word.entry.clone() else {
                return Ok(self.unknown_word());
            };
            match entry.class {
                WordClass::Motion => return Ok(self.motion(MotionCode(entry.code))),
                WordClass::Special => {
                    self.say(MessageId(entry.code));
                    return Ok(Next::Clear);
                }
                WordClass::Verb => {
                    let verb =
                        Verb::from_code(entry.code).ok_or(EngineError::UnknownVerb(entry.code))?;
                    self.context.verb = Some(verb);
                    if let Some(next) = second.take() {
                        word = next;
                        continue;
                    }
                    return match self.context.object {
                        Some(item) => self.transitive(verb, item, &word),
                        None => self.intransitive(verb, &word),
                    };
                }
                WordClass::Object => {
                    let item = ItemId(entry.code);
                    if !self.in_scope(item) {
                        return Ok(self.out_of_scope(item, &word));
                    }
                    self.context.object = Some(item);
                    if let Some(next) = second.take() {
                        word = next;
                        continue;
                    }
                    return match self.context.verb {
                        Some(verb) => self.transitive(verb, item, &word),
                        None => {
                            self.out.line(format!(
                                " WHAT DO YOU WANT TO DO WITH THE {}?",
                                word.text
                            ));
                            Ok(Next::Prompt)
                        }
                    };
                }
            }
        }
    }

    /// True if an object word can refer to something the player can reach.
    fn in_scope(&self, item: ItemId) -> bool {
        self.state.is_reachable(item) || (item == ItemId::DWARF && self.state.dwarves.any_seen())
    }

    fn out_of_scope(&mut self, item: ItemId, word: &Word) -> Next {
        let here = self.state.location;
        if item == ItemId::GRATE {
            if GRATE_FROM_SURFACE.contains(&here.get()) {
                return self.motion(MotionCode::DEPRESSION);
            }
            if here.within(10, LocationId::DWARF_FRONTIER.get()) {
                return self.motion(MotionCode::ENTRANCE);
            }
        }
        self.out.line(format!(" I SEE NO {} HERE.", word.text));
        Next::Clear
    }

    /// Ask the player to finish a command, keeping what they said so far.
    fn what(&mut self, word: &Word) -> Next {
        self.out.line(format!("  {} WHAT?", word.text));
        Next::Prompt
    }

    /// Say the verb's stock reply.
    fn refuse(&mut self, verb: Verb) -> Next {
        if let Some(id) = verb.default_message() {
            self.say(id);
        }
        Next::Clear
    }

    fn reply(&mut self, id: MessageId) -> Next {
        self.say(id);
        Next::Clear
    }

    fn intransitive(&mut self, verb: Verb, word: &Word) -> EngineResult<Next> {
        let here = self.state.location;
        Ok(match verb {
            Verb::Take => {
                let lone = match self.state.items_at(here) {
                    [item] => Some(*item),
                    _ => None,
                };
                match lone {
                    Some(item) if !self.state.dwarves.any_seen() => {
                        self.context.object = Some(item);
                        return self.take(item);
                    }
                    _ => self.what(word),
                }
            }
            Verb::Lock | Verb::Unlock => {
                if here == LocationId::OUTSIDE_GRATE || here == LocationId::BELOW_GRATE {
                    self.context.object = Some(ItemId::GRATE);
                    return self.lock(verb, ItemId::GRATE);
                }
                self.reply(MSG_NO_LOCK_HERE)
            }
            Verb::Nothing => self.reply(MSG_OK),
            Verb::Light => return self.light_on(),
            Verb::Extinguish => return self.light_off(),
            Verb::Walk => self.refuse(verb),
            Verb::Attack => return self.attack(None, word),
            Verb::Drop
            | Verb::Dummy
            | Verb::Strike
            | Verb::Calm
            | Verb::Pour
            | Verb::Eat
            | Verb::Drink
            | Verb::Rub => self.what(word),
        })
    }

    fn transitive(&mut self, verb: Verb, item: ItemId, word: &Word) -> EngineResult<Next> {
        debug!(?verb, %item, "action");
        match verb {
            Verb::Take => self.take(item),
            Verb::Drop => self.drop_item(item),
            Verb::Dummy => Ok(self.unknown_word()),
            Verb::Lock | Verb::Unlock => self.lock(verb, item),
            Verb::Nothing => Ok(self.reply(MSG_OK)),
            Verb::Light => self.light_on(),
            Verb::Extinguish => self.light_off(),
            Verb::Strike => self.strike(item),
            Verb::Calm | Verb::Walk => Ok(self.refuse(verb)),
            Verb::Attack => self.attack(Some(item), word),
            Verb::Pour => self.pour(item),
            Verb::Eat => self.consume(verb, item, ItemId::FOOD, MSG_EATEN),
            Verb::Drink => self.consume(verb, item, ItemId::WATER, MSG_BOTTLE_EMPTY),
            Verb::Rub => Ok(if item == ItemId::LAMP {
                self.refuse(verb)
            } else {
                self.reply(MSG_RUB_OTHER)
            }),
        }
    }

    fn take(&mut self, item: ItemId) -> EngineResult<Next> {
        let here = self.state.location;
        if item == ItemId::KNIFE {
            return Ok(self.reply(MSG_OK));
        }
        if self.state.is_carried(item) {
            return Ok(self.reply(MSG_ALREADY_CARRYING));
        }
        if !self.state.is_at(item, here) || self.data.is_fixed(item) {
            return Ok(self.reply(MSG_NOT_SERIOUS));
        }
        if item == ItemId::BIRD {
            if self.state.is_carried(ItemId::ROD) {
                return Ok(self.reply(MSG_BIRD_AFRAID));
            }
            if !self.state.is_carried(ItemId::CAGE) && !self.state.is_at(ItemId::CAGE, here) {
                return Ok(self.reply(MSG_NO_CAGE));
            }
        }
        self.state.move_item(item, Holder::Carried)?;
        Ok(self.reply(MSG_OK))
    }

    fn drop_item(&mut self, item: ItemId) -> EngineResult<Next> {
        let here = self.state.location;
        if item == ItemId::KNIFE {
            return Ok(self.reply(MSG_OK));
        }
        if !self.state.is_carried(item) {
            return Ok(self.refuse(Verb::Drop));
        }
        if item == ItemId::BIRD
            && here == LocationId::MOUNTAIN_KING
            && self.state.prop(ItemId::SNAKE) != USED
        {
            self.say(MSG_SNAKE_DRIVEN_OFF);
            self.state.set_prop(ItemId::SNAKE, USED)?;
        } else {
            self.say(MSG_OK);
        }
        self.state.move_item(item, Holder::Room(here))?;
        Ok(Next::Clear)
    }

    fn lock(&mut self, verb: Verb, item: ItemId) -> EngineResult<Next> {
        if !self.state.is_reachable(ItemId::KEYS) {
            return Ok(self.refuse(verb));
        }
        if item == ItemId::CAGE {
            return Ok(self.reply(MSG_NO_LOCK));
        }
        if item == ItemId::KEYS {
            return Ok(self.reply(MSG_KEYS_HAVE_NO_LOCK));
        }
        if item != ItemId::GRATE {
            return Ok(self.reply(MSG_CANNOT_LOCK));
        }
        let open = self.state.prop(ItemId::GRATE) != 0;
        let (message, value) = match (verb, open) {
            (Verb::Unlock, true) => return Ok(self.reply(MSG_ALREADY_UNLOCKED)),
            (Verb::Unlock, false) => (MSG_NOW_UNLOCKED, 1),
            (_, false) => return Ok(self.reply(MSG_ALREADY_LOCKED)),
            (_, true) => (MSG_NOW_LOCKED, 0),
        };
        self.say(message);
        self.state.set_prop(ItemId::GRATE, value)?;
        self.state.set_prop(ItemId::GRATE_UNDERSIDE, value)?;
        Ok(Next::Clear)
    }

    fn light_on(&mut self) -> EngineResult<Next> {
        if !self.state.is_reachable(ItemId::LAMP) {
            return Ok(self.refuse(Verb::Light));
        }
        self.state.set_prop(ItemId::LAMP, light::LAMP_ON)?;
        self.player.dark = false;
        Ok(self.reply(MSG_LAMP_ON))
    }

    fn light_off(&mut self) -> EngineResult<Next> {
        if !self.state.is_reachable(ItemId::LAMP) {
            return Ok(self.refuse(Verb::Extinguish));
        }
        self.state.set_prop(ItemId::LAMP, 0)?;
        let room = self.data.require_location(self.state.location)?;
        self.player.dark = !light::is_lit(room, &self.state);
        Ok(self.reply(MSG_LAMP_OFF))
    }

    fn strike(&mut self, item: ItemId) -> EngineResult<Next> {
        if item != ItemId::FISSURE {
            return Ok(self.reply(MSG_NOTHING_HAPPENS));
        }
        self.state.set_prop(ItemId::FISSURE, USED)?;
        self.list_items(self.state.location);
        Ok(Next::Clear)
    }

    fn attack(&mut self, item: Option<ItemId>, word: &Word) -> EngineResult<Next> {
        let here = self.state.location;
        match adversary::duel(&mut self.state.dwarves, self.rng.as_mut()) {
            Duel::Killed => {
                self.say(MSG_DWARF_KILLED);
                return Ok(Next::Arrive(here));
            }
            Duel::Dodged => {
                self.say(MSG_DWARF_DODGES);
                return Ok(Next::Arrive(here));
            }
            Duel::NoDwarf => {}
        }
        Ok(match item {
            None => self.what(word),
            Some(ItemId::SNAKE) => self.refuse(Verb::Attack),
            Some(ItemId::BIRD) => {
                self.say(MSG_BIRD_DEAD);
                self.state.move_item(ItemId::BIRD, Holder::Nowhere)?;
                Next::Clear
            }
            Some(_) => self.reply(MSG_NOTHING_TO_ATTACK),
        })
    }

    /// EAT and DRINK: use up `target` if it is what was named and is still there.
    fn consume(
        &mut self,
        verb: Verb,
        item: ItemId,
        target: ItemId,
        done: MessageId,
    ) -> EngineResult<Next> {
        if item != target
            || !self.state.is_reachable(target)
            || self.state.prop(target) != 0
        {
            return Ok(self.refuse(verb));
        }
        self.state.set_prop(target, USED)?;
        Ok(self.reply(done))
    }

    fn pour(&mut self, item: ItemId) -> EngineResult<Next> {
        if item != ItemId::WATER || self.state.prop(ItemId::WATER) != 0 {
            return Ok(self.reply(MSG_CANNOT_POUR));
        }
        self.state.set_prop(ItemId::WATER, USED)?;
        Ok(self.reply(MSG_POURED))
    }

    /// Reply to a word nobody knows, and offer a hint if the player seems stuck.
    fn unknown_word(&mut self) -> Next {
        let mut reply = MSG_DONT_KNOW;
        if self.rng.chance(CONFUSION_CHANCE) {
            reply = MSG_WHAT;
        }
        if self.rng.chance(CONFUSION_CHANCE) {
            reply = MSG_DONT_UNDERSTAND;
        }
        self.say(reply);
        self.context.trouble += 1;
        if self.context.trouble != TROUBLE_LIMIT {
            return Next::Prompt;
        }

        let here = self.state.location;
        let state = &self.state;
        if here == LocationId::BIRD_CHAMBER
            && state.is_at(ItemId::BIRD, LocationId::BIRD_CHAMBER)
            && state.is_carried(ItemId::ROD)
        {
            return Next::Offer(Hint::Bird);
        }
        if here == LocationId::MOUNTAIN_KING
            && state.prop(ItemId::SNAKE) == 0
            && !state.is_carried(ItemId::BIRD)
        {
            return Next::Offer(Hint::Snake);
        }
        if here == LocationId::OUTSIDE_GRATE && state.prop(ItemId::GRATE) == 0 {
            return Next::Offer(Hint::Grate);
        }
        if state.is_reachable(ItemId::ROD) && self.context.object == Some(ItemId::ROD) {
            self.say(MSG_ROD_TIP);
        }
        Next::Prompt
    }
}
