use bevy_ecs::component::Component;

/// Playable instrument state attached to an entity.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Instrument {
    pub program: u8,
    pub bank: u8,
    pub playing: bool,
    pub last_sequencer_tick: u32,
    pub lagged_batches: u32,
    pub dropped_batches: u32,
}

impl Instrument {
    pub fn new(program: u8, bank: u8) -> Self {
        Self {
            program,
            bank,
            ..Self::default()
        }
    }

    /// Stop playback and forget sequencer progress. Program and bank stay.
    pub fn clean(&mut self) {
        self.playing = false;
        self.last_sequencer_tick = 0;
        self.lagged_batches = 0;
        self.dropped_batches = 0;
    }
}

/// Present while the instrument interface is open.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ActiveInstrument;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_keeps_program() {
        let mut instrument = Instrument {
            program: 12,
            bank: 1,
            playing: true,
            last_sequencer_tick: 900,
            lagged_batches: 3,
            dropped_batches: 2,
        };
        instrument.clean();
        assert_eq!(instrument, Instrument::new(12, 1));
    }
}
