use std::collections::VecDeque;
use traffic_generator::RandomSource;

/// Random source replaying fixed unit draws; range draws return `max`.
pub struct ScriptedSource {
    units: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            units: units.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.units.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().expect("scripted source exhausted")
    }

    fn next_in_range(&mut self, _min: i64, max: i64) -> i64 {
        max
    }
}
