use crate::{NavigationError, Outcome};

/// Win, draw and loss tallies of the games that reached a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counts {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Counts {
    pub fn new(win: u32, draw: u32, loss: u32) -> Self {
        Self { win, draw, loss }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.win += 1,
            Outcome::Draw => self.draw += 1,
            Outcome::Loss => self.loss += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.win + self.draw + self.loss
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of each outcome scaled to 0..=100. Undefined for a node that no game reached.
    pub fn percentages(&self) -> Result<Percentages, NavigationError> {
        let total = self.total();
        if total == 0 {
            return Err(NavigationError::EmptyStatistics);
        }

        let total = total as f32;

        Ok(Percentages {
            win: self.win as f32 * 100.0 / total,
            draw: self.draw as f32 * 100.0 / total,
            loss: self.loss as f32 * 100.0 / total,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentages {
    pub win: f32,
    pub draw: f32,
    pub loss: f32,
}
