use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use connect_four_referee::anyhow::{self, bail};
use connect_four_referee::prelude::*;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, filter::LevelFilter, Layer, Registry};

/// Plays a fixed list of outcomes, then fails.
pub struct Scripted {
    name: String,
    outcomes: VecDeque<MoveOutcome>,
}

impl Scripted {
    pub fn columns(name: &str, columns: &[usize]) -> Box<dyn MoveSource> {
        Self::outcomes(name, columns.iter().copied().map(MoveOutcome::Valid))
    }

    pub fn outcomes(
        name: &str,
        outcomes: impl IntoIterator<Item = MoveOutcome>,
    ) -> Box<dyn MoveSource> {
        Box::new(Scripted {
            name: name.to_string(),
            outcomes: outcomes.into_iter().collect(),
        })
    }
}

impl MoveSource for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_move(&mut self, _board: &Board, _side: Side) -> anyhow::Result<MoveOutcome> {
        match self.outcomes.pop_front() {
            Some(outcome) => Ok(outcome),
            None => bail!("{} has no move left", self.name),
        }
    }
}

/// Always plays `outcome` and remembers which side it was asked to play.
pub struct Recorder {
    outcome: MoveOutcome,
    sides: Rc<RefCell<Vec<Side>>>,
}

impl Recorder {
    pub fn new(outcome: MoveOutcome) -> (Box<dyn MoveSource>, Rc<RefCell<Vec<Side>>>) {
        let sides = Rc::new(RefCell::new(vec![]));
        let recorder = Recorder {
            outcome,
            sides: Rc::clone(&sides),
        };
        (Box::new(recorder), sides)
    }
}

impl MoveSource for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn next_move(&mut self, _board: &Board, side: Side) -> anyhow::Result<MoveOutcome> {
        self.sides.borrow_mut().push(side);
        Ok(self.outcome)
    }
}

#[allow(dead_code)]
pub fn init_debug_logger() {
    let format = fmt::format()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_thread_names(true)
        .with_target(false);

    let reg = Registry::default().with(
        fmt::layer()
            .with_test_writer()
            .event_format(format)
            .with_filter(LevelFilter::from_level(Level::DEBUG)),
    );

    let _ = tracing::subscriber::set_global_default(reg);
}
