//! Click-count toggles.

use serde_json::Value;
use vizdeck_common::ContentNode;
use vizdeck_reactive::{Args, Cell, CellError, CellSpec, Outcome};

/// Shows alternative `n_clicks mod N` of a fixed list in `target.children`.
pub struct Toggle {
    name: &'static str,
    trigger: &'static str,
    target: &'static str,
    alternatives: Vec<Value>,
}

impl Toggle {
    /// `alternatives` must not be empty.
    pub fn new(
        name: &'static str,
        trigger: &'static str,
        target: &'static str,
        alternatives: Vec<ContentNode>,
    ) -> Self {
        Self {
            name,
            trigger,
            target,
            alternatives: alternatives.iter().map(ContentNode::to_value).collect(),
        }
    }

    pub fn period(&self) -> usize {
        self.alternatives.len()
    }
}

impl Cell for Toggle {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new(self.name).input(self.trigger, "n_clicks").output(self.target, "children")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        if self.alternatives.is_empty() {
            return Ok(Outcome::NoUpdate);
        }
        let index = (args.clicks(self.trigger, "n_clicks") % self.period() as u64) as usize;
        Ok(Outcome::emit(vec![self.alternatives[index].clone()]))
    }
}
