use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
struct Label {
    name: String,
    target: usize,
}

/// ## Label memory
///
/// Append-only map from label names to command indexes. Label counts
/// are small, so lookup is a linear scan.
#[derive(Debug, Default)]
pub struct LabelTable {
    labels: Vec<Label>,
}

impl LabelTable {
    pub fn new() -> LabelTable {
        LabelTable::default()
    }

    /// Bind a name to a command index. Names are unique per program.
    pub fn add(&mut self, name: &str, target: usize) -> Result<()> {
        if self.find(name).is_some() {
            return Err(error!(DuplicateLabel; name));
        }
        self.labels.push(Label {
            name: name.to_string(),
            target,
        });
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.labels
            .iter()
            .find(|label| label.name == name)
            .map(|label| label.target)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
