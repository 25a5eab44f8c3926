use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathItem {
    /// Root definition name, field response key or fragment name
    Name(String),
    /// Position in a list
    Index(usize),
}

/// Semantic location from the root definition to the current node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathItem>);

impl Path {
    pub fn items(&self) -> &[PathItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, item: PathItem) {
        self.0.push(item)
    }

    pub(crate) fn pop(&mut self) -> Option<PathItem> {
        self.0.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            match item {
                PathItem::Name(name) if i == 0 => f.write_str(name)?,
                PathItem::Name(name) => write!(f, ".{name}")?,
                PathItem::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
