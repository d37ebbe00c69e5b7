use hashbrown::HashMap;
use smallvec::SmallVec;

const INLINE_PARAMS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub value: String,
}

/// Path parameters captured by a lookup, in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: SmallVec<[Param; INLINE_PARAMS]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn push(&mut self, name: &str, value: &str) {
        self.entries.push(Param {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
    }

    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::with_capacity(self.entries.len());
        for p in self.entries.iter() {
            map.insert(p.name.clone(), p.value.clone());
        }
        map
    }
}
