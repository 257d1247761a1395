use super::class::Class;
use std::collections::BTreeMap;

/// Hand-authored table of which classes are plausibly mistaken for
/// which others, in priority order. Drives distractor generation.
/// Supplied at session construction so it can be swapped out in tests;
/// not required to be symmetric.
#[derive(Debug, Clone)]
pub struct Confusion(BTreeMap<Class, Vec<Class>>);

impl Confusion {
    pub fn confusables(&self, class: Class) -> &[Class] {
        self.0.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<BTreeMap<Class, Vec<Class>>> for Confusion {
    fn from(table: BTreeMap<Class, Vec<Class>>) -> Self {
        Self(table)
    }
}

impl Default for Confusion {
    fn default() -> Self {
        use Class::*;
        Self(BTreeMap::from([
            (Bot, vec![Troll, Agency, Grass, Influencer]),
            (Troll, vec![Bot, Grass, Influencer, Agency]),
            (StateMedia, vec![News, Agency, Fact, Tns]),
            (Agency, vec![Grass, Influencer, News, Bot]),
            (Grass, vec![Troll, Agency, Influencer, News]),
            (Influencer, vec![Grass, News, Agency, Troll]),
            (News, vec![StateMedia, Fact, Influencer, Grass]),
            (Fact, vec![News, StateMedia, Tns, Agency]),
            (Tns, vec![Fact, StateMedia, News, Agency]),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_has_confusables() {
        let table = Confusion::default();
        for class in Class::all().iter().copied() {
            let confusables = table.confusables(class);
            assert!(confusables.len() == 4);
            assert!(!confusables.contains(&class));
        }
    }

    #[test]
    fn unknown_entries_are_empty() {
        let table = Confusion::from(BTreeMap::new());
        assert!(table.confusables(Class::Bot).is_empty());
    }
}
