use crate::MAX_DISTRACTORS;
use crate::MIN_OPTIONS;
use crate::content::Class;
use crate::content::Confusion;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// The round's candidate classes, shuffled once at construction.
/// Always contains the target exactly once; elimination may only
/// remove a wrong entry, and only while more than two remain.
#[derive(Debug, Clone)]
pub struct Options(Vec<Class>);

impl Options {
    pub fn build<R: Rng>(target: Class, table: &Confusion, rng: &mut R) -> Self {
        let mut classes = vec![target];
        for &confusable in table.confusables(target).iter().take(MAX_DISTRACTORS) {
            if !classes.contains(&confusable) {
                classes.push(confusable);
            }
        }
        classes.shuffle(rng);
        Self(classes)
    }

    /// Remove one uniformly random option other than the truth.
    /// Returns the removed class, or None when nothing may be removed.
    pub fn eliminate<R: Rng>(&mut self, truth: Class, rng: &mut R) -> Option<Class> {
        if self.0.len() <= MIN_OPTIONS {
            return None;
        }
        let wrongs = self
            .0
            .iter()
            .copied()
            .filter(|c| *c != truth)
            .collect::<Vec<Class>>();
        let removed = wrongs.choose(rng).copied()?;
        self.0.retain(|c| *c != removed);
        Some(removed)
    }

    pub fn classes(&self) -> &[Class] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, class: Class) -> bool {
        self.0.contains(&class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::BTreeMap;

    #[test]
    fn target_present_exactly_once() {
        let table = Confusion::default();
        let ref mut rng = SmallRng::seed_from_u64(0);
        for target in Class::all().iter().copied() {
            let options = Options::build(target, &table, rng);
            let hits = options.classes().iter().filter(|c| **c == target).count();
            assert!(hits == 1);
            assert!(options.len() >= 1);
            assert!(options.len() <= 5);
        }
    }

    #[test]
    fn lonely_class_yields_single_option() {
        let table = Confusion::from(BTreeMap::new());
        let ref mut rng = SmallRng::seed_from_u64(0);
        let options = Options::build(Class::Fact, &table, rng);
        assert!(options.classes() == [Class::Fact]);
    }

    #[test]
    fn duplicate_confusables_are_dropped() {
        let table = Confusion::from(BTreeMap::from([(
            Class::Bot,
            vec![Class::Troll, Class::Troll, Class::Bot, Class::Agency],
        )]));
        let ref mut rng = SmallRng::seed_from_u64(0);
        let options = Options::build(Class::Bot, &table, rng);
        assert!(options.len() == 3);
        assert!(options.contains(Class::Bot));
        assert!(options.contains(Class::Troll));
        assert!(options.contains(Class::Agency));
    }

    #[test]
    fn eliminate_never_removes_truth() {
        let table = Confusion::default();
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..32 {
            let mut options = Options::build(Class::News, &table, rng);
            while let Some(removed) = options.eliminate(Class::News, rng) {
                assert!(removed != Class::News);
            }
            assert!(options.len() == MIN_OPTIONS);
            assert!(options.contains(Class::News));
        }
    }

    #[test]
    fn eliminate_refuses_two_options() {
        let table = Confusion::from(BTreeMap::from([(Class::Bot, vec![Class::Troll])]));
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut options = Options::build(Class::Bot, &table, rng);
        assert!(options.len() == 2);
        assert!(options.eliminate(Class::Bot, rng).is_none());
        assert!(options.len() == 2);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let table = Confusion::default();
        let a = Options::build(Class::Grass, &table, &mut SmallRng::seed_from_u64(42));
        let b = Options::build(Class::Grass, &table, &mut SmallRng::seed_from_u64(42));
        assert!(a.classes() == b.classes());
    }
}
