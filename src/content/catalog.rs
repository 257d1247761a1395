use super::actor::Actor;
use super::card::Card;
use crate::Error;
use std::path::Path;

/// Embedded two-actor catalog, written to disk when no content exists yet.
const MINIMAL: &str = include_str!("minimal.json");

/// Fixed catalog of playable actors plus the class info cards shown
/// during the intro. Validated at load, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    actors: Vec<Actor>,
    cards: Vec<Card>,
}

impl Catalog {
    /// A round cannot be played without at least one actor and each
    /// actor needs at least one clue, so reject bad content up front.
    pub fn new(actors: Vec<Actor>, cards: Vec<Card>) -> Result<Self, Error> {
        if actors.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        for actor in actors.iter() {
            if actor.clues.is_empty() {
                return Err(Error::EmptyCluePool {
                    actor: actor.id.clone(),
                });
            }
        }
        Ok(Self { actors, cards })
    }

    /// Load `actors.json` and `classes.json` from a content directory.
    /// A missing actor file is seeded with the minimal embedded catalog;
    /// missing class cards just disable the intro carousel.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let path = dir.join("actors.json");
        if !path.exists() {
            log::warn!("no actor catalog at {}, seeding minimal one", path.display());
            std::fs::create_dir_all(dir)?;
            std::fs::write(&path, MINIMAL)?;
        }
        let actors = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        let path = dir.join("classes.json");
        let cards = if path.exists() {
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };
        Self::new(actors, cards)
    }

    /// The embedded fallback catalog, no filesystem involved.
    pub fn minimal() -> Self {
        let actors = serde_json::from_str(MINIMAL).expect("embedded catalog parses");
        Self::new(actors, Vec::new()).expect("embedded catalog is valid")
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Class;
    use crate::content::Reliability;

    #[test]
    fn minimal_catalog_is_playable() {
        let catalog = Catalog::minimal();
        assert!(catalog.actors().len() == 2);
        assert!(catalog.actors()[0].id == "BOT_00");
        assert!(catalog.actors()[0].class == Class::Bot);
        assert!(catalog.actors()[1].class == Class::Troll);
        for actor in catalog.actors() {
            assert!(actor.clues.len() == 5);
        }
    }

    #[test]
    fn minimal_bot_leads_with_high_reliability() {
        let catalog = Catalog::minimal();
        let bot = &catalog.actors()[0];
        assert!(bot.clues[0].reliability == Reliability::High);
    }

    #[test]
    fn empty_actor_list_is_rejected() {
        match Catalog::new(Vec::new(), Vec::new()) {
            Err(Error::EmptyCatalog) => {}
            other => panic!("expected EmptyCatalog, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn clueless_actor_is_rejected() {
        let mut actors = Catalog::minimal().actors().to_vec();
        actors[1].clues.clear();
        match Catalog::new(actors, Vec::new()) {
            Err(Error::EmptyCluePool { actor }) => assert!(actor == "TROLL_00"),
            other => panic!("expected EmptyCluePool, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn load_seeds_missing_content_dir() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let catalog = Catalog::load(dir.path()).expect("seed and load");
        assert!(catalog.actors().len() == 2);
        assert!(dir.path().join("actors.json").exists());
        // second load reads the seeded file instead of rewriting it
        let again = Catalog::load(dir.path()).expect("reload");
        assert!(again.actors().len() == 2);
    }
}
